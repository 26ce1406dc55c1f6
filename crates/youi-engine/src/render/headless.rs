use crate::coords::ColorRgba;
use crate::scene::{DrawCmd, DrawList};

use super::RenderBackend;

/// One presented frame as seen by [`HeadlessBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    /// `None` when the frame was drawn over the previous one.
    pub clear: Option<ColorRgba>,
    pub commands: Vec<DrawCmd>,
}

/// Backend that records frames instead of drawing them.
///
/// Used by tests and by tooling that runs without a window.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    frames: Vec<FrameRecord>,
    pending: Option<FrameRecord>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presented frames, oldest first.
    pub fn frames(&self) -> &[FrameRecord] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&FrameRecord> {
        self.frames.last()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl RenderBackend for HeadlessBackend {
    fn clear(&mut self, color: ColorRgba) {
        if self.pending.is_some() {
            log::warn!("headless: clear() without present(); previous frame dropped");
        }
        self.pending = Some(FrameRecord { clear: Some(color), commands: Vec::new() });
    }

    fn submit(&mut self, list: &DrawList) {
        let frame = self
            .pending
            .get_or_insert_with(|| FrameRecord { clear: None, commands: Vec::new() });
        frame.commands.extend(list.items().iter().map(|item| item.cmd.clone()));
    }

    fn present(&mut self) {
        if let Some(frame) = self.pending.take() {
            log::trace!(
                "headless: frame {} presented with {} commands",
                self.frames.len(),
                frame.commands.len()
            );
            self.frames.push(frame);
        }
    }
}

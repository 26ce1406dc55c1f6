use std::rc::Rc;

use youi_engine::coords::Transform;
use youi_engine::scene::ImageData;
use youi_yuml::AttributeList;

use crate::component::{Component, DrawCtx};
use crate::error::FactoryError;

/// Bitmap stretched over its bounds.
///
/// The file named by `Path` is decoded on the first draw after the path
/// changes. A file that fails to decode draws as an empty quad.
#[derive(Debug, Default)]
pub struct Image {
    path: Option<String>,
    pixels: Option<Rc<ImageData>>,
    needs_load: bool,
    transform: Transform,
}

impl Image {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        let mut image = Self::new();
        image.set_path(path);
        image
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Replace the source file; decoded on the next draw.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = Some(path.into());
        self.pixels = None;
        self.needs_load = true;
    }

    /// Use already decoded pixels instead of a file.
    pub fn set_image(&mut self, image: ::image::RgbaImage) {
        let (width, height) = image.dimensions();
        self.pixels = ImageData::new(width, height, image.into_raw()).map(Rc::new);
        self.needs_load = false;
    }

    pub fn pixels(&self) -> Option<&ImageData> {
        self.pixels.as_deref()
    }

    fn load(&mut self) {
        self.needs_load = false;
        let Some(path) = &self.path else { return };
        match ::image::open(path) {
            Ok(decoded) => {
                let rgba = decoded.to_rgba8();
                let (width, height) = rgba.dimensions();
                self.pixels = ImageData::new(width, height, rgba.into_raw()).map(Rc::new);
                log::debug!("image: decoded {path} ({width}x{height})");
            }
            Err(err) => {
                log::warn!("image: failed to load {path}: {err}");
                self.pixels = None;
            }
        }
    }
}

impl Component for Image {
    fn tag(&self) -> &str {
        "Image"
    }

    fn attributes(&self) -> AttributeList {
        self.path.iter().map(|path| ("Path", path.as_str())).collect()
    }

    fn draw(&mut self, ctx: &mut DrawCtx<'_>) {
        if self.needs_load {
            self.load();
        }
        if ctx.dirty {
            self.transform = Transform::from_bounds(ctx.bounds);
        }
        let source = self.path.as_deref().unwrap_or("<memory>");
        ctx.list.push_image(self.transform, source, self.pixels.clone());
    }
}

pub(super) fn make_image(attrs: &AttributeList) -> Result<Box<dyn Component>, FactoryError> {
    let image = match attrs.get("Path").map(|path| path.as_str()) {
        Some(path) if !path.is_empty() => Image::with_path(path),
        _ => Image::new(),
    };
    Ok(Box::new(image))
}

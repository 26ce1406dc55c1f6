use std::io::Read;

use youi_engine::coords::PixelSize;
use youi_engine::render::RenderBackend;
use youi_engine::scene::DrawList;
use youi_engine::text::{FontMetrics, FontSystem};

use crate::builder::Builder;
use crate::builtin::Page;
use crate::config::FormConfig;
use crate::error::{Error, TreeError};
use crate::registry::Registry;
use crate::tree::{ComponentId, Tree};

/// A component tree bound to a render backend.
///
/// The host calls [`frame`](Self::frame) once per display refresh and
/// [`resize`](Self::resize) when the surface changes size.
#[derive(Debug)]
pub struct Form<B: RenderBackend> {
    tree: Tree,
    root: ComponentId,
    backend: B,
    list: DrawList,
    fonts: Option<FontSystem>,
    config: FormConfig,
    frames: u64,
}

impl<B: RenderBackend> Form<B> {
    /// Wrap an already built tree. Its root must be a [`Page`].
    pub fn new(mut tree: Tree, backend: B, config: FormConfig) -> Result<Self, Error> {
        let root = tree.root().ok_or(TreeError::NoRoot)?;
        if tree.get::<Page>(root).is_err() {
            let tag = tree.component(root)?.tag().to_string();
            return Err(Error::RootNotPage { tag });
        }
        tree.set_policy(config.redraw);
        tree.set_root_size(config.size)?;
        tree.request_repaint();
        Ok(Self {
            tree,
            root,
            backend,
            list: DrawList::new(),
            fonts: None,
            config,
            frames: 0,
        })
    }

    /// Parse, build and wrap a YUML document read from `reader`.
    pub fn load<R: Read>(
        registry: &Registry,
        reader: R,
        backend: B,
        config: FormConfig,
    ) -> Result<Self, Error> {
        let element = youi_yuml::parse_reader(reader)?;
        log::debug!("form: parsed document with {} elements", element.count());
        let tree = Builder::new(registry).build(&element)?;
        Self::new(tree, backend, config)
    }

    /// [`load`](Self::load) from a string.
    pub fn parse(registry: &Registry, src: &str, backend: B, config: FormConfig) -> Result<Self, Error> {
        Self::load(registry, src.as_bytes(), backend, config)
    }

    /// Draw one frame if anything changed. Returns whether a frame was drawn.
    pub fn frame(&mut self) -> bool {
        if !self.tree.should_redraw(self.root) {
            return false;
        }

        // Partial frames paint over what the backend already shows.
        let repaint = self.tree.needs_repaint();
        self.list.clear();
        let fonts = self.fonts.as_ref().map(|fonts| fonts as &dyn FontMetrics);
        let drawn = self.tree.draw(&mut self.list, fonts);

        if repaint {
            self.backend.clear(self.config.clear_color);
        }
        self.backend.submit(&self.list);
        self.backend.present();
        self.frames += 1;

        log::trace!(
            "form: frame {} drew {drawn} components ({} commands)",
            self.frames,
            self.list.len()
        );
        true
    }

    /// Resize the root; every canvas recomputes its children.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), TreeError> {
        self.config.size = PixelSize::new(width, height);
        self.tree.set_root_size(self.config.size)
    }

    pub fn root(&self) -> ComponentId {
        self.root
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Font metrics handed to text components. Invalidates the whole tree so
    /// text is measured again.
    pub fn set_fonts(&mut self, fonts: FontSystem) -> Result<(), TreeError> {
        self.fonts = Some(fonts);
        self.tree.invalidate(self.root)
    }

    pub fn fonts(&self) -> Option<&FontSystem> {
        self.fonts.as_ref()
    }

    /// Frames drawn so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

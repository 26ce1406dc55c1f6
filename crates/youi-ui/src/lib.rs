//! youi UI: a retained component tree built from YUML markup.
//!
//! # Quick start
//!
//! ```rust
//! use youi_ui::prelude::*;
//!
//! let mut registry = Registry::new();
//! register_builtins(&mut registry);
//!
//! let src = r#"
//!     <Page xmlns="https://yuml.example/schema/components/1.0">
//!         <Canvas X="10" Y="10" Width="100" Height="100">
//!             <Image Path="images/hello.png" />
//!         </Canvas>
//!     </Page>
//! "#;
//!
//! let mut form = Form::parse(&registry, src, HeadlessBackend::new(), FormConfig::default()).unwrap();
//! assert!(form.frame());
//! assert!(!form.frame()); // nothing changed
//! ```
//!
//! # Custom components
//!
//! Implement [`Component`](component::Component) and register a factory for
//! its tag:
//!
//! ```rust
//! use youi_ui::prelude::*;
//! use youi_yuml::AttributeList;
//!
//! #[derive(Debug)]
//! struct Spacer;
//!
//! impl Component for Spacer {
//!     fn tag(&self) -> &str { "Spacer" }
//! }
//!
//! fn make_spacer(_: &AttributeList) -> Result<Box<dyn Component>, FactoryError> {
//!     Ok(Box::new(Spacer))
//! }
//!
//! let mut registry = Registry::new();
//! registry.register("urn:my-widgets", "Spacer", make_spacer);
//! ```

pub mod builder;
pub mod builtin;
pub mod component;
pub mod config;
pub mod error;
pub mod form;
pub mod registry;
pub mod tree;

pub use error::{BuildError, Error, FactoryError, TreeError};
pub use form::Form;

/// The types needed to load, drive and extend a component tree.
pub mod prelude {
    pub use crate::builder::Builder;
    pub use crate::builtin::{Canvas, Image, Label, NAMESPACE, Page, register_builtins};
    pub use crate::component::{Component, DrawCtx, Layout, TextHolder};
    pub use crate::config::{FormConfig, RedrawPolicy};
    pub use crate::error::{BuildError, Error, FactoryError, TreeError};
    pub use crate::form::Form;
    pub use crate::registry::{ComponentFactory, Registry};
    pub use crate::tree::{ComponentId, Tree};

    pub use youi_engine::coords::{Bounds, PixelRect, PixelSize, Size};
    pub use youi_engine::render::{HeadlessBackend, RenderBackend};
    pub use youi_engine::scene::{DrawCmd, DrawList};
    pub use youi_engine::text::{FontMetrics, FontSystem};
}

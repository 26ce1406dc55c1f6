//! Attribute model, element tree, and parser for **YUML**, the XML dialect
//! that describes youi component trees.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`attribute`] | `Attribute`, `AttributeList`, `AttributeError` |
//! | [`element`] | `Element` |
//! | [`error`] | `ParseError` |
//! | [`parser`] | `parse_str` / `parse_reader` entry points |
//!
//! # Quick start
//!
//! ```rust
//! use youi_yuml::parse_str;
//!
//! let src = r#"
//!     <Page xmlns="https://yuml.example/schema/components/1.0">
//!         <Canvas X="10" Y="10" Width="100" Height="100" />
//!     </Page>
//! "#;
//!
//! let root = parse_str(src).unwrap();
//! assert_eq!(root.name, "Page");
//! assert_eq!(root.children[0].attributes.get_or("X", "0").as_int(), Ok(10));
//! ```

pub mod attribute;
pub mod element;
pub mod error;
pub mod parser;

pub use attribute::{Attribute, AttributeError, AttributeList};
pub use element::Element;
pub use error::ParseError;
pub use parser::{parse_reader, parse_str};

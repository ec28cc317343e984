//! `tilde-url` — resolves application-relative `~/` URLs in HTML attributes.
//!
//! Given an [`Element`] and a [`UrlResolver`], the [`UrlResolutionEngine`]
//! rewrites URL-bearing attributes (`href`, `src`, `srcset`, ...) whose value
//! starts with `~/`. Plain text values are replaced eagerly. Pre-encoded
//! values become [`HtmlContent`] in which only the resolved application path
//! is escaped, and only when the content is written out.
//!
//! # Quick start
//!
//! ```
//! use tilde_url::{Element, HtmlEscaper, PathBaseResolver, UrlResolutionEngine};
//!
//! let engine = UrlResolutionEngine::new(PathBaseResolver::new("/approot"));
//! let mut img = Element::new("img")
//!     .with_attribute("src", "~/content/logo.png")
//!     .with_attribute("srcset", "~/content/logo.png 1x,~/content/logo@2.png 2x");
//! engine.process(&mut img)?;
//!
//! assert_eq!(
//!     img.to_html(&HtmlEscaper),
//!     r#"<img src="/approot/content/logo.png" srcset="/approot/content/logo.png 1x, /approot/content/logo@2.png 2x">"#
//! );
//! # Ok::<(), tilde_url::ResolutionError>(())
//! ```

pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod marker;
pub mod render;
pub mod resolver;
pub mod srcset;
pub mod types;

pub use config::UrlAttributeConfig;
pub use content::{HtmlContent, HtmlEncoder, HtmlEscaper, Segment};
pub use engine::UrlResolutionEngine;
pub use error::{ResolutionError, Result};
pub use marker::{MARKER, is_eligible_marker};
pub use resolver::{PathBaseResolver, Resolution, UrlResolver};
pub use types::{AttributeValue, Element, ElementAttribute, OtherValue, ValueStyle};

//! Per-element URL resolution.
//!
//! [`UrlResolutionEngine::process`] walks the URL-bearing attributes of one
//! element and rewrites every value that starts with `~/`. Text values are
//! replaced eagerly; pre-encoded values become [`HtmlContent`] whose resolved
//! prefix is escaped only when it is finally written out.

use std::borrow::Cow;

use crate::config::UrlAttributeConfig;
use crate::content::{HtmlContent, HtmlEncoder, HtmlEscaper};
use crate::error::Result;
use crate::resolver::{self, UrlResolver};
use crate::srcset;
use crate::types::{AttributeValue, Element};

/// Rewrites `~/` URLs in element attributes through an injected resolver.
///
/// The engine keeps no state between calls; one instance can serve any
/// number of elements, and is `Send + Sync` whenever `R` and `E` are.
#[derive(Debug, Clone)]
pub struct UrlResolutionEngine<R, E = HtmlEscaper> {
    config: UrlAttributeConfig,
    resolver: R,
    encoder: E,
}

impl<R: UrlResolver> UrlResolutionEngine<R> {
    /// Engine with the HTML default attribute set and [`HtmlEscaper`].
    pub fn new(resolver: R) -> Self {
        Self::with_parts(UrlAttributeConfig::default(), resolver, HtmlEscaper)
    }

    pub fn with_config(config: UrlAttributeConfig, resolver: R) -> Self {
        Self::with_parts(config, resolver, HtmlEscaper)
    }
}

impl<R: UrlResolver, E: HtmlEncoder> UrlResolutionEngine<R, E> {
    pub fn with_parts(config: UrlAttributeConfig, resolver: R, encoder: E) -> Self {
        Self {
            config,
            resolver,
            encoder,
        }
    }

    pub fn config(&self) -> &UrlAttributeConfig {
        &self.config
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Resolve every configured URL attribute of `element`.
    ///
    /// Elements without a tag name are left alone. On a contract violation
    /// the failing attribute keeps its original value; attributes processed
    /// before it stay rewritten.
    pub fn process(&self, element: &mut Element) -> Result<()> {
        let Some(tag) = element.tag_name.as_deref() else {
            log::trace!(target: "tilde_url::engine", "skipping element without tag name");
            return Ok(());
        };
        let names = self.config.attributes_for(tag);
        for name in names {
            self.process_attribute(name, element)?;
        }
        Ok(())
    }

    /// Resolve every attribute of `element` named `name` (case-insensitive).
    pub fn process_attribute(&self, name: &str, element: &mut Element) -> Result<()> {
        let multi = self.config.is_multi_url(name);
        for attribute in element.attributes.iter_mut().filter(|a| a.is_named(name)) {
            if let Some(value) = self.resolve_value(&attribute.value, multi)? {
                log::debug!(
                    target: "tilde_url::engine",
                    "rewrote {}: {:?} -> {:?}",
                    attribute.name,
                    attribute.value,
                    value
                );
                attribute.value = value;
            }
        }
        Ok(())
    }

    /// The replacement for `value`, or `None` if it should stay as is.
    fn resolve_value(&self, value: &AttributeValue, multi: bool) -> Result<Option<AttributeValue>> {
        match value {
            AttributeValue::Text(text) => {
                let resolved = if multi {
                    srcset::resolve_text(&self.resolver, text)?
                } else {
                    resolver::resolve_text(&self.resolver, text)?
                };
                Ok(resolved.map(AttributeValue::Text))
            }
            AttributeValue::Html(content) => {
                let serialized = match content.as_raw_str() {
                    Some(raw) => Cow::Borrowed(raw),
                    None => Cow::Owned(content.to_html_string(&self.encoder)),
                };
                let resolved = if multi {
                    srcset::resolve_html(&self.resolver, &serialized)?
                } else {
                    resolver::resolve_html(&self.resolver, &serialized)?
                };
                match (resolved, serialized) {
                    (Some(resolved), _) => Ok(Some(AttributeValue::Html(resolved))),
                    // Nothing to resolve; freeze composite content so it is not encoded twice.
                    (None, Cow::Owned(html)) => Ok(Some(AttributeValue::Html(HtmlContent::raw(html)))),
                    (None, Cow::Borrowed(_)) => Ok(None),
                }
            }
            AttributeValue::Other(other) => {
                log::trace!(target: "tilde_url::engine", "leaving non-text value {other} untouched");
                Ok(None)
            }
        }
    }
}

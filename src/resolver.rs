//! The injected URL resolver and the adapter that enforces its contract.
//!
//! A resolver turns `~/path` into a concrete URL. The adapter calls it once
//! per detected marker and requires the result to end with `path`, which lets
//! the application prefix be split off and escaped separately from the rest
//! of an already-encoded value.

use crate::content::{HtmlContent, Segment};
use crate::error::{ResolutionError, Result};
use crate::marker::{self, MARKER};

/// Maps an application-relative URL (starting with `~/`) to a concrete URL.
///
/// Any `Fn(&str) -> String` closure is a resolver.
pub trait UrlResolver {
    fn content(&self, path: &str) -> String;
}

impl<F> UrlResolver for F
where
    F: Fn(&str) -> String,
{
    fn content(&self, path: &str) -> String {
        self(path)
    }
}

/// Resolves `~/x` against a fixed mount point such as `/approot/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathBaseResolver {
    path_base: String,
}

impl PathBaseResolver {
    /// `path_base` is normalized to begin and end with a single `/`.
    pub fn new(path_base: &str) -> Self {
        let trimmed = path_base.trim().trim_matches('/');
        let path_base = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };
        Self { path_base }
    }

    pub fn path_base(&self) -> &str {
        &self.path_base
    }
}

impl Default for PathBaseResolver {
    fn default() -> Self {
        Self::new("/")
    }
}

impl UrlResolver for PathBaseResolver {
    fn content(&self, path: &str) -> String {
        match path.strip_prefix(MARKER) {
            Some(rest) => format!("{}{}", self.path_base, rest),
            None => path.to_string(),
        }
    }
}

/// A checked resolver result for one `~/` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Full resolver output.
    pub resolved: String,
    /// The part of the input after `~/`; always a suffix of `resolved`.
    pub remainder: &'a str,
}

impl Resolution<'_> {
    /// The resolver output with the remainder removed, e.g. `/approot/`.
    pub fn application_path(&self) -> &str {
        &self.resolved[..self.resolved.len() - self.remainder.len()]
    }

    /// `[escaped(application_path)] + [remainder verbatim]`, followed by `suffix`.
    pub fn into_html(self, suffix: &str) -> HtmlContent {
        let application_path = self.application_path().to_string();
        HtmlContent::from_segments([
            Segment::Encoded(application_path),
            Segment::Raw(format!("{}{}", self.remainder, suffix)),
        ])
    }
}

/// Invoke `resolver` on `url`, which must start with `~/`, and check that the
/// result still ends with everything after the marker.
pub fn resolve_relative<'a, R: UrlResolver + ?Sized>(
    resolver: &R,
    url: &'a str,
) -> Result<Resolution<'a>> {
    let remainder = url.strip_prefix(MARKER).unwrap_or(url);
    let resolved = resolver.content(url);
    if !resolved.ends_with(remainder) {
        log::warn!(
            target: "tilde_url::resolver",
            "resolver returned {resolved:?} for {url:?}, which does not end with {remainder:?}"
        );
        return Err(ResolutionError::ContractViolation {
            url: url.to_string(),
            resolved,
        });
    }
    log::trace!(target: "tilde_url::resolver", "resolved {url:?} -> {resolved:?}");
    Ok(Resolution {
        resolved,
        remainder,
    })
}

/// Resolve a single-URL text value. `None` when the value has no leading marker.
pub fn resolve_text<R: UrlResolver + ?Sized>(resolver: &R, value: &str) -> Result<Option<String>> {
    let Some(url) = marker::relative_url(value) else {
        return Ok(None);
    };
    Ok(Some(resolve_relative(resolver, url)?.resolved))
}

/// Resolve a single-URL pre-encoded value, deferring the escape of the
/// resolved application path. `None` when the value has no leading marker.
pub fn resolve_html<R: UrlResolver + ?Sized>(
    resolver: &R,
    value: &str,
) -> Result<Option<HtmlContent>> {
    let Some(url) = marker::relative_url(value) else {
        return Ok(None);
    };
    Ok(Some(resolve_relative(resolver, url)?.into_html("")))
}

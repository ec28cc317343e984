//! Pre-encoded HTML content with deferred escaping.
//!
//! An [`HtmlContent`] is an ordered list of segments. [`Segment::Raw`] text is
//! already safe for output and is written verbatim; [`Segment::Encoded`] text
//! is passed through an [`HtmlEncoder`] only when the content is serialized.

use std::fmt;

/// Escapes text for inclusion in HTML output.
pub trait HtmlEncoder {
    /// Append the encoded form of `value` to `out`.
    fn encode(&self, value: &str, out: &mut String);
}

/// Default encoder: escapes `&`, `<`, `>`, `"` and `'`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlEscaper;

impl HtmlEncoder for HtmlEscaper {
    fn encode(&self, value: &str, out: &mut String) {
        out.reserve(value.len());
        for c in value.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(c),
            }
        }
    }
}

/// One piece of an [`HtmlContent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text escaped at serialization time.
    Encoded(String),
    /// Text that is already HTML-safe.
    Raw(String),
}

/// Markup that is safe to emit, possibly with segments still awaiting escape.
///
/// Content is immutable once built. Empty segments are dropped and adjacent
/// raw segments are merged, so a value with a single raw segment is exactly
/// an "already encoded string".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlContent {
    segments: Vec<Segment>,
}

impl HtmlContent {
    /// Content made of one already-encoded string.
    pub fn raw(html: impl Into<String>) -> Self {
        Self::from_segments([Segment::Raw(html.into())])
    }

    /// Content made of one string that still needs escaping.
    pub fn encoded(text: impl Into<String>) -> Self {
        Self::from_segments([Segment::Encoded(text.into())])
    }

    /// Build content from segments in output order.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut merged: Vec<Segment> = Vec::new();
        for segment in segments {
            let (Segment::Raw(text) | Segment::Encoded(text)) = &segment;
            if text.is_empty() {
                continue;
            }
            if let (Some(Segment::Raw(prev)), Segment::Raw(text)) = (merged.last_mut(), &segment) {
                prev.push_str(text);
                continue;
            }
            merged.push(segment);
        }
        Self { segments: merged }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The verbatim markup, if this content has nothing left to escape.
    pub fn as_raw_str(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [] => Some(""),
            [Segment::Raw(s)] => Some(s),
            _ => None,
        }
    }

    /// Serialize into `out`, escaping only the [`Segment::Encoded`] parts.
    pub fn write_to<E: HtmlEncoder + ?Sized>(&self, out: &mut String, encoder: &E) {
        for segment in &self.segments {
            match segment {
                Segment::Encoded(text) => encoder.encode(text, out),
                Segment::Raw(html) => out.push_str(html),
            }
        }
    }

    /// Serialize to a new string. See [`HtmlContent::write_to`].
    pub fn to_html_string<E: HtmlEncoder + ?Sized>(&self, encoder: &E) -> String {
        let mut out = String::new();
        self.write_to(&mut out, encoder);
        out
    }
}

/// Displays with the default [`HtmlEscaper`].
impl fmt::Display for HtmlContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html_string(&HtmlEscaper))
    }
}

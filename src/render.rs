//! Start-tag rendering for [`Element`].
//!
//! Text values are escaped with the supplied encoder, pre-encoded values are
//! written through [`HtmlContent::write_to`](crate::content::HtmlContent::write_to),
//! and each attribute keeps its own [`ValueStyle`].

use crate::content::HtmlEncoder;
use crate::types::{AttributeValue, Element, ElementAttribute, ValueStyle};

impl Element {
    /// Render the element's start tag, e.g. `<img src="/approot/a.png">`.
    ///
    /// An element without a tag name renders as an empty string.
    pub fn to_html<E: HtmlEncoder + ?Sized>(&self, encoder: &E) -> String {
        let Some(tag) = &self.tag_name else {
            return String::new();
        };
        let mut out = String::with_capacity(tag.len() + 2);
        out.push('<');
        out.push_str(tag);
        for attribute in &self.attributes {
            out.push(' ');
            write_attribute(attribute, encoder, &mut out);
        }
        out.push('>');
        out
    }
}

fn write_attribute<E: HtmlEncoder + ?Sized>(attribute: &ElementAttribute, encoder: &E, out: &mut String) {
    out.push_str(&attribute.name);
    let quote = match attribute.style {
        ValueStyle::Minimized => return,
        ValueStyle::DoubleQuotes => Some('"'),
        ValueStyle::SingleQuotes => Some('\''),
        ValueStyle::NoQuotes => None,
    };
    out.push('=');
    if let Some(q) = quote {
        out.push(q);
    }
    match &attribute.value {
        AttributeValue::Text(text) => encoder.encode(text, out),
        AttributeValue::Html(content) => content.write_to(out, encoder),
        AttributeValue::Other(other) => encoder.encode(&other.to_string(), out),
    }
    if let Some(q) = quote {
        out.push(q);
    }
}

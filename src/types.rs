//! Minimal element and attribute model.

use std::fmt;

use crate::content::HtmlContent;

/// A value that is neither text nor markup (booleans, numbers).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OtherValue {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl fmt::Display for OtherValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OtherValue::Bool(b) => write!(f, "{b}"),
            OtherValue::Int(n) => write!(f, "{n}"),
            OtherValue::Float(x) => write!(f, "{x}"),
        }
    }
}

/// The stored value of an attribute.
///
/// Only [`AttributeValue::Text`] and [`AttributeValue::Html`] are candidates
/// for URL resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Unencoded text; escaped when rendered.
    Text(String),
    /// Markup that is already safe to emit.
    Html(HtmlContent),
    Other(OtherValue),
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<HtmlContent> for AttributeValue {
    fn from(content: HtmlContent) -> Self {
        AttributeValue::Html(content)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Other(OtherValue::Bool(b))
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Other(OtherValue::Int(n))
    }
}

impl From<f64> for AttributeValue {
    fn from(x: f64) -> Self {
        AttributeValue::Other(OtherValue::Float(x))
    }
}

/// How an attribute is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueStyle {
    #[default]
    DoubleQuotes,
    SingleQuotes,
    NoQuotes,
    /// Name only, e.g. `<input disabled>`.
    Minimized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementAttribute {
    pub name: String,
    pub value: AttributeValue,
    pub style: ValueStyle,
}

impl ElementAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            style: ValueStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ValueStyle) -> Self {
        self.style = style;
        self
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// An element's tag name and its ordered attributes.
///
/// A `None` tag name marks the element as inert: nothing about it is
/// rewritten or rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag_name: Option<String>,
    pub attributes: Vec<ElementAttribute>,
}

impl Element {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: Some(tag_name.into()),
            attributes: Vec::new(),
        }
    }

    pub fn inert() -> Self {
        Self::default()
    }

    /// Append an attribute with the default quoting. Returns `Self` for chaining.
    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.with_styled_attribute(name, value, ValueStyle::default())
    }

    pub fn with_styled_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
        style: ValueStyle,
    ) -> Self {
        self.attributes
            .push(ElementAttribute::new(name, value).with_style(style));
        self
    }

    /// First attribute whose name matches case-insensitively.
    pub fn attribute(&self, name: &str) -> Option<&ElementAttribute> {
        self.attributes.iter().find(|a| a.is_named(name))
    }

    /// Convenience accessor for the value of [`Element::attribute`].
    pub fn value_of(&self, name: &str) -> Option<&AttributeValue> {
        self.attribute(name).map(|a| &a.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_lookup_is_case_insensitive() {
        let el = Element::new("img").with_attribute("SRC", "~/a.png");
        let attr = el.attribute("src").expect("src attribute");
        assert_eq!(attr.name, "SRC");
        assert_eq!(attr.value, AttributeValue::Text("~/a.png".into()));
    }

    #[test]
    fn default_style_is_double_quotes() {
        let attr = ElementAttribute::new("href", "x");
        assert_eq!(attr.style, ValueStyle::DoubleQuotes);
    }

    #[test]
    fn conversions_pick_the_right_variant() {
        assert!(matches!(AttributeValue::from(true), AttributeValue::Other(OtherValue::Bool(true))));
        assert!(matches!(AttributeValue::from(3_i64), AttributeValue::Other(OtherValue::Int(3))));
        assert!(matches!(AttributeValue::from(HtmlContent::raw("x")), AttributeValue::Html(_)));
        assert!(matches!(AttributeValue::from(String::from("x")), AttributeValue::Text(_)));
    }

    #[test]
    fn inert_element_has_no_tag() {
        let el = Element::inert();
        assert!(el.tag_name.is_none());
        assert!(el.value_of("href").is_none());
    }

    #[test]
    fn other_value_display() {
        assert_eq!(OtherValue::Bool(false).to_string(), "false");
        assert_eq!(OtherValue::Int(-4).to_string(), "-4");
        assert_eq!(OtherValue::Float(1.5).to_string(), "1.5");
    }
}

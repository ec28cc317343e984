//! Which attributes carry URLs.
//!
//! [`UrlAttributeConfig::default`] covers the URL-bearing attributes of
//! standard HTML elements. Hosts can extend it with the builder methods or
//! load a replacement from JSON or YAML.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ResolutionError, Result};

const ELEMENT_DEFAULTS: &[(&str, &[&str])] = &[
    ("a", &["href"]),
    ("applet", &["archive"]),
    ("area", &["href"]),
    ("audio", &["src"]),
    ("base", &["href"]),
    ("blockquote", &["cite"]),
    ("button", &["formaction"]),
    ("del", &["cite"]),
    ("embed", &["src"]),
    ("form", &["action"]),
    ("html", &["manifest"]),
    ("iframe", &["src"]),
    ("img", &["src", "srcset"]),
    ("input", &["src", "formaction"]),
    ("ins", &["cite"]),
    ("link", &["href"]),
    ("menuitem", &["icon"]),
    ("object", &["archive", "data"]),
    ("q", &["cite"]),
    ("script", &["src"]),
    ("source", &["src", "srcset"]),
    ("track", &["src"]),
    ("video", &["src", "poster"]),
];

/// Attribute-name sets that drive URL resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlAttributeConfig {
    /// Tag name to the URL-bearing attributes of that element.
    pub elements: BTreeMap<String, Vec<String>>,
    /// Attributes resolved on every element (e.g. `itemid`).
    pub global_attributes: Vec<String>,
    /// Attributes whose value is a comma-separated candidate list.
    pub multi_url_attributes: Vec<String>,
}

impl Default for UrlAttributeConfig {
    fn default() -> Self {
        let elements = ELEMENT_DEFAULTS
            .iter()
            .map(|(tag, attrs)| {
                (
                    tag.to_string(),
                    attrs.iter().map(|a| a.to_string()).collect(),
                )
            })
            .collect();
        Self {
            elements,
            global_attributes: vec!["itemid".to_string()],
            multi_url_attributes: vec!["srcset".to_string()],
        }
    }
}

impl UrlAttributeConfig {
    /// A configuration that resolves nothing.
    pub fn empty() -> Self {
        Self {
            elements: BTreeMap::new(),
            global_attributes: Vec::new(),
            multi_url_attributes: Vec::new(),
        }
    }

    /// Load from JSON. Missing fields fall back to the HTML defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from YAML. Missing fields fall back to the HTML defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject blank tag or attribute names.
    pub fn validate(&self) -> Result<()> {
        for (tag, attrs) in &self.elements {
            if tag.trim().is_empty() {
                return Err(ResolutionError::Config("empty element name".to_string()));
            }
            if let Some(blank) = attrs.iter().find(|a| a.trim().is_empty()) {
                return Err(ResolutionError::Config(format!(
                    "empty attribute name {blank:?} for element '{tag}'"
                )));
            }
        }
        let mut others = self.global_attributes.iter().chain(&self.multi_url_attributes);
        if others.any(|a| a.trim().is_empty()) {
            return Err(ResolutionError::Config("empty attribute name".to_string()));
        }
        Ok(())
    }

    /// Add URL attributes for `tag`. Returns `Self` for chaining.
    pub fn with_element(mut self, tag: &str, attributes: &[&str]) -> Self {
        let entry = self.elements.entry(tag.to_ascii_lowercase()).or_default();
        entry.extend(attributes.iter().map(|a| a.to_string()));
        self
    }

    pub fn with_global_attribute(mut self, name: &str) -> Self {
        self.global_attributes.push(name.to_string());
        self
    }

    pub fn with_multi_url_attribute(mut self, name: &str) -> Self {
        self.multi_url_attributes.push(name.to_string());
        self
    }

    /// Attributes to resolve on `tag`: element-specific ones first, then
    /// globals. Case-insensitive duplicates are listed once.
    pub fn attributes_for<'a>(&'a self, tag: &str) -> Vec<&'a str> {
        let specific = self
            .elements
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case(tag))
            .flat_map(|(_, attrs)| attrs.iter());

        let mut names: Vec<&str> = Vec::new();
        for name in specific.chain(&self.global_attributes) {
            if !names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
                names.push(name);
            }
        }
        names
    }

    pub fn is_multi_url(&self, attribute: &str) -> bool {
        self.multi_url_attributes
            .iter()
            .any(|a| a.eq_ignore_ascii_case(attribute))
    }
}

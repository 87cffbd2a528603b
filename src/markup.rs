//! Markup contract between the page and the controller.
//!
//! Filter buttons and texture cards are found by a shared class marker. Each
//! card holds an image sub-element and a preview sub-element.

use serde::{Deserialize, Serialize};

/// Class markers and selectors the controller looks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markup {
    /// Class shared by every filter button
    pub filter_class: String,
    /// Class toggled on the selected filter button
    pub active_class: String,
    /// Class shared by every texture card
    pub card_class: String,
    /// Selector for the image inside a card
    pub image_selector: String,
    /// Class of the preview surface inside a card
    pub preview_class: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            filter_class: "filter".to_string(),
            active_class: "active".to_string(),
            card_class: "texture-card".to_string(),
            image_selector: "img".to_string(),
            preview_class: "texture-preview".to_string(),
        }
    }
}

impl Markup {
    /// CSS selector matching every filter button.
    pub fn filter_selector(&self) -> String {
        format!(".{}", self.filter_class)
    }

    /// CSS selector matching every texture card.
    pub fn card_selector(&self) -> String {
        format!(".{}", self.card_class)
    }

    /// CSS selector matching the preview inside a card.
    pub fn preview_selector(&self) -> String {
        format!(".{}", self.preview_class)
    }
}

/// Format an image source as a CSS `url("...")` value.
pub fn css_url(src: &str) -> String {
    let mut out = String::with_capacity(src.len() + 7);
    out.push_str("url(\"");
    for ch in src.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push_str("\")");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selectors() {
        let markup = Markup::default();
        assert_eq!(markup.filter_selector(), ".filter");
        assert_eq!(markup.card_selector(), ".texture-card");
        assert_eq!(markup.preview_selector(), ".texture-preview");
        assert_eq!(markup.image_selector, "img");
        assert_eq!(markup.active_class, "active");
    }

    #[test]
    fn test_css_url_plain() {
        assert_eq!(
            css_url("http://localhost:9000/textures/oak.jpg"),
            "url(\"http://localhost:9000/textures/oak.jpg\")"
        );
    }

    #[test]
    fn test_css_url_escapes_quotes() {
        assert_eq!(css_url(r#"a"b\c.png"#), r#"url("a\"b\\c.png")"#);
    }

    #[test]
    fn test_partial_markup_uses_defaults() {
        let markup: Markup = serde_json::from_str(r#"{"card_class": "tile"}"#).unwrap();
        assert_eq!(markup.card_selector(), ".tile");
        assert_eq!(markup.filter_class, "filter");
    }
}

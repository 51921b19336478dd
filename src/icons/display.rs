//! Inline rendering of a resolved icon with decorative styling

use serde::{Deserialize, Serialize};

use super::model::Icon;

/// Options a display field carries; all of them are optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Free-form CSS length such as `4px`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
}

impl DisplayOptions {
    /// Inline CSS declarations for the options that are set
    pub fn style(&self) -> String {
        let mut declarations = Vec::new();
        if let Some(color) = set(&self.background_color) {
            declarations.push(format!("background-color: {}", color));
        }
        if let Some(color) = set(&self.border_color) {
            declarations.push(format!("border: 1px solid {}", color));
        }
        if let Some(padding) = set(&self.padding) {
            declarations.push(format!("padding: {}", padding));
        }
        declarations.join("; ")
    }
}

fn set(option: &Option<String>) -> Option<&str> {
    option.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Wrap raw SVG markup in a styled inline container.
///
/// The markup itself is passed through untouched.
pub fn render_inline(svg: &str, options: &DisplayOptions) -> String {
    let style = options.style();
    if style.is_empty() {
        format!("<span class=\"custom-svg-icon\">{}</span>", svg)
    } else {
        format!(
            "<span class=\"custom-svg-icon\" style=\"{}\">{}</span>",
            escape_attribute(&style),
            svg
        )
    }
}

/// Render a looked-up icon; a value that resolved to nothing renders as `None`
pub fn render_icon(icon: Option<&Icon>, options: &DisplayOptions) -> Option<String> {
    icon.map(|icon| render_inline(&icon.svg, options))
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_options() {
        let html = render_inline("<svg></svg>", &DisplayOptions::default());
        assert_eq!(html, "<span class=\"custom-svg-icon\"><svg></svg></span>");
    }

    #[test]
    fn test_render_with_all_options() {
        let options = DisplayOptions {
            background_color: Some("#fff".to_string()),
            border_color: Some("red".to_string()),
            padding: Some("4px".to_string()),
        };
        let html = render_inline("<svg/>", &options);
        assert_eq!(
            html,
            "<span class=\"custom-svg-icon\" style=\"background-color: #fff; border: 1px solid red; padding: 4px\"><svg/></span>"
        );
    }

    #[test]
    fn test_blank_options_are_skipped_and_values_escaped() {
        let options = DisplayOptions {
            background_color: Some("  ".to_string()),
            border_color: None,
            padding: Some("2px\"><script>".to_string()),
        };
        let html = render_inline("<svg/>", &options);
        assert!(html.contains("padding: 2px&quot;&gt;&lt;script&gt;"));
        assert!(!html.contains("background-color"));
    }

    #[test]
    fn test_unresolved_value_renders_nothing() {
        assert_eq!(render_icon(None, &DisplayOptions::default()), None);

        let icon = Icon {
            key: "home".to_string(),
            label: "home".to_string(),
            value: "home".to_string(),
            svg: "<svg/>".to_string(),
            file_id: "f1".to_string(),
        };
        assert_eq!(
            render_icon(Some(&icon), &DisplayOptions::default()).as_deref(),
            Some("<span class=\"custom-svg-icon\"><svg/></span>")
        );
    }

    #[test]
    fn test_options_use_camel_case_keys() {
        let options: DisplayOptions = serde_json::from_str(
            r##"{"backgroundColor": "#000", "borderColor": null, "padding": "8px"}"##,
        )
        .unwrap();
        assert_eq!(options.background_color.as_deref(), Some("#000"));
        assert_eq!(options.border_color, None);
        assert_eq!(options.padding.as_deref(), Some("8px"));
    }
}

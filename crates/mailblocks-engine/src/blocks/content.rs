use serde::{Deserialize, Serialize};

/// Minimum height the editor draws a spacer at, so tiny spacers stay clickable
pub const MIN_SPACER_DISPLAY_HEIGHT: u32 = 10;

/// Horizontal alignment of block content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_css(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// Horizontal rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DividerBlock {
    /// Line thickness in pixels
    pub height: u32,
    pub color: String,
    /// Space above and below the line, in pixels
    pub margin: u32,
}

impl Default for DividerBlock {
    fn default() -> Self {
        Self {
            height: 1,
            color: "#e5e7eb".to_string(),
            margin: 16,
        }
    }
}

/// Empty vertical space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpacerBlock {
    /// Height in pixels
    pub height: u32,
    pub background_color: String,
}

impl SpacerBlock {
    /// Height used when drawing the spacer in the editor
    pub fn display_height(&self) -> u32 {
        self.height.max(MIN_SPACER_DISPLAY_HEIGHT)
    }
}

impl Default for SpacerBlock {
    fn default() -> Self {
        Self {
            height: 24,
            background_color: "transparent".to_string(),
        }
    }
}

/// A single figure in a stats row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatItem {
    pub value: String,
    pub label: String,
}

impl StatItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Row of highlighted figures with labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsBlock {
    pub title: Option<String>,
    pub items: Vec<StatItem>,
    pub accent_color: String,
    pub background_color: String,
}

impl Default for StatsBlock {
    fn default() -> Self {
        Self {
            title: None,
            items: vec![
                StatItem::new("1,024", "Subscribers"),
                StatItem::new("48%", "Open rate"),
                StatItem::new("12%", "Click rate"),
            ],
            accent_color: "#2563eb".to_string(),
            background_color: "#f9fafb".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadingBlock {
    pub text: String,
    /// 1 to 3; anything else is clamped when rendering
    pub level: u8,
    pub align: Align,
    pub color: String,
}

impl HeadingBlock {
    pub fn level(&self) -> u8 {
        self.level.clamp(1, 3)
    }

    /// Font size in pixels for the clamped level
    pub fn font_size(&self) -> u32 {
        match self.level() {
            1 => 28,
            2 => 22,
            _ => 18,
        }
    }
}

impl Default for HeadingBlock {
    fn default() -> Self {
        Self {
            text: "Heading".to_string(),
            level: 1,
            align: Align::Left,
            color: "#111827".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextBlock {
    /// Plain text; newlines become line breaks
    pub text: String,
    pub align: Align,
    pub color: String,
    pub font_size: u32,
}

impl Default for TextBlock {
    fn default() -> Self {
        Self {
            text: "Write something...".to_string(),
            align: Align::Left,
            color: "#374151".to_string(),
            font_size: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonBlock {
    pub label: String,
    pub href: String,
    pub background_color: String,
    pub text_color: String,
    pub align: Align,
}

impl Default for ButtonBlock {
    fn default() -> Self {
        Self {
            label: "Click me".to_string(),
            href: "https://example.com".to_string(),
            background_color: "#2563eb".to_string(),
            text_color: "#ffffff".to_string(),
            align: Align::Center,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageBlock {
    pub src: String,
    pub alt: String,
    /// Rendered width in pixels; `None` fills the container
    pub width: Option<u32>,
    /// Optional link wrapping the image
    pub href: Option<String>,
    pub align: Align,
}

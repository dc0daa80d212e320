use loandoc_types::Color;
use serde::{Deserialize, Serialize};

/// Colours shared by the HTML and PDF renderers so both exports look alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Title bar fill and brand text.
    pub accent: Color,
    /// Text drawn on the accent fill.
    pub on_accent: Color,
    /// Section header band fill.
    pub band_fill: Color,
    pub band_text: Color,
    pub label: Color,
    pub value: Color,
    pub rule: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::rgb(0x1e, 0x3a, 0x8a),
            on_accent: Color::WHITE,
            band_fill: Color::rgb(0xe8, 0xee, 0xfc),
            band_text: Color::rgb(0x1e, 0x3a, 0x8a),
            label: Color::rgb(0x6b, 0x72, 0x80),
            value: Color::rgb(0x11, 0x18, 0x27),
            rule: Color::rgb(0xd1, 0xd5, 0xdb),
            muted: Color::rgb(0x9c, 0xa3, 0xaf),
        }
    }
}

/// Get PDF font name with bold suffix
pub fn get_styled_font_name(base_name: &str, bold: bool) -> String {
    if bold {
        format!("{}-Bold", base_name)
    } else {
        base_name.to_string()
    }
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Maps a section icon tag to the glyph shown before the section title in HTML.
pub fn icon_glyph(tag: &str) -> &'static str {
    match tag {
        "user" => "\u{1F464}",
        "car" => "\u{1F697}",
        "wallet" => "\u{1F4B0}",
        "bank" => "\u{1F3E6}",
        "shield" => "\u{1F6E1}",
        "receipt" => "\u{1F9FE}",
        "calendar" => "\u{1F4C5}",
        "file" => "\u{1F4C4}",
        _ => "",
    }
}

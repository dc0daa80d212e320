//! Text measurement for the standard Type1 Helvetica faces.
//!
//! Widths are the Adobe AFM advance widths (1/1000 em) for the printable
//! ASCII range; everything else uses a representative width.

use crate::layout::FontRole;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const ELLIPSIS: &str = "...";

fn ascii_width(c: char, font: FontRole) -> u16 {
    let table = match font {
        FontRole::Regular => &HELVETICA,
        FontRole::Bold => &HELVETICA_BOLD,
    };
    table[c as usize - 32]
}

fn char_units(c: char, font: FontRole) -> u32 {
    match c {
        ' '..='~' => ascii_width(c, font) as u32,
        // Drawn as "Rs." (see `to_win_ansi`).
        '₹' => "Rs.".chars().map(|c| ascii_width(c, font) as u32).sum(),
        '—' | '…' | '‰' => 1000,
        '•' => 350,
        _ => 556,
    }
}

/// Width of `text` in points at `size`.
pub fn text_width(text: &str, size: f32, font: FontRole) -> f32 {
    let units: u32 = text.chars().map(|c| char_units(c, font)).sum();
    units as f32 * size / 1000.0
}

/// Greedy word wrap into at most `max_lines` lines of `max_width` points.
///
/// Words longer than a line are broken between characters. Text that does not
/// fit in `max_lines` is clipped and the last line ends in an ellipsis.
pub fn wrap_text(text: &str, max_width: f32, size: f32, font: FontRole, max_lines: usize) -> Vec<String> {
    if max_lines == 0 || text.trim().is_empty() {
        return Vec::new();
    }
    let fits = |s: &str| text_width(s, size, font) <= max_width;

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if fits(&candidate) {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        // Hard-break words wider than a whole line.
        for c in word.chars() {
            current.push(c);
            if !fits(&current) && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(c);
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            while !last.is_empty() && !fits(&format!("{}{}", last, ELLIPSIS)) {
                last.pop();
            }
            let trimmed = last.trim_end().to_string();
            *last = format!("{}{}", trimmed, ELLIPSIS);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_known_widths() {
        // "Hi" = 722 + 222 units.
        assert!((text_width("Hi", 10.0, FontRole::Regular) - 9.44).abs() < 1e-4);
        assert!(text_width("W", 10.0, FontRole::Bold) > text_width("i", 10.0, FontRole::Bold));
        assert!(text_width("abc", 9.0, FontRole::Bold) > text_width("abc", 9.0, FontRole::Regular));
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_text("Arjun Mehta", 120.0, 9.0, FontRole::Bold, 2), vec!["Arjun Mehta"]);
    }

    #[test]
    fn long_text_wraps_within_width() {
        let text = "Plot 4, Near Hanuman Mandir, Civil Lines, Sector 12";
        let lines = wrap_text(text, 110.0, 9.0, FontRole::Bold, 5);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 9.0, FontRole::Bold) <= 110.0, "{line}");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn overflow_is_clipped_with_ellipsis() {
        let text = "word ".repeat(80);
        let lines = wrap_text(&text, 100.0, 9.0, FontRole::Bold, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("..."));
        assert!(text_width(&lines[1], 9.0, FontRole::Bold) <= 100.0);
    }

    #[test]
    fn unbroken_tokens_are_split_by_character() {
        let token = "X".repeat(60);
        let lines = wrap_text(&token, 50.0, 9.0, FontRole::Regular, 10);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), token);
    }

    #[test]
    fn blank_text_has_no_lines() {
        assert!(wrap_text("   ", 100.0, 9.0, FontRole::Regular, 2).is_empty());
        assert!(wrap_text("abc", 100.0, 9.0, FontRole::Regular, 0).is_empty());
    }
}

//! Text measurement and clipping (Plotters has no built-in text measuring).

/// Heuristic: estimate pixel width of a single character.
///
/// CJK ideographs, kana and full-width forms take roughly a full em; Latin
/// text averages about 0.6 em.
fn estimate_char_width_px(ch: char, font_px: u32) -> f32 {
    let wide = matches!(ch as u32,
        0x1100..=0x115F
        | 0x2E80..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x1F300..=0x1FAFF);
    (font_px as f32) * if wide { 1.0 } else { 0.60 }
}

/// Heuristic: estimate pixel width of text.
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    text.chars()
        .map(|ch| estimate_char_width_px(ch, font_px))
        .sum::<f32>()
        .ceil() as u32
}

/// Longest prefix of `text` that fits into `max_px`. Single-line text
/// drawn into a rectangle is clipped, not ellipsized.
pub fn clip_to_width(text: &str, font_px: u32, max_px: u32) -> &str {
    let mut width = 0.0f32;
    for (idx, ch) in text.char_indices() {
        width += estimate_char_width_px(ch, font_px);
        if width.ceil() as u32 > max_px {
            return &text[..idx];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cjk_is_wider_than_latin() {
        assert_eq!(estimate_text_width_px("ab", 10), 12);
        assert_eq!(estimate_text_width_px("项目", 10), 20);
        assert_eq!(estimate_text_width_px("", 10), 0);
    }

    #[test]
    fn clip_keeps_whole_chars() {
        assert_eq!(clip_to_width("Name1", 10, 100), "Name1");
        assert_eq!(clip_to_width("Name1", 10, 13), "Na");
        assert_eq!(clip_to_width("项目名称", 10, 25), "项目");
        assert_eq!(clip_to_width("x", 10, 0), "");
    }
}

mod flashcards;
mod home;
mod quiz;
mod summary;

pub use flashcards::draw_flashcards;
pub use home::{draw_home, MODE_MENU};
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Styled key hint for the help footers.
pub(crate) fn hint(key: &str, action: &str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(" {}  ", action)),
    ]
}

/// Char-aware truncation; the bank is mostly CJK text, so byte slicing is
/// not an option.
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("短句", 10), "短句");
    }

    #[test]
    fn test_truncate_long_cjk_string() {
        let s = "项目管理知识体系指南是项目管理的标准";
        let out = truncate(s, 8);
        assert_eq!(out.chars().count(), 8);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate("12345", 5), "12345");
    }
}

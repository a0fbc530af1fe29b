use crate::session::FlashcardSession;
use crate::ui::hint;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_flashcards(f: &mut Frame, session: &FlashcardSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(f.area());

    let card = session.current_card();
    let header_text = format!(
        "记忆卡片 {} / {} - {}",
        session.current_index + 1,
        session.cards.len(),
        card.category
    );
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let (title, body) = if session.revealed {
        let mut text = Text::default();
        if let Some(mnemonic) = &card.mnemonic {
            text.push_line(Line::from(Span::styled(
                "口诀:",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(mnemonic.as_str()));
            text.push_line(Line::from(""));
        }
        if let Some(explanation) = &card.explanation {
            text.push_line(Line::from(Span::styled(
                "解析:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(explanation.as_str()));
        }
        ("背面", text)
    } else {
        ("正面", Text::from(card.question.as_str()))
    };

    let face = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(face, chunks[1]);

    let mut spans = Vec::new();
    spans.extend(hint("Enter", "Flip"));
    spans.extend(hint("↑/↓", "Navigate"));
    spans.extend(hint("Esc", "Home"));
    let help = Paragraph::new(vec![Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

use crate::session::QuizSession;
use crate::ui::{hint, truncate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary(f: &mut Frame, session: &QuizSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("练习结束")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let mut text = Text::default();
    text.push_line(Line::from(format!(
        "共 {} 题   答对 {}   答错 {}",
        session.questions.len(),
        session.correct_count(),
        session.wrong_count()
    )));
    text.push_line(Line::from(""));

    for (i, question) in session.questions.iter().enumerate() {
        let marker = match session.results.get(i) {
            Some(Some(true)) => "[✓]",
            Some(Some(false)) => "[✗]",
            _ => "[ ]",
        };
        text.push_line(Line::from(format!(
            "{} {}. {}",
            marker,
            i + 1,
            truncate(&question.question, 40)
        )));
    }

    let summary = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, chunks[1]);

    let mut spans = Vec::new();
    spans.extend(hint("r", "Restart"));
    spans.extend(hint("m", "Home"));
    spans.extend(hint("q", "Quit"));
    let help = Paragraph::new(vec![Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

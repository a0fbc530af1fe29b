use crate::session::QuizSession;
use crate::ui::hint;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let question = session.current_question();
    let header_label = if session.is_review() { "拾遗模式" } else { "进度" };
    let header_text = format!(
        "{} {} / {}",
        header_label,
        session.current_index + 1,
        session.questions.len()
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

    let prompt = Paragraph::new(Text::from(question.question.as_str()))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(question.category.as_str()),
        );
    f.render_widget(prompt, chunks[1]);

    let correct_letter = question.correct_answer.trim().to_uppercase();
    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let is_selected = session.selected == Some(i);
            let style = if session.showing_result {
                let is_this_correct = opt.contains(question.correct_answer.trim())
                    || opt.letter() == correct_letter;
                if is_this_correct {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else if is_selected {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::DarkGray)
                }
            } else if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(opt.to_string()).style(style)
        })
        .collect();

    let options = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("选项"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(options, chunks[2]);

    let footer: Vec<Line> = if session.showing_result {
        let result_span = match session.last_correct {
            Some(true) => Span::styled("回答正确", Style::default().fg(Color::Green)),
            _ => Span::styled(
                format!("正确答案: {}", question.correct_answer),
                Style::default().fg(Color::Red),
            ),
        };
        let mut spans = vec![result_span, Span::from("   ")];
        spans.extend(hint("Enter", "Next"));
        spans.extend(hint("Esc", "Exit"));
        vec![Line::from(spans)]
    } else {
        let mut spans = Vec::new();
        spans.extend(hint("↑/↓", "Select"));
        spans.extend(hint("Enter", "Submit"));
        spans.extend(hint("Esc", "Exit"));
        vec![Line::from(spans)]
    };
    let help = Paragraph::new(footer)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let area = f.area();
    let width = 44.min(area.width);
    let height = 5.min(area.height);
    let popup = ratatui::layout::Rect::new(
        (area.width.saturating_sub(width)) / 2,
        (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    f.render_widget(Clear, popup);

    let mut spans = Vec::new();
    spans.extend(hint("y", "Leave"));
    spans.extend(hint("n", "Stay"));
    let text = vec![
        Line::from("退出练习? 本次未提交的进度不会保存。"),
        Line::from(""),
        Line::from(spans),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("确认"));
    f.render_widget(dialog, popup);
}

use crate::models::AppMode;
use crate::stats::CompletionStats;
use crate::ui::hint;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Home-screen mode menu, in display order.
pub const MODE_MENU: [(AppMode, &str); 5] = [
    (AppMode::PracticeAll, "顺序练习 · 全部题目"),
    (AppMode::PracticeChoice, "专项练习 · 单选题"),
    (AppMode::PracticeJudgment, "专项练习 · 判断题"),
    (AppMode::ReviewErrors, "拾遗 · 错题回顾"),
    (AppMode::Flashcards, "记忆卡片 · 简答题"),
];

pub fn draw_home(f: &mut Frame, stats: &CompletionStats, selected_index: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(7),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("项目管理 · 每日精进")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let stats_lines = vec![
        Line::from(format!("完成度 {}%", stats.percentage)),
        Line::from(format!(
            "已练 {}   答对 {}   待修 {}",
            stats.answered_count, stats.correct_count, stats.wrong_count
        )),
    ];
    let stats_block = Paragraph::new(stats_lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("进度"));
    f.render_widget(stats_block, chunks[1]);

    let items: Vec<ListItem> = MODE_MENU
        .iter()
        .enumerate()
        .map(|(i, (mode, label))| {
            let mut style = if i == selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            // Grey out review mode when there is nothing to review.
            if *mode == AppMode::ReviewErrors && stats.wrong_count == 0 {
                style = style.fg(Color::DarkGray);
            }
            ListItem::new(format!("{}. {}", i + 1, label)).style(style)
        })
        .collect();

    let menu = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("选择模式"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(menu, chunks[2]);

    let mut spans = Vec::new();
    spans.extend(hint("↑/↓", "Navigate"));
    spans.extend(hint("Enter", "Select"));
    spans.extend(hint("1-5", "Jump"));
    spans.extend(hint("q", "Quit"));
    let help = Paragraph::new(vec![Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

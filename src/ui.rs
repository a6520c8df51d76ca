use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let size = frame.size();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)].as_ref())
        .split(size);

    let mut state = ListState::default();
    if !app.is_empty() {
        state.select(Some(app.cursor()));
    }

    let list_items: Vec<ListItem> = app
        .items()
        .iter()
        .map(|branch| {
            let marker = if branch.selected { "[x]" } else { "[ ]" };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(&branch.choice.name, Style::default().fg(Color::Yellow)),
            ];
            if let Some(age) = branch.age {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format_age(age),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if let Some(summary) = branch.summary() {
                spans.push(Span::raw("  "));
                spans.push(Span::raw(summary));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(
        "{} {} / {} selected",
        app.title(),
        app.selected_count(),
        app.total_count()
    );

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, vertical[0], &mut state);

    let help_line = "up/down or j/k: move  space: toggle  a: toggle all  enter: confirm  q: cancel";
    let status_line = app
        .message()
        .map(ToString::to_string)
        .unwrap_or_else(|| "Selected branches are deleted locally; remotes are untouched.".to_string());

    let status_block = Paragraph::new(vec![Line::from(help_line), Line::from(status_line)])
        .block(Block::default().title("Status").borders(Borders::ALL));

    frame.render_widget(status_block, vertical[1]);
}

/// Rounds to the largest whole unit so the list stays narrow ("3days ago", "5h ago").
pub fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    let rounded = if secs >= DAY {
        secs - secs % DAY
    } else if secs >= HOUR {
        secs - secs % HOUR
    } else if secs >= MINUTE {
        secs - secs % MINUTE
    } else {
        secs
    };
    humantime::format_duration(Duration::from_secs(rounded)).to_string() + " ago"
}

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::Config;
use crate::i18n::{Locale, TranslationKey};
use crate::models::ScheduleEntry;
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};

/// The Program tab: a day header with completion progress, then the day's
/// entries in the store's (date, time) order.
pub fn render_program_list(
    f: &mut Frame,
    area: Rect,
    entries: &[&ScheduleEntry],
    selected_date: &str,
    list_state: &mut ListState,
    config: &Config,
    locale: Locale,
) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);
    let highlight_fg = get_contrast_text_color(highlight_bg);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    // Header: long-form date plus "n of m completed (p%)"
    let completed = entries.iter().filter(|e| e.completed).count();
    let total = entries.len();
    let rate = if total > 0 {
        (completed as f64 / total as f64 * 100.0).round() as u16
    } else {
        0
    };
    let header_lines = vec![
        Line::from(Span::styled(
            locale.format_date_str(selected_date),
            Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{}: {} {} {} {} ({}%)",
                locale.t(TranslationKey::TodaysProgress),
                completed,
                locale.t(TranslationKey::Of),
                total,
                locale.t(TranslationKey::Completed),
                rate
            ),
            Style::default().fg(fg_color),
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(locale.t(TranslationKey::ProgramTitle))
                .style(Style::default().fg(fg_color).bg(bg_color)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color));
    f.render_widget(header, chunks[0]);

    if entries.is_empty() {
        let empty = Paragraph::new(locale.t(TranslationKey::NoEntriesForDay))
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(fg_color).bg(bg_color));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let marker = if entry.completed { "✓" } else { "·" };
            let base_style = if entry.completed {
                Style::default()
                    .fg(ratatui::style::Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(fg_color)
            };

            let mut spans = vec![
                Span::styled(format!("{} ", marker), Style::default().fg(fg_color)),
                Span::styled(format!("{}  ", entry.time), base_style.add_modifier(Modifier::BOLD)),
                Span::styled(entry.title.clone(), base_style),
            ];
            if let Some(description) = &entry.description {
                spans.push(Span::styled(
                    format!("  {}", description),
                    Style::default().fg(ratatui::style::Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(fg_color).bg(bg_color))
        .highlight_style(Style::default().fg(highlight_fg).bg(highlight_bg));

    f.render_stateful_widget(list, chunks[1], list_state);
}

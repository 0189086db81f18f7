use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::Config;
use crate::i18n::{Locale, TranslationKey};
use crate::models::{Priority, Task};
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

/// The Tasks tab: pending tasks first, completed after, insertion order
/// within each section.
pub fn render_task_list(
    f: &mut Frame,
    area: Rect,
    tasks: &[&Task],
    list_state: &mut ListState,
    config: &Config,
    locale: Locale,
) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);
    let highlight_fg = get_contrast_text_color(highlight_bg);

    let completed = tasks.iter().filter(|t| t.completed).count();
    let title = format!(
        "{} ({} {} {} {})",
        locale.t(TranslationKey::TasksTitle),
        completed,
        locale.t(TranslationKey::Of),
        tasks.len(),
        locale.t(TranslationKey::Completed),
    );

    if tasks.is_empty() {
        let empty = Paragraph::new(locale.t(TranslationKey::NoTasks))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(locale.t(TranslationKey::TasksTitle)),
            )
            .style(Style::default().fg(fg_color).bg(bg_color));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let checkbox = if task.completed { "[x]" } else { "[ ]" };
            let base_style = if task.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(fg_color)
            };

            let mut spans = vec![
                Span::styled(format!("{} ", checkbox), Style::default().fg(fg_color)),
                Span::styled(
                    format!("({}) ", locale.priority_label(task.priority)),
                    Style::default().fg(priority_color(task.priority)),
                ),
                Span::styled(task.title.clone(), base_style),
            ];
            if let Some(due) = &task.due_date {
                spans.push(Span::styled(
                    format!("  {} {}", locale.t(TranslationKey::Due), due),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(fg_color).bg(bg_color))
        .highlight_style(Style::default().fg(highlight_fg).bg(highlight_bg));

    f.render_stateful_widget(list, area, list_state);
}

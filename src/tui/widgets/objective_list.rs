use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph};

use crate::Config;
use crate::i18n::{Locale, TranslationKey};
use crate::models::Objective;
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};

const BAR_WIDTH: usize = 10;

fn progress_bar(progress: u8) -> String {
    let filled = (progress as usize * BAR_WIDTH) / 100;
    let mut bar = String::with_capacity(BAR_WIDTH);
    for i in 0..BAR_WIDTH {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

/// The Objectives tab: active objectives first with inline progress bars,
/// completed after, and a gauge with the mean progress at the bottom.
pub fn render_objective_list(
    f: &mut Frame,
    area: Rect,
    objectives: &[&Objective],
    avg_progress: u8,
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
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    let completed = objectives.iter().filter(|o| o.completed).count();
    let title = format!(
        "{} ({} {} {} {})",
        locale.t(TranslationKey::ObjectivesTitle),
        completed,
        locale.t(TranslationKey::Of),
        objectives.len(),
        locale.t(TranslationKey::Completed),
    );

    if objectives.is_empty() {
        let empty = Paragraph::new(locale.t(TranslationKey::NoObjectives))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(locale.t(TranslationKey::ObjectivesTitle)),
            )
            .style(Style::default().fg(fg_color).bg(bg_color));
        f.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = objectives
            .iter()
            .map(|objective| {
                let title_style = if objective.completed {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(fg_color).add_modifier(Modifier::BOLD)
                };

                let first = Line::from(vec![
                    Span::styled(objective.title.clone(), title_style),
                    Span::styled(
                        format!("  ({})", locale.category_label(objective.category)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                let second = Line::from(vec![
                    Span::styled(
                        format!("  {} {:>3}%", progress_bar(objective.progress), objective.progress),
                        Style::default().fg(if objective.completed {
                            Color::Green
                        } else {
                            fg_color
                        }),
                    ),
                    Span::styled(
                        format!(
                            "  {}: {}",
                            locale.t(TranslationKey::TargetDate),
                            objective.target_date
                        ),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                ListItem::new(vec![first, second])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(fg_color).bg(bg_color))
            .highlight_style(Style::default().fg(highlight_fg).bg(highlight_bg));

        f.render_stateful_widget(list, chunks[0], list_state);
    }

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(locale.t(TranslationKey::AverageProgress)),
        )
        .gauge_style(Style::default().fg(highlight_bg).bg(bg_color))
        .percent(avg_progress.min(100) as u16);
    f.render_widget(gauge, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_fill() {
        assert_eq!(progress_bar(0), "░░░░░░░░░░");
        assert_eq!(progress_bar(50), "█████░░░░░");
        assert_eq!(progress_bar(100), "██████████");
    }
}

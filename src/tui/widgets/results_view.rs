use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::Config;
use crate::i18n::{Locale, TranslationKey};
use crate::models::{DailyResult, DailyStats};
use crate::tui::widgets::color::parse_color;

fn stars(rating: u8) -> String {
    let rating = rating.min(5) as usize;
    "★".repeat(rating) + &"☆".repeat(5 - rating)
}

/// The Results tab: live statistics over the current state, then the saved
/// end-of-day snapshot if one exists.
pub fn render_results_view(
    f: &mut Frame,
    area: Rect,
    stats: &DailyStats,
    result: Option<&DailyResult>,
    config: &Config,
    locale: Locale,
) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);

    let label_style = Style::default().fg(fg_color).add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!("{}:", locale.t(TranslationKey::TodaysSummary)),
            label_style,
        )),
        Line::from(Span::styled(
            format!(
                "  {}: {}/{} ({:.0}%)",
                locale.t(TranslationKey::TasksDone),
                stats.tasks_completed,
                stats.total_tasks,
                stats.task_completion_rate
            ),
            Style::default().fg(fg_color),
        )),
        Line::from(Span::styled(
            format!(
                "  {}: {}/{} ({:.0}%)",
                locale.t(TranslationKey::ProgramDone),
                stats.program_completed,
                stats.total_program,
                stats.program_completion_rate
            ),
            Style::default().fg(fg_color),
        )),
        Line::from(Span::styled(
            format!(
                "  {}: {}%",
                locale.t(TranslationKey::ObjectivesAvg),
                stats.avg_objective_progress
            ),
            Style::default().fg(fg_color),
        )),
        Line::default(),
    ];

    match result {
        Some(saved) => {
            lines.push(Line::from(Span::styled(
                format!("{}:", locale.t(TranslationKey::SavedResult)),
                label_style,
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", locale.format_date_str(&saved.date)),
                dim_style,
            )));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}: ", locale.t(TranslationKey::OverallRating)),
                    Style::default().fg(fg_color),
                ),
                Span::styled(stars(saved.rating), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("  {}", locale.rating_label(saved.rating)),
                    Style::default().fg(fg_color),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "  {}: {}/{} · {}: {}%",
                    locale.t(TranslationKey::TasksDone),
                    saved.tasks_completed,
                    saved.total_tasks,
                    locale.t(TranslationKey::ObjectivesAvg),
                    saved.objectives_progress
                ),
                Style::default().fg(fg_color),
            )));
            if let Some(notes) = &saved.notes {
                lines.push(Line::from(Span::styled(
                    format!("  {}: {}", locale.t(TranslationKey::NotesLabel), notes),
                    Style::default().fg(fg_color),
                )));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                locale.t(TranslationKey::NoResultYet),
                dim_style,
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(locale.t(TranslationKey::ResultsTitle)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(9), "★★★★★"); // clamped
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::Config;
use crate::i18n::{Locale, TranslationKey};
use crate::models::{DailyResolution, Mood};
use crate::tui::widgets::color::parse_color;

fn mood_color(mood: Mood) -> Color {
    match mood {
        Mood::Excellent => Color::Green,
        Mood::Good => Color::LightGreen,
        Mood::Neutral => Color::Yellow,
        Mood::Poor => Color::Red,
    }
}

/// The Resolution tab in view mode: the saved resolution with mood and
/// reflection, or an empty-state hint.
pub fn render_resolution_view(
    f: &mut Frame,
    area: Rect,
    resolution: Option<&DailyResolution>,
    config: &Config,
    locale: Locale,
) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);

    let mut lines: Vec<Line> = Vec::new();

    match resolution {
        Some(saved) => {
            lines.push(Line::from(Span::styled(
                locale.format_date_str(&saved.date),
                Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("{}:", locale.t(TranslationKey::TodaysResolution)),
                Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                saved.resolution.clone(),
                Style::default().fg(fg_color),
            )));
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", locale.t(TranslationKey::MoodLabel)),
                    Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    locale.mood_label(saved.mood),
                    Style::default().fg(mood_color(saved.mood)),
                ),
            ]));
            if let Some(reflection) = &saved.reflection {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    format!("{}:", locale.t(TranslationKey::ReflectionLabel)),
                    Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    reflection.clone(),
                    Style::default().fg(fg_color),
                )));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                locale.t(TranslationKey::NoResolutionYet),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(locale.t(TranslationKey::ResolutionTitle)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::Config;
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};

/// One-line status bar: a highlighted status message when one is active,
/// otherwise as many key hints as fit, separated by bullets.
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    message: Option<&String>,
    key_hints: &[String],
    config: &Config,
) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);

    let max_width = area.width as usize;

    let (content, style) = if let Some(msg) = message {
        let msg_fg = get_contrast_text_color(highlight_bg);
        let mut content = msg.clone();
        if content.chars().count() > max_width {
            content = content.chars().take(max_width.saturating_sub(3)).collect::<String>() + "...";
        }
        (
            content,
            Style::default()
                .fg(msg_fg)
                .bg(highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            fit_hints(key_hints, max_width),
            Style::default().fg(fg_color).bg(bg_color),
        )
    };

    let paragraph = Paragraph::new(content).style(style);
    f.render_widget(paragraph, area);
}

/// Join hints with " • " until the line is full; an ellipsis marks dropped
/// hints.
fn fit_hints(key_hints: &[String], max_width: usize) -> String {
    let separator = " • ";
    let mut text = String::new();

    for (i, hint) in key_hints.iter().enumerate() {
        let added = if i == 0 {
            hint.chars().count()
        } else {
            separator.chars().count() + hint.chars().count()
        };
        if text.chars().count() + added > max_width {
            if text.chars().count() + 3 <= max_width {
                text.push_str("...");
            }
            break;
        }
        if i > 0 {
            text.push_str(separator);
        }
        text.push_str(hint);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_hints_truncates_with_ellipsis() {
        let hints = vec!["q: Quit".to_string(), "n: New".to_string(), "e: Edit".to_string()];
        assert_eq!(fit_hints(&hints, 80), "q: Quit • n: New • e: Edit");

        let short = fit_hints(&hints, 14);
        assert!(short.chars().count() <= 14);
        assert!(short.ends_with("..."));
    }
}

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::Config;
use crate::i18n::{Locale, TranslationKey};
use crate::models::ScheduleEntry;
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};

/// Modal confirmation before a program entry is deleted. `selection` is
/// 0 = Yes, 1 = No.
pub fn render_confirm_delete(
    f: &mut Frame,
    area: Rect,
    entry: &ScheduleEntry,
    selection: usize,
    config: &Config,
    locale: Locale,
) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);
    let highlight_fg = get_contrast_text_color(highlight_bg);

    let popup = popup_area(area, 50, 7);
    f.render_widget(Clear, popup);

    let selected = Style::default()
        .fg(highlight_fg)
        .bg(highlight_bg)
        .add_modifier(Modifier::BOLD);
    let unselected = Style::default().fg(fg_color);

    let lines = vec![
        Line::from(Span::styled(
            format!("{} {}", entry.time, entry.title),
            Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("  {}  ", locale.t(TranslationKey::Yes)),
                if selection == 0 { selected } else { unselected },
            ),
            Span::raw("   "),
            Span::styled(
                format!("  {}  ", locale.t(TranslationKey::No)),
                if selection == 1 { selected } else { unselected },
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(locale.t(TranslationKey::DeleteEntryTitle))
                .title_alignment(Alignment::Center)
                .style(Style::default().fg(fg_color).bg(bg_color)),
        )
        .alignment(Alignment::Center)
        .style(Style::default().fg(fg_color).bg(bg_color));

    f.render_widget(paragraph, popup);
}

/// Centered rect: percentage width, fixed height in rows.
fn popup_area(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::Config;
use crate::i18n::{Locale, TranslationKey};
use crate::tui::widgets::color::parse_color;
use crate::utils::format_key_binding_for_display;

pub fn render_help(f: &mut Frame, area: Rect, config: &Config, locale: Locale) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);

    // Centered popup, following the ratatui popup example
    let popup_area = popup_area(area, 60, 70);
    f.render_widget(Clear, popup_area);

    let help_text = build_help_text(config, locale);

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(locale.t(TranslationKey::HelpTitle))
                .title_alignment(Alignment::Center)
                .style(Style::default().fg(fg_color).bg(bg_color)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

fn build_help_text(config: &Config, locale: Locale) -> String {
    let bindings = &config.key_bindings;
    let mut text = String::new();

    text.push_str(&format!(
        "  {} / {}, {}-{}: {}\n",
        format_key_binding_for_display(&bindings.tab_left),
        format_key_binding_for_display(&bindings.tab_right),
        format_key_binding_for_display(&bindings.tab_1),
        format_key_binding_for_display(&bindings.tab_5),
        locale.t(TranslationKey::HintSwitchTabs)
    ));
    text.push_str(&format!(
        "  {} / {}: {}\n",
        format_key_binding_for_display(&bindings.list_up),
        format_key_binding_for_display(&bindings.list_down),
        locale.t(TranslationKey::HintNavigate)
    ));
    text.push_str(&format!(
        "  {} / {}: {}\n",
        format_key_binding_for_display(&bindings.prev_day),
        format_key_binding_for_display(&bindings.next_day),
        locale.t(TranslationKey::HintDay)
    ));
    text.push_str(&format!(
        "  {}: {}\n",
        format_key_binding_for_display(&bindings.today),
        locale.t(TranslationKey::HintToday)
    ));
    text.push('\n');

    text.push_str(&format!(
        "  {}: {}\n",
        format_key_binding_for_display(&bindings.new),
        locale.t(TranslationKey::HintNew)
    ));
    text.push_str(&format!(
        "  {}: {}\n",
        format_key_binding_for_display(&bindings.edit),
        locale.t(TranslationKey::HintEdit)
    ));
    text.push_str(&format!(
        "  {}: {}\n",
        format_key_binding_for_display(&bindings.delete),
        locale.t(TranslationKey::HintDelete)
    ));
    text.push_str(&format!(
        "  {}: {}\n",
        format_key_binding_for_display(&bindings.toggle_done),
        locale.t(TranslationKey::HintToggle)
    ));
    text.push_str(&format!(
        "  {} / {}: {}\n",
        format_key_binding_for_display(&bindings.progress_down),
        format_key_binding_for_display(&bindings.progress_up),
        locale.t(TranslationKey::HintProgress)
    ));
    text.push('\n');

    text.push_str(&format!(
        "  {}: {}\n",
        format_key_binding_for_display(&bindings.save),
        locale.t(TranslationKey::HintSave)
    ));
    text.push_str(&format!(
        "  Tab / Enter: {}\n",
        locale.t(TranslationKey::HintNextField)
    ));
    text.push_str(&format!("  Esc: {}\n", locale.t(TranslationKey::HintCancel)));
    text.push('\n');

    text.push_str(&format!(
        "  {}: {}\n",
        format_key_binding_for_display(&bindings.quit),
        locale.t(TranslationKey::HintQuit)
    ));
    text.push_str(&format!(
        "  {}: {}\n",
        format_key_binding_for_display(&bindings.help),
        locale.t(TranslationKey::HintCloseHelp)
    ));

    text
}

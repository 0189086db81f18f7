use ratatui::Frame;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

use crate::i18n::TranslationKey;
use crate::tui::app::{Mode, Tab};
use crate::tui::widgets::{
    color::parse_color,
    confirm_delete::render_confirm_delete,
    form::render_form,
    help::render_help,
    objective_list::render_objective_list,
    program_list::render_program_list,
    resolution_view::render_resolution_view,
    results_view::render_results_view,
    status_bar::render_status_bar,
    tabs::render_tabs,
    task_list::render_task_list,
};
use crate::tui::{App, Layout};
use crate::utils::format_key_binding_for_display;

pub fn render(f: &mut Frame, app: &mut App, layout: &Layout) {
    let locale = app.locale();
    let active_theme = app.config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);

    // Outer border with the application name centered in the top edge
    let outer_block = Block::default()
        .borders(Borders::ALL)
        .title("Dayplan")
        .title_alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().fg(fg_color).bg(bg_color));
    f.render_widget(outer_block, f.area());

    render_tabs(f, layout.tabs_area, app.ui.current_tab, &app.config, locale);

    // Main pane: the open form in create mode, the current tab otherwise.
    // Help mode shows the tab content with the popup overlaid after.
    if app.ui.mode == Mode::Create {
        if let Some(form) = &app.form.form {
            render_form(f, layout.main_area, form, &app.config, locale);
        }
    } else {
        match app.ui.current_tab {
            Tab::Program => {
                let entries = app.entries_for_selected_date();
                let selected_date = app.ui.selected_date.clone();
                let mut list_state = app.ui.list_state.clone();
                render_program_list(
                    f,
                    layout.main_area,
                    &entries,
                    &selected_date,
                    &mut list_state,
                    &app.config,
                    locale,
                );
                app.ui.list_state = list_state;
            }
            Tab::Tasks => {
                let tasks = app.display_tasks();
                let mut list_state = app.ui.list_state.clone();
                render_task_list(f, layout.main_area, &tasks, &mut list_state, &app.config, locale);
                app.ui.list_state = list_state;
            }
            Tab::Resolution => {
                render_resolution_view(
                    f,
                    layout.main_area,
                    app.store.resolution(),
                    &app.config,
                    locale,
                );
            }
            Tab::Objectives => {
                let objectives = app.display_objectives();
                let avg = app.store.stats().avg_objective_progress;
                let mut list_state = app.ui.list_state.clone();
                render_objective_list(
                    f,
                    layout.main_area,
                    &objectives,
                    avg,
                    &mut list_state,
                    &app.config,
                    locale,
                );
                app.ui.list_state = list_state;
            }
            Tab::Results => {
                let stats = app.store.stats();
                render_results_view(
                    f,
                    layout.main_area,
                    &stats,
                    app.store.daily_result(),
                    &app.config,
                    locale,
                );
            }
        }
    }

    // Overlays render after the normal content
    if app.ui.mode == Mode::Help {
        render_help(f, f.area(), &app.config, locale);
    }

    if let Some(entry) = &app.modals.delete_confirmation {
        render_confirm_delete(
            f,
            f.area(),
            entry,
            app.modals.delete_modal_selection,
            &app.config,
            locale,
        );
    }

    let key_hints = get_key_hints(app);
    render_status_bar(
        f,
        layout.status_area,
        app.status.message.as_ref(),
        &key_hints,
        &app.config,
    );
}

fn get_key_hints(app: &App) -> Vec<String> {
    let bindings = &app.config.key_bindings;
    let locale = app.locale();
    let hint = |binding: &str, key: TranslationKey| {
        format!("{}: {}", format_key_binding_for_display(binding), locale.t(key))
    };

    if app.modals.delete_confirmation.is_some() {
        return vec![
            format!("←/→: {}", locale.t(TranslationKey::HintNavigate)),
            hint(&bindings.select, TranslationKey::Yes),
            format!("Esc: {}", locale.t(TranslationKey::HintCancel)),
        ];
    }

    match app.ui.mode {
        Mode::Help => vec![hint(&bindings.help, TranslationKey::HintCloseHelp)],
        Mode::Create => vec![
            format!("Tab/Enter: {}", locale.t(TranslationKey::HintNextField)),
            format!("←/→: {}", locale.t(TranslationKey::HintCycleValue)),
            hint(&bindings.save, TranslationKey::HintSave),
            format!("Esc: {}", locale.t(TranslationKey::HintCancel)),
        ],
        Mode::View => {
            let mut hints = vec![hint(&bindings.quit, TranslationKey::HintQuit)];
            match app.ui.current_tab {
                Tab::Program => {
                    hints.push(hint(&bindings.new, TranslationKey::HintNew));
                    hints.push(hint(&bindings.edit, TranslationKey::HintEdit));
                    hints.push(hint(&bindings.delete, TranslationKey::HintDelete));
                    hints.push(hint(&bindings.toggle_done, TranslationKey::HintToggle));
                    hints.push(format!(
                        "{}/{}: {}",
                        format_key_binding_for_display(&bindings.prev_day),
                        format_key_binding_for_display(&bindings.next_day),
                        locale.t(TranslationKey::HintDay)
                    ));
                }
                Tab::Tasks => {
                    hints.push(hint(&bindings.new, TranslationKey::HintNew));
                    hints.push(hint(&bindings.toggle_done, TranslationKey::HintToggle));
                }
                Tab::Resolution => {
                    hints.push(hint(&bindings.edit, TranslationKey::HintEdit));
                }
                Tab::Objectives => {
                    hints.push(hint(&bindings.new, TranslationKey::HintNew));
                    hints.push(format!(
                        "{}/{}: {}",
                        format_key_binding_for_display(&bindings.progress_down),
                        format_key_binding_for_display(&bindings.progress_up),
                        locale.t(TranslationKey::HintProgress)
                    ));
                }
                Tab::Results => {
                    hints.push(hint(&bindings.edit, TranslationKey::HintEdit));
                }
            }
            hints.push(hint(&bindings.help, TranslationKey::HintHelp));
            hints
        }
    }
}

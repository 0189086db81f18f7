use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    size as terminal_size,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::time::Duration;

use crate::models::{Category, Mood, Priority};
use crate::tui::App;
use crate::tui::app::{
    Mode, ObjectiveField, PlannerForm, ResolutionField, ResultField, Tab, TaskField,
};
use crate::tui::error::TuiError;
use crate::tui::layout::Layout;
use crate::tui::render::render;
use crate::tui::widgets::input::Input;
use crate::utils::{has_primary_modifier, parse_key_binding};

/// Guard that ensures terminal state is restored even on panic.
/// If the terminal is left in raw mode or the alternate screen, the user's
/// shell becomes unusable.
struct TerminalGuard {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl TerminalGuard {
    fn new() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        Ok(Self {
            raw_mode_enabled: true,
            alternate_screen_enabled: true,
        })
    }

    /// Manually restore terminal state on normal exit. After this the guard
    /// does nothing on drop.
    fn restore(&mut self) -> Result<(), TuiError> {
        if self.raw_mode_enabled {
            disable_raw_mode()?;
            self.raw_mode_enabled = false;
        }
        if self.alternate_screen_enabled {
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.alternate_screen_enabled = false;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Ignore errors here, this is already a cleanup path
        if self.raw_mode_enabled {
            let _ = disable_raw_mode();
        }
        if self.alternate_screen_enabled {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
}

pub fn run_event_loop(mut app: App) -> Result<(), TuiError> {
    // Check terminal size before entering the alternate screen so the error
    // message lands in the normal terminal
    let (width, height) = terminal_size().map_err(TuiError::IoError)?;
    let min_width_with_border = Layout::MIN_WIDTH + 2;
    let min_height_with_border = Layout::MIN_HEIGHT + 2;

    if width < min_width_with_border || height < min_height_with_border {
        return Err(TuiError::RenderError(format!(
            "Terminal size too small. Current: {}x{}, Minimum required: {}x{}. Please resize your terminal window.",
            width, height, min_width_with_border, min_height_with_border
        )));
    }

    let mut guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    loop {
        app.check_status_message_timeout();

        terminal.draw(|f| {
            let layout = Layout::calculate(f.area());
            render(f, &mut app, &layout);
        })?;

        // Poll with a timeout so status messages expire without input
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(&mut app, key) {
                    break;
                }
            }
        }
    }

    guard.restore()?;
    Ok(())
}

/// Compare a key event against a configured binding string. Bindings that
/// fail to parse never match; the config is user-edited and a typo should
/// not take a key away from the other bindings.
fn binding_matches(binding: &str, key: &KeyEvent) -> bool {
    match parse_key_binding(binding) {
        Ok(parsed) => {
            parsed.key_code == key.code
                && parsed.requires_ctrl == has_primary_modifier(key.modifiers)
        }
        Err(_) => false,
    }
}

/// Dispatch a key press. Returns true when the application should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // An open delete confirmation captures all input
    if app.modals.delete_confirmation.is_some() {
        handle_delete_modal_key(app, key);
        return false;
    }

    match app.ui.mode {
        Mode::Help => {
            handle_help_key(app, key);
            false
        }
        Mode::Create => {
            handle_form_key(app, key);
            false
        }
        Mode::View => handle_view_key(app, key),
    }
}

fn handle_delete_modal_key(app: &mut App, key: KeyEvent) {
    let select_binding = app.config.key_bindings.select.clone();

    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            app.modals.delete_modal_selection = 1 - app.modals.delete_modal_selection;
        }
        KeyCode::Esc => app.cancel_delete(),
        KeyCode::Char('y') => app.confirm_delete(),
        KeyCode::Char('n') => app.cancel_delete(),
        _ if binding_matches(&select_binding, &key) => {
            if app.modals.delete_modal_selection == 0 {
                app.confirm_delete();
            } else {
                app.cancel_delete();
            }
        }
        _ => {}
    }
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    let help_binding = app.config.key_bindings.help.clone();
    if key.code == KeyCode::Esc || binding_matches(&help_binding, &key) {
        app.ui.mode = Mode::View;
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let save_binding = app.config.key_bindings.save.clone();
    if binding_matches(&save_binding, &key) {
        app.submit_form();
        return;
    }

    let Some(form) = app.form.form.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Tab | KeyCode::Enter | KeyCode::Down => form_next_field(form),
        KeyCode::BackTab | KeyCode::Up => form_prev_field(form),
        KeyCode::Left => {
            if !form_cycle_selector(form, -1) {
                if let Some(input) = form_current_input(form) {
                    input.move_left();
                }
            }
        }
        KeyCode::Right => {
            if !form_cycle_selector(form, 1) {
                if let Some(input) = form_current_input(form) {
                    input.move_right();
                }
            }
        }
        KeyCode::Home => {
            if let Some(input) = form_current_input(form) {
                input.move_home();
            }
        }
        KeyCode::End => {
            if let Some(input) = form_current_input(form) {
                input.move_end();
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = form_current_input(form) {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            if let Some(input) = form_current_input(form) {
                input.delete();
            }
        }
        KeyCode::Char(c) if !has_primary_modifier(key.modifiers) => {
            if let Some(input) = form_current_input(form) {
                input.insert_char(c);
            }
        }
        _ => {}
    }
}

fn handle_view_key(app: &mut App, key: KeyEvent) -> bool {
    let bindings = app.config.key_bindings.clone();

    if binding_matches(&bindings.quit, &key) {
        return true;
    }

    if binding_matches(&bindings.help, &key) {
        app.ui.mode = Mode::Help;
    } else if binding_matches(&bindings.tab_left, &key) {
        app.switch_tab(app.ui.current_tab.prev());
    } else if binding_matches(&bindings.tab_right, &key) {
        app.switch_tab(app.ui.current_tab.next());
    } else if binding_matches(&bindings.tab_1, &key) {
        app.switch_tab(Tab::Program);
    } else if binding_matches(&bindings.tab_2, &key) {
        app.switch_tab(Tab::Tasks);
    } else if binding_matches(&bindings.tab_3, &key) {
        app.switch_tab(Tab::Resolution);
    } else if binding_matches(&bindings.tab_4, &key) {
        app.switch_tab(Tab::Objectives);
    } else if binding_matches(&bindings.tab_5, &key) {
        app.switch_tab(Tab::Results);
    } else if binding_matches(&bindings.list_up, &key) || key.code == KeyCode::Up {
        app.move_selection_up();
    } else if binding_matches(&bindings.list_down, &key) || key.code == KeyCode::Down {
        app.move_selection_down();
    } else if binding_matches(&bindings.new, &key) {
        app.open_form_for_new();
    } else if binding_matches(&bindings.edit, &key) {
        app.open_form_for_edit();
    } else if binding_matches(&bindings.delete, &key) {
        app.request_delete_selected();
    } else if binding_matches(&bindings.toggle_done, &key) || binding_matches(&bindings.select, &key)
    {
        app.toggle_selected();
    } else if binding_matches(&bindings.prev_day, &key) {
        if app.ui.current_tab == Tab::Program {
            app.step_day(-1);
        }
    } else if binding_matches(&bindings.next_day, &key) {
        if app.ui.current_tab == Tab::Program {
            app.step_day(1);
        }
    } else if binding_matches(&bindings.today, &key) {
        if app.ui.current_tab == Tab::Program {
            app.go_to_today();
        }
    } else if binding_matches(&bindings.progress_down, &key) {
        app.adjust_selected_objective_progress(-1);
    } else if binding_matches(&bindings.progress_up, &key) {
        app.adjust_selected_objective_progress(1);
    }

    false
}

fn form_next_field(form: &mut PlannerForm) {
    match form {
        PlannerForm::Entry(f) => f.next_field(),
        PlannerForm::Task(f) => f.next_field(),
        PlannerForm::Resolution(f) => f.next_field(),
        PlannerForm::Objective(f) => f.next_field(),
        PlannerForm::Result(f) => f.next_field(),
    }
}

fn form_prev_field(form: &mut PlannerForm) {
    match form {
        PlannerForm::Entry(f) => f.prev_field(),
        PlannerForm::Task(f) => f.prev_field(),
        PlannerForm::Resolution(f) => f.prev_field(),
        PlannerForm::Objective(f) => f.prev_field(),
        PlannerForm::Result(f) => f.prev_field(),
    }
}

fn form_current_input(form: &mut PlannerForm) -> Option<&mut Input> {
    match form {
        PlannerForm::Entry(f) => Some(f.current_input_mut()),
        PlannerForm::Task(f) => f.current_input_mut(),
        PlannerForm::Resolution(f) => f.current_input_mut(),
        PlannerForm::Objective(f) => f.current_input_mut(),
        PlannerForm::Result(f) => f.current_input_mut(),
    }
}

/// Cycle the current field when it is a selector. Returns false for text
/// fields so the arrow key falls through to cursor movement.
fn form_cycle_selector(form: &mut PlannerForm, delta: i32) -> bool {
    fn cycle(index: usize, len: usize, delta: i32) -> usize {
        (index as i32 + delta).rem_euclid(len as i32) as usize
    }

    match form {
        PlannerForm::Task(f) if f.current_field == TaskField::Priority => {
            f.priority_index = cycle(f.priority_index, Priority::ALL.len(), delta);
            true
        }
        PlannerForm::Resolution(f) if f.current_field == ResolutionField::Mood => {
            f.mood_index = cycle(f.mood_index, Mood::ALL.len(), delta);
            true
        }
        PlannerForm::Objective(f) if f.current_field == ObjectiveField::Category => {
            f.category_index = cycle(f.category_index, Category::ALL.len(), delta);
            true
        }
        PlannerForm::Result(f) if f.current_field == ResultField::Rating => {
            f.rating = (f.rating as i32 + delta).clamp(1, 5) as u8;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_binding_matches_plain_and_ctrl() {
        assert!(binding_matches("q", &key(KeyCode::Char('q'))));
        assert!(!binding_matches("q", &key(KeyCode::Char('x'))));
        assert!(binding_matches("Ctrl+s", &ctrl_key(KeyCode::Char('s'))));
        assert!(!binding_matches("Ctrl+s", &key(KeyCode::Char('s'))));
        assert!(!binding_matches("s", &ctrl_key(KeyCode::Char('s'))));
        assert!(binding_matches("Enter", &key(KeyCode::Enter)));
    }

    #[test]
    fn test_unparseable_binding_never_matches() {
        assert!(!binding_matches("NotAKey", &key(KeyCode::Char('n'))));
    }
}

use crate::i18n::{Locale, TranslationKey};
use crate::models::{
    Category, Mood, NewDailyResult, NewObjective, NewResolution, NewScheduleEntry, NewTask,
    Objective, Priority, ScheduleEntry, ScheduleEntryUpdate, Task,
};
use crate::tui::widgets::input::Input;
use crate::utils;
use crate::{Config, PlannerStore};
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

/// How long a status message stays visible.
const STATUS_MESSAGE_TIMEOUT: Duration = Duration::from_secs(4);

/// Progress step applied by the +/- keys on the Objectives tab.
const PROGRESS_STEP: i16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Program,
    Tasks,
    Resolution,
    Objectives,
    Results,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Program,
        Tab::Tasks,
        Tab::Resolution,
        Tab::Objectives,
        Tab::Results,
    ];

    pub fn index(self) -> usize {
        match self {
            Tab::Program => 0,
            Tab::Tasks => 1,
            Tab::Resolution => 2,
            Tab::Objectives => 3,
            Tab::Results => 4,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    pub fn title_key(self) -> TranslationKey {
        match self {
            Tab::Program => TranslationKey::TabProgram,
            Tab::Tasks => TranslationKey::TabTasks,
            Tab::Resolution => TranslationKey::TabResolution,
            Tab::Objectives => TranslationKey::TabObjectives,
            Tab::Results => TranslationKey::TabResults,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    View,
    Create,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Date,
    Time,
    Title,
    Description,
    Note,
}

#[derive(Debug, Clone)]
pub struct EntryForm {
    pub current_field: EntryField,
    pub date: Input,
    pub time: Input,
    pub title: Input,
    pub description: Input,
    pub note: Input,
    pub editing_id: Option<String>,
}

impl EntryForm {
    pub fn next_field(&mut self) {
        self.current_field = match self.current_field {
            EntryField::Date => EntryField::Time,
            EntryField::Time => EntryField::Title,
            EntryField::Title => EntryField::Description,
            EntryField::Description => EntryField::Note,
            EntryField::Note => EntryField::Date,
        };
    }

    pub fn prev_field(&mut self) {
        self.current_field = match self.current_field {
            EntryField::Date => EntryField::Note,
            EntryField::Time => EntryField::Date,
            EntryField::Title => EntryField::Time,
            EntryField::Description => EntryField::Title,
            EntryField::Note => EntryField::Description,
        };
    }

    pub fn current_input_mut(&mut self) -> &mut Input {
        match self.current_field {
            EntryField::Date => &mut self.date,
            EntryField::Time => &mut self.time,
            EntryField::Title => &mut self.title,
            EntryField::Description => &mut self.description,
            EntryField::Note => &mut self.note,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
    Priority,
    DueDate,
}

#[derive(Debug, Clone)]
pub struct TaskForm {
    pub current_field: TaskField,
    pub title: Input,
    pub description: Input,
    pub priority_index: usize,
    pub due_date: Input,
}

impl TaskForm {
    pub fn next_field(&mut self) {
        self.current_field = match self.current_field {
            TaskField::Title => TaskField::Description,
            TaskField::Description => TaskField::Priority,
            TaskField::Priority => TaskField::DueDate,
            TaskField::DueDate => TaskField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.current_field = match self.current_field {
            TaskField::Title => TaskField::DueDate,
            TaskField::Description => TaskField::Title,
            TaskField::Priority => TaskField::Description,
            TaskField::DueDate => TaskField::Priority,
        };
    }

    pub fn priority(&self) -> Priority {
        Priority::ALL[self.priority_index % Priority::ALL.len()]
    }

    pub fn current_input_mut(&mut self) -> Option<&mut Input> {
        match self.current_field {
            TaskField::Title => Some(&mut self.title),
            TaskField::Description => Some(&mut self.description),
            TaskField::Priority => None,
            TaskField::DueDate => Some(&mut self.due_date),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionField {
    Resolution,
    Reflection,
    Mood,
}

#[derive(Debug, Clone)]
pub struct ResolutionForm {
    pub current_field: ResolutionField,
    pub resolution: Input,
    pub reflection: Input,
    pub mood_index: usize,
}

impl ResolutionForm {
    pub fn next_field(&mut self) {
        self.current_field = match self.current_field {
            ResolutionField::Resolution => ResolutionField::Reflection,
            ResolutionField::Reflection => ResolutionField::Mood,
            ResolutionField::Mood => ResolutionField::Resolution,
        };
    }

    pub fn prev_field(&mut self) {
        self.current_field = match self.current_field {
            ResolutionField::Resolution => ResolutionField::Mood,
            ResolutionField::Reflection => ResolutionField::Resolution,
            ResolutionField::Mood => ResolutionField::Reflection,
        };
    }

    pub fn mood(&self) -> Mood {
        Mood::ALL[self.mood_index % Mood::ALL.len()]
    }

    pub fn current_input_mut(&mut self) -> Option<&mut Input> {
        match self.current_field {
            ResolutionField::Resolution => Some(&mut self.resolution),
            ResolutionField::Reflection => Some(&mut self.reflection),
            ResolutionField::Mood => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveField {
    Title,
    Description,
    TargetDate,
    Progress,
    Category,
}

#[derive(Debug, Clone)]
pub struct ObjectiveForm {
    pub current_field: ObjectiveField,
    pub title: Input,
    pub description: Input,
    pub target_date: Input,
    pub progress: Input,
    pub category_index: usize,
}

impl ObjectiveForm {
    pub fn next_field(&mut self) {
        self.current_field = match self.current_field {
            ObjectiveField::Title => ObjectiveField::Description,
            ObjectiveField::Description => ObjectiveField::TargetDate,
            ObjectiveField::TargetDate => ObjectiveField::Progress,
            ObjectiveField::Progress => ObjectiveField::Category,
            ObjectiveField::Category => ObjectiveField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.current_field = match self.current_field {
            ObjectiveField::Title => ObjectiveField::Category,
            ObjectiveField::Description => ObjectiveField::Title,
            ObjectiveField::TargetDate => ObjectiveField::Description,
            ObjectiveField::Progress => ObjectiveField::TargetDate,
            ObjectiveField::Category => ObjectiveField::Progress,
        };
    }

    pub fn category(&self) -> Category {
        Category::ALL[self.category_index % Category::ALL.len()]
    }

    pub fn current_input_mut(&mut self) -> Option<&mut Input> {
        match self.current_field {
            ObjectiveField::Title => Some(&mut self.title),
            ObjectiveField::Description => Some(&mut self.description),
            ObjectiveField::TargetDate => Some(&mut self.target_date),
            ObjectiveField::Progress => Some(&mut self.progress),
            ObjectiveField::Category => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultField {
    Notes,
    Rating,
}

#[derive(Debug, Clone)]
pub struct ResultForm {
    pub current_field: ResultField,
    pub notes: Input,
    pub rating: u8,
}

impl ResultForm {
    pub fn next_field(&mut self) {
        self.current_field = match self.current_field {
            ResultField::Notes => ResultField::Rating,
            ResultField::Rating => ResultField::Notes,
        };
    }

    pub fn prev_field(&mut self) {
        self.next_field();
    }

    pub fn current_input_mut(&mut self) -> Option<&mut Input> {
        match self.current_field {
            ResultField::Notes => Some(&mut self.notes),
            ResultField::Rating => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum PlannerForm {
    Entry(EntryForm),
    Task(TaskForm),
    Resolution(ResolutionForm),
    Objective(ObjectiveForm),
    Result(ResultForm),
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub current_tab: Tab,
    pub mode: Mode,
    pub selected_index: usize,
    pub list_state: ListState,
    pub selected_date: String,
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: Option<String>,
    pub message_time: Option<Instant>,
}

#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub delete_confirmation: Option<ScheduleEntry>,
    pub delete_modal_selection: usize, // 0 = Yes, 1 = No
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub form: Option<PlannerForm>,
}

pub struct App {
    pub config: Config,
    pub store: PlannerStore,
    pub ui: UiState,
    pub status: StatusState,
    pub modals: ModalState,
    pub form: FormState,
}

impl App {
    pub fn new(config: Config, store: PlannerStore, today: String) -> Self {
        let mut app = Self {
            config,
            store,
            ui: UiState {
                current_tab: Tab::Program,
                mode: Mode::View,
                selected_index: 0,
                list_state: ListState::default(),
                selected_date: today,
            },
            status: StatusState::default(),
            modals: ModalState::default(),
            form: FormState::default(),
        };
        app.sync_list_state();
        app
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn t(&self, key: TranslationKey) -> &'static str {
        self.config.locale.t(key)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status.message = Some(message.into());
        self.status.message_time = Some(Instant::now());
    }

    pub fn check_status_message_timeout(&mut self) {
        if let Some(shown_at) = self.status.message_time {
            if shown_at.elapsed() >= STATUS_MESSAGE_TIMEOUT {
                self.status.message = None;
                self.status.message_time = None;
            }
        }
    }

    /// Entries shown on the Program tab: the selected day only, in the
    /// store's sorted order.
    pub fn entries_for_selected_date(&self) -> Vec<&ScheduleEntry> {
        self.store.schedule_entries_for_date(&self.ui.selected_date)
    }

    /// Tasks in display order: pending first, completed after, insertion
    /// order within each section.
    pub fn display_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.store.tasks().iter().filter(|t| !t.completed).collect();
        tasks.extend(self.store.tasks().iter().filter(|t| t.completed));
        tasks
    }

    pub fn pending_task_count(&self) -> usize {
        self.store.tasks().iter().filter(|t| !t.completed).count()
    }

    /// Objectives in display order: active first, completed after.
    pub fn display_objectives(&self) -> Vec<&Objective> {
        let mut objectives: Vec<&Objective> =
            self.store.objectives().iter().filter(|o| !o.completed).collect();
        objectives.extend(self.store.objectives().iter().filter(|o| o.completed));
        objectives
    }

    /// Number of selectable rows on the current tab.
    pub fn visible_count(&self) -> usize {
        match self.ui.current_tab {
            Tab::Program => self.entries_for_selected_date().len(),
            Tab::Tasks => self.store.tasks().len(),
            Tab::Objectives => self.store.objectives().len(),
            Tab::Resolution | Tab::Results => 0,
        }
    }

    pub fn selected_entry(&self) -> Option<&ScheduleEntry> {
        self.entries_for_selected_date()
            .get(self.ui.selected_index)
            .copied()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.display_tasks().get(self.ui.selected_index).copied()
    }

    pub fn selected_objective(&self) -> Option<&Objective> {
        self.display_objectives()
            .get(self.ui.selected_index)
            .copied()
    }

    /// Clamp the selection to the current list and mirror it into the
    /// ratatui list state.
    pub fn sync_list_state(&mut self) {
        let count = self.visible_count();
        if count == 0 {
            self.ui.selected_index = 0;
            self.ui.list_state.select(None);
        } else {
            if self.ui.selected_index >= count {
                self.ui.selected_index = count - 1;
            }
            self.ui.list_state.select(Some(self.ui.selected_index));
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.ui.selected_index > 0 {
            self.ui.selected_index -= 1;
        }
        self.sync_list_state();
    }

    pub fn move_selection_down(&mut self) {
        let count = self.visible_count();
        if count > 0 && self.ui.selected_index + 1 < count {
            self.ui.selected_index += 1;
        }
        self.sync_list_state();
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.ui.current_tab = tab;
        self.ui.selected_index = 0;
        self.sync_list_state();
    }

    pub fn step_day(&mut self, days: i64) {
        self.ui.selected_date = utils::offset_date(&self.ui.selected_date, days);
        self.ui.selected_index = 0;
        self.sync_list_state();
    }

    pub fn go_to_today(&mut self) {
        self.ui.selected_date = utils::get_current_date_string();
        self.ui.selected_index = 0;
        self.sync_list_state();
    }

    /// Space on the Program or Tasks tab: flip completion on the selection.
    pub fn toggle_selected(&mut self) {
        match self.ui.current_tab {
            Tab::Program => {
                if let Some(id) = self.selected_entry().map(|e| e.id.clone()) {
                    self.store.toggle_schedule_entry(&id);
                }
            }
            Tab::Tasks => {
                if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
                    self.store.toggle_task(&id);
                    // The task may have moved between sections
                    self.sync_list_state();
                }
            }
            _ => {}
        }
    }

    /// +/- on the Objectives tab. The store expects an already-clamped
    /// value, so the clamp lives here.
    pub fn adjust_selected_objective_progress(&mut self, direction: i16) {
        if self.ui.current_tab != Tab::Objectives {
            return;
        }
        let Some(objective) = self.selected_objective() else {
            return;
        };
        let id = objective.id.clone();
        let current = objective.progress as i16;
        let next = (current + direction * PROGRESS_STEP).clamp(0, 100) as u8;
        self.store.update_objective_progress(&id, next);
        self.sync_list_state();
    }

    pub fn request_delete_selected(&mut self) {
        if self.ui.current_tab == Tab::Program {
            if let Some(entry) = self.selected_entry().cloned() {
                self.modals.delete_confirmation = Some(entry);
                self.modals.delete_modal_selection = 1; // default to "No"
            }
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(entry) = self.modals.delete_confirmation.take() {
            self.store.delete_schedule_entry(&entry.id);
            let message = self.t(TranslationKey::EntryDeleted).to_string();
            self.set_status(message);
            self.sync_list_state();
        }
    }

    pub fn cancel_delete(&mut self) {
        self.modals.delete_confirmation = None;
    }

    /// Open the create form appropriate for the current tab.
    pub fn open_form_for_new(&mut self) {
        let form = match self.ui.current_tab {
            Tab::Program => PlannerForm::Entry(EntryForm {
                current_field: EntryField::Date,
                date: Input::with_value(&self.ui.selected_date),
                time: Input::new(),
                title: Input::new(),
                description: Input::new(),
                note: Input::new(),
                editing_id: None,
            }),
            Tab::Tasks => PlannerForm::Task(TaskForm {
                current_field: TaskField::Title,
                title: Input::new(),
                description: Input::new(),
                priority_index: Priority::ALL
                    .iter()
                    .position(|p| *p == Priority::Medium)
                    .unwrap_or(0),
                due_date: Input::new(),
            }),
            Tab::Resolution => self.resolution_form(),
            Tab::Objectives => PlannerForm::Objective(ObjectiveForm {
                current_field: ObjectiveField::Title,
                title: Input::new(),
                description: Input::new(),
                target_date: Input::new(),
                progress: Input::with_value("0"),
                category_index: 0,
            }),
            Tab::Results => self.result_form(),
        };
        self.form.form = Some(form);
        self.ui.mode = Mode::Create;
    }

    /// Open an edit form where the tab supports editing: program entries
    /// load the selected entry, resolution and results are replace-on-save
    /// so their edit form is the same prefilled form.
    pub fn open_form_for_edit(&mut self) {
        match self.ui.current_tab {
            Tab::Program => {
                if let Some(entry) = self.selected_entry().cloned() {
                    self.form.form = Some(PlannerForm::Entry(EntryForm {
                        current_field: EntryField::Date,
                        date: Input::with_value(&entry.date),
                        time: Input::with_value(&entry.time),
                        title: Input::with_value(&entry.title),
                        description: Input::with_value(entry.description.as_deref().unwrap_or("")),
                        note: Input::with_value(entry.note.as_deref().unwrap_or("")),
                        editing_id: Some(entry.id),
                    }));
                    self.ui.mode = Mode::Create;
                }
            }
            Tab::Resolution | Tab::Results => self.open_form_for_new(),
            _ => {}
        }
    }

    fn resolution_form(&self) -> PlannerForm {
        let (resolution, reflection, mood_index) = match self.store.resolution() {
            Some(saved) => (
                Input::with_value(&saved.resolution),
                Input::with_value(saved.reflection.as_deref().unwrap_or("")),
                Mood::ALL.iter().position(|m| *m == saved.mood).unwrap_or(0),
            ),
            None => (
                Input::new(),
                Input::new(),
                Mood::ALL.iter().position(|m| *m == Mood::Neutral).unwrap_or(0),
            ),
        };
        PlannerForm::Resolution(ResolutionForm {
            current_field: ResolutionField::Resolution,
            resolution,
            reflection,
            mood_index,
        })
    }

    fn result_form(&self) -> PlannerForm {
        let (notes, rating) = match self.store.daily_result() {
            Some(saved) => (
                Input::with_value(saved.notes.as_deref().unwrap_or("")),
                saved.rating,
            ),
            None => (Input::new(), 3),
        };
        PlannerForm::Result(ResultForm {
            current_field: ResultField::Notes,
            notes,
            rating,
        })
    }

    pub fn cancel_form(&mut self) {
        self.form.form = None;
        self.ui.mode = Mode::View;
    }

    /// Validate and submit the open form. Validation failures keep the form
    /// open and surface a status message; the store is only called with
    /// pre-validated input.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.form.take() else {
            return;
        };

        let outcome = match form {
            PlannerForm::Entry(form) => self.submit_entry_form(form),
            PlannerForm::Task(form) => self.submit_task_form(form),
            PlannerForm::Resolution(form) => self.submit_resolution_form(form),
            PlannerForm::Objective(form) => self.submit_objective_form(form),
            PlannerForm::Result(form) => self.submit_result_form(form),
        };

        match outcome {
            Ok(message_key) => {
                let message = self.t(message_key).to_string();
                self.set_status(message);
                self.ui.mode = Mode::View;
                self.sync_list_state();
            }
            Err((form, message_key)) => {
                let message = self.t(message_key).to_string();
                self.set_status(message);
                self.form.form = Some(form);
            }
        }
    }

    fn submit_entry_form(
        &mut self,
        form: EntryForm,
    ) -> Result<TranslationKey, (PlannerForm, TranslationKey)> {
        let title = form.title.value().trim().to_string();
        if title.is_empty() {
            return Err((PlannerForm::Entry(form), TranslationKey::TitleRequired));
        }
        let date = form.date.value().trim().to_string();
        if utils::parse_date(&date).is_err() {
            return Err((PlannerForm::Entry(form), TranslationKey::InvalidDate));
        }
        let time = form.time.value().trim().to_string();
        if utils::parse_time(&time).is_err() {
            return Err((PlannerForm::Entry(form), TranslationKey::InvalidTime));
        }

        let description = non_empty(form.description.value());
        let note = non_empty(form.note.value());

        if let Some(id) = &form.editing_id {
            self.store.update_schedule_entry(
                id,
                ScheduleEntryUpdate {
                    date: Some(date.clone()),
                    time: Some(time),
                    title: Some(title),
                    description: Some(description),
                    note: Some(note),
                },
            );
        } else {
            self.store.add_schedule_entry(NewScheduleEntry {
                date: date.clone(),
                time,
                title,
                description,
                note,
            });
        }

        // Follow the entry to its day so the save is visible
        self.ui.selected_date = date;
        Ok(TranslationKey::EntrySaved)
    }

    fn submit_task_form(
        &mut self,
        form: TaskForm,
    ) -> Result<TranslationKey, (PlannerForm, TranslationKey)> {
        let title = form.title.value().trim().to_string();
        if title.is_empty() {
            return Err((PlannerForm::Task(form), TranslationKey::TitleRequired));
        }
        let due_date = non_empty(form.due_date.value());
        if let Some(due) = &due_date {
            if utils::parse_date(due).is_err() {
                return Err((PlannerForm::Task(form), TranslationKey::InvalidDate));
            }
        }

        self.store.add_task(NewTask {
            title,
            description: non_empty(form.description.value()),
            priority: form.priority(),
            due_date,
        });
        Ok(TranslationKey::TaskAdded)
    }

    fn submit_resolution_form(
        &mut self,
        form: ResolutionForm,
    ) -> Result<TranslationKey, (PlannerForm, TranslationKey)> {
        let resolution = form.resolution.value().trim().to_string();
        if resolution.is_empty() {
            return Err((
                PlannerForm::Resolution(form),
                TranslationKey::ResolutionRequired,
            ));
        }

        self.store.save_resolution(NewResolution {
            date: utils::get_current_date_string(),
            resolution,
            reflection: non_empty(form.reflection.value()),
            mood: form.mood(),
        });
        Ok(TranslationKey::ResolutionSaved)
    }

    fn submit_objective_form(
        &mut self,
        form: ObjectiveForm,
    ) -> Result<TranslationKey, (PlannerForm, TranslationKey)> {
        let title = form.title.value().trim().to_string();
        if title.is_empty() {
            return Err((PlannerForm::Objective(form), TranslationKey::TitleRequired));
        }
        let target_date = form.target_date.value().trim().to_string();
        if utils::parse_date(&target_date).is_err() {
            return Err((PlannerForm::Objective(form), TranslationKey::InvalidDate));
        }
        let progress = match form.progress.value().trim().parse::<u8>() {
            Ok(value) if value <= 100 => value,
            _ => {
                return Err((
                    PlannerForm::Objective(form),
                    TranslationKey::InvalidProgress,
                ));
            }
        };

        self.store.add_objective(NewObjective {
            title,
            description: non_empty(form.description.value()),
            target_date,
            progress,
            category: form.category(),
        });
        Ok(TranslationKey::ObjectiveAdded)
    }

    fn submit_result_form(
        &mut self,
        form: ResultForm,
    ) -> Result<TranslationKey, (PlannerForm, TranslationKey)> {
        // The rating selector only produces values in 1..=5; the snapshot
        // fields come from the derived statistics at save time.
        let stats = self.store.stats();
        self.store.save_daily_result(NewDailyResult {
            date: utils::get_current_date_string(),
            tasks_completed: stats.tasks_completed,
            total_tasks: stats.total_tasks,
            objectives_progress: stats.avg_objective_progress,
            notes: non_empty(form.notes.value()),
            rating: form.rating.clamp(1, 5),
        });
        Ok(TranslationKey::ResultSaved)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(
            Config::default(),
            PlannerStore::new(),
            "2024-01-15".to_string(),
        )
    }

    fn submit_entry(app: &mut App, date: &str, time: &str, title: &str) {
        app.form.form = Some(PlannerForm::Entry(EntryForm {
            current_field: EntryField::Date,
            date: Input::with_value(date),
            time: Input::with_value(time),
            title: Input::with_value(title),
            description: Input::new(),
            note: Input::new(),
            editing_id: None,
        }));
        app.ui.mode = Mode::Create;
        app.submit_form();
    }

    #[test]
    fn test_empty_title_blocks_submit_and_keeps_form_open() {
        let mut app = test_app();
        submit_entry(&mut app, "2024-01-15", "09:00", "   ");

        assert!(app.form.form.is_some());
        assert_eq!(app.ui.mode, Mode::Create);
        assert_eq!(app.store.schedule_entries().len(), 0);
        assert_eq!(
            app.status.message.as_deref(),
            Some(Locale::En.t(TranslationKey::TitleRequired))
        );
    }

    #[test]
    fn test_invalid_date_blocks_submit() {
        let mut app = test_app();
        submit_entry(&mut app, "15/01/2024", "09:00", "Meeting");

        assert!(app.form.form.is_some());
        assert_eq!(app.store.schedule_entries().len(), 0);
    }

    #[test]
    fn test_valid_entry_submit_closes_form_and_follows_date() {
        let mut app = test_app();
        submit_entry(&mut app, "2024-01-20", "09:00", "Meeting");

        assert!(app.form.form.is_none());
        assert_eq!(app.ui.mode, Mode::View);
        assert_eq!(app.store.schedule_entries().len(), 1);
        assert_eq!(app.ui.selected_date, "2024-01-20");
    }

    #[test]
    fn test_edit_form_clears_description_when_blanked() {
        let mut app = test_app();
        let added = app.store.add_schedule_entry(NewScheduleEntry {
            date: "2024-01-15".to_string(),
            time: "09:00".to_string(),
            title: "Meeting".to_string(),
            description: Some("Sync".to_string()),
            note: None,
        });

        app.form.form = Some(PlannerForm::Entry(EntryForm {
            current_field: EntryField::Date,
            date: Input::with_value("2024-01-15"),
            time: Input::with_value("09:00"),
            title: Input::with_value("Meeting"),
            description: Input::new(), // blanked by the user
            note: Input::new(),
            editing_id: Some(added.id),
        }));
        app.submit_form();

        assert_eq!(app.store.schedule_entries()[0].description, None);
    }

    #[test]
    fn test_objective_progress_adjustment_clamps() {
        let mut app = test_app();
        app.store.add_objective(NewObjective {
            title: "Goal".to_string(),
            description: None,
            target_date: "2024-06-01".to_string(),
            progress: 95,
            category: Category::Personal,
        });
        app.switch_tab(Tab::Objectives);

        app.adjust_selected_objective_progress(1);
        assert_eq!(app.store.objectives()[0].progress, 100);
        assert!(app.store.objectives()[0].completed);

        app.adjust_selected_objective_progress(1);
        assert_eq!(app.store.objectives()[0].progress, 100);

        app.adjust_selected_objective_progress(-1);
        assert_eq!(app.store.objectives()[0].progress, 90);
        assert!(!app.store.objectives()[0].completed);
    }

    #[test]
    fn test_display_tasks_partitions_pending_before_completed() {
        let mut app = test_app();
        app.store.add_task(NewTask {
            title: "first".to_string(),
            description: None,
            priority: Priority::High,
            due_date: None,
        });
        let second = app.store.add_task(NewTask {
            title: "second".to_string(),
            description: None,
            priority: Priority::Low,
            due_date: None,
        });
        app.store.add_task(NewTask {
            title: "third".to_string(),
            description: None,
            priority: Priority::Medium,
            due_date: None,
        });
        app.store.toggle_task(&second.id);

        let titles: Vec<&str> = app.display_tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "third", "second"]);
    }

    #[test]
    fn test_result_form_snapshots_current_stats() {
        let mut app = test_app();
        let task = app.store.add_task(NewTask {
            title: "only".to_string(),
            description: None,
            priority: Priority::Medium,
            due_date: None,
        });
        app.store.toggle_task(&task.id);

        app.form.form = Some(PlannerForm::Result(ResultForm {
            current_field: ResultField::Notes,
            notes: Input::with_value("Good day"),
            rating: 4,
        }));
        app.submit_form();

        let result = app.store.daily_result().unwrap();
        assert_eq!(result.tasks_completed, 1);
        assert_eq!(result.total_tasks, 1);
        assert_eq!(result.rating, 4);
        assert_eq!(result.notes.as_deref(), Some("Good day"));
    }

    #[test]
    fn test_delete_flow_with_confirmation() {
        let mut app = test_app();
        submit_entry(&mut app, "2024-01-15", "09:00", "Doomed");
        assert_eq!(app.store.schedule_entries().len(), 1);

        app.request_delete_selected();
        assert!(app.modals.delete_confirmation.is_some());
        // Defaults to "No" so a stray Enter cannot delete
        assert_eq!(app.modals.delete_modal_selection, 1);

        app.confirm_delete();
        assert_eq!(app.store.schedule_entries().len(), 0);
        assert!(app.modals.delete_confirmation.is_none());
    }
}

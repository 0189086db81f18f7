use crate::models::{
    Category, DailyResolution, DailyResult, DailyStats, NewDailyResult, NewObjective,
    NewResolution, NewScheduleEntry, NewTask, Objective, Priority, ScheduleEntry,
    ScheduleEntryUpdate, Task,
};
use crate::utils::offset_date;

/// In-memory owner of all planner state: the daily program, the task list,
/// the singleton resolution, the objectives and the singleton daily result.
///
/// Every mutation is synchronous and either fully applies or is a no-op.
/// Callers validate input (non-empty titles, clamped ranges) before invoking
/// a mutation; mutate-by-id operations return `false` when the id is absent
/// instead of erroring, since ids are always sourced from the rendered lists.
#[derive(Debug, Default)]
pub struct PlannerStore {
    schedule: Vec<ScheduleEntry>,
    tasks: Vec<Task>,
    resolution: Option<DailyResolution>,
    objectives: Vec<Objective>,
    result: Option<DailyResult>,
    id_seq: u64,
}

impl PlannerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demonstration data pinned to `date`: four program slots, three tasks
    /// and three objectives, so a fresh launch has something to show.
    pub fn with_sample_data(date: &str) -> Self {
        let mut store = Self::new();

        store.add_schedule_entry(NewScheduleEntry {
            date: date.to_string(),
            time: "07:00".to_string(),
            title: "Morning exercise".to_string(),
            description: Some("30 minutes of cardio".to_string()),
            note: Some("Don't skip the stretches".to_string()),
        });
        store.add_schedule_entry(NewScheduleEntry {
            date: date.to_string(),
            time: "09:00".to_string(),
            title: "Team meeting".to_string(),
            description: Some("Weekly sync with the development team".to_string()),
            note: None,
        });
        store.add_schedule_entry(NewScheduleEntry {
            date: date.to_string(),
            time: "14:00".to_string(),
            title: "Project review".to_string(),
            description: Some("Review quarterly project progress".to_string()),
            note: Some("Prepare the performance metrics".to_string()),
        });
        store.add_schedule_entry(NewScheduleEntry {
            date: date.to_string(),
            time: "18:00".to_string(),
            title: "Personal reading".to_string(),
            description: Some("Read for one hour".to_string()),
            note: None,
        });

        store.add_task(NewTask {
            title: "Finish the project proposal".to_string(),
            description: Some("Finalize the Q1 proposal document".to_string()),
            priority: Priority::High,
            due_date: Some(date.to_string()),
        });
        store.add_task(NewTask {
            title: "Call the dentist for an appointment".to_string(),
            description: None,
            priority: Priority::Medium,
            due_date: None,
        });
        let groceries = store.add_task(NewTask {
            title: "Buy groceries".to_string(),
            description: Some("Weekly shopping run".to_string()),
            priority: Priority::Low,
            due_date: None,
        });
        store.toggle_task(&groceries.id);

        store.add_objective(NewObjective {
            title: "Learn a new framework".to_string(),
            description: Some("Finish the advanced course".to_string()),
            target_date: offset_date(date, 45),
            progress: 65,
            category: Category::Learning,
        });
        store.add_objective(NewObjective {
            title: "Lose 5 kilos".to_string(),
            description: Some("Reach the target weight through exercise and diet".to_string()),
            target_date: offset_date(date, 30),
            progress: 40,
            category: Category::Health,
        });
        store.add_objective(NewObjective {
            title: "Build an emergency fund".to_string(),
            description: Some("Set aside three months of expenses".to_string()),
            target_date: offset_date(date, 120),
            progress: 80,
            category: Category::Personal,
        });

        store
    }

    fn next_id(&mut self, kind: &str) -> String {
        self.id_seq += 1;
        format!("{}::{}", kind, self.id_seq)
    }

    /// Schedule entries, always sorted by (date, time) ascending.
    pub fn schedule_entries(&self) -> &[ScheduleEntry] {
        &self.schedule
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn resolution(&self) -> Option<&DailyResolution> {
        self.resolution.as_ref()
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    pub fn daily_result(&self) -> Option<&DailyResult> {
        self.result.as_ref()
    }

    /// Flip `completed` on the entry with this id. Completion is not part of
    /// the sort key, so no re-sort happens.
    pub fn toggle_schedule_entry(&mut self, id: &str) -> bool {
        match self.schedule.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.completed = !entry.completed;
                true
            }
            None => false,
        }
    }

    /// Insert a new entry and restore the (date, time) ordering.
    /// The caller has already validated that `title` is non-empty.
    pub fn add_schedule_entry(&mut self, data: NewScheduleEntry) -> ScheduleEntry {
        let id = self.next_id("entry");
        let mut entry = ScheduleEntry::new(id, data.date, data.time, data.title);
        entry.description = data.description;
        entry.note = data.note;
        self.schedule.push(entry.clone());
        self.sort_schedule();
        entry
    }

    /// Merge the present fields of `update` onto the entry, then re-sort
    /// since date or time may have moved.
    pub fn update_schedule_entry(&mut self, id: &str, update: ScheduleEntryUpdate) -> bool {
        let Some(entry) = self.schedule.iter_mut().find(|entry| entry.id == id) else {
            return false;
        };
        if let Some(date) = update.date {
            entry.date = date;
        }
        if let Some(time) = update.time {
            entry.time = time;
        }
        if let Some(title) = update.title {
            entry.title = title;
        }
        if let Some(description) = update.description {
            entry.description = description;
        }
        if let Some(note) = update.note {
            entry.note = note;
        }
        self.sort_schedule();
        true
    }

    pub fn delete_schedule_entry(&mut self, id: &str) -> bool {
        let before = self.schedule.len();
        self.schedule.retain(|entry| entry.id != id);
        self.schedule.len() != before
    }

    /// Entries for exactly this date, in the collection's sorted order.
    pub fn schedule_entries_for_date(&self, date: &str) -> Vec<&ScheduleEntry> {
        self.schedule.iter().filter(|entry| entry.date == date).collect()
    }

    pub fn toggle_task(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Append a task. Tasks keep insertion order; consumers partition into
    /// pending/completed for display.
    pub fn add_task(&mut self, data: NewTask) -> Task {
        let id = self.next_id("task");
        let mut task = Task::new(id, data.title, data.priority);
        task.description = data.description;
        task.due_date = data.due_date;
        self.tasks.push(task.clone());
        task
    }

    /// Replace the singleton resolution wholesale. A new id is assigned on
    /// every save; the previous resolution is discarded.
    pub fn save_resolution(&mut self, data: NewResolution) -> &DailyResolution {
        let id = self.next_id("resolution");
        let mut resolution = DailyResolution::new(id, data.date, data.resolution, data.mood);
        resolution.reflection = data.reflection;
        self.resolution.insert(resolution)
    }

    pub fn add_objective(&mut self, data: NewObjective) -> Objective {
        let id = self.next_id("objective");
        let mut objective =
            Objective::new(id, data.title, data.target_date, data.progress, data.category);
        objective.description = data.description;
        self.objectives.push(objective.clone());
        objective
    }

    /// Set an objective's progress. The caller clamps to [0, 100];
    /// `completed` is recomputed in the same mutation.
    pub fn update_objective_progress(&mut self, id: &str, progress: u8) -> bool {
        match self.objectives.iter_mut().find(|objective| objective.id == id) {
            Some(objective) => {
                objective.set_progress(progress);
                true
            }
            None => false,
        }
    }

    /// Replace the singleton daily result wholesale. The caller keeps
    /// `rating` within [1, 5].
    pub fn save_daily_result(&mut self, data: NewDailyResult) -> &DailyResult {
        let id = self.next_id("result");
        self.result.insert(DailyResult {
            id,
            date: data.date,
            tasks_completed: data.tasks_completed,
            total_tasks: data.total_tasks,
            objectives_progress: data.objectives_progress,
            notes: data.notes,
            rating: data.rating,
        })
    }

    /// Derived statistics over the current state. Pure query, no mutation.
    /// Empty collections read as rate 0, never as a division by zero.
    pub fn stats(&self) -> DailyStats {
        let tasks_completed = self.tasks.iter().filter(|task| task.completed).count();
        let total_tasks = self.tasks.len();
        let program_completed = self.schedule.iter().filter(|entry| entry.completed).count();
        let total_program = self.schedule.len();

        let task_completion_rate = if total_tasks > 0 {
            tasks_completed as f64 / total_tasks as f64 * 100.0
        } else {
            0.0
        };
        let program_completion_rate = if total_program > 0 {
            program_completed as f64 / total_program as f64 * 100.0
        } else {
            0.0
        };

        // Mean progress rounded to the nearest point; zero objectives read
        // as 0 so an undefined value can never reach display.
        let avg_objective_progress = if self.objectives.is_empty() {
            0
        } else {
            let sum: u32 = self.objectives.iter().map(|objective| objective.progress as u32).sum();
            (sum as f64 / self.objectives.len() as f64).round() as u8
        };

        DailyStats {
            tasks_completed,
            total_tasks,
            program_completed,
            total_program,
            task_completion_rate,
            program_completion_rate,
            avg_objective_progress,
        }
    }

    fn sort_schedule(&mut self) {
        self.schedule
            .sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Mood, Priority};

    fn entry(date: &str, time: &str, title: &str) -> NewScheduleEntry {
        NewScheduleEntry {
            date: date.to_string(),
            time: time.to_string(),
            title: title.to_string(),
            description: None,
            note: None,
        }
    }

    fn task(title: &str, priority: Priority) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: None,
            priority,
            due_date: None,
        }
    }

    fn objective(title: &str, progress: u8) -> NewObjective {
        NewObjective {
            title: title.to_string(),
            description: None,
            target_date: "2024-06-01".to_string(),
            progress,
            category: Category::Personal,
        }
    }

    fn is_sorted(store: &PlannerStore) -> bool {
        store
            .schedule_entries()
            .windows(2)
            .all(|pair| (&pair[0].date, &pair[0].time) <= (&pair[1].date, &pair[1].time))
    }

    #[test]
    fn test_add_keeps_schedule_sorted_by_date_then_time() {
        let mut store = PlannerStore::new();
        store.add_schedule_entry(entry("2024-01-16", "09:00", "Later day"));
        assert!(is_sorted(&store));
        store.add_schedule_entry(entry("2024-01-15", "18:00", "Earlier day"));
        assert!(is_sorted(&store));
        store.add_schedule_entry(entry("2024-01-15", "07:00", "Earlier time"));
        assert!(is_sorted(&store));

        let titles: Vec<&str> = store.schedule_entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Earlier time", "Earlier day", "Later day"]);
    }

    #[test]
    fn test_out_of_order_insert_scenario() {
        let mut store = PlannerStore::new();
        store.add_schedule_entry(entry("2024-01-16", "09:00", "B"));
        store.add_schedule_entry(entry("2024-01-15", "18:00", "A"));

        let dates: Vec<&str> = store.schedule_entries().iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-15", "2024-01-16"]);
    }

    #[test]
    fn test_update_moves_entry_and_resorts() {
        let mut store = PlannerStore::new();
        let first = store.add_schedule_entry(entry("2024-01-15", "07:00", "Early"));
        store.add_schedule_entry(entry("2024-01-15", "12:00", "Noon"));

        let moved = store.update_schedule_entry(
            &first.id,
            ScheduleEntryUpdate {
                time: Some("19:00".to_string()),
                ..Default::default()
            },
        );
        assert!(moved);
        assert!(is_sorted(&store));
        assert_eq!(store.schedule_entries()[1].title, "Early");
    }

    #[test]
    fn test_update_merge_leaves_omitted_fields_and_clears_explicitly() {
        let mut store = PlannerStore::new();
        let added = store.add_schedule_entry(NewScheduleEntry {
            date: "2024-01-15".to_string(),
            time: "09:00".to_string(),
            title: "Meeting".to_string(),
            description: Some("Weekly sync".to_string()),
            note: Some("Bring the report".to_string()),
        });

        store.update_schedule_entry(
            &added.id,
            ScheduleEntryUpdate {
                title: Some("Standup".to_string()),
                note: Some(None),
                ..Default::default()
            },
        );

        let updated = &store.schedule_entries()[0];
        assert_eq!(updated.title, "Standup");
        // Omitted: untouched. Explicitly cleared: gone.
        assert_eq!(updated.description.as_deref(), Some("Weekly sync"));
        assert_eq!(updated.note, None);
        assert_eq!(updated.time, "09:00");
    }

    #[test]
    fn test_mutations_on_unknown_ids_are_silent_noops() {
        let mut store = PlannerStore::new();
        store.add_schedule_entry(entry("2024-01-15", "09:00", "Only"));
        store.add_task(task("Only", Priority::Low));
        store.add_objective(objective("Only", 10));

        assert!(!store.toggle_schedule_entry("entry::999"));
        assert!(!store.update_schedule_entry("entry::999", ScheduleEntryUpdate::default()));
        assert!(!store.delete_schedule_entry("entry::999"));
        assert!(!store.toggle_task("task::999"));
        assert!(!store.update_objective_progress("objective::999", 50));

        assert_eq!(store.schedule_entries().len(), 1);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.objectives().len(), 1);
    }

    #[test]
    fn test_toggle_schedule_entry_is_idempotent_over_two_calls() {
        let mut store = PlannerStore::new();
        let added = store.add_schedule_entry(entry("2024-01-15", "09:00", "Flip"));
        assert!(!store.schedule_entries()[0].completed);

        store.toggle_schedule_entry(&added.id);
        assert!(store.schedule_entries()[0].completed);
        store.toggle_schedule_entry(&added.id);
        assert!(!store.schedule_entries()[0].completed);
    }

    #[test]
    fn test_delete_schedule_entry() {
        let mut store = PlannerStore::new();
        let first = store.add_schedule_entry(entry("2024-01-15", "09:00", "Gone"));
        store.add_schedule_entry(entry("2024-01-15", "10:00", "Stays"));

        assert!(store.delete_schedule_entry(&first.id));
        assert_eq!(store.schedule_entries().len(), 1);
        assert_eq!(store.schedule_entries()[0].title, "Stays");
    }

    #[test]
    fn test_entries_for_date_filters_without_resorting() {
        let mut store = PlannerStore::new();
        store.add_schedule_entry(entry("2024-01-16", "08:00", "Other day"));
        store.add_schedule_entry(entry("2024-01-15", "18:00", "Evening"));
        store.add_schedule_entry(entry("2024-01-15", "07:00", "Morning"));

        let day = store.schedule_entries_for_date("2024-01-15");
        let titles: Vec<&str> = day.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Morning", "Evening"]);
        assert!(store.schedule_entries_for_date("2024-02-01").is_empty());
    }

    #[test]
    fn test_task_scenario_one_of_two_completed_is_fifty_percent() {
        let mut store = PlannerStore::new();
        store.add_task(task("A", Priority::High));
        let b = store.add_task(task("B", Priority::Low));
        store.toggle_task(&b.id);

        let stats = store.stats();
        assert_eq!(stats.tasks_completed, 1);
        assert_eq!(stats.total_tasks, 2);
        assert_eq!(stats.task_completion_rate, 50.0);
    }

    #[test]
    fn test_tasks_keep_insertion_order() {
        let mut store = PlannerStore::new();
        store.add_task(task("first", Priority::High));
        store.add_task(task("second", Priority::Low));
        store.add_task(task("third", Priority::Medium));

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_save_resolution_replaces_the_singleton() {
        let mut store = PlannerStore::new();
        store.save_resolution(NewResolution {
            date: "2024-01-15".to_string(),
            resolution: "Be kind".to_string(),
            reflection: None,
            mood: Mood::Good,
        });
        let first_id = store.resolution().unwrap().id.clone();

        store.save_resolution(NewResolution {
            date: "2024-01-15".to_string(),
            resolution: "Be patient".to_string(),
            reflection: Some("It went fine".to_string()),
            mood: Mood::Excellent,
        });

        let current = store.resolution().unwrap();
        assert_eq!(current.resolution, "Be patient");
        assert_eq!(current.mood, Mood::Excellent);
        assert_ne!(current.id, first_id);
    }

    #[test]
    fn test_objective_progress_drives_completed_both_ways() {
        let mut store = PlannerStore::new();
        let added = store.add_objective(objective("Ship it", 95));

        assert!(store.update_objective_progress(&added.id, 100));
        let objective = &store.objectives()[0];
        assert_eq!(objective.progress, 100);
        assert!(objective.completed);

        assert!(store.update_objective_progress(&added.id, 60));
        let objective = &store.objectives()[0];
        assert_eq!(objective.progress, 60);
        assert!(!objective.completed);
    }

    #[test]
    fn test_save_daily_result_replaces_the_singleton() {
        let mut store = PlannerStore::new();
        store.save_daily_result(NewDailyResult {
            date: "2024-01-15".to_string(),
            tasks_completed: 1,
            total_tasks: 3,
            objectives_progress: 40,
            notes: None,
            rating: 3,
        });
        store.save_daily_result(NewDailyResult {
            date: "2024-01-15".to_string(),
            tasks_completed: 3,
            total_tasks: 3,
            objectives_progress: 62,
            notes: Some("Strong finish".to_string()),
            rating: 5,
        });

        let result = store.daily_result().unwrap();
        assert_eq!(result.rating, 5);
        assert_eq!(result.tasks_completed, 3);
        assert_eq!(result.notes.as_deref(), Some("Strong finish"));
    }

    #[test]
    fn test_stats_on_empty_store_has_no_division_by_zero() {
        let store = PlannerStore::new();
        let stats = store.stats();

        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.task_completion_rate, 0.0);
        assert_eq!(stats.total_program, 0);
        assert_eq!(stats.program_completion_rate, 0.0);
        assert_eq!(stats.avg_objective_progress, 0);
    }

    #[test]
    fn test_stats_average_objective_progress_rounds_to_nearest() {
        let mut store = PlannerStore::new();
        store.add_objective(objective("a", 65));
        store.add_objective(objective("b", 40));
        store.add_objective(objective("c", 80));

        // (65 + 40 + 80) / 3 = 61.66... -> 62
        assert_eq!(store.stats().avg_objective_progress, 62);
    }

    #[test]
    fn test_program_completion_rate() {
        let mut store = PlannerStore::new();
        let first = store.add_schedule_entry(entry("2024-01-15", "07:00", "a"));
        store.add_schedule_entry(entry("2024-01-15", "09:00", "b"));
        store.add_schedule_entry(entry("2024-01-15", "14:00", "c"));
        store.add_schedule_entry(entry("2024-01-15", "18:00", "d"));
        store.toggle_schedule_entry(&first.id);

        let stats = store.stats();
        assert_eq!(stats.program_completed, 1);
        assert_eq!(stats.total_program, 4);
        assert_eq!(stats.program_completion_rate, 25.0);
    }

    #[test]
    fn test_ids_are_unique_across_kinds_and_seeding() {
        let store = PlannerStore::with_sample_data("2024-01-15");
        let mut ids: Vec<&str> = store.schedule_entries().iter().map(|e| e.id.as_str()).collect();
        ids.extend(store.tasks().iter().map(|t| t.id.as_str()));
        ids.extend(store.objectives().iter().map(|o| o.id.as_str()));

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_sample_data_shape() {
        let store = PlannerStore::with_sample_data("2024-01-15");
        assert_eq!(store.schedule_entries_for_date("2024-01-15").len(), 4);
        assert_eq!(store.tasks().len(), 3);
        assert_eq!(store.objectives().len(), 3);
        assert!(store.resolution().is_none());
        assert!(store.daily_result().is_none());
        assert!(is_sorted(&store));

        // One of the three seeded tasks starts completed.
        let stats = store.stats();
        assert_eq!(stats.tasks_completed, 1);
        assert_eq!(stats.total_tasks, 3);
    }
}

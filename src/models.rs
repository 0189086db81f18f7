use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unrecognized {kind}: '{value}'")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

/// Task priority, stored and displayed in its lower-case wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// All values in form-cycling order.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(ParseEnumError {
                kind: "priority",
                value: other.to_string(),
            }),
        }
    }
}

/// Mood attached to a daily resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Excellent,
    Good,
    Neutral,
    Poor,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Excellent, Mood::Good, Mood::Neutral, Mood::Poor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Excellent => "excellent",
            Mood::Good => "good",
            Mood::Neutral => "neutral",
            Mood::Poor => "poor",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excellent" => Ok(Mood::Excellent),
            "good" => Ok(Mood::Good),
            "neutral" => Ok(Mood::Neutral),
            "poor" => Ok(Mood::Poor),
            other => Err(ParseEnumError {
                kind: "mood",
                value: other.to_string(),
            }),
        }
    }
}

/// Objective category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personal,
    Professional,
    Health,
    Learning,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Personal,
        Category::Professional,
        Category::Health,
        Category::Learning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Professional => "professional",
            Category::Health => "health",
            Category::Learning => "learning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(Category::Personal),
            "professional" => Ok(Category::Professional),
            "health" => Ok(Category::Health),
            "learning" => Ok(Category::Learning),
            other => Err(ParseEnumError {
                kind: "category",
                value: other.to_string(),
            }),
        }
    }
}

/// One time slot in the daily program.
///
/// `date` is ISO "YYYY-MM-DD" and `time` is 24h "HH:MM"; both formats are
/// fixed-width, so (date, time) ordering reduces to lexical comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub date: String, // YYYY-MM-DD
    pub time: String, // HH:MM
    pub title: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub completed: bool,
    pub created_at: String,
}

impl ScheduleEntry {
    pub fn new(id: String, date: String, time: String, title: String) -> Self {
        Self {
            id,
            date,
            time,
            title,
            description: None,
            note: None,
            completed: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub completed: bool,
    pub due_date: Option<String>, // YYYY-MM-DD
    pub created_at: String,
}

impl Task {
    pub fn new(id: String, title: String, priority: Priority) -> Self {
        Self {
            id,
            title,
            description: None,
            priority,
            completed: false,
            due_date: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// The day's written resolution. Only the most recently saved one is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyResolution {
    pub id: String,
    pub date: String,
    pub resolution: String,
    pub reflection: Option<String>,
    pub mood: Mood,
}

impl DailyResolution {
    pub fn new(id: String, date: String, resolution: String, mood: Mood) -> Self {
        Self {
            id,
            date,
            resolution,
            reflection: None,
            mood,
        }
    }
}

/// A longer-term goal tracked by percentage progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub target_date: String,
    pub progress: u8, // 0-100
    pub category: Category,
    pub completed: bool,
}

impl Objective {
    pub fn new(id: String, title: String, target_date: String, progress: u8, category: Category) -> Self {
        let mut objective = Self {
            id,
            title,
            description: None,
            target_date,
            progress: 0,
            category,
            completed: false,
        };
        objective.set_progress(progress);
        objective
    }

    /// The only way `progress` changes. `completed` is derived here and
    /// nowhere else, so the two fields cannot drift apart.
    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress;
        self.completed = progress >= 100;
    }
}

/// End-of-day snapshot: derived statistics at save time plus the user's
/// rating and notes. Only the most recently saved one is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyResult {
    pub id: String,
    pub date: String,
    pub tasks_completed: usize,
    pub total_tasks: usize,
    pub objectives_progress: u8,
    pub notes: Option<String>,
    pub rating: u8, // 1-5 stars
}

/// Input record for `PlannerStore::add_schedule_entry`.
#[derive(Debug, Clone)]
pub struct NewScheduleEntry {
    pub date: String,
    pub time: String,
    pub title: String,
    pub description: Option<String>,
    pub note: Option<String>,
}

/// Partial update for a schedule entry. `None` fields are left unchanged.
///
/// `description` and `note` are doubly optional: the outer `None` means
/// "don't touch", `Some(None)` means "clear the field".
#[derive(Debug, Clone, Default)]
pub struct ScheduleEntryUpdate {
    pub date: Option<String>,
    pub time: Option<String>,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub note: Option<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewResolution {
    pub date: String,
    pub resolution: String,
    pub reflection: Option<String>,
    pub mood: Mood,
}

#[derive(Debug, Clone)]
pub struct NewObjective {
    pub title: String,
    pub description: Option<String>,
    pub target_date: String,
    pub progress: u8,
    pub category: Category,
}

#[derive(Debug, Clone)]
pub struct NewDailyResult {
    pub date: String,
    pub tasks_completed: usize,
    pub total_tasks: usize,
    pub objectives_progress: u8,
    pub notes: Option<String>,
    pub rating: u8,
}

/// Derived daily statistics. Pure data, computed by `PlannerStore::stats`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyStats {
    pub tasks_completed: usize,
    pub total_tasks: usize,
    pub program_completed: usize,
    pub total_program: usize,
    pub task_completion_rate: f64,
    pub program_completion_rate: f64,
    pub avg_objective_progress: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_round_trip() {
        for priority in Priority::ALL {
            assert_eq!(priority.as_str().parse::<Priority>().unwrap(), priority);
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_mood_round_trip() {
        for mood in Mood::ALL {
            assert_eq!(mood.as_str().parse::<Mood>().unwrap(), mood);
        }
        assert!("ecstatic".parse::<Mood>().is_err());
    }

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("finance".parse::<Category>().is_err());
    }

    #[test]
    fn test_objective_completed_derived_from_progress() {
        let mut objective = Objective::new(
            "objective::1".to_string(),
            "Read 12 books".to_string(),
            "2024-06-01".to_string(),
            95,
            Category::Learning,
        );
        assert_eq!(objective.progress, 95);
        assert!(!objective.completed);

        objective.set_progress(100);
        assert!(objective.completed);

        objective.set_progress(60);
        assert_eq!(objective.progress, 60);
        assert!(!objective.completed);
    }

    #[test]
    fn test_objective_new_with_full_progress_starts_completed() {
        let objective = Objective::new(
            "objective::2".to_string(),
            "Done already".to_string(),
            "2024-06-01".to_string(),
            100,
            Category::Personal,
        );
        assert!(objective.completed);
    }
}

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::models::{Category, Mood, Priority};

/// Display language. The store never consults this module; it operates on
/// enum values and ISO date strings only. Everything user-facing goes
/// through `Locale::t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

#[derive(Debug, Error)]
#[error("unrecognized locale: '{0}' (expected \"en\" or \"fr\")")]
pub struct ParseLocaleError(String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}

/// Closed set of user-facing labels. Adding a screen string means adding a
/// key here and a row in both language tables below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationKey {
    // Tabs
    TabProgram,
    TabTasks,
    TabResolution,
    TabObjectives,
    TabResults,
    // Program screen
    ProgramTitle,
    TodaysProgress,
    Of,
    Completed,
    NoEntriesForDay,
    // Tasks screen
    TasksTitle,
    Pending,
    Due,
    PriorityLow,
    PriorityMedium,
    PriorityHigh,
    NoTasks,
    // Resolution screen
    ResolutionTitle,
    TodaysResolution,
    CurrentMood,
    EveningReflection,
    SavedResolution,
    ReflectionLabel,
    MoodLabel,
    NoResolutionYet,
    MoodExcellent,
    MoodGood,
    MoodNeutral,
    MoodPoor,
    // Objectives screen
    ObjectivesTitle,
    ActiveSection,
    CompletedSection,
    TargetDate,
    AverageProgress,
    NoObjectives,
    CategoryPersonal,
    CategoryProfessional,
    CategoryHealth,
    CategoryLearning,
    // Results screen
    ResultsTitle,
    TodaysSummary,
    TasksDone,
    ProgramDone,
    ObjectivesAvg,
    OverallRating,
    NotesLabel,
    SavedResult,
    NoResultYet,
    RatingFive,
    RatingFour,
    RatingThree,
    RatingTwo,
    RatingOne,
    // Forms
    NewEntry,
    EditEntry,
    NewTask,
    EditResolution,
    NewObjective,
    SaveResultTitle,
    FieldDate,
    FieldTime,
    FieldTitle,
    FieldDescription,
    FieldNote,
    FieldPriority,
    FieldDueDate,
    FieldResolution,
    FieldReflection,
    FieldMood,
    FieldTargetDate,
    FieldProgress,
    FieldCategory,
    FieldNotes,
    FieldRating,
    // Validation and status messages
    TitleRequired,
    ResolutionRequired,
    InvalidDate,
    InvalidTime,
    InvalidProgress,
    EntrySaved,
    EntryDeleted,
    TaskAdded,
    ResolutionSaved,
    ObjectiveAdded,
    ResultSaved,
    // Delete confirmation
    DeleteEntryTitle,
    Yes,
    No,
    // Key hints and help
    HelpTitle,
    HintQuit,
    HintNew,
    HintEdit,
    HintDelete,
    HintToggle,
    HintHelp,
    HintDay,
    HintToday,
    HintProgress,
    HintSave,
    HintCancel,
    HintNextField,
    HintSwitchTabs,
    HintNavigate,
    HintCycleValue,
    HintCloseHelp,
    // Calendar names
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Locale {
    pub fn t(&self, key: TranslationKey) -> &'static str {
        match self {
            Locale::En => en(key),
            Locale::Fr => fr(key),
        }
    }

    /// Long display form: "Monday 15 January 2024" / "lundi 15 janvier 2024".
    pub fn format_date(&self, date: NaiveDate) -> String {
        let day_name = self.t(weekday_key(date.weekday()));
        let month_name = self.t(month_key(date.month()));
        format!("{} {} {} {}", day_name, date.day(), month_name, date.year())
    }

    /// `format_date` over an ISO "YYYY-MM-DD" string. Unparseable input is
    /// shown as-is rather than dropped.
    pub fn format_date_str(&self, date: &str) -> String {
        match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(parsed) => self.format_date(parsed),
            Err(_) => date.to_string(),
        }
    }

    pub fn priority_label(&self, priority: Priority) -> &'static str {
        self.t(match priority {
            Priority::Low => TranslationKey::PriorityLow,
            Priority::Medium => TranslationKey::PriorityMedium,
            Priority::High => TranslationKey::PriorityHigh,
        })
    }

    pub fn mood_label(&self, mood: Mood) -> &'static str {
        self.t(match mood {
            Mood::Excellent => TranslationKey::MoodExcellent,
            Mood::Good => TranslationKey::MoodGood,
            Mood::Neutral => TranslationKey::MoodNeutral,
            Mood::Poor => TranslationKey::MoodPoor,
        })
    }

    pub fn category_label(&self, category: Category) -> &'static str {
        self.t(match category {
            Category::Personal => TranslationKey::CategoryPersonal,
            Category::Professional => TranslationKey::CategoryProfessional,
            Category::Health => TranslationKey::CategoryHealth,
            Category::Learning => TranslationKey::CategoryLearning,
        })
    }

    pub fn rating_label(&self, rating: u8) -> &'static str {
        self.t(match rating {
            5 => TranslationKey::RatingFive,
            4 => TranslationKey::RatingFour,
            3 => TranslationKey::RatingThree,
            2 => TranslationKey::RatingTwo,
            _ => TranslationKey::RatingOne,
        })
    }
}

fn weekday_key(weekday: Weekday) -> TranslationKey {
    use TranslationKey::*;
    match weekday {
        Weekday::Sun => Sunday,
        Weekday::Mon => Monday,
        Weekday::Tue => Tuesday,
        Weekday::Wed => Wednesday,
        Weekday::Thu => Thursday,
        Weekday::Fri => Friday,
        Weekday::Sat => Saturday,
    }
}

fn month_key(month: u32) -> TranslationKey {
    use TranslationKey::*;
    match month {
        1 => January,
        2 => February,
        3 => March,
        4 => April,
        5 => May,
        6 => June,
        7 => July,
        8 => August,
        9 => September,
        10 => October,
        11 => November,
        _ => December,
    }
}

fn en(key: TranslationKey) -> &'static str {
    use TranslationKey::*;
    match key {
        TabProgram => "Program",
        TabTasks => "Tasks",
        TabResolution => "Resolution",
        TabObjectives => "Objectives",
        TabResults => "Results",
        ProgramTitle => "Daily Program",
        TodaysProgress => "Today's progress",
        Of => "of",
        Completed => "completed",
        NoEntriesForDay => "No entries for this day",
        TasksTitle => "Tasks",
        Pending => "Pending",
        Due => "due",
        PriorityLow => "low",
        PriorityMedium => "medium",
        PriorityHigh => "high",
        NoTasks => "No tasks yet",
        ResolutionTitle => "Daily Resolution",
        TodaysResolution => "Today's resolution",
        CurrentMood => "Current mood",
        EveningReflection => "Evening reflection",
        SavedResolution => "Saved resolution",
        ReflectionLabel => "Reflection",
        MoodLabel => "Mood",
        NoResolutionYet => "No resolution saved yet",
        MoodExcellent => "excellent",
        MoodGood => "good",
        MoodNeutral => "neutral",
        MoodPoor => "poor",
        ObjectivesTitle => "Objectives",
        ActiveSection => "Active",
        CompletedSection => "Completed",
        TargetDate => "Target date",
        AverageProgress => "Average progress",
        NoObjectives => "No objectives yet",
        CategoryPersonal => "personal",
        CategoryProfessional => "professional",
        CategoryHealth => "health",
        CategoryLearning => "learning",
        ResultsTitle => "Daily Results",
        TodaysSummary => "Today's summary",
        TasksDone => "Tasks done",
        ProgramDone => "Program completed",
        ObjectivesAvg => "Objectives",
        OverallRating => "Overall rating",
        NotesLabel => "Notes",
        SavedResult => "Saved result",
        NoResultYet => "No result saved yet",
        RatingFive => "Excellent day!",
        RatingFour => "Great day!",
        RatingThree => "Good day",
        RatingTwo => "Could be better",
        RatingOne => "Tough day",
        NewEntry => "New program entry",
        EditEntry => "Edit program entry",
        NewTask => "New task",
        EditResolution => "Edit resolution",
        NewObjective => "New objective",
        SaveResultTitle => "Save daily result",
        FieldDate => "Date",
        FieldTime => "Time",
        FieldTitle => "Title",
        FieldDescription => "Description",
        FieldNote => "Note",
        FieldPriority => "Priority",
        FieldDueDate => "Due date",
        FieldResolution => "Resolution",
        FieldReflection => "Reflection",
        FieldMood => "Mood",
        FieldTargetDate => "Target date",
        FieldProgress => "Progress",
        FieldCategory => "Category",
        FieldNotes => "Notes",
        FieldRating => "Rating",
        TitleRequired => "Title is required",
        ResolutionRequired => "Resolution is required",
        InvalidDate => "Invalid date (expected YYYY-MM-DD)",
        InvalidTime => "Invalid time (expected HH:MM)",
        InvalidProgress => "Progress must be a number between 0 and 100",
        EntrySaved => "Entry saved",
        EntryDeleted => "Entry deleted",
        TaskAdded => "Task added",
        ResolutionSaved => "Resolution saved",
        ObjectiveAdded => "Objective added",
        ResultSaved => "Result saved",
        DeleteEntryTitle => "Delete this entry?",
        Yes => "Yes",
        No => "No",
        HelpTitle => "Help - Key Bindings",
        HintQuit => "Quit",
        HintNew => "New",
        HintEdit => "Edit",
        HintDelete => "Delete",
        HintToggle => "Toggle done",
        HintHelp => "Help",
        HintDay => "Prev/next day",
        HintToday => "Today",
        HintProgress => "Progress -/+",
        HintSave => "Save",
        HintCancel => "Cancel",
        HintNextField => "Next field",
        HintSwitchTabs => "Switch tabs",
        HintNavigate => "Navigate",
        HintCycleValue => "Change value",
        HintCloseHelp => "Close help",
        Sunday => "Sunday",
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
        January => "January",
        February => "February",
        March => "March",
        April => "April",
        May => "May",
        June => "June",
        July => "July",
        August => "August",
        September => "September",
        October => "October",
        November => "November",
        December => "December",
    }
}

fn fr(key: TranslationKey) -> &'static str {
    use TranslationKey::*;
    match key {
        TabProgram => "Programme",
        TabTasks => "Tâches",
        TabResolution => "Résolution",
        TabObjectives => "Objectifs",
        TabResults => "Bilan",
        ProgramTitle => "Programme du jour",
        TodaysProgress => "Progression du jour",
        Of => "sur",
        Completed => "terminé(s)",
        NoEntriesForDay => "Aucune entrée pour ce jour",
        TasksTitle => "Tâches",
        Pending => "En attente",
        Due => "échéance",
        PriorityLow => "basse",
        PriorityMedium => "moyenne",
        PriorityHigh => "haute",
        NoTasks => "Aucune tâche",
        ResolutionTitle => "Résolution du jour",
        TodaysResolution => "Résolution d'aujourd'hui",
        CurrentMood => "Humeur actuelle",
        EveningReflection => "Réflexion du soir",
        SavedResolution => "Résolution enregistrée",
        ReflectionLabel => "Réflexion",
        MoodLabel => "Humeur",
        NoResolutionYet => "Aucune résolution enregistrée",
        MoodExcellent => "excellente",
        MoodGood => "bonne",
        MoodNeutral => "neutre",
        MoodPoor => "mauvaise",
        ObjectivesTitle => "Objectifs",
        ActiveSection => "En cours",
        CompletedSection => "Terminés",
        TargetDate => "Date cible",
        AverageProgress => "Progression moyenne",
        NoObjectives => "Aucun objectif",
        CategoryPersonal => "personnel",
        CategoryProfessional => "professionnel",
        CategoryHealth => "santé",
        CategoryLearning => "apprentissage",
        ResultsTitle => "Bilan du jour",
        TodaysSummary => "Résumé de la journée",
        TasksDone => "Tâches terminées",
        ProgramDone => "Programme terminé",
        ObjectivesAvg => "Objectifs",
        OverallRating => "Note globale",
        NotesLabel => "Notes",
        SavedResult => "Bilan enregistré",
        NoResultYet => "Aucun bilan enregistré",
        RatingFive => "Excellente journée !",
        RatingFour => "Très bonne journée !",
        RatingThree => "Bonne journée",
        RatingTwo => "Peut mieux faire",
        RatingOne => "Journée difficile",
        NewEntry => "Nouvelle entrée au programme",
        EditEntry => "Modifier l'entrée",
        NewTask => "Nouvelle tâche",
        EditResolution => "Modifier la résolution",
        NewObjective => "Nouvel objectif",
        SaveResultTitle => "Enregistrer le bilan",
        FieldDate => "Date",
        FieldTime => "Heure",
        FieldTitle => "Titre",
        FieldDescription => "Description",
        FieldNote => "Note",
        FieldPriority => "Priorité",
        FieldDueDate => "Échéance",
        FieldResolution => "Résolution",
        FieldReflection => "Réflexion",
        FieldMood => "Humeur",
        FieldTargetDate => "Date cible",
        FieldProgress => "Progression",
        FieldCategory => "Catégorie",
        FieldNotes => "Notes",
        FieldRating => "Note",
        TitleRequired => "Le titre est obligatoire",
        ResolutionRequired => "La résolution est obligatoire",
        InvalidDate => "Date invalide (format AAAA-MM-JJ)",
        InvalidTime => "Heure invalide (format HH:MM)",
        InvalidProgress => "La progression doit être un nombre entre 0 et 100",
        EntrySaved => "Entrée enregistrée",
        EntryDeleted => "Entrée supprimée",
        TaskAdded => "Tâche ajoutée",
        ResolutionSaved => "Résolution enregistrée",
        ObjectiveAdded => "Objectif ajouté",
        ResultSaved => "Bilan enregistré",
        DeleteEntryTitle => "Supprimer cette entrée ?",
        Yes => "Oui",
        No => "Non",
        HelpTitle => "Aide - Raccourcis clavier",
        HintQuit => "Quitter",
        HintNew => "Nouveau",
        HintEdit => "Modifier",
        HintDelete => "Supprimer",
        HintToggle => "Basculer",
        HintHelp => "Aide",
        HintDay => "Jour préc./suiv.",
        HintToday => "Aujourd'hui",
        HintProgress => "Progression -/+",
        HintSave => "Enregistrer",
        HintCancel => "Annuler",
        HintNextField => "Champ suivant",
        HintSwitchTabs => "Changer d'onglet",
        HintNavigate => "Naviguer",
        HintCycleValue => "Changer la valeur",
        HintCloseHelp => "Fermer l'aide",
        Sunday => "dimanche",
        Monday => "lundi",
        Tuesday => "mardi",
        Wednesday => "mercredi",
        Thursday => "jeudi",
        Friday => "vendredi",
        Saturday => "samedi",
        January => "janvier",
        February => "février",
        March => "mars",
        April => "avril",
        May => "mai",
        June => "juin",
        July => "juillet",
        August => "août",
        September => "septembre",
        October => "octobre",
        November => "novembre",
        December => "décembre",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("fr".parse::<Locale>().unwrap(), Locale::Fr);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_format_date_english() {
        // 2024-01-15 was a Monday.
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(Locale::En.format_date(date), "Monday 15 January 2024");
    }

    #[test]
    fn test_format_date_french() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(Locale::Fr.format_date(date), "lundi 15 janvier 2024");
    }

    #[test]
    fn test_format_date_str_falls_back_on_bad_input() {
        assert_eq!(Locale::En.format_date_str("not-a-date"), "not-a-date");
        assert_eq!(
            Locale::En.format_date_str("2024-12-25"),
            "Wednesday 25 December 2024"
        );
    }

    #[test]
    fn test_enum_labels_are_localized() {
        assert_eq!(Locale::En.priority_label(crate::models::Priority::High), "high");
        assert_eq!(Locale::Fr.priority_label(crate::models::Priority::High), "haute");
        assert_eq!(Locale::Fr.mood_label(crate::models::Mood::Good), "bonne");
        assert_eq!(
            Locale::Fr.category_label(crate::models::Category::Learning),
            "apprentissage"
        );
    }
}

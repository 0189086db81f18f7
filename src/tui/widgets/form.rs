use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::Config;
use crate::i18n::{Locale, TranslationKey};
use crate::tui::app::{
    EntryField, EntryForm, ObjectiveField, ObjectiveForm, PlannerForm, ResolutionField,
    ResolutionForm, ResultField, ResultForm, TaskField, TaskForm,
};
use crate::tui::widgets::color::parse_color;
use crate::tui::widgets::input::Input;

/// One rendered form row. Text fields show a cursor when active; selector
/// fields cycle with the arrow keys and render as "< value >".
enum FieldValue<'a> {
    Text(&'a Input),
    Selector(String),
}

struct FieldRow<'a> {
    label: &'static str,
    value: FieldValue<'a>,
    current: bool,
}

pub fn render_form(f: &mut Frame, area: Rect, form: &PlannerForm, config: &Config, locale: Locale) {
    match form {
        PlannerForm::Entry(form) => render_entry_form(f, area, form, config, locale),
        PlannerForm::Task(form) => render_task_form(f, area, form, config, locale),
        PlannerForm::Resolution(form) => render_resolution_form(f, area, form, config, locale),
        PlannerForm::Objective(form) => render_objective_form(f, area, form, config, locale),
        PlannerForm::Result(form) => render_result_form(f, area, form, config, locale),
    }
}

fn render_entry_form(f: &mut Frame, area: Rect, form: &EntryForm, config: &Config, locale: Locale) {
    let title = if form.editing_id.is_some() {
        locale.t(TranslationKey::EditEntry)
    } else {
        locale.t(TranslationKey::NewEntry)
    };
    let rows = vec![
        FieldRow {
            label: locale.t(TranslationKey::FieldDate),
            value: FieldValue::Text(&form.date),
            current: form.current_field == EntryField::Date,
        },
        FieldRow {
            label: locale.t(TranslationKey::FieldTime),
            value: FieldValue::Text(&form.time),
            current: form.current_field == EntryField::Time,
        },
        FieldRow {
            label: locale.t(TranslationKey::FieldTitle),
            value: FieldValue::Text(&form.title),
            current: form.current_field == EntryField::Title,
        },
        FieldRow {
            label: locale.t(TranslationKey::FieldDescription),
            value: FieldValue::Text(&form.description),
            current: form.current_field == EntryField::Description,
        },
        FieldRow {
            label: locale.t(TranslationKey::FieldNote),
            value: FieldValue::Text(&form.note),
            current: form.current_field == EntryField::Note,
        },
    ];
    render_rows(f, area, title, &rows, config);
}

fn render_task_form(f: &mut Frame, area: Rect, form: &TaskForm, config: &Config, locale: Locale) {
    let rows = vec![
        FieldRow {
            label: locale.t(TranslationKey::FieldTitle),
            value: FieldValue::Text(&form.title),
            current: form.current_field == TaskField::Title,
        },
        FieldRow {
            label: locale.t(TranslationKey::FieldDescription),
            value: FieldValue::Text(&form.description),
            current: form.current_field == TaskField::Description,
        },
        FieldRow {
            label: locale.t(TranslationKey::FieldPriority),
            value: FieldValue::Selector(locale.priority_label(form.priority()).to_string()),
            current: form.current_field == TaskField::Priority,
        },
        FieldRow {
            label: locale.t(TranslationKey::FieldDueDate),
            value: FieldValue::Text(&form.due_date),
            current: form.current_field == TaskField::DueDate,
        },
    ];
    render_rows(f, area, locale.t(TranslationKey::NewTask), &rows, config);
}

fn render_resolution_form(
    f: &mut Frame,
    area: Rect,
    form: &ResolutionForm,
    config: &Config,
    locale: Locale,
) {
    let rows = vec![
        FieldRow {
            label: locale.t(TranslationKey::FieldResolution),
            value: FieldValue::Text(&form.resolution),
            current: form.current_field == ResolutionField::Resolution,
        },
        FieldRow {
            label: locale.t(TranslationKey::FieldReflection),
            value: FieldValue::Text(&form.reflection),
            current: form.current_field == ResolutionField::Reflection,
        },
        FieldRow {
            label: locale.t(TranslationKey::FieldMood),
            value: FieldValue::Selector(locale.mood_label(form.mood()).to_string()),
            current: form.current_field == ResolutionField::Mood,
        },
    ];
    render_rows(f, area, locale.t(TranslationKey::EditResolution), &rows, config);
}

fn render_objective_form(
    f: &mut Frame,
    area: Rect,
    form: &ObjectiveForm,
    config: &Config,
    locale: Locale,
) {
    let rows = vec![
        FieldRow {
            label: locale.t(TranslationKey::FieldTitle),
            value: FieldValue::Text(&form.title),
            current: form.current_field == ObjectiveField::Title,
        },
        FieldRow {
            label: locale.t(TranslationKey::FieldDescription),
            value: FieldValue::Text(&form.description),
            current: form.current_field == ObjectiveField::Description,
        },
        FieldRow {
            label: locale.t(TranslationKey::FieldTargetDate),
            value: FieldValue::Text(&form.target_date),
            current: form.current_field == ObjectiveField::TargetDate,
        },
        FieldRow {
            label: locale.t(TranslationKey::FieldProgress),
            value: FieldValue::Text(&form.progress),
            current: form.current_field == ObjectiveField::Progress,
        },
        FieldRow {
            label: locale.t(TranslationKey::FieldCategory),
            value: FieldValue::Selector(locale.category_label(form.category()).to_string()),
            current: form.current_field == ObjectiveField::Category,
        },
    ];
    render_rows(f, area, locale.t(TranslationKey::NewObjective), &rows, config);
}

fn render_result_form(
    f: &mut Frame,
    area: Rect,
    form: &ResultForm,
    config: &Config,
    locale: Locale,
) {
    let stars = "★".repeat(form.rating.min(5) as usize)
        + &"☆".repeat(5usize.saturating_sub(form.rating as usize));
    let rows = vec![
        FieldRow {
            label: locale.t(TranslationKey::FieldNotes),
            value: FieldValue::Text(&form.notes),
            current: form.current_field == ResultField::Notes,
        },
        FieldRow {
            label: locale.t(TranslationKey::FieldRating),
            value: FieldValue::Selector(format!("{} ({})", stars, locale.rating_label(form.rating))),
            current: form.current_field == ResultField::Rating,
        },
    ];
    render_rows(f, area, locale.t(TranslationKey::SaveResultTitle), &rows, config);
}

fn render_rows(f: &mut Frame, area: Rect, title: &str, rows: &[FieldRow], config: &Config) {
    let active_theme = config.get_active_theme();
    let fg_color = parse_color(&active_theme.fg);
    let bg_color = parse_color(&active_theme.bg);
    let highlight_bg = parse_color(&active_theme.highlight_bg);

    let mut lines: Vec<Line> = Vec::with_capacity(rows.len());
    for row in rows {
        let label_style = if row.current {
            Style::default().fg(highlight_bg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fg_color)
        };
        let value_span = match &row.value {
            FieldValue::Text(input) => {
                Span::styled(input.value().to_string(), Style::default().fg(fg_color))
            }
            FieldValue::Selector(value) => {
                if row.current {
                    Span::styled(
                        format!("< {} >", value),
                        Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(value.clone(), Style::default().fg(fg_color))
                }
            }
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", row.label), label_style),
            value_span,
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .style(Style::default().fg(fg_color).bg(bg_color)),
        )
        .style(Style::default().fg(fg_color).bg(bg_color));
    f.render_widget(paragraph, area);

    // Place the terminal cursor inside the active text field
    for (index, row) in rows.iter().enumerate() {
        if !row.current {
            continue;
        }
        if let FieldValue::Text(input) = &row.value {
            let label_width = row.label.chars().count() as u16 + 2;
            let x = area.x + 1 + label_width + input.cursor() as u16;
            let y = area.y + 1 + index as u16;
            if x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1) {
                f.set_cursor_position(Position::new(x, y));
            }
        }
        break;
    }
}

use directories::ProjectDirs;
use std::path::PathBuf;

/// Profile mode for the application (dev or prod), selected with the
/// `--dev` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Prod,
}

/// Get the configuration directory path.
/// If profile is Dev, uses "dayplan-dev" instead of "dayplan".
pub fn get_config_dir(profile: Profile) -> Option<PathBuf> {
    let app_name = match profile {
        Profile::Dev => "dayplan-dev",
        Profile::Prod => "dayplan",
    };
    ProjectDirs::from("com", "dayplan", app_name).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Parse a date string in ISO 8601 format (YYYY-MM-DD)
pub fn parse_date(date_str: &str) -> Result<chrono::NaiveDate, chrono::ParseError> {
    chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
}

/// Parse a 24h time string (HH:MM)
pub fn parse_time(time_str: &str) -> Result<chrono::NaiveTime, chrono::ParseError> {
    chrono::NaiveTime::parse_from_str(time_str, "%H:%M")
}

/// The current local calendar date as an ISO 8601 string (YYYY-MM-DD).
/// Local rather than UTC: "today" in a planner follows the user's clock.
pub fn get_current_date_string() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Shift an ISO date string by a number of days. Unparseable input is
/// returned unchanged.
pub fn offset_date(date_str: &str, days: i64) -> String {
    match parse_date(date_str) {
        Ok(date) => (date + chrono::Duration::days(days))
            .format("%Y-%m-%d")
            .to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Parsed key binding information
#[derive(Debug, Clone)]
pub struct ParsedKeyBinding {
    pub key_code: crossterm::event::KeyCode,
    pub requires_ctrl: bool,
}

/// Check if a key event has the primary modifier (Ctrl on Windows/Linux,
/// Option/Alt on macOS, where terminals commonly deliver Option as Alt).
pub fn has_primary_modifier(modifiers: crossterm::event::KeyModifiers) -> bool {
    #[cfg(target_os = "macos")]
    {
        modifiers.contains(crossterm::event::KeyModifiers::CONTROL)
            || modifiers.contains(crossterm::event::KeyModifiers::ALT)
    }

    #[cfg(not(target_os = "macos"))]
    {
        modifiers.contains(crossterm::event::KeyModifiers::CONTROL)
    }
}

/// Format a key binding string for display, showing the platform-appropriate
/// modifier ("Ctrl+" reads as "Opt+" on macOS).
pub fn format_key_binding_for_display(key_binding: &str) -> String {
    #[cfg(target_os = "macos")]
    {
        key_binding.replace("Ctrl+", "Opt+")
    }

    #[cfg(not(target_os = "macos"))]
    {
        key_binding.to_string()
    }
}

/// Parse a key binding string from config into a ParsedKeyBinding.
/// Supports single keys ("q", "[", "+"), special keys ("Enter", "F1",
/// "Space") and the Ctrl modifier ("Ctrl+s").
pub fn parse_key_binding(key_str: &str) -> Result<ParsedKeyBinding, String> {
    let key_str = key_str.trim();

    if let Some(key_part) = key_str.strip_prefix("Ctrl+") {
        let key_code = parse_key_code(key_part)?;
        return Ok(ParsedKeyBinding {
            key_code,
            requires_ctrl: true,
        });
    }

    let key_code = parse_key_code(key_str)?;
    Ok(ParsedKeyBinding {
        key_code,
        requires_ctrl: false,
    })
}

fn parse_key_code(key_str: &str) -> Result<crossterm::event::KeyCode, String> {
    use crossterm::event::KeyCode;

    match key_str {
        "Enter" => Ok(KeyCode::Enter),
        "Esc" | "Escape" => Ok(KeyCode::Esc),
        "Backspace" => Ok(KeyCode::Backspace),
        "Tab" => Ok(KeyCode::Tab),
        "Space" | " " => Ok(KeyCode::Char(' ')),
        "Left" => Ok(KeyCode::Left),
        "Right" => Ok(KeyCode::Right),
        "Up" => Ok(KeyCode::Up),
        "Down" => Ok(KeyCode::Down),
        "Home" => Ok(KeyCode::Home),
        "End" => Ok(KeyCode::End),
        "PageUp" => Ok(KeyCode::PageUp),
        "PageDown" => Ok(KeyCode::PageDown),
        "Delete" => Ok(KeyCode::Delete),
        "F1" => Ok(KeyCode::F(1)),
        "F2" => Ok(KeyCode::F(2)),
        "F3" => Ok(KeyCode::F(3)),
        "F4" => Ok(KeyCode::F(4)),
        _ => {
            let mut chars = key_str.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(KeyCode::Char(c)),
                _ => Err(format!("Unknown key binding: {}", key_str)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-01-15").is_ok());
        assert!(parse_date("2024-13-40").is_err());
        assert!(parse_date("15/01/2024").is_err());
    }

    #[test]
    fn test_parse_time() {
        assert!(parse_time("07:00").is_ok());
        assert!(parse_time("23:59").is_ok());
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("9am").is_err());
    }

    #[test]
    fn test_offset_date() {
        assert_eq!(offset_date("2024-01-15", 1), "2024-01-16");
        assert_eq!(offset_date("2024-01-15", -1), "2024-01-14");
        assert_eq!(offset_date("2024-02-28", 1), "2024-02-29"); // leap year
        assert_eq!(offset_date("garbage", 7), "garbage");
    }

    #[test]
    fn test_parse_key_binding() {
        let binding = parse_key_binding("q").unwrap();
        assert_eq!(binding.key_code, KeyCode::Char('q'));
        assert!(!binding.requires_ctrl);

        let binding = parse_key_binding("Ctrl+s").unwrap();
        assert_eq!(binding.key_code, KeyCode::Char('s'));
        assert!(binding.requires_ctrl);

        let binding = parse_key_binding("Space").unwrap();
        assert_eq!(binding.key_code, KeyCode::Char(' '));

        let binding = parse_key_binding("[").unwrap();
        assert_eq!(binding.key_code, KeyCode::Char('['));

        assert!(parse_key_binding("NotAKey").is_err());
    }
}

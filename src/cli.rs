use clap::Parser;
use thiserror::Error;

use crate::i18n::Locale;

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "Daily program, tasks, resolution, objectives and results - a terminal planner")]
#[command(version)]
pub struct Cli {
    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use development mode (uses a separate dev config)
    #[arg(long)]
    pub dev: bool,

    /// Start with an empty planner instead of the sample data
    #[arg(long)]
    pub empty: bool,

    /// Override the configured locale (en or fr)
    #[arg(long)]
    pub locale: Option<String>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid --locale value '{0}': expected \"en\" or \"fr\"")]
    LocaleError(String),
}

/// Resolve the display locale: the --locale flag wins over the config file.
pub fn resolve_locale(flag: Option<&str>, configured: Locale) -> Result<Locale, CliError> {
    match flag {
        Some(value) => value
            .parse()
            .map_err(|_| CliError::LocaleError(value.to_string())),
        None => Ok(configured),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_locale_prefers_flag() {
        assert_eq!(resolve_locale(Some("fr"), Locale::En).unwrap(), Locale::Fr);
        assert_eq!(resolve_locale(None, Locale::Fr).unwrap(), Locale::Fr);
        assert!(resolve_locale(Some("xx"), Locale::En).is_err());
    }
}

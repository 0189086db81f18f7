use clap::Parser;
use color_eyre::Result;
use dayplan::{Config, PlannerStore, Profile, cli, cli::Cli};

fn main() -> Result<()> {
    // Set up error reporting with color-eyre
    color_eyre::install()?;

    let cli = Cli::parse();

    // Determine profile: --dev flag enables dev mode, otherwise use prod
    let profile = if cli.dev { Profile::Dev } else { Profile::Prod };

    // Load configuration with the determined profile
    // Note: --config is parsed but not yet used to override the config path
    let mut config = Config::load_with_profile(profile)?;
    config.locale = cli::resolve_locale(cli.locale.as_deref(), config.locale)?;

    // Build the planner store: one instance owns all state for the session
    let today = dayplan::utils::get_current_date_string();
    let store = if cli.empty {
        PlannerStore::new()
    } else {
        PlannerStore::with_sample_data(&today)
    };

    let app = dayplan::tui::App::new(config, store, today);
    dayplan::tui::run_event_loop(app)?;

    Ok(())
}

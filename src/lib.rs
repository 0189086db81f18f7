pub mod cli;
pub mod config;
pub mod i18n;
pub mod models;
pub mod store;
pub mod tui;
pub mod utils;

pub use config::Config;
pub use i18n::Locale;
pub use store::PlannerStore;
pub use utils::Profile;

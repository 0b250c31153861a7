pub mod config;
pub mod fetcher;
mod loader;

pub use config::{SettingsFile, load_settings};
pub use fetcher::SourceFetcher;
pub use loader::{Loader, parse_local};

pub mod dto;
pub mod loader;

pub use dto::{AppConfig, AppEnvironment};
pub use loader::{load_config, load_config_from};

pub mod app;
pub mod config;
pub mod observability;

pub use app::{App, RecipeEdit};
pub use config::Settings;

mod app;
mod config;

pub use app::KeyboardFormApp;
pub use config::{Config, FormConfig, KeyboardConfig, WindowConfig};

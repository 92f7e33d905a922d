//! A dropdown toggle and a sample select for the terminal, on `dropdom`.

pub mod app;
pub mod binding;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod select;
pub mod toggle;

pub use app::{is_quit, App, Input, Screen};
pub use binding::Binding;
pub use config::Config;
pub use error::AppError;
pub use select::{Chevron, SampleSelect};
pub use toggle::DropdownToggle;

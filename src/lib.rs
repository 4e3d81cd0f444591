pub mod app;
pub mod error;
pub mod fetch;
pub mod theme;
pub mod types;
pub mod ui;
pub mod widgets;

pub use error::{RepoBrowserError, Result};

//! Reusable components

mod cards;
mod header;
mod result_panel;

pub use cards::{ActivityRow, StatCardView};
pub use header::AppHeader;
pub use result_panel::ResultPanel;

//! Widgets drawn by the app

mod map;
mod status;

pub use map::MapWidget;
pub use status::StatusWidget;

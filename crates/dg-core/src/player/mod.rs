//! The player character and what they carry

mod inventory;
mod you;

pub use inventory::Inventory;
pub use you::Player;

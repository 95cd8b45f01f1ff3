//! Worker implementations

mod builder;
mod offline;

pub use builder::{Vordr, VordrBuilder};
pub use offline::OfflineWorker;

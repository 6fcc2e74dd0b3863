pub mod layout;
pub mod partition;
pub mod sink;
pub mod strategy;

pub use layout::OutputLayout;
pub use partition::{Mode, SortKey, Strategy};
pub use sink::DedupSink;
pub use strategy::run_strategy;

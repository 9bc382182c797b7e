pub mod merge;
pub mod store;

pub use merge::{merge, MergeOutcome};
pub use store::WindowStore;

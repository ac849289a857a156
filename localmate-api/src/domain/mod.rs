mod task;
mod time_entry;

pub use task::*;
pub use time_entry::*;

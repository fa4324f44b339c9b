//! CLI command handlers, one per file.

mod columns;
mod fetch;
mod last_week;
mod link;
mod saved_name;

pub use columns::run_columns;
pub use fetch::{run_fetch, FetchArgs};
pub use last_week::run_last_week;
pub use link::run_link;
pub use saved_name::run_saved_name;

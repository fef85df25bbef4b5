//! Command implementations

mod languages;
mod list;
mod repl;

pub use languages::languages;
pub use list::list;
pub use repl::repl;

//! Command handlers module

pub mod help;
pub mod start;

pub use help::handle_help;
pub use start::handle_start;

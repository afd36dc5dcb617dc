//! Command-line parameter handling.
//!
//! Parameters arrive as `name=value` tokens from repeated `-p` flags. Each
//! token is split, checked against the task's declared parameters, and
//! applied to the task's value store.

// Export public items from submodules
pub mod processing;

// Re-exports for convenience
pub use processing::{apply_command_line, parse_assignment};

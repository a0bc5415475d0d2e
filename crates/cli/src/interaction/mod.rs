//! Interactive menu and user input handling.
//!
//! This module provides the terminal-facing half of the roster manager: the
//! main menu, blocking line prompts with re-prompt loops, the delete
//! confirmation dialog and colored record rendering.

// Export public items from submodules
pub mod input;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use input::{confirm_deletion, pause, prompt_menu_choice, prompt_required};
pub use types::{is_affirmative, MenuChoice};
pub use ui::Ui;

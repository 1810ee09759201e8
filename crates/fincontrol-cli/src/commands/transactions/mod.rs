//! Transaction command handlers.

mod add;
mod clear;
mod delete;
mod export;
mod list;
mod seed;

pub use add::handle_add;
pub use clear::handle_clear;
pub use delete::handle_delete;
pub use export::handle_export;
pub use list::handle_list;
pub use seed::handle_seed;

use crate::errors::CliError;
use crate::ui::can_prompt;

/// Fail unless a confirmation prompt can be shown.
fn require_prompt(action: &str) -> Result<(), CliError> {
    if can_prompt() {
        return Ok(());
    }
    Err(CliError::invalid_input(format!(
        "Refusing to {} without confirmation on a non-interactive terminal\nHint: Pass --force to skip the prompt",
        action
    )))
}

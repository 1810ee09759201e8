//! Terminal confirmation prompts.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm as ConfirmPrompt;
use tracing::warn;

use fincontrol_core::confirm::localize_prompt;
use fincontrol_core::{Confirm, Locale};

/// Asks on the terminal via dialoguer, in the display locale. Defaults to "no".
#[derive(Debug, Default)]
pub struct TerminalConfirm {
    locale: Locale,
}

impl TerminalConfirm {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        match ConfirmPrompt::with_theme(&ColorfulTheme::default())
            .with_prompt(localize_prompt(prompt, self.locale))
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(err) => {
                warn!(error = %err, "confirmation prompt failed; treating as declined");
                false
            }
        }
    }
}

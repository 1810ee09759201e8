//! Confirmation capability for destructive ledger operations.
//!
//! The host supplies a yes/no prompt; the store asks it before deleting.
//! Closures work directly, so tests can script answers:
//!
//! ```
//! use fincontrol_core::Confirm;
//!
//! let mut always_no = |_: &str| false;
//! assert!(!always_no.confirm("Delete?"));
//! ```

use crate::format::Locale;

/// Prompt shown before deleting a single transaction.
pub const DELETE_PROMPT: &str = "Tem certeza que deseja excluir esta transação?";

/// Prompt shown before deleting every transaction.
pub const CLEAR_PROMPT: &str =
    "Tem certeza que deseja excluir TODAS as transações? Esta ação não pode ser desfeita.";

const DELETE_PROMPT_EN: &str = "Are you sure you want to delete this transaction?";
const CLEAR_PROMPT_EN: &str =
    "Are you sure you want to delete ALL transactions? This action cannot be undone.";

/// Text to show for one of the store's prompts in `locale`.
///
/// Prompts the store does not issue pass through unchanged.
pub fn localize_prompt(prompt: &str, locale: Locale) -> &str {
    match (locale, prompt) {
        (Locale::EnUs, DELETE_PROMPT) => DELETE_PROMPT_EN,
        (Locale::EnUs, CLEAR_PROMPT) => CLEAR_PROMPT_EN,
        _ => prompt,
    }
}

/// A blocking yes/no prompt.
pub trait Confirm {
    /// Ask `prompt`; `true` means proceed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Outcome of a confirmation-gated operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The user agreed and the operation ran
    Confirmed,
    /// The user declined; nothing changed
    Declined,
}

impl Decision {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_receives_prompt() {
        let mut seen = Vec::new();
        let mut confirm = |prompt: &str| {
            seen.push(prompt.to_string());
            true
        };
        assert!(confirm.confirm(DELETE_PROMPT));
        assert_eq!(seen, vec![DELETE_PROMPT.to_string()]);
    }

    #[test]
    fn test_localize_prompt() {
        assert_eq!(
            localize_prompt(DELETE_PROMPT, Locale::PtBr),
            "Tem certeza que deseja excluir esta transação?"
        );
        assert_eq!(
            localize_prompt(DELETE_PROMPT, Locale::EnUs),
            "Are you sure you want to delete this transaction?"
        );
        assert!(localize_prompt(CLEAR_PROMPT, Locale::EnUs).starts_with("Are you sure"));
        assert_eq!(localize_prompt("Continuar?", Locale::EnUs), "Continuar?");
    }

    #[test]
    fn test_decision_is_confirmed() {
        assert!(Decision::Confirmed.is_confirmed());
        assert!(!Decision::Declined.is_confirmed());
    }
}

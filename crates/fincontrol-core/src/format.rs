//! Locale-aware currency and date formatting.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{LedgerError, Result};
use crate::storage::{Transaction, TransactionKind};

/// Display locale for amounts and dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Brazilian Portuguese: `R$ 1.234,56`, `31/12/2024`
    #[default]
    PtBr,
    /// US English: `$1,234.56`, `12/31/2024`
    EnUs,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
        }
    }

    fn currency_prefix(&self) -> &'static str {
        match self {
            Self::PtBr => "R$ ",
            Self::EnUs => "$",
        }
    }

    fn thousands_separator(&self) -> char {
        match self {
            Self::PtBr => '.',
            Self::EnUs => ',',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Self::PtBr => ',',
            Self::EnUs => '.',
        }
    }

    fn date_pattern(&self) -> &'static str {
        match self {
            Self::PtBr => "%d/%m/%Y",
            Self::EnUs => "%m/%d/%Y",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Self::PtBr),
            "en-us" | "en" => Ok(Self::EnUs),
            other => Err(LedgerError::InvalidInput(format!(
                "Unsupported locale: {} (use pt-BR or en-US)",
                other
            ))),
        }
    }
}

/// Format `amount` as money, rounded to cents.
pub fn format_currency(amount: Decimal, locale: Locale) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{}{}{}{}{}",
        sign,
        locale.currency_prefix(),
        group_thousands(whole, locale.thousands_separator()),
        locale.decimal_separator(),
        cents
    )
}

/// Amount with the kind's sign, as shown in transaction rows (`+ R$ 10,00`).
pub fn format_signed_amount(transaction: &Transaction, locale: Locale) -> String {
    let sign = match transaction.kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };
    format!("{} {}", sign, format_currency(transaction.amount, locale))
}

/// Format a calendar date in the locale's day/month/year order.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    date.format(locale.date_pattern()).to_string()
}

/// Parse a user-entered amount. Accepts `.` or `,` as the decimal separator.
pub fn parse_amount(value: &str) -> Result<Decimal> {
    let trimmed = value.trim();
    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    Decimal::from_str(&normalized)
        .map_err(|_| LedgerError::InvalidInput(format!("Invalid amount: {}", value)))
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{NewTransaction, TransactionId};
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_pt_br() {
        assert_eq!(format_currency(dec!(3500), Locale::PtBr), "R$ 3.500,00");
        assert_eq!(format_currency(dec!(0), Locale::PtBr), "R$ 0,00");
        assert_eq!(format_currency(dec!(1234567.891), Locale::PtBr), "R$ 1.234.567,89");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(dec!(-250), Locale::PtBr), "-R$ 250,00");
        assert_eq!(format_currency(dec!(-1250.5), Locale::EnUs), "-$1,250.50");
    }

    #[test]
    fn test_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec!(0.125), Locale::EnUs), "$0.13");
        assert_eq!(format_currency(dec!(-0.001), Locale::EnUs), "$0.00");
    }

    #[test]
    fn test_signed_amount() {
        let tx = NewTransaction::new(
            "Mercado",
            dec!(250),
            "Alimentação",
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            TransactionKind::Expense,
        )
        .unwrap()
        .with_id(TransactionId(1));
        assert_eq!(format_signed_amount(&tx, Locale::PtBr), "- R$ 250,00");
    }

    #[test]
    fn test_date_order() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(format_date(date, Locale::PtBr), "31/12/2024");
        assert_eq!(format_date(date, Locale::EnUs), "12/31/2024");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("en_us".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("fr-FR".parse::<Locale>().is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("3500").unwrap(), dec!(3500));
        assert_eq!(parse_amount(" 12,50 ").unwrap(), dec!(12.5));
        assert_eq!(parse_amount("12.50").unwrap(), dec!(12.5));
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", '.'), "1");
        assert_eq!(group_thousands("1000", '.'), "1.000");
        assert_eq!(group_thousands("100000", ','), "100,000");
    }
}

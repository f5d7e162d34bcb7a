//! Transaction Rows
//!
//! Transforms the snapshot's transaction list into table row models.

use chrono::{DateTime, NaiveDate};

use crate::state::global::{Transaction, TxKind};
use crate::view::currency::format_inr;

/// Placeholder text for the single row shown when there are no transactions
pub const EMPTY_TABLE_TEXT: &str = "No transactions found";

/// Fallback label for transactions without a description
pub const NO_DESCRIPTION: &str = "No Description";

/// Visual tone derived from the transaction type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Income,
    Expense,
}

impl Tone {
    /// Display sign shown before the amount
    pub fn sign(self) -> char {
        match self {
            Tone::Income => '+',
            Tone::Expense => '-',
        }
    }

    /// Indicator dot colour
    pub fn color(self) -> &'static str {
        match self {
            Tone::Income => "#10B981",
            Tone::Expense => "#EF4444",
        }
    }

    /// Text colour class for the amount cell
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Income => "text-green-400",
            Tone::Expense => "text-red-400",
        }
    }
}

/// One rendered transaction row
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRow {
    pub description: String,
    pub category: String,
    pub date_text: String,
    /// Signed, formatted amount, e.g. `+ ₹5,000.00`
    pub amount_text: String,
    pub tone: Tone,
}

/// Table body model: data rows, or a single placeholder row when empty
#[derive(Clone, Debug, PartialEq)]
pub enum TableBody {
    Placeholder,
    Rows(Vec<TransactionRow>),
}

/// Build the table body for a transaction list
pub fn table_body(transactions: &[Transaction]) -> TableBody {
    if transactions.is_empty() {
        TableBody::Placeholder
    } else {
        TableBody::Rows(rows(transactions))
    }
}

/// Map each transaction to its row model, in payload order
pub fn rows(transactions: &[Transaction]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|tx| {
            let tone = match tx.kind {
                TxKind::Income => Tone::Income,
                TxKind::Expense => Tone::Expense,
            };

            TransactionRow {
                description: tx
                    .description
                    .clone()
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                category: tx.category.clone(),
                date_text: display_date(&tx.date),
                amount_text: format!("{} {}", tone.sign(), format_inr(tx.amount)),
                tone,
            }
        })
        .collect()
}

/// Localize a provider date to DD/MM/YYYY.
///
/// Accepts the ISO date the provider sends and the HTTP-date form some
/// serializers emit. Malformed input passes through as the display text.
pub fn display_date(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(kind: TxKind, description: Option<&str>) -> Transaction {
        Transaction {
            description: description.map(str::to_string),
            category: "Food".to_string(),
            date: "2024-03-15".to_string(),
            amount: 250.0,
            kind,
        }
    }

    #[test]
    fn test_empty_list_is_single_placeholder_row() {
        assert_eq!(table_body(&[]), TableBody::Placeholder);
    }

    #[test]
    fn test_row_count_matches_transactions() {
        let txs = vec![
            tx(TxKind::Income, Some("Salary")),
            tx(TxKind::Expense, Some("Groceries")),
            tx(TxKind::Expense, None),
        ];

        let rows = rows(&txs);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_sign_and_tone_follow_type() {
        let rows = rows(&[tx(TxKind::Income, None), tx(TxKind::Expense, None)]);

        assert_eq!(rows[0].tone, Tone::Income);
        assert!(rows[0].amount_text.starts_with("+ ₹"));
        assert_eq!(rows[1].tone, Tone::Expense);
        assert!(rows[1].amount_text.starts_with("- ₹"));
    }

    #[test]
    fn test_missing_description_falls_back() {
        let rows = rows(&[tx(TxKind::Expense, None)]);
        assert_eq!(rows[0].description, NO_DESCRIPTION);
    }

    #[test]
    fn test_date_is_localized() {
        assert_eq!(display_date("2024-03-15"), "15/03/2024");
    }

    #[test]
    fn test_malformed_date_passes_through() {
        assert_eq!(display_date("not-a-date"), "not-a-date");
    }
}

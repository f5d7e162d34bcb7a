//! Bill Rows
//!
//! Due-date classification and row models for the upcoming bills list.

use chrono::NaiveDate;

use crate::state::global::UpcomingBill;
use crate::view::currency::format_inr_whole;

/// Placeholder text shown when no bills are upcoming
pub const EMPTY_BILLS_TEXT: &str = "No pending bills";

/// Urgency classification for an upcoming bill.
///
/// Derived from whole calendar days between a midnight-normalized "today"
/// and the due date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueStatus {
    /// Past due by this many days
    Overdue(i64),
    DueToday,
    /// Due within the next three days
    DueSoon(i64),
    /// Further out; no urgency label
    Scheduled,
}

impl DueStatus {
    /// Accent colour for the bill row
    pub fn color(self) -> &'static str {
        match self {
            DueStatus::Overdue(_) => "#e74c3c",
            DueStatus::DueToday | DueStatus::DueSoon(_) => "#f39c12",
            DueStatus::Scheduled => "#3498db",
        }
    }

    /// Urgency label, `None` for scheduled bills
    pub fn label(self) -> Option<String> {
        match self {
            DueStatus::Overdue(days) => Some(format!("{} days overdue", days)),
            DueStatus::DueToday => Some("Due today!".to_string()),
            DueStatus::DueSoon(days) => Some(format!("{} days left", days)),
            DueStatus::Scheduled => None,
        }
    }
}

/// Classify a due date relative to `today`
pub fn due_status(due: NaiveDate, today: NaiveDate) -> DueStatus {
    let days = (due - today).num_days();
    if days < 0 {
        DueStatus::Overdue(-days)
    } else if days == 0 {
        DueStatus::DueToday
    } else if days <= 3 {
        DueStatus::DueSoon(days)
    } else {
        DueStatus::Scheduled
    }
}

/// One rendered bill row
#[derive(Clone, Debug, PartialEq)]
pub struct BillRow {
    pub name: String,
    pub category: String,
    /// Short due date, e.g. `5 Aug`
    pub due_text: String,
    /// Whole-rupee amount, e.g. `₹1,500`
    pub amount_text: String,
    pub status: DueStatus,
}

/// Map upcoming bills to row models.
///
/// A bill whose due date does not parse keeps the raw string as its date
/// text and classifies as scheduled.
pub fn rows(bills: &[UpcomingBill], today: NaiveDate) -> Vec<BillRow> {
    bills
        .iter()
        .map(|bill| {
            let (due_text, status) = match NaiveDate::parse_from_str(&bill.due_date, "%Y-%m-%d") {
                Ok(due) => (due.format("%-d %b").to_string(), due_status(due, today)),
                Err(_) => (bill.due_date.clone(), DueStatus::Scheduled),
            };

            BillRow {
                name: bill.name.clone(),
                category: bill.category.clone(),
                due_text,
                amount_text: format_inr_whole(bill.amount),
                status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        let today = date(2024, 4, 1);
        assert_eq!(due_status(today, today), DueStatus::DueToday);
    }

    #[test]
    fn test_yesterday_is_overdue_by_one() {
        let today = date(2024, 4, 1);
        assert_eq!(due_status(today - Duration::days(1), today), DueStatus::Overdue(1));
    }

    #[test]
    fn test_within_three_days_is_due_soon() {
        let today = date(2024, 4, 1);
        assert_eq!(due_status(today + Duration::days(1), today), DueStatus::DueSoon(1));
        assert_eq!(due_status(today + Duration::days(3), today), DueStatus::DueSoon(3));
    }

    #[test]
    fn test_further_out_is_scheduled() {
        let today = date(2024, 4, 1);
        assert_eq!(due_status(today + Duration::days(4), today), DueStatus::Scheduled);
    }

    #[test]
    fn test_row_formats_date_and_amount() {
        let bill = UpcomingBill {
            name: "Rent".to_string(),
            category: "Housing".to_string(),
            due_date: "2024-04-05".to_string(),
            amount: 15000.0,
        };

        let rows = rows(&[bill], date(2024, 4, 1));
        assert_eq!(rows[0].due_text, "5 Apr");
        assert_eq!(rows[0].amount_text, "₹15,000");
        assert_eq!(rows[0].status, DueStatus::Scheduled);
    }

    #[test]
    fn test_malformed_due_date_passes_through() {
        let bill = UpcomingBill {
            name: "Internet".to_string(),
            category: "Utilities".to_string(),
            due_date: "someday".to_string(),
            amount: 799.0,
        };

        let rows = rows(&[bill], date(2024, 4, 1));
        assert_eq!(rows[0].due_text, "someday");
        assert_eq!(rows[0].status, DueStatus::Scheduled);
    }
}

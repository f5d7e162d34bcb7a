//! Monthly Series
//!
//! Chronological monthly view and the two bar chart descriptions built
//! from it.

use chrono::NaiveDate;

use crate::chart::{ChartSpec, Dataset, ValueFormat, EXPENSE_COLOR, INCOME_COLOR, SAVINGS_COLOR};
use crate::state::global::MonthlyTotal;

/// Chronological monthly series derived from the newest-first payload
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonthlyView {
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expense: Vec<f64>,
    /// Derived per month as income minus expense
    pub savings: Vec<f64>,
}

/// Reverse into chronological order and derive the savings series
pub fn monthly_view(monthly: &[MonthlyTotal]) -> MonthlyView {
    let mut view = MonthlyView::default();
    for m in monthly.iter().rev() {
        view.labels.push(month_label(&m.month));
        view.income.push(m.income);
        view.expense.push(m.expense);
        view.savings.push(m.income - m.expense);
    }
    view
}

/// `"YYYY-MM"` → `"Mon YY"`; malformed input passes through
pub fn month_label(raw: &str) -> String {
    let mut parts = raw.splitn(2, '-');
    let year = parts.next().and_then(|y| y.parse::<i32>().ok());
    let month = parts.next().and_then(|m| m.parse::<u32>().ok());

    match (year, month) {
        (Some(year), Some(month)) => NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.format("%b %y").to_string())
            .unwrap_or_else(|| raw.to_string()),
        _ => raw.to_string(),
    }
}

/// Income vs expense bar chart
pub fn cashflow_chart(view: &MonthlyView) -> ChartSpec {
    ChartSpec::bar(view.labels.clone())
        .with_value_format(ValueFormat::CurrencyCompact)
        .dataset(Dataset::new("Income", view.income.clone(), INCOME_COLOR))
        .dataset(Dataset::new("Expense", view.expense.clone(), EXPENSE_COLOR))
}

/// Income, expense and derived savings comparison
pub fn savings_chart(view: &MonthlyView) -> ChartSpec {
    cashflow_chart(view).dataset(Dataset::new("Savings", view.savings.clone(), SAVINGS_COLOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(month: &str, income: f64, expense: f64) -> MonthlyTotal {
        MonthlyTotal {
            month: month.to_string(),
            income,
            expense,
        }
    }

    #[test]
    fn test_view_is_chronological_with_derived_savings() {
        // Newest first, as the provider sends it
        let view = monthly_view(&[month("2024-03", 1000.0, 400.0), month("2024-02", 800.0, 300.0)]);

        assert_eq!(view.labels, vec!["Feb 24", "Mar 24"]);
        assert_eq!(view.income, vec![800.0, 1000.0]);
        assert_eq!(view.savings, vec![500.0, 600.0]);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label("2024-03"), "Mar 24");
        assert_eq!(month_label("2023-12"), "Dec 23");
    }

    #[test]
    fn test_malformed_month_passes_through() {
        assert_eq!(month_label("Q1-ish"), "Q1-ish");
        assert_eq!(month_label("2024"), "2024");
        assert_eq!(month_label("2024-13"), "2024-13");
    }

    #[test]
    fn test_savings_chart_has_three_series() {
        let view = monthly_view(&[month("2024-01", 100.0, 60.0)]);
        let spec = savings_chart(&view);

        assert_eq!(spec.datasets.len(), 3);
        assert_eq!(spec.datasets[2].label, "Savings");
        assert_eq!(spec.datasets[2].values, vec![40.0]);
    }
}

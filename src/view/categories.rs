//! Category Breakdown
//!
//! Ranks expense categories and builds the spending doughnut description.

use crate::chart::{palette_colors, ChartSpec, Dataset, LegendPosition};
use crate::state::global::CategoryTotal;

/// Number of expense categories shown in the doughnut
pub const TOP_CATEGORIES: usize = 5;

/// Sort descending by total and keep the top `limit`
pub fn rank(categories: &[CategoryTotal], limit: usize) -> Vec<CategoryTotal> {
    let mut ranked = categories.to_vec();
    ranked.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked
}

/// Build the category doughnut: an "Income" pseudo-slice followed by the
/// top expense categories, coloured from the fixed palette
pub fn breakdown_chart(income: f64, categories: &[CategoryTotal]) -> ChartSpec {
    let ranked = rank(categories, TOP_CATEGORIES);

    let labels: Vec<String> = std::iter::once("Income".to_string())
        .chain(ranked.iter().map(|c| c.category.clone()))
        .collect();
    let values: Vec<f64> = std::iter::once(income)
        .chain(ranked.iter().map(|c| c.total))
        .collect();
    let colors = palette_colors(labels.len());

    ChartSpec::doughnut(labels)
        .with_legend(LegendPosition::Bottom)
        .dataset(Dataset::with_colors("Spending", values, colors))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(category: &str, total: f64) -> CategoryTotal {
        CategoryTotal {
            category: category.to_string(),
            total,
        }
    }

    #[test]
    fn test_rank_sorts_descending() {
        let ranked = rank(&[cat("A", 30.0), cat("B", 50.0), cat("C", 10.0)], TOP_CATEGORIES);

        let order: Vec<_> = ranked.iter().map(|c| (c.category.as_str(), c.total)).collect();
        assert_eq!(order, vec![("B", 50.0), ("A", 30.0), ("C", 10.0)]);
    }

    #[test]
    fn test_rank_truncates_to_limit() {
        let categories: Vec<_> = (0..8).map(|i| cat(&format!("C{}", i), i as f64)).collect();
        assert_eq!(rank(&categories, TOP_CATEGORIES).len(), TOP_CATEGORIES);
    }

    #[test]
    fn test_breakdown_prepends_income_slice() {
        let spec = breakdown_chart(900.0, &[cat("Food", 300.0), cat("Rent", 600.0)]);

        assert_eq!(spec.labels[0], "Income");
        assert_eq!(spec.datasets[0].values, vec![900.0, 600.0, 300.0]);
        assert_eq!(spec.datasets[0].colors.len(), 3);
    }
}

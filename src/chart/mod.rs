//! Chart Descriptions
//!
//! Declarative chart model: each transform builds a [`ChartSpec`] and hands
//! it to the canvas renderer. One parameterized builder covers every chart
//! on the dashboard, and styling travels as an explicit [`ChartTheme`]
//! value rather than shared mutable defaults.

use crate::view::currency;

/// Fixed palette for category slices, cycled or truncated to the label count
pub const PALETTE: [&str; 7] = [
    "#10B981", "#EF4444", "#F59E0B", "#3B82F6", "#EC4899", "#8B5CF6", "#06B6D4",
];

/// Series colour for income bars
pub const INCOME_COLOR: &str = "#10B981";
/// Series colour for expense bars
pub const EXPENSE_COLOR: &str = "#EF4444";
/// Series colour for the derived savings bars
pub const SAVINGS_COLOR: &str = "#7269E3";

/// Chart styling passed explicitly to every render call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartTheme {
    pub background: &'static str,
    pub text_color: &'static str,
    pub grid_color: &'static str,
    pub font_family: &'static str,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: "#1E293B",
            text_color: "#94A3B8",
            grid_color: "rgba(255, 255, 255, 0.06)",
            font_family: "Outfit, sans-serif",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Doughnut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
}

/// Value-axis formatting rule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueFormat {
    /// Full INR amount, e.g. `₹12,345.00`
    Currency,
    /// Thousands collapse to `₹Nk`
    CurrencyCompact,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Currency => currency::format_inr(value),
            ValueFormat::CurrencyCompact => currency::format_inr_compact(value),
        }
    }
}

/// One labeled series
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    /// One colour for a bar series, or one per slice for doughnuts
    pub colors: Vec<String>,
}

impl Dataset {
    /// Single-colour series (bar charts)
    pub fn new(label: impl Into<String>, values: Vec<f64>, color: &str) -> Self {
        Self {
            label: label.into(),
            values,
            colors: vec![color.to_string()],
        }
    }

    /// Per-slice colours (doughnuts)
    pub fn with_colors(label: impl Into<String>, values: Vec<f64>, colors: Vec<String>) -> Self {
        Self {
            label: label.into(),
            values,
            colors,
        }
    }

    /// Colour for index `i`, cycling through the assigned colours
    pub fn color_at(&self, i: usize) -> &str {
        &self.colors[i % self.colors.len()]
    }
}

/// Declarative chart description handed to the renderer
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub legend: LegendPosition,
    pub value_format: ValueFormat,
    /// Inner-radius fraction for doughnuts, 0–100
    pub cutout_percent: f64,
}

impl ChartSpec {
    /// Grouped bar chart
    pub fn bar(labels: Vec<String>) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels,
            datasets: Vec::new(),
            legend: LegendPosition::Top,
            value_format: ValueFormat::Currency,
            cutout_percent: 0.0,
        }
    }

    /// Doughnut chart
    pub fn doughnut(labels: Vec<String>) -> Self {
        Self {
            kind: ChartKind::Doughnut,
            labels,
            datasets: Vec::new(),
            legend: LegendPosition::Top,
            value_format: ValueFormat::Currency,
            cutout_percent: 60.0,
        }
    }

    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    pub fn with_legend(mut self, position: LegendPosition) -> Self {
        self.legend = position;
        self
    }

    pub fn with_value_format(mut self, format: ValueFormat) -> Self {
        self.value_format = format;
        self
    }

    /// True when every dataset is empty
    pub fn is_empty(&self) -> bool {
        self.datasets.iter().all(|d| d.values.is_empty())
    }

    /// Legend entries as (label, colour): per-series for bars, per-slice
    /// for doughnuts
    pub fn legend_entries(&self) -> Vec<(String, String)> {
        match self.kind {
            ChartKind::Bar => self
                .datasets
                .iter()
                .map(|d| (d.label.clone(), d.color_at(0).to_string()))
                .collect(),
            ChartKind::Doughnut => {
                let Some(dataset) = self.datasets.first() else {
                    return Vec::new();
                };
                self.labels
                    .iter()
                    .enumerate()
                    .map(|(i, label)| (label.clone(), dataset.color_at(i).to_string()))
                    .collect()
            }
        }
    }
}

/// Palette colours for `count` slices, cycling when the palette is shorter
/// and truncating when it is longer
pub fn palette_colors(count: usize) -> Vec<String> {
    (0..count).map(|i| PALETTE[i % PALETTE.len()].to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_truncates_to_label_count() {
        let colors = palette_colors(3);
        assert_eq!(colors, vec!["#10B981", "#EF4444", "#F59E0B"]);
    }

    #[test]
    fn test_palette_cycles_past_its_length() {
        let colors = palette_colors(9);
        assert_eq!(colors[7], PALETTE[0]);
        assert_eq!(colors[8], PALETTE[1]);
    }

    #[test]
    fn test_bar_legend_is_per_series() {
        let spec = ChartSpec::bar(vec!["Jan 24".to_string()])
            .dataset(Dataset::new("Income", vec![100.0], INCOME_COLOR))
            .dataset(Dataset::new("Expense", vec![40.0], EXPENSE_COLOR));

        let entries = spec.legend_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("Income".to_string(), INCOME_COLOR.to_string()));
    }

    #[test]
    fn test_doughnut_legend_is_per_slice() {
        let labels = vec!["Income".to_string(), "Food".to_string()];
        let spec = ChartSpec::doughnut(labels).dataset(Dataset::with_colors(
            "Spending",
            vec![500.0, 200.0],
            palette_colors(2),
        ));

        let entries = spec.legend_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].1, PALETTE[1]);
    }
}

//! Chart Component
//!
//! Renders a declarative chart description on an HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::chart::{ChartKind, ChartSpec, ChartTheme, LegendPosition};

/// Canvas chart host: redraws whenever the description changes
#[component]
pub fn ChartPanel(
    /// Declarative chart description, `None` until the snapshot arrives
    #[prop(into)]
    spec: Signal<Option<ChartSpec>>,
    /// Styling for this chart; defaults to the dashboard theme
    #[prop(optional)]
    theme: Option<ChartTheme>,
) -> impl IntoView {
    let theme = theme.unwrap_or_default();
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw on every description change
    create_effect(move |_| {
        if let (Some(canvas), Some(spec)) = (canvas_ref.get(), spec.get()) {
            draw_chart(&canvas, &spec, &theme);
        }
    });

    view! {
        <div class="relative">
            {move || {
                (spec.get().map(|s| s.legend) == Some(LegendPosition::Top))
                    .then(|| view! { <ChartLegend spec=spec /> })
            }}

            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-80 rounded-lg"
            />

            {move || {
                (spec.get().map(|s| s.legend) == Some(LegendPosition::Bottom))
                    .then(|| view! { <ChartLegend spec=spec /> })
            }}
        </div>
    }
}

/// Chart legend: colour dot plus label per entry
#[component]
fn ChartLegend(
    #[prop(into)]
    spec: Signal<Option<ChartSpec>>,
) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 my-3">
            {move || {
                spec.get().map(|spec| {
                    spec.legend_entries()
                        .into_iter()
                        .map(|(label, color)| view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300">{label}</span>
                            </div>
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}

/// Draw the description on canvas
fn draw_chart(canvas: &HtmlCanvasElement, spec: &ChartSpec, theme: &ChartTheme) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&theme.background.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if spec.is_empty() {
        ctx.set_fill_style(&theme.text_color.into());
        ctx.set_font(&format!("16px {}", theme.font_family));
        let _ = ctx.fill_text("No data to display", width / 2.0 - 70.0, height / 2.0);
        return;
    }

    match spec.kind {
        ChartKind::Bar => draw_bars(&ctx, spec, theme, width, height),
        ChartKind::Doughnut => draw_doughnut(&ctx, spec, theme, width, height),
    }
}

/// Grouped bar chart with grid lines and a formatted value axis
fn draw_bars(
    ctx: &CanvasRenderingContext2d,
    spec: &ChartSpec,
    theme: &ChartTheme,
    width: f64,
    height: f64,
) {
    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Value range across all series, anchored at zero
    let mut min_value: f64 = 0.0;
    let mut max_value: f64 = 0.0;
    for dataset in &spec.datasets {
        for &value in &dataset.values {
            min_value = min_value.min(value);
            max_value = max_value.max(value);
        }
    }

    let range = max_value - min_value;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    let y_max = max_value + padding;
    let y_min = if min_value < 0.0 { min_value - padding } else { min_value };

    // Horizontal grid lines with axis labels
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (f64::from(i) / 5.0) * chart_height;

        ctx.set_stroke_style(&theme.grid_color.into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (f64::from(i) / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&theme.text_color.into());
        ctx.set_font(&format!("11px {}", theme.font_family));
        let _ = ctx.fill_text(&spec.value_format.format(value), 5.0, y + 4.0);
    }

    let y_of = |value: f64| margin_top + ((y_max - value) / (y_max - y_min)) * chart_height;
    let baseline = y_of(0.0_f64.clamp(y_min, y_max));

    // Bars, grouped per label
    let group_count = spec.labels.len().max(1);
    let group_width = chart_width / group_count as f64;
    let series_count = spec.datasets.len().max(1) as f64;
    let bar_width = (group_width * 0.5 / series_count).min(40.0);

    for (series_idx, dataset) in spec.datasets.iter().enumerate() {
        ctx.set_fill_style(&dataset.color_at(0).into());
        for (i, &value) in dataset.values.iter().enumerate() {
            let group_start = margin_left + i as f64 * group_width;
            let cluster_width = bar_width * series_count;
            let x = group_start + (group_width - cluster_width) / 2.0
                + series_idx as f64 * bar_width;

            let top = y_of(value).min(baseline);
            let bar_height = (y_of(value) - baseline).abs();
            ctx.fill_rect(x, top, bar_width - 2.0, bar_height);
        }
    }

    // X-axis labels
    ctx.set_fill_style(&theme.text_color.into());
    ctx.set_font(&format!("11px {}", theme.font_family));
    for (i, label) in spec.labels.iter().enumerate() {
        let x = margin_left + (i as f64 + 0.5) * group_width - 15.0;
        let _ = ctx.fill_text(label, x, height - 10.0);
    }
}

/// Doughnut chart with the total in the centre
fn draw_doughnut(
    ctx: &CanvasRenderingContext2d,
    spec: &ChartSpec,
    theme: &ChartTheme,
    width: f64,
    height: f64,
) {
    let Some(dataset) = spec.datasets.first() else {
        return;
    };

    let total: f64 = dataset.values.iter().sum();
    if total <= 0.0 {
        ctx.set_fill_style(&theme.text_color.into());
        ctx.set_font(&format!("16px {}", theme.font_family));
        let _ = ctx.fill_text("No data to display", width / 2.0 - 70.0, height / 2.0);
        return;
    }

    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let outer = (width.min(height) / 2.0) - 20.0;
    let inner = outer * spec.cutout_percent / 100.0;

    // Slices, clockwise from twelve o'clock
    let mut start = -std::f64::consts::FRAC_PI_2;
    for (i, &value) in dataset.values.iter().enumerate() {
        if value <= 0.0 {
            continue;
        }
        let end = start + value / total * std::f64::consts::TAU;

        ctx.set_fill_style(&dataset.color_at(i).into());
        ctx.begin_path();
        let _ = ctx.arc(center_x, center_y, outer, start, end);
        let _ = ctx.arc_with_anticlockwise(center_x, center_y, inner, end, start, true);
        ctx.close_path();
        ctx.fill();

        start = end;
    }

    // Centre total
    ctx.set_fill_style(&theme.text_color.into());
    ctx.set_font(&format!("14px {}", theme.font_family));
    let total_text = spec.value_format.format(total);
    let _ = ctx.fill_text(&total_text, center_x - total_text.len() as f64 * 3.5, center_y + 4.0);
}

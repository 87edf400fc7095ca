//! Chart styling options and SVG rendering of growth trajectories
//!
//! The renderer draws the year-by-year trajectory (x = year index, y =
//! accumulated value in $M) as a polyline with per-year markers. Styling
//! lives in `ChartStyle` so callers (CLI flags, JSON style files) control
//! presentation without touching the calculator.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::plan::InvestmentPlan;

/// Styling and output options for the trajectory chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Stroke width of the trajectory line
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Font size for axis labels (tick labels use a reduced size)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// X axis label
    #[serde(default = "default_x_label")]
    pub x_label: String,

    /// Y axis label
    #[serde(default = "default_y_label")]
    pub y_label: String,

    /// Where to write the chart; `None` derives a name from the plan
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    /// Whether `save_chart` writes anything at all
    #[serde(default)]
    pub save: bool,
}

fn default_line_width() -> f64 {
    3.0
}
fn default_font_size() -> f64 {
    26.0
}
fn default_x_label() -> String {
    "Years".to_string()
}
fn default_y_label() -> String {
    "Principal and Earnings ($M)".to_string()
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            font_size: default_font_size(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            output_path: None,
            save: false,
        }
    }
}

// Canvas geometry shared by every chart (6:4 aspect)
const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 640.0;
const MARGIN_LEFT: f64 = 110.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 90.0;

/// Render the trajectory as a standalone SVG document
///
/// Degenerate inputs are tolerated: an empty trajectory renders axes only,
/// a single point renders one centered marker, and a flat series is given
/// an artificial unit span so nothing divides by zero.
pub fn render_svg(trajectory: &[f64], style: &ChartStyle) -> String {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let n = trajectory.len();

    let data_max = trajectory.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let data_min = trajectory.iter().copied().fold(f64::INFINITY, f64::min);
    let (y_min, y_max) = if n == 0 {
        (0.0, 1.0)
    } else if (data_max - data_min).abs() < f64::EPSILON {
        // Flat series still needs a vertical span to map onto pixels
        (data_min.min(0.0), data_max + 1.0)
    } else {
        (data_min.min(0.0), data_max)
    };
    let y_span = y_max - y_min;

    let x_of = |i: usize| -> f64 {
        if n <= 1 {
            MARGIN_LEFT + plot_w / 2.0
        } else {
            MARGIN_LEFT + plot_w * i as f64 / (n - 1) as f64
        }
    };
    let y_of = |v: f64| -> f64 { MARGIN_TOP + plot_h * (1.0 - (v - y_min) / y_span) };

    let axis_y = MARGIN_TOP + plot_h;
    let tick_font = (style.font_size * 0.7).max(8.0);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" \
         viewBox=\"0 0 {WIDTH} {HEIGHT}\" font-family=\"serif\">\n"
    ));
    svg.push_str(&format!(
        "  <rect width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"white\"/>\n"
    ));

    // Axes
    svg.push_str(&format!(
        "  <line x1=\"{MARGIN_LEFT}\" y1=\"{MARGIN_TOP}\" x2=\"{MARGIN_LEFT}\" y2=\"{axis_y}\" \
         stroke=\"black\" stroke-width=\"1.5\"/>\n"
    ));
    svg.push_str(&format!(
        "  <line x1=\"{MARGIN_LEFT}\" y1=\"{axis_y}\" x2=\"{}\" y2=\"{axis_y}\" \
         stroke=\"black\" stroke-width=\"1.5\"/>\n",
        WIDTH - MARGIN_RIGHT
    ));

    // Y ticks and labels
    for t in 0..=4 {
        let value = y_min + y_span * t as f64 / 4.0;
        let y = y_of(value);
        svg.push_str(&format!(
            "  <line x1=\"{}\" y1=\"{y:.2}\" x2=\"{MARGIN_LEFT}\" y2=\"{y:.2}\" \
             stroke=\"black\" stroke-width=\"1\"/>\n",
            MARGIN_LEFT - 6.0
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{:.2}\" font-size=\"{tick_font}\" \
             text-anchor=\"end\">{}</text>\n",
            MARGIN_LEFT - 10.0,
            y + tick_font * 0.35,
            tick_label(value, y_span)
        ));
    }

    // X ticks and year labels
    if n > 0 {
        let step = (n / 7).max(1);
        for i in (0..n).step_by(step) {
            let x = x_of(i);
            svg.push_str(&format!(
                "  <line x1=\"{x:.2}\" y1=\"{axis_y}\" x2=\"{x:.2}\" y2=\"{}\" \
                 stroke=\"black\" stroke-width=\"1\"/>\n",
                axis_y + 6.0
            ));
            svg.push_str(&format!(
                "  <text x=\"{x:.2}\" y=\"{}\" font-size=\"{tick_font}\" \
                 text-anchor=\"middle\">{}</text>\n",
                axis_y + 6.0 + tick_font,
                i + 1
            ));
        }
    }

    // Trajectory line and per-year markers
    if n > 1 {
        let points = trajectory
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{:.2},{:.2}", x_of(i), y_of(*v)))
            .collect::<Vec<_>>()
            .join(" ");
        svg.push_str(&format!(
            "  <polyline points=\"{points}\" fill=\"none\" stroke=\"#1f77b4\" \
             stroke-width=\"{}\"/>\n",
            style.line_width
        ));
    }
    for (i, v) in trajectory.iter().enumerate() {
        svg.push_str(&format!(
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"4\" fill=\"red\" \
             stroke=\"black\" stroke-width=\"1\"/>\n",
            x_of(i),
            y_of(*v)
        ));
    }

    // Axis labels
    svg.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\">{}</text>\n",
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 18.0,
        style.font_size,
        style.x_label
    ));
    let label_cx = 34.0;
    let label_cy = MARGIN_TOP + plot_h / 2.0;
    svg.push_str(&format!(
        "  <text x=\"{label_cx}\" y=\"{label_cy:.2}\" font-size=\"{}\" text-anchor=\"middle\" \
         transform=\"rotate(-90 {label_cx} {label_cy:.2})\">{}</text>\n",
        style.font_size, style.y_label
    ));

    svg.push_str("</svg>\n");
    svg
}

fn tick_label(value: f64, span: f64) -> String {
    if span >= 1.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.3}")
    }
}

/// Default output name encoding the plan parameters
pub fn default_chart_path(plan: &InvestmentPlan) -> PathBuf {
    PathBuf::from(format!(
        "investment_growth_{:.0}x{}_{}y_{:.2}pct.svg",
        plan.contribution,
        plan.frequency,
        plan.years,
        plan.annual_rate * 100.0
    ))
}

/// Write the chart if the style asks for it, returning the path written
pub fn save_chart(
    trajectory: &[f64],
    style: &ChartStyle,
    plan: &InvestmentPlan,
) -> io::Result<Option<PathBuf>> {
    if !style.save {
        return Ok(None);
    }
    let path = style
        .output_path
        .clone()
        .unwrap_or_else(|| default_chart_path(plan));
    fs::write(&path, render_svg(trajectory, style))?;
    Ok(Some(path))
}

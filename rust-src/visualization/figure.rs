//! Chart figures produced by the dashboard callbacks.
//!
//! Figures are plain data: the web page, the terminal dashboard and the
//! SVG exporter all render from the same structs.

use serde::Serialize;

use crate::models::PayloadRange;


/// One wedge of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    /// Share of the figure total, 0-100.
    pub percentage: f64,
}


/// Build slices from label counts, dropping zero counts.
pub fn slices_from_counts(counts: Vec<(String, u64)>) -> Vec<PieSlice> {
    let total: u64 = counts.iter().map(|(_, v)| v).sum();

    counts
        .into_iter()
        .filter(|(_, value)| *value > 0)
        .map(|(label, value)| PieSlice {
            label,
            value,
            percentage: if total > 0 {
                (value as f64 / total as f64) * 100.0
            } else {
                0.0
            },
        })
        .collect()
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
    /// Sum of all slice values.
    pub total: u64,
}


impl PieFigure {
    pub fn new(title: impl Into<String>, slices: Vec<PieSlice>) -> Self {
        let total = slices.iter().map(|s| s.value).sum();
        Self {
            title: title.into(),
            slices,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Payload mass (kg).
    pub x: f64,
    /// Launch class (1 = success, 0 = failure).
    pub y: u8,
    pub flight_number: u32,
    pub booster_version: String,
}


/// Points sharing one booster version category (one colour on the chart).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Visible x-axis range, always the selected payload range.
    pub x_range: [f64; 2],
    pub series: Vec<ScatterSeries>,
    pub point_count: usize,
}


impl ScatterFigure {
    pub fn new(title: impl Into<String>, range: PayloadRange, series: Vec<ScatterSeries>) -> Self {
        let point_count = series.iter().map(|s| s.points.len()).sum();
        Self {
            title: title.into(),
            x_label: "Payload Mass (kg)".to_string(),
            y_label: "class".to_string(),
            x_range: range.as_array(),
            series,
            point_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.point_count == 0
    }
}

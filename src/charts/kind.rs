//! The three chart kinds and the file names derived from a plant name.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Height vs leaf count
    Scatter,
    /// Dry weight distribution
    Histogram,
    /// Height over weeks
    LinePlot,
}

impl ChartKind {
    /// Rendering order.
    pub const ALL: [ChartKind; 3] = [ChartKind::Scatter, ChartKind::Histogram, ChartKind::LinePlot];

    pub fn file_suffix(self) -> &'static str {
        match self {
            ChartKind::Scatter => "scatter",
            ChartKind::Histogram => "histogram",
            ChartKind::LinePlot => "line_plot",
        }
    }

    /// `{plant}_{suffix}.png`, with the plant name used verbatim.
    pub fn file_name(self, plant: &str) -> String {
        format!("{}_{}.png", plant, self.file_suffix())
    }

    /// Name used in the confirmation lines.
    pub fn display_name(self) -> &'static str {
        match self {
            ChartKind::Scatter => "Scatter plot",
            ChartKind::Histogram => "Histogram",
            ChartKind::LinePlot => "Line plot",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChartKind::Scatter => "scatter",
            ChartKind::Histogram => "histogram",
            ChartKind::LinePlot => "line plot",
        })
    }
}

/// Paths of the three written images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCharts {
    pub scatter: PathBuf,
    pub histogram: PathBuf,
    pub line_plot: PathBuf,
}

impl RenderedCharts {
    pub fn path(&self, kind: ChartKind) -> &PathBuf {
        match kind {
            ChartKind::Scatter => &self.scatter,
            ChartKind::Histogram => &self.histogram,
            ChartKind::LinePlot => &self.line_plot,
        }
    }

    /// Kind and path pairs in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (ChartKind, &PathBuf)> {
        ChartKind::ALL.into_iter().map(move |kind| (kind, self.path(kind)))
    }
}

//! Static Chart Renderer
//! Writes the three growth charts for a plant as PNG files.
//!
//! Layout of every chart:
//! 1. Title centered at the top
//! 2. Plot area with grid lines
//! 3. Axis descriptions below and to the left
//!
//! Charts:
//!    - Scatter: height (x) against leaf count (y)
//!    - Histogram: dry weight in 5 equal-width bins
//!    - Line plot: height per week with circle markers

use super::canvas::{Canvas, CanvasArea, CanvasError};
use super::kind::{ChartKind, RenderedCharts};
use super::style::ChartStyle;
use crate::data::{Bin, DataProcessor, GrowthRecord, AXIS_MARGIN, HISTOGRAM_BINS};
use plotters::prelude::*;
use std::error::Error;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

const HEIGHT_AXIS: &str = "height readings do not fit on a chart axis";
const LEAF_COUNT_AXIS: &str = "leaf count readings do not fit on a chart axis";
const DRY_WEIGHT_AXIS: &str = "dry weight readings do not fit on a chart axis";

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to render {kind} chart to {}: {source}", path.display())]
    Render {
        kind: ChartKind,
        path: PathBuf,
        #[source]
        source: CanvasError,
    },
    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub struct StaticChartRenderer {
    style: ChartStyle,
    out_dir: Option<PathBuf>,
}

impl StaticChartRenderer {
    /// Charts are written to `out_dir`, or the working directory when `None`.
    pub fn new(style: ChartStyle, out_dir: Option<PathBuf>) -> Self {
        Self { style, out_dir }
    }

    /// Output path for one chart of `plant`.
    pub fn target(&self, plant: &str, kind: ChartKind) -> PathBuf {
        let file_name = kind.file_name(plant);
        match &self.out_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    /// Render all three charts one after another, stopping at the first failure.
    pub fn render_all(&self, record: &GrowthRecord) -> Result<RenderedCharts, ChartError> {
        Ok(RenderedCharts {
            scatter: self.render_scatter(record)?,
            histogram: self.render_histogram(record)?,
            line_plot: self.render_line_plot(record)?,
        })
    }

    /// Render all three charts on the rayon pool, one canvas per chart.
    pub fn render_all_parallel(&self, record: &GrowthRecord) -> Result<RenderedCharts, ChartError> {
        debug!("rendering {} charts in parallel", ChartKind::ALL.len());

        let (scatter, (histogram, line_plot)) = rayon::join(
            || self.render_scatter(record),
            || {
                rayon::join(
                    || self.render_histogram(record),
                    || self.render_line_plot(record),
                )
            },
        );

        Ok(RenderedCharts {
            scatter: scatter?,
            histogram: histogram?,
            line_plot: line_plot?,
        })
    }

    pub fn render_scatter(&self, record: &GrowthRecord) -> Result<PathBuf, ChartError> {
        self.render_with(record, ChartKind::Scatter, Self::draw_scatter)
    }

    pub fn render_histogram(&self, record: &GrowthRecord) -> Result<PathBuf, ChartError> {
        self.render_with(record, ChartKind::Histogram, Self::draw_histogram)
    }

    pub fn render_line_plot(&self, record: &GrowthRecord) -> Result<PathBuf, ChartError> {
        self.render_with(record, ChartKind::LinePlot, Self::draw_line_plot)
    }

    fn render_with<F>(&self, record: &GrowthRecord, kind: ChartKind, paint: F) -> Result<PathBuf, ChartError>
    where
        F: FnOnce(&CanvasArea<'_>, &GrowthRecord, &ChartStyle) -> Result<(), Box<dyn Error>>,
    {
        self.prepare_out_dir()?;
        let path = self.target(record.plant_name(), kind);
        let render_err = |source| ChartError::Render {
            kind,
            path: path.clone(),
            source,
        };

        let mut canvas = Canvas::new(self.style.size(), self.style.background);
        canvas
            .draw(|root| paint(root, record, &self.style))
            .map_err(render_err)?;
        canvas.save(&path).map_err(render_err)?;

        info!(chart = %kind, path = %path.display(), "chart written");
        Ok(path)
    }

    fn prepare_out_dir(&self) -> Result<(), ChartError> {
        let Some(dir) = &self.out_dir else {
            return Ok(());
        };
        fs::create_dir_all(dir).map_err(|source| ChartError::OutputDir {
            path: dir.clone(),
            source,
        })
    }

    fn draw_scatter(
        root: &CanvasArea<'_>,
        record: &GrowthRecord,
        style: &ChartStyle,
    ) -> Result<(), Box<dyn Error>> {
        let leaf_counts: Vec<f64> = record.leaf_counts().iter().map(|&c| c as f64).collect();
        let x_range = DataProcessor::padded_range(record.heights()).ok_or(HEIGHT_AXIS)?;
        let y_range = DataProcessor::padded_range(&leaf_counts).ok_or(LEAF_COUNT_AXIS)?;

        let caption = format!("Height vs Leaf Count for {}", record.plant_name());
        let mut chart = ChartBuilder::on(root)
            .caption(&caption, style.title_font())
            .margin(style.margin)
            .x_label_area_size(style.x_label_area)
            .y_label_area_size(style.y_label_area)
            .build_cartesian_2d(x_range, y_range)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc("Height (cm)")
            .y_desc("Leaf Count")
            .axis_desc_style(style.axis_label_font())
            .label_style(style.tick_label_font());
        if !style.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        chart.draw_series(record.height_leaf_pairs().map(|(height, leaves)| {
            Circle::new(
                (height, leaves as f64),
                style.marker_size,
                style.scatter_color.filled(),
            )
        }))?;

        Ok(())
    }

    fn draw_histogram(
        root: &CanvasArea<'_>,
        record: &GrowthRecord,
        style: &ChartStyle,
    ) -> Result<(), Box<dyn Error>> {
        let bins = DataProcessor::histogram(record.dry_weights(), HISTOGRAM_BINS);
        let (first, last) = bins
            .first()
            .zip(bins.last())
            .ok_or("no dry weight readings")?;
        let x_range = DataProcessor::padded(first.lower, last.upper).ok_or(DRY_WEIGHT_AXIS)?;
        let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
        let y_range = 0.0..(max_count * (1.0 + AXIS_MARGIN)).max(1.0);

        let caption = format!("Histogram of Dry Weight for {}", record.plant_name());
        let mut chart = ChartBuilder::on(root)
            .caption(&caption, style.title_font())
            .margin(style.margin)
            .x_label_area_size(style.x_label_area)
            .y_label_area_size(style.y_label_area)
            .build_cartesian_2d(x_range, y_range)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc("Dry Weight (g)")
            .y_desc("Frequency")
            .axis_desc_style(style.axis_label_font())
            .label_style(style.tick_label_font());
        if !style.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        let bar = |bin: &Bin| [(bin.lower, 0.0), (bin.upper, bin.count as f64)];
        chart.draw_series(
            bins.iter()
                .map(|bin| Rectangle::new(bar(bin), style.histogram_color.filled())),
        )?;
        chart.draw_series(
            bins.iter()
                .map(|bin| Rectangle::new(bar(bin), style.edge_color.stroke_width(1))),
        )?;

        Ok(())
    }

    fn draw_line_plot(
        root: &CanvasArea<'_>,
        record: &GrowthRecord,
        style: &ChartStyle,
    ) -> Result<(), Box<dyn Error>> {
        let weeks = record.week_labels();
        let y_range = DataProcessor::padded_range(record.heights()).ok_or(HEIGHT_AXIS)?;

        let caption = format!("{} Height Over Time", record.plant_name());
        let mut chart = ChartBuilder::on(root)
            .caption(&caption, style.title_font())
            .margin(style.margin)
            .x_label_area_size(style.x_label_area)
            .y_label_area_size(style.y_label_area)
            .build_cartesian_2d((0u32..weeks.len() as u32).into_segmented(), y_range)?;

        let week_label = |value: &SegmentValue<u32>| match value {
            SegmentValue::CenterOf(i) => weeks.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        };

        let mut mesh = chart.configure_mesh();
        mesh.x_desc("Week")
            .y_desc("Height (cm)")
            .x_labels(weeks.len() + 1)
            .x_label_formatter(&week_label)
            .axis_desc_style(style.axis_label_font())
            .label_style(style.tick_label_font());
        if !style.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        let points: Vec<(SegmentValue<u32>, f64)> = record
            .heights()
            .iter()
            .enumerate()
            .map(|(i, &height)| (SegmentValue::CenterOf(i as u32), height))
            .collect();

        chart.draw_series(LineSeries::new(
            points.iter().cloned(),
            style.line_color.stroke_width(style.line_width),
        ))?;
        chart.draw_series(points.iter().map(|(week, height)| {
            Circle::new(
                (week.clone(), *height),
                style.marker_size,
                style.line_color.filled(),
            )
        }))?;

        Ok(())
    }
}

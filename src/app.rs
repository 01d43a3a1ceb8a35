//! Growth Chart Pipeline
//! Collect -> validate -> report inputs -> render -> report outputs.

use crate::charts::{ChartStyle, RenderedCharts, StaticChartRenderer};
use crate::data::{DataLoader, GrowthRecord, RawMeasurements};
use crate::error::Result;
use crate::report::{ReportFormat, Reporter};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, error};

/// Everything one run needs.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub measurements: RawMeasurements,
    pub out_dir: Option<PathBuf>,
    pub format: ReportFormat,
    pub parallel: bool,
    pub style: ChartStyle,
}

pub struct GrowthChartApp {
    options: RunOptions,
}

impl GrowthChartApp {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    /// Run the whole pipeline, writing the report to `out`.
    ///
    /// Nothing is rendered unless the record validates, and the confirmation
    /// lines are written only after all three charts exist.
    pub fn run<W: Write>(&self, out: W) -> Result<RenderedCharts> {
        let record = self.collect()?;
        debug!(
            plant = record.plant_name(),
            readings = record.len(),
            "growth record validated"
        );

        let mut reporter = Reporter::new(out, self.options.format);
        reporter.inputs(&record)?;

        let renderer = StaticChartRenderer::new(
            self.options.style.clone(),
            self.options.out_dir.clone(),
        );
        let rendered = if self.options.parallel {
            renderer.render_all_parallel(&record)
        } else {
            renderer.render_all(&record)
        };
        let charts = rendered.inspect_err(|e| error!("chart rendering failed: {}", e))?;

        reporter.outputs(&record, &charts)?;
        Ok(charts)
    }

    fn collect(&self) -> Result<GrowthRecord> {
        let candidate = DataLoader::load(&self.options.measurements)?;
        let record = GrowthRecord::validate(candidate)
            .inspect_err(|e| error!("growth data rejected: {}", e))?;
        Ok(record)
    }
}

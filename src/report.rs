//! Console Report Module
//! Prints the input summary before rendering and the saved files afterwards.

use crate::charts::RenderedCharts;
use crate::data::GrowthRecord;
use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document after rendering
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    record: &'a GrowthRecord,
    charts: &'a RenderedCharts,
}

/// Writes report lines to any output, normally stdout.
pub struct Reporter<W: Write> {
    out: W,
    format: ReportFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self { out, format }
    }

    /// Plant name and the raw sequences with units.
    pub fn inputs(&mut self, record: &GrowthRecord) -> io::Result<()> {
        if self.format != ReportFormat::Text {
            return Ok(());
        }

        writeln!(self.out, "Plant: {}", record.plant_name())?;
        writeln!(self.out, "Height data: {:?} cm", record.heights())?;
        writeln!(self.out, "Leaf count data: {:?}", record.leaf_counts())?;
        writeln!(self.out, "Dry weight data: {:?} g", record.dry_weights())?;
        self.out.flush()
    }

    /// Confirmation lines, only called once every chart has been written.
    pub fn outputs(&mut self, record: &GrowthRecord, charts: &RenderedCharts) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => {
                writeln!(self.out, "Generated plots for {}:", record.plant_name())?;
                for (kind, path) in charts.iter() {
                    writeln!(
                        self.out,
                        "{} saved as {}",
                        kind.display_name(),
                        path.display()
                    )?;
                }
            }
            ReportFormat::Json => {
                let report = JsonReport { record, charts };
                serde_json::to_writer_pretty(&mut self.out, &report)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }
}

//! Plant Growth Charts - scatter, histogram and line plot images from
//! weekly plant measurements.

pub mod app;
pub mod charts;
pub mod cli;
pub mod data;
pub mod error;
pub mod logger;
pub mod report;

pub use app::{GrowthChartApp, RunOptions};
pub use charts::{ChartError, ChartKind, ChartStyle, RenderedCharts, StaticChartRenderer};
pub use cli::Cli;
pub use data::{DataLoader, DataProcessor, GrowthRecord, InputError, RawMeasurements, ValidationError};
pub use error::{GrowthError, Result};
pub use report::{ReportFormat, Reporter};

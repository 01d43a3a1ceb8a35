use crate::app::RunOptions;
use crate::charts::ChartStyle;
use crate::data::{InputError, RawMeasurements};
use crate::report::ReportFormat;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::path::PathBuf;

/// Plot plant growth data.
#[derive(Parser, Debug)]
#[command(
    name = "plant-charts",
    version,
    about = "Plot plant growth data as scatter, histogram and line charts"
)]
pub struct Cli {
    /// Plant name, used in chart titles and output file names
    #[arg(long)]
    pub plant: String,

    /// Height readings in centimeters, one per week
    #[arg(long, value_name = "CM", num_args = 1.., required = true, allow_negative_numbers = true)]
    pub height: Vec<String>,

    /// Leaf counts, one per week
    #[arg(
        long = "leaf_count",
        value_name = "COUNT",
        num_args = 1..,
        required = true,
        allow_negative_numbers = true
    )]
    pub leaf_count: Vec<String>,

    /// Dry weight readings in grams, one per week
    #[arg(
        long = "dry_weight",
        value_name = "GRAMS",
        num_args = 1..,
        required = true,
        allow_negative_numbers = true
    )]
    pub dry_weight: Vec<String>,

    /// Directory for the PNG files (current directory if omitted)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Report format on stdout
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Render the three charts concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Emit debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse arguments, turning missing values into [`InputError::MissingArgument`].
    ///
    /// Other clap errors (help, version, unknown flags) are handed back so the
    /// caller can let clap print them.
    pub fn try_collect<I, T>(args: I) -> Result<Result<Self, InputError>, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(Ok(cli)),
            Err(err) => match missing_argument(&err) {
                Some(input) => Ok(Err(input)),
                None => Err(err),
            },
        }
    }

    pub fn measurements(&self) -> RawMeasurements {
        RawMeasurements {
            plant: Some(self.plant.clone()),
            height: self.height.clone(),
            leaf_count: self.leaf_count.clone(),
            dry_weight: self.dry_weight.clone(),
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            measurements: self.measurements(),
            out_dir: self.out_dir.clone(),
            format: self.format,
            parallel: self.parallel,
            style: ChartStyle::default(),
        }
    }
}

fn missing_argument(err: &clap::Error) -> Option<InputError> {
    match err.kind() {
        ErrorKind::MissingRequiredArgument => {}
        // a flag given without any value; a rejected value carries `InvalidValue` context
        ErrorKind::InvalidValue if err.get(ContextKind::InvalidValue).is_none() => {}
        _ => return None,
    }

    let names = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(name)) => name.clone(),
        Some(ContextValue::Strings(names)) => names.join(", "),
        _ => return None,
    };
    Some(InputError::MissingArgument(names))
}

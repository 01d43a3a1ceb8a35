//! Plant Growth Charts - command line entry point.

use anyhow::Context;
use plant_growth_charts::{logger, Cli, GrowthChartApp};

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_collect(std::env::args_os()) {
        Ok(collected) => collected?,
        Err(usage) => usage.exit(),
    };

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI arguments: {:?}", cli);

    let app = GrowthChartApp::new(cli.run_options());
    app.run(std::io::stdout().lock())
        .with_context(|| format!("could not chart growth data for {}", cli.plant))?;

    Ok(())
}

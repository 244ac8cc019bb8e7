use clap::Parser;
use labelkit::cli::{run, Cli};
use labelkit::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;
    tracing::debug!("labelkit {} (built {})", labelkit::VERSION, labelkit::BUILD_DATE);

    run(cli)
}

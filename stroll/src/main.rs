// Demo driver: runs simulated work on a pool of threads and reports it with a stroll bar.
mod work;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(flatten)]
	work: work::Subcommand,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
	work::run(&cli.work)
}

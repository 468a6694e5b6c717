use anyhow::{Context, Result, ensure};
use std::{thread, time::Duration};
use stroll_core::ProgressBar;

/// Size of one simulated item in byte mode.
const BLOCK_SIZE: i64 = 4096;

#[derive(clap::Args, Debug)]
pub struct Subcommand {
	/// number of work items to simulate
	#[arg(long, default_value_t = 2000)]
	pub items: u64,

	/// number of worker threads
	#[arg(long, short = 'j', default_value_t = 4)]
	pub threads: usize,

	/// pause per item, in microseconds
	#[arg(long, default_value_t = 500)]
	pub delay: u64,

	/// count 4 kB blocks instead of items
	#[arg(long)]
	pub bytes: bool,

	/// count without drawing the bar
	#[arg(long)]
	pub hidden: bool,

	/// erase the bar when finished instead of keeping the last frame
	#[arg(long)]
	pub clear: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	ensure!(arguments.threads > 0, "at least one worker thread is required");

	let items = i64::try_from(arguments.items).context("item count does not fit a progress counter")?;
	let step = if arguments.bytes { BLOCK_SIZE } else { 1 };
	let total = items.checked_mul(step).context("byte total does not fit a progress counter")?;

	let bar = ProgressBar::builder(total)
		.hidden(arguments.hidden)
		.bytes(arguments.bytes)
		.build();
	let delay = Duration::from_micros(arguments.delay);

	log::info!("processing {} items on {} threads", arguments.items, arguments.threads);

	thread::scope(|scope| {
		for worker in 0..arguments.threads {
			let bar = bar.clone();
			scope.spawn(move || {
				let mut index = worker as u64;
				while index < arguments.items {
					if !delay.is_zero() {
						thread::sleep(delay);
					}
					bar.add(step);
					index += arguments.threads as u64;
				}
				log::debug!("worker {worker} finished");
			});
		}
	});

	ensure!(
		bar.current() == total,
		"progress ended at {} instead of {}",
		bar.current(),
		total
	);

	// a worker's last update may have found the gate busy; draw the final state once more
	bar.set(total);
	if arguments.clear {
		bar.clear();
	} else {
		bar.done();
	}

	log::info!("processed {} of {}", bar.current(), bar.total());
	Ok(())
}

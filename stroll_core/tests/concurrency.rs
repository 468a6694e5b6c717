use regex::Regex;
use std::{
	sync::{Arc, Barrier},
	thread,
	time::{Duration, Instant},
};
use stroll_core::progress::{FPS, FixedWidth, MemorySink, ProgressBar, render::CLEAR_LINE};

fn bar_into(sink: &MemorySink, total: i64) -> ProgressBar {
	ProgressBar::builder(total)
		.sink(sink.clone())
		.width_probe(FixedWidth(Some(80)))
		.build()
}

fn run_workers(bar: &ProgressBar, workers: usize, per_worker: usize) {
	let barrier = Arc::new(Barrier::new(workers));
	thread::scope(|scope| {
		for _ in 0..workers {
			let bar = bar.clone();
			let barrier = barrier.clone();
			scope.spawn(move || {
				barrier.wait();
				for _ in 0..per_worker {
					bar.inc();
				}
			});
		}
	});
}

#[test]
fn two_workers_increment_without_loss() {
	let sink = MemorySink::new();
	let bar = bar_into(&sink, 0);
	run_workers(&bar, 2, 1000);
	assert_eq!(bar.current(), 2000);
	assert!(bar.total() >= 2000);
	assert_eq!(bar.percent(), 1.0);
}

#[test]
fn many_workers_with_mixed_updates() {
	let sink = MemorySink::new();
	let bar = bar_into(&sink, 10);
	thread::scope(|scope| {
		for worker in 0..8_i64 {
			let bar = bar.clone();
			scope.spawn(move || {
				for _ in 0..250 {
					bar.add(worker);
					bar.add(-worker);
					bar.inc();
				}
			});
		}
	});
	assert_eq!(bar.current(), 2000);
	assert!(bar.total() >= bar.current());
}

#[test]
fn frames_never_interleave() {
	let sink = MemorySink::new();
	let bar = bar_into(&sink, 8 * 5000);
	run_workers(&bar, 8, 5000);
	bar.done();

	let colors = Regex::new("\u{001b}\\[[0-9;]*m").unwrap();
	let frame = Regex::new(r"^ +\d+ / \d+ \[S(?:t*roll|oll|ll?) *\] +\d+\.\d\d% $").unwrap();

	let output = sink.contents();
	assert!(output.ends_with('\n'));
	let output = colors.replace_all(output.trim_end_matches('\n'), "").to_string();
	let frames: Vec<&str> = output.split(CLEAR_LINE).skip(1).collect();
	assert!(!frames.is_empty());
	for text in frames {
		assert!(frame.is_match(text), "garbled frame: {text:?}");
	}
}

#[test]
fn redraws_are_bounded_by_frame_rate() {
	let sink = MemorySink::new();
	let bar = bar_into(&sink, i64::MAX);
	let window = Duration::from_millis(300);

	let start = Instant::now();
	while start.elapsed() < window {
		bar.inc();
	}
	let elapsed = start.elapsed().as_secs_f64();

	let frames = sink.contents().matches(CLEAR_LINE).count() as f64;
	let bound = f64::from(FPS) * elapsed + 2.0;
	assert!(frames >= 1.0);
	assert!(frames <= bound, "{frames} frames in {elapsed:.3}s exceeds {bound}");
}

#[test]
fn latest_value_is_eventually_drawn() {
	let sink = MemorySink::new();
	let bar = bar_into(&sink, 1000);
	run_workers(&bar, 4, 250);
	// the final update always passes the throttle once the gate is free
	bar.set(1000);
	let output = sink.contents();
	let last = output.rsplit(CLEAR_LINE).next().unwrap();
	assert!(last.starts_with(" 1000 / 1000 "), "{last:?}");
}

//! Terminal progress bar.
//!
//! # Overview
//!
//! [`ProgressBar`] tracks `current` out of `total` and redraws a single terminal line
//! as work advances. It is built for hot loops shared by many threads:
//!
//! - counting is lock-free ([`counter`]),
//! - at most one thread draws at a time, and nobody waits for it ([`gate`]),
//! - frames are limited to [`FPS`] per second ([`throttle`]),
//! - the line adapts to the terminal width and degrades to plain numbers on
//!   narrow terminals ([`render`]).
//!
//! # Examples
//!
//! ```rust
//! use stroll_core::progress::{FixedWidth, MemorySink, ProgressBar};
//!
//! let sink = MemorySink::new();
//! let progress = ProgressBar::builder(100)
//! 	.sink(sink.clone())
//! 	.width_probe(FixedWidth(Some(80)))
//! 	.build();
//! progress.add(50);
//! progress.inc();
//! progress.set(100);
//! progress.done();
//!
//! assert_eq!(progress.current(), 100);
//! assert!(sink.contents().ends_with("100.00% \n"));
//! ```

mod bar;
mod builder;
pub mod clock;
pub mod counter;
pub mod gate;
pub mod render;
mod sink;
pub mod throttle;
pub mod width;

pub use bar::ProgressBar;
pub use builder::ProgressBarBuilder;
pub use clock::{Clock, ManualClock, SystemClock};
pub use sink::MemorySink;
pub use throttle::FPS;
pub use width::{FixedWidth, TerminalWidth, WidthProbe};

/// Creates a bar drawing to stderr, or a disabled one when `enabled` is false.
pub fn get_progress_bar(total: i64, enabled: bool) -> ProgressBar {
	if enabled {
		ProgressBar::new(total)
	} else {
		ProgressBar::disabled()
	}
}

//! The [`ProgressBar`] handle.
//!
//! A `ProgressBar` is either active or disabled. Active bars share their state
//! behind an [`Arc`], so clones can be handed to worker threads and all of them
//! count into, and draw, the same line. A disabled bar accepts every call and does
//! nothing, which lets callers thread a bar through code paths that may or may not
//! want progress output without wrapping it in an `Option`.
//!
//! Counter updates never block: the counter is atomic, and drawing goes through a
//! try-acquire [`PrintGate`]. A caller that finds the gate taken, or the output busy
//! with a `done`/`clear` write, skips the frame.

use super::{
	builder::ProgressBarBuilder,
	counter::{Counter, percent},
	gate::PrintGate,
	render::{self, CLEAR_LINE},
	sink::write_flushed,
	throttle::Throttle,
	width::{self, WidthProbe},
};
use anyhow::Result;
use parking_lot::Mutex;
use std::{
	fmt,
	io::Write,
	sync::{
		Arc,
		atomic::{AtomicBool, Ordering},
	},
};

/// A thread-safe, cloneable terminal progress bar.
#[derive(Clone, Default)]
pub struct ProgressBar {
	state: State,
}

#[derive(Clone, Default)]
enum State {
	Active(Arc<Shared>),
	#[default]
	Disabled,
}

struct Shared {
	counter: Counter,
	gate: PrintGate,
	hidden: AtomicBool,
	bytes: AtomicBool,
	width: Box<dyn WidthProbe>,
	output: Mutex<Output>,
}

/// Render-side state. Only the gate holder and `done`/`clear` touch it.
struct Output {
	throttle: Throttle,
	sink: Box<dyn Write + Send>,
}

impl ProgressBar {
	/// Creates a bar drawing to stderr.
	///
	/// A `total` of 0 means "unknown": the bar reads 100% until something is counted.
	pub fn new(total: i64) -> Self {
		ProgressBarBuilder::new(total).build()
	}

	pub fn builder(total: i64) -> ProgressBarBuilder {
		ProgressBarBuilder::new(total)
	}

	/// A bar that ignores every call.
	pub fn disabled() -> Self {
		Self { state: State::Disabled }
	}

	pub(crate) fn from_parts(
		total: i64,
		hidden: bool,
		bytes: bool,
		throttle: Throttle,
		width: Box<dyn WidthProbe>,
		sink: Box<dyn Write + Send>,
	) -> Self {
		Self {
			state: State::Active(Arc::new(Shared {
				counter: Counter::new(total),
				gate: PrintGate::new(),
				hidden: AtomicBool::new(hidden),
				bytes: AtomicBool::new(bytes),
				width,
				output: Mutex::new(Output { throttle, sink }),
			})),
		}
	}

	fn shared(&self) -> Option<&Shared> {
		match &self.state {
			State::Active(shared) => Some(shared.as_ref()),
			State::Disabled => None,
		}
	}

	/// Adds `delta` to the progress and redraws if a frame is due.
	pub fn add(&self, delta: i64) {
		if let Some(shared) = self.shared() {
			shared.counter.add(delta);
			shared.print();
		}
	}

	/// Adds one.
	pub fn inc(&self) {
		self.add(1);
	}

	/// Sets the absolute progress and redraws if a frame is due.
	pub fn set(&self, value: i64) {
		if let Some(shared) = self.shared() {
			shared.counter.set(value);
			shared.print();
		}
	}

	/// Ends the display by moving to a fresh line. Does nothing when hidden.
	pub fn done(&self) {
		let Some(shared) = self.shared() else {
			return;
		};
		if shared.is_hidden() {
			return;
		}
		log::debug!("progress done at {}/{}", shared.counter.current(), shared.counter.total());
		shared.write("\n");
	}

	/// Erases the current line, hidden or not.
	pub fn clear(&self) {
		if let Some(shared) = self.shared() {
			log::debug!("progress cleared");
			shared.write(CLEAR_LINE);
		}
	}

	pub fn current(&self) -> i64 {
		self.shared().map_or(0, |shared| shared.counter.current())
	}

	pub fn total(&self) -> i64 {
		self.shared().map_or(0, |shared| shared.counter.total())
	}

	/// Completion in `[0.0, 1.0]`, as drawn.
	pub fn percent(&self) -> f64 {
		match self.shared() {
			Some(shared) => shared.counter.percent(),
			None => percent(0, 0),
		}
	}

	pub fn is_enabled(&self) -> bool {
		matches!(self.state, State::Active(_))
	}

	pub fn is_hidden(&self) -> bool {
		self.shared().is_some_and(Shared::is_hidden)
	}

	/// Suppresses (or resumes) drawing. Counting continues either way.
	pub fn set_hidden(&self, hidden: bool) {
		if let Some(shared) = self.shared() {
			shared.hidden.store(hidden, Ordering::Relaxed);
		}
	}

	pub fn is_bytes(&self) -> bool {
		self.shared().is_some_and(|shared| shared.bytes.load(Ordering::Relaxed))
	}

	/// Switches the numbers between plain counts and byte sizes.
	pub fn set_bytes(&self, bytes: bool) {
		if let Some(shared) = self.shared() {
			shared.bytes.store(bytes, Ordering::Relaxed);
		}
	}
}

impl Shared {
	fn is_hidden(&self) -> bool {
		self.hidden.load(Ordering::Relaxed)
	}

	fn print(&self) {
		if self.is_hidden() {
			return;
		}
		let Some(_permit) = self.gate.try_acquire() else {
			log::trace!("render in progress, frame skipped");
			return;
		};
		if let Err(err) = self.try_print() {
			log::debug!("progress frame dropped: {err:#}");
		}
	}

	/// Called with the gate held. `done`/`clear` bypass the gate, so the output lock
	/// may still be taken.
	fn try_print(&self) -> Result<()> {
		let Some(mut output) = self.output.try_lock() else {
			log::trace!("output busy, frame skipped");
			return Ok(());
		};
		let (current, total) = self.counter.snapshot();
		if !output.throttle.admit(current, total) {
			return Ok(());
		}
		let line = render::frame(current, total, width::resolve(&*self.width), self.bytes.load(Ordering::Relaxed));
		write_flushed(&mut *output.sink, &line)
	}

	fn write(&self, text: &str) {
		let mut output = self.output.lock();
		if let Err(err) = write_flushed(&mut *output.sink, text) {
			log::debug!("progress output dropped: {err:#}");
		}
	}
}

impl fmt::Debug for ProgressBar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.shared() {
			Some(shared) => f
				.debug_struct("ProgressBar")
				.field("current", &shared.counter.current())
				.field("total", &shared.counter.total())
				.field("hidden", &shared.is_hidden())
				.field("bytes", &shared.bytes.load(Ordering::Relaxed))
				.finish(),
			None => f.write_str("ProgressBar(disabled)"),
		}
	}
}

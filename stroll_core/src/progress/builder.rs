//! Fluent construction of [`ProgressBar`]s.
//!
//! [`ProgressBar::new`] covers the common case (draw to stderr, measure the real
//! terminal, use the system clock). The builder exists for everything else: hiding
//! the bar up front, byte units, and swapping out the output sink, the clock or the
//! width probe.

use super::{
	bar::ProgressBar,
	clock::{Clock, SystemClock},
	throttle::Throttle,
	width::{TerminalWidth, WidthProbe},
};
use std::io::{Write, stderr};

/// Builder for [`ProgressBar`].
pub struct ProgressBarBuilder {
	total: i64,
	hidden: bool,
	bytes: bool,
	sink: Option<Box<dyn Write + Send>>,
	clock: Option<Box<dyn Clock>>,
	width: Option<Box<dyn WidthProbe>>,
}

impl ProgressBarBuilder {
	/// Starts a bar expecting `total` units of work.
	#[must_use]
	pub fn new(total: i64) -> Self {
		Self {
			total,
			hidden: false,
			bytes: false,
			sink: None,
			clock: None,
			width: None,
		}
	}

	/// Count without drawing.
	#[must_use]
	pub fn hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;
		self
	}

	/// Show counts as byte sizes (`1.50 kB`, `2.00 MB`, ...).
	#[must_use]
	pub fn bytes(mut self, bytes: bool) -> Self {
		self.bytes = bytes;
		self
	}

	/// Where frames go. Defaults to stderr.
	#[must_use]
	pub fn sink(mut self, sink: impl Write + Send + 'static) -> Self {
		self.sink = Some(Box::new(sink));
		self
	}

	/// Time source for the redraw throttle. Defaults to [`SystemClock`].
	#[must_use]
	pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
		self.clock = Some(Box::new(clock));
		self
	}

	/// Terminal width lookup. Defaults to [`TerminalWidth`].
	#[must_use]
	pub fn width_probe(mut self, probe: impl WidthProbe + 'static) -> Self {
		self.width = Some(Box::new(probe));
		self
	}

	pub fn build(self) -> ProgressBar {
		let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));
		let width = self.width.unwrap_or_else(|| Box::new(TerminalWidth));
		let sink = self.sink.unwrap_or_else(|| Box::new(stderr()));
		log::trace!("new progress bar: total={} hidden={} bytes={}", self.total, self.hidden, self.bytes);
		ProgressBar::from_parts(self.total, self.hidden, self.bytes, Throttle::new(clock), width, sink)
	}
}

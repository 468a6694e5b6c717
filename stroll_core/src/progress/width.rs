//! Terminal width lookup.

use terminal_size::{Width, terminal_size};

/// Width assumed when the terminal cannot be measured.
pub const DEFAULT_WIDTH: usize = 80;

/// Answers "how many columns does the terminal have right now?".
///
/// Queried on every drawn frame, never cached, so a resized window is picked up
/// on the next frame.
pub trait WidthProbe: Send + Sync {
	/// Returns the column count, or `None` if it cannot be determined.
	fn columns(&self) -> Option<usize>;
}

/// Measures the attached terminal via the `terminal_size` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalWidth;

impl WidthProbe for TerminalWidth {
	fn columns(&self) -> Option<usize> {
		terminal_size().map(|(Width(width), _)| usize::from(width))
	}
}

/// Reports a fixed answer; handy for tests and for output redirected to files.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidth(pub Option<usize>);

impl WidthProbe for FixedWidth {
	fn columns(&self) -> Option<usize> {
		self.0
	}
}

/// Resolves a probe to a usable width: unknown or zero columns count as [`DEFAULT_WIDTH`].
pub fn resolve(probe: &dyn WidthProbe) -> usize {
	match probe.columns() {
		Some(width) if width > 0 => width,
		_ => DEFAULT_WIDTH,
	}
}

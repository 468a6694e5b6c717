//! Lock-free current/total bookkeeping.
//!
//! Both values are plain `AtomicI64`s. Every update first moves `current` and then
//! raises `total` with `fetch_max`, so `total` always ends up at the largest value
//! `current` ever reached (or the initial total, if that was never exceeded).

use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Debug)]
pub struct Counter {
	current: AtomicI64,
	total: AtomicI64,
}

impl Counter {
	/// Creates a counter at zero. Negative totals are clamped to zero.
	#[must_use]
	pub fn new(total: i64) -> Self {
		Self {
			current: AtomicI64::new(0),
			total: AtomicI64::new(total.max(0)),
		}
	}

	/// Adds `delta` and returns the new current value.
	pub fn add(&self, delta: i64) -> i64 {
		let current = self.current.fetch_add(delta, Ordering::SeqCst).wrapping_add(delta);
		self.raise_total(current);
		current
	}

	/// Overwrites the current value.
	pub fn set(&self, value: i64) {
		self.current.store(value, Ordering::SeqCst);
		self.raise_total(value);
	}

	fn raise_total(&self, current: i64) {
		self.total.fetch_max(current, Ordering::SeqCst);
	}

	pub fn current(&self) -> i64 {
		self.current.load(Ordering::SeqCst)
	}

	pub fn total(&self) -> i64 {
		self.total.load(Ordering::SeqCst)
	}

	/// Returns `(current, total)`.
	pub fn snapshot(&self) -> (i64, i64) {
		(self.current(), self.total())
	}

	pub fn percent(&self) -> f64 {
		let (current, total) = self.snapshot();
		percent(current, total)
	}
}

/// Completion ratio in `[0.0, 1.0]`.
///
/// A total below one has no meaningful ratio: it reads as complete while nothing
/// has been counted, and as empty once something has.
pub fn percent(current: i64, total: i64) -> f64 {
	if total < 1 {
		return if current < 1 { 1.0 } else { 0.0 };
	}
	(current as f64 / total as f64).clamp(0.0, 1.0)
}

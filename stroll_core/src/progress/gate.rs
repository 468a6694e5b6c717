//! Single-slot, non-blocking admission for the render path.
//!
//! Only one caller at a time may draw a frame. Everybody else who shows up while a
//! frame is being drawn gets `None` back from [`PrintGate::try_acquire`] and simply
//! goes on with their work; nobody ever waits on the gate.

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct PrintGate {
	busy: AtomicBool,
}

impl PrintGate {
	#[must_use]
	pub const fn new() -> Self {
		Self {
			busy: AtomicBool::new(false),
		}
	}

	/// Claims the slot if it is free. Returns immediately either way.
	pub fn try_acquire(&self) -> Option<GatePermit<'_>> {
		self
			.busy
			.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
			.ok()
			.map(|_| GatePermit { gate: self })
	}

	pub fn is_busy(&self) -> bool {
		self.busy.load(Ordering::Acquire)
	}
}

/// Proof of holding the gate. The slot is released when the permit is dropped,
/// including during unwinding.
#[must_use = "the gate is released as soon as the permit is dropped"]
#[derive(Debug)]
pub struct GatePermit<'a> {
	gate: &'a PrintGate,
}

impl Drop for GatePermit<'_> {
	fn drop(&mut self) {
		self.gate.busy.store(false, Ordering::Release);
	}
}

//! Redraw rate limiting.
//!
//! Counter updates can arrive thousands of times per second; terminal writes are
//! far more expensive. The throttle lets a frame through at most every `1 / FPS`
//! seconds, except for the first frame (nothing counted yet) and the final frame
//! (within one unit of the total), which are always drawn.

use super::clock::Clock;
use std::time::{Duration, Instant};

/// Maximum number of redraws per second.
pub const FPS: u32 = 25;

pub struct Throttle {
	clock: Box<dyn Clock>,
	interval: Duration,
	last_render: Option<Instant>,
}

impl Throttle {
	pub fn new(clock: Box<dyn Clock>) -> Self {
		Self {
			clock,
			interval: Duration::from_secs(1) / FPS,
			last_render: None,
		}
	}

	/// Decides whether a frame for `current`/`total` should be drawn now.
	/// A `true` answer is recorded as the most recent render.
	pub fn admit(&mut self, current: i64, total: i64) -> bool {
		let now = self.clock.now();
		let due = self
			.last_render
			.is_none_or(|last| now.saturating_duration_since(last) > self.interval);

		if current == 0 || current >= total.saturating_sub(1) || due {
			self.last_render = Some(now);
			true
		} else {
			false
		}
	}

	pub fn interval(&self) -> Duration {
		self.interval
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::progress::clock::ManualClock;
	use std::sync::Arc;

	fn throttle() -> (Throttle, Arc<ManualClock>) {
		let clock = Arc::new(ManualClock::new());
		(Throttle::new(Box::new(clock.clone())), clock)
	}

	#[test]
	fn interval_matches_fps() {
		let (throttle, _) = throttle();
		assert_eq!(throttle.interval(), Duration::from_millis(40));
	}

	#[test]
	fn first_frame_always_drawn() {
		let (mut throttle, _) = throttle();
		assert!(throttle.admit(10, 1000));
	}

	#[test]
	fn frames_inside_interval_are_skipped() {
		let (mut throttle, clock) = throttle();
		assert!(throttle.admit(10, 1000));
		assert!(!throttle.admit(11, 1000));
		clock.advance(Duration::from_millis(40));
		assert!(!throttle.admit(12, 1000));
		clock.advance(Duration::from_millis(1));
		assert!(throttle.admit(13, 1000));
		assert!(!throttle.admit(14, 1000));
	}

	#[test]
	fn zero_and_final_frames_bypass_interval() {
		let (mut throttle, _) = throttle();
		assert!(throttle.admit(10, 1000));
		assert!(throttle.admit(0, 1000));
		assert!(throttle.admit(999, 1000));
		assert!(throttle.admit(1000, 1000));
		assert!(!throttle.admit(998, 1000));
	}
}

//! Iterator adapter that counts yielded items.
//!
//! ```rust
//! use stroll_core::{ProgressBar, ProgressIteratorExt};
//!
//! let bar = ProgressBar::builder(3).hidden(true).build();
//! let sum: u32 = [1, 2, 3].into_iter().progress_with(bar.clone()).sum();
//! assert_eq!(sum, 6);
//! assert_eq!(bar.current(), 3);
//! ```

use crate::ProgressBar;

/// Wraps an iterator and increments a bar once per item.
#[derive(Debug)]
pub struct ProgressIter<I> {
	iter: I,
	bar: ProgressBar,
}

impl<I> ProgressIter<I> {
	pub fn new(iter: I, bar: ProgressBar) -> Self {
		Self { iter, bar }
	}

	pub fn bar(&self) -> &ProgressBar {
		&self.bar
	}
}

impl<I: Iterator> Iterator for ProgressIter<I> {
	type Item = I::Item;

	fn next(&mut self) -> Option<Self::Item> {
		let item = self.iter.next();
		if item.is_some() {
			self.bar.inc();
		}
		item
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.size_hint()
	}
}

pub trait ProgressIteratorExt: Iterator + Sized {
	/// Counts items into an existing bar.
	fn progress_with(self, bar: ProgressBar) -> ProgressIter<Self> {
		ProgressIter::new(self, bar)
	}

	/// Counts items into a new stderr bar sized from the iterator's `size_hint`.
	/// Iterators without an upper bound start with a total of 0.
	fn progress(self) -> ProgressIter<Self> {
		let total = self.size_hint().1.map_or(0, |len| i64::try_from(len).unwrap_or(i64::MAX));
		ProgressIter::new(self, ProgressBar::new(total))
	}
}

impl<I: Iterator> ProgressIteratorExt for I {}

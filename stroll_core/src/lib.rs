//! A lock-free, throttled terminal progress bar.
//!
//! * [`progress`]: the [`ProgressBar`] itself, plus its clock, gate and layout parts.
//! * [`io`]: `Read`/`Write` wrappers that count transferred bytes.
//! * [`iter`]: an iterator adapter that counts yielded items.

pub mod io;
pub mod iter;
pub mod progress;

pub use iter::{ProgressIter, ProgressIteratorExt};
pub use progress::{ProgressBar, ProgressBarBuilder};

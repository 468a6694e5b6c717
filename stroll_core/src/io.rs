//! I/O wrappers that feed a [`ProgressBar`].
//!
//! [`ProgressReader`] and [`ProgressWriter`] pass every call through to the wrapped
//! reader or writer and add the number of bytes actually transferred to the bar.
//! Pair them with a bar in byte mode for downloads, copies and hashing.

use crate::ProgressBar;
use std::io::{self, Read, Write};

fn counted(n: usize) -> i64 {
	i64::try_from(n).unwrap_or(i64::MAX)
}

/// Counts bytes read through `inner`.
#[derive(Debug)]
pub struct ProgressReader<R> {
	inner: R,
	bar: ProgressBar,
}

impl<R> ProgressReader<R> {
	pub fn new(inner: R, bar: ProgressBar) -> Self {
		Self { inner, bar }
	}

	pub fn into_inner(self) -> R {
		self.inner
	}
}

impl<R: Read> Read for ProgressReader<R> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let n = self.inner.read(buf)?;
		self.bar.add(counted(n));
		Ok(n)
	}
}

/// Counts bytes written through `inner`.
#[derive(Debug)]
pub struct ProgressWriter<W> {
	inner: W,
	bar: ProgressBar,
}

impl<W> ProgressWriter<W> {
	pub fn new(inner: W, bar: ProgressBar) -> Self {
		Self { inner, bar }
	}

	pub fn into_inner(self) -> W {
		self.inner
	}
}

impl<W: Write> Write for ProgressWriter<W> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let n = self.inner.write(buf)?;
		self.bar.add(counted(n));
		Ok(n)
	}

	fn flush(&mut self) -> io::Result<()> {
		self.inner.flush()
	}
}

//! Output targets for rendered frames.
//!
//! A progress bar writes into any `Write + Send` it is given at construction
//! (stderr by default). [`MemorySink`] keeps everything in memory so the output can
//! be inspected afterwards.

use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::{
	io::{self, Write},
	sync::Arc,
};

/// Cloneable in-memory sink; all clones append to the same buffer.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
	buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Everything written so far, decoded as UTF-8.
	pub fn contents(&self) -> String {
		String::from_utf8_lossy(&self.buffer.lock()).into_owned()
	}

	pub fn len(&self) -> usize {
		self.buffer.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.buffer.lock().is_empty()
	}
}

impl Write for MemorySink {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.buffer.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Writes `text` in one piece and flushes, so a frame never lingers half-written.
pub(crate) fn write_flushed(sink: &mut dyn Write, text: &str) -> Result<()> {
	sink.write_all(text.as_bytes()).context("writing progress output")?;
	sink.flush().context("flushing progress output")?;
	Ok(())
}

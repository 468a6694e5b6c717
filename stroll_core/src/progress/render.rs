//! Frame layout.
//!
//! A frame is one terminal line:
//!
//! ```text
//!  ␣cur / total␣[Sttttttroll          ]  42.00%␣
//! ```
//!
//! The numeric part is padded to the width of the total so it does not jitter
//! between frames; the bar takes whatever columns are left. On terminals too narrow
//! for a useful bar only the numbers and the percentage are written.

use super::counter::percent;
use colored::{Color, Colorize};
use indicatif::DecimalBytes;

/// Moves the cursor to column 0 and erases the line.
pub const CLEAR_LINE: &str = "\x1b[2K\r";

/// Columns taken by the brackets and separators around the bar.
const DECORATION: isize = 5;

/// Below this many free columns the bar is dropped.
const MIN_BAR_SPACE: isize = 11;

/// Smallest fill ever drawn, so a visible bar is never empty.
const MIN_FILL: usize = 2;

/// Builds the complete frame, including the leading [`CLEAR_LINE`].
pub fn frame(current: i64, total: i64, width: usize, bytes: bool) -> String {
	let pct = percent(current, total);
	let pct_text = percent_text(pct);
	let text = numeric_text(current, total, bytes);

	let mut line = String::from(CLEAR_LINE);
	line.push_str(&text);

	let space = width as isize - text.len() as isize - pct_text.len() as isize - DECORATION;
	if space < MIN_BAR_SPACE {
		line.push_str(&pct_text);
		return line;
	}

	let space = space as usize;
	let fill = ((space as f64 * pct).round() as usize).max(MIN_FILL);
	line.push_str(&format!(
		"[{}{}] {pct_text} ",
		make_bar(fill),
		" ".repeat(space.saturating_sub(fill))
	));
	line
}

/// `42.00%`, right-aligned to seven columns.
pub fn percent_text(pct: f64) -> String {
	format!("{:>7}", format!("{:.2}%", pct * 100.0))
}

/// `" cur / total "`, both sides padded to a common width.
pub fn numeric_text(current: i64, total: i64, bytes: bool) -> String {
	if bytes {
		let current = DecimalBytes(current.max(0) as u64).to_string();
		let total = DecimalBytes(total.max(0) as u64).to_string();
		let width = current.len().max(total.len()) + 1;
		format!(" {current:>width$} / {total:>width$} ")
	} else {
		let width = digits(total);
		format!(" {current:>width$} / {total:>width$} ")
	}
}

/// Number of decimal digits in `total`, at least one.
fn digits(total: i64) -> usize {
	total.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Spells "Stroll" across `fill` columns.
///
/// `S` is always there; the `t` stretches to take up the slack, the tail appears
/// letter by letter as the fill grows: `Sl`, `Sll`, `Soll`, `Sroll`, `Stroll`, `Sttroll`, ...
fn make_bar(fill: usize) -> String {
	let stretch = fill.saturating_sub(5);
	let r = usize::from(fill >= 5);
	let o = usize::from(fill >= 4);
	let l = fill.saturating_sub(1).min(2);

	let mut bar = "S".color(Color::Red).to_string();
	for (letter, count, color) in [
		("t", stretch, Color::Green),
		("r", r, Color::Yellow),
		("o", o, Color::Magenta),
		("l", l, Color::Cyan),
	] {
		if count > 0 {
			bar.push_str(&letter.repeat(count).as_str().color(color).to_string());
		}
	}
	bar
}

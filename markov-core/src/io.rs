use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Lazy word scanner over a buffered reader.
///
/// Reads one line at a time and yields its whitespace-delimited words.
/// Words are maximal runs of non-whitespace characters; no quoting,
/// escaping or punctuation stripping is applied.
///
/// Laziness is per line: a line is buffered whole before its first word
/// is yielded, so input with no newlines is held in memory at once.
///
/// Bytes that are not valid UTF-8 are kept as U+FFFD rather than failing
/// the read, so text in other encodings still trains.
///
/// The first read error is yielded once, after which the iterator is fused.
pub struct Words<R> {
	reader: R,
	line: Vec<u8>,
	pending: VecDeque<String>,
	done: bool,
}

impl<R: BufRead> Iterator for Words<R> {
	type Item = io::Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			if let Some(word) = self.pending.pop_front() {
				return Some(Ok(word));
			}
			if self.done {
				return None;
			}

			self.line.clear();
			match self.reader.read_until(b'\n', &mut self.line) {
				Ok(0) => self.done = true,
				Ok(_) => {
					let text = String::from_utf8_lossy(&self.line);
					self.pending.extend(text.split_whitespace().map(str::to_owned));
				}
				Err(e) => {
					self.done = true;
					return Some(Err(e));
				}
			}
		}
	}
}

/// Splits a reader into a lazy sequence of words.
pub fn words<R: BufRead>(reader: R) -> Words<R> {
	Words {
		reader,
		line: Vec::new(),
		pending: VecDeque::new(),
		done: false,
	}
}

/// Opens a text file for word scanning.
pub fn open_file<P: AsRef<Path>>(filename: P) -> io::Result<BufReader<File>> {
	Ok(BufReader::new(File::open(filename)?))
}

/// Writes generated tokens as a single line.
///
/// Each token is followed by one space, and the line ends with `\n`.
/// An empty sequence writes only the newline.
pub fn write_output<W, I, S>(mut writer: W, tokens: I) -> io::Result<()>
where
	W: Write,
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	for token in tokens {
		write!(writer, "{} ", token.as_ref())?;
	}
	writeln!(writer)?;
	writer.flush()
}

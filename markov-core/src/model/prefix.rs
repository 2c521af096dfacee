use std::fmt;

/// One element of a prefix window.
///
/// `Start` marks the beginning of a document. It is a separate variant
/// rather than a reserved string, so no input token can ever collide with it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Word {
	Start,
	Token(String),
}

impl Word {
	/// Wraps a token.
	pub fn token<S: Into<String>>(s: S) -> Self {
		Word::Token(s.into())
	}

	/// Returns the token text, or `None` for the start marker.
	pub fn as_token(&self) -> Option<&str> {
		match self {
			Word::Start => None,
			Word::Token(s) => Some(s),
		}
	}
}

impl fmt::Display for Word {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Word::Start => f.write_str("^"),
			Word::Token(s) => f.write_str(s),
		}
	}
}

/// Sliding window over the most recent words.
///
/// Starts as `len` start markers. Each `shift` drops the oldest word and
/// appends the newest, so the window length never changes.
///
/// # Invariants
/// - `words.len()` is fixed at construction and >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefix {
	words: Vec<Word>,
}

impl Prefix {
	/// Creates a window of `len` start markers.
	///
	/// `len` comes from a validated `ChainConfig` and is never zero.
	pub fn start(len: usize) -> Self {
		Self { words: vec![Word::Start; len] }
	}

	/// Drops the oldest word and appends `token` as the newest.
	pub fn shift<S: Into<String>>(&mut self, token: S) {
		if self.words.is_empty() {
			return;
		}
		self.words.rotate_left(1);
		if let Some(last) = self.words.last_mut() {
			*last = Word::Token(token.into());
		}
	}

	/// The window as a table key, oldest word first.
	pub fn key(&self) -> &[Word] {
		&self.words
	}

	/// True while at least one start marker remains in the window.
	pub fn at_start(&self) -> bool {
		self.words.first() == Some(&Word::Start)
	}
}

impl fmt::Display for Prefix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, word) in self.words.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{word}")?;
		}
		Ok(())
	}
}

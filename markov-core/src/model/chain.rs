use std::collections::HashMap;
use std::convert::Infallible;
use std::io::BufRead;

use log::{debug, trace};
use rand::Rng;

use super::config::ChainConfig;
use super::prefix::{Prefix, Word};
use super::state::State;
use crate::error::ChainError;
use crate::io;

/// Represents a word-level Markov chain.
///
/// The `Chain` maps every prefix window seen during training to the ordered
/// list of words that followed it, and generates text by walking that table
/// from the start-of-document state.
///
/// # Responsibilities
/// - Build the table from one or more documents
/// - Look up the suffixes of a prefix
/// - Generate bounded random walks using a caller-supplied RNG
///
/// # Invariants
/// - Every key has exactly `config.prefix_len()` words
/// - Every stored state has at least one suffix
/// - Training is deterministic: the same documents always give the same table
#[derive(Clone, Debug, Default)]
pub struct Chain {
	config: ChainConfig,

	/// Mapping from a prefix window to its observed suffixes
	states: HashMap<Vec<Word>, State>,
}

impl Chain {
	/// Creates an empty chain.
	pub fn new(config: ChainConfig) -> Self {
		Self { config, states: HashMap::new() }
	}

	pub fn config(&self) -> &ChainConfig {
		&self.config
	}

	/// Number of distinct prefixes in the table.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Returns the suffixes recorded after `prefix`, in insertion order.
	///
	/// Returns `None` if the prefix was never seen.
	pub fn suffixes(&self, prefix: &[Word]) -> Option<&[String]> {
		self.states.get(prefix).map(State::suffixes)
	}

	/// Iterates over every `(prefix, suffixes)` entry, in no particular order.
	pub fn states(&self) -> impl Iterator<Item = (&[Word], &[String])> {
		self.states.iter().map(|(key, state)| (key.as_slice(), state.suffixes()))
	}

	/// Adds one document to the table.
	///
	/// The prefix window starts at the start-of-document state and each token
	/// is recorded as a suffix of the current window before the window moves.
	/// Returns the number of tokens ingested.
	pub fn train<I, S>(&mut self, tokens: I) -> usize
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		match self.train_document(tokens.into_iter().map(|t| Ok::<_, Infallible>(t.into()))) {
			Ok(count) => count,
			Err(never) => match never {},
		}
	}

	/// Adds one document read from `reader` to the table.
	///
	/// Words are scanned lazily, one line at a time.
	///
	/// # Errors
	/// Returns the first read error. Training stops there; tokens read
	/// before the failure stay in the table.
	pub fn train_reader<R: BufRead>(&mut self, reader: R) -> Result<usize, ChainError> {
		Ok(self.train_document(io::words(reader))?)
	}

	/// Feeds one document into the table, stopping at the first error.
	fn train_document<I, E>(&mut self, tokens: I) -> Result<usize, E>
	where
		I: IntoIterator<Item = Result<String, E>>,
	{
		let mut prefix = Prefix::start(self.config.prefix_len());
		let mut count = 0;
		for token in tokens {
			self.add(&mut prefix, token?);
			count += 1;
		}
		debug!("trained document: {} tokens, {} states", count, self.states.len());
		Ok(count)
	}

	/// Records `token` as a suffix of `prefix`, then shifts it into the window.
	fn add(&mut self, prefix: &mut Prefix, token: String) {
		match self.states.get_mut(prefix.key()) {
			Some(state) => state.add_suffix(token.clone()),
			None => {
				let mut state = State::default();
				state.add_suffix(token.clone());
				self.states.insert(prefix.key().to_vec(), state);
			}
		}
		prefix.shift(token);
	}

	/// Starts a random walk from the start-of-document state.
	///
	/// The walk yields at most `config.max_output()` words and stops early
	/// at the first prefix with no table entry.
	pub fn walk<'a, R: Rng + ?Sized>(&'a self, rng: &'a mut R) -> Walk<'a, R> {
		Walk {
			chain: self,
			rng,
			prefix: Prefix::start(self.config.prefix_len()),
			emitted: 0,
			finished: false,
		}
	}

	/// Generates one sequence of words.
	///
	/// Returns between 0 and `config.max_output()` words, all of them
	/// tokens seen during training.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
		self.walk(rng).map(str::to_owned).collect()
	}
}

/// Lazy random walk over a `Chain`.
///
/// Created by [`Chain::walk`]. Each call to `next` looks up the current
/// prefix, draws one suffix uniformly from its list, and moves the window.
pub struct Walk<'a, R: ?Sized> {
	chain: &'a Chain,
	rng: &'a mut R,
	prefix: Prefix,
	emitted: usize,
	finished: bool,
}

impl<'a, R: Rng + ?Sized> Walk<'a, R> {
	/// The current prefix window.
	pub fn prefix(&self) -> &Prefix {
		&self.prefix
	}
}

impl<'a, R: Rng + ?Sized> Iterator for Walk<'a, R> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}
		if self.emitted >= self.chain.config.max_output() {
			debug!("walk reached the {} word cap", self.emitted);
			self.finished = true;
			return None;
		}

		let chain: &'a Chain = self.chain;
		let Some(state) = chain.states.get(self.prefix.key()) else {
			debug!("walk ended after {} words: no entry for [{}]", self.emitted, self.prefix);
			self.finished = true;
			return None;
		};
		let next = state.choose(self.rng)?;

		trace!("[{}] -> {} (of {} suffixes)", self.prefix, next, state.len());
		self.prefix.shift(next);
		self.emitted += 1;
		Some(next)
	}
}

use rand::Rng;
use rand::seq::IndexedRandom;

/// Represents a state of the Markov chain.
///
/// A `State` holds every word observed right after one prefix, in the order
/// they were seen. Repeated suffixes are kept: a word seen twice is twice as
/// likely to be drawn, so the list doubles as the transition weights.
///
/// ## Invariants
/// - A state stored in a chain always has at least one suffix
#[derive(Clone, Debug, Default)]
pub(crate) struct State {
	/// Observed suffixes in insertion order.
	/// Example: ["a", "b", "a"]
	suffixes: Vec<String>,
}

impl State {
	/// Records one occurrence of `suffix` after this state's prefix.
	pub fn add_suffix(&mut self, suffix: String) {
		self.suffixes.push(suffix);
	}

	/// Picks a suffix uniformly at random from the list.
	///
	/// Returns `None` if the state has no suffixes.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.suffixes.choose(rng).map(String::as_str)
	}

	pub fn suffixes(&self) -> &[String] {
		&self.suffixes
	}

	/// Number of recorded occurrences, duplicates included.
	pub fn len(&self) -> usize {
		self.suffixes.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn keeps_duplicates_in_order() {
		let mut state = State::default();
		state.add_suffix("a".to_owned());
		state.add_suffix("b".to_owned());
		state.add_suffix("a".to_owned());
		assert_eq!(state.suffixes(), ["a", "b", "a"]);
		assert_eq!(state.len(), 3);
	}

	#[test]
	fn empty_state_chooses_nothing() {
		let state = State::default();
		assert_eq!(state.choose(&mut StdRng::seed_from_u64(1)), None);
	}

	#[test]
	fn singleton_is_always_chosen() {
		let mut state = State::default();
		state.add_suffix("only".to_owned());
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..50 {
			assert_eq!(state.choose(&mut rng), Some("only"));
		}
	}

	#[test]
	fn draws_follow_frequency() {
		let mut state = State::default();
		for s in ["x", "x", "x", "y"] {
			state.add_suffix(s.to_owned());
		}
		let mut rng = StdRng::seed_from_u64(42);
		let draws = 4000;
		let xs = (0..draws).filter(|_| state.choose(&mut rng) == Some("x")).count();
		// Expected 3000; allow a wide margin.
		assert!((2700..=3300).contains(&xs), "x drawn {xs} times");
	}
}

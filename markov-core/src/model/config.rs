use crate::error::ChainError;

/// Default number of words in the prefix window.
pub const N_PREFIX: usize = 2;

/// Default maximum number of generated words.
pub const MAX_OUTPUT: usize = 200;

/// Parameters fixed at chain construction.
///
/// # Invariants
/// - `prefix_len` is always >= 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainConfig {
	prefix_len: usize,
	max_output: usize,
}

impl ChainConfig {
	/// Creates a configuration.
	///
	/// `max_output` may be zero, in which case generation yields nothing.
	///
	/// # Errors
	/// Returns an error if `prefix_len` is zero.
	pub fn new(prefix_len: usize, max_output: usize) -> Result<Self, ChainError> {
		if prefix_len == 0 {
			return Err(ChainError::InvalidConfig("prefix_len must be >= 1".to_owned()));
		}
		Ok(Self { prefix_len, max_output })
	}

	/// Number of words in the prefix window.
	pub fn prefix_len(&self) -> usize {
		self.prefix_len
	}

	/// Maximum number of words a single walk emits.
	pub fn max_output(&self) -> usize {
		self.max_output
	}
}

impl Default for ChainConfig {
	fn default() -> Self {
		Self { prefix_len: N_PREFIX, max_output: MAX_OUTPUT }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_uses_the_constants() {
		let config = ChainConfig::default();
		assert_eq!(config.prefix_len(), 2);
		assert_eq!(config.max_output(), 200);
	}

	#[test]
	fn zero_prefix_is_rejected() {
		assert!(matches!(ChainConfig::new(0, 10), Err(ChainError::InvalidConfig(_))));
	}

	#[test]
	fn zero_output_is_allowed() {
		let config = ChainConfig::new(3, 0).unwrap();
		assert_eq!(config.prefix_len(), 3);
		assert_eq!(config.max_output(), 0);
	}
}

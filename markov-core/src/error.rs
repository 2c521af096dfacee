use std::{fmt, io};

/// Errors that can occur while configuring or training a chain.
///
/// A lookup miss during generation is the normal end of a walk
/// and is never reported through this type.
#[derive(Debug)]
pub enum ChainError {
	/// Reading the input stream failed before end of input.
	Io(io::Error),
	/// A configuration value is out of range.
	InvalidConfig(String),
}

impl fmt::Display for ChainError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Io(e) => write!(f, "failed to read input: {e}"),
			Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
		}
	}
}

impl std::error::Error for ChainError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(e) => Some(e),
			Self::InvalidConfig(_) => None,
		}
	}
}

impl From<io::Error> for ChainError {
	fn from(e: io::Error) -> Self {
		Self::Io(e)
	}
}

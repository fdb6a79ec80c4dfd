use thiserror::Error;

/// Errors reported by the clustering operations.
///
/// All errors are deterministic: the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KMedoidsError {
	/// An operation that needs at least one cluster received none.
	#[error("configuration has no clusters")]
	EmptyInput,
	/// An argument was rejected at the API boundary, e.g. `k` out of range.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
}

/// Result type of this crate.
pub type Result<T> = std::result::Result<T, KMedoidsError>;

/// Check that `0 < k <= n`
pub(crate) fn check_k(k: usize, n: usize) -> Result<()> {
	if k == 0 {
		return Err(KMedoidsError::InvalidArgument(
			"k must be at least 1".to_string(),
		));
	}
	if k > n {
		return Err(KMedoidsError::InvalidArgument(format!(
			"k = {} exceeds the number of elements ({})",
			k, n
		)));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_check_k() {
		assert_eq!(check_k(1, 1), Ok(()));
		assert_eq!(check_k(3, 9), Ok(()));
		assert!(matches!(check_k(0, 5), Err(KMedoidsError::InvalidArgument(_))));
		let err = check_k(6, 5).unwrap_err();
		assert_eq!(
			err.to_string(),
			"invalid argument: k = 6 exceeds the number of elements (5)"
		);
	}
}

use crate::configuration::Configuration;

/// Find the minimum (index and value)
///
/// Ties are resolved to the first minimum. Returns `None` on empty input.
#[inline]
pub(crate) fn find_min<L, I>(a: I) -> Option<(usize, L)>
where
	L: PartialOrd,
	I: Iterator<Item = L>,
{
	let mut a = a.enumerate();
	let mut best: (usize, L) = a.next()?;
	for (ik, iv) in a {
		if iv < best.1 {
			best = (ik, iv);
		}
	}
	Some(best)
}

/// Debug helper function, verifies the configuration still holds `n` elements
pub(crate) fn debug_assert_configuration<T>(_conf: &Configuration<T>, _n: usize) {
	#[cfg(feature = "assertions")]
	debug_assert_eq!(_conf.len(), _n, "elements were lost or duplicated");
}

/// test that a configuration is a partition of the input, used in tests only
#[cfg(test)]
pub(crate) fn assert_partition<T>(conf: &Configuration<T>, input: &[T], msg: &'static str)
where
	T: Ord + Clone + std::fmt::Debug,
{
	let mut found: Vec<T> = conf.iter().cloned().collect();
	let mut expect = input.to_vec();
	found.sort();
	expect.sort();
	assert_eq!(found, expect, "{}", msg);
}

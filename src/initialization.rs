use crate::error::{check_k, Result};
use crate::metric::Metric;
use core::ops::AddAssign;
use num_traits::{Signed, Zero};
use std::convert::From;

/// The default initialization: the first `k` elements, in order.
///
/// returns `[0, 1, ..., k-1]`
#[inline]
pub fn first_k_initialization(k: usize) -> Vec<usize> {
	(0..k).collect()
}

/// Random initialization (requires the `rand` crate)
///
/// This is simply a call to `rand::seq::index::sample`.
///
/// * `n` - size of the data set
/// * `k` - number of clusters to find
/// * `rng` - random number generator
///
/// returns a vector of medoid indexes in 0..n-1
///
/// ## Example
///
/// ```
/// let data = vec![1, 4, 7, 2, 5, 8, 3, 6, 9];
/// let meds = kmedoids_generic::random_initialization(data.len(), 3, &mut rand::thread_rng());
/// let metric = |a: &i32, b: &i32| (a - b) * (a - b);
/// let (loss, conf, _): (i64, _, _) = kmedoids_generic::kmedoids_with_medoids(&metric, data, &meds, 100).unwrap();
/// println!("Loss is {} with medoids {:?}", loss, conf.medoids());
/// ```
#[cfg(feature = "rand")]
#[inline]
pub fn random_initialization(n: usize, k: usize, rng: &mut impl rand::Rng) -> Vec<usize> {
	rand::seq::index::sample(rng, n, k).into_vec()
}

/// Greedy BUILD initialization, as in the classic PAM algorithm.
///
/// The first medoid is the element with the least total dissimilarity to all
/// others. Each further medoid is the element that reduces the total cost
/// the most. On ties, the earlier element wins.
///
/// This needs O(n²k) dissimilarity computations, and is usually much better
/// than choosing the first k elements.
///
/// * `metric` - the dissimilarity function
/// * `elements` - the data to cluster
/// * `k` - number of clusters to find
///
/// returns a tuple containing:
/// * the loss of assigning every element to its nearest medoid
/// * the medoid indexes, in the order chosen
///
/// ## Errors
///
/// * [`KMedoidsError::InvalidArgument`](crate::KMedoidsError::InvalidArgument) when k is 0 or larger than the number of elements
pub fn build_initialization<T, D, N, L>(metric: &D, elements: &[T], k: usize) -> Result<(L, Vec<usize>)>
where
	N: PartialOrd + Copy,
	L: AddAssign + Signed + Zero + PartialOrd + Copy + From<N>,
	D: Metric<T, N>,
{
	let n = elements.len();
	check_k(k, n)?;
	// choose first medoid
	let mut best = (L::zero(), n);
	for (i, ei) in elements.iter().enumerate() {
		let mut sum = L::zero();
		for (j, ej) in elements.iter().enumerate() {
			if j != i {
				sum += L::from(metric.dissimilarity(ei, ej));
			}
		}
		if i == 0 || sum < best.0 {
			best = (sum, i);
		}
	}
	let mut meds = Vec::with_capacity(k);
	meds.push(best.1);
	let first = &elements[best.1];
	let mut near: Vec<L> = elements
		.iter()
		.enumerate()
		.map(|(j, ej)| {
			if j == best.1 {
				L::zero()
			} else {
				L::from(metric.dissimilarity(first, ej))
			}
		})
		.collect();
	// choose remaining medoids
	for _ in 1..k {
		best = (L::zero(), n);
		for (i, ei) in elements.iter().enumerate() {
			if meds.contains(&i) {
				continue;
			}
			let mut sum = L::zero();
			for (j, ej) in elements.iter().enumerate() {
				if j != i {
					let d = L::from(metric.dissimilarity(ei, ej));
					if d < near[j] {
						sum += d - near[j];
					}
				}
			}
			if best.1 == n || sum < best.0 {
				best = (sum, i);
			}
		}
		let (chosen, ec) = (best.1, &elements[best.1]);
		for (j, ej) in elements.iter().enumerate() {
			let d = if j == chosen {
				L::zero()
			} else {
				L::from(metric.dissimilarity(ec, ej))
			};
			if d < near[j] {
				near[j] = d;
			}
		}
		meds.push(chosen);
	}
	let mut loss = L::zero();
	for &d in near.iter() {
		loss += d;
	}
	Ok((loss, meds))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::KMedoidsError;
	use rand::{rngs::StdRng, SeedableRng};

	fn sq(a: &i32, b: &i32) -> i32 {
		(a - b) * (a - b)
	}

	#[test]
	fn test_first_k() {
		assert_eq!(first_k_initialization(3), vec![0, 1, 2]);
		assert!(first_k_initialization(0).is_empty());
	}

	#[test]
	fn test_random_initialization() {
		let mut rng = StdRng::seed_from_u64(42);
		let mut meds = random_initialization(10, 4, &mut rng);
		assert_eq!(meds.len(), 4);
		meds.sort_unstable();
		meds.dedup();
		assert_eq!(meds.len(), 4, "duplicate medoids");
		assert!(meds.iter().all(|&m| m < 10));
	}

	#[test]
	fn test_build() {
		let data = vec![1, 4, 7, 2, 5, 8, 3, 6, 9];
		let (loss, meds): (i64, _) = build_initialization(&sq, &data, 3).unwrap();
		assert_eq!(meds, vec![4, 2, 6], "medoids not as expected");
		// every element to the nearest of 5, 7 and 3
		assert_eq!(loss, 4 + 1 + 1 + 1 + 1 + 4);
	}

	#[test]
	fn test_build_single() {
		let data = vec![10, 1, 2, 3];
		let (loss, meds): (i64, _) = build_initialization(&sq, &data, 1).unwrap();
		assert_eq!(meds, vec![3]);
		assert_eq!(loss, 49 + 4 + 1);
	}

	#[test]
	fn test_build_invalid_k() {
		let res: Result<(i64, _)> = build_initialization(&sq, &[1, 2], 3);
		assert!(matches!(res, Err(KMedoidsError::InvalidArgument(_))));
		let res: Result<(i64, _)> = build_initialization(&sq, &[1, 2], 0);
		assert!(matches!(res, Err(KMedoidsError::InvalidArgument(_))));
	}
}

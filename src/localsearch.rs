use crate::configuration::Configuration;
use crate::error::{check_k, KMedoidsError, Result};
use crate::initialization::first_k_initialization;
use crate::metric::Metric;
use crate::util::debug_assert_configuration;
use core::fmt::Debug;
use core::ops::AddAssign;
use num_traits::Zero;
use std::convert::From;
use tracing::{debug, warn};

/// Perform one k-medoids iteration.
///
/// All members are stripped from their clusters, reassigned to the nearest
/// medoid (in cluster order, then member order), and finally each cluster
/// chooses its best medoid.
pub fn kmedoids_iteration<T, D, N, L>(metric: &D, conf: Configuration<T>) -> Result<Configuration<T>>
where
	T: Clone,
	N: PartialOrd,
	L: AddAssign + Zero + PartialOrd + From<N>,
	D: Metric<T, N>,
{
	let (elements, empty) = conf.deconfigure();
	let reassigned = empty.assign_elements(metric, elements)?;
	Ok(reassigned.update::<D, N, L>(metric))
}

/// Run a greedy local search from the given configuration.
///
/// Iterations are repeated as long as each strictly decreases the cost.
/// The first iteration that does not improve ends the search, and the
/// configuration before it is returned. There is no tolerance for plateaus;
/// see [`local_search_with_patience`] for a variant that has one.
///
/// * type `T` - element type
/// * type `N` - number data type returned by the metric, such as `u32` or `f64`
/// * type `L` - number data type such as `i64` or `f64` for the loss
/// * `metric` - the dissimilarity function
/// * `conf` - the initial configuration
/// * `maxiter` - the maximum number of iterations allowed
///
/// returns a tuple containing:
/// * the final loss
/// * the final configuration
/// * the number of iterations computed (including the final, non-improving one)
pub fn local_search<T, D, N, L>(
	metric: &D,
	conf: Configuration<T>,
	maxiter: usize,
) -> Result<(L, Configuration<T>, usize)>
where
	T: Clone,
	N: PartialOrd,
	L: AddAssign + Zero + PartialOrd + Copy + From<N> + Debug,
	D: Metric<T, N>,
{
	local_search_with_patience(metric, conf, maxiter, 0)
}

/// Run a local search that tolerates non-improving iterations.
///
/// The search only stops after `patience + 1` consecutive iterations without
/// improving on the best configuration seen, which is returned.
/// With `patience = 0`, this is exactly [`local_search`].
///
/// Because the best configuration is kept, the result is never worse than
/// that of [`local_search`] from the same start.
pub fn local_search_with_patience<T, D, N, L>(
	metric: &D,
	conf: Configuration<T>,
	maxiter: usize,
	patience: usize,
) -> Result<(L, Configuration<T>, usize)>
where
	T: Clone,
	N: PartialOrd,
	L: AddAssign + Zero + PartialOrd + Copy + From<N> + Debug,
	D: Metric<T, N>,
{
	let n = conf.len();
	let mut loss: L = conf.cost(metric);
	debug!(n, k = conf.k(), loss = ?loss, "starting local search");
	let mut best = conf.clone();
	let mut current = conf;
	let (mut iter, mut stale) = (0, 0);
	while iter < maxiter {
		iter += 1;
		let next = kmedoids_iteration::<T, D, N, L>(metric, current)?;
		debug_assert_configuration(&next, n);
		let newloss: L = next.cost(metric);
		debug!(iter, loss = ?newloss, "local search iteration");
		if loss > newloss {
			loss = newloss;
			best = next.clone();
			stale = 0;
		} else {
			stale += 1;
			if stale > patience {
				return Ok((loss, best, iter));
			}
		}
		current = next;
	}
	if maxiter > 0 {
		warn!(maxiter, "local search stopped by iteration limit");
	}
	Ok((loss, best, iter))
}

/// Run k-medoids clustering on arbitrary elements.
///
/// The first `k` elements are used as initial medoids, the remaining elements
/// are assigned to their nearest medoid in input order, and then
/// [`local_search`] is run until no iteration improves.
///
/// * type `T` - element type
/// * type `N` - number data type returned by the metric, such as `u32` or `f64`
/// * type `L` - number data type such as `i64` or `f64` for the loss
/// * `k` - number of clusters
/// * `metric` - the dissimilarity function
/// * `elements` - the data to cluster
/// * `maxiter` - the maximum number of iterations allowed
///
/// returns a tuple containing:
/// * the final loss
/// * the final configuration
/// * the number of iterations computed
///
/// An empty input gives an empty configuration, for any `k`.
///
/// ## Errors
///
/// * [`KMedoidsError::InvalidArgument`] when k is 0 or larger than the number of elements
///
/// ## Example
/// ```
/// let metric = |a: &f64, b: &f64| (a - b).abs();
/// let data = vec![1.0, 10.0, 1.5, 11.0, 0.5, 12.0];
/// let (loss, conf, n_iter): (f64, _, _) = kmedoids_generic::kmedoids(2, &metric, data, 100).unwrap();
/// println!("Loss is {} after {} iterations", loss, n_iter);
/// for cluster in conf.clusters() {
/// 	println!("{:?}: {:?}", cluster.medoid(), cluster.members());
/// }
/// ```
pub fn kmedoids<T, D, N, L>(
	k: usize,
	metric: &D,
	elements: Vec<T>,
	maxiter: usize,
) -> Result<(L, Configuration<T>, usize)>
where
	T: Clone,
	N: PartialOrd,
	L: AddAssign + Zero + PartialOrd + Copy + From<N> + Debug,
	D: Metric<T, N>,
{
	if elements.is_empty() {
		return Ok((L::zero(), Configuration::default(), 0));
	}
	check_k(k, elements.len())?;
	kmedoids_with_medoids(metric, elements, &first_k_initialization(k), maxiter)
}

/// Run k-medoids clustering with chosen initial medoids.
///
/// `med` contains the indexes of the initial medoids in `elements`, for example
/// as obtained from [`random_initialization`](crate::random_initialization) or
/// [`build_initialization`](crate::build_initialization). Clusters are created in
/// the order of `med`; all other elements are assigned in input order.
///
/// ## Errors
///
/// * [`KMedoidsError::InvalidArgument`] when `med` is empty, longer than the input,
///   or contains an invalid or repeated index
pub fn kmedoids_with_medoids<T, D, N, L>(
	metric: &D,
	elements: Vec<T>,
	med: &[usize],
	maxiter: usize,
) -> Result<(L, Configuration<T>, usize)>
where
	T: Clone,
	N: PartialOrd,
	L: AddAssign + Zero + PartialOrd + Copy + From<N> + Debug,
	D: Metric<T, N>,
{
	let n = elements.len();
	if n == 0 && med.is_empty() {
		return Ok((L::zero(), Configuration::default(), 0));
	}
	check_k(med.len(), n)?;
	let mut slots: Vec<Option<T>> = elements.into_iter().map(Some).collect();
	let mut medoids = Vec::with_capacity(med.len());
	for &m in med {
		let slot = slots.get_mut(m).ok_or_else(|| {
			KMedoidsError::InvalidArgument(format!("medoid index {} out of range 0..{}", m, n))
		})?;
		let medoid = slot.take().ok_or_else(|| {
			KMedoidsError::InvalidArgument(format!("medoid index {} given twice", m))
		})?;
		medoids.push(medoid);
	}
	debug!(n, k = med.len(), "initial assignment");
	let rest = slots.into_iter().flatten();
	let conf = Configuration::from_medoids(medoids).assign_elements(metric, rest)?;
	local_search(metric, conf, maxiter)
}

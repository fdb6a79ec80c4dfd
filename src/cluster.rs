use crate::metric::Metric;
use crate::util::find_min;
use core::ops::AddAssign;
use num_traits::Zero;
use std::convert::From;

/// A cluster: one medoid and the members assigned to it.
///
/// The medoid is an actual element, and is never contained in `members`.
/// Clusters are changed by whole-value replacement: the modifying operations
/// consume the cluster and return a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<T> {
	medoid: T,
	members: Vec<T>,
}

impl<T> Cluster<T> {
	/// New cluster without members
	pub fn new(medoid: T) -> Self {
		Cluster {
			medoid,
			members: Vec::new(),
		}
	}

	/// The representative element
	pub fn medoid(&self) -> &T {
		&self.medoid
	}

	/// The assigned members, in assignment order
	pub fn members(&self) -> &[T] {
		&self.members
	}

	/// Number of elements, medoid included
	#[allow(clippy::len_without_is_empty)]
	pub fn len(&self) -> usize {
		self.members.len() + 1
	}

	/// Iterate over the medoid, then the members
	pub fn iter(&self) -> impl Iterator<Item = &T> {
		std::iter::once(&self.medoid).chain(self.members.iter())
	}

	/// Split into medoid and members
	pub fn into_parts(self) -> (T, Vec<T>) {
		(self.medoid, self.members)
	}

	/// Append a member to the cluster.
	pub fn add_element(mut self, element: T) -> Self {
		self.members.push(element);
		self
	}

	/// Dissimilarity of an element to this cluster, i.e., to its medoid.
	#[inline]
	pub fn distance_to<D, N>(&self, metric: &D, element: &T) -> N
	where
		D: Metric<T, N>,
	{
		metric.dissimilarity(&self.medoid, element)
	}

	/// Sum of the dissimilarities from the medoid to all members.
	///
	/// ## Example
	/// ```
	/// let cluster = kmedoids_generic::Cluster::new(3)
	/// 	.add_element(1).add_element(5).add_element(7).add_element(9);
	/// let cost: i64 = cluster.cost(&|a: &i32, b: &i32| (a - b) * (a - b));
	/// assert_eq!(cost, 60);
	/// ```
	pub fn cost<D, N, L>(&self, metric: &D) -> L
	where
		L: AddAssign + Zero + From<N>,
		D: Metric<T, N>,
	{
		let mut sum = L::zero();
		for x in self.members.iter() {
			sum += L::from(metric.dissimilarity(&self.medoid, x));
		}
		sum
	}

	/// Strip all members, returning them and the medoid-only cluster.
	pub fn decluster(self) -> (Vec<T>, Self) {
		(self.members, Cluster::new(self.medoid))
	}
}

impl<T: Clone> Cluster<T> {
	/// All candidate clusters with a different choice of medoid.
	///
	/// The elements `[medoid, members...]` are treated as a ring: candidate `i`
	/// has element `i` as medoid, followed by the remaining elements in ring order.
	/// Because member order does not matter, these `n` rotations cover every
	/// medoid choice. The first candidate is the unchanged cluster.
	pub fn permutations(&self) -> Vec<Cluster<T>> {
		let n = self.len();
		let ring: Vec<&T> = self.iter().collect();
		let mut candidates = Vec::with_capacity(n);
		for i in 0..n {
			let mut members = Vec::with_capacity(n - 1);
			for j in 1..n {
				members.push(ring[(i + j) % n].clone());
			}
			candidates.push(Cluster {
				medoid: ring[i].clone(),
				members,
			});
		}
		candidates
	}

	/// Choose the best medoid within the cluster.
	///
	/// Returns the candidate of [`Cluster::permutations`] with the least cost.
	/// On ties, the earliest candidate wins, so the current medoid is kept
	/// unless a strictly better one exists.
	pub fn update<D, N, L>(self, metric: &D) -> Self
	where
		L: AddAssign + Zero + PartialOrd + From<N>,
		D: Metric<T, N>,
	{
		let mut candidates = self.permutations();
		let costs = candidates.iter().map(|c| c.cost::<D, N, L>(metric));
		match find_min(costs) {
			Some((best, _)) => candidates.swap_remove(best),
			None => self,
		}
	}
}

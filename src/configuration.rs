use crate::cluster::Cluster;
use crate::error::{KMedoidsError, Result};
use crate::metric::Metric;
use crate::util::find_min;
use core::ops::AddAssign;
use num_traits::Zero;
use std::convert::From;

/// A configuration: an ordered list of clusters partitioning all elements.
///
/// Every input element is contained exactly once, either as a medoid or
/// as a member of one cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration<T> {
	clusters: Vec<Cluster<T>>,
}

impl<T> Default for Configuration<T> {
	fn default() -> Self {
		Configuration {
			clusters: Vec::new(),
		}
	}
}

impl<T> From<Vec<Cluster<T>>> for Configuration<T> {
	fn from(clusters: Vec<Cluster<T>>) -> Self {
		Configuration { clusters }
	}
}

impl<T> Configuration<T> {
	/// Configuration of medoid-only clusters, in the given order
	pub fn from_medoids(medoids: Vec<T>) -> Self {
		Configuration {
			clusters: medoids.into_iter().map(Cluster::new).collect(),
		}
	}

	/// The clusters, in order
	pub fn clusters(&self) -> &[Cluster<T>] {
		&self.clusters
	}

	/// Consume into the list of clusters
	pub fn into_clusters(self) -> Vec<Cluster<T>> {
		self.clusters
	}

	/// Number of clusters
	pub fn k(&self) -> usize {
		self.clusters.len()
	}

	/// Total number of elements, medoids included
	pub fn len(&self) -> usize {
		self.clusters.iter().map(Cluster::len).sum()
	}

	/// True if there are no clusters
	pub fn is_empty(&self) -> bool {
		self.clusters.is_empty()
	}

	/// The medoids, in cluster order
	pub fn medoids(&self) -> Vec<&T> {
		self.clusters.iter().map(Cluster::medoid).collect()
	}

	/// Iterate over all elements, in cluster order, each medoid first
	pub fn iter(&self) -> impl Iterator<Item = &T> {
		self.clusters.iter().flat_map(|c| c.iter())
	}

	/// Find the cluster with the nearest medoid.
	///
	/// On ties, the first such cluster wins. All other clusters are left
	/// untouched, in their original order.
	///
	/// Returns the index of the chosen cluster and the dissimilarity to its medoid,
	/// or [`KMedoidsError::EmptyInput`] if there are no clusters.
	pub fn nearest_cluster<D, N>(&self, metric: &D, element: &T) -> Result<(usize, N)>
	where
		N: PartialOrd,
		D: Metric<T, N>,
	{
		let dists = self.clusters.iter().map(|c| c.distance_to(metric, element));
		find_min(dists).ok_or(KMedoidsError::EmptyInput)
	}

	/// Add an element to the nearest cluster.
	///
	/// The chosen cluster is replaced by its extended version at the same position.
	pub fn assign_element<D, N>(mut self, metric: &D, element: T) -> Result<Self>
	where
		N: PartialOrd,
		D: Metric<T, N>,
	{
		let (best, _) = self.nearest_cluster(metric, &element)?;
		let chosen = self.clusters.remove(best);
		self.clusters.insert(best, chosen.add_element(element));
		Ok(self)
	}

	/// Assign elements one at a time, in the given order.
	///
	/// Each assignment operates on the result of the previous one.
	pub fn assign_elements<D, N, I>(self, metric: &D, elements: I) -> Result<Self>
	where
		N: PartialOrd,
		D: Metric<T, N>,
		I: IntoIterator<Item = T>,
	{
		elements
			.into_iter()
			.try_fold(self, |conf, x| conf.assign_element(metric, x))
	}

	/// Total cost: the sum of the costs of all clusters.
	pub fn cost<D, N, L>(&self, metric: &D) -> L
	where
		L: AddAssign + Zero + From<N>,
		D: Metric<T, N>,
	{
		let mut sum = L::zero();
		for c in self.clusters.iter() {
			sum += c.cost::<D, N, L>(metric);
		}
		sum
	}

	/// Strip all clusters down to their medoids.
	///
	/// Returns all members (in cluster order, then member order)
	/// and the medoid-only clusters in their original order.
	pub fn deconfigure(self) -> (Vec<T>, Self) {
		let mut elements = Vec::with_capacity(self.len() - self.k());
		let mut clusters = Vec::with_capacity(self.k());
		for c in self.clusters.into_iter() {
			let (members, c) = c.decluster();
			elements.extend(members);
			clusters.push(c);
		}
		(elements, Configuration { clusters })
	}
}

impl<T: Clone> Configuration<T> {
	/// Choose the best medoid within each cluster.
	///
	/// Clusters are optimized independently of each other.
	pub fn update<D, N, L>(self, metric: &D) -> Self
	where
		L: AddAssign + Zero + PartialOrd + From<N>,
		D: Metric<T, N>,
	{
		let clusters = self
			.clusters
			.into_iter()
			.map(|c| c.update::<D, N, L>(metric))
			.collect();
		Configuration { clusters }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::util::assert_partition;

	fn sq(a: &i32, b: &i32) -> i32 {
		(a - b) * (a - b)
	}

	#[test]
	fn test_nearest_cluster() {
		let conf = Configuration::from_medoids(vec![1, 5, 9]);
		assert_eq!(conf.nearest_cluster(&sq, &4), Ok((1, 1)));
		assert_eq!(conf.nearest_cluster(&sq, &-3), Ok((0, 16)));
		// equidistant to 1 and 5, first wins
		assert_eq!(conf.nearest_cluster(&sq, &3), Ok((0, 4)));
		// equidistant to 5 and 9
		assert_eq!(conf.nearest_cluster(&sq, &7), Ok((1, 4)));
	}

	#[test]
	fn test_nearest_cluster_empty() {
		let conf = Configuration::<i32>::default();
		assert_eq!(conf.nearest_cluster(&sq, &4), Err(KMedoidsError::EmptyInput));
		let res = conf.assign_element(&sq, 4);
		assert_eq!(res, Err(KMedoidsError::EmptyInput));
	}

	#[test]
	fn test_assign_element_keeps_order() {
		let conf = Configuration::from_medoids(vec![1, 5, 9])
			.assign_element(&sq, 8)
			.unwrap();
		let medoids: Vec<i32> = conf.medoids().into_iter().cloned().collect();
		assert_eq!(medoids, vec![1, 5, 9], "cluster order changed");
		assert_eq!(conf.clusters()[2].members(), &[8]);
		assert!(conf.clusters()[0].members().is_empty());
		assert!(conf.clusters()[1].members().is_empty());
	}

	#[test]
	fn test_assign_elements() {
		let input = vec![1, 5, 9, 2, 3, 6, 7, 8, 10];
		let conf = Configuration::from_medoids(input[..3].to_vec())
			.assign_elements(&sq, input[3..].to_vec())
			.unwrap();
		assert_eq!(conf.clusters()[0].members(), &[2, 3]);
		assert_eq!(conf.clusters()[1].members(), &[6, 7]);
		assert_eq!(conf.clusters()[2].members(), &[8, 10]);
		assert_partition(&conf, &input, "assignment is not a partition");
		let cost: i64 = conf.cost(&sq);
		assert_eq!(cost, 1 + 4 + 1 + 4 + 1 + 1);
	}

	#[test]
	fn test_assign_no_elements() {
		let conf = Configuration::<i32>::default()
			.assign_elements(&sq, Vec::new())
			.unwrap();
		assert!(conf.is_empty());
		let res = Configuration::<i32>::default().assign_elements(&sq, vec![1]);
		assert_eq!(res, Err(KMedoidsError::EmptyInput));
	}

	#[test]
	fn test_deconfigure() {
		let conf = Configuration::from_medoids(vec![1, 5, 9])
			.assign_elements(&sq, vec![8, 2, 4, 10])
			.unwrap();
		let (elements, empty) = conf.deconfigure();
		assert_eq!(elements, vec![2, 4, 8, 10]);
		assert_eq!(empty, Configuration::from_medoids(vec![1, 5, 9]));
		assert_eq!(empty.len(), 3);
	}

	#[test]
	fn test_update() {
		let conf = Configuration::from_medoids(vec![1, 9])
			.assign_elements(&sq, vec![2, 3, 8, 7, 10, 11])
			.unwrap();
		let before: i64 = conf.cost(&sq);
		let conf = conf.update::<_, _, i64>(&sq);
		let after: i64 = conf.cost(&sq);
		let medoids: Vec<i32> = conf.medoids().into_iter().cloned().collect();
		assert_eq!(medoids, vec![2, 9], "medoids not as expected");
		assert_eq!(before, 1 + 4 + 1 + 4 + 1 + 4);
		assert_eq!(after, 1 + 1 + 1 + 4 + 1 + 4);
		assert_eq!(conf.len(), 8);
	}
}

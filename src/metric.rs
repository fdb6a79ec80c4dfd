//! Dissimilarity functions between elements.
//!
//! Any closure `Fn(&T, &T) -> N` is a [`Metric`]. Precomputed dissimilarity
//! matrices (`ndarray::Array2`, or a serialized lower triangular matrix in a `Vec`)
//! can be used through [`MatrixMetric`], with element indexes as elements.

/// A pairwise dissimilarity between two elements.
///
/// The function must be deterministic and total. Neither symmetry nor the
/// triangle inequality is required, but results are more meaningful for a true distance.
pub trait Metric<T: ?Sized, N> {
	/// Dissimilarity of `b` as seen from `a` (`a` is the medoid when clustering)
	fn dissimilarity(&self, a: &T, b: &T) -> N;
}

impl<T: ?Sized, N, F> Metric<T, N> for F
where
	F: Fn(&T, &T) -> N,
{
	#[inline]
	fn dissimilarity(&self, a: &T, b: &T) -> N {
		self(a, b)
	}
}

/// Adapter trait for accessing different types of dissimilarity matrixes
#[allow(clippy::len_without_is_empty)]
pub trait ArrayAdapter<N: Copy> {
	/// Number of objects in the matrix
	fn len(&self) -> usize;
	/// Verify that it is a square matrix
	fn is_square(&self) -> bool;
	/// Get the contents at cell x,y
	fn get(&self, x: usize, y: usize) -> N;
}

/// Adapter for using `ndarray::Array2`
#[cfg(feature = "ndarray")]
impl<N: Copy> ArrayAdapter<N> for ndarray::Array2<N> {
	#[inline]
	fn len(&self) -> usize {
		self.shape()[0]
	}
	#[inline]
	fn is_square(&self) -> bool {
		self.shape()[0] == self.shape()[1]
	}
	#[inline]
	fn get(&self, x: usize, y: usize) -> N {
		self[[x, y]]
	}
}

/// Lower triangular matrix in serial form (without diagonal)
///
/// The diagonal is implicitly zero, and the matrix is symmetric.
#[derive(Debug, Clone)]
pub struct LowerTriangle<N> {
	/// Matrix size
	pub n: usize,
	// Matrix data, lower triangular form without diagonal
	pub data: Vec<N>,
}

impl<N: Copy + num_traits::Zero> ArrayAdapter<N> for LowerTriangle<N> {
	#[inline]
	fn len(&self) -> usize {
		self.n
	}
	#[inline]
	fn is_square(&self) -> bool {
		self.n == 0 || self.data.len() == (self.n * (self.n - 1)) >> 1
	}
	#[inline]
	fn get(&self, x: usize, y: usize) -> N {
		match x.cmp(&y) {
			std::cmp::Ordering::Less => self.data[((y * (y - 1)) >> 1) + x],
			std::cmp::Ordering::Greater => self.data[((x * (x - 1)) >> 1) + y],
			std::cmp::Ordering::Equal => N::zero(),
		}
	}
}

/// Use a dissimilarity matrix as a [`Metric`] over object indexes.
///
/// Clustering then operates on `usize` elements, usually `0..mat.len()`.
///
/// ## Example
/// ```
/// use kmedoids_generic::{kmedoids, LowerTriangle, MatrixMetric};
/// let mat = LowerTriangle { n: 4, data: vec![1, 2, 3, 4, 5, 6] };
/// let metric = MatrixMetric::new(&mat);
/// let (loss, conf, _): (i64, _, _) = kmedoids(2, &metric, (0..4).collect(), 100).unwrap();
/// println!("Loss is {} with medoids {:?}", loss, conf.medoids());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MatrixMetric<'a, M> {
	mat: &'a M,
}

impl<'a, M> MatrixMetric<'a, M> {
	/// Wrap a dissimilarity matrix
	pub fn new(mat: &'a M) -> Self {
		MatrixMetric { mat }
	}
}

impl<'a, M, N> Metric<usize, N> for MatrixMetric<'a, M>
where
	N: Copy,
	M: ArrayAdapter<N>,
{
	#[inline]
	fn dissimilarity(&self, a: &usize, b: &usize) -> N {
		self.mat.get(*a, *b)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_closure_metric() {
		let metric = |a: &i32, b: &i32| (a - b) * (a - b);
		assert_eq!(metric.dissimilarity(&3, &1), 4);
		assert_eq!(metric.dissimilarity(&3, &9), 36);
	}

	#[test]
	fn test_lower_triangle() {
		let data = LowerTriangle {
			n: 4,
			data: vec![1, 2, 3, 4, 5, 6],
		};
		assert!(data.is_square());
		assert_eq!(data.get(0, 0), 0);
		assert_eq!(data.get(1, 0), 1);
		assert_eq!(data.get(0, 1), 1);
		assert_eq!(data.get(3, 2), 6);
		assert_eq!(data.get(2, 3), 6);
		let metric = MatrixMetric::new(&data);
		assert_eq!(metric.dissimilarity(&2, &1), 3);
	}

	#[test]
	fn test_ndarray_metric() {
		let data = ndarray::arr2(&[[0, 1, 2], [1, 0, 4], [2, 4, 0]]);
		assert!(data.is_square());
		let metric = MatrixMetric::new(&data);
		assert_eq!(metric.dissimilarity(&1, &2), 4);
		assert_eq!(metric.dissimilarity(&2, &0), 2);
	}
}

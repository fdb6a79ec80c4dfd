use crate::configuration::Configuration;
use crate::metric::Metric;
use core::ops::{AddAssign, Div, Sub};
use num_traits::{Signed, Zero};
use std::convert::From;

/// Compute the Silhouette of a configuration.
///
/// The Silhouette, proposed by Peter Rousseeuw in 1987, is a popular internal
/// evaluation measure for clusterings. Although it is defined on arbitary metrics,
/// it is most appropriate for evaluating "spherical" clusters, as it expects objects
/// to be closer to all members of its own cluster than to members of other clusters.
///
/// This needs O(n²) dissimilarity computations.
///
/// * type `T` - element type
/// * type `N` - number data type returned by the metric, such as `u32` or `f64`
/// * type `L` - number data type such as `f64` for the cost (use a float type)
/// * `metric` - the dissimilarity function
/// * `conf` - the clustering to evaluate
/// * `samples` - whether to keep the individual samples, or not
///
/// returns a tuple containing:
/// * the average silhouette
/// * the individual silhouette values (empty if `samples = false`), in the order of
///   [`Configuration::iter`]
///
/// ## Example
/// ```
/// let metric = |a: &f64, b: &f64| (a - b).abs();
/// let data = vec![1.0, 10.0, 1.5, 11.0, 0.5, 12.0];
/// let (_, conf, _): (f64, _, _) = kmedoids_generic::kmedoids(2, &metric, data, 100).unwrap();
/// let (sil, _): (f64, _) = kmedoids_generic::silhouette(&metric, &conf, false);
/// println!("Silhouette is: {}", sil);
/// ```
pub fn silhouette<T, D, N, L>(metric: &D, conf: &Configuration<T>, samples: bool) -> (L, Vec<L>)
where
	L: AddAssign
		+ Div<Output = L>
		+ Sub<Output = L>
		+ Signed
		+ Zero
		+ PartialOrd
		+ Clone
		+ From<N>
		+ From<u32>,
	D: Metric<T, N>,
{
	let k = conf.k();
	let items: Vec<(usize, &T)> = conf
		.clusters()
		.iter()
		.enumerate()
		.flat_map(|(c, cluster)| cluster.iter().map(move |x| (c, x)))
		.collect();
	let mut sil = vec![L::zero(); if samples { items.len() } else { 0 }];
	if k < 2 {
		return (L::zero(), sil);
	}
	let mut lsum: L = L::zero();
	let mut buf = vec![(0u32, L::zero()); k];
	for (i, &(ci, xi)) in items.iter().enumerate() {
		for b in buf.iter_mut() {
			*b = (0, L::zero());
		}
		for (j, &(cj, xj)) in items.iter().enumerate() {
			if i != j {
				buf[cj].0 += 1;
				buf[cj].1 += L::from(metric.dissimilarity(xi, xj));
			}
		}
		let s = if buf[ci].0 > 0 {
			let a = checked_div(buf[ci].1.clone(), buf[ci].0.into());
			let b = buf
				.iter()
				.enumerate()
				.filter(|&(c, _)| c != ci)
				.map(|(_, p)| checked_div(p.1.clone(), p.0.into()))
				.fold(None, |m: Option<L>, y| match m {
					Some(x) if x <= y => Some(x),
					_ => Some(y),
				})
				.unwrap_or_else(L::zero);
			checked_div(b.clone() - a.clone(), if a > b { a } else { b })
		} else {
			L::zero() // singleton
		};
		if samples {
			sil[i] = s.clone();
		}
		lsum += s;
	}
	(lsum.div((items.len() as u32).into()), sil)
}

/// Compute the Medoid Silhouette of a configuration.
///
/// The Medoid Silhouette is an approximation to the original Silhouette where the
/// distance to the cluster medoid is used instead of the average distance, hence reducing
/// the run time from O(N²) to O(Nk). Every object is compared to the nearest and
/// second nearest medoid, regardless of the cluster it is contained in.
///
/// * type `T` - element type
/// * type `N` - number data type returned by the metric, such as `u32` or `f64`
/// * type `L` - number data type such as `f64` for the cost (use a float type)
/// * `metric` - the dissimilarity function
/// * `conf` - the clustering to evaluate
/// * `samples` - whether to keep the individual samples, or not
///
/// returns a tuple containing:
/// * the average medoid silhouette
/// * the individual medoid silhouette values (empty if `samples = false`), in the order of
///   [`Configuration::iter`]
pub fn medoid_silhouette<T, D, N, L>(metric: &D, conf: &Configuration<T>, samples: bool) -> (L, Vec<L>)
where
	N: Zero + PartialOrd + Clone,
	L: AddAssign
		+ Div<Output = L>
		+ Sub<Output = L>
		+ Signed
		+ Zero
		+ PartialOrd
		+ Clone
		+ From<N>
		+ From<u32>,
	D: Metric<T, N>,
{
	let n = conf.len();
	let meds = conf.medoids();
	let mut sil = vec![L::one(); if samples { n } else { 0 }];
	match meds.len() {
		0 => return (L::zero(), sil),
		1 => return (L::one(), sil), // not really well-defined
		_ => {}
	}
	let mut loss = L::zero();
	for (i, x) in conf.iter().enumerate() {
		let (d1, d2) = (metric.dissimilarity(meds[0], x), metric.dissimilarity(meds[1], x));
		let mut best = if d1 < d2 { (d1, d2) } else { (d2, d1) };
		for &m in meds.iter().skip(2) {
			let d = metric.dissimilarity(m, x);
			if d < best.0 {
				best = (d, best.0);
			} else if d < best.1 {
				best = (best.0, d);
			}
		}
		if !N::is_zero(&best.0) {
			let s = checked_div(L::from(best.0), L::from(best.1));
			if samples {
				sil[i] = L::one() - s.clone();
			}
			loss += s;
		}
	}
	loss = L::one() - loss / <L as From<u32>>::from(n as u32);
	(loss, sil)
}

// helper function, returns 0 on division by 0
pub(crate) fn checked_div<L>(x: L, y: L) -> L
where
	L: Div<Output = L> + Zero + Clone + PartialOrd,
{
	if y > L::zero() {
		x.div(y)
	} else {
		L::zero()
	}
}

#[cfg(test)]
mod tests {
	use crate::{medoid_silhouette, silhouette, Cluster, Configuration, LowerTriangle, MatrixMetric};

	fn abs(a: &f64, b: &f64) -> f64 {
		(a - b).abs()
	}

	fn assert_close(a: f64, b: f64, msg: &'static str) {
		assert!((a - b).abs() < 1e-12, "{}: {} vs. {}", msg, a, b);
	}

	#[test]
	fn test_silhouette() {
		let data = LowerTriangle {
			n: 5,
			data: vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 1],
		};
		let metric = MatrixMetric::new(&data);
		let conf = Configuration::from(vec![
			Cluster::new(0).add_element(1).add_element(2),
			Cluster::new(3).add_element(4),
		]);
		let (sil, samples): (f64, _) = silhouette(&metric, &conf, true);
		assert_close(sil, 0.7522494172494172, "Silhouette not as expected");
		assert_eq!(samples.len(), 5);
		let mean = samples.iter().sum::<f64>() / 5.;
		assert_close(mean, sil, "samples do not average to the Silhouette");
	}

	#[test]
	fn test_silhouette_singleton() {
		let conf = Configuration::from(vec![
			Cluster::new(0.0).add_element(1.0),
			Cluster::new(10.0),
		]);
		let (_, samples): (f64, _) = silhouette(&abs, &conf, true);
		assert_close(samples[0], (10. - 1.) / 10., "first sample");
		assert_close(samples[1], (9. - 1.) / 9., "second sample");
		assert_eq!(samples[2], 0., "singleton must be zero");
	}

	#[test]
	fn test_single_cluster() {
		let conf = Configuration::from(vec![Cluster::new(0.0).add_element(1.0).add_element(2.0)]);
		let (sil, _): (f64, _) = silhouette(&abs, &conf, false);
		assert_eq!(sil, 0.);
		let (msil, samples): (f64, _) = medoid_silhouette(&abs, &conf, true);
		assert_eq!(msil, 1.);
		assert_eq!(samples, vec![1.; 3]);
	}

	#[test]
	fn test_medoid_silhouette() {
		let conf = Configuration::from_medoids(vec![0.0, 10.0])
			.assign_elements(&abs, vec![1.0, 9.0])
			.unwrap();
		let (msil, samples): (f64, _) = medoid_silhouette(&abs, &conf, true);
		assert_close(msil, 1. - 1. / 18., "Medoid Silhouette not as expected");
		assert_eq!(samples[0], 1.);
		assert_close(samples[1], 1. - 1. / 9., "member sample");
		assert_eq!(samples[2], 1.);
	}

	#[test]
	fn test_empty() {
		let conf = Configuration::<f64>::default();
		let (sil, samples): (f64, _) = silhouette(&abs, &conf, true);
		assert_eq!(sil, 0.);
		assert!(samples.is_empty());
		let (msil, _): (f64, _) = medoid_silhouette(&abs, &conf, false);
		assert_eq!(msil, 0.);
	}
}

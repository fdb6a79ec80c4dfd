//! k-Medoids Clustering of arbitrary elements by greedy local search
//!
//! Elements are partitioned into k clusters, each represented by one of its own
//! members, the medoid. The only requirement on the data is a pairwise dissimilarity
//! function (the [`Metric`]): any closure `Fn(&T, &T) -> N` will do, and a
//! precomputed dissimilarity matrix can be used via [`MatrixMetric`].
//! Neither symmetry nor the triangle inequality are required.
//!
//! The algorithm alternates between assigning every element to its nearest medoid,
//! and choosing the best medoid within each cluster. It stops at the first iteration
//! that does not strictly decrease the total cost, hence only a local optimum is found.
//! Ties are always resolved to the earliest candidate: the first nearest cluster,
//! and the current medoid if no other element is strictly better.
//!
//! By default, the first k elements are used as initial medoids. Because this can
//! give poor results on sorted data, [`random_initialization`] and
//! [`build_initialization`] can be used with [`kmedoids_with_medoids`] instead.
//!
//! ## Example
//!
//! ```
//! let metric = |a: &i32, b: &i32| (a - b) * (a - b);
//! let data = vec![1, 4, 7, 2, 5, 8, 3, 6, 9];
//! let (loss, conf, n_iter): (i64, _, _) = kmedoids_generic::kmedoids(3, &metric, data, 100).unwrap();
//! println!("Loss is {} after {} iterations", loss, n_iter);
//! for cluster in conf.clusters() {
//! 	let cost: i64 = cluster.cost(&metric);
//! 	println!("{} {:?} (cost {})", cluster.medoid(), cluster.members(), cost);
//! }
//! ```
mod cluster;
mod configuration;
mod error;
mod initialization;
mod localsearch;
pub mod metric;
mod silhouette;
mod util;

pub use crate::cluster::Cluster;
pub use crate::configuration::Configuration;
pub use crate::error::{KMedoidsError, Result};
pub use crate::initialization::*;
pub use crate::localsearch::*;
pub use crate::metric::{ArrayAdapter, LowerTriangle, MatrixMetric, Metric};
pub use crate::silhouette::*;

//! Distance matrices for route solving.
//!
//! Provides the dense integer distance matrix built over the routing node
//! list (depot + centroids).

mod matrix;

pub use matrix::DistanceMatrix;

//! Volume calculation over facility nodes
//!
//! A room returns its stored volume, a level the sum over its rooms, and a
//! building the sum of its per-level sums. Empty lists contribute zero. The
//! calculation is independent of any traversal or report machinery.

/// Anything in the hierarchy that has a total volume
pub trait Volume {
    /// Total volume represented by this node and everything beneath it
    fn volume(&self) -> f64;
}

/// Sum a sequence of volumes
///
/// The sum starts from `+0.0`, so an empty sequence totals `0.0` rather than
/// the `-0.0` that `Iterator::sum` gives for `f64`.
pub fn sum_volumes<I: IntoIterator<Item = f64>>(volumes: I) -> f64 {
    volumes.into_iter().fold(0.0, |total, v| total + v)
}

/// Compute the total volume of any node kind
pub fn calculate_volume<T: Volume + ?Sized>(node: &T) -> f64 {
    node.volume()
}

//! Ready-made weighted descriptor.

use super::types::Weighted;

/// A named, weighted wrapper around an arbitrary payload.
///
/// Use this when the pooled resource does not implement [`Weighted`]
/// itself. The payload is usually a cheap handle (an `Arc`, an address,
/// an index) since the scheduler hands out clones on selection.
///
/// # Examples
///
/// ```
/// use u_balance::swrr::{SmoothWeightedRoundRobin, WeightedNode};
///
/// let pool = SmoothWeightedRoundRobin::new([
///     WeightedNode::new("a", 1, "10.0.0.1:80"),
///     WeightedNode::new("b", 2, "10.0.0.2:80"),
/// ]);
///
/// let picked = pool.select().unwrap();
/// assert_eq!(picked.name(), "b");
/// assert_eq!(*picked.value(), "10.0.0.2:80");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedNode<V> {
    name: String,
    weight: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    current_weight: i64,
    value: V,
}

impl<V> WeightedNode<V> {
    /// Creates a node with a zero current weight.
    pub fn new(name: impl Into<String>, weight: i64, value: V) -> Self {
        Self {
            name: name.into(),
            weight,
            current_weight: 0,
            value,
        }
    }

    /// Sets the starting current weight.
    pub fn with_current_weight(mut self, weight: i64) -> Self {
        self.current_weight = weight;
        self
    }

    /// Returns the node's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the static weight.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Returns the current-weight accumulator as of when this copy was taken.
    pub fn current_weight(&self) -> i64 {
        self.current_weight
    }

    /// Returns the payload.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the node and returns the payload.
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V> Weighted for WeightedNode<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> i64 {
        self.weight
    }

    fn current_weight(&self) -> i64 {
        self.current_weight
    }

    fn set_current_weight(&mut self, weight: i64) {
        self.current_weight = weight;
    }
}

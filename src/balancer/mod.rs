//! Selection-policy abstraction.
//!
//! [`Balancer`] is the contract a dispatcher codes against. Any policy
//! that can pick, admit, and evict candidates fits behind it, so the
//! concrete scheduler can be swapped without touching callers.

/// A load-balancing policy over candidates of type `T`.
///
/// All methods take `&self`; implementations synchronise internally so
/// a balancer can be shared across threads behind an `Arc`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_balance::balancer::Balancer;
/// use u_balance::swrr::{SmoothWeightedRoundRobin, WeightedNode};
///
/// fn dispatch(balancer: &dyn Balancer<WeightedNode<u16>>) -> Option<u16> {
///     balancer.select().map(|node| *node.value())
/// }
///
/// let balancer: Arc<dyn Balancer<WeightedNode<u16>>> =
///     Arc::new(SmoothWeightedRoundRobin::new([WeightedNode::new("api", 1, 8080)]));
/// assert_eq!(dispatch(balancer.as_ref()), Some(8080));
///
/// balancer.remove("api");
/// assert_eq!(dispatch(balancer.as_ref()), None);
/// ```
pub trait Balancer<T>: Send + Sync {
    /// Picks the next candidate.
    ///
    /// Returns `None` when there is nothing to pick. An empty pool is a
    /// normal outcome, not an error.
    fn select(&self) -> Option<T>;

    /// Admits a candidate. Ineligible candidates are silently ignored.
    fn add(&self, candidate: T);

    /// Evicts the first candidate named `name`. No-op if there is none.
    fn remove(&self, name: &str);
}

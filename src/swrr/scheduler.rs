//! SWRR scheduler.

use super::config::SwrrConfig;
use super::types::{is_eligible, Weighted};
use crate::balancer::Balancer;
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

/// Smooth weighted round-robin scheduler.
///
/// Each call to [`select`](Self::select) adds every member's weight to its
/// current weight, picks the member with the strictly greatest current
/// weight (earliest member on ties), and subtracts the pool's total weight
/// from the winner. Over any `W` consecutive selections, where `W` is the
/// sum of all weights, each member is chosen exactly `weight` times, and
/// heavier members are interleaved with lighter ones rather than bunched.
///
/// One mutex guards the whole pool. Selection mutates every member, so
/// `select`, `add`, and `remove` all take it exclusively; each holds it for
/// one linear pass over the pool.
///
/// # Examples
///
/// ```
/// use u_balance::swrr::{SmoothWeightedRoundRobin, WeightedNode};
///
/// let pool = SmoothWeightedRoundRobin::new([
///     WeightedNode::new("A", 1, ()),
///     WeightedNode::new("B", 2, ()),
///     WeightedNode::new("C", 3, ()),
/// ]);
///
/// let picks: Vec<String> = (0..6)
///     .filter_map(|_| pool.select())
///     .map(|node| node.name().to_string())
///     .collect();
/// assert_eq!(picks, ["C", "B", "A", "C", "B", "C"]);
/// ```
///
/// # References
///
/// Nginx upstream smooth weighted round-robin (`ngx_http_upstream_round_robin.c`, 2012)
#[derive(Debug)]
pub struct SmoothWeightedRoundRobin<T> {
    pool: Mutex<Vec<T>>,
    config: SwrrConfig,
}

impl<T: Weighted> SmoothWeightedRoundRobin<T> {
    /// Creates a scheduler from an initial candidate set.
    ///
    /// Candidates with a non-positive weight (or a null representation)
    /// are dropped; the rest keep their input order.
    pub fn new<I: IntoIterator<Item = T>>(candidates: I) -> Self {
        Self::with_config(candidates, SwrrConfig::default())
    }

    /// Creates a scheduler with an explicit configuration.
    ///
    /// An invalid configuration is replaced by [`SwrrConfig::default`].
    pub fn with_config<I: IntoIterator<Item = T>>(candidates: I, config: SwrrConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(reason) => {
                warn!(%reason, "invalid SwrrConfig, falling back to defaults");
                SwrrConfig::default()
            }
        };

        let mut pool = Vec::new();
        if let Err(err) = pool.try_reserve(config.initial_capacity) {
            warn!(
                initial_capacity = config.initial_capacity,
                error = %err,
                "could not reserve pool capacity, growing on demand"
            );
        }
        let mut total = 0i64;
        for candidate in candidates {
            if admits(&config, total, &candidate) {
                total += candidate.weight();
                pool.push(candidate);
            } else {
                debug!(
                    name = candidate.name(),
                    weight = candidate.weight(),
                    "skipping ineligible candidate"
                );
            }
        }

        Self {
            pool: Mutex::new(pool),
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SwrrConfig {
        &self.config
    }

    /// Runs one selection round and hands the winner to `f`.
    ///
    /// `f` runs while the pool lock is held and must not call back into
    /// this scheduler. Returns `None` when the pool is empty.
    pub fn select_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        let mut pool = self.pool.lock();
        let (idx, total) = next_index(&mut pool)?;
        let chosen = &pool[idx];
        trace!(name = chosen.name(), total, "selected candidate");
        Some(f(chosen))
    }

    /// Appends a candidate to the end of the pool.
    ///
    /// Null candidates, candidates with a non-positive weight, and
    /// candidates that would push the total weight past
    /// [`SwrrConfig::max_total_weight`] are silently ignored.
    pub fn add(&self, candidate: T) {
        if !is_eligible(&candidate) {
            debug!(
                name = candidate.name(),
                weight = candidate.weight(),
                "rejected ineligible candidate"
            );
            return;
        }

        let mut pool = self.pool.lock();
        if !admits(&self.config, total_weight(&pool), &candidate) {
            debug!(
                name = candidate.name(),
                weight = candidate.weight(),
                max_total_weight = self.config.max_total_weight,
                "rejected candidate over weight bound"
            );
            return;
        }

        debug!(
            name = candidate.name(),
            weight = candidate.weight(),
            "added candidate"
        );
        pool.push(candidate);
        if self.config.reset_on_membership_change {
            reset_all(&mut pool);
        }
    }

    /// Removes the first member named `name`. No-op if there is none.
    pub fn remove(&self, name: &str) {
        self.take(name);
    }

    /// Removes the first member named `name` and returns it.
    ///
    /// Later members keep their relative order.
    pub fn take(&self, name: &str) -> Option<T> {
        let mut pool = self.pool.lock();
        let Some(idx) = pool.iter().position(|m| m.name() == name) else {
            debug!(name, "no candidate to remove");
            return None;
        };

        let removed = pool.remove(idx);
        debug!(name, remaining = pool.len(), "removed candidate");
        if self.config.reset_on_membership_change {
            reset_all(&mut pool);
        }
        Some(removed)
    }

    /// Zeroes every member's current weight.
    pub fn reset(&self) {
        let mut pool = self.pool.lock();
        reset_all(&mut pool);
        debug!(members = pool.len(), "reset current weights");
    }

    /// Number of members in the pool.
    pub fn len(&self) -> usize {
        self.pool.lock().len()
    }

    /// Returns `true` if the pool has no members.
    pub fn is_empty(&self) -> bool {
        self.pool.lock().is_empty()
    }

    /// Sum of all member weights.
    pub fn total_weight(&self) -> i64 {
        total_weight(&self.pool.lock())
    }

    /// Returns `true` if a member named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.pool.lock().iter().any(|m| m.name() == name)
    }

    /// Member names in pool order.
    pub fn names(&self) -> Vec<String> {
        self.pool.lock().iter().map(|m| m.name().to_string()).collect()
    }

    /// `(name, current_weight)` for every member, in pool order.
    pub fn current_weights(&self) -> Vec<(String, i64)> {
        self.pool
            .lock()
            .iter()
            .map(|m| (m.name().to_string(), m.current_weight()))
            .collect()
    }
}

impl<T: Weighted + Clone> SmoothWeightedRoundRobin<T> {
    /// Picks the next candidate.
    ///
    /// Returns a clone of the chosen member, or `None` when the pool is
    /// empty.
    pub fn select(&self) -> Option<T> {
        self.select_with(T::clone)
    }
}

impl<T: Weighted> Default for SmoothWeightedRoundRobin<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Weighted> FromIterator<T> for SmoothWeightedRoundRobin<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> Balancer<T> for SmoothWeightedRoundRobin<T>
where
    T: Weighted + Clone + Send,
{
    fn select(&self) -> Option<T> {
        SmoothWeightedRoundRobin::select(self)
    }

    fn add(&self, candidate: T) {
        SmoothWeightedRoundRobin::add(self, candidate);
    }

    fn remove(&self, name: &str) {
        SmoothWeightedRoundRobin::remove(self, name);
    }
}

/// One SWRR round over the pool; returns the winner's index and the
/// total weight it was charged.
fn next_index<T: Weighted>(pool: &mut [T]) -> Option<(usize, i64)> {
    if pool.is_empty() {
        return None;
    }

    let total = total_weight(pool);
    let mut best = 0usize;
    let mut best_weight = i64::MIN;

    for (i, member) in pool.iter_mut().enumerate() {
        let current = member.current_weight().saturating_add(member.weight());
        member.set_current_weight(current);

        // Strict comparison: ties keep the earlier member.
        if i == 0 || current > best_weight {
            best = i;
            best_weight = current;
        }
    }

    pool[best].set_current_weight(best_weight.saturating_sub(total));
    Some((best, total))
}

fn total_weight<T: Weighted>(pool: &[T]) -> i64 {
    pool.iter().map(|m| m.weight()).sum()
}

fn reset_all<T: Weighted>(pool: &mut [T]) {
    for member in pool.iter_mut() {
        member.set_current_weight(0);
    }
}

fn admits<T: Weighted>(config: &SwrrConfig, total: i64, candidate: &T) -> bool {
    is_eligible(candidate) && candidate.weight() <= config.max_total_weight - total
}

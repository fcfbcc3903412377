//! Core trait for weighted candidates.
//!
//! [`Weighted`] is the contract between the generic scheduler and whatever
//! a pool member actually represents (a server, a worker, a backend).

/// A candidate that can be placed in a weighted pool.
///
/// The scheduler owns every registered candidate behind a single lock and
/// is the only writer of the current-weight accumulator, so
/// [`set_current_weight`](Weighted::set_current_weight) takes `&mut self`
/// and needs no interior mutability.
///
/// Accessors are called while the scheduler's lock is held. They must be
/// cheap and must not block or call back into the scheduler.
///
/// # Examples
///
/// ```
/// use u_balance::swrr::Weighted;
///
/// struct Backend {
///     host: String,
///     weight: i64,
///     current: i64,
/// }
///
/// impl Weighted for Backend {
///     fn name(&self) -> &str { &self.host }
///     fn weight(&self) -> i64 { self.weight }
///     fn current_weight(&self) -> i64 { self.current }
///     fn set_current_weight(&mut self, weight: i64) { self.current = weight; }
/// }
/// ```
pub trait Weighted {
    /// Stable identity used for removal lookup.
    fn name(&self) -> &str;

    /// Static weight, fixed for the candidate's lifetime in the pool.
    ///
    /// Candidates with a weight of zero or less are never registered.
    fn weight(&self) -> i64;

    /// Returns the current-weight accumulator.
    fn current_weight(&self) -> i64;

    /// Overwrites the current-weight accumulator.
    fn set_current_weight(&mut self, weight: i64);

    /// Returns `true` if this value is the type's empty representation.
    ///
    /// Null candidates are rejected by `add`. The default is `false`; types
    /// with a natural null state (see the `Option` impl) override it.
    fn is_null(&self) -> bool {
        false
    }
}

/// `None` is a null candidate with zero weight.
impl<W: Weighted> Weighted for Option<W> {
    fn name(&self) -> &str {
        self.as_ref().map_or("", |w| w.name())
    }

    fn weight(&self) -> i64 {
        self.as_ref().map_or(0, |w| w.weight())
    }

    fn current_weight(&self) -> i64 {
        self.as_ref().map_or(0, |w| w.current_weight())
    }

    fn set_current_weight(&mut self, weight: i64) {
        if let Some(inner) = self {
            inner.set_current_weight(weight);
        }
    }

    fn is_null(&self) -> bool {
        self.as_ref().is_none_or(|w| w.is_null())
    }
}

/// Returns `true` if the candidate may enter a pool.
pub(crate) fn is_eligible<W: Weighted>(candidate: &W) -> bool {
    !candidate.is_null() && candidate.weight() > 0
}

//! Destroy hook for registry values.

use std::sync::Arc;

/// Boxed error returned by a destroy hook.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Teardown run when a value leaves an [`InstanceRegistry`](super::InstanceRegistry).
///
/// The default implementation does nothing, so plain values opt in with an
/// empty `impl`. Types owning real resources (connections, file handles,
/// worker threads) override [`destroy`](Destroy::destroy).
///
/// # Examples
///
/// ```
/// use u_balance::registry::{BoxError, Destroy};
///
/// struct Pool;
/// impl Destroy for Pool {}
///
/// struct Conn { open: std::sync::atomic::AtomicBool }
/// impl Destroy for Conn {
///     fn destroy(&self) -> Result<(), BoxError> {
///         self.open.store(false, std::sync::atomic::Ordering::SeqCst);
///         Ok(())
///     }
/// }
/// ```
pub trait Destroy {
    /// Releases whatever the value holds.
    fn destroy(&self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<D: Destroy + ?Sized> Destroy for Arc<D> {
    fn destroy(&self) -> Result<(), BoxError> {
        (**self).destroy()
    }
}

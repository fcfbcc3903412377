//! Keyed instance registry.
//!
//! Holds named, shared resources (connection pools, clients, backends)
//! that a dispatcher looks up by alias. Replacing or removing an entry
//! runs the value's [`Destroy`] hook.
//!
//! The registry is independent of the schedulers in this crate. A caller
//! may keep weighted resources here and register handles to them with a
//! [`Balancer`](crate::balancer::Balancer), but neither depends on the other.

mod error;
mod manager;
mod types;

pub use error::RegistryError;
pub use manager::InstanceRegistry;
pub use types::{BoxError, Destroy};

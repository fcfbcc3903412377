//! Domain-agnostic weighted candidate selection.
//!
//! Provides building blocks for spreading requests across a weighted pool
//! of resources (servers, workers, backends):
//!
//! - **Balancer**: The selection-policy contract (select, add, remove) a
//!   dispatcher codes against.
//! - **Smooth Weighted Round Robin (SWRR)**: Picks each member exactly
//!   `weight` times per cycle of total weight, interleaving heavy members
//!   with light ones instead of issuing them in bursts.
//! - **Registry**: Alias-keyed storage for the shared resources behind the
//!   candidates, with teardown hooks on replace and remove.
//!
//! # Architecture
//!
//! Everything here is synchronous and in-process. There is no transport,
//! health checking, or discovery; those belong to the dispatcher that
//! embeds these primitives.

pub mod balancer;
pub mod registry;
pub mod swrr;

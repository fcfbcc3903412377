//! Smooth Weighted Round Robin (SWRR).
//!
//! Distributes selections across a weighted pool so that, over a cycle of
//! `W` picks (`W` = total weight), each member is chosen exactly as many
//! times as its weight, with heavy members interleaved among light ones.
//!
//! # Core Traits
//!
//! - [`Weighted`]: What a pool member must expose (name, weight, current weight)
//!
//! # Key Types
//!
//! - [`SmoothWeightedRoundRobin`]: The scheduler; one lock over the whole pool
//! - [`WeightedNode`]: Ready-made descriptor wrapping any payload
//! - [`SwrrConfig`]: Pool bookkeeping options
//!
//! # References
//!
//! - Nginx upstream round-robin module, smooth weighting (Dounin, 2012)

mod config;
mod node;
mod scheduler;
mod types;

pub use config::SwrrConfig;
pub use node::WeightedNode;
pub use scheduler::SmoothWeightedRoundRobin;
pub use types::Weighted;

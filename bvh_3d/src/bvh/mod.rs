//! Bounding volume hierarchy module
//!
//! Provides the dynamic BVH, its configuration, and tree statistics.

mod bvh;
mod config;
mod node;
mod stats;

pub use bvh::Bvh;
pub use config::{BvhConfig, MAX_NODES};
pub use node::Aggregate;
pub use stats::BvhStats;

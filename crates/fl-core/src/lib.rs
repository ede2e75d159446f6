//! `fl-core`: foundational types for the `force_layout` simulator.
//!
//! This crate is a dependency of every other `fl-*` crate.  It has no `fl-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeIndex`                                           |
//! | [`node`]        | `Node` record, `Axis`                                 |
//! | [`dims`]        | `Dimensions` (active axis count, clamped to 1..=3)    |
//! | [`config`]      | `SimConfig`: cooling schedule and damping parameters |
//! | [`rng`]         | `SimRng`: seeded random source handed to forces      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod dims;
pub mod error;
pub mod ids;
pub mod node;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use dims::Dimensions;
pub use error::{CoreError, CoreResult};
pub use ids::NodeIndex;
pub use node::{Axis, Node};
pub use rng::SimRng;

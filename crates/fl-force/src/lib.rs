//! `fl-force`: the force plugin contract.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`force`]    | `Force` trait, `from_fn` closure adapter                      |
//! | [`registry`] | `ForceRegistry`: name → force map in stable insertion order  |
//! | [`noop`]     | `NoopForce`: placeholder that never touches a node           |
//! | [`error`]    | `ForceError`, `ForceResult<T>`                                |
//!
//! # Design notes
//!
//! A force only ever writes velocities.  Each tick the simulation calls
//! every registered force's `apply` in registry order, then integrates
//! positions once.  Because positions are integrated after *all* forces
//! have run, contributions from several forces to the same node add up
//! before damping is applied.
//!
//! Concrete physics (repulsion, springs, centering, collision) live
//! outside this crate; this crate only fixes how they are invoked.

pub mod error;
pub mod force;
pub mod noop;
pub mod registry;

#[cfg(test)]
mod tests;

pub use error::{ForceError, ForceResult};
pub use force::{FnForce, Force, from_fn};
pub use noop::NoopForce;
pub use registry::{ErasedForce, ForceRegistry};

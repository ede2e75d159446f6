//! Node initialization and deterministic seeding.
//!
//! # Seeding
//!
//! A node with no usable position is placed on a spiral determined only by
//! its index `i`, so un-positioned nodes never start coincident and a given
//! input order always yields the same starting layout:
//!
//! ```text
//! radius = 10 * { i        (1D)
//!               { sqrt(i)  (2D)
//!               { cbrt(i)  (3D)
//! roll   = i * π(3 − √5)          (golden angle)
//! yaw    = i * 20π / (9 + √221)   (Markov angle)
//!
//! 1D: x = radius
//! 2D: x = radius·cos(roll), y = radius·sin(roll)
//! 3D: x = radius·sin(roll)·cos(yaw), y = radius·cos(roll), z = radius·sin(roll)·sin(yaw)
//! ```

use std::f64::consts::PI;

use log::debug;

use fl_core::{Dimensions, Node, NodeIndex};

/// Radius scale of the seeding spiral.
pub const INITIAL_RADIUS: f64 = 10.0;

/// `π(3 − √5)`.
#[inline]
pub fn golden_angle() -> f64 {
    PI * (3.0 - 5f64.sqrt())
}

/// `20π / (9 + √221)`.
#[inline]
pub fn markov_angle() -> f64 {
    PI * 20.0 / (9.0 + 221f64.sqrt())
}

/// Seeded position of the node at index `i`.  Inactive axes are 0.
pub fn seed_position(i: usize, dims: Dimensions) -> [f64; 3] {
    let fi = i as f64;
    let growth = match dims.get() {
        1 => fi,
        2 => fi.sqrt(),
        _ => fi.cbrt(),
    };
    let radius = INITIAL_RADIUS * growth;
    let roll = fi * golden_angle();
    let yaw = fi * markov_angle();

    match dims.get() {
        1 => [radius, 0.0, 0.0],
        2 => [radius * roll.cos(), radius * roll.sin(), 0.0],
        _ => [
            radius * roll.sin() * yaw.cos(),
            radius * roll.cos(),
            radius * roll.sin() * yaw.sin(),
        ],
    }
}

/// Prepare `nodes` for simulation in `dims` dimensions.
///
/// For each node, in order:
///
/// 1. `index` ← its position in the slice (`INVALID` past `u32::MAX`).
/// 2. Each active axis with a fixed override copies it into the position.
/// 3. If any active position is still missing, the *whole* position is
///    replaced by [`seed_position`].
/// 4. If any active velocity is missing, every active velocity is zeroed.
///
/// Idempotent: on already-initialized nodes only `index` and the fixed
/// overrides are re-applied.
pub fn initialize_nodes(nodes: &mut [Node], dims: Dimensions) {
    let mut seeded = 0usize;
    for (i, node) in nodes.iter_mut().enumerate() {
        node.index = NodeIndex::try_from(i).unwrap_or(NodeIndex::INVALID);

        for axis in dims.axes() {
            if let Some(f) = node.fixed(axis) {
                node.set_position(axis, f);
            }
        }

        if dims.axes().any(|axis| node.position(axis).is_none()) {
            let pos = seed_position(i, dims);
            for axis in dims.axes() {
                node.set_position(axis, pos[axis.ordinal()]);
            }
            seeded += 1;
        }

        if dims.axes().any(|axis| node.velocity(axis).is_none()) {
            for axis in dims.axes() {
                node.set_velocity(axis, 0.0);
            }
        }
    }
    debug!("initialized {} nodes in {dims} ({seeded} seeded)", nodes.len());
}

//! The `Node` record and per-axis field access.
//!
//! A node is a small mutable record of named numeric fields.  Every field is
//! optional: a field that is `None` or NaN reads as "not a number", which the
//! simulation treats as absent and fills in during initialization.
//!
//! | Field          | Meaning                                               |
//! |----------------|-------------------------------------------------------|
//! | `index`        | Position in the node list, reassigned on (re)init     |
//! | `x`, `y`, `z`  | Current position                                      |
//! | `vx`, `vy`, `vz` | Current velocity                                    |
//! | `fx`, `fy`, `fz` | Fixed-position override; pins the axis when set     |

use crate::NodeIndex;

// ── Axis ──────────────────────────────────────────────────────────────────────

/// One spatial axis.  Axes are activated in order: 1D uses `X`, 2D adds `Y`,
/// 3D adds `Z`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Zero-based ordinal (`X` = 0).
    #[inline]
    pub fn ordinal(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// `Some(v)` only if `v` is a number.
#[inline]
fn numeric(v: Option<f64>) -> Option<f64> {
    v.filter(|v| !v.is_nan())
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// A simulated point.
///
/// Identity is the node's slot in the simulation's node list; the engine
/// never copies or reorders nodes.  Fields of inactive dimensions are left
/// untouched and never read.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Node {
    pub index: NodeIndex,

    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,

    pub vx: Option<f64>,
    pub vy: Option<f64>,
    pub vz: Option<f64>,

    pub fx: Option<f64>,
    pub fy: Option<f64>,
    pub fz: Option<f64>,
}

impl Node {
    /// A node with no fields set.  Its position is seeded on initialization.
    pub fn new() -> Self {
        Self::default()
    }

    /// A node placed at `coords` (x, then y, then z; extra values ignored).
    pub fn at(coords: &[f64]) -> Self {
        let mut node = Self::default();
        for (&axis, &v) in Axis::ALL.iter().zip(coords) {
            node.set_position(axis, v);
        }
        node
    }

    /// A node pinned at `coords` on every supplied axis.
    pub fn fixed_at(coords: &[f64]) -> Self {
        let mut node = Self::default();
        for (&axis, &v) in Axis::ALL.iter().zip(coords) {
            node.fix(axis, v);
        }
        node
    }

    // ── Per-axis access ───────────────────────────────────────────────────

    /// Current position along `axis`, if numeric.
    #[inline]
    pub fn position(&self, axis: Axis) -> Option<f64> {
        numeric(*self.position_slot(axis))
    }

    /// Current velocity along `axis`, if numeric.
    #[inline]
    pub fn velocity(&self, axis: Axis) -> Option<f64> {
        numeric(*self.velocity_slot(axis))
    }

    /// Fixed-position override along `axis`, if set and numeric.
    #[inline]
    pub fn fixed(&self, axis: Axis) -> Option<f64> {
        numeric(*self.fixed_slot(axis))
    }

    #[inline]
    pub fn set_position(&mut self, axis: Axis, v: f64) {
        *self.position_slot_mut(axis) = Some(v);
    }

    #[inline]
    pub fn set_velocity(&mut self, axis: Axis, v: f64) {
        *self.velocity_slot_mut(axis) = Some(v);
    }

    /// Add `dv` to the velocity along `axis`, treating a missing velocity as 0.
    #[inline]
    pub fn add_velocity(&mut self, axis: Axis, dv: f64) {
        let v = self.velocity(axis).unwrap_or(0.0);
        *self.velocity_slot_mut(axis) = Some(v + dv);
    }

    /// Pin `axis` at `v` until [`unfix`][Self::unfix] is called.
    #[inline]
    pub fn fix(&mut self, axis: Axis, v: f64) {
        *self.fixed_slot_mut(axis) = Some(v);
    }

    #[inline]
    pub fn unfix(&mut self, axis: Axis) {
        *self.fixed_slot_mut(axis) = None;
    }

    /// `true` if any axis carries a fixed-position override.
    pub fn is_pinned(&self) -> bool {
        Axis::ALL.iter().any(|&a| self.fixed(a).is_some())
    }

    // ── String-keyed access ───────────────────────────────────────────────

    /// Read a field by name.  Unknown keys and non-numeric values read as `None`.
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "index" => self.index.is_valid().then_some(self.index.0 as f64),
            _ => numeric(*self.slot(key)?),
        }
    }

    /// Write a field by name.  Returns `false` (and changes nothing) for an
    /// unknown key, or for an `index` that is not a non-negative integer.
    pub fn set(&mut self, key: &str, value: Option<f64>) -> bool {
        if key == "index" {
            return match value {
                Some(v) if v >= 0.0 && v.fract() == 0.0 && v < u32::MAX as f64 => {
                    self.index = NodeIndex(v as u32);
                    true
                }
                None => {
                    self.index = NodeIndex::INVALID;
                    true
                }
                _ => false,
            };
        }
        match self.slot_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    // ── Slot lookup ───────────────────────────────────────────────────────

    fn slot(&self, key: &str) -> Option<&Option<f64>> {
        Some(match key {
            "x" => &self.x,
            "y" => &self.y,
            "z" => &self.z,
            "vx" => &self.vx,
            "vy" => &self.vy,
            "vz" => &self.vz,
            "fx" => &self.fx,
            "fy" => &self.fy,
            "fz" => &self.fz,
            _ => return None,
        })
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<f64>> {
        Some(match key {
            "x" => &mut self.x,
            "y" => &mut self.y,
            "z" => &mut self.z,
            "vx" => &mut self.vx,
            "vy" => &mut self.vy,
            "vz" => &mut self.vz,
            "fx" => &mut self.fx,
            "fy" => &mut self.fy,
            "fz" => &mut self.fz,
            _ => return None,
        })
    }

    #[inline]
    fn position_slot(&self, axis: Axis) -> &Option<f64> {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    #[inline]
    fn velocity_slot(&self, axis: Axis) -> &Option<f64> {
        match axis {
            Axis::X => &self.vx,
            Axis::Y => &self.vy,
            Axis::Z => &self.vz,
        }
    }

    #[inline]
    fn fixed_slot(&self, axis: Axis) -> &Option<f64> {
        match axis {
            Axis::X => &self.fx,
            Axis::Y => &self.fy,
            Axis::Z => &self.fz,
        }
    }

    #[inline]
    fn position_slot_mut(&mut self, axis: Axis) -> &mut Option<f64> {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    #[inline]
    fn velocity_slot_mut(&mut self, axis: Axis) -> &mut Option<f64> {
        match axis {
            Axis::X => &mut self.vx,
            Axis::Y => &mut self.vy,
            Axis::Z => &mut self.vz,
        }
    }

    #[inline]
    fn fixed_slot_mut(&mut self, axis: Axis) -> &mut Option<f64> {
        match axis {
            Axis::X => &mut self.fx,
            Axis::Y => &mut self.fy,
            Axis::Z => &mut self.fz,
        }
    }
}

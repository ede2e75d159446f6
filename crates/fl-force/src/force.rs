//! The `Force` trait: the main extension point for user code.

use fl_core::{Dimensions, Node, SimRng};

use crate::ForceResult;

/// Pluggable per-tick velocity contributor.
///
/// # Contract
///
/// - [`bind`][Self::bind] runs whenever the force is registered, and again
///   whenever the node list, dimension count, or random seed changes.  Use
///   it to precompute per-node coefficients.  The default does nothing.
/// - [`apply`][Self::apply] runs once per tick with the current alpha.  It
///   may only change `vx`/`vy`/`vz`; it must not write positions.  The
///   slice cannot be resized, and must not be reordered.
///
/// An `Err` from `apply` aborts the rest of the tick and is returned to
/// whoever drove it.
///
/// # Example
///
/// ```rust,ignore
/// struct Centering { strength: f64 }
///
/// impl Force for Centering {
///     fn apply(&mut self, nodes: &mut [Node], dims: Dimensions, alpha: f64) -> ForceResult<()> {
///         for node in nodes.iter_mut() {
///             for axis in dims.axes() {
///                 let p = node.position(axis).unwrap_or(0.0);
///                 node.add_velocity(axis, -p * self.strength * alpha);
///             }
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Force: Send + 'static {
    /// Precompute per-node state from the current node set.
    fn bind(&mut self, _nodes: &[Node], _dims: Dimensions, _rng: &mut SimRng) {}

    /// Add this force's velocity contribution for one tick.
    fn apply(&mut self, nodes: &mut [Node], dims: Dimensions, alpha: f64) -> ForceResult<()>;
}

// ── Closure adapter ───────────────────────────────────────────────────────────

/// A [`Force`] backed by a closure.  Build with [`from_fn`].
pub struct FnForce<F>(F);

/// Wrap a closure as a force with no bind step.
///
/// ```rust,ignore
/// sim.set_force("drift", from_fn(|nodes, _dims, alpha| {
///     for n in nodes.iter_mut() { n.add_velocity(Axis::X, alpha); }
///     Ok(())
/// }));
/// ```
pub fn from_fn<F>(f: F) -> FnForce<F>
where
    F: FnMut(&mut [Node], Dimensions, f64) -> ForceResult<()> + Send + 'static,
{
    FnForce(f)
}

impl<F> Force for FnForce<F>
where
    F: FnMut(&mut [Node], Dimensions, f64) -> ForceResult<()> + Send + 'static,
{
    fn apply(&mut self, nodes: &mut [Node], dims: Dimensions, alpha: f64) -> ForceResult<()> {
        (self.0)(nodes, dims, alpha)
    }
}

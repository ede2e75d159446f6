//! A no-op force: never touches a node.

use fl_core::{Dimensions, Node};

use crate::{Force, ForceResult};

/// A [`Force`] that contributes nothing.
///
/// Useful as a placeholder in tests, or to reserve a name in the registry
/// before the real force is configured.
pub struct NoopForce;

impl Force for NoopForce {
    fn apply(&mut self, _nodes: &mut [Node], _dims: Dimensions, _alpha: f64) -> ForceResult<()> {
        Ok(())
    }
}

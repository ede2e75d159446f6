//! All-pairs charge for the demo.

use fl_core::{Dimensions, Node, SimRng};
use fl_force::{Force, ForceError, ForceResult};

/// Inverse-distance repulsion (negative `strength`) or attraction between
/// every pair of nodes.  O(n²) per tick.
pub struct Repulsion {
    strength: f64,
    /// Stream for separating coincident nodes, derived on bind.
    rng:      SimRng,
    /// Scratch copy of positions, reused across ticks.
    scratch:  Vec<[f64; 3]>,
}

impl Repulsion {
    pub fn new(strength: f64) -> ForceResult<Self> {
        if !strength.is_finite() {
            return Err(ForceError::Config(format!("strength must be finite, got {strength}")));
        }
        Ok(Self {
            strength,
            rng:     SimRng::new(0),
            scratch: Vec::new(),
        })
    }
}

impl Force for Repulsion {
    fn bind(&mut self, nodes: &[Node], _dims: Dimensions, rng: &mut SimRng) {
        self.rng = rng.child(1);
        self.scratch = Vec::with_capacity(nodes.len());
    }

    fn apply(&mut self, nodes: &mut [Node], dims: Dimensions, alpha: f64) -> ForceResult<()> {
        self.scratch.clear();
        self.scratch.extend(nodes.iter().map(|node| {
            let mut p = [0.0; 3];
            for axis in dims.axes() {
                p[axis.ordinal()] = node.position(axis).unwrap_or(0.0);
            }
            p
        }));

        let w = self.strength * alpha;
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let mut d = [0.0; 3];
                let mut l2 = 0.0;
                for axis in dims.axes() {
                    let k = axis.ordinal();
                    d[k] = self.scratch[j][k] - self.scratch[i][k];
                    if d[k] == 0.0 {
                        d[k] = self.rng.jiggle();
                    }
                    l2 += d[k] * d[k];
                }
                let s = w / l2;
                for axis in dims.axes() {
                    let k = axis.ordinal();
                    nodes[i].add_velocity(axis, d[k] * s);
                    nodes[j].add_velocity(axis, -d[k] * s);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fl_core::{Axis, Dimensions, Node, SimRng};
    use fl_force::{Force, ForceError};

    use super::Repulsion;

    #[test]
    fn non_finite_strength_rejected() {
        assert!(matches!(Repulsion::new(f64::NAN), Err(ForceError::Config(_))));
        assert!(matches!(Repulsion::new(f64::INFINITY), Err(ForceError::Config(_))));
    }

    #[test]
    fn negative_strength_pushes_apart() {
        let mut force = Repulsion::new(-30.0).unwrap();
        let mut nodes = vec![Node::at(&[0.0, 0.0]), Node::at(&[1.0, 0.0])];
        force.bind(&nodes, Dimensions::TWO, &mut SimRng::new(1));
        force.apply(&mut nodes, Dimensions::TWO, 1.0).unwrap();
        assert!(nodes[0].velocity(Axis::X).unwrap() < 0.0);
        assert!(nodes[1].velocity(Axis::X).unwrap() > 0.0);
    }
}

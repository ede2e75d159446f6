//! Unit tests for fl-force.

use fl_core::{Axis, Dimensions, Node, SimRng};

use crate::{Force, ForceError, ForceRegistry, ForceResult, NoopForce, from_fn};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Adds a constant to `vx` of every node.
struct Push {
    dv:    f64,
    bound: usize,
}

impl Push {
    fn new(dv: f64) -> Self {
        Self { dv, bound: 0 }
    }
}

impl Force for Push {
    fn bind(&mut self, _nodes: &[Node], _dims: Dimensions, _rng: &mut SimRng) {
        self.bound += 1;
    }

    fn apply(&mut self, nodes: &mut [Node], _dims: Dimensions, _alpha: f64) -> ForceResult<()> {
        for node in nodes.iter_mut() {
            node.add_velocity(Axis::X, self.dv);
        }
        Ok(())
    }
}

fn nodes(n: usize) -> Vec<Node> {
    (0..n).map(|_| Node::at(&[0.0, 0.0])).collect()
}

// ── Force ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod force_tests {
    use super::*;

    #[test]
    fn noop_leaves_nodes_alone() {
        let mut ns = nodes(3);
        let before = ns.clone();
        NoopForce.apply(&mut ns, Dimensions::TWO, 1.0).unwrap();
        assert_eq!(ns, before);
    }

    #[test]
    fn closure_force_sees_alpha() {
        let mut f = from_fn(|nodes: &mut [Node], _dims, alpha| {
            for n in nodes.iter_mut() {
                n.add_velocity(Axis::Y, alpha);
            }
            Ok(())
        });
        let mut ns = nodes(2);
        f.apply(&mut ns, Dimensions::TWO, 0.25).unwrap();
        assert!(ns.iter().all(|n| n.vy == Some(0.25)));
    }

    #[test]
    fn closure_force_can_fail() {
        let mut f = from_fn(|_nodes: &mut [Node], _dims, _alpha| {
            Err(ForceError::Failed("boom".into()))
        });
        let err = f.apply(&mut nodes(1), Dimensions::ONE, 1.0).unwrap_err();
        assert_eq!(err.to_string(), "force failed: boom");
    }
}

// ── ForceRegistry ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn insert_and_get_typed() {
        let mut reg = ForceRegistry::new();
        assert!(!reg.insert("push", Push::new(2.0)));
        assert_eq!(reg.get::<Push>("push").map(|p| p.dv), Some(2.0));
        assert!(reg.get::<NoopForce>("push").is_none());
        assert!(reg.get::<Push>("missing").is_none());
    }

    #[test]
    fn replace_keeps_slot() {
        let mut reg = ForceRegistry::new();
        reg.insert("a", NoopForce);
        reg.insert("b", NoopForce);
        reg.insert("c", NoopForce);
        assert!(reg.insert("a", Push::new(1.0)));
        let names: Vec<&str> = reg.names().collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(reg.get::<Push>("a").is_some());
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn remove_missing_is_false() {
        let mut reg = ForceRegistry::new();
        assert!(!reg.remove("ghost"));
        reg.insert("x", NoopForce);
        assert!(reg.remove("x"));
        assert!(reg.is_empty());
    }

    #[test]
    fn bind_all_and_bind_one() {
        let mut reg = ForceRegistry::new();
        reg.insert("p", Push::new(1.0));
        reg.insert("q", Push::new(1.0));
        let ns = nodes(2);
        let mut rng = SimRng::new(0);
        reg.bind_all(&ns, Dimensions::TWO, &mut rng);
        assert!(reg.bind_one("q", &ns, Dimensions::TWO, &mut rng));
        assert!(!reg.bind_one("r", &ns, Dimensions::TWO, &mut rng));
        assert_eq!(reg.get::<Push>("p").map(|p| p.bound), Some(1));
        assert_eq!(reg.get::<Push>("q").map(|p| p.bound), Some(2));
    }

    #[test]
    fn iter_mut_applies_in_order_and_sums() {
        let mut reg = ForceRegistry::new();
        reg.insert("one", Push::new(1.0));
        reg.insert("two", Push::new(2.0));
        let mut ns = nodes(1);
        let mut seen = Vec::new();
        for (name, force) in reg.iter_mut() {
            seen.push(name.to_string());
            force.apply(&mut ns, Dimensions::TWO, 1.0).unwrap();
        }
        assert_eq!(seen, vec!["one", "two"]);
        assert_eq!(ns[0].vx, Some(3.0));
    }

    #[test]
    fn get_mut_changes_parameters() {
        let mut reg = ForceRegistry::new();
        reg.insert("p", Push::new(1.0));
        if let Some(p) = reg.get_mut::<Push>("p") {
            p.dv = 5.0;
        }
        assert_eq!(reg.get::<Push>("p").map(|p| p.dv), Some(5.0));
        assert!(reg.contains("p"));
    }
}

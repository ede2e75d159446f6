//! Unit tests for fl-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeIndex;

    #[test]
    fn from_list_position() {
        assert_eq!(NodeIndex::try_from(42usize).unwrap(), NodeIndex(42));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn position_beyond_u32_rejected() {
        assert!(NodeIndex::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(NodeIndex::default(), NodeIndex::INVALID);
        assert!(!NodeIndex::default().is_valid());
        assert!(NodeIndex(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(NodeIndex(7).to_string(), "NodeIndex(7)");
    }
}

#[cfg(test)]
mod node_tests {
    use crate::{Axis, Node, NodeIndex};

    #[test]
    fn nan_reads_as_absent() {
        let node = Node { x: Some(f64::NAN), vx: Some(2.0), ..Node::default() };
        assert_eq!(node.position(Axis::X), None);
        assert_eq!(node.velocity(Axis::X), Some(2.0));
        assert_eq!(node.get("x"), None);
    }

    #[test]
    fn at_fills_axes_in_order() {
        let node = Node::at(&[1.0, 2.0]);
        assert_eq!(node.x, Some(1.0));
        assert_eq!(node.y, Some(2.0));
        assert_eq!(node.z, None);
    }

    #[test]
    fn at_ignores_extra_coordinates() {
        let node = Node::at(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(node.z, Some(3.0));
    }

    #[test]
    fn fixed_at_pins_without_positioning() {
        let node = Node::fixed_at(&[5.0]);
        assert_eq!(node.fx, Some(5.0));
        assert_eq!(node.x, None);
        assert!(node.is_pinned());
    }

    #[test]
    fn fix_and_unfix() {
        let mut node = Node::new();
        node.fix(Axis::Y, 3.0);
        assert_eq!(node.fixed(Axis::Y), Some(3.0));
        node.unfix(Axis::Y);
        assert_eq!(node.fixed(Axis::Y), None);
        assert!(!node.is_pinned());
    }

    #[test]
    fn add_velocity_treats_missing_as_zero() {
        let mut node = Node::new();
        node.add_velocity(Axis::Z, 1.5);
        node.add_velocity(Axis::Z, 1.0);
        assert_eq!(node.vz, Some(2.5));
    }

    #[test]
    fn string_keyed_access() {
        let mut node = Node::new();
        assert!(node.set("vy", Some(4.0)));
        assert_eq!(node.get("vy"), Some(4.0));
        assert!(node.set("fz", Some(-1.0)));
        assert_eq!(node.fixed(Axis::Z), Some(-1.0));
        assert!(node.set("fz", None));
        assert_eq!(node.fz, None);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut node = Node::new();
        assert!(!node.set("mass", Some(1.0)));
        assert_eq!(node.get("mass"), None);
        assert_eq!(node, Node::new());
    }

    #[test]
    fn index_key() {
        let mut node = Node::new();
        assert_eq!(node.get("index"), None);
        assert!(node.set("index", Some(3.0)));
        assert_eq!(node.index, NodeIndex(3));
        assert_eq!(node.get("index"), Some(3.0));
        assert!(!node.set("index", Some(-1.0)));
        assert!(!node.set("index", Some(1.5)));
        assert_eq!(node.index, NodeIndex(3));
    }
}

#[cfg(test)]
mod dims_tests {
    use crate::{Axis, Dimensions};

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(Dimensions::clamped(0), Dimensions::ONE);
        assert_eq!(Dimensions::clamped(2), Dimensions::TWO);
        assert_eq!(Dimensions::clamped(7), Dimensions::THREE);
    }

    #[test]
    fn axes_in_order() {
        let axes: Vec<Axis> = Dimensions::TWO.axes().collect();
        assert_eq!(axes, vec![Axis::X, Axis::Y]);
        assert_eq!(Dimensions::THREE.axes().count(), 3);
    }

    #[test]
    fn contains() {
        assert!(Dimensions::ONE.contains(Axis::X));
        assert!(!Dimensions::ONE.contains(Axis::Y));
        assert!(Dimensions::THREE.contains(Axis::Z));
    }

    #[test]
    fn display() {
        assert_eq!(Dimensions::THREE.to_string(), "3D");
    }
}

#[cfg(test)]
mod config_tests {
    use approx::assert_relative_eq;

    use crate::{CoreError, Dimensions, SimConfig};

    #[test]
    fn defaults() {
        let c = SimConfig::default();
        assert_eq!(c.alpha, 1.0);
        assert_eq!(c.alpha_min, 0.001);
        assert_eq!(c.alpha_target, 0.0);
        assert_eq!(c.velocity_decay, 0.6);
        assert_relative_eq!(c.damping(), 0.4, epsilon = 1e-12);
        assert_eq!(c.dimensions, Dimensions::TWO);
    }

    #[test]
    fn default_decay_cools_in_300_ticks() {
        let c = SimConfig::default();
        let after = (1.0 - c.alpha_decay).powi(300);
        assert_relative_eq!(after, c.alpha_min, max_relative = 1e-9);
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_nan() {
        let c = SimConfig { alpha: f64::NAN, ..SimConfig::default() };
        assert!(matches!(c.validate(), Err(CoreError::NotFinite { field: "alpha", .. })));
    }

    #[test]
    fn validate_rejects_out_of_range_decay() {
        let c = SimConfig { velocity_decay: 1.5, ..SimConfig::default() };
        assert!(matches!(c.validate(), Err(CoreError::Config(_))));
        let c = SimConfig { alpha_decay: -0.1, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(9);
        let mut b = SimRng::new(9);
        for _ in 0..10 {
            assert_eq!(a.random(), b.random());
        }
    }

    #[test]
    fn child_is_deterministic() {
        let mut a = SimRng::new(1).child(3);
        let mut b = SimRng::new(1).child(3);
        assert_eq!(a.random(), b.random());
    }

    #[test]
    fn jiggle_is_tiny_and_nonzero() {
        let mut rng = SimRng::new(0);
        for _ in 0..100 {
            let j = rng.jiggle();
            assert!(j != 0.0);
            assert!(j.abs() <= 5e-7);
        }
    }
}

//! Named force storage.
//!
//! # Design
//!
//! Forces live in a `Vec<(String, Box<dyn ErasedForce>)>`.  Names are unique;
//! inserting under an existing name replaces that force *in its slot*, so
//! apply order is stable for the whole run.  Lookups are linear, which is
//! fine for the handful of forces a layout registers.
//!
//! Each stored force is type-erased behind [`ErasedForce`] so callers can
//! get their concrete type back with [`ForceRegistry::get`].

use std::any::Any;

use log::debug;

use fl_core::{Dimensions, Node, SimRng};

use crate::Force;

// ── Trait object ──────────────────────────────────────────────────────────────

/// A [`Force`] that can also be downcast to its concrete type.
///
/// Implemented for every `Force` automatically; never implement it by hand.
pub trait ErasedForce: Force {
    #[doc(hidden)]
    fn as_any(&self) -> &dyn Any;

    #[doc(hidden)]
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Force> ErasedForce for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ── ForceRegistry ─────────────────────────────────────────────────────────────

/// Ordered map from force name to force.
#[derive(Default)]
pub struct ForceRegistry {
    entries: Vec<(String, Box<dyn ErasedForce>)>,
}

impl ForceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `force` under `name`, replacing (in place) any force already
    /// registered there.  Returns `true` if a force was replaced.
    ///
    /// Does not bind; the simulation binds immediately after inserting.
    pub fn insert<F: Force>(&mut self, name: impl Into<String>, force: F) -> bool {
        let name = name.into();
        let boxed: Box<dyn ErasedForce> = Box::new(force);
        match self.position(&name) {
            Some(i) => {
                debug!("replacing force {name:?}");
                self.entries[i].1 = boxed;
                true
            }
            None => {
                debug!("registering force {name:?}");
                self.entries.push((name, boxed));
                false
            }
        }
    }

    /// Unregister `name`.  Returns `false` if nothing was registered there.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(i) => {
                debug!("removing force {name:?}");
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// The force under `name`, if registered and of type `F`.
    pub fn get<F: Force>(&self, name: &str) -> Option<&F> {
        let i = self.position(name)?;
        self.entries[i].1.as_any().downcast_ref::<F>()
    }

    /// Mutable access to the force under `name`, if registered and of type `F`.
    ///
    /// Changing a force's parameters this way does not re-bind it; call
    /// `Simulation::rebind_forces` if its precomputed state depends on them.
    pub fn get_mut<F: Force>(&mut self, name: &str) -> Option<&mut F> {
        let i = self.position(name)?;
        self.entries[i].1.as_any_mut().downcast_mut::<F>()
    }

    /// Bind a single force by name.  Returns `false` if `name` is unknown.
    pub fn bind_one(&mut self, name: &str, nodes: &[Node], dims: Dimensions, rng: &mut SimRng) -> bool {
        match self.position(name) {
            Some(i) => {
                self.entries[i].1.bind(nodes, dims, rng);
                true
            }
            None => false,
        }
    }

    /// Bind every force, in registry order.
    pub fn bind_all(&mut self, nodes: &[Node], dims: Dimensions, rng: &mut SimRng) {
        for (_, force) in self.entries.iter_mut() {
            force.bind(nodes, dims, rng);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Force names in apply order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, force)` pairs in apply order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Box<dyn ErasedForce>)> {
        self.entries.iter_mut().map(|(name, force)| (name.as_str(), force))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }
}

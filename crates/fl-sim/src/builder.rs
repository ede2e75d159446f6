//! Fluent builder for constructing a [`Simulation`].

use fl_core::{Dimensions, Node, SimConfig};
use fl_force::{Force, ForceRegistry};

use crate::{SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                  |
/// |--------------------|------------------------------------------|
/// | `.config(c)`       | `SimConfig::default()`                   |
/// | `.dimensions(n)`   | 2 (or whatever `config` carries)         |
/// | `.seed(s)`         | 0 (or whatever `config` carries)         |
/// | `.force(name, f)`  | No forces                                |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimulationBuilder::new(nodes)
///     .dimensions(3)
///     .seed(42)
///     .force("center", Centering::default())
///     .build()?;
/// ```
pub struct SimulationBuilder {
    nodes:  Vec<Node>,
    config: SimConfig,
    forces: ForceRegistry,
}

impl SimulationBuilder {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            config: SimConfig::default(),
            forces: ForceRegistry::new(),
        }
    }

    /// Replace the whole configuration.  Call before `dimensions`/`seed`,
    /// which edit it.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Active dimension count, clamped to 1..=3.
    pub fn dimensions(mut self, n: usize) -> Self {
        self.config.dimensions = Dimensions::clamped(n);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Register a force.  Forces apply in the order they are added.
    pub fn force<F: Force>(mut self, name: &str, force: F) -> Self {
        self.forces.insert(name, force);
        self
    }

    /// Validate the configuration, initialize nodes, bind forces, and
    /// return a Running simulation.
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;
        let mut sim = Simulation::with_config(self.nodes, self.config);
        sim.install_forces(self.forces);
        Ok(sim)
    }
}

//! The `Simulation` struct, its tick loop, and its drive-loop step.

use log::{debug, info, trace, warn};

use fl_core::{Dimensions, Node, SimConfig, SimRng};
use fl_force::{Force, ForceRegistry};

use crate::dispatch::Dispatch;
use crate::init::initialize_nodes;
use crate::{Handler, SimError, SimResult};

// ── Events and drive state ────────────────────────────────────────────────────

/// Events raised by the drive loop.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SimEvent {
    /// After every driven tick.
    Tick,
    /// Once, when a driven tick leaves alpha below `alpha_min`.
    End,
}

impl SimEvent {
    pub const ALL: [SimEvent; 2] = [SimEvent::Tick, SimEvent::End];

    pub fn name(self) -> &'static str {
        match self {
            SimEvent::Tick => "tick",
            SimEvent::End => "end",
        }
    }
}

/// Whether the drive loop should keep stepping.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DriveState {
    Running,
    Stopped,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// A force-directed layout simulation.
///
/// Owns the cooling parameters, the node list, the force registry, and the
/// "tick"/"end" handlers.  All state is per instance; any number of
/// simulations can coexist.
///
/// Not internally synchronized.  Share across threads through
/// [`SimulationDriver`][crate::SimulationDriver], which serializes every
/// step and accessor call behind one mutex.
pub struct Simulation {
    /// Cooling, damping, dimensionality, and seed.  `velocity_decay` here is
    /// the retained fraction.
    config: SimConfig,

    nodes: Vec<Node>,

    forces: ForceRegistry,

    /// Random source handed to forces on bind.
    rng: SimRng,

    events: Dispatch<Simulation>,

    drive: DriveState,
}

impl Simulation {
    /// A simulation over `nodes` in `dimensions` (clamped to 1..=3) with the
    /// default cooling schedule.  Starts Running.
    pub fn new(nodes: Vec<Node>, dimensions: usize) -> Self {
        let config = SimConfig {
            dimensions: clamp_dimensions(dimensions),
            ..SimConfig::default()
        };
        Self::with_config(nodes, config)
    }

    /// A simulation over `nodes` using `config` as given.  Starts Running.
    pub fn with_config(mut nodes: Vec<Node>, config: SimConfig) -> Self {
        initialize_nodes(&mut nodes, config.dimensions);
        let names: Vec<&'static str> = SimEvent::ALL.iter().map(|e| e.name()).collect();
        Self {
            rng: SimRng::new(config.seed),
            config,
            nodes,
            forces: ForceRegistry::new(),
            events: Dispatch::new(&names),
            drive: DriveState::Running,
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the simulation `iterations` times, synchronously.
    ///
    /// Never raises events and never looks at `alpha_min`; that is the drive
    /// loop's job.  A force error aborts the remaining work of the current
    /// tick (already-applied forces keep their velocity writes, positions
    /// are not integrated) and is returned.
    pub fn tick(&mut self, iterations: usize) -> SimResult<()> {
        let dims = self.config.dimensions;
        let retained = self.config.velocity_decay;

        for _ in 0..iterations {
            self.config.alpha +=
                (self.config.alpha_target - self.config.alpha) * self.config.alpha_decay;
            let alpha = self.config.alpha;

            for (name, force) in self.forces.iter_mut() {
                force
                    .apply(&mut self.nodes, dims, alpha)
                    .map_err(|source| SimError::Force { name: name.to_string(), source })?;
            }

            integrate(&mut self.nodes, dims, retained);
            trace!("tick: alpha {alpha:.6}");
        }
        Ok(())
    }

    // ── Drive loop ────────────────────────────────────────────────────────

    /// One drive-loop step: tick once, raise "tick", and if alpha has
    /// dropped below `alpha_min`, stop and raise "end".
    ///
    /// Does nothing while stopped.  Returns the state after the step.
    pub fn step(&mut self) -> SimResult<DriveState> {
        if self.drive == DriveState::Stopped {
            return Ok(DriveState::Stopped);
        }

        self.tick(1)?;
        self.emit(SimEvent::Tick);

        if self.config.alpha < self.config.alpha_min {
            self.drive = DriveState::Stopped;
            info!(
                "simulation cooled (alpha {:.6} < alpha_min {})",
                self.config.alpha, self.config.alpha_min
            );
            self.emit(SimEvent::End);
        }
        Ok(self.drive)
    }

    /// Resume stepping from the current state.  Alpha is not reset; raise
    /// it first (`set_alpha`) to re-heat a cooled layout.
    pub fn restart(&mut self) -> &mut Self {
        self.drive = DriveState::Running;
        self
    }

    /// Stop stepping.  Alpha and node state are untouched.
    pub fn stop(&mut self) -> &mut Self {
        self.drive = DriveState::Stopped;
        self
    }

    pub fn drive_state(&self) -> DriveState {
        self.drive
    }

    pub fn is_running(&self) -> bool {
        self.drive == DriveState::Running
    }

    /// `true` once alpha is below `alpha_min`.
    pub fn is_cooled(&self) -> bool {
        self.config.alpha < self.config.alpha_min
    }

    /// Ticks needed from the current alpha until alpha drops below
    /// `alpha_min`.  `None` if it never will: no decay, a target at or
    /// above `alpha_min`, a decay too small to move alpha in `f64`, or a
    /// count beyond `u64`.
    pub fn ticks_to_cool(&self) -> Option<u64> {
        let c = &self.config;
        if c.alpha < c.alpha_min {
            return Some(0);
        }
        if c.alpha_target >= c.alpha_min || c.alpha_decay <= 0.0 {
            return None;
        }
        if c.alpha_decay >= 1.0 {
            return Some(1);
        }
        if c.alpha + (c.alpha_target - c.alpha) * c.alpha_decay == c.alpha {
            return None;
        }
        // alpha_k = target + (alpha - target)(1 - decay)^k
        let x = ((c.alpha_min - c.alpha_target) / (c.alpha - c.alpha_target)).ln()
            / (-c.alpha_decay).ln_1p();
        if !x.is_finite() || x < 0.0 || x >= u64::MAX as f64 {
            return None;
        }
        Some((x.floor() as u64).saturating_add(1))
    }

    // ── Events ────────────────────────────────────────────────────────────

    /// Register `handler` for `typename` (`"tick"`, `"end"`, optionally with
    /// a `.namespace` suffix), replacing any handler already there.
    ///
    /// Handlers run on whichever thread drives the simulation.
    pub fn on<F>(&mut self, typename: &str, handler: F) -> SimResult<&mut Self>
    where
        F: FnMut(&Simulation) + Send + 'static,
    {
        self.events.on(typename, handler)?;
        Ok(self)
    }

    /// Remove the handler for `typename`.  Returns `false` if none was
    /// registered.
    pub fn off(&mut self, typename: &str) -> SimResult<bool> {
        self.events.off(typename)
    }

    /// The handler registered for `typename`, if any.
    pub fn handler(&self, typename: &str) -> SimResult<Option<&Handler<Simulation>>> {
        self.events.handler(typename)
    }

    fn emit(&mut self, event: SimEvent) {
        // Both names are registered in `with_config`, so detach cannot fail.
        let Ok(mut listeners) = self.events.detach(event.name()) else {
            return;
        };
        listeners.call_all(self);
        if let Err(e) = self.events.reattach(event.name(), listeners) {
            debug!("dropping {} listeners: {e}", event.name());
        }
    }

    // ── Nodes and dimensions ──────────────────────────────────────────────

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable access to node fields (pin, unpin, nudge).  The list itself
    /// cannot be resized this way; use [`set_nodes`][Self::set_nodes].
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    /// Replace the node list, initialize it, and re-bind every force.
    pub fn set_nodes(&mut self, nodes: Vec<Node>) -> &mut Self {
        self.nodes = nodes;
        self.reinitialize();
        self
    }

    /// Consume the simulation, returning its nodes.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    pub fn num_dimensions(&self) -> usize {
        self.config.dimensions.get()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    /// Change the active dimension count (clamped to 1..=3), re-initialize
    /// nodes, and re-bind every force.
    pub fn set_num_dimensions(&mut self, n: usize) -> &mut Self {
        self.config.dimensions = clamp_dimensions(n);
        debug!("dimensions set to {}", self.config.dimensions);
        self.reinitialize();
        self
    }

    fn reinitialize(&mut self) {
        initialize_nodes(&mut self.nodes, self.config.dimensions);
        self.rebind_forces();
    }

    // ── Cooling parameters ────────────────────────────────────────────────

    pub fn alpha(&self) -> f64 {
        self.config.alpha
    }

    pub fn set_alpha(&mut self, alpha: f64) -> &mut Self {
        self.config.alpha = alpha;
        self
    }

    pub fn alpha_min(&self) -> f64 {
        self.config.alpha_min
    }

    pub fn set_alpha_min(&mut self, alpha_min: f64) -> &mut Self {
        self.config.alpha_min = alpha_min;
        self
    }

    pub fn alpha_decay(&self) -> f64 {
        self.config.alpha_decay
    }

    pub fn set_alpha_decay(&mut self, alpha_decay: f64) -> &mut Self {
        self.config.alpha_decay = alpha_decay;
        self
    }

    pub fn alpha_target(&self) -> f64 {
        self.config.alpha_target
    }

    pub fn set_alpha_target(&mut self, alpha_target: f64) -> &mut Self {
        self.config.alpha_target = alpha_target;
        self
    }

    /// Damped fraction of velocity per tick (default 0.4).
    pub fn velocity_decay(&self) -> f64 {
        1.0 - self.config.velocity_decay
    }

    /// Set the damped fraction of velocity per tick; `1 - damping` is
    /// retained.
    pub fn set_velocity_decay(&mut self, damping: f64) -> &mut Self {
        self.config.velocity_decay = 1.0 - damping;
        self
    }

    /// Current parameters.  `velocity_decay` in the returned config is the
    /// retained fraction.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    // ── Random source ─────────────────────────────────────────────────────

    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Reseed the random source and re-bind every force.
    pub fn set_seed(&mut self, seed: u64) -> &mut Self {
        self.config.seed = seed;
        self.rng = SimRng::new(seed);
        self.rebind_forces();
        self
    }

    // ── Forces ────────────────────────────────────────────────────────────

    /// Register `force` under `name` (replacing any force already there,
    /// in its slot) and bind it immediately.
    pub fn set_force<F: Force>(&mut self, name: &str, force: F) -> &mut Self {
        self.forces.insert(name, force);
        self.forces.bind_one(name, &self.nodes, self.config.dimensions, &mut self.rng);
        self
    }

    /// Unregister `name`.  Returns `false` if nothing was registered there.
    pub fn remove_force(&mut self, name: &str) -> bool {
        self.forces.remove(name)
    }

    /// The force under `name`, if registered and of type `F`.
    pub fn force<F: Force>(&self, name: &str) -> Option<&F> {
        self.forces.get(name)
    }

    /// Mutable access to the force under `name`.  Call
    /// [`rebind_forces`][Self::rebind_forces] if the change affects what
    /// the force precomputed on bind.
    pub fn force_mut<F: Force>(&mut self, name: &str) -> Option<&mut F> {
        self.forces.get_mut(name)
    }

    pub fn has_force(&self, name: &str) -> bool {
        self.forces.contains(name)
    }

    /// Registered force names, in apply order.
    pub fn force_names(&self) -> impl Iterator<Item = &str> {
        self.forces.names()
    }

    /// Bind every registered force against the current nodes.
    pub fn rebind_forces(&mut self) {
        self.forces.bind_all(&self.nodes, self.config.dimensions, &mut self.rng);
    }

    /// Replace the whole registry and bind it.  Used by the builder.
    pub(crate) fn install_forces(&mut self, forces: ForceRegistry) {
        self.forces = forces;
        self.rebind_forces();
    }

    // ── Nearest-node query ────────────────────────────────────────────────

    /// The node closest to `point`, considering only active dimensions.
    ///
    /// Missing coordinates (on the query or on a node) count as 0; extra
    /// coordinates beyond the active dimensions are ignored.  With a
    /// `radius`, only nodes with squared distance strictly below `radius²`
    /// qualify.  Ties go to the earlier node.
    pub fn find(&self, point: &[f64], radius: Option<f64>) -> Option<&Node> {
        self.find_index(point, radius).map(|i| &self.nodes[i])
    }

    /// Like [`find`][Self::find], returning the node's position in the list.
    pub fn find_index(&self, point: &[f64], radius: Option<f64>) -> Option<usize> {
        let dims = self.config.dimensions;
        let mut best = radius.map_or(f64::INFINITY, |r| r * r);
        let mut closest = None;

        for (i, node) in self.nodes.iter().enumerate() {
            let d2: f64 = dims
                .axes()
                .map(|axis| {
                    let q = point.get(axis.ordinal()).copied().unwrap_or(0.0);
                    let d = q - node.position(axis).unwrap_or(0.0);
                    d * d
                })
                .sum();
            if d2 < best {
                best = d2;
                closest = Some(i);
            }
        }
        closest
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn clamp_dimensions(n: usize) -> Dimensions {
    let dims = Dimensions::clamped(n);
    if dims.get() != n {
        warn!("dimension count {n} clamped to {dims}");
    }
    dims
}

/// Damp velocities and move unpinned nodes; snap pinned axes.
fn integrate(nodes: &mut [Node], dims: Dimensions, retained: f64) {
    #[cfg(not(feature = "parallel"))]
    {
        for node in nodes.iter_mut() {
            integrate_node(node, dims, retained);
        }
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        nodes
            .par_iter_mut()
            .for_each(|node| integrate_node(node, dims, retained));
    }
}

#[inline]
fn integrate_node(node: &mut Node, dims: Dimensions, retained: f64) {
    for axis in dims.axes() {
        match node.fixed(axis) {
            Some(fixed) => {
                node.set_position(axis, fixed);
                node.set_velocity(axis, 0.0);
            }
            None => {
                let v = node.velocity(axis).unwrap_or(0.0) * retained;
                node.set_velocity(axis, v);
                let p = node.position(axis).unwrap_or(0.0);
                node.set_position(axis, p + v);
            }
        }
    }
}

//! spiral: smallest end-to-end run of the fl layout engine.
//!
//! Seeds `NODE_COUNT` nodes on the phyllotaxis spiral, lets them push apart
//! under an all-pairs repulsion while a centering pass keeps the cloud at the
//! origin, drives the simulation from a background interval timer until it
//! cools, and prints the settled layout as JSON on stdout.
//!
//! ```text
//! RUST_LOG=debug cargo run -p spiral
//! ```

mod forces;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use log::info;

use fl_core::{Dimensions, Node};
use fl_force::{ForceResult, from_fn};
use fl_sim::{Simulation, SimulationBuilder, SimulationDriver};
use fl_timer::IntervalTimer;

use forces::Repulsion;

// ── Constants ─────────────────────────────────────────────────────────────────

const NODE_COUNT: usize    = 64;
const DIMENSIONS: usize    = 2;
const SEED:       u64      = 42;
const FRAME:      Duration = Duration::from_millis(2);
const DEADLINE:   Duration = Duration::from_secs(30);

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    // Node 0 pinned at the origin as an anchor.
    let mut nodes = vec![Node::new(); NODE_COUNT];
    nodes[0] = Node::fixed_at(&[0.0; DIMENSIONS]);

    let mut sim = SimulationBuilder::new(nodes)
        .dimensions(DIMENSIONS)
        .seed(SEED)
        .force("charge", Repulsion::new(-30.0)?)
        .force("center", from_fn(center))
        .build()?;

    let ticks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&ticks);
    sim.on("tick.count", move |_sim: &Simulation| {
        counter.fetch_add(1, Ordering::Relaxed);
    })?
    .on("end.log", |sim: &Simulation| {
        info!("cooled at alpha {:.5}", sim.alpha());
    })?;

    info!(
        "{NODE_COUNT} nodes, {DIMENSIONS}D, expect ~{} ticks",
        sim.ticks_to_cool().unwrap_or(0)
    );

    let t0 = Instant::now();
    let driver = SimulationDriver::new(sim, IntervalTimer::new(FRAME))?;
    while driver.is_running() {
        if t0.elapsed() > DEADLINE {
            bail!("layout did not cool within {DEADLINE:?}");
        }
        thread::sleep(Duration::from_millis(10));
    }
    let sim = driver.into_inner();

    info!(
        "{} ticks in {:.2}s; closest to (10, 0): {:?}",
        ticks.load(Ordering::Relaxed),
        t0.elapsed().as_secs_f64(),
        sim.find_index(&[10.0, 0.0], None),
    );

    println!("{}", serde_json::to_string_pretty(sim.nodes())?);
    Ok(())
}

/// Shift every free node so the centroid sits at the origin.
fn center(nodes: &mut [Node], dims: Dimensions, _alpha: f64) -> ForceResult<()> {
    if nodes.is_empty() {
        return Ok(());
    }
    let n = nodes.len() as f64;
    for axis in dims.axes() {
        let mean = nodes
            .iter()
            .map(|node| node.position(axis).unwrap_or(0.0) + node.velocity(axis).unwrap_or(0.0))
            .sum::<f64>()
            / n;
        for node in nodes.iter_mut().filter(|node| node.fixed(axis).is_none()) {
            node.add_velocity(axis, -mean);
        }
    }
    Ok(())
}

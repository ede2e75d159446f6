//! `fl-sim`: force-directed layout simulation.
//!
//! # Tick
//!
//! ```text
//! for each of `iterations`:
//!   ① Cool     : alpha += (alpha_target - alpha) * alpha_decay
//!   ② Forces   : every registered force's apply(alpha), in registry order;
//!                forces only write velocities.
//!   ③ Integrate: per node, per active axis:
//!                   pinned (fx/fy/fz set) → position = fixed, velocity = 0
//!                   otherwise             → velocity *= retained;
//!                                           position += velocity
//! ```
//!
//! # Drive loop
//!
//! ```text
//!            restart                     step sees alpha < alpha_min
//! Stopped ───────────▶ Running ───────────────────────────────────▶ Stopped + "end"
//!    ▲                    │
//!    └────── stop ────────┘
//! ```
//!
//! A [`Simulation`] starts Running.  Each [`Simulation::step`] ticks once and
//! raises "tick"; a [`SimulationDriver`] calls `step` from a
//! [`Timer`][fl_timer::Timer].  Calling [`Simulation::tick`] directly never
//! raises events.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the integration phase on Rayon's thread pool.     |
//! | `serde`    | Serde derives on `Node`, `SimConfig`, `Dimensions`.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fl_core::Node;
//! use fl_sim::{SimulationBuilder, SimulationDriver};
//! use fl_timer::IntervalTimer;
//!
//! let mut sim = SimulationBuilder::new(vec![Node::new(); 100])
//!     .dimensions(3)
//!     .force("center", Centering::default())
//!     .build()?;
//! sim.on("end", |sim| println!("settled at alpha {}", sim.alpha()))?;
//! let driver = SimulationDriver::new(sim, IntervalTimer::default())?;
//! ```

pub mod builder;
pub mod dispatch;
pub mod driver;
pub mod error;
pub mod init;
pub mod sim;


pub use builder::SimulationBuilder;
pub use dispatch::{Dispatch, Handler, Listeners};
pub use driver::SimulationDriver;
pub use error::{SimError, SimResult};
pub use init::{initialize_nodes, seed_position};
pub use sim::{DriveState, SimEvent, Simulation};

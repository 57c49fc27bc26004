//! # Orbitfield Simulation
//!
//! Particles ("orbiters") drawn toward the surface of an animated signed
//! distance field from [`orbitfield_sdf`].
//!
//! Every tick each orbiter samples the active field at its position, is
//! pulled toward the zero surface, kicked by a small deterministic jitter,
//! damped and moved. Its color relaxes toward a target chosen by which side
//! of the surface it is on. Orbiters are independent, so the pass runs in
//! parallel over struct-of-arrays buffers.
//!
//! ## Quick Start
//!
//! ```rust
//! use orbitfield_sim::prelude::*;
//!
//! let settings = OrbiterSettings {
//!     particle_count: 1000,
//!     ..OrbiterSettings::default()
//! };
//! let mut sim = Simulation::new(settings, 42)?;
//! let report = sim.step(1.0 / 60.0);
//! assert_eq!(report.stats.count, 1000);
//! assert_eq!(sim.batches().len(), 1);
//! # Ok::<(), orbitfield_sim::Error>(())
//! ```
//!
//! ## Stages
//!
//! - [`population`]: spawns and retires orbiters between ticks
//! - [`switcher`]: cycles the active model on a timer
//! - [`integrator`]: the per-orbiter update
//! - [`render`]: instance matrices and colors for a renderer

pub mod clock;
pub mod integrator;
pub mod jitter;
pub mod orbiter;
pub mod params;
pub mod population;
pub mod probe;
pub mod render;
pub mod settings;
pub mod simulation;
pub mod switcher;

mod error;

pub use error::{Error, Result};
pub use orbiter::{BufferStats, Orbiter, OrbiterBuffers};
pub use params::{SimulationParameters, TickContext};
pub use settings::{JitterDistribution, OrbiterSettings, load_settings, save_settings};
pub use simulation::{Simulation, TickReport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::clock::SimulationClock;
    pub use crate::integrator::{integrate, integrate_with};
    pub use crate::orbiter::{BufferStats, Orbiter, OrbiterBuffers};
    pub use crate::params::{SimulationParameters, TickContext};
    pub use crate::population::PopulationController;
    pub use crate::probe::{ProbeReport, probe_field};
    pub use crate::render::{InstanceData, InstanceTransform, prepare_instances};
    pub use crate::settings::{JitterDistribution, OrbiterSettings};
    pub use crate::simulation::{Simulation, TickReport};
    pub use crate::switcher::ModelSwitcher;

    pub use orbitfield_sdf::{FieldEvaluator, FieldModel, FieldSample};

    // Math (re-export glam)
    pub use glam::{Vec3, Vec4};

    // Error handling
    pub use crate::{Error, Result};
}

//! Tick driver
//!
//! [`Simulation`] owns the orbiters and every stage around them and runs
//! one tick at a time:
//!
//! 1. Resize the population to the configured count
//! 2. Advance the model switcher
//! 3. Advance the clock and snapshot the parameters
//! 4. Integrate all orbiters in parallel
//! 5. Rebuild the instance buffer from the new state
//!
//! Each stage finishes before the next starts, and the population is only
//! resized while no parallel pass is running.

use crate::clock::SimulationClock;
use crate::integrator::integrate;
use crate::orbiter::{BufferStats, OrbiterBuffers};
use crate::params::{SimulationParameters, TickContext};
use crate::population::{PopulationChange, PopulationController};
use crate::render::{InstanceData, batch_count, instance_batches, prepare_instances_into};
use crate::settings::OrbiterSettings;
use crate::switcher::ModelSwitcher;
use crate::Result;
use orbitfield_sdf::{FieldEvaluator, FieldModel};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub tick: TickContext,
    /// New model if the switcher moved this tick
    pub switched: Option<FieldModel>,
    pub population: PopulationChange,
    pub stats: BufferStats,
    /// Draw calls needed for this tick's instances
    pub batches: usize,
}

/// A running orbiter simulation
#[derive(Debug, Clone)]
pub struct Simulation {
    settings: OrbiterSettings,
    evaluator: FieldEvaluator,
    buffers: OrbiterBuffers,
    population: PopulationController,
    switcher: ModelSwitcher,
    clock: SimulationClock,
    instances: Vec<InstanceData>,
    non_finite: usize,
}

impl Simulation {
    /// Create a simulation with validated `settings`.
    ///
    /// `seed` drives spawning and model switching. The population is empty
    /// until the first tick.
    pub fn new(settings: OrbiterSettings, seed: u64) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            buffers: OrbiterBuffers::with_capacity(settings.particle_count),
            settings,
            evaluator: FieldEvaluator::new(),
            population: PopulationController::new(seed),
            switcher: ModelSwitcher::new(FieldModel::default(), seed.wrapping_add(1)),
            clock: SimulationClock::new(),
            instances: Vec::new(),
            non_finite: 0,
        })
    }

    /// Replace the model switcher
    pub fn with_switcher(mut self, switcher: ModelSwitcher) -> Self {
        self.switcher = switcher;
        self
    }

    pub fn settings(&self) -> &OrbiterSettings {
        &self.settings
    }

    /// Swap in new settings; they take effect on the next tick
    pub fn set_settings(&mut self, settings: OrbiterSettings) -> Result<()> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Change the target population; applied on the next tick
    pub fn set_particle_count(&mut self, count: usize) -> Result<()> {
        self.set_settings(OrbiterSettings {
            particle_count: count,
            ..self.settings.clone()
        })
    }

    pub fn model(&self) -> FieldModel {
        self.switcher.current()
    }

    pub fn switcher(&self) -> &ModelSwitcher {
        &self.switcher
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn buffers(&self) -> &OrbiterBuffers {
        &self.buffers
    }

    /// Direct access to the orbiters between ticks
    pub fn buffers_mut(&mut self) -> &mut OrbiterBuffers {
        &mut self.buffers
    }

    /// Instances built by the last tick, in orbiter order
    pub fn instances(&self) -> &[InstanceData] {
        &self.instances
    }

    /// Last tick's instances split into draw calls
    pub fn batches(&self) -> impl ExactSizeIterator<Item = &[InstanceData]> {
        instance_batches(&self.instances)
    }

    /// Run one tick of `delta_time` seconds
    pub fn step(&mut self, delta_time: f32) -> TickReport {
        let population = self
            .population
            .resize(&mut self.buffers, self.settings.particle_count);

        let switched = self.switcher.advance(delta_time);
        let tick = self.clock.advance(delta_time, self.switcher.current());
        let params = SimulationParameters::new(&self.settings, tick);

        integrate(&mut self.buffers, &self.evaluator, &params);
        prepare_instances_into(&self.buffers, params.speed_stretch, &mut self.instances);

        let stats = self.buffers.stats();
        if stats.non_finite > self.non_finite {
            tracing::warn!(
                "{} orbiters went non-finite on frame {} ({})",
                stats.non_finite - self.non_finite,
                tick.frame,
                tick.model
            );
        }
        self.non_finite = stats.non_finite;

        tracing::debug!(
            "Frame {}: {} orbiters, model {}, mean speed {:.4}",
            tick.frame,
            stats.count,
            tick.model,
            stats.mean_speed
        );

        TickReport {
            tick,
            switched,
            population,
            stats,
            batches: batch_count(self.instances.len()),
        }
    }

    /// Run `ticks` ticks of `delta_time` seconds, returning the last report
    pub fn run(&mut self, ticks: usize, delta_time: f32) -> Option<TickReport> {
        (0..ticks).map(|_| self.step(delta_time)).last()
    }
}

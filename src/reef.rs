/*
 * Reef Module
 *
 * This module defines the Reef: the owner of the creature population, the kelp stalks,
 * the flock parameters and the obstacle hook. A host (render loop, test, benchmark)
 * builds one Reef and calls `tick()` once per frame, reading creature positions and
 * scales in between.
 *
 * A Reef is not meant to be ticked from two threads at once; `tick()` takes `&mut self`.
 */

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::time::Instant;
use tracing::{info, trace};

use crate::creature::{Creature, Kelp};
use crate::debug::DebugInfo;
use crate::error::ReefError;
use crate::obstacle::{Inert, ObstacleInteraction};
use crate::params::{FlockParams, ReefParams, SpawnAxis};
use crate::physics;
use crate::vector::{checked_div, Vector3};

pub struct Reef<O: ObstacleInteraction = Inert> {
    creatures: Vec<Creature>,
    kelp: Vec<Kelp>,
    params: FlockParams,
    obstacles: O,
    debug_info: DebugInfo,
}

impl Reef<Inert> {
    // Build the population described by `reef_params`
    pub fn new(reef_params: &ReefParams, params: FlockParams) -> Result<Self, ReefError> {
        reef_params.validate()?;
        params.validate()?;

        let mut rng: Box<dyn RngCore> = match reef_params.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::thread_rng()),
        };

        let mut creatures = Vec::with_capacity(reef_params.total_creatures());
        for shoal in &reef_params.shoals {
            for _ in 0..shoal.count {
                let position = Vector3::new(
                    spawn(&mut rng, shoal.spawn_x),
                    spawn(&mut rng, shoal.spawn_y),
                    spawn(&mut rng, shoal.spawn_z),
                );
                // Ids are handed out in creation order
                let id = creatures.len();
                creatures.push(Creature::new(id, position, shoal.label.as_str(), shoal.tier, shoal.scale));
            }
        }

        let kelp_params = &reef_params.kelp;
        let kelp = (0..kelp_params.count)
            .map(|_| {
                Kelp::new(Vector3::new(
                    spawn(&mut rng, kelp_params.spawn_x),
                    kelp_params.anchor_y,
                    spawn(&mut rng, kelp_params.spawn_z),
                ))
            })
            .collect::<Vec<_>>();

        info!(
            creatures = creatures.len(),
            kelp = kelp.len(),
            seeded = reef_params.seed.is_some(),
            "reef populated"
        );

        Ok(Self {
            creatures,
            kelp,
            params,
            obstacles: Inert,
            debug_info: DebugInfo::default(),
        })
    }

    /// Build a reef from an explicit population. Creature ids are reassigned 0..N-1
    /// in the order given.
    pub fn from_parts(mut creatures: Vec<Creature>, kelp: Vec<Kelp>, params: FlockParams) -> Result<Self, ReefError> {
        params.validate()?;

        for (id, creature) in creatures.iter_mut().enumerate() {
            creature.set_id(id);
        }

        Ok(Self {
            creatures,
            kelp,
            params,
            obstacles: Inert,
            debug_info: DebugInfo::default(),
        })
    }
}

impl<O: ObstacleInteraction> Reef<O> {
    /// Replace the obstacle hook run after every flock step.
    pub fn with_obstacles<P: ObstacleInteraction>(self, obstacles: P) -> Reef<P> {
        Reef {
            creatures: self.creatures,
            kelp: self.kelp,
            params: self.params,
            obstacles,
            debug_info: self.debug_info,
        }
    }

    /// Advance every creature by one step. An empty reef is left untouched.
    pub fn tick(&mut self) {
        if self.creatures.is_empty() {
            return;
        }

        let started = Instant::now();
        self.debug_info.begin_tick(self.creatures.len());

        physics::update_creatures(&mut self.creatures, &self.params, &mut self.debug_info);
        self.obstacles.interact(&self.kelp, &self.creatures);

        self.debug_info.end_tick(started.elapsed());
        trace!(
            tick = self.debug_info.ticks,
            elapsed_us = self.debug_info.last_tick_time.as_micros() as u64,
            "tick"
        );
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn kelp(&self) -> &[Kelp] {
        &self.kelp
    }

    pub fn params(&self) -> &FlockParams {
        &self.params
    }

    pub fn debug_info(&self) -> &DebugInfo {
        &self.debug_info
    }

    pub fn obstacles(&self) -> &O {
        &self.obstacles
    }

    // Mean position of the whole flock, None when empty
    pub fn centroid(&self) -> Option<Vector3> {
        let mut sum = Vector3::ZERO;
        for creature in &self.creatures {
            sum += creature.position();
        }
        checked_div(sum, self.creatures.len() as f32)
    }
}

// Draw one coordinate on the integer spawn grid
fn spawn(rng: &mut impl Rng, axis: SpawnAxis) -> f32 {
    rng.gen_range(0..axis.span) as f32 + axis.offset
}

/*
 * Physics Module
 *
 * This module advances the flock by one step. For every creature:
 * 1. Compute cohesion, separation and velocity matching against the flock
 * 2. Pass each rule through max-component normalization
 * 3. velocity = (velocity + rule1 + rule2 + rule3) * damping
 * 4. position = position + velocity
 *
 * Cost is O(n^2) in the creature count. Three ways of running the step:
 * - Snapshot, sequential: every creature reads a pre-tick copy of the flock
 * - Snapshot, parallel: same reads, chunks of creatures updated on the rayon pool
 * - In place: creatures are updated in order and later ones see earlier results
 *
 * A creature whose update comes out non-finite keeps its pre-tick state for that tick.
 */

use rayon::prelude::*;
use std::ops::Add;
use tracing::{debug, warn};

use crate::creature::Creature;
use crate::debug::DebugInfo;
use crate::params::{FlockParams, UpdateOrder};
use crate::vector::{normalize, Vector3};

// New kinematic state for one creature
#[derive(Debug, Clone, Copy, PartialEq)]
struct Step {
    velocity: Vector3,
    position: Vector3,
    skipped_rules: bool,
}

// Per-chunk bookkeeping, summed after a parallel pass
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    skipped_rules: usize,
    frozen: usize,
}

impl Add for Tally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            skipped_rules: self.skipped_rules + rhs.skipped_rules,
            frozen: self.frozen + rhs.frozen,
        }
    }
}

// Update every creature by one step
pub fn update_creatures(creatures: &mut [Creature], params: &FlockParams, debug_info: &mut DebugInfo) {
    if creatures.is_empty() {
        return;
    }
    if creatures.len() < 2 {
        debug!(creatures = creatures.len(), "flock too small to average; cohesion and matching skipped");
    }

    let tally = match params.update_order {
        UpdateOrder::Snapshot if params.parallel => {
            let chunk_size = std::cmp::max(creatures.len() / rayon::current_num_threads(), 1);
            debug_info.chunk_size = Some(chunk_size);
            update_snapshot_parallel(creatures, params, chunk_size)
        }
        UpdateOrder::Snapshot => update_snapshot(creatures, params),
        UpdateOrder::InPlace => update_in_place(creatures, params),
    };

    debug_info.skipped_rules += tally.skipped_rules;
    debug_info.frozen += tally.frozen;
}

fn update_snapshot(creatures: &mut [Creature], params: &FlockParams) -> Tally {
    // Create a copy of the flock for the calculations
    let snapshot = creatures.to_vec();

    let mut tally = Tally::default();
    for creature in creatures.iter_mut() {
        let step = steer(creature, &snapshot, params);
        tally = tally + apply(creature, step);
    }
    tally
}

fn update_snapshot_parallel(creatures: &mut [Creature], params: &FlockParams, chunk_size: usize) -> Tally {
    let snapshot = creatures.to_vec();

    // Process creatures in parallel chunks to reduce synchronization overhead
    creatures
        .par_chunks_mut(chunk_size)
        .map(|chunk| {
            let mut tally = Tally::default();
            for creature in chunk {
                let step = steer(creature, &snapshot, params);
                tally = tally + apply(creature, step);
            }
            tally
        })
        .reduce(Tally::default, Tally::add)
}

fn update_in_place(creatures: &mut [Creature], params: &FlockParams) -> Tally {
    let mut tally = Tally::default();
    for i in 0..creatures.len() {
        let step = steer(&creatures[i], creatures, params);
        tally = tally + apply(&mut creatures[i], step);
    }
    tally
}

// Compute the next state of `creature` as seen against `flock`
fn steer(creature: &Creature, flock: &[Creature], params: &FlockParams) -> Step {
    let cohesion = creature.cohesion(flock, params.cohesion_divisor);
    let matching = creature.velocity_matching(flock, params.velocity_match_divisor);
    let skipped_rules = cohesion.is_none() || matching.is_none();

    let rule1 = normalize(cohesion.unwrap_or(Vector3::ZERO));
    let rule2 = normalize(creature.separation(flock, params.separation_radius, params.metric));
    let rule3 = normalize(matching.unwrap_or(Vector3::ZERO));

    let velocity = ((creature.velocity + rule1) + (rule2 + rule3)) * params.damping;
    let position = creature.position + velocity;

    Step {
        velocity,
        position,
        skipped_rules,
    }
}

fn apply(creature: &mut Creature, step: Step) -> Tally {
    let mut tally = Tally {
        skipped_rules: usize::from(step.skipped_rules),
        frozen: 0,
    };

    if step.velocity.is_finite() && step.position.is_finite() {
        creature.velocity = step.velocity;
        creature.position = step.position;
    } else {
        warn!(id = creature.id(), "non-finite update, creature frozen for this tick");
        tally.frozen = 1;
    }

    tally
}

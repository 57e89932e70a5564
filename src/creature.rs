/*
 * Creature Module
 *
 * This module defines the Creature (boid) and Kelp (static obstacle) entities.
 * Each creature follows three rules, all measured against the rest of the flock:
 * 1. Cohesion: Steer towards the centroid of the other creatures
 * 2. Separation: Move away from creatures inside the separation radius
 * 3. Velocity matching: Steer towards the average velocity of the other creatures
 *
 * The rules only ever read the slice they are handed. The engine decides whether that
 * slice is a pre-tick snapshot or the live population.
 */

use crate::vector::{checked_div, DistanceMetric, Vector3};
use crate::INITIAL_VELOCITY;

#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    id: usize,
    pub(crate) position: Vector3,
    pub(crate) velocity: Vector3,
    scale: f32,
    tier: u32,
    label: String,
}

impl Creature {
    pub fn new(id: usize, position: Vector3, label: impl Into<String>, tier: u32, scale: f32) -> Self {
        Self {
            id,
            position,
            velocity: INITIAL_VELOCITY,
            scale,
            tier,
            label: label.into(),
        }
    }

    // Identity used to skip self during neighbour scans
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn velocity(&self) -> Vector3 {
        self.velocity
    }

    /// Visual size multiplier. Not read by the simulation.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Size class. Reserved; the current rules treat every tier alike.
    pub fn tier(&self) -> u32 {
        self.tier
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn set_id(&mut self, id: usize) {
        self.id = id;
    }

    // Rule 1: steer towards the centroid of everyone else.
    // Returns None when there is nobody else to average over.
    pub fn cohesion(&self, flock: &[Creature], divisor: f32) -> Option<Vector3> {
        let mut center_of_mass = Vector3::ZERO;
        let mut others = 0usize;

        for other in flock {
            if other.id != self.id {
                center_of_mass += other.position;
                others += 1;
            }
        }

        let centroid = checked_div(center_of_mass, others as f32)?;
        Some((centroid - self.position) / divisor)
    }

    // Rule 2: push away from every creature closer than `radius`
    pub fn separation(&self, flock: &[Creature], radius: f32, metric: DistanceMetric) -> Vector3 {
        let mut displacement = Vector3::ZERO;

        for other in flock {
            if other.id == self.id {
                continue;
            }

            if metric.measure(other.position, self.position) < radius {
                displacement = displacement - (other.position - self.position);
            }
        }

        displacement
    }

    // Rule 3: match the average velocity of everyone else.
    // Returns None when there is nobody else to average over.
    pub fn velocity_matching(&self, flock: &[Creature], divisor: f32) -> Option<Vector3> {
        let mut perceived_velocity = Vector3::ZERO;
        let mut others = 0usize;

        for other in flock {
            if other.id != self.id {
                perceived_velocity += other.velocity;
                others += 1;
            }
        }

        let average = checked_div(perceived_velocity, others as f32)?;
        Some((average - self.velocity) / divisor)
    }
}

/// A kelp stalk. Anchored where it was planted; the simulation never moves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kelp {
    position: Vector3,
}

impl Kelp {
    pub fn new(position: Vector3) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }
}

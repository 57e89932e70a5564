/*
 * Obstacle Module
 *
 * Extension point for creature/kelp interaction. An implementation is handed shared
 * slices of the kelp stalks and the creatures after each flock step, so it can look
 * but never move anything.
 *
 * Two implementations ship:
 * - Inert: does nothing (the reef default)
 * - KelpScan: collects candidate push vectors per stalk and keeps them for inspection.
 *   No collision response is applied.
 */

use crate::creature::{Creature, Kelp};
use crate::vector::DistanceMetric;
use crate::KELP_CLEARANCE;

pub trait ObstacleInteraction: Send {
    fn interact(&mut self, kelp: &[Kelp], creatures: &[Creature]);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Inert;

impl ObstacleInteraction for Inert {
    fn interact(&mut self, _kelp: &[Kelp], _creatures: &[Creature]) {}
}

/// One creature seen by a kelp stalk during a scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KelpContact {
    pub creature_id: usize,
    /// Creature height relative to the stalk anchor.
    pub offset_y: f32,
    pub push_x: f32,
    pub push_z: f32,
    pub radius: f32,
}

#[derive(Debug, Clone)]
pub struct KelpScan {
    clearance: f32,
    metric: DistanceMetric,
    // One entry per stalk, in kelp order
    contacts: Vec<Vec<KelpContact>>,
}

impl KelpScan {
    pub fn new(clearance: f32, metric: DistanceMetric) -> Self {
        Self {
            clearance,
            metric,
            contacts: Vec::new(),
        }
    }

    /// Contacts gathered by the most recent scan, indexed by kelp slot.
    pub fn contacts(&self) -> &[Vec<KelpContact>] {
        &self.contacts
    }
}

impl Default for KelpScan {
    fn default() -> Self {
        Self::new(KELP_CLEARANCE, DistanceMetric::Flat)
    }
}

impl ObstacleInteraction for KelpScan {
    fn interact(&mut self, kelp: &[Kelp], creatures: &[Creature]) {
        self.contacts.clear();

        for stalk in kelp {
            let anchor = stalk.position();
            let found = creatures
                .iter()
                .filter(|creature| self.metric.measure(anchor, creature.position()) > self.clearance)
                .map(|creature| {
                    let position = creature.position();
                    KelpContact {
                        creature_id: creature.id(),
                        offset_y: position.y - anchor.y,
                        push_x: position.x - anchor.x,
                        push_z: position.z - anchor.z,
                        radius: 1.0,
                    }
                })
                .collect();
            self.contacts.push(found);
        }

        // Nothing is applied; the contacts are only recorded
    }
}

/*
 * Simulation Parameters Module
 *
 * This module defines the parameters of the reef simulation:
 * - FlockParams: rule weights, damping and update policy read by every tick
 * - ReefParams: the population to build (shoals of creatures and kelp stalks)
 *
 * Defaults reproduce the tuned reef. Both structs derive serde so a host can load them
 * from whatever format it already uses; this crate never touches the filesystem.
 */

use serde::{Deserialize, Serialize};

use crate::error::ReefError;
use crate::vector::DistanceMetric;

/// How creatures observe each other within a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrder {
    /// Every creature reads the pre-tick state of the flock.
    #[default]
    Snapshot,
    /// Creatures are updated one after another in place, so later creatures see
    /// the already-moved state of earlier ones.
    InPlace,
}

// Parameters read by every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockParams {
    /// Rule 1 result is divided by this.
    pub cohesion_divisor: f32,
    /// Creatures closer than this repel each other (rule 2).
    pub separation_radius: f32,
    /// Rule 3 result is divided by this.
    pub velocity_match_divisor: f32,
    /// Applied to the combined velocity every tick.
    pub damping: f32,
    pub metric: DistanceMetric,
    pub update_order: UpdateOrder,
    /// Compute the snapshot step with rayon.
    pub parallel: bool,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            cohesion_divisor: 100.0,
            separation_radius: 12.0,
            velocity_match_divisor: 8.0,
            damping: 0.1,
            metric: DistanceMetric::Flat,
            update_order: UpdateOrder::Snapshot,
            parallel: false,
        }
    }
}

impl FlockParams {
    pub fn validate(&self) -> Result<(), ReefError> {
        positive("cohesion_divisor", self.cohesion_divisor)?;
        positive("separation_radius", self.separation_radius)?;
        positive("velocity_match_divisor", self.velocity_match_divisor)?;
        if !self.damping.is_finite() {
            return Err(ReefError::InvalidParam {
                name: "damping",
                value: self.damping,
            });
        }
        if self.parallel && self.update_order == UpdateOrder::InPlace {
            return Err(ReefError::ParallelInPlace);
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ReefError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ReefError::InvalidParam { name, value })
    }
}

/// Integer spawn grid along one axis: `offset + uniform(0..span)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnAxis {
    pub span: u32,
    pub offset: f32,
}

impl SpawnAxis {
    pub const fn new(span: u32, offset: f32) -> Self {
        Self { span, offset }
    }

    pub fn is_empty(&self) -> bool {
        self.span == 0
    }
}

// A group of identical creatures spawned together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoalParams {
    pub label: String,
    pub tier: u32,
    pub scale: f32,
    pub count: usize,
    pub spawn_x: SpawnAxis,
    pub spawn_y: SpawnAxis,
    pub spawn_z: SpawnAxis,
}

impl Default for ShoalParams {
    fn default() -> Self {
        Self {
            label: "Blacktip Shark".to_string(),
            tier: 3,
            scale: 1.0,
            count: 48,
            spawn_x: SpawnAxis::new(18, -10.0),
            spawn_y: SpawnAxis::new(12, 0.0),
            spawn_z: SpawnAxis::new(18, -20.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KelpParams {
    pub count: usize,
    pub spawn_x: SpawnAxis,
    pub spawn_z: SpawnAxis,
    /// Height at which every stalk is anchored.
    pub anchor_y: f32,
}

impl Default for KelpParams {
    fn default() -> Self {
        Self {
            count: 0,
            spawn_x: SpawnAxis::new(24, -12.0),
            spawn_z: SpawnAxis::new(12, -12.0),
            anchor_y: 9.6,
        }
    }
}

// Description of the population a Reef is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReefParams {
    /// Seed for initial placement. `None` draws from the thread RNG.
    pub seed: Option<u64>,
    pub shoals: Vec<ShoalParams>,
    pub kelp: KelpParams,
    /// Upper bound on the total creature count; a tick is O(n^2).
    pub max_creatures: usize,
}

impl Default for ReefParams {
    fn default() -> Self {
        Self {
            seed: None,
            shoals: vec![ShoalParams::default()],
            kelp: KelpParams::default(),
            max_creatures: 150_000,
        }
    }
}

impl ReefParams {
    pub fn total_creatures(&self) -> usize {
        self.shoals.iter().map(|shoal| shoal.count).sum()
    }

    pub fn validate(&self) -> Result<(), ReefError> {
        let requested = self.total_creatures();
        if requested > self.max_creatures {
            return Err(ReefError::TooManyCreatures {
                requested,
                max: self.max_creatures,
            });
        }

        for shoal in &self.shoals {
            if shoal.count > 0
                && (shoal.spawn_x.is_empty() || shoal.spawn_y.is_empty() || shoal.spawn_z.is_empty())
            {
                return Err(ReefError::InvalidSpawnBounds {
                    label: shoal.label.clone(),
                });
            }
            if !shoal.scale.is_finite() {
                return Err(ReefError::InvalidParam {
                    name: "scale",
                    value: shoal.scale,
                });
            }
        }

        if self.kelp.count > 0 && (self.kelp.spawn_x.is_empty() || self.kelp.spawn_z.is_empty()) {
            return Err(ReefError::InvalidSpawnBounds {
                label: "kelp".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_reef() {
        let flock = FlockParams::default();
        assert_eq!(flock.cohesion_divisor, 100.0);
        assert_eq!(flock.separation_radius, 12.0);
        assert_eq!(flock.velocity_match_divisor, 8.0);
        assert_eq!(flock.damping, 0.1);
        assert_eq!(flock.metric, DistanceMetric::Flat);
        assert!(flock.validate().is_ok());

        let reef = ReefParams::default();
        assert_eq!(reef.total_creatures(), 48);
        assert_eq!(reef.kelp.count, 0);
        assert!(reef.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{ "separation_radius": 6.0, "metric": "euclidean" }"#;
        let params: FlockParams = serde_json::from_str(json).expect("partial params should parse");
        assert_eq!(params.separation_radius, 6.0);
        assert_eq!(params.metric, DistanceMetric::Euclidean);
        assert_eq!(params.damping, 0.1);
        assert_eq!(params.update_order, UpdateOrder::Snapshot);
    }

    #[test]
    fn rejects_zero_divisor() {
        let params = FlockParams {
            cohesion_divisor: 0.0,
            ..FlockParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ReefError::InvalidParam { name: "cohesion_divisor", .. })
        ));
    }

    #[test]
    fn rejects_parallel_in_place() {
        let params = FlockParams {
            parallel: true,
            update_order: UpdateOrder::InPlace,
            ..FlockParams::default()
        };
        assert_eq!(params.validate(), Err(ReefError::ParallelInPlace));
    }

    #[test]
    fn rejects_oversized_population() {
        let params = ReefParams {
            max_creatures: 10,
            ..ReefParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(ReefError::TooManyCreatures { requested: 48, max: 10 })
        );
    }

    #[test]
    fn rejects_empty_spawn_axis() {
        let mut params = ReefParams::default();
        params.shoals[0].spawn_y = SpawnAxis::new(0, 0.0);
        assert!(matches!(params.validate(), Err(ReefError::InvalidSpawnBounds { .. })));
    }
}

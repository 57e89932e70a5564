/*
 * Reef Boids - Module Definitions
 *
 * This file defines the module structure for the reef flocking simulation.
 * The host owns pacing: build a Reef, call `tick()` once per frame, read positions.
 */

// Re-export key components for easier access
pub use creature::{Creature, Kelp};
pub use debug::DebugInfo;
pub use error::ReefError;
pub use obstacle::{Inert, KelpContact, KelpScan, ObstacleInteraction};
pub use params::{FlockParams, KelpParams, ReefParams, ShoalParams, SpawnAxis, UpdateOrder};
pub use reef::Reef;
pub use vector::{DistanceMetric, Vector3};

// Define modules
pub mod creature;
pub mod debug;
pub mod error;
pub mod obstacle;
pub mod params;
pub mod physics;
pub mod reef;
pub mod vector;

// Constants
pub const INITIAL_VELOCITY: Vector3 = Vector3::splat(0.1);
pub const KELP_CLEARANCE: f32 = 4.0;

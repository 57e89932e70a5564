/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that the reef updates after every tick.
 * The host reads it for overlays or logs; the simulation never reads it back.
 *
 * Includes metrics for:
 * - Tick count and duration of the last tick
 * - Creatures whose cohesion / velocity-matching rules were skipped (nobody to average)
 * - Creatures frozen because their update produced non-finite values
 * - Parallel processing chunk size
 */

use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugInfo {
    pub ticks: u64,
    pub last_tick_time: Duration,
    pub creatures: usize,
    pub skipped_rules: usize,
    pub frozen: usize,
    pub chunk_size: Option<usize>,
}

impl DebugInfo {
    // Clear the per-tick counters before a new tick
    pub(crate) fn begin_tick(&mut self, creatures: usize) {
        self.creatures = creatures;
        self.skipped_rules = 0;
        self.frozen = 0;
        self.chunk_size = None;
    }

    pub(crate) fn end_tick(&mut self, elapsed: Duration) {
        self.ticks += 1;
        self.last_tick_time = elapsed;
    }
}

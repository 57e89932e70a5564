/*
 * Reef Flocking Simulation (headless)
 *
 * Stands in for the render loop: builds the default reef, ticks it once per frame and
 * logs how the shoal moves. Set RUST_LOG to control verbosity, REEF_FRAMES for the
 * number of frames and REEF_SEED for a reproducible run.
 */

use reef_boids::{FlockParams, Reef, ReefError, ReefParams};
use tracing::{info, warn};

// One simulated second at 60 frames per second
const DEFAULT_FRAMES: u64 = 60;
const REPORT_EVERY: u64 = 10;

fn main() -> Result<(), ReefError> {
    init_tracing();

    let frames = env_parse("REEF_FRAMES").unwrap_or(DEFAULT_FRAMES);
    let reef_params = ReefParams {
        seed: env_parse("REEF_SEED"),
        ..ReefParams::default()
    };

    let mut reef = Reef::new(&reef_params, FlockParams::default())?;

    for frame in 1..=frames {
        reef.tick();

        if frame % REPORT_EVERY == 0 || frame == frames {
            let info = reef.debug_info();
            let centroid = reef.centroid().unwrap_or_default();
            info!(
                frame,
                centroid_x = centroid.x,
                centroid_y = centroid.y,
                centroid_z = centroid.z,
                frozen = info.frozen,
                tick_us = info.last_tick_time.as_micros() as u64,
                "frame"
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// Unset means default; set but unparsable is reported and then treated as unset
fn env_parse(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, value = %raw, error = %err, "ignoring unparsable environment value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_parse_reads_trimmed_numbers() {
        std::env::set_var("REEF_TEST_FRAMES_OK", " 42 ");
        assert_eq!(env_parse("REEF_TEST_FRAMES_OK"), Some(42));
    }

    #[test]
    fn env_parse_unset_is_none() {
        std::env::remove_var("REEF_TEST_FRAMES_UNSET");
        assert_eq!(env_parse("REEF_TEST_FRAMES_UNSET"), None);
    }

    #[test]
    fn env_parse_rejects_garbage() {
        std::env::set_var("REEF_TEST_FRAMES_BAD", "sixty");
        assert_eq!(env_parse("REEF_TEST_FRAMES_BAD"), None);
        std::env::set_var("REEF_TEST_FRAMES_BAD", "-5");
        assert_eq!(env_parse("REEF_TEST_FRAMES_BAD"), None);
    }
}

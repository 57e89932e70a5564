use thiserror::Error;

/// Errors raised while building a reef. Ticking never fails.
#[derive(Debug, Error, PartialEq)]
pub enum ReefError {
    #[error("parameter `{name}` has invalid value {value}")]
    InvalidParam { name: &'static str, value: f32 },
    #[error("parallel ticking requires the snapshot update order")]
    ParallelInPlace,
    #[error("requested {requested} creatures, limit is {max}")]
    TooManyCreatures { requested: usize, max: usize },
    #[error("shoal `{label}` has an empty spawn range")]
    InvalidSpawnBounds { label: String },
}

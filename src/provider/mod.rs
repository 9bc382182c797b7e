use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use thiserror::Error;

use crate::config::SourcesConfig;

/// The recognized number sources, keyed by one letter on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKey {
    Prime,
    Fibonacci,
    Even,
    Random,
}

impl SourceKey {
    /// Parses the one-letter wire key. Callers must reject `None` before
    /// asking a provider for numbers.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p" => Some(Self::Prime),
            "f" => Some(Self::Fibonacci),
            "e" => Some(Self::Even),
            "r" => Some(Self::Random),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream source unavailable: {0}")]
    Upstream(String),
}

/// Produces one candidate batch per request for a given source key.
#[async_trait]
pub trait NumberSource: Send + Sync {
    async fn fetch(&self, key: SourceKey) -> Result<Vec<i64>, FetchError>;
}

/// In-process generators standing in for the upstream numbers API.
pub struct LocalSource {
    config: SourcesConfig,
    rng: Mutex<StdRng>,
}

impl LocalSource {
    pub fn new(config: SourcesConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Seeded variant so tests get a deterministic random source.
    pub fn with_rng(config: SourcesConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng: Mutex::new(rng),
        }
    }

    fn fibonacci(&self, count: usize) -> Vec<i64> {
        let mut fibo: Vec<i64> = Vec::with_capacity(count);
        for i in 0..count {
            let next = match i {
                0 => 0,
                1 => 1,
                _ => fibo[i - 1] + fibo[i - 2],
            };
            fibo.push(next);
        }
        fibo
    }

    fn evens(&self, limit: i64) -> Vec<i64> {
        (2..=limit).step_by(2).collect()
    }

    fn randoms(&self, count: usize, min: i64, max: i64) -> Vec<i64> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        (0..count).map(|_| rng.gen_range(min..=max)).collect()
    }
}

#[async_trait]
impl NumberSource for LocalSource {
    async fn fetch(&self, key: SourceKey) -> Result<Vec<i64>, FetchError> {
        let batch = match key {
            // Reserved: no prime generator is wired up yet, the upstream
            // contract for 'p' is an empty batch rather than an error.
            SourceKey::Prime => Vec::new(),
            SourceKey::Fibonacci => self.fibonacci(self.config.fibonacci_count),
            SourceKey::Even => self.evens(self.config.even_limit),
            SourceKey::Random => self.randoms(
                self.config.random_count,
                self.config.random_min,
                self.config.random_max,
            ),
        };
        Ok(batch)
    }
}

impl std::fmt::Debug for LocalSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSource")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

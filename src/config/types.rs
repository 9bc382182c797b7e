use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

fn default_listen() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            public_dir: default_public_dir(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    10
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_fibonacci_count")]
    pub fibonacci_count: usize,
    #[serde(default = "default_even_limit")]
    pub even_limit: i64,
    #[serde(default = "default_random_count")]
    pub random_count: usize,
    #[serde(default = "default_random_min")]
    pub random_min: i64,
    #[serde(default = "default_random_max")]
    pub random_max: i64,
}

fn default_fibonacci_count() -> usize {
    10
}

fn default_even_limit() -> i64 {
    20
}

fn default_random_count() -> usize {
    10
}

fn default_random_min() -> i64 {
    1
}

fn default_random_max() -> i64 {
    100
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            fibonacci_count: default_fibonacci_count(),
            even_limit: default_even_limit(),
            random_count: default_random_count(),
            random_min: default_random_min(),
            random_max: default_random_max(),
        }
    }
}

//! Configuration system
//!
//! Tunables for the intersection routines, loadable from TOML or RON.

pub use serde::{Serialize, Deserialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Format is picked by extension
        let config = if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        log::debug!("Loaded configuration from {}", path);
        Ok(config)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value parsed but is out of range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Default GJK iteration cap
pub const DEFAULT_GJK_MAX_ITERATIONS: usize = 32;

/// Default tolerance added to the `|C|` terms of the OBB separating-axis test
pub const DEFAULT_SAT_EPSILON: f32 = 1e-6;

/// Default object count below which the parallel culler stays serial
pub const DEFAULT_PARALLEL_MIN_BATCH: usize = 1024;

/// Tunables shared by the intersection and culling routines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectionConfig {
    /// Maximum GJK iterations before reporting "no intersection"
    pub gjk_max_iterations: usize,

    /// Tolerance added to every `|dot(A.axis[i], B.axis[j])|` in the OBB test
    ///
    /// Keeps near-parallel cross axes from reporting false separations.
    pub sat_epsilon: f32,

    /// Minimum batch size for the parallel culling path
    pub parallel_min_batch: usize,
}

impl Default for IntersectionConfig {
    fn default() -> Self {
        Self {
            gjk_max_iterations: DEFAULT_GJK_MAX_ITERATIONS,
            sat_epsilon: DEFAULT_SAT_EPSILON,
            parallel_min_batch: DEFAULT_PARALLEL_MIN_BATCH,
        }
    }
}

impl Config for IntersectionConfig {}

impl IntersectionConfig {
    /// Check the loaded values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gjk_max_iterations == 0 {
            return Err(ConfigError::Invalid {
                field: "gjk_max_iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.sat_epsilon.is_finite() || self.sat_epsilon < 0.0 {
            return Err(ConfigError::Invalid {
                field: "sat_epsilon",
                reason: format!("must be finite and non-negative, got {}", self.sat_epsilon),
            });
        }
        Ok(())
    }

    /// Load from file and validate in one step
    pub fn load_validated(path: &str) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }
}

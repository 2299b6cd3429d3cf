//! Engine configuration.
//!
//! The core does not parse arguments or files itself; the caller supplies a
//! ready-made [`EngineConfig`]. The builder clamps values into sane ranges,
//! and [`EngineConfig::validate`] rejects configurations that would make the
//! engine degenerate.

use thiserror::Error;

/// Configuration error for out-of-range engine parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Smoothing factor must lie strictly inside (0, 1).
    #[error("smoothing factor alpha must be in (0, 1), got {value}")]
    AlphaOutOfRange {
        /// The rejected value.
        value: f32,
    },

    /// Motion threshold must be a positive speed.
    #[error("motion threshold must be > 0 px/s, got {value}")]
    NonPositiveMotionThreshold {
        /// The rejected value.
        value: f32,
    },

    /// Stop debounce needs at least one tick.
    #[error("stop_frames_required must be >= 1, got {value}")]
    ZeroStopFrames {
        /// The rejected value.
        value: u32,
    },
}

/// Tunables for the tracker and the putt lifecycle engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// EMA smoothing factor in (0, 1); higher = more responsive. Governs
    /// both position and velocity smoothing so the two stay numerically
    /// consistent.
    pub alpha: f32,
    /// Consecutive frames without a detection before a track is considered
    /// lost (not coasting).
    pub max_lost: u32,
    /// Ball speed (px/s) above which a putt is considered in motion.
    /// Compared strictly; equality counts as not moving.
    pub motion_threshold: f32,
    /// Consecutive below-threshold ticks required before a moving putt is
    /// declared stopped.
    pub stop_frames_required: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alpha: 0.6,
            max_lost: 15,
            motion_threshold: 5.0,
            stop_frames_required: 15,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration builder.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Check all parameters against their documented ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ConfigError::AlphaOutOfRange { value: self.alpha });
        }
        if !(self.motion_threshold > 0.0) {
            return Err(ConfigError::NonPositiveMotionThreshold {
                value: self.motion_threshold,
            });
        }
        if self.stop_frames_required < 1 {
            return Err(ConfigError::ZeroStopFrames {
                value: self.stop_frames_required,
            });
        }
        Ok(())
    }
}

/// Builder for [`EngineConfig`].
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Set the EMA smoothing factor, clamped into (0, 1).
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.config.alpha = alpha.clamp(0.01, 0.99);
        self
    }

    /// Set the lost-track cutoff in frames.
    pub fn max_lost(mut self, frames: u32) -> Self {
        self.config.max_lost = frames;
        self
    }

    /// Set the motion speed threshold in px/s, floored just above zero.
    pub fn motion_threshold(mut self, threshold: f32) -> Self {
        self.config.motion_threshold = threshold.max(f32::EPSILON);
        self
    }

    /// Set the stop debounce length in ticks, floored at 1.
    pub fn stop_frames_required(mut self, frames: u32) -> Self {
        self.config.stop_frames_required = frames.max(1);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> EngineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_clamps_alpha() {
        let config = EngineConfig::builder().alpha(1.5).build();
        assert!(config.alpha < 1.0);
        assert!(config.validate().is_ok());

        let config = EngineConfig::builder().alpha(-0.2).build();
        assert!(config.alpha > 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_floors_stop_frames() {
        let config = EngineConfig::builder().stop_frames_required(0).build();
        assert_eq!(config.stop_frames_required, 1);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = EngineConfig {
            alpha: 1.0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AlphaOutOfRange { .. })
        ));

        let config = EngineConfig {
            motion_threshold: 0.0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveMotionThreshold { .. })
        ));

        let config = EngineConfig {
            stop_frames_required: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroStopFrames { .. })
        ));
    }
}

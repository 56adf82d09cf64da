use crate::constants::DEFAULT_MAX_FRAME_DT;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max_frame_dt must be positive and finite, got {0}")]
    NonPositiveFrameDelta(f32),
    #[error("acceleration_limit must be positive and finite, got {0}")]
    NonPositiveAccelerationLimit(f32),
}

/// Engine tuning that is not part of any single effect.
///
/// - `max_frame_dt`: upper bound in seconds applied to each frame's time step;
///   `None` passes host stalls through unclamped
/// - `acceleration_limit`: per-axis bound on butterfly planar acceleration after
///   collision kicks; `None` lets the kicks accumulate without bound
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub max_frame_dt: Option<f32>,
    pub acceleration_limit: Option<f32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_frame_dt: Some(DEFAULT_MAX_FRAME_DT),
            acceleration_limit: None,
        }
    }
}

impl EngineConfig {
    /// No clamping: stalls pass through and kicks accumulate freely.
    pub fn unclamped() -> Self {
        Self {
            max_frame_dt: None,
            acceleration_limit: None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dt) = self.max_frame_dt {
            if !(dt.is_finite() && dt > 0.0) {
                return Err(ConfigError::NonPositiveFrameDelta(dt));
            }
        }
        if let Some(limit) = self.acceleration_limit {
            if !(limit.is_finite() && limit > 0.0) {
                return Err(ConfigError::NonPositiveAccelerationLimit(limit));
            }
        }
        Ok(())
    }

    /// Applies `max_frame_dt` and floors negatives at zero.
    #[inline]
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        match self.max_frame_dt {
            Some(max) => dt.min(max),
            None => dt,
        }
    }
}

//! Delay line sizing configuration
//!
//! Delay lines are allocated once, so their capacity has to cover the
//! longest delay and the largest block the render path will ever ask for.

use serde::{Deserialize, Serialize};

use crate::error::{DelayError, DelayResult};
use crate::types::{CHANNELS, MAX_BLOCK_FRAMES, MAX_LATENCY_FRAMES, SAMPLE_RATE};

/// Delay line sizing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayLineConfig {
    /// Sample rate in Hz
    /// Default: 48000
    pub sample_rate: u32,

    /// Longest supported delay in milliseconds
    /// Default: 100.0 (matches MAX_LATENCY_FRAMES at 48kHz)
    pub max_delay_ms: f32,

    /// Largest block written per processing cycle, in frames
    /// Default: 1024
    pub max_block_frames: usize,

    /// Interleaved channels per frame
    /// Default: 2
    pub channels: usize,
}

impl Default for DelayLineConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            max_delay_ms: MAX_LATENCY_FRAMES as f32 * 1000.0 / SAMPLE_RATE as f32,
            max_block_frames: MAX_BLOCK_FRAMES,
            channels: CHANNELS,
        }
    }
}

impl DelayLineConfig {
    /// Check that every value is usable for sizing a delay line
    pub fn validate(&self) -> DelayResult<()> {
        if self.sample_rate == 0 {
            return Err(DelayError::InvalidConfig("sample_rate must be > 0".into()));
        }
        if self.channels == 0 {
            return Err(DelayError::InvalidConfig("channels must be > 0".into()));
        }
        if self.max_block_frames == 0 {
            return Err(DelayError::InvalidConfig("max_block_frames must be > 0".into()));
        }
        if !self.max_delay_ms.is_finite() || self.max_delay_ms < 0.0 {
            return Err(DelayError::InvalidConfig(format!(
                "max_delay_ms must be finite and >= 0, got {}",
                self.max_delay_ms
            )));
        }
        Ok(())
    }

    /// Longest delay in frames, rounded up
    pub fn max_delay_frames(&self) -> usize {
        (self.max_delay_ms as f64 * self.sample_rate as f64 / 1000.0).ceil() as usize
    }

    /// Ring capacity in interleaved samples: longest delay plus one block
    pub fn capacity_samples(&self) -> usize {
        (self.max_delay_frames() + self.max_block_frames) * self.channels
    }
}

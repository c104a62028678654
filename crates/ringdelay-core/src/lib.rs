//! Ringdelay Core - Real-time ring delay buffer for audio delay lines

pub mod config;
pub mod error;
pub mod latency;
pub mod ring_delay;
pub mod sample_buffer;
pub mod sample_util;
pub mod types;

pub use error::{DelayError, DelayResult};
pub use latency::LatencyCompensator;
pub use ring_delay::RingDelayBuffer;
pub use sample_buffer::SampleBuffer;
pub use types::*;

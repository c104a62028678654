//! Latency compensation across signal paths
//!
//! Every path through the audio graph may carry a different processing
//! latency. To keep them sample-aligned, each path is delayed by the
//! difference between the largest reported latency and its own, using one
//! [`RingDelayBuffer`] per path.

use crate::config::DelayLineConfig;
use crate::error::{DelayError, DelayResult};
use crate::ring_delay::RingDelayBuffer;
use crate::types::{frames_to_samples, Sample, CHANNELS, MAX_BLOCK_FRAMES, MAX_LATENCY_FRAMES};

/// Number of paths created by [`LatencyCompensator::default`]
pub const DEFAULT_NUM_PATHS: usize = 4;

/// Latency compensator for a fixed set of stereo signal paths
///
/// All delay lines are allocated up front; [`LatencyCompensator::process`]
/// is real-time safe.
pub struct LatencyCompensator {
    /// One delay line per path
    delay_lines: Vec<RingDelayBuffer>,
    /// Reported latency per path, in frames
    path_latencies: Vec<usize>,
    /// Compensation delay per path, in frames
    compensations: Vec<usize>,
    /// Maximum latency across all paths (the target latency)
    global_max_latency: usize,
    max_latency_frames: usize,
    max_block_frames: usize,
}

impl LatencyCompensator {
    /// Create a compensator for `num_paths` stereo paths
    ///
    /// Each delay line holds `max_latency_frames + max_block_frames` frames.
    /// Panics if `max_block_frames` is zero.
    pub fn new(num_paths: usize, max_latency_frames: usize, max_block_frames: usize) -> Self {
        assert!(max_block_frames > 0, "max_block_frames must be greater than zero");
        let capacity = frames_to_samples(max_latency_frames + max_block_frames);
        Self {
            delay_lines: (0..num_paths).map(|_| RingDelayBuffer::new(capacity)).collect(),
            path_latencies: vec![0; num_paths],
            compensations: vec![0; num_paths],
            global_max_latency: 0,
            max_latency_frames,
            max_block_frames,
        }
    }

    /// Create a compensator sized from a delay line config
    pub fn from_config(config: &DelayLineConfig, num_paths: usize) -> DelayResult<Self> {
        config.validate()?;
        if config.channels != CHANNELS {
            return Err(DelayError::InvalidConfig(format!(
                "latency compensation is stereo, config has {} channels",
                config.channels
            )));
        }
        Ok(Self::new(
            num_paths,
            config.max_delay_frames(),
            config.max_block_frames,
        ))
    }

    /// Number of paths
    pub fn num_paths(&self) -> usize {
        self.delay_lines.len()
    }

    /// Update the latency reported for one path, in frames
    ///
    /// Call this whenever the processing on a path changes. Recalculates the
    /// compensation for every path.
    pub fn set_path_latency(&mut self, path: usize, latency: usize) {
        if path >= self.num_paths() {
            return;
        }
        if latency > self.max_latency_frames {
            log::warn!(
                "Path {} latency {} frames exceeds maximum {}, clamping! Audio may be misaligned.",
                path,
                latency,
                self.max_latency_frames
            );
        }
        self.path_latencies[path] = latency.min(self.max_latency_frames);
        self.recalculate_delays();
    }

    /// Get the current global maximum latency, in frames
    pub fn global_latency(&self) -> usize {
        self.global_max_latency
    }

    /// Get the compensation delay applied to a path, in frames
    pub fn compensation(&self, path: usize) -> Option<usize> {
        self.compensations.get(path).copied()
    }

    fn recalculate_delays(&mut self) {
        let old_max = self.global_max_latency;
        self.global_max_latency = self.path_latencies.iter().copied().max().unwrap_or(0);

        if self.global_max_latency != old_max {
            log::info!(
                "[LATENCY] Global max changed: {} -> {} frames",
                old_max,
                self.global_max_latency
            );
            log::debug!("[LATENCY] Path latencies: {:?}", self.path_latencies);
        }

        for (compensation, &latency) in self.compensations.iter_mut().zip(&self.path_latencies) {
            *compensation = self.global_max_latency - latency;
        }
    }

    /// Delay an interleaved stereo block in place by the path's compensation
    ///
    /// Blocks longer than the configured maximum are processed in pieces.
    pub fn process(&mut self, path: usize, block: &mut [Sample]) {
        if path >= self.num_paths() {
            return;
        }
        debug_assert!(block.len() % CHANNELS == 0, "Stereo block must have even length");

        let delay = frames_to_samples(self.compensations[path]);
        let delay_line = &mut self.delay_lines[path];
        for chunk in block.chunks_mut(frames_to_samples(self.max_block_frames)) {
            delay_line.write(chunk);
            delay_line.read(chunk, delay);
        }
    }

    /// Clear all delay lines (call on stream restart, etc.)
    pub fn clear(&mut self) {
        for delay_line in &mut self.delay_lines {
            delay_line.clear();
        }
    }

    /// Clear the delay line of one path
    pub fn clear_path(&mut self, path: usize) {
        if let Some(delay_line) = self.delay_lines.get_mut(path) {
            delay_line.clear();
        }
    }
}

impl Default for LatencyCompensator {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_PATHS, MAX_LATENCY_FRAMES, MAX_BLOCK_FRAMES)
    }
}

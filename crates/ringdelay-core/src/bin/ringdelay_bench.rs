//! Ring delay buffer benchmark
//!
//! Times write/read cycles using blocks of half the capacity for a range of
//! capacities, with and without read delay. `clear()` runs outside the timed
//! region. Cost per iteration should stay proportional to the block size.
//!
//! ## Command line flags
//!
//! - `--iterations N`: iterations per case (default 100000)
//! - `--config PATH`: also bench a delay line sized from a `DelayLineConfig`
//!   YAML file (one max block at the max delay); `--config default` uses the
//!   standard config location. A missing file is created with the defaults.

use std::hint::black_box;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ringdelay_core::config::{default_config_path, load_config, save_config, DelayLineConfig};
use ringdelay_core::{RingDelayBuffer, SampleBuffer};

const DEFAULT_ITERATIONS: u32 = 100_000;
const CAPACITIES: [usize; 3] = [64, 512, 4 << 10];
const CONFIG_FILENAME: &str = "delay.yaml";

/// Value following `flag` on the command line
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|idx| args.get(idx + 1))
        .map(String::as_str)
}

fn parse_iterations(args: &[String]) -> u32 {
    match flag_value(args, "--iterations") {
        None => DEFAULT_ITERATIONS,
        Some(value) => match value.parse() {
            Ok(n) if n > 0 => n,
            _ => {
                log::warn!("Invalid --iterations value {:?}, using {}", value, DEFAULT_ITERATIONS);
                DEFAULT_ITERATIONS
            }
        },
    }
}

fn parse_config_path(args: &[String]) -> Option<PathBuf> {
    flag_value(args, "--config").map(|value| match value {
        "default" => default_config_path(CONFIG_FILENAME),
        path => PathBuf::from(path),
    })
}

/// Run one write/read/write/read cycle per iteration and return the mean time
fn bench_write_read(capacity: usize, block: usize, delay: usize, iterations: u32) -> Result<Duration> {
    let mut ring = RingDelayBuffer::try_new(capacity)?;
    ring.ensure_fits(delay, block)?;
    let input = SampleBuffer::new(block);
    let mut output = SampleBuffer::new(block);

    let mut elapsed = Duration::ZERO;
    for _ in 0..iterations {
        ring.clear();

        let start = Instant::now();
        ring.write(&input);
        ring.read(&mut output, delay);
        ring.write(&input);
        ring.read(&mut output, delay);
        elapsed += start.elapsed();

        black_box(&output);
    }
    Ok(elapsed / iterations)
}

/// Capacity, block and delay (all in samples) for one max block at the max delay
fn configured_case(config: &DelayLineConfig) -> (usize, usize, usize) {
    (
        config.capacity_samples(),
        config.max_block_frames * config.channels,
        config.max_delay_frames() * config.channels,
    )
}

fn print_row(case: &str, capacity: usize, per_iter: Duration) {
    println!("{:<36} {:>10} {:>14}", case, capacity, per_iter.as_nanos());
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().collect();
    let iterations = parse_iterations(&args);
    log::info!("ringdelay-bench: {} iterations per case", iterations);

    println!("{:<36} {:>10} {:>14}", "case", "capacity", "ns/iter");
    for &capacity in &CAPACITIES {
        let block = capacity / 2;
        let no_delay = bench_write_read(capacity, block, 0, iterations)?;
        print_row("write_read_whole_buffer_no_delay", capacity, no_delay);

        let delay = bench_write_read(capacity, block, block, iterations)?;
        print_row("write_read_whole_buffer_delay", capacity, delay);
    }

    if let Some(path) = parse_config_path(&args) {
        let config: DelayLineConfig = load_config(&path);
        if !path.exists() {
            // Leave an editable copy of the defaults behind
            save_config(&config, &path)?;
        }
        config
            .validate()
            .with_context(|| format!("Unusable delay line config {:?}", path))?;

        let (capacity, block, delay) = configured_case(&config);
        log::info!(
            "Configured delay line: {} Hz, {} channels, {} samples",
            config.sample_rate,
            config.channels,
            capacity
        );

        let configured = bench_write_read(capacity, block, delay, iterations)?;
        print_row("write_read_configured_max_delay", capacity, configured);
    }

    Ok(())
}

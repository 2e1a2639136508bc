//! Simulated realtime performance figures for the live dashboard tiles.
//!
//! The configuration documents carry a static performance snapshot; the
//! dashboard animates around it with values drawn from fixed ranges.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::time::{SystemTime, UNIX_EPOCH};

pub const CPU_USAGE_RANGE: Range<f64> = 20.0..50.0;
pub const MEMORY_USAGE_RANGE: Range<f64> = 40.0..60.0;
pub const DISK_USAGE_RANGE: Range<f64> = 55.0..65.0;
/// Bytes per second.
pub const NETWORK_RX_RANGE: Range<f64> = 500_000.0..1_500_000.0;
/// Bytes per second.
pub const NETWORK_TX_RANGE: Range<f64> = 250_000.0..750_000.0;
pub const TEMPERATURE_RANGE: Range<f64> = 40.0..50.0;
/// RPM.
pub const FAN_SPEED_RANGE: Range<f64> = 1100.0..1300.0;

pub const RUNNING_POWER_STATE: &str = "运行中";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RealtimePerformance {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
    pub network_rx: f64,
    pub network_tx: f64,
    pub temperature: f64,
    pub fan_speed: f64,
    pub power_state: String,
    /// Seconds since the UNIX epoch at sampling time.
    pub uptime: f64,
}

/// Draws one snapshot from the thread-local RNG.
pub fn realtime_snapshot() -> RealtimePerformance {
    snapshot_with(&mut rand::thread_rng())
}

pub fn snapshot_with<R: Rng + ?Sized>(rng: &mut R) -> RealtimePerformance {
    let uptime = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default();

    RealtimePerformance {
        cpu_usage: rng.gen_range(CPU_USAGE_RANGE),
        memory_usage: rng.gen_range(MEMORY_USAGE_RANGE),
        disk_usage: rng.gen_range(DISK_USAGE_RANGE),
        network_rx: rng.gen_range(NETWORK_RX_RANGE),
        network_tx: rng.gen_range(NETWORK_TX_RANGE),
        temperature: rng.gen_range(TEMPERATURE_RANGE),
        fan_speed: rng.gen_range(FAN_SPEED_RANGE),
        power_state: RUNNING_POWER_STATE.to_string(),
        uptime,
    }
}

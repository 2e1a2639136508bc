//! Summary shapes returned by `/api/system-info`.
//!
//! The Windows document is condensed into the fields the overview cards show;
//! byte counts become whole gigabytes.

use panel_config::documents::windows::{DiskEntry, NetworkInterface};
use panel_config::{AndroidConfig, RealtimePerformance, WindowsConfig};
use serde::Serialize;
use std::sync::Arc;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfoResponse {
    pub windows_info: WindowsSummary,
    pub android_info: Arc<AndroidConfig>,
    pub performance: RealtimePerformance,
    /// Milliseconds since the UNIX epoch.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindowsSummary {
    pub os_version: String,
    pub cpu_model: String,
    /// Gigabytes, rounded.
    pub total_memory: u64,
    /// Gigabytes, rounded.
    pub available_memory: u64,
    pub disk_info: Vec<DiskSummary>,
    pub network_adapters: Vec<AdapterSummary>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiskSummary {
    pub name: String,
    /// Gigabytes, rounded.
    pub size: u64,
    #[serde(rename = "type")]
    pub disk_type: String,
    pub mount: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AdapterSummary {
    pub name: String,
    pub ip4: String,
    pub mac: String,
    pub speed: f64,
}

fn to_gb(bytes: u64) -> u64 {
    (bytes as f64 / BYTES_PER_GB).round() as u64
}

impl From<&DiskEntry> for DiskSummary {
    fn from(disk: &DiskEntry) -> Self {
        Self {
            name: disk.device.clone(),
            size: to_gb(disk.size),
            disk_type: disk.disk_type.clone(),
            mount: disk.mount.clone(),
        }
    }
}

impl From<&NetworkInterface> for AdapterSummary {
    fn from(iface: &NetworkInterface) -> Self {
        Self {
            name: iface.iface.clone(),
            ip4: iface.ip4.clone(),
            mac: iface.mac.clone(),
            speed: iface.speed,
        }
    }
}

impl From<&WindowsConfig> for WindowsSummary {
    fn from(config: &WindowsConfig) -> Self {
        let system = &config.system;
        Self {
            os_version: format!(
                "{} {} ({})",
                system.os.platform, system.os.release, system.os.arch
            ),
            cpu_model: system.cpu.brand.clone(),
            total_memory: to_gb(system.memory.total),
            available_memory: to_gb(system.memory.available),
            disk_info: system.disks.iter().map(DiskSummary::from).collect(),
            network_adapters: system
                .network
                .iter()
                .filter(|iface| !iface.internal)
                .map(AdapterSummary::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_gb_rounds() {
        assert_eq!(to_gb(17_179_869_184), 16);
        assert_eq!(to_gb(512_110_190_592), 477);
        assert_eq!(to_gb(0), 0);
    }
}

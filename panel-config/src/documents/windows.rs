//! Windows host document (`windows-config.json`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowsConfig {
    pub system: WindowsSystem,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowsSystem {
    pub os: OsInfo,
    pub cpu: CpuInfo,
    pub memory: MemoryInfo,
    #[serde(default)]
    pub disks: Vec<DiskEntry>,
    #[serde(default)]
    pub network: Vec<NetworkInterface>,
    pub performance: PerformanceSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OsInfo {
    pub platform: String,
    pub distro: String,
    pub release: String,
    pub codename: String,
    pub kernel: String,
    pub arch: String,
    pub hostname: String,
    pub fqdn: String,
    pub codepage: String,
    pub logofile: String,
    pub serial: String,
    pub build: String,
    pub servicepack: String,
    pub uefi: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CpuInfo {
    pub manufacturer: String,
    pub brand: String,
    pub vendor: String,
    pub family: String,
    pub model: String,
    pub stepping: String,
    pub revision: String,
    pub voltage: String,
    pub speed: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    pub governor: String,
    pub cores: u32,
    pub physical_cores: u32,
    pub processors: u32,
    pub socket: String,
    pub flags: String,
    pub virtualization: bool,
    pub cache: CpuCache,
}

/// Cache sizes in bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CpuCache {
    pub l1d: u64,
    pub l1i: u64,
    pub l2: u64,
    pub l3: u64,
}

/// Memory figures in bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryInfo {
    pub total: u64,
    pub free: u64,
    pub used: u64,
    pub active: u64,
    pub available: u64,
    pub buffers: u64,
    pub cached: u64,
    pub slab: u64,
    pub buffcache: u64,
    pub swaptotal: u64,
    pub swapused: u64,
    pub swapfree: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiskEntry {
    pub device: String,
    #[serde(rename = "type")]
    pub disk_type: String,
    pub size: u64,
    pub used: u64,
    pub available: u64,
    /// Used share in percent.
    #[serde(rename = "use")]
    pub use_percent: f64,
    pub mount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    pub iface: String,
    pub iface_name: String,
    pub ip4: String,
    pub ip4subnet: String,
    pub ip6: String,
    pub ip6subnet: String,
    pub mac: String,
    pub internal: bool,
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
    pub operstate: String,
    #[serde(rename = "type")]
    pub iface_type: String,
    pub duplex: String,
    pub mtu: u32,
    pub speed: f64,
    pub dhcp: bool,
    pub dns_suffix: String,
    #[serde(rename = "ieee8021xAuth")]
    pub ieee8021x_auth: String,
    #[serde(rename = "ieee8021xState")]
    pub ieee8021x_state: String,
}

impl NetworkInterface {
    pub fn is_up(&self) -> bool {
        self.operstate.eq_ignore_ascii_case("up")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
    pub network_rx: f64,
    pub network_tx: f64,
    pub temperature: f64,
    pub fan_speed: f64,
    pub power_state: String,
    /// Seconds.
    pub uptime: f64,
}

//! Panel hardware and peripheral document (`device-config.json`).
//!
//! Most ratings are free-form strings as printed on the spec sheet
//! (`"65 inch"`, `"350 cd/m²"`); only port and channel counts are numeric.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    pub device: DeviceIdentity,
    pub display: PanelDisplay,
    pub video_station: VideoStation,
    pub audio: AudioSubsystem,
    pub connectivity: Connectivity,
    pub power: PowerRating,
    pub environmental: EnvironmentalRating,
    pub software: SoftwareInfo,
    pub status: DeviceStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceIdentity {
    pub brand: String,
    pub model: String,
    pub series: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub serial_number: String,
    pub manufacturing_date: String,
    pub warranty_expiry: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PanelDisplay {
    pub size: String,
    pub resolution: String,
    pub aspect_ratio: String,
    pub brightness: String,
    pub contrast: String,
    pub refresh_rate: String,
    pub touch_points: u32,
    pub touch_technology: String,
    pub response_time: String,
    pub viewing_angle: String,
    pub color_gamut: String,
    pub backlight: String,
    pub anti_glare: bool,
    pub blue_light: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoStation {
    pub model: String,
    pub brand: String,
    pub resolution: String,
    pub zoom: String,
    pub focus: String,
    pub interface: String,
    #[serde(default)]
    pub compatibility: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioSubsystem {
    pub speakers: Speakers,
    pub microphone: Microphone,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Speakers {
    pub model: String,
    pub brand: String,
    pub power: String,
    pub frequency: String,
    pub impedance: String,
    pub sensitivity: String,
    #[serde(rename = "type")]
    pub speaker_type: String,
    pub position: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Microphone {
    #[serde(rename = "type")]
    pub mic_type: String,
    pub channels: u32,
    pub pickup_range: String,
    pub noise_reduction: bool,
    pub echo_cancellation: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Connectivity {
    pub wifi: WifiLink,
    pub bluetooth: BluetoothLink,
    pub ethernet: EthernetLink,
    pub usb: UsbPorts,
    pub hdmi: HdmiPorts,
    pub vga: VgaPorts,
}

impl Connectivity {
    /// Physical connectors of every kind added together.
    pub fn total_ports(&self) -> u32 {
        self.usb.ports + self.hdmi.inputs + self.hdmi.outputs + self.vga.inputs
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WifiLink {
    pub status: String,
    pub standard: String,
    pub frequency: String,
    pub speed: String,
    pub security: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BluetoothLink {
    pub status: String,
    pub version: String,
    pub range: String,
    #[serde(default)]
    pub profiles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EthernetLink {
    pub status: String,
    pub speed: String,
    pub duplex: String,
    pub cable: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsbPorts {
    pub ports: u32,
    pub usb3: u32,
    pub usb2: u32,
    pub type_c: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HdmiPorts {
    pub inputs: u32,
    pub outputs: u32,
    pub version: String,
    pub resolution: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VgaPorts {
    pub inputs: u32,
    pub resolution: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PowerRating {
    pub consumption: String,
    pub standby: String,
    pub voltage: String,
    pub frequency: String,
    pub power_saving: bool,
    pub auto_shutdown: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalRating {
    pub operating_temp: String,
    pub storage_temp: String,
    pub humidity: String,
    pub altitude: String,
    #[serde(default)]
    pub certification: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareInfo {
    pub os: String,
    pub version: String,
    pub kernel: String,
    #[serde(default)]
    pub pre_installed: Vec<String>,
    pub update_channel: String,
    pub last_update: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatus {
    pub overall: String,
    pub temperature: String,
    pub uptime: String,
    pub last_maintenance: String,
    pub next_maintenance: String,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl DeviceStatus {
    pub fn is_healthy(&self) -> bool {
        self.errors.is_empty()
    }
}

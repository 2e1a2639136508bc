//! Android subsystem document (`android-config.json`).

use serde::{Deserialize, Serialize};

/// RAM and ROM figures are in megabytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AndroidConfig {
    pub android_version: String,
    pub kernel_version: String,
    #[serde(rename = "totalRAM")]
    pub total_ram: u64,
    #[serde(rename = "availableRAM")]
    pub available_ram: u64,
    #[serde(rename = "totalROM")]
    pub total_rom: u64,
    #[serde(rename = "availableROM")]
    pub available_rom: u64,
    pub device_model: String,
    pub build_number: String,
    pub security_patch: String,
    pub api_level: u32,
    pub manufacturer: String,
    pub brand: String,
    pub hardware: String,
    pub bootloader: String,
    pub fingerprint: String,
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub features: AndroidFeatures,
    pub display: AndroidDisplay,
    pub network: AndroidNetwork,
}

impl AndroidConfig {
    /// Share of RAM currently in use, in percent.
    pub fn ram_usage_percent(&self) -> f64 {
        usage_percent(self.total_ram, self.available_ram)
    }

    pub fn rom_usage_percent(&self) -> f64 {
        usage_percent(self.total_rom, self.available_rom)
    }
}

fn usage_percent(total: u64, available: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (total.saturating_sub(available) as f64 / total as f64) * 100.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AndroidFeatures {
    pub touch_screen: bool,
    pub multi_touch: bool,
    pub wifi: bool,
    pub bluetooth: bool,
    pub camera: bool,
    pub microphone: bool,
    pub speakers: bool,
    pub hdmi: bool,
    pub usb: bool,
    pub ethernet: bool,
}

impl AndroidFeatures {
    /// Names of the enabled capabilities, in schema order.
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("touchScreen", self.touch_screen),
            ("multiTouch", self.multi_touch),
            ("wifi", self.wifi),
            ("bluetooth", self.bluetooth),
            ("camera", self.camera),
            ("microphone", self.microphone),
            ("speakers", self.speakers),
            ("hdmi", self.hdmi),
            ("usb", self.usb),
            ("ethernet", self.ethernet),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AndroidDisplay {
    pub resolution: String,
    pub density: u32,
    pub refresh_rate: f64,
    pub size: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AndroidNetwork {
    pub wifi_enabled: bool,
    pub bluetooth_enabled: bool,
    pub ethernet_enabled: bool,
}

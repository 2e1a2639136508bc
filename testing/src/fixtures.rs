use panel_config::{ConfigDocument, ConfigKind};
use std::path::Path;

pub const WINDOWS_CONFIG_JSON: &str = include_str!("../../resources/config/windows-config.json");
pub const ANDROID_CONFIG_JSON: &str = include_str!("../../resources/config/android-config.json");
pub const DEVICE_CONFIG_JSON: &str = include_str!("../../resources/config/device-config.json");

pub fn sample_raw(kind: ConfigKind) -> &'static str {
    match kind {
        ConfigKind::Windows => WINDOWS_CONFIG_JSON,
        ConfigKind::Android => ANDROID_CONFIG_JSON,
        ConfigKind::Device => DEVICE_CONFIG_JSON,
    }
}

pub fn sample_json(kind: ConfigKind) -> serde_json::Value {
    serde_json::from_str(sample_raw(kind)).expect("shipped sample config is valid JSON")
}

pub fn sample_document(kind: ConfigKind) -> ConfigDocument {
    ConfigDocument::from_json(kind, sample_json(kind)).expect("shipped sample config matches schema")
}

/// Sample Android document with the version and RAM replaced.
pub fn android_document(android_version: &str, total_ram: u64) -> ConfigDocument {
    let mut value = sample_json(ConfigKind::Android);
    value["androidVersion"] = serde_json::json!(android_version);
    value["totalRAM"] = serde_json::json!(total_ram);
    ConfigDocument::from_json(ConfigKind::Android, value).expect("patched android sample parses")
}

/// Sample device document with a different serial number, for telling fetches
/// apart.
pub fn device_document(serial_number: &str) -> ConfigDocument {
    let mut value = sample_json(ConfigKind::Device);
    value["device"]["serialNumber"] = serde_json::json!(serial_number);
    ConfigDocument::from_json(ConfigKind::Device, value).expect("patched device sample parses")
}

/// Writes all three samples to `<root>/config/<kind>-config.json`.
pub fn write_config_dir(root: &Path) -> std::io::Result<()> {
    let dir = root.join("config");
    std::fs::create_dir_all(&dir)?;
    for kind in ConfigKind::ALL {
        std::fs::write(
            dir.join(format!("{}.json", kind.file_stem())),
            sample_raw(kind),
        )?;
    }
    Ok(())
}

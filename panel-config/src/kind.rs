//! # Configuration Kinds
//!
//! The closed set of configuration documents the dashboard knows about.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// Key identifying one configuration document.
///
/// Names are lowercase (`windows`, `android`, `device`). The file stem used by
/// both providers is the name with a `-config` suffix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConfigKind {
    Windows,
    Android,
    Device,
}

impl ConfigKind {
    /// All kinds in declaration order.
    pub const ALL: [ConfigKind; 3] = [ConfigKind::Windows, ConfigKind::Android, ConfigKind::Device];

    /// Name handed to the host bridge, e.g. `windows-config`.
    pub fn file_stem(self) -> String {
        format!("{}-config", self.as_ref())
    }

    /// Static path served to networked clients, e.g.
    /// `/config/windows-config.json`.
    pub fn static_path(self) -> String {
        format!("/config/{}.json", self.file_stem())
    }

    pub fn iter_all() -> impl Iterator<Item = ConfigKind> {
        ConfigKind::iter()
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            ConfigKind::Windows => 0,
            ConfigKind::Android => 1,
            ConfigKind::Device => 2,
        }
    }
}

impl FromStr for ConfigKind {
    type Err = ConfigError;

    /// Accepts the bare name or the file stem, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let name = normalized.strip_suffix(".json").unwrap_or(&normalized);
        let name = name.strip_suffix("-config").unwrap_or(name);

        ConfigKind::iter()
            .find(|kind| kind.as_ref() == name)
            .ok_or_else(|| ConfigError::InvalidArgument {
                key: s.to_string(),
            })
    }
}

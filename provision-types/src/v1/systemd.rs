// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Systemd {
    pub units: Vec<Unit>,
}

/// A systemd unit file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Unit {
    /// Unit name (e.g., "etcd.service")
    pub name: String,

    pub enable: bool,

    pub mask: bool,

    /// Literal unit file contents
    pub contents: String,

    /// Drop-in fragments, applied in order
    #[serde(rename = "dropins")]
    pub drop_ins: Vec<DropIn>,
}

/// A drop-in override fragment for a unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropIn {
    /// Fragment file name (e.g., "10-limits.conf")
    pub name: String,

    pub contents: String,
}

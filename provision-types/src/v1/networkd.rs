// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Networkd {
    pub units: Vec<NetworkdUnit>,
}

/// A systemd-networkd unit (".network", ".netdev" or ".link")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkdUnit {
    pub name: String,
    pub contents: String,
}

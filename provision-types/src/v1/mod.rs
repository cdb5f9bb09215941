// SPDX-License-Identifier: GPL-3.0-only

//! Old (v1) provisioning config schema
//!
//! v1 documents carry no version stamp. Files live inside the filesystem that
//! holds them, and every scalar is always present: a caller that does not care
//! about a value leaves it at its zero value.

use serde::{Deserialize, Serialize};

pub mod networkd;
pub mod passwd;
pub mod storage;
pub mod systemd;

pub use networkd::{Networkd, NetworkdUnit};
pub use passwd::{Group, Passwd, User, UserCreate};
pub use storage::{Disk, File, Filesystem, FilesystemCreate, Partition, Raid, Storage};
pub use systemd::{DropIn, Systemd, Unit};

/// Root of a v1 document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: Storage,
    pub systemd: Systemd,
    pub networkd: Networkd,
    pub passwd: Passwd,
}

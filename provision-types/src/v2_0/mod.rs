// SPDX-License-Identifier: GPL-3.0-only

//! New (2.0.0) provisioning config schema
//!
//! Compared to v1:
//!
//! - The document states its own version in `ignition.version`.
//! - Filesystems are named entities; files are a separate list that refers
//!   to a filesystem by name.
//! - File contents are a content reference (URI) instead of a literal.
//! - Scalars that may legitimately be zero are `Option`s, so "unset" and
//!   "set to zero" stay distinct.

use serde::{Deserialize, Serialize};

use crate::SchemaVersion;

pub mod networkd;
pub mod passwd;
pub mod storage;
pub mod systemd;

pub use networkd::{Networkd, NetworkdUnit};
pub use passwd::{Group, Passwd, User, UserCreate};
pub use storage::{
    Create, Disk, File, FileContents, Filesystem, Mount, NodeGroup, NodeUser, Partition, Raid,
    Storage, Verification,
};
pub use systemd::{Dropin, Systemd, Unit};

/// Version every document of this schema is stamped with
pub const MAX_VERSION: SchemaVersion = SchemaVersion::new(2, 0, 0);

/// Root of a 2.0.0 document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ignition: Ignition,
    pub storage: Storage,
    pub systemd: Systemd,
    pub networkd: Networkd,
    pub passwd: Passwd,
}

/// Document metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ignition {
    /// Schema version in `major.minor.patch` form
    pub version: String,
}

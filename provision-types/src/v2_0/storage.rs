// SPDX-License-Identifier: GPL-3.0-only

//! Storage section of the 2.0.0 schema
//!
//! Files are no longer nested under their filesystem. Each [`File`] names its
//! filesystem through [`File::filesystem`], which must match the
//! [`Filesystem::name`] of an entry in [`Storage::filesystems`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub disks: Vec<Disk>,
    pub raid: Vec<Raid>,
    pub filesystems: Vec<Filesystem>,
    pub files: Vec<File>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Disk {
    pub device: String,
    pub wipe_table: bool,
    pub partitions: Vec<Partition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Partition {
    pub label: String,
    pub number: i32,
    pub size: u64,
    pub start: u64,
    pub type_guid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Raid {
    pub name: String,
    pub level: String,
    pub devices: Vec<String>,
    pub spares: i32,
}

/// A named filesystem that files can be placed into
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filesystem {
    /// Name referenced by [`File::filesystem`]
    pub name: String,

    /// Block device backing the filesystem
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount: Option<Mount>,

    /// Path of an already mounted filesystem, as an alternative to `mount`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mount {
    pub device: String,

    pub format: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create: Option<Create>,
}

/// mkfs arguments for a filesystem
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Create {
    pub force: bool,
    pub options: Vec<String>,
}

/// A file placed into a named filesystem
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    /// Name of the owning [`Filesystem`]
    pub filesystem: String,

    pub path: String,

    pub contents: FileContents,

    /// Permission bits; `None` leaves the default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<NodeUser>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<NodeGroup>,
}

/// Where a file's data comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContents {
    /// Compression applied to the fetched data (empty = none)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub compression: String,

    /// Content reference URI (e.g., "data:,hello")
    pub source: String,

    pub verification: Verification,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Verification {
    /// Expected digest in `<function>-<hex>` form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// File owner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// File group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

// SPDX-License-Identifier: GPL-3.0-only

//! Storage section of the v1 schema: disks, RAID arrays and filesystems

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub disks: Vec<Disk>,

    /// RAID arrays, in creation order
    #[serde(rename = "raid")]
    pub arrays: Vec<Raid>,

    pub filesystems: Vec<Filesystem>,
}

/// A disk to partition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Disk {
    /// Device path (e.g., "/dev/sda")
    pub device: String,

    /// Wipe the existing partition table before partitioning
    pub wipe_table: bool,

    pub partitions: Vec<Partition>,
}

/// A partition entry within a disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Partition {
    /// Partition label (GPT name)
    pub label: String,

    /// Partition number (1-based, 0 = next available)
    pub number: i32,

    /// Size in sectors (0 = fill available space)
    pub size: u64,

    /// Start offset in sectors (0 = next available)
    pub start: u64,

    /// GPT partition type GUID
    pub type_guid: String,
}

/// A software RAID array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Raid {
    /// Array name (e.g., "md0")
    pub name: String,

    /// RAID level (e.g., "raid1")
    pub level: String,

    /// Member device paths
    pub devices: Vec<String>,

    /// Number of spare devices
    pub spares: i32,
}

/// A filesystem together with the files to write into it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filesystem {
    /// Device path (e.g., "/dev/disk/by-partlabel/ROOT")
    pub device: String,

    /// Filesystem type (e.g., "ext4", "btrfs")
    pub format: String,

    /// Create the filesystem when set; use the existing one otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create: Option<FilesystemCreate>,

    pub files: Vec<File>,
}

/// How to run mkfs for a filesystem
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesystemCreate {
    /// Overwrite an existing filesystem
    pub force: bool,

    /// Extra mkfs arguments, in order
    pub options: Vec<String>,
}

/// A file with literal contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    /// Absolute path within the owning filesystem
    pub path: String,

    /// Literal file contents
    pub contents: String,

    /// Permission bits (e.g., 0o644)
    pub mode: u32,

    pub uid: u32,

    pub gid: u32,
}

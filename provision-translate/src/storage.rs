// SPDX-License-Identifier: GPL-3.0-only

//! Storage section mapping
//!
//! Disks and RAID arrays copy across field by field. Filesystems are split:
//! each v1 filesystem becomes a named 2.0.0 filesystem, and the files it held
//! move to the top-level file list, pointing back at it by name.

use provision_types::{v1, v2_0};
use tracing::debug;

use crate::content::inline_source;

const FILESYSTEM_NAME_PREFIX: &str = "_translate-filesystem-";

/// Name given to the filesystem at `index` in the v1 filesystem list
pub fn filesystem_name(index: usize) -> String {
    format!("{FILESYSTEM_NAME_PREFIX}{index}")
}

pub fn translate_storage(old: &v1::Storage) -> v2_0::Storage {
    let mut filesystems = Vec::with_capacity(old.filesystems.len());
    let mut files = Vec::new();

    for (index, filesystem) in old.filesystems.iter().enumerate() {
        let name = filesystem_name(index);
        files.extend(
            filesystem
                .files
                .iter()
                .map(|file| translate_file(file, &name)),
        );
        filesystems.push(translate_filesystem(filesystem, name));
    }

    debug!(
        "Translated storage: {} disks, {} arrays, {} filesystems, {} files",
        old.disks.len(),
        old.arrays.len(),
        filesystems.len(),
        files.len()
    );

    v2_0::Storage {
        disks: old.disks.iter().map(translate_disk).collect(),
        raid: old.arrays.iter().map(translate_raid).collect(),
        filesystems,
        files,
    }
}

fn translate_disk(disk: &v1::Disk) -> v2_0::Disk {
    v2_0::Disk {
        device: disk.device.clone(),
        wipe_table: disk.wipe_table,
        partitions: disk.partitions.iter().map(translate_partition).collect(),
    }
}

fn translate_partition(partition: &v1::Partition) -> v2_0::Partition {
    v2_0::Partition {
        label: partition.label.clone(),
        number: partition.number,
        size: partition.size,
        start: partition.start,
        type_guid: partition.type_guid.clone(),
    }
}

fn translate_raid(array: &v1::Raid) -> v2_0::Raid {
    v2_0::Raid {
        name: array.name.clone(),
        level: array.level.clone(),
        devices: array.devices.clone(),
        spares: array.spares,
    }
}

fn translate_filesystem(filesystem: &v1::Filesystem, name: String) -> v2_0::Filesystem {
    v2_0::Filesystem {
        name,
        mount: Some(v2_0::Mount {
            device: filesystem.device.clone(),
            format: filesystem.format.clone(),
            create: filesystem.create.as_ref().map(|create| v2_0::Create {
                force: create.force,
                options: create.options.clone(),
            }),
        }),
        path: None,
    }
}

fn translate_file(file: &v1::File, filesystem: &str) -> v2_0::File {
    v2_0::File {
        filesystem: filesystem.to_string(),
        path: file.path.clone(),
        contents: v2_0::FileContents {
            source: inline_source(&file.contents),
            ..Default::default()
        },
        mode: Some(i64::from(file.mode)),
        user: Some(v2_0::NodeUser {
            id: Some(i64::from(file.uid)),
        }),
        group: Some(v2_0::NodeGroup {
            id: Some(i64::from(file.gid)),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, contents: &str) -> v1::File {
        v1::File {
            path: path.to_string(),
            contents: contents.to_string(),
            mode: 0o644,
            uid: 0,
            gid: 0,
        }
    }

    #[test]
    fn test_filesystem_name_uses_position() {
        assert_eq!(filesystem_name(0), "_translate-filesystem-0");
        assert_eq!(filesystem_name(12), "_translate-filesystem-12");
    }

    #[test]
    fn test_empty_storage_maps_to_empty_lists() {
        let storage = translate_storage(&v1::Storage::default());
        assert_eq!(storage, v2_0::Storage::default());
        assert!(storage.files.is_empty());
    }

    #[test]
    fn test_filesystem_without_files_is_kept() {
        let old = v1::Storage {
            filesystems: vec![v1::Filesystem {
                device: "/dev/sdb1".to_string(),
                format: "xfs".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let new = translate_storage(&old);

        assert_eq!(new.filesystems.len(), 1);
        assert_eq!(new.filesystems[0].name, "_translate-filesystem-0");
        let mount = new.filesystems[0].mount.as_ref().unwrap();
        assert_eq!(mount.device, "/dev/sdb1");
        assert_eq!(mount.create, None);
        assert!(new.files.is_empty());
    }

    #[test]
    fn test_files_flatten_in_filesystem_order() {
        let old = v1::Storage {
            filesystems: vec![
                v1::Filesystem {
                    files: vec![file("/a", "1"), file("/b", "2")],
                    ..Default::default()
                },
                v1::Filesystem::default(),
                v1::Filesystem {
                    files: vec![file("/c", "3")],
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let new = translate_storage(&old);

        let placed: Vec<(&str, &str)> = new
            .files
            .iter()
            .map(|f| (f.path.as_str(), f.filesystem.as_str()))
            .collect();
        assert_eq!(
            placed,
            vec![
                ("/a", "_translate-filesystem-0"),
                ("/b", "_translate-filesystem-0"),
                ("/c", "_translate-filesystem-2"),
            ]
        );
    }

    #[test]
    fn test_zero_ownership_is_present() {
        let new = translate_file(&file("/etc/motd", "hello"), "fs");

        assert_eq!(new.user, Some(v2_0::NodeUser { id: Some(0) }));
        assert_eq!(new.group, Some(v2_0::NodeGroup { id: Some(0) }));
        assert_eq!(new.mode, Some(0o644));
        assert_eq!(new.contents.source, "data:,hello");
        assert_eq!(new.contents.verification.hash, None);
    }

    #[test]
    fn test_create_options_keep_order() {
        let old = v1::Filesystem {
            create: Some(v1::FilesystemCreate {
                force: true,
                options: vec!["-L".to_string(), "ROOT".to_string()],
            }),
            ..Default::default()
        };

        let new = translate_filesystem(&old, filesystem_name(0));

        let create = new.mount.and_then(|m| m.create).unwrap();
        assert!(create.force);
        assert_eq!(create.options, vec!["-L", "ROOT"]);
    }
}

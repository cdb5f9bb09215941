// SPDX-License-Identifier: GPL-3.0-only

//! Data models for provisioning config documents
//!
//! This crate defines both schema revisions a provisioning document can be
//! written against:
//!
//! - [`v1`]: the original, unversioned schema
//! - [`v2_0`]: the current schema, stamped `2.0.0`
//!
//! The types are plain values. They carry serde derives matching the JSON wire
//! keys of each revision, so the same structs serve decoding, encoding and the
//! in-memory translation between revisions.

pub mod v1;
pub mod v2_0;
pub mod version;

pub use version::{ParseVersionError, SchemaVersion};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v1_decodes_wire_keys() {
        let json = r#"{
            "storage": {
                "disks": [{
                    "device": "/dev/sda",
                    "wipeTable": true,
                    "partitions": [{"label": "ROOT", "number": 1, "size": 100, "start": 50, "typeGuid": "HI"}]
                }],
                "raid": [{"name": "md0", "level": "raid1", "devices": ["/dev/sdb", "/dev/sdc"], "spares": 1}]
            },
            "systemd": {
                "units": [{"name": "a.service", "dropins": [{"name": "10.conf", "contents": "x"}]}]
            },
            "passwd": {
                "users": [{"name": "core", "passwordHash": "h", "sshAuthorizedKeys": ["k"], "create": {}}],
                "groups": [{"name": "ops", "gid": 1000}]
            }
        }"#;

        let config: v1::Config = serde_json::from_str(json).unwrap();

        let disk = &config.storage.disks[0];
        assert!(disk.wipe_table);
        assert_eq!(disk.partitions[0].type_guid, "HI");
        assert_eq!(config.storage.arrays[0].devices, vec!["/dev/sdb", "/dev/sdc"]);
        assert_eq!(config.systemd.units[0].drop_ins[0].name, "10.conf");
        assert!(config.networkd.units.is_empty());

        let user = &config.passwd.users[0];
        assert_eq!(user.password_hash, "h");
        assert_eq!(user.create, Some(v1::UserCreate::default()));
        assert_eq!(config.passwd.groups[0].gid, Some(1000));
    }

    #[test]
    fn test_v1_missing_create_stays_absent() {
        let user: v1::User = serde_json::from_str(r#"{"name": "core"}"#).unwrap();
        assert_eq!(user.create, None);
    }

    #[test]
    fn test_v2_omits_unset_optionals() {
        let file = v2_0::File {
            filesystem: "root".to_string(),
            path: "/etc/motd".to_string(),
            contents: v2_0::FileContents {
                source: "data:,hi".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let value = serde_json::to_value(&file).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("mode"));
        assert!(!object.contains_key("user"));
        assert!(!object.contains_key("group"));
        assert_eq!(value["contents"]["source"], "data:,hi");
        assert!(value["contents"].get("compression").is_none());
    }

    #[test]
    fn test_v2_keeps_zero_ids_distinct_from_unset() {
        let file = v2_0::File {
            user: Some(v2_0::NodeUser { id: Some(0) }),
            group: Some(v2_0::NodeGroup { id: None }),
            ..Default::default()
        };

        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["user"]["id"], 0);
        assert!(value["group"].get("id").is_none());
    }

    #[test]
    fn test_v2_emits_empty_lists() {
        let value = serde_json::to_value(v2_0::Config::default()).unwrap();
        assert_eq!(value["storage"]["files"], serde_json::json!([]));
        assert_eq!(value["storage"]["raid"], serde_json::json!([]));
        assert_eq!(value["passwd"]["groups"], serde_json::json!([]));
    }

    #[test]
    fn test_max_version_string() {
        assert_eq!(v2_0::MAX_VERSION.to_string(), "2.0.0");
    }
}

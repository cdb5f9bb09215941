// SPDX-License-Identifier: GPL-3.0-only

//! Provisioning config translator
//!
//! Converts a v1 document into the equivalent 2.0.0 document. [`translate`]
//! is a pure function of its input: it borrows the old document, builds a new
//! one, and never fails.
//!
//! Each section has its own mapper:
//!
//! - [`storage`]: disks, RAID arrays, filesystems and files
//! - [`systemd`] and [`networkd`]: units and drop-ins
//! - [`passwd`]: users and groups
//!
//! The [`document`] module wraps the translator for callers holding raw JSON.

pub mod content;
pub mod document;
pub mod error;
pub mod networkd;
pub mod passwd;
pub mod storage;
pub mod systemd;

pub use content::{decode_inline_source, inline_source};
pub use document::{SchemaRevision, detect_revision, to_json, upgrade_document};
pub use error::{Result, TranslateError};
pub use storage::filesystem_name;

use provision_types::{v1, v2_0};

/// Translate a v1 document into the 2.0.0 schema
pub fn translate(old: &v1::Config) -> v2_0::Config {
    v2_0::Config {
        ignition: v2_0::Ignition {
            version: v2_0::MAX_VERSION.to_string(),
        },
        storage: storage::translate_storage(&old.storage),
        systemd: systemd::translate_systemd(&old.systemd),
        networkd: networkd::translate_networkd(&old.networkd),
        passwd: passwd::translate_passwd(&old.passwd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_only_stamped() {
        let config = translate(&v1::Config::default());

        assert_eq!(
            config,
            v2_0::Config {
                ignition: v2_0::Ignition {
                    version: "2.0.0".to_string(),
                },
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_input_is_left_untouched() {
        let old = v1::Config {
            networkd: v1::Networkd {
                units: vec![v1::NetworkdUnit {
                    name: "eth0.network".to_string(),
                    contents: "[Match]\nName=eth0\n".to_string(),
                }],
            },
            ..Default::default()
        };
        let snapshot = old.clone();

        let _ = translate(&old);

        assert_eq!(old, snapshot);
    }
}

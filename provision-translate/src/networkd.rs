// SPDX-License-Identifier: GPL-3.0-only

use provision_types::{v1, v2_0};
use tracing::debug;

pub fn translate_networkd(old: &v1::Networkd) -> v2_0::Networkd {
    debug!("Translating {} networkd units", old.units.len());

    v2_0::Networkd {
        units: old
            .units
            .iter()
            .map(|unit| v2_0::NetworkdUnit {
                name: unit.name.clone(),
                contents: unit.contents.clone(),
            })
            .collect(),
    }
}

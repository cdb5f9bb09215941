// SPDX-License-Identifier: GPL-3.0-only

use provision_types::{v1, v2_0};
use tracing::debug;

pub fn translate_systemd(old: &v1::Systemd) -> v2_0::Systemd {
    debug!("Translating {} systemd units", old.units.len());

    v2_0::Systemd {
        units: old.units.iter().map(translate_unit).collect(),
    }
}

fn translate_unit(unit: &v1::Unit) -> v2_0::Unit {
    v2_0::Unit {
        name: unit.name.clone(),
        enable: unit.enable,
        mask: unit.mask,
        contents: unit.contents.clone(),
        dropins: unit
            .drop_ins
            .iter()
            .map(|drop_in| v2_0::Dropin {
                name: drop_in.name.clone(),
                contents: drop_in.contents.clone(),
            })
            .collect(),
    }
}

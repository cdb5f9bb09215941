// SPDX-License-Identifier: GPL-3.0-only

//! Users and groups mapping
//!
//! v1 ids are unsigned and the 2.0.0 ids signed; every `u32` fits in an `i64`,
//! so the re-wrap never loses a value.

use provision_types::{v1, v2_0};
use tracing::debug;

pub fn translate_passwd(old: &v1::Passwd) -> v2_0::Passwd {
    debug!(
        "Translating {} users and {} groups",
        old.users.len(),
        old.groups.len()
    );

    v2_0::Passwd {
        users: old.users.iter().map(translate_user).collect(),
        groups: old.groups.iter().map(translate_group).collect(),
    }
}

fn translate_user(user: &v1::User) -> v2_0::User {
    v2_0::User {
        name: user.name.clone(),
        password_hash: Some(user.password_hash.clone()),
        ssh_authorized_keys: user.ssh_authorized_keys.clone(),
        create: user.create.as_ref().map(translate_user_create),
    }
}

fn translate_user_create(create: &v1::UserCreate) -> v2_0::UserCreate {
    v2_0::UserCreate {
        uid: create.uid.map(i64::from),
        gecos: create.gecos.clone(),
        home_dir: create.home_dir.clone(),
        no_create_home: create.no_create_home,
        primary_group: create.primary_group.clone(),
        groups: create.groups.clone(),
        no_user_group: create.no_user_group,
        system: create.system,
        no_log_init: create.no_log_init,
        shell: create.shell.clone(),
    }
}

fn translate_group(group: &v1::Group) -> v2_0::Group {
    v2_0::Group {
        name: group.name.clone(),
        gid: group.gid.map(i64::from),
        password_hash: group.password_hash.clone(),
        system: group.system,
    }
}

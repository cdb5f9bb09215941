// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Passwd {
    pub users: Vec<User>,
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub name: String,

    /// `None` leaves an existing password untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,

    pub ssh_authorized_keys: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create: Option<UserCreate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<i64>,
    pub gecos: String,
    pub home_dir: String,
    pub no_create_home: bool,
    pub primary_group: String,
    pub groups: Vec<String>,
    pub no_user_group: bool,
    pub system: bool,
    pub no_log_init: bool,
    pub shell: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Group {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<i64>,

    pub password_hash: String,

    pub system: bool,
}

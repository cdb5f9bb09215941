// SPDX-License-Identifier: GPL-3.0-only

//! Users and groups of the v1 schema

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Passwd {
    pub users: Vec<User>,
    pub groups: Vec<Group>,
}

/// A user account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub name: String,

    /// Hashed password, as accepted by `useradd -p`
    pub password_hash: String,

    /// Public keys appended to `~/.ssh/authorized_keys`, in order
    pub ssh_authorized_keys: Vec<String>,

    /// Create the user when set; modify an existing one otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create: Option<UserCreate>,
}

/// Arguments for creating a user account
///
/// An empty directive is meaningful: it asks for the account to be created
/// with every setting left to the system defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<u32>,

    pub gecos: String,

    pub home_dir: String,

    pub no_create_home: bool,

    pub primary_group: String,

    /// Supplementary groups, in order
    pub groups: Vec<String>,

    pub no_user_group: bool,

    pub system: bool,

    pub no_log_init: bool,

    pub shell: String,
}

/// A group account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Group {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<u32>,

    pub password_hash: String,

    pub system: bool,
}

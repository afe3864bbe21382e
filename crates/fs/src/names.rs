use std::collections::HashMap;

use log::debug;
use nix::unistd::{Gid, Group, Uid, User};

/// Placeholder shown when an id has no symbolic name.
pub const UNKNOWN_NAME: &str = "unknown";

/// Maps numeric owner and group ids to symbolic names.
///
/// A miss is not an error; callers substitute [`UNKNOWN_NAME`].
pub trait NameResolver {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;

    fn user_or_unknown(&self, uid: u32) -> String {
        self.user_name(uid).unwrap_or_else(|| UNKNOWN_NAME.to_owned())
    }

    fn group_or_unknown(&self, gid: u32) -> String {
        self.group_name(gid).unwrap_or_else(|| UNKNOWN_NAME.to_owned())
    }
}

/// Resolves through the system user and group databases (`getpwuid_r`, `getgrgid_r`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNames;

impl NameResolver for SystemNames {
    fn user_name(&self, uid: u32) -> Option<String> {
        match User::from_uid(Uid::from_raw(uid)) {
            Ok(user) => user.map(|u| u.name),
            Err(e) => {
                debug!("[names] user lookup for uid {uid} failed: {e}");
                None
            }
        }
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        match Group::from_gid(Gid::from_raw(gid)) {
            Ok(group) => group.map(|g| g.name),
            Err(e) => {
                debug!("[names] group lookup for gid {gid} failed: {e}");
                None
            }
        }
    }
}

/// Fixed id-to-name table.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, uid: u32, name: impl Into<String>) -> Self {
        self.users.insert(uid, name.into());
        self
    }

    pub fn with_group(mut self, gid: u32, name: impl Into<String>) -> Self {
        self.groups.insert(gid, name.into());
        self
    }
}

impl NameResolver for NameTable {
    fn user_name(&self, uid: u32) -> Option<String> {
        self.users.get(&uid).cloned()
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        self.groups.get(&gid).cloned()
    }
}

#[cfg(test)]
#[path = "names_tests.rs"]
mod tests;

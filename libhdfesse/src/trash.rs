/*
   Copyright 2021 Ivan Boldyrev

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/
use std::time::{SystemTime, UNIX_EPOCH};

/// Per-user trash policy: `delete` moves a path under
/// `/user/<user>/.Trash/Current` instead of removing it, unless trash is
/// disabled or the path is itself inside (or an ancestor of) the trash root.
pub struct TrashPolicy {
    user: String,
}

impl TrashPolicy {
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }

    pub fn trash_root(&self) -> String {
        format!("/user/{}/.Trash", self.user)
    }

    pub fn current_dir(&self) -> String {
        format!("{}/Current", self.trash_root())
    }

    /// Whether `delete(path)` should go through trash rather than being a
    /// hard delete.
    pub fn is_enabled(&self, path: &str, use_trash: bool) -> bool {
        use_trash && !self.is_inside_trash(path) && !self.trash_is_ancestor_of(path)
    }

    fn is_inside_trash(&self, path: &str) -> bool {
        let root = self.trash_root();
        path == root || path.starts_with(&format!("{}/", root))
    }

    fn trash_is_ancestor_of(&self, path: &str) -> bool {
        let root = self.trash_root();
        root == path || root.starts_with(&format!("{}/", path.trim_end_matches('/')))
    }

    /// Computes where `path` should land under `Current`, preserving its
    /// full path below the trash root. On a name collision, retries twice
    /// with a `.<millis>` suffix before giving up and returning the last
    /// candidate regardless.
    pub fn destination_for<E>(
        &self,
        path: &str,
        mut exists: impl FnMut(&str) -> Result<bool, E>,
    ) -> Result<String, E> {
        let base = format!("{}{}", self.current_dir(), path);
        if !exists(&base)? {
            return Ok(base);
        }

        let mut candidate = base.clone();
        for _ in 0..2 {
            candidate = format!("{}.{}", base, now_millis());
            if !exists(&candidate)? {
                return Ok(candidate);
            }
        }
        Ok(candidate)
    }
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_enabled_plain_path() {
        let policy = TrashPolicy::new("alice");
        assert!(policy.is_enabled("/data/file.txt", true));
        assert!(!policy.is_enabled("/data/file.txt", false));
    }

    #[test]
    fn test_is_enabled_path_inside_trash() {
        let policy = TrashPolicy::new("alice");
        assert!(!policy.is_enabled("/user/alice/.Trash/Current/data/file.txt", true));
        assert!(!policy.is_enabled("/user/alice/.Trash", true));
    }

    #[test]
    fn test_is_enabled_trash_is_descendant_of_path() {
        let policy = TrashPolicy::new("alice");
        // deleting /user/alice would remove the trash root itself.
        assert!(!policy.is_enabled("/user/alice", true));
        assert!(!policy.is_enabled("/user", true));
    }

    #[test]
    fn test_destination_for_no_collision() {
        let policy = TrashPolicy::new("alice");
        let dest = policy
            .destination_for("/data/file.txt", |_| Ok::<_, ()>(false))
            .unwrap();
        assert_eq!(dest, "/user/alice/.Trash/Current/data/file.txt");
    }

    #[test]
    fn test_destination_for_collision_resolves_with_suffix() {
        let policy = TrashPolicy::new("alice");
        let mut calls = 0;
        let dest = policy
            .destination_for("/data/file.txt", |_| {
                calls += 1;
                Ok::<_, ()>(calls == 1)
            })
            .unwrap();
        assert_ne!(dest, "/user/alice/.Trash/Current/data/file.txt");
        assert!(dest.starts_with("/user/alice/.Trash/Current/data/file.txt."));
    }
}

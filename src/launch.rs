//! Per-launch scratch identity and the cleanup sweep for previous launches.
//!
//! Scratch directories live under `<temp>/<marker>/<launch token>/...`.
//! The token keeps one launch's directories apart from leftovers of earlier
//! launches, so the sweep can delete the latter without ever racing the
//! former. Nothing is deleted unless [`notify_launch`] is invoked.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::thread;

use uuid::Uuid;

/// Fixed marker segment under the temp directory holding all
/// delete-on-launch scratch directories.
pub(crate) const PENDING_DELETE_DIR: &str = "stowage-delete-on-launch";

static LAUNCH_TOKEN: OnceLock<String> = OnceLock::new();

/// Token identifying the current process launch.
///
/// Generated once on first use and reused for the process lifetime.
pub fn launch_token() -> &'static str {
    LAUNCH_TOKEN.get_or_init(|| Uuid::new_v4().to_string())
}

/// Root of all delete-on-launch scratch directories, across launches.
pub(crate) fn pending_delete_root() -> PathBuf {
    std::env::temp_dir().join(PENDING_DELETE_DIR)
}

/// Scratch root owned by the current launch.
pub(crate) fn launch_scratch_dir() -> PathBuf {
    pending_delete_root().join(launch_token())
}

/// Sweeps scratch directories left behind by previous process launches.
///
/// Fire-and-forget: the sweep runs on a detached background thread and this
/// function returns immediately. Invoking it more than once just repeats a
/// harmless sweep. The current launch's own scratch directory is never
/// touched.
pub fn notify_launch() {
    let root = pending_delete_root();
    let keep = launch_token().to_owned();
    let spawned = thread::Builder::new()
        .name("stowage-sweep".into())
        .spawn(move || sweep_stale_launches(&root, &keep));
    if let Err(error) = spawned {
        tracing::debug!(%error, "could not spawn launch cleanup thread");
    }
}

/// Deletes every immediate child of `root` except hidden entries and the
/// one named `keep`. Individual deletion failures are ignored.
fn sweep_stale_launches(root: &Path, keep: &str) {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        // Nothing left behind, or the marker directory was never created.
        Err(_) => return,
    };
    tracing::debug!(root = %root.display(), "sweeping stale launch directories");
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.starts_with('.') || name == keep {
            continue;
        }
        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        let removed = if is_dir {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        if let Err(error) = removed {
            tracing::debug!(path = %path.display(), %error, "could not remove stale entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn launch_token_is_stable_within_a_process() {
        assert_eq!(launch_token(), launch_token());
    }

    #[test]
    fn scratch_dir_is_rooted_under_the_marker_and_token() {
        let dir = launch_scratch_dir();
        assert!(dir.ends_with(Path::new(PENDING_DELETE_DIR).join(launch_token())));
    }

    #[test]
    fn sweep_removes_stale_entries_and_keeps_the_current_launch() {
        let root = TempDir::new().unwrap();
        let stale_a = root.path().join("11111111-aaaa-4bbb-8ccc-000000000001");
        let stale_b = root.path().join("11111111-aaaa-4bbb-8ccc-000000000002");
        let current = root.path().join(launch_token());
        fs::create_dir_all(stale_a.join("images")).unwrap();
        fs::create_dir_all(&stale_b).unwrap();
        fs::create_dir_all(&current).unwrap();
        fs::write(current.join("live.dat"), b"live").unwrap();

        sweep_stale_launches(root.path(), launch_token());

        assert!(!stale_a.exists());
        assert!(!stale_b.exists());
        assert!(current.join("live.dat").exists());

        // A repeated sweep is a no-op.
        sweep_stale_launches(root.path(), launch_token());
        assert!(current.exists());
    }

    #[test]
    fn sweep_skips_hidden_entries() {
        let root = TempDir::new().unwrap();
        let hidden = root.path().join(".DS_Store");
        fs::write(&hidden, b"").unwrap();

        sweep_stale_launches(root.path(), launch_token());

        assert!(hidden.exists());
    }

    #[test]
    fn sweep_removes_stray_plain_files() {
        let root = TempDir::new().unwrap();
        let stray = root.path().join("not-a-directory");
        fs::write(&stray, b"leftover").unwrap();

        sweep_stale_launches(root.path(), launch_token());

        assert!(!stray.exists());
    }

    #[test]
    fn sweep_tolerates_a_missing_root() {
        sweep_stale_launches(Path::new("/nonexistent/stowage-sweep-root"), launch_token());
    }
}

use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use log::debug;

/// Directory searched after `$HOME`.
pub const SYSTEM_BIN_DIR: &str = "/bin";

/// Directories searched for a command, in order.
///
/// `$HOME` comes first when it is set and non-empty, `/bin` always last. The
/// order is fixed.
pub fn search_dirs(home: Option<&str>) -> Vec<&str> {
    let mut dirs = Vec::with_capacity(2);
    if let Some(home) = home.filter(|home| !home.is_empty()) {
        dirs.push(home);
    }
    dirs.push(SYSTEM_BIN_DIR);
    dirs
}

/// Finds the executable for `command`, first match wins.
///
/// The check is only valid at the instant it runs; the file may change
/// before it is executed.
pub fn resolve(command: &str, home: Option<&str>) -> Option<PathBuf> {
    let found = search_dirs(home)
        .into_iter()
        .map(|dir| PathBuf::from(format!("{}/{}", dir, command)))
        .find(|candidate| {
            let executable = is_executable(candidate);
            debug!("candidate {}: executable={}", candidate.display(), executable);
            executable
        });

    if found.is_none() {
        debug!("no executable found for {:?}", command);
    }
    found
}

/// True if `path` exists and the effective user may execute it.
pub fn is_executable(path: &Path) -> bool {
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::faccessat(libc::AT_FDCWD, c_path.as_ptr(), libc::X_OK, libc::AT_EACCESS) == 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn home_of(dir: &tempfile::TempDir) -> String {
        dir.path().to_string_lossy().into_owned()
    }

    #[test]
    fn test_search_dirs_order() {
        assert_eq!(search_dirs(Some("/home/me")), vec!["/home/me", "/bin"]);
        assert_eq!(search_dirs(None), vec!["/bin"]);
        assert_eq!(search_dirs(Some("")), vec!["/bin"]);
    }

    #[test]
    fn test_home_wins_over_bin() {
        let _guard = testing::process_lock();
        let dir = tempfile::tempdir().unwrap();
        let home = home_of(&dir);
        testing::write_script(dir.path(), "sh", "exit 0");

        let resolved = resolve("sh", Some(&home)).unwrap();
        assert_eq!(resolved, PathBuf::from(format!("{}/sh", home)));
    }

    #[test]
    fn test_falls_back_to_bin() {
        let dir = tempfile::tempdir().unwrap();
        let home = home_of(&dir);

        assert_eq!(resolve("sh", Some(&home)), Some(PathBuf::from("/bin/sh")));
    }

    #[test]
    fn test_non_executable_home_entry_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let home = home_of(&dir);
        testing::write_plain_file(dir.path(), "sh");

        assert_eq!(resolve("sh", Some(&home)), Some(PathBuf::from("/bin/sh")));
    }

    #[test]
    fn test_unset_or_empty_home_only_tries_bin() {
        assert_eq!(resolve("sh", None), Some(PathBuf::from("/bin/sh")));
        assert_eq!(resolve("sh", Some("")), Some(PathBuf::from("/bin/sh")));
    }

    #[test]
    fn test_missing_home_directory_still_tries_bin() {
        assert_eq!(
            resolve("sh", Some("/definitely/not/a/home")),
            Some(PathBuf::from("/bin/sh"))
        );
    }

    #[test]
    fn test_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let home = home_of(&dir);
        assert_eq!(resolve("frobnicate", Some(&home)), None);
        assert_eq!(resolve("frobnicate", None), None);
    }

    #[test]
    fn test_is_executable() {
        let _guard = testing::process_lock();
        let dir = tempfile::tempdir().unwrap();
        let script = testing::write_script(dir.path(), "run-me", "exit 0");
        let plain = testing::write_plain_file(dir.path(), "read-me");

        assert!(is_executable(&script));
        assert!(!is_executable(&plain));
        assert!(!is_executable(&dir.path().join("missing")));
        assert!(!is_executable(Path::new("bad\0path")));
    }
}

use std::collections::BTreeSet;
use std::fs;

use rustyline::completion::Pair;

use crate::core::resolver::{is_executable, search_dirs};

/// Completes the first word from built-ins and the executables the
/// resolver would find.
#[derive(Clone)]
pub struct CommandCompleter {
    builtins: Vec<&'static str>,
}

impl CommandCompleter {
    pub fn new(builtins: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            builtins: builtins.into_iter().collect(),
        }
    }

    /// Candidate names starting with `prefix`, sorted and de-duplicated.
    pub fn complete_command(&self, prefix: &str, home: Option<&str>) -> Vec<Pair> {
        let mut names: BTreeSet<String> = self
            .builtins
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| name.to_string())
            .collect();

        for dir in search_dirs(home) {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                if let Some(name) = entry.file_name().to_str() {
                    if name.starts_with(prefix) && is_executable(&entry.path()) {
                        names.insert(name.to_string());
                    }
                }
            }
        }

        names
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: format!("{} ", name),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn displays(pairs: &[Pair]) -> Vec<&str> {
        pairs.iter().map(|p| p.display.as_str()).collect()
    }

    #[test]
    fn test_completes_builtins() {
        let completer = CommandCompleter::new(["cd", "exit"]);
        let pairs = completer.complete_command("ex", Some("/nonexistent/home"));
        assert!(displays(&pairs).contains(&"exit"));
        assert!(!displays(&pairs).contains(&"cd"));
    }

    #[test]
    fn test_completes_home_executables_only() {
        let _guard = testing::process_lock();
        let dir = tempfile::tempdir().unwrap();
        testing::write_script(dir.path(), "zzmini-tool", "exit 0");
        testing::write_plain_file(dir.path(), "zzmini-notes");
        let home = dir.path().to_string_lossy().into_owned();

        let completer = CommandCompleter::new(["cd", "exit"]);
        let pairs = completer.complete_command("zzmini-", Some(&home));
        assert_eq!(displays(&pairs), vec!["zzmini-tool"]);
        assert_eq!(pairs[0].replacement, "zzmini-tool ");
    }
}

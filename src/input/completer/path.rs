use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Completes file and directory names for arguments, relative to the
/// working directory unless the word is absolute.
#[derive(Clone)]
pub struct PathCompleter;

impl Default for PathCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir_to_search, file_prefix) = split_incomplete(incomplete);
        let mut matches = Vec::new();

        if let Ok(entries) = fs::read_dir(&dir_to_search) {
            for entry in entries.filter_map(Result::ok) {
                let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                    continue;
                };
                if !name.starts_with(&file_prefix) {
                    continue;
                }
                matches.push(completion_pair(incomplete, &file_prefix, &name, &entry.path()));
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

/// Splits `dir/partial` into the directory to list and the name prefix.
fn split_incomplete(incomplete: &str) -> (PathBuf, String) {
    match incomplete.rfind('/') {
        Some(0) => (PathBuf::from("/"), incomplete[1..].to_string()),
        Some(idx) => (
            PathBuf::from(&incomplete[..idx]),
            incomplete[idx + 1..].to_string(),
        ),
        None => (PathBuf::from("."), incomplete.to_string()),
    }
}

fn completion_pair(incomplete: &str, file_prefix: &str, name: &str, path: &Path) -> Pair {
    // Keep whatever directory part the user already typed.
    let typed_dir = &incomplete[..incomplete.len() - file_prefix.len()];
    let full = format!("{}{}", typed_dir, name);

    if path.is_dir() {
        Pair {
            display: format!("{}/", name),
            replacement: format!("{}/", full),
        }
    } else {
        Pair {
            display: name.to_string(),
            replacement: format!("{} ", full),
        }
    }
}

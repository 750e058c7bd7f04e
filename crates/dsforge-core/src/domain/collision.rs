//! Non-colliding file naming.
//!
//! Policy: keep the candidate when it is free, otherwise insert a numeric
//! counter before the suffix, starting at 1, and take the first free one.
//!
//! ```text
//! memory.db.json → memory-1.db.json → memory-2.db.json → ...
//! notes.txt      → notes-1.txt
//! README         → README-1
//! ```
//!
//! The existence check is injected so the policy stays pure and can be
//! driven by any filesystem port.

use std::path::{Path, PathBuf};

/// Compound suffix of embedded store data files.
pub const DATA_FILE_SUFFIX: &str = ".db.json";

/// Return `candidate` if `exists` reports it free, otherwise the first free
/// counter-suffixed sibling.
pub fn non_colliding_path(candidate: &Path, exists: impl Fn(&Path) -> bool) -> PathBuf {
    if !exists(candidate) {
        return candidate.to_path_buf();
    }

    let file_name = candidate
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (stem, suffix) = split_suffix(&file_name);
    let parent = candidate.parent().unwrap_or_else(|| Path::new(""));

    let mut counter: u64 = 1;
    loop {
        let next = parent.join(format!("{stem}-{counter}{suffix}"));
        if !exists(&next) {
            return next;
        }
        counter += 1;
    }
}

/// Split a file name into the part the counter follows and the suffix it
/// precedes. `.db.json` is kept whole so renamed files still match it.
fn split_suffix(file_name: &str) -> (&str, &str) {
    if let Some(stem) = file_name.strip_suffix(DATA_FILE_SUFFIX) {
        if !stem.is_empty() {
            return (stem, DATA_FILE_SUFFIX);
        }
    }
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => file_name.split_at(idx),
        _ => (file_name, ""),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn taken(paths: &[&str]) -> HashSet<PathBuf> {
        paths.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn free_candidate_is_kept() {
        let existing = taken(&[]);
        let path = non_colliding_path(Path::new("memory.db.json"), |p| existing.contains(p));
        assert_eq!(path, PathBuf::from("memory.db.json"));
    }

    #[test]
    fn collision_gets_counter_before_compound_suffix() {
        let existing = taken(&["memory.db.json"]);
        let path = non_colliding_path(Path::new("memory.db.json"), |p| existing.contains(p));
        assert_eq!(path, PathBuf::from("memory-1.db.json"));
        assert!(path.to_string_lossy().ends_with(DATA_FILE_SUFFIX));
    }

    #[test]
    fn counter_skips_taken_names() {
        let existing = taken(&["memory.db.json", "memory-1.db.json", "memory-2.db.json"]);
        let path = non_colliding_path(Path::new("memory.db.json"), |p| existing.contains(p));
        assert_eq!(path, PathBuf::from("memory-3.db.json"));
    }

    #[test]
    fn nested_candidate_stays_in_its_directory() {
        let existing = taken(&["data/db.json"]);
        let path = non_colliding_path(Path::new("data/db.json"), |p| existing.contains(p));
        assert_eq!(path, PathBuf::from("data/db-1.json"));
    }

    #[test]
    fn plain_and_dotfile_names() {
        assert_eq!(split_suffix("README"), ("README", ""));
        assert_eq!(split_suffix(".env"), (".env", ""));
        assert_eq!(split_suffix("notes.txt"), ("notes", ".txt"));
        assert_eq!(split_suffix(".db.json"), (".db", ".json"));
    }

    #[test]
    fn policy_is_deterministic() {
        let existing = taken(&["memory.db.json"]);
        let first = non_colliding_path(Path::new("memory.db.json"), |p| existing.contains(p));
        let second = non_colliding_path(Path::new("memory.db.json"), |p| existing.contains(p));
        assert_eq!(first, second);
    }
}

use serde::{Deserialize, Serialize};

/// Kind of entry in a directory listing.
///
/// `Other` covers anything that is neither a plain file nor a directory
/// (symlinks, submodules). Such entries are counted as leaves but never
/// recursed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    #[serde(other)]
    Other,
}

impl EntryKind {
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Dir)
    }
}

/// A single entry in a repository directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    name: String,
    /// Path relative to the repository root.
    path: String,
    kind: EntryKind,
}

impl TreeEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }
}

/// Outcome of a full tree walk.
///
/// `file_count` is the exact number of leaf (non-directory) entries anywhere
/// under the scanned path. `manifest_path`, when present, names the first
/// manifest file in depth-first traversal order; later candidates are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeScanResult {
    file_count: u64,
    manifest_path: Option<String>,
}

impl TreeScanResult {
    pub fn new(file_count: u64, manifest_path: Option<String>) -> Self {
        Self {
            file_count,
            manifest_path,
        }
    }

    pub fn file_count(&self) -> u64 {
        self.file_count
    }

    pub fn manifest_path(&self) -> Option<&str> {
        self.manifest_path.as_deref()
    }
}

//! Corpus tree lifecycle: reset, initialization and label maintenance
//!
//! The tree has a fixed shape:
//!
//! ```text
//! root/
//! ├── train_set/<label>/#0.txt, #1.txt, ...
//! └── test_set/<label>/#0.txt, ...
//! ```
//!
//! Once initialized, everything under `root` is owned by this crate. Two
//! processes working on the same root at once is unsupported.

use crate::error::{CorpusError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the training set folder under the corpus root
pub const TRAIN_SET_DIR: &str = "train_set";

/// Name of the test set folder under the corpus root
pub const TEST_SET_DIR: &str = "test_set";

/// Extension of every segment file
pub const SEGMENT_EXTENSION: &str = "txt";

/// File name of the segment at `index` (`#<index>.txt`)
pub fn segment_file_name(index: usize) -> String {
    format!("#{}.{}", index, SEGMENT_EXTENSION)
}

/// Index encoded in a segment file name, if it follows the `#<n>.` pattern
pub fn parse_segment_index(file_name: &str) -> Option<usize> {
    file_name
        .strip_prefix('#')?
        .split('.')
        .next()?
        .parse()
        .ok()
}

/// Paths of an initialized corpus tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusPaths {
    /// Corpus root
    pub root: PathBuf,
    /// Training set folder
    pub train: PathBuf,
    /// Test set folder
    pub test: PathBuf,
}

/// Owner of the on-disk corpus tree rooted at one path
#[derive(Debug, Clone)]
pub struct CorpusTree {
    root: PathBuf,
}

impl CorpusTree {
    /// Create a handle for the tree at `root` (nothing touches disk yet)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Corpus root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths the tree uses, whether or not they exist yet
    pub fn paths(&self) -> CorpusPaths {
        CorpusPaths {
            root: self.root.clone(),
            train: self.root.join(TRAIN_SET_DIR),
            test: self.root.join(TEST_SET_DIR),
        }
    }

    /// Delete any existing tree at the root
    ///
    /// Walks exactly three levels (set folder, label folder, segment file),
    /// removing files and then each emptied folder, and finally the root.
    /// Anything that does not fit that shape, or any removal failure, aborts
    /// with [`CorpusError::Cleanup`] and leaves the rest untouched.
    pub fn reset(&self) -> Result<()> {
        if !self.root.exists() {
            return Ok(());
        }
        if !self.root.is_dir() {
            return Err(CorpusError::cleanup(
                &self.root,
                io::Error::other("corpus root is not a directory"),
            ));
        }

        let mut removed_files = 0;
        for set_dir in cleanup_entries(&self.root)? {
            for label_dir in cleanup_entries(&set_dir)? {
                for file in cleanup_entries(&label_dir)? {
                    fs::remove_file(&file).map_err(|e| CorpusError::cleanup(&file, e))?;
                    removed_files += 1;
                }
                fs::remove_dir(&label_dir).map_err(|e| CorpusError::cleanup(&label_dir, e))?;
            }
            fs::remove_dir(&set_dir).map_err(|e| CorpusError::cleanup(&set_dir, e))?;
        }
        fs::remove_dir(&self.root).map_err(|e| CorpusError::cleanup(&self.root, e))?;

        info!("Removed corpus tree at {} ({} files)", self.root.display(), removed_files);
        Ok(())
    }

    /// Reset the tree and recreate the root with empty train and test sets
    pub fn initialize(&self) -> Result<CorpusPaths> {
        self.reset()?;

        let paths = self.paths();
        fs::create_dir_all(&paths.root).map_err(|e| CorpusError::io(&paths.root, e))?;
        fs::create_dir(&paths.train).map_err(|e| CorpusError::io(&paths.train, e))?;
        fs::create_dir(&paths.test).map_err(|e| CorpusError::io(&paths.test, e))?;

        debug!("Initialized corpus tree at {}", paths.root.display());
        Ok(paths)
    }
}

/// Ensure every label folder under `train` also exists under `test`
///
/// Missing test labels are created empty so a classifier trained on every
/// train label can be evaluated against the same label space. Returns the
/// number of folders created.
pub fn fill_missing_labels(train: &Path, test: &Path) -> Result<usize> {
    let mut created = 0;
    for label_dir in label_dirs(train)? {
        let Some(label) = label_dir.file_name() else {
            continue;
        };
        let target = test.join(label);
        if !target.is_dir() {
            fs::create_dir(&target).map_err(|e| CorpusError::io(&target, e))?;
            debug!("Created empty test label {}", target.display());
            created += 1;
        }
    }

    if created > 0 {
        info!("Filled {} missing test labels", created);
    }
    Ok(created)
}

/// Delete every segment file whose index is `max_files` or above
///
/// Applied to each label folder under `set_dir`. Caps large generated label
/// sets before smaller sources are merged in. Files not named `#<n>.txt` are
/// left alone. Returns the number of files removed.
pub fn reduce_label_files(set_dir: &Path, max_files: usize) -> Result<usize> {
    let mut removed = 0;
    for label_dir in label_dirs(set_dir)? {
        let entries = fs::read_dir(&label_dir).map_err(|e| CorpusError::io(&label_dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| CorpusError::io(&label_dir, e))?;
            let name = entry.file_name();
            let Some(index) = parse_segment_index(&name.to_string_lossy()) else {
                continue;
            };
            if index >= max_files {
                let path = entry.path();
                fs::remove_file(&path).map_err(|e| CorpusError::io(&path, e))?;
                removed += 1;
            }
        }
    }

    info!("Reduced {} to {} files per label ({} removed)", set_dir.display(), max_files, removed);
    Ok(removed)
}

/// Label folders directly under a set folder, sorted by name
pub fn label_dirs(set_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(set_dir).map_err(|e| CorpusError::io(set_dir, e))?;
    let mut dirs = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| CorpusError::io(set_dir, e))?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Entries of a folder being torn down; any failure is a cleanup failure
fn cleanup_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| CorpusError::cleanup(dir, e))?;
    entries
        .map(|entry| {
            entry
                .map(|e| e.path())
                .map_err(|e| CorpusError::cleanup(dir, e))
        })
        .collect()
}

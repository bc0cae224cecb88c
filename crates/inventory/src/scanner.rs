use ignore::WalkBuilder;
use reuse_similarity::InventoryItem;
use std::path::{Path, PathBuf};

/// Directories that never hold reusable components.
const IGNORED_DIRS: &[&str] = &[
    "__tests__",
    "node_modules",
    ".git",
    "dist",
    "build",
    "coverage",
    "storybook-static",
];

/// Extensions a component file may carry.
const COMPONENT_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

/// Barrel files re-export components and are never components themselves.
const INDEX_FILES: &[&str] = &["index.ts", "index.tsx", "index.js", "index.jsx"];

/// Collector for existing component files under a components root.
pub struct ComponentScanner {
    root: PathBuf,
}

impl ComponentScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Walk the components tree and build the inventory, normalizing each
    /// name once. A missing root is an empty inventory, not an error.
    pub fn collect(&self) -> Vec<InventoryItem> {
        if !self.root.is_dir() {
            log::debug!("Components root {} does not exist", self.root.display());
            return Vec::new();
        }

        let mut items = Vec::new();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(true) // skip hidden files and directories
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .sort_by_file_path(|a, b| a.cmp(b));
        builder.filter_entry(|entry| !is_ignored_dir(entry.path()));

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                        continue;
                    };
                    if !is_component_file(name) || is_test_file(name) || is_index_file(name) {
                        continue;
                    }

                    let relative = path.strip_prefix(&self.root).unwrap_or(path);
                    items.push(InventoryItem::new(name, to_slash_path(relative)));
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        log::debug!(
            "Collected {} component files under {}",
            items.len(),
            self.root.display()
        );
        items
    }
}

/// Test and spec files describe components; they are not reusable themselves.
pub fn is_test_file(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    lowered.contains(".test.") || lowered.contains(".spec.")
}

/// Index/barrel files are excluded from the inventory by policy.
pub fn is_index_file(name: &str) -> bool {
    INDEX_FILES
        .iter()
        .any(|candidate| name.eq_ignore_ascii_case(candidate))
}

fn is_component_file(name: &str) -> bool {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return false;
    };
    COMPONENT_EXTENSIONS
        .iter()
        .any(|candidate| ext.eq_ignore_ascii_case(candidate))
}

fn is_ignored_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| IGNORED_DIRS.iter().any(|ignored| name.eq_ignore_ascii_case(ignored)))
}

fn to_slash_path(path: &Path) -> String {
    let parts: Vec<_> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    parts.join("/")
}

//! Project markers and excluded directories.

/// Files whose presence makes a directory a project root, one per ecosystem.
pub const PROJECT_MARKERS: &[&str] = &[
    // Go modules
    "go.mod",
    // JavaScript packages
    "package.json",
];

/// Dependency caches and build artifacts never worth descending into.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", "__pycache__"];

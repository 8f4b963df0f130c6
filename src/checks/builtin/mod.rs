//! Built-in checks.
//!
//! Each adapter pairs a requirement list with a tool invocation and a pure
//! `parse_*` function translating the tool's output into issues. The parsers
//! are tested on captured output without running any tool.
//!
//! Registration order here is report order: Go checks first, then the
//! JavaScript checks with npm before bun for each tool.

pub mod go_fmt;
pub mod go_test;
pub mod go_vet;
pub mod prettier;
pub mod staticcheck;
pub mod svelte_check;

pub use go_fmt::GofmtCheck;
pub use go_test::GoTestCheck;
pub use go_vet::GoVetCheck;
pub use js_test::JsTestCheck;
pub use prettier::PrettierCheck;
pub use staticcheck::StaticcheckCheck;
pub use svelte_check::SvelteCheck;

use super::Check;

/// Prefix of the Go toolchain's module download notices.
pub(crate) const GO_DOWNLOADING: &str = "go: downloading";

/// A JavaScript package manager and the lock file that selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageManager {
    /// Executable name, also used as the check name prefix.
    pub executable: &'static str,
    /// Lock file whose presence means the project uses this manager.
    pub lock_file: &'static str,
}

pub const NPM: PackageManager = PackageManager {
    executable: "npm",
    lock_file: "package-lock.json",
};

pub const BUN: PackageManager = PackageManager {
    executable: "bun",
    lock_file: "bun.lock",
};

/// Package managers in registration order.
pub const PACKAGE_MANAGERS: [PackageManager; 2] = [NPM, BUN];

/// Whether a line is the `> package@version script` echo that `npm run`
/// prints before the script's own output.
pub(crate) fn is_script_banner(line: &str) -> bool {
    line.starts_with("> ") || line == ">"
}

/// Every built-in check, in registration order.
pub fn all() -> Vec<Box<dyn Check>> {
    let mut checks: Vec<Box<dyn Check>> = vec![
        Box::new(GofmtCheck::new()),
        Box::new(StaticcheckCheck::new()),
        Box::new(GoTestCheck::new()),
        Box::new(GoVetCheck::new()),
    ];
    for pm in PACKAGE_MANAGERS {
        checks.push(Box::new(PrettierCheck::new(pm)));
    }
    for pm in PACKAGE_MANAGERS {
        checks.push(Box::new(SvelteCheck::new(pm)));
    }
    for pm in PACKAGE_MANAGERS {
        checks.push(Box::new(JsTestCheck::new(pm)));
    }
    checks
}

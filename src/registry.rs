// src/registry.rs

//! The runner registry: which test suites exist and how to invoke them.

/// The default set of runners: three test frameworks plus the aggregate
/// "parallel" suite that exercises them together.
pub const DEFAULT_RUNNERS: [&str; 4] = ["ava", "jest", "mocha", "parallel"];

/// One named external test command to execute.
///
/// `command` is the argument list handed to the package manager, e.g.
/// `["run", "test-ava"]` for `npm run test-ava`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerSpec {
    pub name: String,
    pub command: Vec<String>,
}

/// Build the registry for the given runner names, in order.
///
/// Each name maps to the package-manager script `test-<name>`. Taking the
/// name list as an argument (rather than reading a global) lets tests
/// substitute their own runner set.
pub fn build_registry(names: &[&str]) -> Vec<RunnerSpec> {
    names
        .iter()
        .map(|name| RunnerSpec {
            name: (*name).to_string(),
            command: vec!["run".to_string(), format!("test-{name}")],
        })
        .collect()
}

//! Platform detection for the pull-request merge tooling.
//!
//! The merge scripts behave differently on Windows hosts (shell invocation,
//! git executable name, line endings), so everything that needs to branch on
//! the host OS asks this crate instead of re-deriving the answer.

pub mod command;
pub mod detect;
pub mod probe;
pub mod report;

pub use command::{git_executable, line_ending, shell_command};
pub use detect::{is_windows, is_windows_name, probe_is_windows};
pub use probe::{HostProbe, PlatformProbe};
pub use report::HostReport;

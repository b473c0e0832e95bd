//! Command-shape differences between Windows and Unix hosts.

use std::process::Command;

use crate::detect::is_windows;

/// Shell wrapper for a full command line: `cmd /C` on Windows, `sh -c`
/// elsewhere. The returned command is not spawned.
pub fn shell_command(command_line: &str) -> Command {
    if is_windows() {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command_line]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command_line]);
        cmd
    }
}

/// Name of the git executable on this host.
pub fn git_executable() -> &'static str {
    if is_windows() {
        "git.exe"
    } else {
        "git"
    }
}

/// Line-ending convention of this host.
pub fn line_ending() -> &'static str {
    if is_windows() {
        "\r\n"
    } else {
        "\n"
    }
}

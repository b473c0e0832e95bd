use crate::probe::{HostProbe, PlatformProbe};

/// True if `os_name` names a Windows-family OS.
///
/// Prefix match on the lowercased name, so "Windows", "WINDOWS" and "win32"
/// all count. Empty and unrecognized names fall through to `false`.
pub fn is_windows_name(os_name: &str) -> bool {
    os_name.to_lowercase().starts_with("win")
}

/// Run the detector against an injected probe.
pub fn probe_is_windows(probe: &dyn PlatformProbe) -> bool {
    is_windows_name(&probe.os_name())
}

/// Is this process running on a Windows host?
pub fn is_windows() -> bool {
    probe_is_windows(&HostProbe)
}

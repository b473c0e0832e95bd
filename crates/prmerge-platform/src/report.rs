use serde::Serialize;
use tracing::debug;

use crate::detect::is_windows_name;
use crate::probe::PlatformProbe;

/// Host identity as seen by the detector.
#[derive(Debug, Clone, Serialize)]
pub struct HostReport {
    pub os_name: String,
    pub arch: String,
    pub hostname: String,
    pub windows: bool,
}

impl HostReport {
    /// Collect a report from the given probe.
    pub fn collect(probe: &dyn PlatformProbe) -> Self {
        let os_name = probe.os_name();
        let windows = is_windows_name(&os_name);
        let hostname = hostname::get()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        debug!("host probe: os={}, windows={}", os_name, windows);
        Self {
            os_name,
            arch: probe.arch(),
            hostname,
            windows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe {
        os: &'static str,
        arch: &'static str,
    }

    impl PlatformProbe for FixedProbe {
        fn os_name(&self) -> String {
            self.os.to_string()
        }

        fn arch(&self) -> String {
            self.arch.to_string()
        }
    }

    #[test]
    fn test_report_reflects_probe() {
        let report = HostReport::collect(&FixedProbe {
            os: "win32",
            arch: "aarch64",
        });
        assert_eq!(report.os_name, "win32");
        assert_eq!(report.arch, "aarch64");
        assert!(report.windows);
        assert!(!report.hostname.is_empty());
    }

    #[test]
    fn test_report_non_windows() {
        let report = HostReport::collect(&FixedProbe {
            os: "linux",
            arch: "x86_64",
        });
        assert!(!report.windows);
    }

    #[test]
    fn test_report_serializes_expected_keys() {
        let report = HostReport::collect(&FixedProbe {
            os: "linux",
            arch: "x86_64",
        });
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["os_name"], "linux");
        assert_eq!(json["arch"], "x86_64");
        assert_eq!(json["windows"], false);
        assert!(json["hostname"].is_string());
    }
}

//! Platform detection for package-manager invocation

use std::env;

/// Information about the current platform for building task commands
#[derive(Debug, Clone)]
pub struct PlatformInfo {
    /// Package-manager executable name (e.g. "npm" or "npm.CMD")
    pub package_manager: &'static str,
}

impl PlatformInfo {
    /// Detect the current platform
    pub fn current() -> Self {
        Self::from_os(env::consts::OS)
    }

    /// Create platform info from an OS string
    pub fn from_os(os: &str) -> Self {
        match os {
            // Windows installs npm as a .CMD shim, which CreateProcess only
            // finds under its full name.
            "windows" => Self {
                package_manager: "npm.CMD",
            },
            _ => Self {
                package_manager: "npm",
            },
        }
    }
}

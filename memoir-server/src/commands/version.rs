//! Version and host information.

use std::fmt;

use chrono::{DateTime, Local};

#[derive(Debug)]
pub struct VersionInfo {
    pub version: &'static str,
    pub os_type: &'static str,
    pub os_arch: &'static str,
    pub binary_mod_time: String,
}

impl VersionInfo {
    pub fn collect() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            os_type: std::env::consts::OS,
            os_arch: std::env::consts::ARCH,
            binary_mod_time: binary_mod_time().unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "memoir v{}", self.version)?;
        writeln!(f, "- os/type: {}", self.os_type)?;
        writeln!(f, "- os/arch: {}", self.os_arch)?;
        write!(f, "- bin/modtime: {}", self.binary_mod_time)
    }
}

/// Modification time of the running binary, local time.
fn binary_mod_time() -> Option<String> {
    let binary = std::env::current_exe().ok()?;
    let modified = std::fs::metadata(&binary).ok()?.modified().ok()?;

    let local: DateTime<Local> = modified.into();
    Some(local.format("%Y-%m-%d %H:%M:%S").to_string())
}

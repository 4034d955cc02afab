//! Version information for the application, populated at build time.
//!
//! The display format is `v{version} ({commit})`, with the commit hash
//! captured by the build script. When the workspace is built outside a
//! git checkout the commit shows as `unknown`.

/// Get the build date in RFC3339 format
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Get the git commit hash (short)
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

/// Get the package version
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Format the version and commit info as a display string.
pub fn format_version() -> String {
    format!("v{} ({})", build_version(), build_commit())
}

//! Build metadata and plugin API version accessors.
//! Includes the generated version.rs from the build script so there is a
//! single source of truth for host compatibility checks.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Parse the API version string from the build script into u32.
/// Falls back to a stable default if parsing fails.
pub fn get_api_version() -> u32 {
    PLUGIN_API_VERSION.parse().unwrap_or(20250829)
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

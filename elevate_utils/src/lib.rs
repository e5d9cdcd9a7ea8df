mod macros;

/// Returns the version of the elevate workspace.
pub const fn elevate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

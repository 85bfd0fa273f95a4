// Build-time identity from Cargo.toml

/// Package version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Banner served on `GET /`.
pub fn banner() -> String {
    format!("{NAME} {VERSION}: latest probe results per server")
}

/// Configuration constants for the GitHub REST API
pub mod api {
    /// Default API root for github.com
    pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

    /// Organizations endpoint
    pub const ORGS: &str = "orgs";

    /// Members collection under an organization
    pub const MEMBERS: &str = "members";

    /// Public members collection under an organization
    pub const PUBLIC_MEMBERS: &str = "public_members";

    /// Media type requested for every call
    pub const ACCEPT: &str = "application/vnd.github+json";

    /// REST API version pinned through `X-GitHub-Api-Version`
    pub const API_VERSION: &str = "2022-11-28";

    /// GitHub rejects requests without a User-Agent
    pub const USER_AGENT: &str = concat!("ghorg/", env!("CARGO_PKG_VERSION"));

    /// Default page size for list requests (API maximum)
    pub const DEFAULT_PER_PAGE: u32 = 100;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["GH_TOKEN", "GITHUB_TOKEN"];
}

/// Default values for CLI
pub mod defaults {
    /// Environment variable carrying the API root (also set by GitHub Actions)
    pub const API_URL_ENV: &str = "GITHUB_API_URL";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

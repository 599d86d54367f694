pub const DEFAULT_RUST_LOG: &str = "info";
pub const DEFAULT_DATABASE_URL: &str = "postgres://$USER@localhost/$USER?sslmode=disable";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_PACKAGE: &str = "model";

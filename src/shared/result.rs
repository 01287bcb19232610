/// Crate-wide Result alias; fatal conditions are `AuditError` values wrapped in `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

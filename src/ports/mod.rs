/// Ports module defining interfaces for hexagonal architecture
///
/// The audit core depends only on these traits; the file system and console
/// implementations live in `adapters`.
pub mod outbound;

/// Use cases module containing application business logic orchestration
mod audit_optional_dependencies;

pub use audit_optional_dependencies::AuditOptionalDependenciesUseCase;

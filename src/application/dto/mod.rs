/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod import_request;
mod import_response;

pub use import_request::ImportRequest;
pub use import_response::ImportResponse;

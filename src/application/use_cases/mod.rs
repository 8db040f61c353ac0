/// Use cases module containing application business logic orchestration
mod import_scan;

pub use import_scan::ImportScanUseCase;

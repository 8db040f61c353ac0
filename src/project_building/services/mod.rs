mod project_builder;

pub use project_builder::{ProjectBuilder, UnparsablePort};

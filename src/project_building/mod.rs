/// Project building - pure mapping from scan records to Lair entities
///
/// Nothing in this module performs I/O.
pub mod domain;
pub mod policies;
pub mod services;

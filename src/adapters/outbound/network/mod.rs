/// Network adapters for the Lair API server
mod lair_client;

pub use lair_client::{Credentials, LairClient, LairServerConfig};

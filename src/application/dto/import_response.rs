use crate::ports::outbound::Acknowledgment;

/// ImportResponse - Internal response DTO from the scan import use case
#[derive(Debug, Clone)]
pub struct ImportResponse {
    /// Acknowledgment returned by the Lair API server
    pub acknowledgment: Acknowledgment,
    /// Number of hosts submitted
    pub host_count: usize,
    /// Number of services submitted across all hosts
    pub service_count: usize,
}

impl ImportResponse {
    pub fn new(acknowledgment: Acknowledgment, host_count: usize, service_count: usize) -> Self {
        Self {
            acknowledgment,
            host_count,
            service_count,
        }
    }
}

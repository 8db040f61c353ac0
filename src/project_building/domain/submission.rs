/// Data-quality overrides sent alongside a project
///
/// These relax or tighten the Lair API server's own checks for a single
/// import. They are not part of the project document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionOptions {
    /// Disable the server's protection against hosts with excessive ports
    pub force_ports: bool,
    /// Only import hosts that have listening ports
    pub limit_hosts: bool,
}

impl SubmissionOptions {
    pub fn new(force_ports: bool, limit_hosts: bool) -> Self {
        Self {
            force_ports,
            limit_hosts,
        }
    }
}

/// Liveness state a scan record must carry to be imported
pub const HOST_STATE_ALIVE: &str = "alive";

/// State a service record must carry to be imported
pub const SERVICE_STATE_OPEN: &str = "open";

/// Parsed content of a Metasploit export
///
/// Produced by a `ScanReader`; the project builder only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanData {
    pub hosts: Vec<ScanRecord>,
}

impl ScanData {
    pub fn new(hosts: Vec<ScanRecord>) -> Self {
        Self { hosts }
    }
}

/// One host as recorded by Metasploit
///
/// All fields are raw text exactly as found in the export; missing
/// elements are represented as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanRecord {
    pub address: String,
    pub mac: String,
    pub name: String,
    pub state: String,
    pub comments: String,
    pub os_name: String,
    pub os_flavor: String,
    pub os_sp: String,
    pub os_lang: String,
    pub arch: String,
    pub services: Vec<ServiceRecord>,
}

impl ScanRecord {
    pub fn is_alive(&self) -> bool {
        self.state == HOST_STATE_ALIVE
    }
}

/// One service as recorded by Metasploit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceRecord {
    /// Port number as text; not guaranteed to be numeric
    pub port: String,
    pub proto: String,
    pub state: String,
    pub name: String,
    /// Banner or version information, used as the product string
    pub info: String,
}

impl ServiceRecord {
    pub fn is_open(&self) -> bool {
        self.state == SERVICE_STATE_OPEN
    }
}

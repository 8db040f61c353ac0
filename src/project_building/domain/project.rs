use serde::Serialize;

/// Tool marker identifying this importer in the project, commands and notes
pub const TOOL_NAME: &str = "metasploit";

/// Tool marker written on every OS fingerprint
pub const OS_TOOL_NAME: &str = "Metasploit";

/// Confidence weight assigned to Metasploit OS fingerprints
pub const OS_WEIGHT: u32 = 1;

/// Title of the note carrying a host's Metasploit comments
pub const COMMENTS_NOTE_TITLE: &str = "Comments";

/// Lair project document submitted to the API server
///
/// Field names follow Lair's JSON schema. The identifier is opaque and
/// supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    #[serde(rename = "_id")]
    id: String,
    tool: String,
    commands: Vec<Command>,
    hosts: Vec<Host>,
}

impl Project {
    /// Creates a project attributed to this importer, with one command log entry
    pub fn new(id: String, hosts: Vec<Host>) -> Self {
        Self {
            id,
            tool: TOOL_NAME.to_string(),
            commands: vec![Command::new(TOOL_NAME.to_string(), String::new())],
            hosts,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    /// Total number of services across all hosts
    pub fn service_count(&self) -> usize {
        self.hosts.iter().map(|h| h.services().len()).sum()
    }
}

/// Command log entry recording that a tool ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    tool: String,
    command: String,
}

impl Command {
    pub fn new(tool: String, command: String) -> Self {
        Self { tool, command }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Host {
    ipv4: String,
    mac: String,
    hostnames: Vec<String>,
    tags: Vec<String>,
    os: OperatingSystem,
    notes: Vec<Note>,
    services: Vec<Service>,
}

impl Host {
    pub fn new(
        ipv4: String,
        mac: String,
        hostnames: Vec<String>,
        tags: Vec<String>,
        os: OperatingSystem,
        notes: Vec<Note>,
        services: Vec<Service>,
    ) -> Self {
        Self {
            ipv4,
            mac,
            hostnames,
            tags,
            os,
            notes,
            services,
        }
    }

    pub fn ipv4(&self) -> &str {
        &self.ipv4
    }

    pub fn mac(&self) -> &str {
        &self.mac
    }

    pub fn hostnames(&self) -> &[String] {
        &self.hostnames
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn os(&self) -> &OperatingSystem {
        &self.os
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }
}

/// OS fingerprint attached to a host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatingSystem {
    tool: String,
    weight: u32,
    fingerprint: String,
}

impl OperatingSystem {
    /// Creates a Metasploit-attributed fingerprint with the fixed weight
    pub fn from_metasploit(fingerprint: String) -> Self {
        Self {
            tool: OS_TOOL_NAME.to_string(),
            weight: OS_WEIGHT,
            fingerprint,
        }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    title: String,
    content: String,
    #[serde(rename = "lastModifiedBy")]
    last_modified_by: String,
}

impl Note {
    /// Creates the "Comments" note for a host, attributed to this importer
    pub fn comments(content: String) -> Self {
        Self {
            title: COMMENTS_NOTE_TITLE.to_string(),
            content,
            last_modified_by: TOOL_NAME.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn last_modified_by(&self) -> &str {
        &self.last_modified_by
    }
}

/// Listening service on a host
///
/// `service` and `product` are absent when Metasploit did not identify the
/// service; they are then omitted from the JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    port: u16,
    protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product: Option<String>,
}

impl Service {
    pub fn new(
        port: u16,
        protocol: String,
        service: Option<String>,
        product: Option<String>,
    ) -> Self {
        Self {
            port,
            protocol,
            service,
            product,
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }
}

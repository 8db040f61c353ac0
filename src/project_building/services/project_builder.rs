use crate::project_building::domain::{
    Host, Note, OperatingSystem, Project, ScanData, ScanRecord, Service, ServiceRecord,
};
use crate::project_building::policies::FieldDerivation;

/// An imported service whose port text could not be parsed
///
/// Such services are still imported with port 0; this only exists so the
/// caller can warn about them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnparsablePort {
    pub address: String,
    pub port_text: String,
}

/// ProjectBuilder service for mapping Metasploit scan data onto a Lair project
///
/// Pure and deterministic: the same input always yields an equal project.
/// Host and service order follow the input.
pub struct ProjectBuilder;

impl ProjectBuilder {
    /// Builds the Lair project for a parsed Metasploit export
    ///
    /// # Arguments
    /// * `scan_data` - Parsed export, possibly without hosts
    /// * `project_id` - Identifier of the target Lair project
    /// * `tags` - Tags copied onto every imported host, in order
    ///
    /// # Returns
    /// A project containing one host per alive scan record. Records in any
    /// other state are skipped without notice.
    pub fn build(scan_data: &ScanData, project_id: &str, tags: &[String]) -> Project {
        let hosts = scan_data
            .hosts
            .iter()
            .filter(|record| record.is_alive())
            .map(|record| Self::build_host(record, tags))
            .collect();

        Project::new(project_id.to_string(), hosts)
    }

    /// Lists the services `build` will import with a port of 0
    pub fn unparsable_ports(scan_data: &ScanData) -> Vec<UnparsablePort> {
        scan_data
            .hosts
            .iter()
            .filter(|record| record.is_alive())
            .flat_map(|record| {
                record
                    .services
                    .iter()
                    .filter(|svc| svc.is_open())
                    .filter(|svc| FieldDerivation::try_parse_port(&svc.port).is_none())
                    .map(|svc| UnparsablePort {
                        address: record.address.clone(),
                        port_text: svc.port.clone(),
                    })
            })
            .collect()
    }

    fn build_host(record: &ScanRecord, tags: &[String]) -> Host {
        // The name is always recorded, even when empty
        let hostnames = vec![record.name.clone()];

        let notes = if record.comments.is_empty() {
            Vec::new()
        } else {
            vec![Note::comments(record.comments.clone())]
        };

        let services = record
            .services
            .iter()
            .filter(|svc| svc.is_open())
            .map(Self::build_service)
            .collect();

        let os = OperatingSystem::from_metasploit(FieldDerivation::os_fingerprint(
            &record.os_name,
            &record.os_flavor,
            &record.os_sp,
            &record.os_lang,
            &record.arch,
        ));

        Host::new(
            record.address.clone(),
            record.mac.clone(),
            hostnames,
            tags.to_vec(),
            os,
            notes,
            services,
        )
    }

    fn build_service(record: &ServiceRecord) -> Service {
        let (service, product) = FieldDerivation::service_identity(&record.name, &record.info);
        Service::new(
            FieldDerivation::parse_port(&record.port),
            record.proto.clone(),
            service,
            product,
        )
    }
}

use crate::application::dto::{ImportRequest, ImportResponse};
use crate::ports::inbound::ScanImportPort;
use crate::ports::outbound::{ProgressReporter, ProjectImporter, ScanReader};
use crate::project_building::domain::{Project, ScanData};
use crate::project_building::services::ProjectBuilder;
use crate::shared::error::DroneError;
use crate::shared::Result;

/// ImportScanUseCase - Core use case for importing a Metasploit export into Lair
///
/// This use case orchestrates the import workflow using generic dependency
/// injection for all infrastructure dependencies. Stages run strictly in
/// sequence and an error at any stage ends the run; nothing is retried.
///
/// # Type Parameters
/// * `SR` - ScanReader implementation
/// * `PI` - ProjectImporter implementation
/// * `PR` - ProgressReporter implementation
pub struct ImportScanUseCase<SR, PI, PR> {
    scan_reader: SR,
    project_importer: PI,
    progress_reporter: PR,
}

impl<SR, PI, PR> ImportScanUseCase<SR, PI, PR>
where
    SR: ScanReader,
    PI: ProjectImporter,
    PR: ProgressReporter,
{
    /// Creates a new ImportScanUseCase with injected dependencies
    pub fn new(scan_reader: SR, project_importer: PI, progress_reporter: PR) -> Self {
        Self {
            scan_reader,
            project_importer,
            progress_reporter,
        }
    }

    /// Executes the import use case
    ///
    /// # Arguments
    /// * `request` - Resolved import request
    ///
    /// # Returns
    /// ImportResponse carrying the server's acknowledgment and submitted counts
    pub fn execute(&self, request: ImportRequest) -> Result<ImportResponse> {
        // Step 1: Validate request
        Self::validate_request(&request)?;

        // Step 2: Read and parse the export
        let scan_data = self.read_and_report_scan(&request)?;

        // Step 3: Warn about ports that will be imported as 0
        self.warn_unparsable_ports(&scan_data);

        // Step 4: Build the project
        let project = self.build_and_report_project(&scan_data, &request);

        // Step 5: Submit it
        self.progress_reporter.report(&format!(
            "📤 Importing project {} into Lair...",
            project.id()
        ));
        let acknowledgment = self.project_importer.import(&request.options, &project)?;

        self.progress_reporter
            .report_completion(&format!("✅ Server response: {}", acknowledgment.status));

        Ok(ImportResponse::new(
            acknowledgment,
            project.hosts().len(),
            project.service_count(),
        ))
    }

    fn validate_request(request: &ImportRequest) -> Result<()> {
        if request.project_id.is_empty() {
            return Err(DroneError::MissingConfiguration {
                name: "LAIR_ID".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn read_and_report_scan(&self, request: &ImportRequest) -> Result<ScanData> {
        self.progress_reporter.report(&format!(
            "📖 Loading metasploit export from: {}",
            request.scan_path.display()
        ));

        let scan_data = self.scan_reader.read_scan(&request.scan_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} host record(s)", scan_data.hosts.len()));

        Ok(scan_data)
    }

    fn warn_unparsable_ports(&self, scan_data: &ScanData) {
        for bad in ProjectBuilder::unparsable_ports(scan_data) {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: host {} has service port '{}' which is not a valid port number; importing it as port 0.",
                bad.address, bad.port_text
            ));
        }
    }

    fn build_and_report_project(&self, scan_data: &ScanData, request: &ImportRequest) -> Project {
        let project = ProjectBuilder::build(scan_data, &request.project_id, &request.tags);

        let skipped = scan_data.hosts.len() - project.hosts().len();
        self.progress_reporter.report(&format!(
            "🏗️  Built project with {} host(s) and {} service(s), skipped {} host(s) that were not alive",
            project.hosts().len(),
            project.service_count(),
            skipped
        ));

        project
    }
}

impl<SR, PI, PR> ScanImportPort for ImportScanUseCase<SR, PI, PR>
where
    SR: ScanReader,
    PI: ProjectImporter,
    PR: ProgressReporter,
{
    fn import_scan(&self, request: ImportRequest) -> Result<ImportResponse> {
        self.execute(request)
    }
}

mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile, Settings};
use drone_msf::prelude::*;
use std::process;

fn main() {
    match run() {
        Ok(_) => println!("Success: Operation completed successfully"),
        Err(e) => {
            // `{:#}` keeps the whole error chain on one line
            eprintln!("Fatal: {:#}", e);
            process::exit(ExitCode::for_error(&e).as_i32());
        }
    }
}

fn run() -> Result<ImportResponse> {
    // Parse command-line arguments
    let args = Args::parse_args();
    let progress_reporter = StderrProgressReporter::new(args.verbose);

    // Load config file (explicit path or auto-discovered)
    let config = load_config(&args, &progress_reporter)?;
    let settings = Settings::resolve(&args, config)?;

    // Create adapters (Dependency Injection)
    let server = LairServerConfig::from_server_url(&settings.server)?
        .with_insecure_skip_verify(settings.insecure)
        .with_timeout(settings.timeout);
    let project_importer = LairClient::new(server)?;
    let scan_reader = MetasploitXmlReader::new();

    // Create use case with injected dependencies
    let use_case = ImportScanUseCase::new(scan_reader, project_importer, progress_reporter);

    let request = ImportRequest::new(
        settings.scan_path,
        settings.project_id,
        settings.tags,
        settings.options,
    );

    use_case.import_scan(request)
}

fn load_config(args: &Args, reporter: &StderrProgressReporter) -> Result<Option<ConfigFile>> {
    if let Some(ref path) = args.config {
        let config = load_config_from_path(path)?;
        reporter.report(&format!("📋 Loaded config from: {}", path.display()));
        return Ok(Some(config));
    }

    let cwd = std::env::current_dir()?;
    match discover_config(&cwd)? {
        Some((path, config)) => {
            reporter.report(&format!(
                "📋 Auto-discovered config file: {}",
                path.display()
            ));
            Ok(Some(config))
        }
        None => Ok(None),
    }
}

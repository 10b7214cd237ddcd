use npm_sbom::adapters::outbound::console::StderrProgressReporter;
use npm_sbom::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use npm_sbom::adapters::outbound::npm::NpmCliReader;
use npm_sbom::application::dto::SbomRequest;
use npm_sbom::application::use_cases::GenerateSbomUseCase;
use npm_sbom::cli::Args;
use npm_sbom::config::{discover_config, load_config_from_path, ConfigFile};
use npm_sbom::ports::outbound::OutputPresenter;
use npm_sbom::shared::error::{ExitCode, SbomError};
use npm_sbom::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        let exit_code = match e.downcast_ref::<SbomError>() {
            Some(SbomError::LicenseGapFailure { .. }) => ExitCode::LicenseGapsDetected,
            _ => ExitCode::ApplicationError,
        };
        process::exit(exit_code.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    // Load config file (explicit path wins over discovery)
    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(Path::new(path))?,
        None => discover_config(&project_path)?.unwrap_or_default(),
    };

    // CLI flags win over config file values
    let npm_binary = args
        .npm_binary
        .clone()
        .or_else(|| config.npm_binary.clone())
        .unwrap_or_else(|| "npm".to_string());
    let skip_license_texts =
        args.skip_license_texts || config.skip_license_texts.unwrap_or(false);
    let output_path = resolve_output_path(&args, &config);

    // Create adapters (Dependency Injection)
    let snapshot_reader = NpmCliReader::with_binary(npm_binary);
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = GenerateSbomUseCase::new(snapshot_reader, progress_reporter);

    // Execute use case
    let request = SbomRequest::new(project_path, skip_license_texts);
    let response = use_case.execute(request)?;

    // Format output
    eprintln!("{}", args.format.progress_message());
    let formatter = args.format.create_formatter();
    let formatted_output = formatter.format(&response.components, &response.metadata)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = match output_path {
        Some(path) => Box::new(FileSystemWriter::new(PathBuf::from(path))),
        None => Box::new(StdoutPresenter::new()),
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

fn resolve_output_path(args: &Args, config: &ConfigFile) -> Option<String> {
    args.output.clone().or_else(|| config.output.clone())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| SbomError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

mod cli;
mod config;

use cli::{Cli, Command, NoticeArgs};
use config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use license_notice::adapters::outbound::console::StderrProgressReporter;
use license_notice::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use license_notice::adapters::outbound::maven::{
    JsonDependencyTreeReader, LocalRepositoryPomReader, PomProjectReader,
    DEFAULT_DEPENDENCY_TREE_FILE,
};
use license_notice::adapters::outbound::network::{HttpLookupClient, RoutingLookupLoader};
use license_notice::application::dto::NoticeRequest;
use license_notice::application::factories::{SinkFactory, SinkType};
use license_notice::application::use_cases::GenerateNoticeUseCase;
use license_notice::ports::outbound::ProjectReader;
use license_notice::shared::encoding::CharacterEncoding;
use license_notice::shared::error::{ExitCode, NoticeError};
use license_notice::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let cli = Cli::parse_args();

    if let Err(e) = run(cli) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(cli: Cli) -> Result<()> {
    let args = cli.command.args();
    let sink_type = match &cli.command {
        Command::Generate { stdout: true, .. } => SinkType::Stdout,
        Command::Generate { .. } => SinkType::Write,
        Command::Check { .. } => SinkType::Verify,
    };

    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = validate_project_path(Path::new(project_dir))?;

    let config = load_config(args, &project_path)?;
    let request = build_request(args, &config, &project_path)?;

    // Read the module tree
    let project = PomProjectReader::new().read_project(&project_path)?;

    // Create adapters (Dependency Injection)
    let tree_file = args
        .dependency_tree
        .clone()
        .or_else(|| config.dependency_tree_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DEPENDENCY_TREE_FILE));
    let graph_provider = JsonDependencyTreeReader::new().with_tree_file(tree_file);
    let lookup_loader = RoutingLookupLoader::new(
        FileSystemReader::new(&project_path),
        HttpLookupClient::new()?,
    );
    let template_loader = FileSystemReader::new(&project_path);
    let notice_sink = SinkFactory::create(sink_type, request.encoding);
    let mapping_writer = FileSystemWriter::new();
    let metadata_source = args
        .maven_repo
        .clone()
        .or_else(|| config.maven_repository.clone())
        .or_else(LocalRepositoryPomReader::default_location)
        .map(LocalRepositoryPomReader::new);
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = GenerateNoticeUseCase::new(
        graph_provider,
        lookup_loader,
        template_loader,
        notice_sink,
        mapping_writer,
        metadata_source,
        progress_reporter,
    );

    eprintln!("{}", progress_message(sink_type));
    use_case.execute(&request, &project)?;

    Ok(())
}

fn progress_message(sink_type: SinkType) -> &'static str {
    match sink_type {
        SinkType::Write => "📝 Generating NOTICE file...",
        SinkType::Verify => "🔍 Checking NOTICE file...",
        SinkType::Stdout => "📝 Generating NOTICE to stdout...",
    }
}

/// Loads the explicit config file, or the one in the project directory if present
fn load_config(args: &NoticeArgs, project_path: &Path) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        return load_config_from_path(path);
    }

    match discover_config(project_path)? {
        Some(config) => {
            eprintln!(
                "📄 Auto-discovered config file: {}",
                project_path.join(CONFIG_FILENAME).display()
            );
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

/// Merges command-line flags over the config file into a validated request
///
/// Scalar flags replace config values. Lookup sources and module patterns
/// from the command line are appended to the configured ones.
fn build_request(args: &NoticeArgs, config: &ConfigFile, project_path: &Path) -> Result<NoticeRequest> {
    let mut builder = NoticeRequest::builder().project_path(project_path);

    let mut license_lookup = config.license_lookup.clone().unwrap_or_default();
    license_lookup.extend(args.license_lookup.iter().cloned());
    builder = builder.license_lookup(license_lookup);

    let mut excluded = config.excluded_module_paths.clone().unwrap_or_default();
    excluded.extend(args.exclude_module.iter().cloned());
    builder = builder.excluded_module_paths(excluded);

    if let Some(template) = args.template.as_ref().or(config.notice_template.as_ref()) {
        builder = builder.notice_template(template.as_str());
    }
    if let Some(placeholder) = args.placeholder.as_ref().or(config.placeholder.as_ref()) {
        builder = builder.placeholder(placeholder.as_str());
    }
    if let Some(output_dir) = args.output_dir.as_ref().or(config.output_dir.as_ref()) {
        builder = builder.output_dir(output_dir);
    }
    if let Some(file_name) = args.file_name.as_ref().or(config.file_name.as_ref()) {
        builder = builder.file_name(file_name.as_str());
    }
    if let Some(indent) = args.indent.or(config.indent) {
        builder = builder.indent(indent);
    }
    if let Some(message) = args.message.as_ref().or(config.notice_message.as_ref()) {
        builder = builder.line_format(message.as_str());
    }

    let encoding = match (args.encoding, config.encoding.as_deref()) {
        (Some(encoding), _) => encoding,
        (None, Some(name)) => name.parse::<CharacterEncoding>()?,
        (None, None) => CharacterEncoding::default(),
    };
    builder = builder.encoding(encoding);

    let aggregating = !args.no_aggregate && config.aggregate.unwrap_or(true);
    let pom_fallback = !args.no_pom_fallback && config.pom_fallback.unwrap_or(true);

    builder
        .aggregating(aggregating)
        .pom_fallback(pom_fallback)
        .build()
}

/// Validates the project directory and returns its canonical path
fn validate_project_path(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(NoticeError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| NoticeError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(NoticeError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(NoticeError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    // Security check: Canonicalize path to prevent path traversal
    let canonical_path = path
        .canonicalize()
        .map_err(|e| NoticeError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    if !canonical_path.is_dir() {
        return Err(NoticeError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Resolved path is not a directory".to_string(),
        }
        .into());
    }

    Ok(canonical_path)
}

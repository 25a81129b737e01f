use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use license_notice::shared::encoding::CharacterEncoding;

/// Generate and verify NOTICE files for multi-module Maven projects
#[derive(Parser, Debug)]
#[command(name = "license-notice")]
#[command(version)]
#[command(
    about = "Generate and verify NOTICE files for multi-module Maven projects",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the NOTICE file from the project's dependency trees
    Generate {
        #[command(flatten)]
        args: NoticeArgs,

        /// Print the NOTICE to stdout instead of writing the file
        #[arg(long)]
        stdout: bool,
    },
    /// Fail if the existing NOTICE file differs from what would be generated
    Check {
        #[command(flatten)]
        args: NoticeArgs,
    },
}

impl Command {
    pub fn args(&self) -> &NoticeArgs {
        match self {
            Command::Generate { args, .. } | Command::Check { args } => args,
        }
    }
}

/// Options shared by all subcommands; unset options fall back to the config file
#[derive(Args, Debug, Default)]
pub struct NoticeArgs {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Path to a config file (defaults to license-notice.config.yml in the project)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// License lookup file or http(s) URL; later sources override earlier ones.
    /// Can be specified multiple times: -l licenses.xml -l overrides.yml
    #[arg(short = 'l', long = "license-lookup", value_name = "SOURCE")]
    pub license_lookup: Vec<String>,

    /// NOTICE template, relative to the project directory
    #[arg(short = 't', long = "template", value_name = "FILE")]
    pub template: Option<String>,

    /// Marker in the template replaced with the generated lines
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Output directory, relative to the project directory unless absolute
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Name of the NOTICE file
    #[arg(short = 'n', long = "file-name")]
    pub file_name: Option<String>,

    /// Number of spaces substituted for {0}
    #[arg(long)]
    pub indent: Option<usize>,

    /// Encoding of the template and the NOTICE file: UTF-8, US-ASCII or ISO-8859-1
    #[arg(long)]
    pub encoding: Option<CharacterEncoding>,

    /// Only process the given project, not its modules
    #[arg(long = "no-aggregate")]
    pub no_aggregate: bool,

    /// Line format: {0} indent, {1} artifact, {2} license
    #[arg(short = 'm', long = "message", value_name = "FORMAT")]
    pub message: Option<String>,

    /// Exclude modules matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "samples/*" -e "*-it"
    #[arg(short = 'e', long = "exclude-module", value_name = "PATTERN")]
    pub exclude_module: Vec<String>,

    /// Dependency tree file, relative to each module
    #[arg(long = "dependency-tree", value_name = "FILE")]
    pub dependency_tree: Option<PathBuf>,

    /// Local Maven repository (defaults to ~/.m2/repository)
    #[arg(long = "maven-repo", value_name = "DIR")]
    pub maven_repo: Option<PathBuf>,

    /// Do not fall back to the licenses declared in artifact POMs
    #[arg(long = "no-pom-fallback")]
    pub no_pom_fallback: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

use crate::config::ExtractorConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Lists the public C/C++ headers declared by a Bazel package tree
#[derive(Parser, Debug)]
#[command(
    name = "pubheaders",
    about = "Lists the public C/C++ headers declared by a Bazel package tree",
    version,
    long_about = "pubheaders walks a directory tree, queries every Bazel package in it for \
                  cc_* rules, and prints the headers of public cc_library rules as \
                  #include directives, one per line, sorted and deduplicated.\n\n\
                  Examples:\n  \
                  pubheaders\n  \
                  pubheaders absl --workspace ~/src/abseil-cpp\n  \
                  pubheaders --format json -o headers.json"
)]
pub struct CliArgs {
    #[arg(
        value_name = "ROOT",
        help = "Root directory relative to the workspace (defaults to PUBHEADERS_ROOT or 'absl')"
    )]
    pub root: Option<String>,

    #[arg(
        short = 'w',
        long,
        value_name = "DIR",
        help = "Workspace directory (defaults to the current directory)"
    )]
    pub workspace: Option<PathBuf>,

    #[arg(long, value_name = "PROGRAM", help = "Build tool to run queries with")]
    pub bazel: Option<String>,

    #[arg(
        long = "build-file",
        value_name = "NAME",
        help = "File name that marks a package directory (repeatable)"
    )]
    pub build_files: Vec<String>,

    #[arg(
        long,
        value_name = "LABEL",
        help = "Visibility label that keeps a library private (defaults to //<ROOT>:__subpackages__)"
    )]
    pub subpackages_label: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "include",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

impl CliArgs {
    /// Overrides the environment-derived configuration with explicit flags
    pub fn apply_to(&self, config: &mut ExtractorConfig) {
        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if let Some(workspace) = &self.workspace {
            config.workspace = workspace.clone();
        }
        if let Some(bazel) = &self.bazel {
            config.bazel = bazel.clone();
        }
        if !self.build_files.is_empty() {
            config.build_files = self.build_files.clone();
        }
        if let Some(label) = &self.subpackages_label {
            config.subpackages_label = Some(label.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.to_lowercase();
        } else if self.verbose {
            config.log_level = "debug".to_string();
        } else if self.quiet {
            config.log_level = "error".to_string();
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Include,
    Plain,
    Json,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Include => super::output::OutputFormat::Include,
            OutputFormatArg::Plain => super::output::OutputFormat::Plain,
            OutputFormatArg::Json => super::output::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn base_config() -> ExtractorConfig {
        ExtractorConfig {
            bazel: "bazel".to_string(),
            workspace: PathBuf::from("."),
            root: "absl".to_string(),
            build_files: vec!["BUILD.bazel".to_string(), "BUILD".to_string()],
            subpackages_label: None,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["pubheaders"]);

        assert!(args.root.is_none());
        assert!(args.workspace.is_none());
        assert!(args.build_files.is_empty());
        assert_eq!(args.format, OutputFormatArg::Include);
        assert!(args.output.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);

        let mut config = base_config();
        args.apply_to(&mut config);
        assert_eq!(config.root, "absl");
        assert_eq!(config.build_files, vec!["BUILD.bazel", "BUILD"]);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_flags_override_config() {
        let args = CliArgs::parse_from([
            "pubheaders",
            "third_party/absl",
            "--workspace",
            "/tmp/ws",
            "--bazel",
            "bazelisk",
            "--build-file",
            "BUILD",
            "--subpackages-label",
            "//third_party:__subpackages__",
            "--log-level",
            "TRACE",
            "-f",
            "json",
        ]);

        let mut config = base_config();
        args.apply_to(&mut config);

        assert_eq!(config.root, "third_party/absl");
        assert_eq!(config.workspace, PathBuf::from("/tmp/ws"));
        assert_eq!(config.bazel, "bazelisk");
        assert_eq!(config.build_files, vec!["BUILD"]);
        assert_eq!(
            config.policy().subpackages_label,
            "//third_party:__subpackages__"
        );
        assert_eq!(config.log_level, "trace");
        assert_eq!(args.format, OutputFormatArg::Json);
    }

    #[test]
    fn test_verbose_and_quiet() {
        let mut config = base_config();
        CliArgs::parse_from(["pubheaders", "-v"]).apply_to(&mut config);
        assert_eq!(config.log_level, "debug");

        let mut config = base_config();
        CliArgs::parse_from(["pubheaders", "-q"]).apply_to(&mut config);
        assert_eq!(config.log_level, "error");

        assert!(CliArgs::try_parse_from(["pubheaders", "-v", "-q"]).is_err());
    }
}

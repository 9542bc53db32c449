//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. Values with a closed set of choices are parsed straight into the core
//! types, so invalid channels or commands are rejected by clap.

use crate::selection::{determine, Provider, Scope};
use cargo_cmdline_core::command::CargoCommand;
use cargo_cmdline_core::command_line::{BacktraceMode, Channel};
use clap::Parser;

/// Command-line arguments for the `ccl` binary.
///
/// `ccl` prints the cargo invocation for a selection of targets, a package or a
/// whole project. It never runs it.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cargo_cmdline_cli::cli_args::Args;
///
/// let args = Args::parse_from(["ccl", "--target", "server", "--", "--release"]);
/// assert_eq!(args.extra_arguments, ["--release"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Path to the project definition YAML.
    ///
    /// If not provided, defaults to `cargo-project.yml` in the current directory.
    #[arg(long, short = 'c')]
    pub project_path: Option<String>,

    /// Program to show as the launcher, defaults to `cargo`.
    #[arg(long)]
    pub program: Option<String>,

    /// Restrict the invocation to a package.
    #[arg(long, short = 'p')]
    pub package: Option<String>,

    /// Select a target as `name` or `kind:name`, e.g. `bin:server`.
    ///
    /// Can be repeated; all targets must belong to the same package.
    #[arg(long = "target", short = 't', action = clap::ArgAction::Append)]
    pub targets: Vec<String>,

    /// Cargo subcommand to use instead of the default for the selection.
    #[arg(long)]
    pub command: Option<CargoCommand>,

    /// Toolchain channel: default, stable, beta, nightly or dev.
    #[arg(long, default_value = "default")]
    pub channel: Channel,

    /// Backtrace mode: default, short or full.
    #[arg(long, default_value = "default")]
    pub backtrace: BacktraceMode,

    /// Build with all features enabled.
    #[arg(long, action)]
    pub all_features: bool,

    /// Don't capture test output.
    #[arg(long, action)]
    pub nocapture: bool,

    /// Environment override in the format NAME=VALUE.
    #[arg(long, short = 'e', action = clap::ArgAction::Append)]
    pub env: Vec<String>,

    /// Pass only the given environment variables instead of extending the current ones.
    #[arg(long, action)]
    pub explicit_env: bool,

    /// Argument to put in front of all others. Can be repeated.
    #[arg(long, action = clap::ArgAction::Append, allow_hyphen_values = true)]
    pub prepend: Vec<String>,

    /// Argument to pass to the program itself. Can be repeated.
    ///
    /// Arguments already passed to the program are not added twice.
    #[arg(long, action = clap::ArgAction::Append, allow_hyphen_values = true)]
    pub positional: Vec<String>,

    /// Extra arguments for cargo, given after `--`.
    ///
    /// A further `--` separates arguments for the program.
    #[arg(last = true)]
    pub extra_arguments: Vec<String>,
}

impl Provider for Args {
    fn get_scope(&self) -> Scope {
        determine(self.package.as_deref(), &self.targets)
    }
}

//! Cargo Command Line Core Library
//!
//! This crate builds unambiguous cargo invocations from higher level intents such
//! as "run this binary", "test this package" or "build the whole project". It does
//! not launch anything; the resulting [`command_line::CommandLine`] values are
//! handed to whatever executes them.
//!
//! # Key Features
//!
//! - **Command Line Model**: An immutable record of subcommand, working directory,
//!   arguments, toolchain channel, backtrace mode and environment
//! - **Argument Splitting**: Separating cargo flags from program arguments around `--`
//! - **Invocation Factory**: Invocations for targets, packages and projects, with
//!   package consistency checks for multi-target invocations
//! - **Launch Commands**: Mapping target kinds to the subcommand that launches them
//! - **Project Definitions**: Loading an already resolved project from YAML
//!
//! # Examples
//!
//! Running a binary with an extra program argument:
//!
//! ```no_run
//! use cargo_cmdline_core::file_handling::get_project;
//! use cargo_cmdline_core::invocation::for_target;
//! use cargo_cmdline_core::launch::launch_command;
//!
//! let project = get_project("cargo-project.yml")?;
//! let targets = project.targets_named("server");
//! let target = targets.first().expect("no such target");
//! let command = launch_command(target).expect("target cannot be launched");
//!
//! let command_line = for_target(target, command, &[])?.with_positional_argument("--verbose");
//! println!("{:?}", command_line.additional_arguments);
//! # Ok::<(), cargo_cmdline_core::error::Error>(())
//! ```

pub mod arguments;
pub mod command;
pub mod command_line;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod invocation;
pub mod launch;
pub mod project_definitions;
pub mod render;
pub mod workspace;

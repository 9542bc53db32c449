use std::process::ExitCode;

use cargo_cmdline_cli::cli_args::Args;
use cargo_cmdline_cli::selection::{apply_options, command_line_for_scope, Provider};
use cargo_cmdline_core::command_line::EnvironmentVariables;
use cargo_cmdline_core::config::{self, DEFAULT_PROGRAM};
use cargo_cmdline_core::error::Result;
use cargo_cmdline_core::file_handling;
use cargo_cmdline_core::render::{quote, Invocation};
use clap::Parser;
use log::{debug, info};

fn execute() -> Result<()> {
    let args = Args::parse();

    let project_path = config::get_project_path(args.project_path.as_deref());
    debug!("Project path: `{}`", project_path);
    let project = file_handling::get_project(&project_path)?;

    let scope = args.get_scope();
    info!("Selected scope: {:?}", scope);

    let command_line = command_line_for_scope(
        &project,
        &scope,
        args.command.clone(),
        &args.extra_arguments,
        args.channel,
    )?;
    let command_line = apply_options(command_line, &args)?;

    let program = args.program.as_deref().unwrap_or(DEFAULT_PROGRAM);
    print_invocation(&Invocation::from_command_line(&command_line, program));

    Ok(())
}

fn print_environment(environment: &EnvironmentVariables) {
    if environment.is_empty() && environment.is_inherit() {
        return;
    }

    if environment.is_inherit() {
        println!("With environment (extending the current one):");
    } else {
        println!("With only this environment:");
    }
    for (key, value) in &environment.envs {
        println!("\t\"{key}\": \"{value}\"");
    }
}

fn print_invocation(invocation: &Invocation) {
    println!(
        "In directory: {}",
        quote(&invocation.working_directory.to_string_lossy())
    );
    println!("Invocation:\n{invocation}");
    print_environment(&invocation.environment);
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

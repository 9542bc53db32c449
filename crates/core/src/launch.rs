//! Mapping targets to the cargo subcommand that launches them.

use crate::command::CargoCommand;
use crate::workspace::{Target, TargetKind};

/// The subcommand that launches `target`, if it can be launched at all.
///
/// Examples are run when they only produce an executable and built otherwise.
/// `None` means no launch action is offered for the target.
#[must_use]
pub fn launch_command(target: &Target) -> Option<CargoCommand> {
    match target.kind {
        TargetKind::Bin => Some(CargoCommand::Run),
        TargetKind::Lib => Some(CargoCommand::Build),
        TargetKind::Test => Some(CargoCommand::Test),
        TargetKind::Bench => Some(CargoCommand::Bench),
        TargetKind::Example if target.is_executable_only() => Some(CargoCommand::Run),
        TargetKind::Example => Some(CargoCommand::Build),
        TargetKind::Unknown => None,
    }
}

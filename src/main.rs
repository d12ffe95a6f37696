use std::process::ExitCode;

use clap::Parser;

use crate::cmd_list::palette_list;
use crate::cmd_now::palette_now;
use crate::cmd_pick::palette_pick;
use crate::cmd_show::palette_show;
use crate::commands::{Cli, Commands};

mod cmd_list;
mod cmd_now;
mod cmd_pick;
mod cmd_show;
mod commands;
mod common;

fn main() -> ExitCode {
	let cli = Cli::parse();

	let result = match &cli.command {
		Some(Commands::List) => palette_list(),
		Some(Commands::Show(args)) => palette_show(args),
		Some(Commands::Pick(args)) => palette_pick(args),
		Some(Commands::Now(args)) => palette_now(args),
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("execution failed: {e}");
			ExitCode::FAILURE
		}
	}
}

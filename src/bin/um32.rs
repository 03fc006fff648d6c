use clap::Parser;

use um_vm::prelude::*;

use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "um32", version, about = "Universal Machine (UM-32) interpreter")]
struct Args {
    /// Path to the program image
    image: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let mut machine = match StdioMachine::from_image_file(&args.image) {
        Ok(machine) => machine,
        Err(e) => {
            eprintln!("um32: {}: {e}", args.image.display());
            return ExitCode::FAILURE;
        }
    };

    match machine.run() {
        Ok(ProgramState::Halted) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("um32: {e}");
            ExitCode::FAILURE
        }
    }
}

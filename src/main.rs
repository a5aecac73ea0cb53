use std::env;
use std::process;

use blocksizer::{dispatch, render, resolve_byte_count, BlocksizerError, Command};

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run() -> Result<(), BlocksizerError> {
    let args: Vec<String> = env::args().skip(1).collect();
    match dispatch(&args) {
        Command::Usage => render::print_usage(),
        Command::Help => render::print_help(),
        Command::Size(arg) => match resolve_byte_count(&arg) {
            Ok(byte_count) => render::print_size(byte_count),
            Err(BlocksizerError::InvalidInput(_)) => render::print_input_error(),
            Err(e) => return Err(e),
        },
        Command::SizeWithCount(arg) => match resolve_byte_count(&arg) {
            Ok(byte_count) => render::print_size_with_count(byte_count),
            Err(BlocksizerError::InvalidInput(_)) => render::print_input_error(),
            Err(e) => return Err(e),
        },
        Command::InputError => render::print_input_error(),
    }
    Ok(())
}

//! Command-line dispatch.
//!
//! The recognized invocations form a small closed set of shapes, so dispatch
//! is a single match over the arguments after the program name, producing a
//! tagged [`Command`] for the presentation layer to render.

/// Recognized command shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No arguments: print the usage block.
    Usage,
    /// A help token: print help and usage.
    Help,
    /// A single operand: print the computed blocksize.
    Size(String),
    /// A count token followed by an operand: print block count and blocksize.
    SizeWithCount(String),
    /// Anything else.
    InputError,
}

const HELP_TOKENS: [&str; 3] = ["-h", "--help", "help"];
const COUNT_TOKENS: [&str; 3] = ["-c", "--count", "count"];

fn match_help(arg: &str) -> bool {
    HELP_TOKENS.contains(&arg)
}

fn match_count(arg: &str) -> bool {
    COUNT_TOKENS.contains(&arg)
}

/// Map the arguments after the program name to a [`Command`].
pub fn dispatch(args: &[String]) -> Command {
    match args {
        [] => Command::Usage,
        [arg] if match_help(arg) => Command::Help,
        [arg] => Command::Size(arg.clone()),
        [flag, arg] if match_count(flag) => Command::SizeWithCount(arg.clone()),
        _ => Command::InputError,
    }
}

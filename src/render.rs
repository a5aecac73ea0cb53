//! Presentation: usage, help, results and diagnostics.
//!
//! Results and guidance go to stdout; failure diagnostics go to stderr.

use crate::search::{find_block_count, find_blocksize};
use crate::wrap::IndentWrap;
use crate::{MAX_BLOCK_SIZE, MIN_BLOCK_SIZE};

/// Column indent for wrapped help paragraphs.
const HELP_INDENT: usize = 8;
/// Total line width for wrapped help paragraphs.
const HELP_WIDTH: usize = 80;

/// Print the four-line usage summary.
pub fn print_usage() {
    println!("USAGE:  blocksizer [[--]count] <FILENAME|FILESIZE>");
    println!("        blocksizer -c <FILENAME|FILESIZE>");
    println!("        blocksizer [--]help");
    println!("        blocksizer -h");
}

/// Print the usage summary followed by the full help text.
pub fn print_help() {
    print_usage();
    println!();
    print_help_message();
}

fn print_help_message() {
    println!("SYNOPSIS:\n");

    print_indent_wrap(
        "Enter a FILENAME (to use that file's size) or a FILESIZE (integer \
         filesize in bytes, as given by 'ls -l') to get the largest \
         power-of-two blocksize between 512 bytes and 2^20 bytes that evenly \
         divides the filesize.\n",
    );

    println!("\nOPTIONS:\n");

    print_indent_wrap("-h, [--]help    Print this help information.\n");
    print_indent_wrap("-c, [--]count   Print block count with calculated blocksize.\n");

    println!("\nEXAMPLES:\n");

    print_indent_wrap("$ blocksizer 4587520\n");
    print_indent_wrap("131072\n\n");
    print_indent_wrap("$ blocksizer count 4587520\n");
    print_indent_wrap("35 blocks of 131072 blocksize\n\n");
}

fn print_indent_wrap(text: &str) {
    for line in IndentWrap::new(text, HELP_INDENT, HELP_WIDTH) {
        if line.is_empty() {
            println!();
        } else {
            println!("{}{line}", " ".repeat(HELP_INDENT));
        }
    }
}

/// Print the invalid-input guidance followed by the usage summary.
pub fn print_input_error() {
    println!("You gave this program invalid input.\n");
    print_usage();
}

/// Print the blocksize for `byte_count`, or the out-of-bounds diagnostic.
pub fn print_size(byte_count: u64) {
    match find_blocksize(byte_count, MAX_BLOCK_SIZE) {
        Some(size) => println!("{size}"),
        None => print_size_error(byte_count),
    }
}

/// Print block count and blocksize for `byte_count`, or the out-of-bounds
/// diagnostic.
pub fn print_size_with_count(byte_count: u64) {
    match find_blocksize(byte_count, MAX_BLOCK_SIZE) {
        Some(size) => println!(
            "{} blocks of {} blocksize",
            find_block_count(byte_count, size),
            size
        ),
        None => print_size_error(byte_count),
    }
}

fn print_size_error(byte_count: u64) {
    eprintln!(
        "The only power-of-two blocksizes for your filesize, {byte_count}, \
         are smaller than {MIN_BLOCK_SIZE} bytes or larger than 2^20 bytes."
    );
}

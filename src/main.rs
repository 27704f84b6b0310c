//! generate-merry - writes Merry's demo sprite and animation metadata

use std::process::ExitCode;

use merry_sprites::cli;

fn main() -> ExitCode {
    cli::run()
}

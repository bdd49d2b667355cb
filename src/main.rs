use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;
use human_panic::setup_panic;
use log::error;

use name_rewrite::cli::{
    check_for_stdout_stream, get_config_path, get_log_file, get_matches, get_verbosity,
    is_dry_run,
};
use name_rewrite::logging::{format_message, init_logger};
use name_rewrite::workflow::{process_files, ProcessingOptions, WorkflowContext};

fn main() -> ExitCode {
    setup_panic!();

    let matches = get_matches();

    let log_file = match get_log_file(&matches) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Failed to determine log file: {e}");
            None
        }
    };
    if let Err(e) = init_logger(get_verbosity(&matches), log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {e:#}");
    }

    let config_path = match get_config_path(&matches) {
        Ok(path) => PathBuf::from(path),
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let options = ProcessingOptions {
        config_path,
        dry_run: is_dry_run(&matches),
    };

    let exit_code = match process_files(options) {
        Ok(context) => {
            print_summary(&context);
            if context.stats.errors > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    };

    check_for_stdout_stream();

    exit_code
}

fn print_summary(context: &WorkflowContext) {
    let stats = &context.stats;
    let changed = if context.dry_run {
        format!("{} to rename", context.planned_operations.len())
    } else {
        format!("{} renamed, {} copied", stats.files_renamed, stats.files_copied)
    };
    let message = format!(
        "{} files scanned: {}, {} unchanged, {} errors",
        stats.files_scanned, changed, stats.files_unchanged, stats.errors
    );
    let colored_message = if stats.errors > 0 {
        message.red().to_string()
    } else {
        message.green().to_string()
    };

    println!("{}", format_message(&message, &colored_message));
}

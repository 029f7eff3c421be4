use cjkscan::{CjkScan, Cli, OutputFormatter, OutputMode, UserFriendlyError};
use clap::Parser;
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse_from(Cli::normalize_args(std::env::args_os()));

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let scan = match CjkScan::from_cli(&cli) {
        Ok(scan) => scan,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    if cli.dry_run {
        return handle_dry_run(&cli, &scan);
    }

    scan.output_formatter().print_configuration(scan.config());
    let report = scan.run();
    scan.print_report(&report);

    // Unreadable directories and files are warnings, not failures
    0
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli.config_output_path();

    match CjkScan::generate_sample_config(&config_path) {
        Ok(()) => {
            let formatter = OutputFormatter::new(OutputMode::Plain, 0, false);
            formatter.print_line(&format!(
                "Generated sample configuration file: {}",
                config_path.display()
            ));
            formatter.print_line("\nTo use this configuration:");
            formatter.print_line(&format!("  cjkscan --config {}", config_path.display()));
            formatter.print_line("\nEdit the file to customize settings for your needs.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(cli: &Cli, scan: &CjkScan) -> i32 {
    let formatter = scan.output_formatter();

    formatter.info("DRY RUN MODE - No files will be read");
    formatter.print_configuration(scan.config());

    let mut total_files = 0;
    for (directory, listing) in scan.plan() {
        match listing {
            Ok(listing) => {
                formatter.info(&format!("{}: {} files", directory, listing.files.len()));
                for file in &listing.files {
                    if cli.is_verbose() {
                        formatter.print_line(&format!(
                            "  {} ({})",
                            file.display_path(),
                            file.format_size()
                        ));
                    } else {
                        formatter.print_line(&format!("  {}", file.display_path()));
                    }
                }
                for error in &listing.errors {
                    formatter.warning(&error.user_message());
                }
                total_files += listing.files.len();
            }
            Err(e) => formatter.warning(&e.user_message()),
        }
    }

    formatter.print_separator();
    formatter.success(&format!("Dry run completed: {} files would be scanned", total_files));

    0
}

fn print_startup_error(error: &cjkscan::CjkScanError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

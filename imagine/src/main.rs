mod cli;
mod complement;
mod output;
mod status;

use cli::Command;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let cli = match cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => return ExitCode::from(cli::report_parse_error(&e)),
    };
    log::debug!("{cli:?}");

    match cli.command {
        Command::Complement(args) => match complement::run_complement(&args, &cli.out_dir) {
            Ok(report) => {
                status::log_message(&report.to_string());
                ExitCode::SUCCESS
            }
            Err(e) => {
                status::log_error(&e, status::Mode::Complement);
                ExitCode::FAILURE
            }
        },
    }
}

use std::process::ExitCode;

fn main() -> ExitCode {
    pibench_cli::run()
}

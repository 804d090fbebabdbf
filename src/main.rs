use std::process::ExitCode;

fn main() -> ExitCode {
    match safecalc::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

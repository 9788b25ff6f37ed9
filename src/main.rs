use std::process::ExitCode;

fn main() -> ExitCode {
    ExitCode::from(twocolor_solitaire::run())
}

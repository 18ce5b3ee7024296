//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = deadzone_cli::run() {
        eprintln!("deadzone: {err}");
        std::process::exit(1);
    }
}

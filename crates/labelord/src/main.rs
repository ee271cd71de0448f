//! Entrypoint.

use labelord::CliError;

fn main() {
    if let Err(err) = labelord::initialize_command_line() {
        eprintln!("{err}");

        let exit_code = err
            .downcast_ref::<CliError>()
            .map(CliError::exit_code)
            .unwrap_or(1);
        std::process::exit(exit_code);
    }
}

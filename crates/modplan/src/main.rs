use std::process::ExitCode;

fn main() -> ExitCode {
    match modplan_lib::main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(modplan_lib::exit_code_for(&err))
        }
    }
}

mod bootstrap;

use std::process::ExitCode;

use anyhow::Result;
use bikeshare_console::session::Session;
use bikeshare_console::Console;
use bikeshare_core::settings::Settings;
use bikeshare_core::BikeshareError;

fn main() -> Result<ExitCode> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Bikeshare explorer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", settings.data_dir.display());

    if let Err(err) = settings.validate() {
        eprintln!("{}", err);
        return Ok(ExitCode::FAILURE);
    }

    let mut session = Session::new(Console::stdio(), settings.data_dir.clone());
    let outcome = session.run();

    Ok(exit_code(&outcome))
}

/// Map the session outcome to the process exit status, reporting unexpected
/// errors on stderr.
fn exit_code(outcome: &bikeshare_core::Result<()>) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(BikeshareError::InputClosed) => {
            tracing::info!("Input closed; leaving");
            ExitCode::SUCCESS
        }
        // Already reported on stdout by the session.
        Err(BikeshareError::MissingColumns { file, .. }) => {
            tracing::debug!("Mandatory columns missing in {}", file);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_code(actual: ExitCode, expected: ExitCode) {
        assert_eq!(format!("{:?}", actual), format!("{:?}", expected));
    }

    #[test]
    fn test_exit_code_success() {
        assert_code(exit_code(&Ok(())), ExitCode::SUCCESS);
    }

    #[test]
    fn test_exit_code_input_closed_is_success() {
        assert_code(exit_code(&Err(BikeshareError::InputClosed)), ExitCode::SUCCESS);
    }

    #[test]
    fn test_exit_code_missing_columns_is_failure() {
        let err = BikeshareError::MissingColumns {
            file: "chicago.csv".to_string(),
            columns: vec!["User Type".to_string()],
        };
        assert_code(exit_code(&Err(err)), ExitCode::FAILURE);
    }

    #[test]
    fn test_exit_code_other_errors_are_failure() {
        let err = BikeshareError::Config("bad data dir".to_string());
        assert_code(exit_code(&Err(err)), ExitCode::FAILURE);
    }
}

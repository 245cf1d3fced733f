//! Error handling and exit codes.

use std::process::ExitCode;

use decodeways_core::{exit_codes, DecodeError};

/// Map a failed run to the process exit code.
///
/// Validation failures and I/O failures are both permanent, so every error
/// maps to [`exit_codes::ERROR_GENERIC`].
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if let Some(decode) = err.downcast_ref::<DecodeError>() {
        tracing::debug!(error = %decode, "input rejected");
    }
    exit_codes::ERROR_GENERIC
}

/// [`handle_error`] as an [`ExitCode`].
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    u8::try_from(handle_error(err)).map_or(ExitCode::FAILURE, ExitCode::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        let decode = anyhow::Error::new(DecodeError::LeadingZero);
        assert_eq!(handle_error(&decode), 1);

        let io = anyhow::Error::new(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(handle_error(&io), 1);
    }

    #[test]
    fn context_preserves_decode_error() {
        let err = anyhow::Error::new(DecodeError::EmptyInput).context("invalid input");
        assert!(err.downcast_ref::<DecodeError>().is_some());
        assert_eq!(handle_error(&err), exit_codes::ERROR_GENERIC);
    }
}

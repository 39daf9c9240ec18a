//! Reading the pasted texts from files or standard input.

use crate::error::AppError;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

/// Path value that selects standard input
pub const STDIN_PATH: &str = "-";

/// Fails when more than one input would be read from standard input.
pub fn ensure_single_stdin<'a>(paths: impl IntoIterator<Item = &'a str>) -> Result<(), AppError> {
    let stdin_count = paths.into_iter().filter(|path| *path == STDIN_PATH).count();
    if stdin_count > 1 {
        return Err(AppError::config_error(
            "Only one input can be read from standard input",
        ));
    }
    Ok(())
}

/// Reads the `source_name` input from `path`, or from stdin when `path` is `-`.
///
/// Inputs larger than `max_bytes` are rejected without reading them fully.
pub async fn read_input(source_name: &str, path: &str, max_bytes: usize) -> Result<String, AppError> {
    if path == STDIN_PATH {
        debug!("Reading {source_name} from standard input");
        return read_limited(source_name, tokio::io::stdin(), max_bytes).await;
    }

    let size = tokio::fs::metadata(path).await?.len();
    if size > max_bytes as u64 {
        return Err(AppError::input_too_large(
            source_name,
            usize::try_from(size).unwrap_or(usize::MAX),
            max_bytes,
        ));
    }

    debug!("Reading {source_name} from {path} ({size} bytes)");
    Ok(tokio::fs::read_to_string(path).await?)
}

/// Reads at most `max_bytes + 1` bytes so an oversized stream is detected
/// without buffering all of it.
pub async fn read_limited<R: AsyncRead + Unpin>(
    source_name: &str,
    reader: R,
    max_bytes: usize,
) -> Result<String, AppError> {
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
    let mut buffer = Vec::new();
    reader.take(limit).read_to_end(&mut buffer).await?;

    // Size first: the cut at the limit may split a multibyte character
    if buffer.len() > max_bytes {
        return Err(AppError::input_too_large(source_name, buffer.len(), max_bytes));
    }
    String::from_utf8(buffer).map_err(|e| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{source_name} input is not valid UTF-8: {e}"),
        ))
    })
}

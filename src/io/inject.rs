//! Injected-data files.
//!
//! `--inject <path>` supplies a forecast without a network call: a JSON
//! document with the same shape as the endpoint's 200 body. An unreadable or
//! invalid file is a configuration
//! error; a readable file with an unusable payload is handled downstream by
//! the acquisition strategy (it falls through to polling).

use std::fs::File;
use std::path::Path;

use crate::client::ResponseBody;
use crate::error::AppError;

/// Read an injected forecast body, if a path was given.
pub fn read_injected(path: Option<&Path>) -> Result<Option<ResponseBody>, AppError> {
    let Some(path) = path else {
        return Ok(None);
    };

    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open inject file '{}': {e}", path.display()))
    })?;
    let body: ResponseBody = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid inject file JSON: {e}")))?;

    Ok(Some(body))
}

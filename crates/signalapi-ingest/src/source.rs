//! Where the seed bytes come from.

use std::borrow::Cow;
use std::path::Path;

use tracing::info;

use crate::SEED_CSV;
use crate::error::{IngestError, IngestResult};

/// Read the seed CSV from `path`, or fall back to the embedded file.
pub fn read_seed(path: Option<&Path>) -> IngestResult<Cow<'static, [u8]>> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(SEED_CSV));
    };
    info!(path = %path.display(), "reading seed file");
    std::fs::read(path)
        .map(Cow::Owned)
        .map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })
}

//! Report output

use std::path::Path;

use crate::engines::core::io::FastWriter;
use crate::engines::EngineError;
use crate::modules::seq::SequenceResult;

/// Write report text verbatim to `path`, replacing any existing file
pub fn save_report<P: AsRef<Path>>(text: &str, path: P) -> SequenceResult<()> {
    let mut writer = FastWriter::new(path.as_ref(), None).map_err(EngineError::from)?;
    writer.write_all(text.as_bytes()).map_err(EngineError::from)?;
    writer.flush().map_err(EngineError::from)?;

    log::info!("Report saved to {}", writer.path());
    Ok(())
}

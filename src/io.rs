use crate::ParserError;
use log::info;
use std::io::Read;

/// Creates a reader for a given path to a file, located locally or remotely.
///
/// Compression is detected from the file extension by `oneio`.
pub(crate) fn get_reader(path: &str) -> Result<Box<dyn Read + Send>, ParserError> {
    info!("opening RPSL source {}", path);
    Ok(oneio::get_reader(path)?)
}

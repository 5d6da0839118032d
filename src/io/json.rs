use crate::classify::RenderPayload;
use crate::error::TopoError;
use crate::view::ViewRequest;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Encodes a payload in the renderer's wire format.
pub fn payload_to_json_string(payload: &RenderPayload) -> Result<String, TopoError> {
    serde_json::to_string(payload).map_err(|e| TopoError::JsonError(e.to_string()))
}

/// Streams a payload to any writer.
pub fn write_payload_to(payload: &RenderPayload, writer: impl Write) -> Result<(), TopoError> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer(&mut writer, payload).map_err(|e| TopoError::JsonError(e.to_string()))?;
    writer.flush().map_err(|e| TopoError::IoError(e.to_string()))
}

pub fn write_payload(payload: &RenderPayload, path: impl AsRef<Path>) -> Result<(), TopoError> {
    let file = File::create(path).map_err(|e| TopoError::IoError(e.to_string()))?;
    write_payload_to(payload, file)
}

/// Reads a view request from a JSON file in the page's body format.
///
/// The request is validated before it is returned.
pub fn read_view_request(path: impl AsRef<Path>) -> Result<ViewRequest, TopoError> {
    let file = File::open(path).map_err(|e| TopoError::IoError(e.to_string()))?;
    let view: ViewRequest = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| TopoError::JsonError(e.to_string()))?;
    view.validate()?;
    Ok(view)
}

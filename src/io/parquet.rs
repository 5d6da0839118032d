use crate::classify::BandSet;
use crate::error::TopoError;
use crate::io::arrow::SamplesToArrow;
use crate::sample::Sample;
use arrow_array::{Array, RecordBatch};
use geoparquet::writer::{
    GeoParquetRecordBatchEncoder, GeoParquetWriterEncoding, GeoParquetWriterOptionsBuilder,
};
use parquet::arrow::ArrowWriter;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

fn encode_err(e: impl std::fmt::Display) -> TopoError {
    TopoError::IoError(format!("geoparquet encoding failed: {}", e))
}

/// Writes a sample batch as a single WKB-encoded GeoParquet file.
pub fn write_geoparquet(batch: &RecordBatch, path: impl AsRef<Path>) -> Result<(), TopoError> {
    let path = path.as_ref();
    let options = GeoParquetWriterOptionsBuilder::default()
        .set_encoding(GeoParquetWriterEncoding::WKB)
        .build();
    let mut encoder =
        GeoParquetRecordBatchEncoder::try_new(&batch.schema(), &options).map_err(encode_err)?;

    let file = File::create(path).map_err(|e| TopoError::IoError(e.to_string()))?;
    let mut writer = ArrowWriter::try_new(BufWriter::new(file), encoder.target_schema(), None)
        .map_err(encode_err)?;

    let encoded = encoder.encode_record_batch(batch).map_err(encode_err)?;
    writer.write(&encoded).map_err(encode_err)?;
    writer.append_key_value_metadata(encoder.into_keyvalue().map_err(encode_err)?);
    writer.close().map_err(encode_err)?;

    tracing::debug!(
        rows = batch.num_rows(),
        columns = batch.num_columns(),
        path = %path.display(),
        "geoparquet written"
    );
    Ok(())
}

/// Writes classified samples as GeoParquet point features.
pub trait SamplesToGeoParquet: SamplesToArrow {
    fn to_geoparquet(&self, bands: &BandSet, path: impl AsRef<Path>) -> Result<(), TopoError>;
}

impl SamplesToGeoParquet for [Sample] {
    fn to_geoparquet(&self, bands: &BandSet, path: impl AsRef<Path>) -> Result<(), TopoError> {
        let batch = self.to_record_batch(bands)?;
        let unbanded = batch
            .column_by_name("band")
            .map_or(0, |c| c.null_count());
        tracing::debug!(samples = self.len(), bands = bands.len(), unbanded, "exporting samples");
        write_geoparquet(&batch, path)
    }
}

impl SamplesToGeoParquet for Vec<Sample> {
    fn to_geoparquet(&self, bands: &BandSet, path: impl AsRef<Path>) -> Result<(), TopoError> {
        self.as_slice().to_geoparquet(bands, path)
    }
}

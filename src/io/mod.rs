pub mod arrow;
pub mod csv;
pub mod geojson;
pub mod json;
pub mod parquet;

pub use self::arrow::SamplesToArrow;
pub use self::csv::write_samples_csv;
pub use self::geojson::{samples_to_feature_collection, write_geojson};
pub use self::json::{payload_to_json_string, read_view_request, write_payload, write_payload_to};
pub use self::parquet::{SamplesToGeoParquet, write_geoparquet};

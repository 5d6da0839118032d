use topoview_rs::{
    GeoKeys, MAX_ELEVATION, MIN_ELEVATION, Raster, TopoError, ViewRequest, payload_to_json_string,
    read_view_request, render, write_payload,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Half-degree synthetic planet: ocean basins and ridges from a few sine waves.
fn synthetic_raster() -> Result<Raster, TopoError> {
    let (width, height) = (720usize, 360usize);
    let keys = GeoKeys::new([0.5, 0.5, 0.0], [0.0, 0.0, 0.0, -180.0, 90.0, 0.0]);

    let mid = (MAX_ELEVATION + MIN_ELEVATION) / 2.0;
    let amp = (MAX_ELEVATION - MIN_ELEVATION) / 2.0;
    let mut values = Vec::with_capacity(width * height);
    for row in 0..height {
        let lat = (90.0 - row as f64 * 0.5).to_radians();
        for col in 0..width {
            let lng = (-180.0 + col as f64 * 0.5).to_radians();
            let wave = 0.6 * (3.0 * lng).sin() * (2.0 * lat).cos() + 0.4 * (5.0 * lat + lng).sin();
            values.push(mid + amp * wave.clamp(-1.0, 1.0));
        }
    }

    Raster::from_geo_keys(width, values, &keys)
}

fn main() -> Result<(), TopoError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut args = std::env::args().skip(1);
    let view = match args.next() {
        Some(path) => read_view_request(&path)?,
        None => ViewRequest::full_extent(),
    };
    info!(?view, "rendering view");

    let raster = synthetic_raster()?;
    let payload = render(&view, &raster)?;
    info!(
        groups = payload.groups.len(),
        cells = payload.cell_count(),
        cell_delta_x = payload.cell_delta_x,
        cell_delta_y = payload.cell_delta_y,
        "payload ready"
    );

    match args.next() {
        Some(out) => {
            write_payload(&payload, &out)?;
            info!(path = %out, "payload written");
        }
        None => println!("{}", payload_to_json_string(&payload)?),
    }

    Ok(())
}

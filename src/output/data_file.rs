//! Plain-text contour files for spreadsheets and plotting tools.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::errors::OutputError;
use crate::model::geometry::NozzleGeometry;
use crate::utils::point::ContourPoint;

/// Commented header followed by tab-separated `x y` rows.
pub fn write_geometry_data<W: Write>(geometry: &NozzleGeometry, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "# Nozzle Geometry Data")?;
    writeln!(out, "# Throat radius: {:.6} m", geometry.throat_radius())?;
    writeln!(out, "# Exit radius: {:.6} m", geometry.exit_radius())?;
    writeln!(out, "# Expansion ratio: {:.3}", geometry.expansion_ratio())?;
    writeln!(out, "# Number of points: {}", geometry.num_points())?;
    writeln!(out, "#")?;
    writeln!(out, "# X (m)\t\tY (m)")?;

    for point in geometry.contour() {
        writeln!(out, "{:.6}\t\t{:.6}", point.x, point.y)?;
    }
    Ok(())
}

/// Bare space-separated `x y` rows, the layout gnuplot reads directly.
pub fn write_xy_rows<W: Write>(points: &[ContourPoint], out: &mut W) -> std::io::Result<()> {
    for point in points {
        writeln!(out, "{:.6} {:.6}", point.x, point.y)?;
    }
    Ok(())
}

fn write_file<F>(path: &Path, body: F) -> Result<(), OutputError>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let display = path.display().to_string();
    let file = File::create(path).map_err(|e| OutputError::io(&display, e))?;
    let mut writer = BufWriter::new(file);
    body(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| OutputError::io(display, e))
}

pub fn write_geometry_file(geometry: &NozzleGeometry, path: &Path) -> Result<(), OutputError> {
    write_file(path, |out| write_geometry_data(geometry, out))?;
    info!("Geometry data written to {}", path.display());
    Ok(())
}

/// Upper wall and its mirror image, one file each.
pub fn write_contour_files(
    geometry: &NozzleGeometry,
    upper_path: &Path,
    lower_path: &Path,
) -> Result<(), OutputError> {
    write_file(upper_path, |out| write_xy_rows(geometry.contour(), out))?;
    write_file(lower_path, |out| {
        write_xy_rows(&geometry.mirrored_contour(), out)
    })
}

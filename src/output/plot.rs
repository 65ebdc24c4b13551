use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{info, warn};

use crate::constants::{DEFAULT_PLOT_FILE, LOWER_CONTOUR_FILE, PLOT_SCRIPT_FILE, UPPER_CONTOUR_FILE};
use crate::errors::OutputError;
use crate::model::geometry::NozzleGeometry;
use crate::output::data_file::write_contour_files;

/// Where the gnuplot script, its data and the rendered image go.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub image: PathBuf,
    pub script: PathBuf,
    pub upper_data: PathBuf,
    pub lower_data: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            image: PathBuf::from(DEFAULT_PLOT_FILE),
            script: PathBuf::from(PLOT_SCRIPT_FILE),
            upper_data: PathBuf::from(UPPER_CONTOUR_FILE),
            lower_data: PathBuf::from(LOWER_CONTOUR_FILE),
            width: 800,
            height: 600,
        }
    }
}

impl PlotConfig {
    pub fn with_image(mut self, image: impl Into<PathBuf>) -> Self {
        self.image = image.into();
        self
    }

    /// Keeps script and data files next to each other under `dir`.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.script = dir.join(PLOT_SCRIPT_FILE);
        self.upper_data = dir.join(UPPER_CONTOUR_FILE);
        self.lower_data = dir.join(LOWER_CONTOUR_FILE);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlotOutcome {
    Rendered(PathBuf),
    /// gnuplot missing or failed; script and data files are still on disk.
    Skipped,
}

pub fn gnuplot_script(config: &PlotConfig) -> String {
    format!(
        "set terminal png size {},{}\n\
         set output '{}'\n\
         set title 'Bell Nozzle Geometry'\n\
         set xlabel 'Axial Position (m)'\n\
         set ylabel 'Radius (m)'\n\
         set grid\n\
         set key top left\n\
         plot '{}' with lines title 'Upper Contour', \\\n     \
         '{}' with lines title 'Lower Contour'\n",
        config.width,
        config.height,
        config.image.display(),
        config.upper_data.display(),
        config.lower_data.display(),
    )
}

/// Writes the script and both contour files, then tries to run gnuplot.
pub fn plot_nozzle_geometry(
    geometry: &NozzleGeometry,
    config: &PlotConfig,
) -> Result<PlotOutcome, OutputError> {
    fs::write(&config.script, gnuplot_script(config))
        .map_err(|e| OutputError::io(config.script.display().to_string(), e))?;
    write_contour_files(geometry, &config.upper_data, &config.lower_data)?;

    let status = Command::new("gnuplot")
        .arg(&config.script)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => {
            info!("Nozzle geometry plot saved to {}", config.image.display());
            Ok(PlotOutcome::Rendered(config.image.clone()))
        }
        _ => {
            warn!(
                "Gnuplot not available. Data files created: {}, {}",
                config.upper_data.display(),
                config.lower_data.display()
            );
            warn!("You can manually plot using: gnuplot {}", config.script.display());
            Ok(PlotOutcome::Skipped)
        }
    }
}

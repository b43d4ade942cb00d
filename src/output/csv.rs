//! CSV export of curve samples.
//!
//! Writes one header row with the axis labels followed by one record per
//! sample point, so the file loads directly into external analysis tools.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::curve::Curve;
use crate::error::{DevsimError, Result};

/// Export a curve's samples to a CSV file.
pub fn export_csv(curve: &Curve, path: &Path) -> Result<()> {
    let display = path.display().to_string();
    let file = File::create(path).map_err(|e| DevsimError::file_write(display.clone(), e))?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record([curve.x_label, curve.y_label])
        .map_err(|e| DevsimError::file_write(display.clone(), io::Error::other(e)))?;

    for (x, y) in curve.points() {
        writer
            .write_record([x.to_string(), y.to_string()])
            .map_err(|e| DevsimError::file_write(display.clone(), io::Error::other(e)))?;
    }

    writer
        .flush()
        .map_err(|e| DevsimError::file_write(display, e))?;
    Ok(())
}

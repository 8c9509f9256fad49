//! PNG rendering of the solved grid at the consumer boundary

use crate::algorithm::wave::ResultGrid;
use crate::catalog::tiles::EdgeType;
use crate::io::error::{Result, SolverError, invalid_parameter};
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Color rendered for unresolved (contradicted) cells
pub const UNRESOLVED_COLOR: [u8; 4] = [24, 24, 24, 255];

/// RGBA color rendered for each terrain category
pub const fn terrain_color(terrain: EdgeType) -> [u8; 4] {
    match terrain {
        EdgeType::Grass => [88, 151, 58, 255],
        EdgeType::Sand => [222, 198, 120, 255],
        EdgeType::Water => [54, 99, 189, 255],
    }
}

/// Render the result grid as a PNG, one `scale`-pixel square per cell
///
/// Resolved cells render in their terrain color, unresolved cells in
/// [`UNRESOLVED_COLOR`].
///
/// # Errors
///
/// Returns an error if:
/// - The grid has zero area or the scale is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_result_as_png(grid: &ResultGrid, scale: u32, output_path: &Path) -> Result<()> {
    let (rows, cols) = grid.dim();
    if rows == 0 || cols == 0 || scale == 0 {
        return Err(invalid_parameter(
            "render dimensions",
            &format!("{rows}x{cols} at scale {scale}"),
            &"grid area and cell scale must be non-zero",
        ));
    }

    let width = cols as u32 * scale;
    let height = rows as u32 * scale;
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let row = (y / scale) as usize;
        let col = (x / scale) as usize;
        let color = grid
            .get([row, col])
            .and_then(|cell| cell.as_ref())
            .map_or(UNRESOLVED_COLOR, |tile| terrain_color(tile.terrain));
        Rgba(color)
    });

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| SolverError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create parent directory",
                source,
            })?;
        }
    }

    img.save(output_path).map_err(|source| SolverError::ImageExport {
        path: output_path.to_path_buf(),
        source,
    })
}

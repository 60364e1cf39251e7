//! PNG export of canvases and the solvability matrix

use crate::algorithm::solvability::SolvabilityMatrix;
use crate::io::configuration::{EMPTY_COLOR, FILLED_COLOR};
use crate::io::error::{MarginError, Result, file_system_error, invalid_parameter};
use crate::spatial::Canvas;
use image::{Rgba, RgbaImage};
use ndarray::ArrayView2;

/// Render a bit grid with each cell as a `cell_size` square
///
/// # Errors
///
/// Returns an error if `cell_size` is zero or the image would not fit in `u32` pixels
pub fn render_grid(grid: ArrayView2<'_, bool>, cell_size: u32) -> Result<RgbaImage> {
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be at least 1",
        ));
    }
    let (rows, cols) = grid.dim();
    let to_pixels = |count: usize| {
        u32::try_from(count)
            .ok()
            .and_then(|count| count.checked_mul(cell_size))
            .ok_or_else(|| invalid_parameter("cell_size", &cell_size, &"image too large"))
    };
    let width = to_pixels(cols)?;
    let height = to_pixels(rows)?;

    let img = RgbaImage::from_fn(width, height, |x, y| {
        let row = (y / cell_size) as usize;
        let col = (x / cell_size) as usize;
        if grid.get([row, col]).copied().unwrap_or(false) {
            Rgba(FILLED_COLOR)
        } else {
            Rgba(EMPTY_COLOR)
        }
    });
    Ok(img)
}

fn save_image(img: &RgbaImage, output_path: &str) -> Result<()> {
    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| MarginError::ImageExport {
            path: output_path.into(),
            source: e,
        })
}

/// Export a canvas as a PNG, filled cells dark on white
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_png(canvas: &Canvas, cell_size: u32, output_path: &str) -> Result<()> {
    let img = render_grid(canvas.cells().view(), cell_size)?;
    save_image(&img, output_path)
}

/// Export the solvability matrix as a PNG bitmap, solvable pairs dark
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_matrix_png(
    matrix: &SolvabilityMatrix,
    cell_size: u32,
    output_path: &str,
) -> Result<()> {
    let grid = matrix.to_array();
    let img = render_grid(grid.view(), cell_size)?;
    save_image(&img, output_path)
}

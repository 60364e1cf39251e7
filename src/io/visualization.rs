//! Frame capture and GIF generation for canvas loops and life animations

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{MarginError, Result, file_system_error};
use crate::io::image::render_grid;
use image::Frame;
use ndarray::Array2;

/// Captures whole-grid snapshots for later GIF export
///
/// The canvas loop records a frame after every margin embedding and every
/// rotation; the life animation records one per generation.
#[derive(Debug, Clone)]
pub struct LoopCapture {
    frames: Vec<Array2<bool>>,
    cell_size: u32,
}

impl LoopCapture {
    /// Create an empty capture rendering each cell as `cell_size` pixels
    pub const fn new(cell_size: u32) -> Self {
        Self {
            frames: Vec::new(),
            cell_size,
        }
    }

    /// Capture from an existing frame sequence
    pub const fn from_frames(frames: Vec<Array2<bool>>, cell_size: u32) -> Self {
        Self { frames, cell_size }
    }

    /// Records a snapshot of the grid
    pub fn record(&mut self, grid: &Array2<bool>) {
        self.frames.push(grid.clone());
    }

    /// Returns all recorded snapshots
    pub fn frames(&self) -> &[Array2<bool>] {
        &self.frames
    }

    /// Returns the number of recorded snapshots
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as a GIF
    ///
    /// Delays below what common viewers honor are raised to
    /// `VIEWER_MIN_FRAME_DELAY_MS`. The last frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(crate::io::error::invalid_parameter(
                "frames",
                &0,
                &"no frames captured for animation",
            ));
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let frames = self.generate_frames(delay_ms)?;

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| MarginError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32) -> Result<Vec<Frame>> {
        let mut frames = Vec::with_capacity(self.frames.len() + 1);
        for grid in &self.frames {
            let img = render_grid(grid.view(), self.cell_size)?;
            frames.push(Frame::from_parts(
                img,
                0,
                0,
                image::Delay::from_numer_denom_ms(delay_ms, 1),
            ));
        }

        // Hold the final state
        if let Some(last_frame_img) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last_frame_img,
                0,
                0,
                image::Delay::from_numer_denom_ms(delay_ms * FINAL_FRAME_HOLD, 1),
            ));
        }

        Ok(frames)
    }
}

use crate::algorithm::margin::{Margin, build_margin_with_log};
use crate::io::configuration::SIDE_COUNT;
use crate::io::diagnostics::{DiagnosticSink, LogSink};
use crate::io::visualization::LoopCapture;
use crate::spatial::{Canvas, Corner, Seed, Side};

/// Margin built for one side of the canvas
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SideRecord {
    /// Side the margin was embedded on
    pub side: Side,
    /// The margin and its report
    pub margin: Margin,
}

/// Summary of a complete or halted run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopOutcome {
    /// Number of margins embedded
    pub sides_built: usize,
    /// Side whose margin stopped the loop, if any
    pub halted_at: Option<Side>,
    /// Whether all four margins were built and every one is solved
    pub solved: bool,
}

/// Four-sided margin builder over an exclusively owned canvas
///
/// Each iteration extracts the top-right and bottom-right corners, builds a
/// margin between them, embeds it in the rightmost columns and rotates the
/// canvas a quarter turn counter-clockwise. Sides are visited right, bottom,
/// left, top.
#[derive(Clone, Debug)]
pub struct CanvasLoop {
    canvas: Canvas,
    records: Vec<SideRecord>,
    rotations: usize,
    halted_at: Option<Side>,
    directionality_check: bool,
    capture: Option<LoopCapture>,
}

impl CanvasLoop {
    /// Create a loop over an existing canvas
    pub const fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            records: Vec::new(),
            rotations: 0,
            halted_at: None,
            directionality_check: true,
            capture: None,
        }
    }

    /// Create a loop over the canvas seeded from two 2x2 seeds
    pub fn from_seed_pair(start: &Seed, end: &Seed) -> Self {
        Self::new(Canvas::from_seed_pair(start, end))
    }

    /// Enable or disable the directionality swap for every margin
    #[must_use]
    pub const fn with_directionality(mut self, enabled: bool) -> Self {
        self.directionality_check = enabled;
        self
    }

    /// Record a frame after every embedding and rotation
    pub fn enable_capture(&mut self, cell_size: u32) {
        let mut capture = LoopCapture::new(cell_size);
        capture.record(self.canvas.cells());
        self.capture = Some(capture);
    }

    /// Current canvas state
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Consume the loop and return its canvas
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    /// Margins built so far, in side order
    pub fn records(&self) -> &[SideRecord] {
        &self.records
    }

    /// Captured frames, if capture was enabled
    pub const fn capture(&self) -> Option<&LoopCapture> {
        self.capture.as_ref()
    }

    /// Side the next iteration will build, `None` once finished or halted
    pub const fn current_side(&self) -> Option<Side> {
        if self.halted_at.is_some() || self.records.len() >= SIDE_COUNT {
            None
        } else {
            Some(Side::from_step(self.records.len()))
        }
    }

    /// Whether no further iteration will run
    pub const fn is_finished(&self) -> bool {
        self.current_side().is_none()
    }

    /// Whether every side has a margin and every margin is solved
    pub fn is_fully_solved(&self) -> bool {
        self.halted_at.is_none()
            && self.records.len() == SIDE_COUNT
            && self.records.iter().all(|record| record.margin.is_solved())
    }

    /// Run one side, reporting diagnostics to `log`
    ///
    /// Returns whether the loop should continue.
    pub fn execute_iteration(&mut self) -> bool {
        self.execute_iteration_with_log(&mut LogSink)
    }

    /// Run one side, reporting margin diagnostics to `sink`
    ///
    /// An empty header, or a margin where no segment found a move, halts the
    /// loop before embedding. A validation mismatch is recorded and the loop
    /// continues.
    pub fn execute_iteration_with_log(&mut self, sink: &mut dyn DiagnosticSink) -> bool {
        let Some(side) = self.current_side() else {
            return false;
        };

        let start = self.canvas.extract_corner(Corner::TopRight);
        let end = self.canvas.extract_corner(Corner::BottomRight);
        let margin = build_margin_with_log(&start, &end, self.directionality_check, sink);

        if margin.halts_loop() {
            log::warn!("Margin on {side} side could not be built; stopping");
            for issue in margin.issues() {
                log::debug!("{side}: {issue}");
            }
            self.halted_at = Some(side);
            self.records.push(SideRecord { side, margin });
            return false;
        }

        if margin.is_solved() {
            log::info!("Margin on {side} side solved");
        } else {
            log::warn!(
                "Margin on {side} side embedded with {} issue(s)",
                margin.issues().len()
            );
        }

        self.canvas.embed_margin(margin.rows().view());
        self.record_frame();
        self.canvas.rotate_left();
        self.rotations += 1;
        self.record_frame();

        self.records.push(SideRecord { side, margin });
        !self.is_finished()
    }

    /// Run until all four sides are built or a margin halts the loop
    pub fn run(&mut self) -> LoopOutcome {
        self.run_with_log(&mut LogSink)
    }

    /// [`Self::run`] with margin diagnostics sent to `sink`
    pub fn run_with_log(&mut self, sink: &mut dyn DiagnosticSink) -> LoopOutcome {
        while self.execute_iteration_with_log(sink) {}
        self.outcome()
    }

    /// Summary of the progress so far
    pub fn outcome(&self) -> LoopOutcome {
        LoopOutcome {
            sides_built: self.rotations,
            halted_at: self.halted_at,
            solved: self.is_fully_solved(),
        }
    }

    /// Rotate until the canvas is back in its starting orientation
    ///
    /// A completed loop has turned the canvas a full circle already; a halted
    /// one needs the remaining quarter turns.
    pub fn restore_orientation(&mut self) {
        while !self.rotations.is_multiple_of(SIDE_COUNT) {
            self.canvas.rotate_left();
            self.rotations += 1;
            self.record_frame();
        }
    }

    /// Export captured frames as a GIF
    ///
    /// # Errors
    ///
    /// Returns an error if capture was never enabled or the GIF cannot be written
    pub fn export_animation(
        &self,
        output_path: &str,
        frame_delay_ms: u32,
    ) -> crate::io::error::Result<()> {
        self.capture.as_ref().map_or_else(
            || {
                Err(crate::io::error::invalid_parameter(
                    "animation",
                    &"disabled",
                    &"frame capture was not enabled for this loop",
                ))
            },
            |capture| capture.export_gif(output_path, frame_delay_ms),
        )
    }

    fn record_frame(&mut self) {
        if let Some(capture) = self.capture.as_mut() {
            capture.record(self.canvas.cells());
        }
    }
}

//! Geometry constants and runtime configuration defaults

// Pattern geometry
/// Side length of a seed pattern
pub const SEED_SIZE: usize = 2;
/// Side length of a corner pattern
pub const CORNER_SIZE: usize = 4;
/// Side length of the square canvas
pub const CANVAS_SIZE: usize = 32;
/// Number of distinct seeds (all 2x2 bit patterns)
pub const SEED_COUNT: usize = 16;

// Margin layout
/// Width of every margin block in columns
pub const MARGIN_WIDTH: usize = CORNER_SIZE;
/// Height of a separator block
pub const SEPARATOR_ROWS: usize = 2;
/// Height of the encoded transmission block (index and direction row per segment)
pub const TRANSMISSION_ROWS: usize = 2 * SEGMENT_COUNT;
/// Total height of an assembled margin
pub const MARGIN_ROWS: usize = 4 * CORNER_SIZE + TRANSMISSION_ROWS + 4 * SEPARATOR_ROWS;

/// Number of segments a header is partitioned into
pub const SEGMENT_COUNT: usize = 4;
/// Number of canvas sides visited by the margin loop
pub const SIDE_COUNT: usize = 4;

// Rendering settings
/// Default pixel size of a single cell in exported images
pub const DEFAULT_CELL_SIZE: u32 = 16;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 400;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Multiplier applied to the delay of the final animation frame
pub const FINAL_FRAME_HOLD: u32 = 5;
/// Filled cell color
pub const FILLED_COLOR: [u8; 4] = [0x33, 0x33, 0x33, 0xff];
/// Empty cell color
pub const EMPTY_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

// Solvability emergence animation
/// Offset at which the 16x16 matrix is centred on the canvas
pub const EMERGENCE_OFFSET: usize = (CANVAS_SIZE - SEED_COUNT) / 2;
/// Maximum number of life generations simulated for the emergence animation
pub const MAX_LIFE_GENERATIONS: usize = 150;
/// Offset of the single border traced one cell outside the matrix
pub const MATRIX_BORDER_OFFSET: usize = EMERGENCE_OFFSET - 1;
/// Offsets of the double border traced around the single one
pub const OUTER_BORDER_OFFSETS: [usize; 2] = [4, 5];
/// Maximum number of life generations simulated when the framed matrix dissolves
pub const MAX_DISSIPATION_GENERATIONS: usize = 200;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;


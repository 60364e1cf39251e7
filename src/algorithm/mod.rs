/// Header/footer derivation and the directionality swap
pub mod corners;
/// Four-sided canvas loop that embeds and rotates margins
pub mod executor;
/// Margin block assembly, encoding and validation
pub mod margin;
/// Candidate moves and greedy per-segment selection
pub mod moves;
/// Header segmentation into four labeled groups
pub mod segmentation;
/// Exhaustive solvability enumeration over seed pairs
pub mod solvability;

pub use corners::{HeaderFooter, Orientation, apply_directionality_swap, derive_header_footer};
pub use executor::{CanvasLoop, LoopOutcome, SideRecord};
pub use margin::{
    BlockKind, Margin, MarginBlock, MarginIssue, MarginReport, build_margin, build_margin_with_log,
};
pub use moves::{Move, Selection, best_move};
pub use segmentation::{SegmentationScheme, Segments, segment};
pub use solvability::{SolvabilityMatrix, compute_solvability_matrix, is_solvable};

//! Crate-wide error type.
//!
//! Every fallible operation in this crate returns `Result<T, Error>` rather
//! than panicking; the only exceptions are invariants that can only be
//! violated by a mesh that was already corrupt at construction time.

use thiserror::Error as ThisError;

use crate::indices::{EdgeId, VertexId};

#[derive(Clone, ThisError, Debug)]
pub enum Error {
    // --- Precondition failures (caller bug) -------------------------------
    #[error("force id '{0}' is not registered")]
    UnknownForceId(String),

    #[error("force id '{0}' is already registered")]
    DuplicateForceId(String),

    #[error("unrecognised force type '{0}'")]
    UnknownForceType(String),

    #[error("{op}: expected {expected} params, got {got}")]
    ParamLengthMismatch {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("pixelated field force '{0}' has no grid configured")]
    GridNotConfigured(String),

    #[error("grid spacing must be positive, got ({spacing_x}, {spacing_y})")]
    InvalidGridSpacing { spacing_x: f64, spacing_y: f64 },

    #[error("grid cell counts must be at least 1, got ({ncells_x}, {ncells_y})")]
    InvalidGridCellCount { ncells_x: usize, ncells_y: usize },

    #[error(
        "field array length {got} does not match grid cell count {expected} (ncells_x * ncells_y)"
    )]
    FieldLengthMismatch { expected: usize, got: usize },

    // --- Geometry sanity failures (upstream corruption) --------------------
    #[error("edge tracer for edge {edge:?} did not terminate at the expected pixel")]
    EdgeTracerDidNotTerminate { edge: EdgeId },

    #[error("edge tracer for edge {edge:?}: consecutive pixels differ in both axes at step {step}")]
    AmbiguousPixelStep { edge: EdgeId, step: usize },

    // --- Mesh construction failures -----------------------------------------
    #[error("face with only {0} vertices cannot be built (need at least 3)")]
    DegenerateFace(usize),

    #[error("vertex index {index} out of bounds ({num_vertices} vertices)")]
    OutOfBoundsVertex { index: usize, num_vertices: usize },

    #[error("edge between vertices {from:?} and {to:?} is referenced by more than two half-edges")]
    NonManifoldEdge { from: VertexId, to: VertexId },
}

pub mod core;
pub mod dash;
pub mod render;
pub mod runtime;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("{what}: expected {expected} values, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{what}: grid is {rows}x{cols} but {found} values were given")]
    GridMismatch {
        what: &'static str,
        rows: usize,
        cols: usize,
        found: usize,
    },

    #[error("node {label:?} names unknown parent {parent:?}")]
    UnknownParent { label: String, parent: String },

    #[error("{what}: index {index} out of range (len {len})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("dashboard has no plots")]
    EmptyDashboard,

    #[error("tab {name:?} has no plots")]
    EmptyTab { name: String },

    #[error("dashboard mixes {direct} direct plots with tabs; put them in a tab")]
    MixedLayout { direct: usize },

    #[error("failed to encode figure")]
    Encode,

    #[error("failed to write {}", path.display())]
    Write { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, error_stack::Report<ChartError>>;

pub mod prelude {
    pub use crate::core::*;
    pub use crate::dash::*;
    pub use crate::render::*;
    pub use crate::runtime::*;
}

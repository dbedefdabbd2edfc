use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze must have at least one cell")]
    EmptyGrid,
    #[error("cell {cell} is outside a grid of {cells} cells")]
    OutOfBounds { cell: usize, cells: usize },
    #[error("{what} starts on wall cell {cell}")]
    StartOnWall { what: &'static str, cell: usize },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("store contents could not be encoded: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown difficulty [{0}], expected easy, medium, hard or hardcore")]
pub struct ParseDifficultyError(pub String);

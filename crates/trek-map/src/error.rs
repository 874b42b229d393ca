use thiserror::Error;
use trek_astar::SearchError;
use trek_core::Point;

/// Errors that can occur when querying or mutating a [`GridMap`](crate::GridMap).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The configured distance metric name is not one of `euclidean`,
    /// `manhattan` or `specialmanhattan`.
    #[error("unrecognized distance metric `{0}`: use euclidean, manhattan or specialmanhattan")]
    UnknownMetric(String),
    /// Tried to move or place an entity onto an occupied cell.
    #[error("cell {pos} is not available")]
    CellOccupied { pos: Point },
    #[error("cell {pos} is outside the map")]
    OutOfBounds { pos: Point },
    /// A move or removal named a cell that holds nothing.
    #[error("cell {pos} holds no entity")]
    EmptyCell { pos: Point },
    #[error("no free cell to choose from")]
    NoFreeCell,
    #[error(transparent)]
    Search(#[from] SearchError),
}

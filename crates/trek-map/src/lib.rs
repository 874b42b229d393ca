//! A grid map for trek: cells holding entities, adjacency and range
//! queries, random sampling, line of sight, and A* path finding through
//! [`trek_astar`].
//!
//! ```
//! use trek_core::Point;
//! use trek_map::{GridMap, MapConfig, MapEntity};
//!
//! let mut map: GridMap<MapEntity> = GridMap::new(10, 10);
//! map.place(MapEntity::new(Point::new(2, 1), "rock")).unwrap();
//!
//! let path = map.find_path(Point::new(1, 1), Point::new(3, 1)).unwrap();
//! assert_eq!(path.len(), 5);
//!
//! let map = map.with_config(MapConfig::default().with_diagonal_movement(true));
//! assert_eq!(map.find_path(Point::new(1, 1), Point::new(3, 1)).unwrap().len(), 3);
//! ```

mod cell;
mod config;
mod entity;
mod error;
mod map;
mod metric;
mod neighbors;
mod random;
mod sight;

pub use cell::{CellFactory, DefaultCellFactory, GridCell};
pub use config::MapConfig;
pub use entity::{Entity, MapEntity};
pub use error::MapError;
pub use map::GridMap;
pub use metric::{Metric, chebyshev, euclidean, manhattan};
pub use neighbors::{GridNeighborFactory, GridNeighbors};

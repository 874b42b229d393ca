//! The grid map: cell storage, entity placement, adjacency queries and path
//! finding.

use std::collections::HashSet;

use trek_astar::{AStar, Node};
use trek_core::{Direction, Point, Range};

use crate::cell::{CellFactory, DefaultCellFactory, GridCell};
use crate::config::MapConfig;
use crate::entity::Entity;
use crate::error::MapError;
use crate::metric::Metric;
use crate::neighbors::GridNeighborFactory;

/// A rectangular grid of [`GridCell`]s, each empty or holding one `T`.
///
/// Coordinates run from `(0, 0)` at the top left to
/// `(width - 1, height - 1)`; `y` grows downwards.
#[derive(Debug, Clone)]
pub struct GridMap<T> {
    width: i32,
    height: i32,
    cells: Vec<GridCell<T>>,
    config: MapConfig,
}

impl<T> GridMap<T> {
    /// Create a map of empty cells with the default configuration.
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_factory(width, height, &DefaultCellFactory)
    }

    /// Create a map whose cells are produced by `factory`, row by row.
    pub fn with_factory(width: i32, height: i32, factory: &impl CellFactory<T>) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let cells = Range::new(0, 0, width, height).iter().map(|p| factory.cell(p)).collect();
        Self {
            width,
            height,
            cells,
            config: MapConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: MapConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    #[inline]
    pub fn config_mut(&mut self) -> &mut MapConfig {
        &mut self.config
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The half-open range covering every cell.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn is_in_bounds(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    fn index(&self, p: Point) -> Option<usize> {
        self.is_in_bounds(p).then(|| (p.y * self.width + p.x) as usize)
    }

    /// Whether `p` is on the map and its cell is empty.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.cell(p).is_some_and(GridCell::is_free)
    }

    pub fn cell(&self, p: Point) -> Option<&GridCell<T>> {
        self.index(p).map(|i| &self.cells[i])
    }

    fn cell_mut(&mut self, p: Point) -> Result<&mut GridCell<T>, MapError> {
        let i = self.index(p).ok_or(MapError::OutOfBounds { pos: p })?;
        Ok(&mut self.cells[i])
    }

    /// What occupies `p`, if anything. `None` off the map.
    pub fn contents(&self, p: Point) -> Option<&T> {
        self.cell(p).and_then(GridCell::contents)
    }

    pub fn contents_mut(&mut self, p: Point) -> Option<&mut T> {
        let i = self.index(p)?;
        self.cells[i].contents_mut()
    }

    /// Overwrite the contents of `p`, returning the previous contents.
    pub fn set_contents(&mut self, p: Point, contents: Option<T>) -> Result<Option<T>, MapError> {
        Ok(self.cell_mut(p)?.set_contents(contents))
    }

    fn directions(&self) -> &'static [Direction] {
        if self.config.allow_diagonal_movement {
            &Direction::ALL
        } else {
            &Direction::CARDINAL
        }
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Directions (all eight, regardless of the diagonal setting) whose
    /// adjacent cell is free.
    pub fn available_directions(&self, p: Point) -> Vec<Direction> {
        Direction::ALL.into_iter().filter(|&d| self.is_free(p.step(d))).collect()
    }

    /// Among `dir` and its two neighbouring directions, those whose adjacent
    /// cell is free. Order is `dir`, clockwise, counter-clockwise.
    pub fn similar_available_directions(&self, p: Point, dir: Direction) -> Vec<Direction> {
        dir.similar().into_iter().filter(|&d| self.is_free(p.step(d))).collect()
    }

    /// Free cells among the eight around `p`, in compass order.
    pub fn adjacent_free_coordinates(&self, p: Point) -> Vec<Point> {
        p.neighbors_8().into_iter().filter(|&n| self.is_free(n)).collect()
    }

    /// Every in-bounds cell reachable from `origin` in at most `range`
    /// steps, nearest first.
    ///
    /// Steps follow the map's diagonal setting and ignore occupancy. The
    /// origin is listed first when `include_origin` is set and omitted
    /// otherwise.
    pub fn coordinates_in_range(&self, origin: Point, range: u32, include_origin: bool) -> Vec<Point> {
        let mut found = Vec::new();
        if include_origin {
            found.push(origin);
        }
        let mut seen = HashSet::from([origin]);
        let mut frontier = vec![origin];
        for _ in 0..range {
            let mut next = Vec::new();
            for &c in &frontier {
                for &d in self.directions() {
                    let n = c.step(d);
                    if self.is_in_bounds(n) && seen.insert(n) {
                        found.push(n);
                        next.push(n);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }
        found
    }

    // -----------------------------------------------------------------------
    // Distances and path finding
    // -----------------------------------------------------------------------

    /// The configured metric, parsed from its name.
    pub fn heuristic(&self) -> Result<Metric, MapError> {
        self.config.distance_metric.parse()
    }

    /// Distance between opposite corners of the map under `metric`.
    pub fn max_distance(&self, metric: Metric) -> f64 {
        metric.distance(Point::ZERO, Point::new(self.width - 1, self.height - 1))
    }

    /// Scale `distance` into `[0, 1]` relative to the map's diagonal under
    /// `metric`. A single-cell map has no extent, so everything on it is at
    /// normalized distance 0.
    pub fn normalized_distance(&self, metric: Metric, distance: f64) -> f64 {
        let max = self.max_distance(metric);
        if max > 0.0 { distance / max } else { 0.0 }
    }

    /// A neighbor factory exploring this map's free cells.
    pub fn neighbor_factory(&self) -> GridNeighborFactory<'_, T> {
        GridNeighborFactory::new(self)
    }

    /// Shortest path from `start` to `goal`, both inclusive.
    ///
    /// Only free cells are entered, so an occupied `goal` is never reached.
    /// When the goal is unreachable, or the depth constraint stops the
    /// search, the path ends at the cell estimated closest to the goal;
    /// check the last element to tell the cases apart.
    pub fn find_path(&self, start: Point, goal: Point) -> Result<Vec<Point>, MapError> {
        let metric = self.heuristic()?;
        log::debug!(
            "find_path {start} -> {goal} (metric={metric}, diagonal={}, depth={})",
            self.config.allow_diagonal_movement,
            self.config.depth_constraint
        );
        let astar = AStar::new(
            Node::new(start),
            Node::new(goal),
            self.config.depth_constraint,
            self.neighbor_factory(),
            metric,
        );
        let path: Vec<Point> = astar.execute()?.into_iter().map(|step| step.element).collect();
        log::debug!(
            "find_path {start} -> {goal}: {} steps, reached={}",
            path.len(),
            path.last() == Some(&goal)
        );
        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

fn kind_matches<T: Entity>(entity: &T, kind: Option<&str>) -> bool {
    kind.is_none_or(|k| entity.kind() == k)
}

impl<T: Entity> GridMap<T> {
    /// Put `entity` in the cell named by its own position.
    pub fn place(&mut self, entity: T) -> Result<(), MapError> {
        let pos = entity.pos();
        let cell = self.cell_mut(pos)?;
        if !cell.is_free() {
            return Err(MapError::CellOccupied { pos });
        }
        cell.set_contents(Some(entity));
        Ok(())
    }

    /// Take the entity at `pos` off the map and hand it back.
    pub fn remove_entity(&mut self, pos: Point) -> Result<T, MapError> {
        self.cell_mut(pos)?.take().ok_or(MapError::EmptyCell { pos })
    }

    /// Move the entity at `from` to `to`, updating its position.
    ///
    /// Fails with [`MapError::OutOfBounds`] if `to` is off the map and with
    /// [`MapError::CellOccupied`] if it holds something, leaving the map
    /// untouched either way.
    pub fn move_entity(&mut self, from: Point, to: Point) -> Result<(), MapError> {
        if !self.cell_mut(to)?.is_free() {
            return Err(MapError::CellOccupied { pos: to });
        }
        let mut entity = self.remove_entity(from)?;
        entity.set_pos(to);
        log::debug!("moved {} from {from} to {to}", entity.kind());
        self.set_contents(to, Some(entity))?;
        Ok(())
    }

    /// Entities in the eight cells around `p` (not `p` itself), optionally
    /// restricted to one kind.
    pub fn adjacent_entities(&self, p: Point, kind: Option<&str>) -> Vec<&T> {
        p.neighbors_8()
            .into_iter()
            .filter_map(|n| self.contents(n))
            .filter(|e| kind_matches(*e, kind))
            .collect()
    }

    /// Entities inside the inclusive rectangle spanned by `top_left` and
    /// `bottom_right`, row by row. Parts of the rectangle off the map are
    /// ignored. `None` matches every kind.
    pub fn entities_in_range(&self, top_left: Point, bottom_right: Point, kind: Option<&str>) -> Vec<&T> {
        Range::inclusive(top_left, bottom_right)
            .intersect(self.bounds())
            .iter()
            .filter_map(|p| self.contents(p))
            .filter(|e| kind_matches(*e, kind))
            .collect()
    }
}

//! Map cells and the factories that lay them out.

use trek_core::Point;

/// One square of a [`GridMap`](crate::GridMap). A cell is free while it
/// holds nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell<T> {
    contents: Option<T>,
}

impl<T> Default for GridCell<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> GridCell<T> {
    pub const fn empty() -> Self {
        Self { contents: None }
    }

    pub const fn occupied(contents: T) -> Self {
        Self {
            contents: Some(contents),
        }
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.contents.is_none()
    }

    #[inline]
    pub fn contents(&self) -> Option<&T> {
        self.contents.as_ref()
    }

    #[inline]
    pub fn contents_mut(&mut self) -> Option<&mut T> {
        self.contents.as_mut()
    }

    /// Replace the contents, returning what was there before.
    pub fn set_contents(&mut self, contents: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.contents, contents)
    }

    /// Empty the cell, returning its former contents.
    pub fn take(&mut self) -> Option<T> {
        self.contents.take()
    }
}

/// Produces the initial cell for each map position.
///
/// Any `Fn(Point) -> GridCell<T>` closure is a factory.
pub trait CellFactory<T> {
    fn cell(&self, pos: Point) -> GridCell<T>;
}

/// Lays out a map of empty cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCellFactory;

impl<T> CellFactory<T> for DefaultCellFactory {
    fn cell(&self, _pos: Point) -> GridCell<T> {
        GridCell::empty()
    }
}

impl<T, F: Fn(Point) -> GridCell<T>> CellFactory<T> for F {
    fn cell(&self, pos: Point) -> GridCell<T> {
        self(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_contents_lifecycle() {
        let mut cell = GridCell::empty();
        assert!(cell.is_free());
        assert_eq!(cell.set_contents(Some('@')), None);
        assert!(!cell.is_free());
        assert_eq!(cell.contents(), Some(&'@'));
        if let Some(c) = cell.contents_mut() {
            *c = '#';
        }
        assert_eq!(cell.take(), Some('#'));
        assert!(cell.is_free());
    }

    #[test]
    fn factories_build_cells() {
        let cell: GridCell<u8> = DefaultCellFactory.cell(Point::new(3, 4));
        assert!(cell.is_free());

        let walls = |p: Point| {
            if p.x == 0 {
                GridCell::occupied(1u8)
            } else {
                GridCell::empty()
            }
        };
        assert!(!walls.cell(Point::new(0, 5)).is_free());
        assert!(walls.cell(Point::new(1, 5)).is_free());
    }
}

use trek_core::Point;

/// Something that occupies a map cell and knows where it is.
///
/// The map keeps `pos` in sync when it moves an entity; callers that move
/// entities by other means must do the same.
pub trait Entity {
    fn pos(&self) -> Point;

    fn set_pos(&mut self, pos: Point);

    /// Free-form category used to filter adjacency and range queries.
    fn kind(&self) -> &str;
}

/// A plain positioned entity tagged with a kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapEntity {
    pub pos: Point,
    pub kind: String,
}

impl MapEntity {
    pub fn new(pos: Point, kind: impl Into<String>) -> Self {
        Self {
            pos,
            kind: kind.into(),
        }
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }
}

impl Entity for MapEntity {
    #[inline]
    fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }

    #[inline]
    fn kind(&self) -> &str {
        &self.kind
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn map_entity_json_round_trip() {
        let e = MapEntity::new(Point::new(4, 2), "goblin");
        let json = serde_json::to_string(&e).unwrap();
        let back: MapEntity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}

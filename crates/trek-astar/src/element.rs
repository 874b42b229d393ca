use std::hash::Hash;

use trek_core::Point;

use crate::error::SearchError;

/// A payload that a search [`Node`](crate::Node) can wrap.
///
/// `key` feeds the open- and closed-set lookups; `equals` decides whether
/// a node has reached the goal. The two must agree: equal elements yield
/// equal keys.
///
/// `equals` has a default body that reports
/// [`SearchError::EqualityUnsupported`]. A payload that skips it can still
/// be wrapped in nodes, and the violation surfaces the first time two of
/// them are compared.
pub trait Element: Clone {
    /// Canonical lookup key.
    type Key: Eq + Hash + Clone;

    fn key(&self) -> Self::Key;

    fn equals(&self, _other: &Self) -> Result<bool, SearchError> {
        Err(SearchError::EqualityUnsupported {
            element: std::any::type_name::<Self>(),
        })
    }
}

impl Element for Point {
    type Key = Point;

    #[inline]
    fn key(&self) -> Point {
        *self
    }

    #[inline]
    fn equals(&self, other: &Self) -> Result<bool, SearchError> {
        Ok(self == other)
    }
}

macro_rules! self_keyed {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                type Key = $t;

                #[inline]
                fn key(&self) -> $t {
                    self.clone()
                }

                #[inline]
                fn equals(&self, other: &Self) -> Result<bool, SearchError> {
                    Ok(self == other)
                }
            }
        )*
    };
}

self_keyed!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, char, String);

impl<A: Element, B: Element> Element for (A, B) {
    type Key = (A::Key, B::Key);

    fn key(&self) -> Self::Key {
        (self.0.key(), self.1.key())
    }

    fn equals(&self, other: &Self) -> Result<bool, SearchError> {
        Ok(self.0.equals(&other.0)? && self.1.equals(&other.1)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Opaque(u8);

    impl Element for Opaque {
        type Key = u8;

        fn key(&self) -> u8 {
            self.0
        }
    }

    #[test]
    fn point_keys_and_equality() {
        let a = Point::new(2, 3);
        assert_eq!(a.key(), Point::new(2, 3));
        assert_eq!(a.equals(&Point::new(2, 3)), Ok(true));
        assert_eq!(a.equals(&Point::new(3, 2)), Ok(false));
    }

    #[test]
    fn tuples_compare_componentwise() {
        assert_eq!((1u32, 'a').equals(&(1u32, 'a')), Ok(true));
        assert_eq!((1u32, 'a').equals(&(1u32, 'b')), Ok(false));
        assert_eq!((1u32, 'a').key(), (1, 'a'));
    }

    #[test]
    fn missing_equality_is_reported() {
        let err = Opaque(1).equals(&Opaque(1)).unwrap_err();
        assert!(matches!(err, SearchError::EqualityUnsupported { element } if element.ends_with("Opaque")));
    }
}

use thiserror::Error;

/// Errors raised by the search core.
///
/// Running out of open nodes or hitting the depth constraint are not
/// errors: both produce an ordinary (shorter) path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The element type does not provide an equality relation, so two
    /// nodes wrapping it cannot be compared.
    #[error("elements of type `{element}` must implement `Element::equals`")]
    EqualityUnsupported { element: &'static str },
}

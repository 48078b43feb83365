use thiserror::Error;

/// Error types for `List` and `Cursor` operations
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ListError {
    /// Operation attempted on an empty list
    #[error("Operation on empty list")]
    Empty,
    /// The element is not linked into this list
    #[error("Element is not linked into this list")]
    NotInList,
    /// The element under the cursor was removed from the list
    #[error("Cursor element was removed from the list")]
    Detached,
}

//! Error types

/// Errors raised when wiring a collapsible group.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured root node is absent from the tree or is not an
    /// element node.
    #[error("configuration has no valid root element")]
    MissingRootElement,
}

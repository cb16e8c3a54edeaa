/// Errors produced while parsing SVG path data.
///
/// Offsets are byte offsets into the parsed string. No partial path is ever returned
/// alongside an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A letter that is not one of `MmLlHhVvQqTtCcSsZz`, including the arc command.
    #[error("unsupported path command `{command}` at offset {offset}")]
    UnsupportedCommand { command: char, offset: usize },
    /// Too few numbers, or something that is not a number where one is required.
    #[error("malformed arguments for path command `{command}` at offset {offset}")]
    MalformedArguments { command: char, offset: usize },
    /// A number appeared before any command letter.
    #[error("number at offset {offset} is not preceded by a path command")]
    MissingCommand { offset: usize },
    /// Path data has to start with a move.
    #[error("path data starts with `{command}` at offset {offset} instead of a move")]
    MissingMoveTo { command: char, offset: usize },
}

/// Errors produced while loading the outline of an SVG document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid SVG document: {0}")]
    Xml(#[from] roxmltree::Error),
    /// `<path>` elements are numbered in document order, starting at 0.
    #[error("<path> element {element} has no `d` attribute")]
    MissingPathData { element: usize },
    #[error("<path> element {element} has invalid path data: {source}")]
    PathData { element: usize, source: ParseError },
}

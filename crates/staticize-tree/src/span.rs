//! Source locations

use serde::Serialize;

/// Where a node sits in the file it was parsed from.
///
/// Trees assembled by hand (see [`crate::build`]) use [`Span::default`],
/// whose positions are all zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// First character of the node.
    pub start: Position,
    /// Last character of the node.
    pub end: Position,
}

/// A 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    /// Line, counted from 1.
    pub line: u32,
    /// Column within the line, counted from 1.
    pub column: u32,
}

//! Control characters that word processors embed in run text.
//!
//! These marks travel inside ordinary text runs rather than as nodes of
//! their own, so consumers that care about them have to scan run text.

/// Hard page break mark (form feed).
pub const PAGE_BREAK: char = '\u{000C}';

/// Explicit line break within a paragraph.
pub const LINE_BREAK: char = '\u{000B}';

/// Column break mark.
pub const COLUMN_BREAK: char = '\u{000E}';

/// Paragraph mark.
pub const PARAGRAPH_BREAK: char = '\u{000D}';

/// Tab stop.
pub const TAB: char = '\u{0009}';

/// End-of-cell mark inside table cells.
pub const CELL: char = '\u{0007}';

/// Non-breaking space.
pub const NON_BREAKING_SPACE: char = '\u{00A0}';

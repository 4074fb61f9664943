//! Marker glyphs used by the paste source.
//!
//! Sources in the wild sometimes append a variation selector to the id
//! marker, so the header pattern accepts one after it.

/// U+1F464 BUST IN SILHOUETTE, precedes the account name.
pub const NAME_MARKER: char = '\u{1F464}';

/// U+1F194 SQUARED ID, precedes the game id.
pub const ID_MARKER: char = '\u{1F194}';

/// U+FE0F VARIATION SELECTOR-16, optional after [`ID_MARKER`].
pub const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Separator between name and id on the header line, and between uid and
/// password on the credentials line.
pub const SEPARATOR: char = ':';

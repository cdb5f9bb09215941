// SPDX-License-Identifier: GPL-3.0-only

//! Inline content references
//!
//! The 2.0.0 schema addresses every file's data through a URI. Literal
//! contents from a v1 document become a `data` URI whose opaque part is a
//! comma followed by the raw contents. The contents are not percent-encoded,
//! so existing consumers see exactly `data:,<contents>`.

const INLINE_PREFIX: &str = "data:,";

/// Wrap literal file contents as an inline content reference
pub fn inline_source(contents: &str) -> String {
    let mut source = String::with_capacity(INLINE_PREFIX.len() + contents.len());
    source.push_str(INLINE_PREFIX);
    source.push_str(contents);
    source
}

/// Recover the literal contents of a reference built by [`inline_source`]
///
/// Returns `None` for any other kind of source.
pub fn decode_inline_source(source: &str) -> Option<&str> {
    source.strip_prefix(INLINE_PREFIX)
}

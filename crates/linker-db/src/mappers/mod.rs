//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions between database rows and domain objects
//! (linker-core). Enum columns are stored as their canonical upper-case names.

mod chat_message;
mod issue;
mod proxy_link;
mod user;

use std::str::FromStr;

/// Parse a stored enum column, falling back to the default for unknown values
///
/// Rows are guarded by CHECK constraints, so a fallback means the schema and the
/// code disagree; it is logged rather than failing the whole query.
pub(crate) fn parse_column<T>(column: &'static str, value: &str) -> T
where
    T: FromStr + Default,
{
    value.parse().unwrap_or_else(|_| {
        tracing::warn!(column, value, "Unknown enum value in database row");
        T::default()
    })
}

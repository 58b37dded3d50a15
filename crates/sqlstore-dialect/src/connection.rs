//! Connection string inspection.

use url::Url;

use crate::engine::EngineKind;
use crate::error::Result;

/// Query parameter that switches PostgreSQL to binary parameter transmission.
pub const BINARY_PARAMETERS_KEY: &str = "binary_parameters";

/// Returns whether the connection string enables binary parameters.
///
/// Only PostgreSQL connection strings are inspected; every other engine
/// returns `false` without parsing. The first `binary_parameters` value
/// must be exactly `yes`.
///
/// # Errors
///
/// Returns [`DialectError::InvalidConnectionString`](crate::DialectError::InvalidConnectionString)
/// if a PostgreSQL connection string is not a valid absolute URL.
pub fn binary_parameters_enabled(engine: EngineKind, connection_string: &str) -> Result<bool> {
    if engine != EngineKind::Postgres {
        return Ok(false);
    }

    let url = Url::parse(connection_string)?;
    Ok(url
        .query_pairs()
        .find(|(key, _)| key == BINARY_PARAMETERS_KEY)
        .is_some_and(|(_, value)| value == "yes"))
}

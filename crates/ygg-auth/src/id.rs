//! Identifier wire form.

use uuid::Uuid;

use crate::{Error, Result};

/// Render a UUID the way it crosses the wire: 32 lowercase hex digits, no dashes.
pub fn unsign(id: &Uuid) -> String {
    id.as_simple().to_string()
}

/// Parse an identifier received from a client. Both the unsigned (32 hex digits)
/// and the dashed (36 chars) forms are accepted.
pub fn parse_unsigned(raw: &str) -> Result<Uuid> {
    let raw = raw.trim();
    if raw.len() != 32 && raw.len() != 36 {
        return Err(Error::InvalidId(raw.to_string()));
    }
    Uuid::try_parse(raw).map_err(|_| Error::InvalidId(raw.to_string()))
}

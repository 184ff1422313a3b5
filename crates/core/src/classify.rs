//! Record classification from the identifier's minor component.

use tracing::debug;

use crate::model::tag::tags_for;
use crate::model::{TagSet, ThreatType};

/// Returns the minor component of a dotted id: the text between the first
/// and second dot. `None` when the id has no dot.
pub fn minor_component(id: &str) -> Option<&str> {
    let (_, rest) = id.split_once('.')?;
    Some(rest.split('.').next().unwrap_or(rest))
}

/// Derives the threat type of an id.
///
/// Missing, empty, non-numeric and out-of-range suffixes all yield `None`.
pub fn threat_type(id: &str) -> Option<ThreatType> {
    let minor = minor_component(id)?.trim();
    let parsed = minor.parse::<u32>().ok().and_then(ThreatType::from_key);
    if parsed.is_none() {
        debug!(id, "unrecognised type suffix");
    }
    parsed
}

/// Tags for an id; empty when the type cannot be derived.
pub fn tags(id: &str) -> TagSet {
    tags_for(threat_type(id))
}

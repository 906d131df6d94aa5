//! Per-header precondition predicates
//!
//! One pure function per RFC 7232 subsection, each answering "does this
//! precondition hold?" for a single header value against one resource
//! capability. Precedence and mutual exclusion between headers live in
//! [`crate::evaluate`], not here.

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::date::parse_http_date;
use crate::resource::{EtagError, EtagProvider, LastModifiedProvider};

/// Wildcard validator matching "any current representation exists"
pub const WILDCARD: &str = "*";

/// `If-Match` (RFC 7232 §3.1)
///
/// Holds iff the client's validator is `*` and an entity exists, or the
/// client's validator equals the resource's current entity tag. `*` against
/// a location with no entity fails (the client asserted that some
/// representation exists). Retrieval failure fails the predicate.
pub fn if_match(resource: &dyn EtagProvider, client_etag: &str) -> bool {
    let server_etag = match resource.etag() {
        Ok(etag) => etag,
        Err(EtagError::NoResource) => return false,
        Err(EtagError::Retrieval(_)) => return false,
    };

    client_etag == WILDCARD || client_etag == server_etag
}

/// `If-Unmodified-Since` (RFC 7232 §3.4)
///
/// Holds iff the resource was not modified strictly after the client's
/// timestamp. An unparsable date means the header must be ignored, so the
/// predicate holds (no constraint imposed).
pub fn if_unmodified_since(resource: &dyn LastModifiedProvider, date: &str) -> bool {
    let Some(client_date) = parse_http_date(date) else {
        trace!(header = date, "ignoring unparsable If-Unmodified-Since date");
        return true;
    };

    resource.last_modified() <= client_date
}

/// `If-None-Match` (RFC 7232 §3.2)
///
/// Holds ("none match", request proceeds) iff the client's validator is `*`
/// and no entity exists, or a concrete validator differs from the
/// resource's current entity tag. `*` against an existing entity fails, as
/// does any etag retrieval failure.
pub fn if_none_match(resource: &dyn EtagProvider, client_etag: &str) -> bool {
    let server_etag = match resource.etag() {
        Ok(etag) => etag,
        Err(EtagError::NoResource) => return client_etag == WILDCARD,
        Err(EtagError::Retrieval(_)) => return false,
    };

    client_etag != WILDCARD && client_etag != server_etag
}

/// `If-Modified-Since` (RFC 7232 §3.3)
///
/// Holds ("was modified", request proceeds) iff the resource was modified
/// strictly after the client's timestamp. An unparsable date is ignored
/// (predicate holds), and so is a date strictly in the future of `now`,
/// which the RFC declares invalid.
pub fn if_modified_since(
    resource: &dyn LastModifiedProvider,
    date: &str,
    now: DateTime<Utc>,
) -> bool {
    let Some(client_date) = parse_http_date(date) else {
        trace!(header = date, "ignoring unparsable If-Modified-Since date");
        return true;
    };

    if client_date > now {
        trace!(header = date, "ignoring future-dated If-Modified-Since");
        return true;
    }

    resource.last_modified() > client_date
}

/// `If-Range` validity check
///
/// Holds iff the resource's current entity tag exactly matches the
/// client-supplied validator. Any mismatch or retrieval failure means the
/// Range request must be discarded and the full resource served.
pub fn if_range(resource: &dyn EtagProvider, client_etag: &str) -> bool {
    resource.etag().is_ok_and(|server_etag| server_etag == client_etag)
}

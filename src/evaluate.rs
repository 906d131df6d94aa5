//! Conditional request evaluator
//!
//! Composes the per-header predicates under the RFC 7232 §5 precedence and
//! mutual-exclusion rules into a single [`Verdict`] per request. The whole
//! pass is a single pure function over an immutable header snapshot and a
//! per-evaluation capability wrapper.

use chrono::Utc;
use hyper::header::{
    HeaderMap, IF_MATCH, IF_MODIFIED_SINCE, IF_NONE_MATCH, IF_RANGE, IF_UNMODIFIED_SINCE, RANGE,
};
use hyper::{Method, StatusCode};
use thiserror::Error;
use tracing::{debug, trace};

use crate::predicates;
use crate::resource::Validators;

/// Why an evaluation rejected the request
///
/// Returned as a distinguishable error value so the caller chooses the
/// exact response; neither variant is a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// A strong precondition (`If-Match`/`If-Unmodified-Since`) failed.
    ///
    /// Respond 412 Precondition Failed, unless the server verifies that the
    /// requested state change is already reflected in the resource's
    /// current state, in which case a 2xx is allowed.
    #[error("resource was modified since the precondition was captured")]
    WasModified,

    /// The `If-Range` validator no longer matches the resource.
    ///
    /// Ignore the Range header and respond with the entire resource.
    #[error("If-Range validator mismatch, respond with the entire resource")]
    RangeMismatch,
}

/// Outcome of one conditional evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No precondition blocked the request; proceed with normal handling.
    Continue,
    /// Stop now and respond with this status and no body (304 or 412).
    ShortCircuit(StatusCode),
    /// Stale-state conflict; the caller chooses the final response.
    Reject(RejectReason),
}

/// Immutable snapshot of one request's conditional headers
///
/// Captured once per inbound request; only the five precondition header
/// values, the method, and Range-header presence are retained.
#[derive(Debug, Clone)]
pub struct ConditionalHeaders {
    pub method: Method,
    pub if_match: Option<String>,
    pub if_unmodified_since: Option<String>,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
    pub if_range: Option<String>,
    pub has_range: bool,
}

impl ConditionalHeaders {
    /// Extract the snapshot from a request's method and header map
    ///
    /// Header values that are empty or not visible ASCII are treated as
    /// absent.
    #[must_use]
    pub fn from_parts(method: &Method, headers: &HeaderMap) -> Self {
        let get = |name| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
        };

        Self {
            method: method.clone(),
            if_match: get(IF_MATCH),
            if_unmodified_since: get(IF_UNMODIFIED_SINCE),
            if_none_match: get(IF_NONE_MATCH),
            if_modified_since: get(IF_MODIFIED_SINCE),
            if_range: get(IF_RANGE),
            has_range: get(RANGE).is_some(),
        }
    }

    /// Whether the method is one of the safe read methods (GET/HEAD)
    #[must_use]
    pub fn is_read_method(&self) -> bool {
        self.method == Method::GET || self.method == Method::HEAD
    }
}

/// Evaluate a request's preconditions against a resource's validators
///
/// Runs the RFC 7232 §5 checks in their mandated order:
///
/// 1. Match family: `If-Match`, falling back to `If-Unmodified-Since` only
///    when `If-Match` is inapplicable. Failure rejects with
///    [`RejectReason::WasModified`].
/// 2. None-match family: `If-None-Match` (failure short-circuits with 304
///    for GET/HEAD, 412 otherwise), falling back to `If-Modified-Since` for
///    GET/HEAD only (failure short-circuits with 304).
/// 3. Range validity: for GET with both Range and `If-Range` present,
///    failure rejects with [`RejectReason::RangeMismatch`].
///
/// A header whose required capability is missing from `validators` is
/// skipped exactly as if it were absent.
#[must_use]
pub fn evaluate(headers: &ConditionalHeaders, validators: &Validators<'_>) -> Verdict {
    // Step 1: strong preconditions guard writes against lost updates
    if let (Some(etagger), Some(client_etag)) = (validators.etag(), headers.if_match.as_deref()) {
        if !predicates::if_match(etagger, client_etag) {
            debug!(method = %headers.method, "If-Match precondition failed");
            return Verdict::Reject(RejectReason::WasModified);
        }
    } else if let (Some(modifier), Some(date)) = (
        validators.last_modified(),
        headers.if_unmodified_since.as_deref(),
    ) {
        if !predicates::if_unmodified_since(modifier, date) {
            debug!(method = %headers.method, "If-Unmodified-Since precondition failed");
            return Verdict::Reject(RejectReason::WasModified);
        }
    }

    // Step 2: cache-validation preconditions
    if let (Some(etagger), Some(client_etag)) =
        (validators.etag(), headers.if_none_match.as_deref())
    {
        if !predicates::if_none_match(etagger, client_etag) {
            let status = if headers.is_read_method() {
                StatusCode::NOT_MODIFIED
            } else {
                StatusCode::PRECONDITION_FAILED
            };
            debug!(method = %headers.method, status = %status, "If-None-Match precondition failed");
            return Verdict::ShortCircuit(status);
        }
    } else if headers.is_read_method() {
        if let (Some(modifier), Some(date)) = (
            validators.last_modified(),
            headers.if_modified_since.as_deref(),
        ) {
            if !predicates::if_modified_since(modifier, date, Utc::now()) {
                debug!(method = %headers.method, "resource unchanged since If-Modified-Since");
                return Verdict::ShortCircuit(StatusCode::NOT_MODIFIED);
            }
        }
    }

    // Step 3: Range validity, only relevant once the request is known to proceed
    if headers.method == Method::GET && headers.has_range {
        if let (Some(etagger), Some(client_etag)) =
            (validators.etag(), headers.if_range.as_deref())
        {
            if !predicates::if_range(etagger, client_etag) {
                debug!("If-Range validator mismatch, Range must be discarded");
                return Verdict::Reject(RejectReason::RangeMismatch);
            }
        }
    }

    trace!(method = %headers.method, "no precondition blocked the request");
    Verdict::Continue
}

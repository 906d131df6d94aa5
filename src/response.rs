//! Verdict translation module
//!
//! Maps evaluation outcomes to ready-made hyper responses for the
//! short-circuit statuses, decoupled from how the caller builds its normal
//! responses.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::ETAG;
use hyper::{Response, StatusCode};
use tracing::error;

use crate::evaluate::{RejectReason, Verdict};

/// Build the empty-body response for a short-circuit verdict
///
/// 304 responses carry the current `ETag` when one is known so caches can
/// refresh their stored validator; 412 carries nothing.
pub fn short_circuit_response(status: StatusCode, etag: Option<&str>) -> Response<Full<Bytes>> {
    let mut builder = Response::builder().status(status);

    if status == StatusCode::NOT_MODIFIED {
        if let Some(etag) = etag {
            builder = builder.header(ETAG, etag);
        }
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        error!(status = %status, "failed to build short-circuit response: {e}");
        Response::new(Full::new(Bytes::new()))
    })
}

/// Apply a verdict, separating the three caller-visible outcomes
///
/// # Returns
/// * `Ok(None)` - proceed with normal request handling
/// * `Ok(Some(response))` - stop now and send this response with no body
/// * `Err(reason)` - the caller chooses the final response: for
///   [`RejectReason::WasModified`] a 412 unless the requested end-state is
///   verified to already hold; for [`RejectReason::RangeMismatch`] the full
///   resource, ignoring the Range header
pub fn apply_verdict(
    verdict: Verdict,
    etag: Option<&str>,
) -> Result<Option<Response<Full<Bytes>>>, RejectReason> {
    match verdict {
        Verdict::Continue => Ok(None),
        Verdict::ShortCircuit(status) => Ok(Some(short_circuit_response(status, etag))),
        Verdict::Reject(reason) => Err(reason),
    }
}

/// Build 412 Precondition Failed response
///
/// Convenience for callers taking the default answer to
/// [`RejectReason::WasModified`].
pub fn build_412_response() -> Response<Full<Bytes>> {
    short_circuit_response(StatusCode::PRECONDITION_FAILED, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_304_carries_etag() {
        let resp = short_circuit_response(StatusCode::NOT_MODIFIED, Some("\"abc\""));
        assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
        assert_eq!(resp.headers().get(ETAG).unwrap(), "\"abc\"");
    }

    #[test]
    fn test_412_has_no_etag() {
        let resp = short_circuit_response(StatusCode::PRECONDITION_FAILED, Some("\"abc\""));
        assert_eq!(resp.status(), StatusCode::PRECONDITION_FAILED);
        assert!(resp.headers().get(ETAG).is_none());
    }

    #[test]
    fn test_apply_verdict_continue() {
        assert!(matches!(apply_verdict(Verdict::Continue, None), Ok(None)));
    }

    #[test]
    fn test_apply_verdict_short_circuit() {
        let result = apply_verdict(
            Verdict::ShortCircuit(StatusCode::NOT_MODIFIED),
            Some("\"abc\""),
        );
        let resp = result.unwrap().unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    }

    #[test]
    fn test_apply_verdict_reject() {
        let result = apply_verdict(Verdict::Reject(RejectReason::RangeMismatch), None);
        assert_eq!(result.unwrap_err(), RejectReason::RangeMismatch);
    }

    #[test]
    fn test_build_412() {
        assert_eq!(
            build_412_response().status(),
            StatusCode::PRECONDITION_FAILED
        );
    }
}

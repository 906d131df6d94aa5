//! HTTP/1.1 conditional request evaluation (RFC 7232)
//!
//! Evaluates a request's precondition headers (`If-Match`,
//! `If-Unmodified-Since`, `If-None-Match`, `If-Modified-Since`, `If-Range`)
//! against a resource's current validators and decides whether the request
//! must be short-circuited (304/412), rejected as a stale-state conflict,
//! or allowed to proceed.
//!
//! Designed as a pre-handler check inside a hyper-based server:
//!
//! 1. Snapshot the request with [`ConditionalHeaders::from_parts`].
//! 2. Describe the resource's validator capabilities with [`Validators`].
//! 3. Call [`evaluate`] and apply the returned [`Verdict`].
//!
//! ```
//! use httpcond::{evaluate, ConditionalHeaders, Validators, Verdict};
//! use httpcond::resource::{EtagError, EtagProvider};
//! use hyper::{header, Method, StatusCode};
//!
//! struct Doc;
//!
//! impl EtagProvider for Doc {
//!     fn etag(&self) -> Result<String, EtagError> {
//!         Ok("\"abc\"".to_string())
//!     }
//! }
//!
//! let mut headers = hyper::header::HeaderMap::new();
//! headers.insert(header::IF_NONE_MATCH, "\"abc\"".parse().unwrap());
//!
//! let doc = Doc;
//! let snapshot = ConditionalHeaders::from_parts(&Method::GET, &headers);
//! let validators = Validators::none().with_etag(&doc);
//!
//! assert_eq!(
//!     evaluate(&snapshot, &validators),
//!     Verdict::ShortCircuit(StatusCode::NOT_MODIFIED)
//! );
//! ```
//!
//! Evaluation is stateless and synchronous; capability failures fail the
//! affected predicate only and never panic. Atomicity across the
//! read-validators-then-apply-verdict sequence is the caller's concern.

pub mod date;
pub mod etag;
pub mod evaluate;
pub mod predicates;
pub mod resource;
pub mod response;

// Re-export the types callers touch on every request
pub use evaluate::{evaluate, ConditionalHeaders, RejectReason, Verdict};
pub use resource::{EtagError, EtagProvider, LastModifiedProvider, Validators};
pub use response::apply_verdict;

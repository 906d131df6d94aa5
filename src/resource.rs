//! Resource validator capability model
//!
//! A resource may be able to produce an entity tag, a last-modified
//! timestamp, neither, or both. Capabilities are resolved once per
//! evaluation into a [`Validators`] wrapper; a missing capability makes the
//! corresponding precondition headers behave as if they were absent.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Error from entity-tag production
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EtagError {
    /// No entity currently exists at the addressed location.
    ///
    /// This is a signal, not a failure: wildcard (`*`) matching in
    /// `If-Match` and `If-None-Match` depends on it to express
    /// create-only/update-only semantics.
    #[error("no resource available at this location")]
    NoResource,

    /// Generic retrieval failure (e.g. backing store I/O error).
    ///
    /// Fails the affected predicate; never aborts the rest of the
    /// evaluation and is not retried at this layer.
    #[error("entity tag retrieval failed: {0}")]
    Retrieval(String),
}

/// A resource that can produce its current entity tag
pub trait EtagProvider {
    /// Current entity tag, compared as an opaque string.
    ///
    /// Returns [`EtagError::NoResource`] when no entity exists at this
    /// location, [`EtagError::Retrieval`] on failure to produce one.
    fn etag(&self) -> Result<String, EtagError>;
}

/// A resource that can produce its last-modification timestamp
///
/// Has no "absent" signal; must only be invoked when the resource exists.
pub trait LastModifiedProvider {
    /// Timestamp of the resource's most recent modification (UTC).
    fn last_modified(&self) -> DateTime<Utc>;
}

/// Per-evaluation snapshot of which validator capabilities a resource has
///
/// Built once by the caller before [`evaluate`](crate::evaluate::evaluate):
///
/// ```
/// use httpcond::{EtagError, EtagProvider, Validators};
///
/// struct Doc;
/// impl EtagProvider for Doc {
///     fn etag(&self) -> Result<String, EtagError> {
///         Ok("\"abc\"".to_string())
///     }
/// }
///
/// let doc = Doc;
/// let validators = Validators::none().with_etag(&doc);
/// assert!(validators.etag().is_some());
/// assert!(validators.last_modified().is_none());
/// ```
#[derive(Default, Clone, Copy)]
pub struct Validators<'a> {
    etag: Option<&'a dyn EtagProvider>,
    last_modified: Option<&'a dyn LastModifiedProvider>,
}

impl<'a> Validators<'a> {
    /// A resource with no validator capabilities
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Attach entity-tag production
    #[must_use]
    pub fn with_etag(mut self, provider: &'a dyn EtagProvider) -> Self {
        self.etag = Some(provider);
        self
    }

    /// Attach last-modified production
    #[must_use]
    pub fn with_last_modified(mut self, provider: &'a dyn LastModifiedProvider) -> Self {
        self.last_modified = Some(provider);
        self
    }

    /// Entity-tag capability, if present
    #[must_use]
    pub fn etag(&self) -> Option<&'a dyn EtagProvider> {
        self.etag
    }

    /// Last-modified capability, if present
    #[must_use]
    pub fn last_modified(&self) -> Option<&'a dyn LastModifiedProvider> {
        self.last_modified
    }
}

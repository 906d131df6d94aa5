//! Demo server showing conditional evaluation as a pre-handler check
//!
//! Serves a single in-memory document with `ETag` and `Last-Modified`
//! validators. Try it with:
//!
//! ```text
//! curl -i http://127.0.0.1:8080/
//! curl -i http://127.0.0.1:8080/ -H 'If-None-Match: <etag from above>'
//! curl -i -X PUT http://127.0.0.1:8080/ -H 'If-Match: "stale"'
//! ```

use chrono::{DateTime, TimeZone, Utc};
use http_body_util::Full;
use httpcond::date::format_http_date;
use httpcond::etag::generate_etag;
use httpcond::resource::{EtagError, EtagProvider, LastModifiedProvider};
use httpcond::response::build_412_response;
use httpcond::{apply_verdict, evaluate, ConditionalHeaders, RejectReason, Validators};
use hyper::body::{Bytes, Incoming};
use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE, ETAG, LAST_MODIFIED};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use tokio::net::TcpListener;

const BODY: &[u8] = b"hello from httpcond\n";

/// The one document this demo serves
struct Document {
    content: &'static [u8],
    modified: DateTime<Utc>,
}

impl Document {
    fn new() -> Self {
        Self {
            content: BODY,
            modified: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        }
    }
}

impl EtagProvider for Document {
    fn etag(&self) -> Result<String, EtagError> {
        Ok(generate_etag(self.content))
    }
}

impl LastModifiedProvider for Document {
    fn last_modified(&self) -> DateTime<Utc> {
        self.modified
    }
}

async fn handle(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    let doc = Document::new();
    let snapshot = ConditionalHeaders::from_parts(req.method(), req.headers());
    let validators = Validators::none().with_etag(&doc).with_last_modified(&doc);
    let etag = doc.etag().ok();

    match apply_verdict(evaluate(&snapshot, &validators), etag.as_deref()) {
        // A precondition short-circuited the request (304/412, no body)
        Ok(Some(resp)) => return Ok(resp),
        Ok(None) => {}
        // Default answer for a failed strong precondition
        Err(RejectReason::WasModified) => return Ok(build_412_response()),
        // Stale If-Range: fall through and serve the full resource
        Err(RejectReason::RangeMismatch) => {}
    }

    let resp = Response::builder()
        .status(200)
        .header(CONTENT_TYPE, "text/plain")
        .header(CONTENT_LENGTH, doc.content.len())
        .header(ETAG, etag.unwrap_or_default())
        .header(LAST_MODIFIED, format_http_date(doc.modified))
        .body(Full::new(Bytes::from_static(doc.content)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())));

    Ok(resp)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let listener = TcpListener::bind("127.0.0.1:8080").await?;
    println!("Listening on http://127.0.0.1:8080");

    loop {
        let (stream, _peer_addr) = listener.accept().await?;
        let io = TokioIo::new(stream);

        tokio::task::spawn(async move {
            if let Err(e) = http1::Builder::new()
                .serve_connection(io, service_fn(handle))
                .await
            {
                eprintln!("Failed to serve connection: {e:?}");
            }
        });
    }
}

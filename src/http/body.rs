//! Response body type
//!
//! Small responses are buffered in full, downloads are streamed. Both are boxed
//! into one body type so a handler can return either.

use futures::Stream;
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Empty, Full, StreamBody};
use hyper::body::{Bytes, Frame};
use std::io;

pub type ResponseBody = UnsyncBoxBody<Bytes, io::Error>;

/// Empty body (404, 204, 405)
pub fn empty() -> ResponseBody {
    Empty::<Bytes>::new()
        .map_err(|never| match never {})
        .boxed_unsync()
}

/// Fully buffered body
pub fn full(data: impl Into<Bytes>) -> ResponseBody {
    Full::new(data.into())
        .map_err(|never| match never {})
        .boxed_unsync()
}

/// Body fed frame by frame from a stream
pub fn streaming<S>(stream: S) -> ResponseBody
where
    S: Stream<Item = Result<Frame<Bytes>, io::Error>> + Send + 'static,
{
    StreamBody::new(stream).boxed_unsync()
}

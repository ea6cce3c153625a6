//! Injected HTTP capability.
//!
//! The hooks never reach for a global client. Whoever owns the network
//! (a CLI using `ureq`, a browser binding, a stub in tests) implements
//! `Transport` and hands it to the hook. Any status code, including 4xx and
//! 5xx, must come back as `Ok(HttpResponse)`; `Err` is reserved for "no
//! response at all".

use std::future::Future;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport {
    fn execute(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}

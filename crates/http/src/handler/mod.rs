//! The seam between a connection and the code that answers requests.
//!
//! Handling is synchronous: by the time a handler runs the whole request is
//! already buffered and decoded, so producing a [`Response`] never waits on
//! I/O.

use crate::protocol::{Request, Response};

#[cfg_attr(test, mockall::automock)]
pub trait Handler {
    fn call(&self, request: &Request) -> Response;
}

#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&Request) -> Response,
{
    fn call(&self, request: &Request) -> Response {
        (self.f)(request)
    }
}

pub fn make_handler<F>(f: F) -> HandlerFn<F>
where
    F: Fn(&Request) -> Response,
{
    HandlerFn { f }
}

//! Static request routing.
//!
//! A [`Router`] is an ordered list of routes, each an exact `(method, path)`
//! pair bound to a [`RouteHandler`], plus a fallback handler. Dispatch walks
//! the list and the first match wins; when nothing matches the fallback
//! answers. The table is frozen by [`RouterBuilder::build`] and only read
//! afterwards, so one router can be shared by every connection.
//!
//! Paths are matched against [`Request::route_path`], the path with its query
//! component stripped: `GET /?page=2` matches a `GET /` route.
//!
//! # Example
//!
//! ```
//! use http::StatusCode;
//! use wisp_http::codec::RequestDecoder;
//! use wisp_http::protocol::{Request, Response};
//! use wisp_web::router::{get, Router};
//!
//! fn ping(_request: &Request) -> Response {
//!     Response::text(StatusCode::OK, "pong")
//! }
//!
//! let router = Router::builder().route("/ping", get(ping)).build();
//! let request = RequestDecoder::new().decode_request(b"GET /ping HTTP/1.1\r\n\r\n").unwrap();
//! assert_eq!(router.dispatch(&request), Response::text(StatusCode::OK, "pong"));
//! ```

use std::fmt;

use http::Method;
use tracing::debug;
use wisp_http::handler::Handler;
use wisp_http::protocol::{Request, Response};

use crate::routes::not_found;

/// Produces a response for a request that matched a route.
pub trait RouteHandler: Send + Sync {
    fn invoke(&self, request: &Request) -> Response;
}

impl<F> RouteHandler for F
where
    F: Fn(&Request) -> Response + Send + Sync,
{
    fn invoke(&self, request: &Request) -> Response {
        self(request)
    }
}

/// An exact `(method, path)` pair bound to a handler.
pub struct Route {
    method: Method,
    path: String,
    handler: Box<dyn RouteHandler>,
}

impl Route {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the request's method and query-stripped path both equal this route's.
    pub fn matches(&self, request: &Request) -> bool {
        request.method() == Some(self.method.as_str()) && request.route_path() == Some(self.path.as_str())
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").field("method", &self.method).field("path", &self.path).finish_non_exhaustive()
    }
}

/// Ordered route table with a guaranteed fallback.
pub struct Router {
    routes: Vec<Route>,
    fallback: Box<dyn RouteHandler>,
}

impl Router {
    /// Creates a new router builder; the fallback defaults to [`not_found`].
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Finds the route answering `request`, `None` when the fallback applies.
    pub fn at(&self, request: &Request) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(request))
    }

    /// Produces the response for `request`.
    pub fn dispatch(&self, request: &Request) -> Response {
        match self.at(request) {
            Some(route) => {
                debug!(method = %route.method, path = %route.path, "matched route");
                route.handler.invoke(request)
            }
            None => {
                debug!(method = request.method(), path = request.path(), "no route matched");
                self.fallback.invoke(request)
            }
        }
    }
}

impl Handler for Router {
    fn call(&self, request: &Request) -> Response {
        self.dispatch(request)
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router").field("routes", &self.routes).finish_non_exhaustive()
    }
}

pub struct RouterBuilder {
    routes: Vec<Route>,
    fallback: Option<Box<dyn RouteHandler>>,
}

impl RouterBuilder {
    fn new() -> Self {
        Self { routes: Vec::new(), fallback: None }
    }

    /// Appends a route; routes added earlier take precedence.
    pub fn route(mut self, path: impl Into<String>, item: MethodHandler) -> Self {
        self.routes.push(Route { method: item.method, path: path.into(), handler: item.handler });
        self
    }

    /// Replaces the handler used when no route matches.
    pub fn default_handler(mut self, handler: impl RouteHandler + 'static) -> Self {
        self.fallback = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> Router {
        let fallback: Box<dyn RouteHandler> = match self.fallback {
            Some(handler) => handler,
            None => Box::new(not_found),
        };
        Router { routes: self.routes, fallback }
    }
}

impl fmt::Debug for RouterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterBuilder").field("routes", &self.routes).finish_non_exhaustive()
    }
}

/// A handler waiting for the path it will be routed at.
pub struct MethodHandler {
    method: Method,
    handler: Box<dyn RouteHandler>,
}

impl fmt::Debug for MethodHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodHandler").field("method", &self.method).finish_non_exhaustive()
    }
}

/// Binds a handler to an arbitrary method, including extension methods.
pub fn on<H: RouteHandler + 'static>(method: Method, handler: H) -> MethodHandler {
    MethodHandler { method, handler: Box::new(handler) }
}

macro_rules! method_router {
    ($method:ident, $method_const:ident) => {
        pub fn $method<H: RouteHandler + 'static>(handler: H) -> MethodHandler {
            on(Method::$method_const, handler)
        }
    };
}

method_router!(get, GET);
method_router!(post, POST);
method_router!(put, PUT);
method_router!(delete, DELETE);
method_router!(head, HEAD);
method_router!(options, OPTIONS);
method_router!(patch, PATCH);

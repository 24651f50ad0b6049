//! Timing middleware annotating responses with the time spent handling them.
//!
//! The elapsed wall-clock time between request entry and response
//! availability is written to the `X-ErrorHandleTime` header as a decimal
//! number of seconds. Successful responses, mapped domain errors,
//! framework-generated failures, and errors raised by inner middleware are
//! all annotated.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::InternalError;
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, error};

/// Response header carrying the elapsed handling time in seconds.
pub const ELAPSED_TIME_HEADER: &str = "x-errorhandletime";

/// Timing middleware adding an `X-ErrorHandleTime` header to every response.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registry::Timing;
///
/// let app = App::new().wrap(Timing);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Timing;

impl<S, B> Transform<S, ServiceRequest> for Timing
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TimingMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TimingMiddleware { service }))
    }
}

/// Service wrapper produced by [`Timing`].
///
/// Applications should not use this type directly.
pub struct TimingMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TimingMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let fut = self.service.call(req);
        Box::pin(async move {
            let outcome = fut.await;
            let elapsed = started.elapsed().as_secs_f64();
            let header = match HeaderValue::from_str(&elapsed.to_string()) {
                Ok(value) => Some(value),
                Err(error) => {
                    error!(%error, elapsed, "failed to encode elapsed time header");
                    None
                }
            };
            match outcome {
                Ok(mut res) => {
                    if let Some(value) = header {
                        res.headers_mut()
                            .insert(HeaderName::from_static(ELAPSED_TIME_HEADER), value);
                    }
                    debug!(
                        %method,
                        %path,
                        status = res.status().as_u16(),
                        elapsed_secs = elapsed,
                        "request handled"
                    );
                    Ok(res)
                }
                Err(err) => {
                    // Render the escaping error now so its response carries the header.
                    let mut response = err.error_response();
                    if let Some(value) = header {
                        response
                            .headers_mut()
                            .insert(HeaderName::from_static(ELAPSED_TIME_HEADER), value);
                    }
                    debug!(
                        %method,
                        %path,
                        status = response.status().as_u16(),
                        elapsed_secs = elapsed,
                        "request failed"
                    );
                    Err(InternalError::from_response(err, response).into())
                }
            }
        })
    }
}

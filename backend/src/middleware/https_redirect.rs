//! HTTPS enforcement middleware.
//!
//! Answers any plaintext request with a `308 Permanent Redirect` to the
//! `https` equivalent URL before it can reach route dispatch. The scheme is
//! taken from [`actix_web::dev::ConnectionInfo`], which honours `Forwarded`
//! and `X-Forwarded-Proto` set by a TLS-terminating proxy.

use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{Error, HttpResponse};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::debug;

/// Middleware redirecting plaintext requests to their HTTPS equivalent.
#[derive(Clone)]
pub struct HttpsRedirect;

impl<S, B> Transform<S, ServiceRequest> for HttpsRedirect
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = HttpsRedirectMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(HttpsRedirectMiddleware { service }))
    }
}

/// Service wrapper produced by [`HttpsRedirect`].
pub struct HttpsRedirectMiddleware<S> {
    service: S,
}

fn https_location(req: &ServiceRequest) -> String {
    let host = req.connection_info().host().to_owned();
    format!("https://{host}{}", req.uri())
}

impl<S, B> Service<ServiceRequest> for HttpsRedirectMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if req.connection_info().scheme() == "https" {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        let location = https_location(&req);
        debug!(%location, "redirecting plaintext request");
        let (request, _) = req.into_parts();
        let response = HttpResponse::PermanentRedirect()
            .insert_header((header::LOCATION, location))
            .finish()
            .map_into_right_body();
        Box::pin(ready(Ok(ServiceResponse::new(request, response))))
    }
}

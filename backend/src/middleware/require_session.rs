//! Authorization guard for protected scopes.
//!
//! Rejects any request whose cookie session carries no authenticated user id
//! with the domain `401` payload, before the request reaches route handlers.
//! Must be mounted inside the session middleware so the cookie has already
//! been decoded.

use std::task::{Context, Poll};

use actix_session::SessionExt;
use actix_web::Error as ActixError;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ResponseError;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::debug;

use crate::domain::Error;
use crate::inbound::http::session::USER_ID_KEY;

/// Middleware rejecting unauthenticated requests ahead of handler dispatch.
#[derive(Clone)]
pub struct RequireSession;

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware { service }))
    }
}

/// Service wrapper produced by [`RequireSession`].
pub struct RequireSessionMiddleware<S> {
    service: S,
}

fn has_authenticated_user(req: &ServiceRequest) -> bool {
    matches!(req.get_session().get::<String>(USER_ID_KEY), Ok(Some(_)))
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if has_authenticated_user(&req) {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        debug!(path = %req.path(), "rejecting unauthenticated request");
        let (request, _) = req.into_parts();
        let response = Error::unauthorized("login required")
            .error_response()
            .map_into_right_body();
        Box::pin(ready(Ok(ServiceResponse::new(request, response))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::test_session_middleware;
    use actix_session::Session;
    use actix_web::{App, HttpResponse, http::StatusCode, test, web};
    use serde_json::Value;

    fn guarded_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = ActixError,
            InitError = (),
        >,
    > {
        App::new().wrap(test_session_middleware()).service(
            web::scope("")
                .route(
                    "/login",
                    web::post().to(|session: Session| async move {
                        session.insert(USER_ID_KEY, "tester")?;
                        Ok::<_, ActixError>(HttpResponse::Ok().finish())
                    }),
                )
                .service(
                    web::scope("/protected").wrap(RequireSession).route(
                        "/resource",
                        web::get().to(|| async { HttpResponse::Ok().finish() }),
                    ),
                ),
        )
    }

    #[actix_web::test]
    async fn rejects_request_without_session() {
        let app = test::init_service(guarded_test_app()).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/protected/resource")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("unauthorized")
        );
    }

    #[actix_web::test]
    async fn passes_request_with_session() {
        let app = test::init_service(guarded_test_app()).await;
        let login = test::call_service(
            &app,
            test::TestRequest::post().uri("/login").to_request(),
        )
        .await;
        let cookie = login
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie");

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/protected/resource")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}

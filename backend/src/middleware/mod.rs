//! Request pipeline middleware.
//!
//! Order matters: [`Trace`] wraps everything, [`HttpsRedirect`] runs before
//! any route dispatch, and [`RequireSession`] guards the protected scope
//! after the session middleware has decoded the cookie.

pub mod https_redirect;
pub mod require_session;
pub mod trace;

pub use https_redirect::HttpsRedirect;
pub use require_session::RequireSession;
pub use trace::Trace;

// responses/redirect.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use crate::session::SessionHandle;
use astra::{Body, Response, ResponseBuilder};

pub const SESSION_COOKIE: &str = "sid";

/// 303 so the browser follows up with a GET and a reload never resubmits.
pub fn see_other(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|e| ServerError::Internal(format!("building redirect: {e}")))
}

/// Attaches `Set-Cookie` when the session was minted by this request.
pub fn with_session_cookie(mut resp: Response, session: &SessionHandle) -> ResultResp {
    if !session.is_new {
        return Ok(resp);
    }

    let cookie = format!(
        "{SESSION_COOKIE}={}; HttpOnly; SameSite=Lax; Path=/",
        session.token
    );
    let value = cookie
        .parse()
        .map_err(|e| ServerError::Internal(format!("invalid cookie header: {e}")))?;
    resp.headers_mut().insert("Set-Cookie", value);
    Ok(resp)
}

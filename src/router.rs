use crate::analysis::{analyze_listing, verify_listing};
use crate::domain::{Action, ListingQuery};
use crate::errors::ServerError;
use crate::responses::redirect::SESSION_COOKIE;
use crate::responses::{css_response, html_response, see_other, with_session_cookie, ResultResp};
use crate::session::token::generate_report_id;
use crate::session::{now_unix, SessionHandle};
use crate::state::AppState;
use crate::templates::documents::{DocumentContext, DocumentKind};
use crate::templates::{self, pages};
use astra::Request;
use chrono::Local;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, info};

const MAX_FORM_BYTES: u64 = 16 * 1024;

enum Route {
    Home,
    PreScan,
    Analysis,
    Premium,
    Dashboard,
    Reset,
    Document(DocumentKind),
}

fn route(method: &str, path: &str) -> Option<Route> {
    match (method, path) {
        ("GET", "/") => Some(Route::Home),
        ("POST", "/prescan") => Some(Route::PreScan),
        ("POST", "/analysis") => Some(Route::Analysis),
        ("POST", "/premium") => Some(Route::Premium),
        ("POST", "/dashboard") => Some(Route::Dashboard),
        ("POST", "/reset") => Some(Route::Reset),
        ("GET", p) => p
            .strip_prefix("/documents/")
            .and_then(DocumentKind::from_slug)
            .map(Route::Document),
        _ => None,
    }
}

pub fn handle(mut req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/static/main.css") => return css_response(templates::MAIN_CSS),
        ("GET", "/legal") => return html_response(pages::legal_page()),
        _ => {}
    }

    let route = route(&method, &path).ok_or(ServerError::NotFound)?;
    let session = app
        .sessions
        .resolve(session_token(&req).as_deref(), now_unix());
    let resp = match route {
        Route::Home => {
            let vm = app.sessions.view_model(&session.token);
            html_response(pages::page_for(&vm))
        }
        Route::PreScan => {
            let form = read_form(&mut req)?;
            prescan(app, &session, &form)
        }
        Route::Analysis => analysis(app, &session),
        Route::Premium => apply(app, &session, Action::ActivatePremium),
        Route::Dashboard => apply(app, &session, Action::ShowDashboard),
        Route::Reset => apply(app, &session, Action::Reset),
        Route::Document(kind) => document(app, &session, kind),
    }?;

    // a minted token only becomes a session once a handler stored state for it
    if session.is_new {
        if !app.sessions.contains(&session.token) {
            return Ok(resp);
        }
        debug!(active = app.sessions.len(), "New session");
    }
    with_session_cookie(resp, &session)
}

fn apply(app: &AppState, session: &SessionHandle, action: Action) -> ResultResp {
    app.sessions.dispatch(&session.token, action, now_unix());
    see_other("/")
}

fn prescan(app: &AppState, session: &SessionHandle, form: &HashMap<String, String>) -> ResultResp {
    let field = |name: &str| form.get(name).map(String::as_str).unwrap_or("");

    let query = match ListingQuery::new(
        field("headline"),
        form.get("address").map(String::as_str),
        field("location"),
        field("broker"),
    ) {
        Ok(query) => query,
        Err(e) => return apply(app, session, Action::InputRejected(e.to_string())),
    };

    info!(
        model = %app.config.gemini.model,
        headline = %query.headline,
        broker = %query.broker_name,
        "Starting pre-scan"
    );

    // no session lock is held while the model works
    let action = match verify_listing(app.generator.as_ref(), &query) {
        Ok(prescan) => Action::PreScanCompleted { query, prescan },
        Err(e) => Action::PreScanFailed {
            query,
            message: e.user_message().to_string(),
        },
    };
    apply(app, session, action)
}

fn analysis(app: &AppState, session: &SessionHandle) -> ResultResp {
    let vm = app.sessions.view_model(&session.token);
    let (Some(query), Some(prescan)) = (&vm.query, &vm.prescan) else {
        debug!("analysis requested without a verified listing");
        return see_other("/");
    };

    info!(
        model = %app.config.gemini.model,
        headline = %prescan.headline,
        "Starting deep analysis"
    );

    let action = match analyze_listing(app.generator.as_ref(), query, prescan) {
        Ok(result) => Action::AnalysisCompleted(result),
        Err(e) => Action::AnalysisFailed(e.user_message().to_string()),
    };
    apply(app, session, action)
}

fn document(app: &AppState, session: &SessionHandle, kind: DocumentKind) -> ResultResp {
    let vm = app.sessions.view_model(&session.token);
    let analysis = match &vm.analysis {
        Some(analysis) if vm.premium_active() => analysis,
        _ => return see_other("/"),
    };

    let ctx = DocumentContext {
        analysis,
        report_id: generate_report_id(&mut rand::thread_rng()),
        issued_on: Local::now().date_naive(),
    };

    info!(document = kind.slug(), report_id = %ctx.report_id, "Rendering document");
    html_response(kind.renderer().render(&ctx))
}

/// The `sid` value from the Cookie header, if any.
fn session_token(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Reads an `application/x-www-form-urlencoded` body of at most 16 KiB.
fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    if let Some(content_type) = req.headers().get("Content-Type") {
        let mime: mime::Mime = content_type
            .to_str()
            .ok()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| ServerError::BadRequest("unreadable Content-Type".into()))?;

        if mime.essence_str() != mime::APPLICATION_WWW_FORM_URLENCODED.essence_str() {
            return Err(ServerError::BadRequest(format!(
                "expected form data, got {}",
                mime.essence_str()
            )));
        }
    }

    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("reading body: {e}")))?;

    if buf.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::PayloadTooLarge);
    }

    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}

// src/tests/router_tests/document_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{
    body_string, location, prescan_json, request, sample_analysis_json, session_cookie, test_app,
};
use http::Method;

const FORM: &str = "headline=Altbau&location=80331+M%C3%BCnchen&broker=Muster";

/// Runs pre-scan, analysis and premium activation for a new session.
fn premium_session(app: &AppState) -> String {
    let resp = handle(request(Method::POST, "/prescan", None, Some(FORM)), app).unwrap();
    let sid = session_cookie(&resp).unwrap();
    for uri in ["/analysis", "/premium"] {
        handle(request(Method::POST, uri, Some(&sid), None), app).unwrap();
    }
    sid
}

#[test]
fn unknown_slug_is_not_found() {
    let app = test_app(vec![Ok(prescan_json()), Ok(sample_analysis_json())]);
    let sid = premium_session(&app);

    for uri in ["/documents/invoice", "/documents/", "/documents/analysis/extra"] {
        let result = handle(request(Method::GET, uri, Some(&sid), None), &app);
        assert!(matches!(result, Err(ServerError::NotFound)), "{uri}");
    }
}

#[test]
fn unknown_slug_is_rejected_before_a_session_starts() {
    let app = test_app(vec![]);

    let result = handle(request(Method::GET, "/documents/invoice", None, None), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
    assert_eq!(app.sessions.len(), 0);
}

#[test]
fn documents_without_analysis_redirect_home() {
    let app = test_app(vec![]);

    let resp = handle(request(Method::GET, "/documents/mail", None, None), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");
}

#[test]
fn every_document_renders_after_premium() {
    let app = test_app(vec![Ok(prescan_json()), Ok(sample_analysis_json())]);
    let sid = premium_session(&app);

    for (slug, marker) in [
        ("analysis", "Abschließendes Experten-Fazit"),
        ("documents", "Checkliste: Objektunterlagen"),
        ("site-visit", "Checkliste: Ortsbesichtigung"),
        ("mail", "Mailvorlagen: Maklerkommunikation"),
    ] {
        let uri = format!("/documents/{slug}");
        let resp = handle(request(Method::GET, &uri, Some(&sid), None), &app).unwrap();
        assert_eq!(resp.status(), 200, "{slug}");

        let body = body_string(resp);
        assert!(body.contains(marker), "{slug}");
        assert!(body.contains("window.print()"), "{slug}");
    }
}

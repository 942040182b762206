// src/tests/router_tests/home_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, location, request, session_cookie, test_app};
use astra::{Body, Request};
use http::Method;
use scraper::{Html, Selector};

#[test]
fn home_renders_form_without_starting_a_session() {
    let app = test_app(vec![]);

    let resp = handle(request(Method::GET, "/", None, None), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().get("Set-Cookie").is_none());
    assert_eq!(app.sessions.len(), 0);

    let doc = Html::parse_document(&body_string(resp));
    let form = Selector::parse("form#listing-form[action=\"/prescan\"]").unwrap();
    assert_eq!(doc.select(&form).count(), 1);

    let inputs = Selector::parse("form#listing-form input").unwrap();
    let names: Vec<&str> = doc
        .select(&inputs)
        .filter_map(|el| el.value().attr("name"))
        .collect();
    assert_eq!(names, vec!["headline", "address", "location", "broker"]);

    let features = Selector::parse(".feature-grid .feature").unwrap();
    assert_eq!(doc.select(&features).count(), 8);
}

#[test]
fn first_form_post_starts_a_session() {
    let app = test_app(vec![]);

    let resp = handle(request(Method::POST, "/reset", None, None), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert!(session_cookie(&resp).is_some());
    assert_eq!(app.sessions.len(), 1);

    let set_cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
}

#[test]
fn cookieless_reads_store_no_session() {
    let app = test_app(vec![]);

    for uri in ["/", "/", "/documents/mail", "/documents/invoice", "/legal", "/nowhere"] {
        let _ = handle(request(Method::GET, uri, None, None), &app);
    }
    assert_eq!(app.sessions.len(), 0);
}

#[test]
fn known_session_gets_no_new_cookie() {
    let app = test_app(vec![]);
    let first = handle(request(Method::POST, "/reset", None, None), &app).unwrap();
    let sid = session_cookie(&first).unwrap();

    let again = handle(request(Method::GET, "/", Some(&sid), None), &app).unwrap();
    assert!(again.headers().get("Set-Cookie").is_none());
}

#[test]
fn stylesheet_and_legal_page_are_served() {
    let app = test_app(vec![]);

    let css = handle(request(Method::GET, "/static/main.css", None, None), &app).unwrap();
    assert_eq!(css.status(), 200);
    let content_type = css.headers().get("Content-Type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/css"));

    let legal = handle(request(Method::GET, "/legal", None, None), &app).unwrap();
    assert_eq!(legal.status(), 200);
    let body = body_string(legal);
    assert!(body.contains("Impressum"));
    assert!(body.contains("Datenschutzerklärung"));
    assert!(body.contains("HRB 92147"));
}

#[test]
fn unknown_paths_are_not_found() {
    let app = test_app(vec![]);

    for (method, uri) in [
        (Method::GET, "/admin"),
        (Method::GET, "/prescan"),
        (Method::POST, "/"),
        (Method::DELETE, "/reset"),
    ] {
        let result = handle(request(method, uri, None, None), &app);
        assert!(matches!(result, Err(ServerError::NotFound)), "{uri}");
    }
}

#[test]
fn blank_broker_shows_validation_message() {
    let app = test_app(vec![]);
    let form = "headline=Altbau&address=&location=80331+M%C3%BCnchen&broker=+";

    let resp = handle(request(Method::POST, "/prescan", None, Some(form)), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");
    let sid = session_cookie(&resp).unwrap();

    let page = handle(request(Method::GET, "/", Some(&sid), None), &app).unwrap();
    let body = body_string(page);
    assert!(body.contains("Bitte füllen Sie mindestens Titel, Ort und Maklername aus."));
    assert!(body.contains("listing-form"));
}

#[test]
fn oversized_form_is_rejected() {
    let app = test_app(vec![]);
    let form = format!("headline={}", "a".repeat(17 * 1024));

    let result = handle(request(Method::POST, "/prescan", None, Some(&form)), &app);
    assert!(matches!(result, Err(ServerError::PayloadTooLarge)));
}

#[test]
fn non_form_body_is_a_bad_request() {
    let app = test_app(vec![]);

    let mut req = Request::new(Body::from(r#"{"headline":"x"}"#.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = "/prescan".parse().unwrap();
    req.headers_mut()
        .insert("Content-Type", "application/json".parse().unwrap());

    assert!(matches!(handle(req, &app), Err(ServerError::BadRequest(_))));
}

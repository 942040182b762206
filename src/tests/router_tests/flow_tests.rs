// src/tests/router_tests/flow_tests.rs

use crate::analysis::{ANALYSIS_INTERRUPTED_MESSAGE, VERIFICATION_FAILED_MESSAGE};
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{
    body_string, location, prescan_json, request, sample_analysis_json, session_cookie, test_app,
};
use http::Method;
use scraper::{Html, Selector};

const FORM: &str =
    "headline=Altbau+mit+Balkon&address=&location=80331+M%C3%BCnchen&broker=Muster+Immobilien";

/// Submits the listing form and returns the new session id.
fn submit_listing(app: &AppState) -> String {
    let resp = handle(request(Method::POST, "/prescan", None, Some(FORM)), app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");
    session_cookie(&resp).expect("first response sets the session cookie")
}

fn post(app: &AppState, uri: &str, sid: &str) {
    let resp = handle(request(Method::POST, uri, Some(sid), None), app).unwrap();
    assert_eq!(resp.status(), 303, "{uri}");
    assert_eq!(location(&resp), "/", "{uri}");
}

fn page(app: &AppState, sid: &str) -> Html {
    let resp = handle(request(Method::GET, "/", Some(sid), None), app).unwrap();
    assert_eq!(resp.status(), 200);
    Html::parse_document(&body_string(resp))
}

fn count(doc: &Html, selector: &str) -> usize {
    doc.select(&Selector::parse(selector).unwrap()).count()
}

fn text(doc: &Html) -> String {
    doc.root_element().text().collect()
}

#[test]
fn full_happy_path() {
    let app = test_app(vec![Ok(prescan_json()), Ok(sample_analysis_json())]);

    // pre-scan lands on the verification card
    let sid = submit_listing(&app);
    let doc = page(&app, &sid);
    let body = text(&doc);
    assert!(body.contains("Objekt gefunden"));
    assert!(body.contains("Altbau mit Balkon"));
    assert!(body.contains("Muster Immobilien"));
    assert!(body.contains("Auf Anfrage"));
    assert_eq!(count(&doc, "form[action=\"/analysis\"]"), 1);

    // confirmed: dashboard with five bars
    post(&app, "/analysis", &sid);
    let doc = page(&app, &sid);
    let body = text(&doc);
    assert_eq!(count(&doc, ".scores .score"), 5);
    assert_eq!(count(&doc, ".narrative"), 6);
    assert!(body.contains("B-Rating: Solider Deal"));
    assert_eq!(count(&doc, ".meta .living-space"), 1);
    assert!(body.contains("78 m²"));
    assert!(body.contains("Gute Lage, fairer Preis."));
    assert!(body.contains("Premium freischalten"));
    assert_eq!(count(&doc, ".rich-text strong"), 1);
    assert_eq!(count(&doc, ".notice-info"), 0);

    // documents stay locked until premium is activated
    let locked = handle(
        request(Method::GET, "/documents/analysis", Some(&sid), None),
        &app,
    )
    .unwrap();
    assert_eq!(locked.status(), 303);

    post(&app, "/premium", &sid);
    let doc = page(&app, &sid);
    let links = Selector::parse("a.document-link").unwrap();
    let hrefs: Vec<&str> = doc
        .select(&links)
        .filter(|a| a.value().attr("target") == Some("_blank"))
        .filter_map(|a| a.value().attr("href"))
        .collect();
    assert_eq!(
        hrefs,
        vec![
            "/documents/analysis",
            "/documents/documents",
            "/documents/site-visit",
            "/documents/mail"
        ]
    );

    let report = handle(
        request(Method::GET, "/documents/analysis", Some(&sid), None),
        &app,
    )
    .unwrap();
    assert_eq!(report.status(), 200);
    let doc = Html::parse_document(&body_string(report));
    assert_eq!(count(&doc, "article.page"), 7);
    assert!(text(&doc).contains("Berichts-ID: PMC-"));

    // back to the dashboard, then start over with the form prefilled
    post(&app, "/dashboard", &sid);
    assert_eq!(count(&page(&app, &sid), ".score-card"), 1);

    post(&app, "/reset", &sid);
    let doc = page(&app, &sid);
    assert_eq!(count(&doc, ".score-card"), 0);
    assert_eq!(count(&doc, "input[name=\"headline\"][value=\"Altbau mit Balkon\"]"), 1);
    assert_eq!(count(&doc, "input[name=\"location\"][value=\"80331 München\"]"), 1);
}

#[test]
fn failed_prescan_returns_home_with_message() {
    let app = test_app(vec![Ok("Leider nichts gefunden.".to_string())]);

    let sid = submit_listing(&app);
    let doc = page(&app, &sid);
    assert!(text(&doc).contains(VERIFICATION_FAILED_MESSAGE));
    assert_eq!(count(&doc, "form#listing-form"), 1);
    assert_eq!(count(&doc, "input[name=\"broker\"][value=\"Muster Immobilien\"]"), 1);
}

#[test]
fn failed_analysis_keeps_verification_without_result() {
    let app = test_app(vec![Ok(prescan_json()), Err("timeout".to_string())]);

    let sid = submit_listing(&app);
    post(&app, "/analysis", &sid);

    let doc = page(&app, &sid);
    let body = text(&doc);
    assert!(body.contains(ANALYSIS_INTERRUPTED_MESSAGE));
    assert!(body.contains("Objekt gefunden"));
    assert_eq!(count(&doc, ".score-card"), 0);

    // premium cannot be reached without a result
    post(&app, "/premium", &sid);
    assert!(text(&page(&app, &sid)).contains("Objekt gefunden"));
}

#[test]
fn truncated_analysis_shows_repair_notice() {
    let full = sample_analysis_json();
    let cut_at = full.rfind("\"totalScoreExplanation\"").unwrap();
    let truncated = format!("{}\"totalScoreExplanation\":\"Solide", &full[..cut_at]);

    let app = test_app(vec![Ok(prescan_json()), Ok(truncated)]);
    let sid = submit_listing(&app);
    post(&app, "/analysis", &sid);

    let doc = page(&app, &sid);
    assert_eq!(count(&doc, ".notice-info"), 1);
    assert!(text(&doc).contains("automatisch ergänzt"));
    assert_eq!(count(&doc, ".scores .score"), 5);
}

#[test]
fn analysis_without_verified_listing_is_ignored() {
    let app = test_app(vec![]);
    let resp = handle(request(Method::POST, "/reset", None, None), &app).unwrap();
    let sid = session_cookie(&resp).unwrap();

    post(&app, "/analysis", &sid);
    post(&app, "/dashboard", &sid);

    let doc = page(&app, &sid);
    assert_eq!(count(&doc, "form#listing-form"), 1);
    assert!(!text(&doc).contains(ANALYSIS_INTERRUPTED_MESSAGE));
}

#[test]
fn sessions_do_not_leak_into_each_other() {
    let app = test_app(vec![Ok(prescan_json())]);

    let verified = submit_listing(&app);
    let other = session_cookie(&handle(request(Method::POST, "/reset", None, None), &app).unwrap())
        .unwrap();

    assert_ne!(verified, other);
    assert!(text(&page(&app, &verified)).contains("Objekt gefunden"));
    assert!(!text(&page(&app, &other)).contains("Objekt gefunden"));
}

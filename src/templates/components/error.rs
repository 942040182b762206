use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;
use tracing::error;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Diese Seite existiert nicht."),

        ServerError::BadRequest(msg) => render_error(400, &msg),

        ServerError::PayloadTooLarge => {
            render_error(413, "Die übermittelten Daten sind zu umfangreich.")
        }

        ServerError::Internal(msg) => {
            error!(%msg, "internal server error");
            render_error(500, "Ein interner Fehler ist aufgetreten.")
        }
    }
}

fn render_error(status: u16, message: &str) -> Response {
    let page = desktop_layout(
        &format!("Fehler {status}"),
        false,
        html! {
            section class="card narrow" {
                h1 { "Fehler " (status) }
                p { (message) }
                p { a href="/" { "← Zur Startseite" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

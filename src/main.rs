use crate::config::AppConfig;
use crate::gemini::GeminiClient;
use crate::router::handle;
use crate::session::SessionStore;
use crate::state::AppState;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod analysis;
mod config;
mod domain;
mod errors;
mod gemini;
mod responses;
mod router;
mod session;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("expose_check=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Load configuration (.env is optional)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the Gemini client
    let generator = match GeminiClient::new(&config.gemini) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Could not build the Gemini client");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr = config.addr;
    let workers = config.max_workers;
    info!(%addr, workers, model = %generator.model(), "Starting server at http://{addr}");

    let app = AppState {
        sessions: SessionStore::new(config.session_ttl_secs),
        generator: Box::new(generator),
        config,
    };

    let server = Server::bind(&addr).max_workers(workers);

    // 4️⃣ Serve requests, sharing the app state with every worker
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "Server ended with error");
    }

    info!("Server shut down cleanly.");
}

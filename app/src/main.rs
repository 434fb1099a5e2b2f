use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toplist_app::{config::Config, render::render, submit::submit};
use toplist_core::{endpoint, ListClient, ListResult, ListSession, Query};

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let mut args = std::env::args().skip(1);
    let text = args.next().unwrap_or_default();
    let email = args.next().unwrap_or_default();

    let query = Query::new(&text, &email);
    if query.is_empty() {
        eprintln!("usage: toplist <category> [email]");
        std::process::exit(2);
    }

    let config = Config::load();
    let base = endpoint::resolve(config.api_base.as_deref(), &config.hostname);
    debug!(%base, "resolved backend endpoint");

    let client = ListClient::new(&base);
    let http = reqwest::Client::new();

    let mut session = ListSession::new();
    let token = session.begin();
    println!("{}", render(session.result()));

    if let Some(outcome) = submit(&http, &client, &query, config.timeout).await {
        session.commit(token, outcome);
    }
    println!("{}", render(session.result()));

    if matches!(session.result(), ListResult::Failure { .. }) {
        std::process::exit(1);
    }
}

use std::sync::Arc;

use clap::{App, Arg};

mod config;
mod controllers;
mod errors;
mod filters;
mod http;
mod routes;

/// Default HTTP listen port, used when neither --port nor PORT is set
const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() {
    env_logger::builder().format_timestamp_micros().init();

    let matches = App::new("courier-server")
        .about("JSON-to-SMTP email relay server")
        .arg(
            Arg::with_name("port")
                .short("p")
                .long("port")
                .takes_value(true)
                .help("Port to listen on (overrides the PORT env var)"),
        )
        .get_matches();

    let smtp = courier::config::load_config().expect("Invalid SMTP configuration in env");

    let port = matches
        .value_of("port")
        .map(|p| p.parse().expect("Invalid port argument"))
        .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(DEFAULT_PORT);

    log::info!("Starting server...");

    http::run(config::HttpArg {
        port,
        smtp: Arc::new(smtp),
    })
    .await;
}

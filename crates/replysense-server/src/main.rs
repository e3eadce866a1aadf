use std::path::PathBuf;

use actix_web::{App, HttpServer, web};
use clap::Parser;
use replysense_server::handlers;
use replysense_server::state::AppState;

/// Reply sentiment classification service.
#[derive(Debug, Parser)]
#[command(name = "replysense", version)]
struct Args {
    /// Directory holding `model.onnx` and `tokenizer.json`.
    #[arg(long, env = "REPLYSENSE_MODEL_DIR", default_value = "./distilbert_model")]
    model_dir: PathBuf,

    /// Address to bind the HTTP server to.
    #[arg(long, env = "REPLYSENSE_BIND", default_value = "127.0.0.1:8080")]
    bind: String,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt::init();
    tracing::info!("replysense v{}", env!("CARGO_PKG_VERSION"));
    let state = web::Data::new(AppState::initialize(&args.model_dir));

    tracing::info!(bind = %args.bind, model = state.kind().as_str(), "starting http server");
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(handlers::predict)
            .service(handlers::health)
    })
    .bind(args.bind.as_str())?
    .run()
    .await?;

    Ok(())
}

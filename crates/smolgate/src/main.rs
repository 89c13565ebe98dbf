use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use smolgate::config::ServerConfig;
use smolgate::engine::{DemoEngine, TextGenerator};
use smolgate::handlers::route;
use smolgate::utils::tracing::init_tracing;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing();

    let config = Arc::new(ServerConfig::load().expect("failed to load configuration"));
    info!(
        bind_address = %config.bind_address,
        model_path = %config.model_path,
        context_size = config.context_size,
        "loaded configuration"
    );

    let engine: Arc<dyn TextGenerator> = Arc::new(DemoEngine::new(&config));
    if !engine.is_ready() {
        warn!("model not loaded yet, /health will report loading");
    }

    let listener = TcpListener::bind(&config.bind_address).await?;
    info!(bind_address = %config.bind_address, "listening");

    loop {
        let (stream, _) = listener.accept().await?;
        let peer_addr = stream.peer_addr()?;
        let io = TokioIo::new(stream);

        let engine = Arc::clone(&engine);
        let config = Arc::clone(&config);

        let service = service_fn(move |req| {
            let engine = Arc::clone(&engine);
            let config = Arc::clone(&config);
            async move { Ok::<_, hyper::Error>(route(req, engine, config).await) }
        });

        tokio::task::spawn(async move {
            debug!(peer = ?peer_addr, "accepted connection");
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                warn!(error = ?err, "error serving connection");
            }
        });
    }
}

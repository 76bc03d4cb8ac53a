mod cli;
mod telemetry;

use crate::cli::{GeneratorArg, CLI};
use burrow_core::{InMemoryRegistry, Shortener};
use burrow_gateway::{App, AppState};
use burrow_generator::{RandomGenerator, SeqGenerator};
use burrow_shortener::ShortenerService;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    telemetry::init(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        generator = %config.generator,
        code_length = config.code_length,
        "starting gateway server"
    );

    let registry = InMemoryRegistry::new();
    let shortener: Arc<dyn Shortener> = match config.generator {
        GeneratorArg::Random => {
            let generator = RandomGenerator::builder()
                .length(usize::from(config.code_length))
                .build();
            Arc::new(ShortenerService::new(registry, generator))
        }
        GeneratorArg::Seq => Arc::new(ShortenerService::new(
            registry,
            SeqGenerator::with_prefix(config.generator_prefix)?,
        )),
    };

    let app = App::router(AppState::new(shortener, config.public_base_url));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");
    axum::serve(listener, app).await?;

    Ok(())
}

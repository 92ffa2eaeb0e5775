use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use csvask::application::DEFAULT_PROMPT_ROWS;
use csvask::connector::api::Router;
use csvask::connector::web;
use csvask::{Commands, Container, ContainerConfig, LlmBackend, OllamaConfig};

#[derive(Parser)]
#[command(name = "csvask")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Ollama model name (overrides OLLAMA_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Ollama server URL (overrides OLLAMA_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-request timeout in seconds (overrides OLLAMA_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Answer with an offline mock model instead of calling Ollama
    #[arg(long, global = true)]
    mock_llm: bool,

    /// Dataset rows included in each prompt
    #[arg(long, global = true, default_value_t = DEFAULT_PROMPT_ROWS)]
    prompt_rows: usize,

    /// Field separator of the CSV input (single ASCII character)
    #[arg(long, global = true, default_value_t = ',')]
    delimiter: char,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn backend(&self) -> LlmBackend {
        if self.mock_llm {
            return LlmBackend::Mock;
        }

        let mut config = OllamaConfig::from_env();
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs.max(1)));
        }
        LlmBackend::Ollama(config)
    }

    fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            bail!("--delimiter must be a single ASCII character, got '{}'", self.delimiter);
        }
        Ok(self.delimiter as u8)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = ContainerConfig::new(cli.backend());
    config.prompt_rows = cli.prompt_rows;
    config.delimiter = cli.delimiter_byte()?;
    let container = Container::new(config);
    debug!("Backend type: {}", container.backend_type());

    if let Commands::Serve { port, public } = cli.command {
        let host = if public {
            Ipv4Addr::UNSPECIFIED
        } else {
            Ipv4Addr::LOCALHOST
        };
        return web::serve(Arc::new(container), SocketAddr::from((host, port))).await;
    }

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{output}");

    Ok(())
}

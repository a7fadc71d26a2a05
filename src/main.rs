use clap::{Parser, Subcommand};
use std::process::ExitCode;

use rae_chat::infrastructure::adapters::{ConsoleAdapter, ConsoleSurface};
use rae_chat::{ChatWidget, Config};

#[derive(Parser)]
#[command(name = "rae-chat")]
#[command(about = "A minimal chat client for the sugerir-rae suggestion service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml", global = true)]
    config: String,

    /// Suggestion server base URL (overrides config and SERVER_DOMAIN)
    #[arg(short, long, global = true)]
    server: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat
    Run,
    /// Send a single message and print the reply
    Ask {
        /// Message text
        text: String,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() -> ExitCode {
    // Initialize logging; stdout is reserved for the chat log
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => run_chat(&cli.config, cli.server),
        Commands::Ask { text } => ask(&cli.config, cli.server, &text),
        Commands::Version => {
            println!("rae-chat v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::InitConfig => init_config(),
    }
}

fn load_config(config_path: &str, server_override: Option<String>) -> Option<Config> {
    match Config::resolve(config_path, server_override) {
        Ok(config) => {
            tracing::info!("Using suggestion server: {}", config.server.base_url());
            Some(config)
        }
        Err(e) => {
            tracing::error!("{}", e);
            None
        }
    }
}

/// The chat is single-threaded: one thread handles input and resumes
/// every pending reply.
fn build_runtime() -> Option<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| tracing::error!("Failed to start runtime: {}", e))
        .ok()
}

fn run_chat(config_path: &str, server_override: Option<String>) -> ExitCode {
    let Some(config) = load_config(config_path, server_override) else {
        return ExitCode::FAILURE;
    };
    let Some(rt) = build_runtime() else {
        return ExitCode::FAILURE;
    };

    let result = rt.block_on(async {
        let surface = ConsoleSurface::new(&config.console).with_prompt(config.console.prompt.clone());
        let widget = ChatWidget::new(&config.server, surface);
        ConsoleAdapter::new(&config.console).run(&widget).await
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Console chat stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn ask(config_path: &str, server_override: Option<String>, text: &str) -> ExitCode {
    let Some(config) = load_config(config_path, server_override) else {
        return ExitCode::FAILURE;
    };
    let Some(rt) = build_runtime() else {
        return ExitCode::FAILURE;
    };

    rt.block_on(async {
        let widget = ChatWidget::new(&config.server, ConsoleSurface::new(&config.console));
        match widget.submit(text) {
            Some(handle) => {
                if let Err(e) = handle.await {
                    tracing::error!("Reply task failed: {}", e);
                    return ExitCode::FAILURE;
                }
                ExitCode::SUCCESS
            }
            None => {
                tracing::warn!("Nothing to send: message is blank");
                ExitCode::FAILURE
            }
        }
    })
}

fn init_config() -> ExitCode {
    match Config::default().to_yaml() {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to config.yaml and adjust as needed.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

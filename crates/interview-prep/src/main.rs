mod config;
mod error;
mod server;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use error::AppError;
use prep_core::clipboard::Clipboard;
use prep_core::model::ContentStore;
use server::InterviewPrepServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for MCP JSON-RPC
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting interview-prep MCP server");

    let config = Config::from_env()?;
    info!(
        content_path = config.content_path.as_deref().unwrap_or("<builtin>"),
        clipboard = config.clipboard_cmd.is_some(),
        tcp = config.tcp_listen_addr.is_some(),
        "configuration loaded"
    );

    let store = load_content(&config)?;
    let fingerprint: Arc<str> = store.fingerprint().into();
    info!(
        categories = store.categories().len(),
        questions = store.question_count(),
        projects = store.projects.projects.len(),
        snippets = store.coding.snippets.len(),
        fingerprint = %fingerprint,
        "content loaded"
    );
    let store = Arc::new(store);

    let clipboard = Clipboard::new(config.clipboard_cmd.as_deref());
    match clipboard.program() {
        Some(program) => info!(program, "clipboard enabled"),
        None => info!("no clipboard command configured, copies are acknowledged only"),
    }

    if let Some(addr) = &config.tcp_listen_addr {
        let listener = TcpListener::bind(addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            // Fresh session per client.
            let server = InterviewPrepServer::new(
                Arc::clone(&store),
                Arc::clone(&fingerprint),
                clipboard.clone(),
            );
            tokio::spawn(async move {
                info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        let server = InterviewPrepServer::new(store, fingerprint, clipboard);
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}

fn load_content(config: &Config) -> Result<ContentStore, AppError> {
    let store = match config.content_path() {
        Some(path) => ContentStore::load(&path)?,
        None => ContentStore::builtin()?,
    };
    Ok(store)
}

use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
///
/// Everything is optional: without a content path the built-in document is
/// served, without a clipboard command copies only produce the on-screen
/// acknowledgment, and without a listen address the server speaks MCP on stdio.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// JSON content file replacing the built-in document.
    pub content_path: Option<String>,
    /// Clipboard command line, e.g. "wl-copy" or "xclip -selection clipboard".
    pub clipboard_cmd: Option<String>,
    /// TCP address to serve MCP on instead of stdio, e.g. "127.0.0.1:7878".
    pub tcp_listen_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `PREP_CONTENT_PATH`: content JSON file (must exist when set)
    /// - `PREP_CLIPBOARD_CMD`: command that receives copied text on stdin
    /// - `MCP_TCP_LISTEN_ADDR`: serve on TCP instead of stdio
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let content_path = non_blank("PREP_CONTENT_PATH");
        if let Some(path) = &content_path {
            if !Path::new(path).is_file() {
                return Err(AppError::Config(format!("content file not found: {path}")));
            }
        }

        Ok(Self {
            content_path,
            clipboard_cmd: non_blank("PREP_CLIPBOARD_CMD"),
            tcp_listen_addr: non_blank("MCP_TCP_LISTEN_ADDR"),
        })
    }

    pub fn content_path(&self) -> Option<PathBuf> {
        self.content_path.as_deref().map(PathBuf::from)
    }
}

pub mod clipboard;
pub mod content;
pub mod copy_ack;
pub mod disclosure;
pub mod error;
pub mod filter;
pub mod mcp_api;
pub mod model;
pub mod render;
pub mod session;
pub mod tab;

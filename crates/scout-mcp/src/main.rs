//! codescout MCP server.
//! Exposes scan_code_structure and list_languages as MCP tools over stdio,
//! giving a connected assistant cheap structural metadata about a codebase.

use anyhow::Result;
use rmcp::ServiceExt;
use scout_mcp::server::ScoutServer;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let project_root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().expect("failed to get current directory"));

    eprintln!("codescout MCP server starting for: {}", project_root.display());

    let server = ScoutServer::new(project_root);
    let service = server
        .serve(rmcp::transport::io::stdio())
        .await
        .inspect_err(|e| eprintln!("serve error: {}", e))
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    service.waiting().await?;

    Ok(())
}

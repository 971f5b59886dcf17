//! MCP tool surface: scan_code_structure and list_languages.

use rmcp::{
    ServerHandler, handler::server::wrapper::Parameters, model::ServerInfo, tool, tool_handler,
    tool_router,
};
use schemars::JsonSchema;
use scout_core::config::ScoutConfig;
use scout_core::decl::DeclKind;
use scout_core::output;
use scout_scan::languages::{SUPPORTED_EXTENSIONS, family_for_extension};
use scout_scan::scan::{ScanRequest, scan};
use serde::Deserialize;
use std::path::PathBuf;

/// The codescout MCP server state.
///
/// Scans are pure functions over the filesystem — no cache, handle, or lock
/// survives a call, so concurrent tool invocations are fully independent.
#[derive(Clone)]
pub struct ScoutServer {
    project_root: PathBuf,
    config: ScoutConfig,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl std::fmt::Debug for ScoutServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoutServer")
            .field("project_root", &self.project_root)
            .finish()
    }
}

impl ScoutServer {
    pub fn new(project_root: PathBuf) -> Self {
        let config = ScoutConfig::load(&project_root).unwrap_or_default();
        Self {
            project_root,
            config,
            tool_router: Self::tool_router(),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ScanCodeStructureParams {
    /// Directory to scan. Relative paths resolve against the server's
    /// project root.
    pub path: String,
    /// Maximum traversal depth below the root (default: 3)
    pub max_depth: Option<usize>,
    /// Restrict results to one kind: "function" or "class"
    pub filter: Option<String>,
    /// Output format: "table" (default) or "json"
    pub format: Option<String>,
}

#[tool_router]
impl ScoutServer {
    #[tool(
        description = "Scan a directory tree and list function and class declarations with their file and line. Pattern-matching heuristic, not a compiler: fast and approximate. Supports JavaScript/TypeScript, Python, and Go; honors the project's root ignore file."
    )]
    pub async fn scan_code_structure(
        &self,
        Parameters(params): Parameters<ScanCodeStructureParams>,
    ) -> Result<String, String> {
        if params.path.trim().is_empty() {
            return Err("path is required".to_string());
        }
        let root = {
            let p = PathBuf::from(&params.path);
            if p.is_absolute() {
                p
            } else {
                self.project_root.join(p)
            }
        };

        let mut request = ScanRequest::with_config(root, &self.config);
        if let Some(depth) = params.max_depth {
            request.max_depth = depth;
        }
        if let Some(ref filter) = params.filter {
            match DeclKind::from_filter(filter) {
                Some(kind) => request.kind_filter = Some(kind),
                None => {
                    return Err(format!(
                        "unknown filter '{filter}': expected 'function' or 'class'"
                    ));
                }
            }
        }

        let decls = scan(&request).map_err(|e| e.to_string())?;

        match params.format.as_deref() {
            Some("json") => output::format_json(&decls).map_err(|e| e.to_string()),
            Some("table") | None => Ok(output::format_table(&decls)),
            Some(other) => Err(format!("unknown format '{other}': expected 'table' or 'json'")),
        }
    }

    #[tool(
        description = "List the file extensions the scanner collects and the extraction heuristic family each one uses."
    )]
    pub async fn list_languages(&self) -> Result<String, String> {
        let mut out = String::from("EXTENSION  FAMILY\n");
        for ext in SUPPORTED_EXTENSIONS {
            out.push_str(&format!(
                ".{ext:<8}  {}\n",
                family_for_extension(ext).name()
            ));
        }
        out.push_str("\nUnrecognized extensions fall back to the script family.\n");
        Ok(out)
    }
}

#[tool_handler]
impl ServerHandler for ScoutServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "codescout: fast structural metadata for a codebase — function and class \
                 declarations with file and line, extracted by pattern matching (no build, \
                 no per-language parser).\n\n\
                 Tools:\n\
                 - scan_code_structure: scan a directory (depth-bounded, ignore-file aware) \
                 and list declarations as a table or JSON\n\
                 - list_languages: show supported extensions and heuristic families\n\n\
                 Results are approximate by design: comments and strings on matched lines \
                 are filtered, but unusual constructs may still be missed or over-reported."
                    .into(),
            ),
            ..Default::default()
        }
    }
}

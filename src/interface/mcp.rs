//! MCP Server for bookface
//!
//! MCP Protocol (stdio) <-> application::LogicManager
//!
//! 5 tools: book_list, book_find, book_add, book_edit, book_delete

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rmcp::{
    handler::server::{tool::ToolCallContext, tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolRequestParams, CallToolResult, Content, Implementation, ListToolsResult,
        PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
    transport::stdio,
    ErrorData as McpError, ServerHandler, ServiceExt,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::application::command::{
    AddBookCommand, Command, DeleteBookCommand, EditBookCommand, EditBookDescriptor,
    FindBookCommand, Index, ListBookCommand,
};
use crate::application::error::AppError;
use crate::application::logic::{load_user_prefs, LogicManager};
use crate::application::storage::StorageManager;
use crate::domain::error::DomainError;
use crate::domain::model::book::{Author, Book, Title};
use crate::infra::json_store::{JsonBookFaceStorage, JsonUserPrefsStorage};

type JsonStorage = StorageManager<JsonBookFaceStorage, JsonUserPrefsStorage>;

// =============================================================================
// Public entry point
// =============================================================================

/// MCP Serverを起動する。prefs_pathはユーザー設定ファイル。
/// カタログのパスは設定から決まる。
pub async fn run(prefs_path: PathBuf) -> anyhow::Result<()> {
    let server = BookfaceMcpServer::open(prefs_path);
    let logic = Arc::clone(&server.logic);

    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    let guard = logic
        .lock()
        .map_err(|_| anyhow::anyhow!("logic manager lock poisoned"))?;
    if let Err(e) = guard.save_user_prefs() {
        warn!(error = %e, "failed to save user prefs on shutdown");
    }
    Ok(())
}

// =============================================================================
// MCP Server
// =============================================================================

#[derive(Clone)]
struct BookfaceMcpServer {
    logic: Arc<Mutex<LogicManager<JsonStorage>>>,
    tool_router: ToolRouter<Self>,
}

impl BookfaceMcpServer {
    fn open(prefs_path: PathBuf) -> Self {
        let prefs_storage = JsonUserPrefsStorage::new(prefs_path);
        let user_prefs = load_user_prefs(&prefs_storage);
        let book_face_storage = JsonBookFaceStorage::new(user_prefs.book_face_file_path());
        let storage = StorageManager::new(book_face_storage, prefs_storage);
        Self::with_logic(LogicManager::open(storage, user_prefs))
    }

    fn with_logic(logic: LogicManager<JsonStorage>) -> Self {
        Self {
            logic: Arc::new(Mutex::new(logic)),
            tool_router: Self::tool_router(),
        }
    }

    /// コマンドを実行し、結果と現在の表示リストを返す。
    fn run_command(&self, command: &dyn Command) -> Result<CallToolResult, McpError> {
        let mut logic = self
            .logic
            .lock()
            .map_err(|_| McpError::internal_error("Lock poisoned", None))?;
        let result = logic.execute(command).map_err(Self::to_mcp_error)?;
        let listing = format_book_list(&logic.filtered_book_list());

        Ok(CallToolResult::success(vec![Content::text(format!(
            "{result}\n\n{listing}"
        ))]))
    }

    /// 利用者の入力に起因する失敗は invalid_params、保存失敗は internal_error。
    fn to_mcp_error(e: AppError) -> McpError {
        match e {
            AppError::Command(c) => McpError::invalid_params(c.to_string(), None),
            other => McpError::internal_error(format!("{other}"), None),
        }
    }
}

// =============================================================================
// ServerHandler impl
// =============================================================================

impl ServerHandler for BookfaceMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "bookface".to_string(),
                title: Some("Bookface: Personal Library Catalog".to_string()),
                description: Some(
                    "Catalog of books identified by title and author. \
                     Books are addressed by their number in the last shown list."
                        .to_string(),
                ),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Manage a personal book catalog.\n\
                 \n\
                 `book_list` shows every book, `book_find` narrows the list by title keywords. \
                 `book_edit` and `book_delete` take the number shown in the most recent list.\n\
                 \n\
                 Tools: `book_list`/`book_find` → `book_edit`/`book_delete`. `book_add` for new books."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let tool_ctx = ToolCallContext::new(self, request, context);
        self.tool_router.call(tool_ctx).await
    }
}

// =============================================================================
// Request types
// =============================================================================

fn domain_error(e: DomainError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

fn parse_index(index: usize) -> Result<Index, McpError> {
    Index::from_one_based(index)
        .ok_or_else(|| McpError::invalid_params("Index must be a positive integer", None))
}

fn parse_title(s: String) -> Result<Title, McpError> {
    Title::new(s).map_err(domain_error)
}

fn parse_author(s: String) -> Result<Author, McpError> {
    Author::new(s).map_err(domain_error)
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpBookListRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpBookFindRequest {
    #[schemars(description = "Title keywords (whole words, case-insensitive). Multi-word keywords are split into words. A book matches if any word matches.")]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpBookAddRequest {
    #[schemars(description = "Book title (required)")]
    pub title: String,
    #[schemars(description = "Book author (required)")]
    pub author: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpBookEditRequest {
    #[schemars(description = "Book number from the last shown list (1-based)")]
    pub index: usize,
    #[schemars(description = "New title (omit to keep current)")]
    pub title: Option<String>,
    #[schemars(description = "New author (omit to keep current)")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct McpBookDeleteRequest {
    #[schemars(description = "Book number from the last shown list (1-based)")]
    pub index: usize,
}

impl McpBookEditRequest {
    fn into_command(self) -> Result<EditBookCommand, McpError> {
        let index = parse_index(self.index)?;
        let mut descriptor = EditBookDescriptor::new();
        if let Some(title) = self.title {
            descriptor.set_title(parse_title(title)?);
        }
        if let Some(author) = self.author {
            descriptor.set_author(parse_author(author)?);
        }
        if !descriptor.is_any_field_edited() {
            return Err(McpError::invalid_params(
                "At least one field to edit must be provided.",
                None,
            ));
        }
        Ok(EditBookCommand::new(index, descriptor))
    }
}

// =============================================================================
// Tool implementations
// =============================================================================

#[tool_router]
impl BookfaceMcpServer {
    #[tool(
        name = "book_list",
        description = "Show every book in the catalog, clearing any active search.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn book_list(
        &self,
        #[allow(unused_variables)] Parameters(_req): Parameters<McpBookListRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.run_command(&ListBookCommand)
    }

    #[tool(
        name = "book_find",
        description = "Narrow the shown list to books whose title contains any of the keywords.",
        annotations(
            read_only_hint = true,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn book_find(
        &self,
        Parameters(req): Parameters<McpBookFindRequest>,
    ) -> Result<CallToolResult, McpError> {
        if req.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(McpError::invalid_params(
                "At least one keyword must be provided.",
                None,
            ));
        }
        self.run_command(&FindBookCommand::new(req.keywords))
    }

    #[tool(
        name = "book_add",
        description = "Add a book to the catalog. Fails if the same title and author already exist.",
        annotations(
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = false
        )
    )]
    async fn book_add(
        &self,
        Parameters(req): Parameters<McpBookAddRequest>,
    ) -> Result<CallToolResult, McpError> {
        let book = Book::new(parse_title(req.title)?, parse_author(req.author)?);
        self.run_command(&AddBookCommand::new(book))
    }

    #[tool(
        name = "book_edit",
        description = "Edit the title and/or author of a book, chosen by its number in the last shown list. Only specified fields are changed.",
        annotations(
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = false
        )
    )]
    async fn book_edit(
        &self,
        Parameters(req): Parameters<McpBookEditRequest>,
    ) -> Result<CallToolResult, McpError> {
        let command = req.into_command()?;
        self.run_command(&command)
    }

    #[tool(
        name = "book_delete",
        description = "Delete a book, chosen by its number in the last shown list.",
        annotations(
            read_only_hint = false,
            destructive_hint = true,
            idempotent_hint = false,
            open_world_hint = false
        )
    )]
    async fn book_delete(
        &self,
        Parameters(req): Parameters<McpBookDeleteRequest>,
    ) -> Result<CallToolResult, McpError> {
        let index = parse_index(req.index)?;
        self.run_command(&DeleteBookCommand::new(index))
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// 番号付きの一覧表示。
fn format_book_list(books: &[Book]) -> String {
    if books.is_empty() {
        return "(no books)".to_string();
    }
    books
        .iter()
        .enumerate()
        .map(|(i, b)| format!("{}. {}", i + 1, b))
        .collect::<Vec<_>>()
        .join("\n")
}

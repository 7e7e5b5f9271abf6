/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual server loop that:
/// 1. Reads JSON-RPC requests from stdin
/// 2. Dispatches tool calls against the state containers
/// 3. Sends JSON-RPC responses to stdout

use std::collections::HashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::auth;
use crate::mcp::protocol::*;
use crate::tools;
use crate::{FocusFlowServer, ServerError};

/// MCP server that owns the application state for the session
pub struct McpServer {
    app: FocusFlowServer,
    /// Whether the client has completed the MCP handshake
    initialized: bool,
}

/// Deserialize tool arguments into a typed params struct
fn parse_args<T: DeserializeOwned>(args: HashMap<String, Value>) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(args.into_iter().collect()))
}

/// Render a read-style response as pretty JSON for the client
fn json_result<T: Serialize>(response: &T) -> ToolCallResult {
    match serde_json::to_string_pretty(response) {
        Ok(text) => ToolCallResult::success(text),
        Err(e) => ToolCallResult::error(e.to_string()),
    }
}

impl McpServer {
    pub fn new(app: FocusFlowServer) -> Self {
        Self { app, initialized: false }
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (stdin closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line).await {
                        let response_str = serde_json::to_string(&response)?;

                        stdout.write_all(response_str.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    async fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    json!(null),
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        Some(self.handle_request(request).await)
    }

    /// Handle a JSON-RPC request
    async fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(request.id, json!(null))
            }
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request).await,
            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        }
    }

    /// Handle MCP initialization request
    fn handle_initialize(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: false }),
            },
            server_info: ServerInfo {
                name: "FocusFlow".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        JsonRpcResponse::success(request.id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/list request
    fn handle_tools_list(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let habit_id_schema = json!({
            "type": "object",
            "properties": {
                "habit_id": {"type": "integer", "description": "ID of the habit"}
            },
            "required": ["habit_id"]
        });
        let empty_schema = json!({"type": "object", "properties": {}, "required": []});

        let tools = vec![
            ToolDefinition {
                name: "habit_create".to_string(),
                description: "Create a new habit to track".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "name": {"type": "string", "description": "Name of the habit (max 50 chars)"},
                        "category": {"type": "string", "description": "health, learning, mind, fitness, productivity, or social"},
                        "goal": {"type": "string", "description": "What you're aiming for (max 200 chars)"},
                        "icon": {"type": "string", "description": "Symbolic icon name (optional)"},
                        "color": {"type": "string", "description": "Accent color hex (optional)"},
                        "frequency": {"type": "string", "description": "daily (default), weekly, or custom"},
                        "frequency_days": {"type": "array", "items": {"type": "string"}, "description": "Weekday names for weekly frequency"},
                        "frequency_every_days": {"type": "integer", "description": "Interval in days for custom frequency"},
                        "reminder_enabled": {"type": "boolean"},
                        "reminder_time": {"type": "string", "description": "Reminder time of day, e.g. 07:30"},
                        "difficulty": {"type": "string", "description": "easy, medium, or hard"}
                    },
                    "required": ["name", "category"]
                }),
            },
            ToolDefinition {
                name: "habit_update".to_string(),
                description: "Edit an active habit's descriptive fields".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "habit_id": {"type": "integer"},
                        "name": {"type": "string"},
                        "category": {"type": "string"},
                        "goal": {"type": "string"},
                        "icon": {"type": "string"},
                        "color": {"type": "string"},
                        "frequency": {"type": "string"},
                        "frequency_days": {"type": "array", "items": {"type": "string"}},
                        "frequency_every_days": {"type": "integer"},
                        "reminder_enabled": {"type": "boolean"},
                        "reminder_time": {"type": "string", "description": "Empty string clears the reminder time"},
                        "difficulty": {"type": "string"}
                    },
                    "required": ["habit_id"]
                }),
            },
            ToolDefinition {
                name: "habit_toggle".to_string(),
                description: "Toggle today's completion for a habit".to_string(),
                input_schema: habit_id_schema.clone(),
            },
            ToolDefinition {
                name: "habit_archive".to_string(),
                description: "Move a habit to the archive".to_string(),
                input_schema: habit_id_schema.clone(),
            },
            ToolDefinition {
                name: "habit_restore".to_string(),
                description: "Restore an archived habit to the active list".to_string(),
                input_schema: habit_id_schema.clone(),
            },
            ToolDefinition {
                name: "habit_delete".to_string(),
                description: "Permanently delete a habit and its notes".to_string(),
                input_schema: habit_id_schema.clone(),
            },
            ToolDefinition {
                name: "habit_reset_streak".to_string(),
                description: "Reset a habit's current streak to zero".to_string(),
                input_schema: habit_id_schema.clone(),
            },
            ToolDefinition {
                name: "habit_reorder".to_string(),
                description: "Move an active habit to a new position in the list".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "from_index": {"type": "integer"},
                        "to_index": {"type": "integer"}
                    },
                    "required": ["from_index", "to_index"]
                }),
            },
            ToolDefinition {
                name: "habit_list".to_string(),
                description: "List habits with streaks and completion rates".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "archived": {"type": "boolean", "description": "List the archive instead of active habits"},
                        "category": {"type": "string", "description": "Filter by category"},
                        "filter": {"type": "string", "description": "all, pending, or completed"}
                    },
                    "required": []
                }),
            },
            ToolDefinition {
                name: "habit_status".to_string(),
                description: "Full detail for one habit, including recent history".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "habit_id": {"type": "integer"},
                        "recent_days": {"type": "integer", "description": "History entries to include (default 7)"}
                    },
                    "required": ["habit_id"]
                }),
            },
            ToolDefinition {
                name: "note_add".to_string(),
                description: "Attach a journal note to a habit".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "habit_id": {"type": "integer"},
                        "content": {"type": "string"},
                        "mood": {"type": "string", "description": "happy, neutral, or sad (optional)"}
                    },
                    "required": ["habit_id", "content"]
                }),
            },
            ToolDefinition {
                name: "note_list".to_string(),
                description: "List a habit's notes, newest first".to_string(),
                input_schema: habit_id_schema,
            },
            ToolDefinition {
                name: "activity_list".to_string(),
                description: "List the activity feed with the unread counter".to_string(),
                input_schema: empty_schema.clone(),
            },
            ToolDefinition {
                name: "activity_mark_read".to_string(),
                description: "Mark one activity as read".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "activity_id": {"type": "integer"}
                    },
                    "required": ["activity_id"]
                }),
            },
            ToolDefinition {
                name: "activity_mark_all_read".to_string(),
                description: "Mark every activity as read".to_string(),
                input_schema: empty_schema.clone(),
            },
            ToolDefinition {
                name: "activity_clear".to_string(),
                description: "Clear the activity feed".to_string(),
                input_schema: empty_schema.clone(),
            },
            ToolDefinition {
                name: "insights".to_string(),
                description: "Dashboard aggregates: daily tallies, completion rates, category distribution".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "period": {"type": "string", "description": "week (default) or month"},
                        "year": {"type": "integer", "description": "Calendar month override"},
                        "month": {"type": "integer"}
                    },
                    "required": []
                }),
            },
            ToolDefinition {
                name: "auth_status".to_string(),
                description: "Whether the session is signed in".to_string(),
                input_schema: empty_schema.clone(),
            },
            ToolDefinition {
                name: "auth_send_link".to_string(),
                description: "Send a (simulated) magic sign-in link".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "email": {"type": "string"}
                    },
                    "required": ["email"]
                }),
            },
            ToolDefinition {
                name: "auth_complete".to_string(),
                description: "Complete the (simulated) magic-link sign-in".to_string(),
                input_schema: empty_schema.clone(),
            },
            ToolDefinition {
                name: "auth_sign_out".to_string(),
                description: "Sign out of the session".to_string(),
                input_schema: empty_schema,
            },
        ];

        JsonRpcResponse::success(request.id, json!({"tools": tools}))
    }

    /// Handle tools/call request
    async fn handle_tools_call(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match request.params {
            Some(params) => match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(
                        request.id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid parameters: {}", e),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    request.id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        let result = self.dispatch(&tool_params.name, tool_params.arguments).await;
        JsonRpcResponse::success(request.id, serde_json::to_value(result).unwrap())
    }

    /// Route a tool call to its handler
    async fn dispatch(&mut self, name: &str, args: HashMap<String, Value>) -> ToolCallResult {
        match name {
            "habit_create" => match parse_args(args) {
                Ok(params) => {
                    let (store, log) = self.app.containers_mut();
                    match tools::create_habit(store, log, params) {
                        Ok(response) => ToolCallResult::success(format!(
                            "{}\nHabit ID: {}",
                            response.message, response.habit_id
                        )),
                        Err(e) => ToolCallResult::error(e.to_string()),
                    }
                }
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "habit_update" => match parse_args(args) {
                Ok(params) => {
                    let (store, log) = self.app.containers_mut();
                    match tools::update_habit(store, log, params) {
                        Ok(response) => ToolCallResult::success(response.message),
                        Err(e) => ToolCallResult::error(e.to_string()),
                    }
                }
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "habit_toggle" => match parse_args(args) {
                Ok(params) => {
                    let (store, log) = self.app.containers_mut();
                    let response = tools::toggle_habit(store, log, params);
                    ToolCallResult::success(response.message)
                }
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "habit_archive" => match parse_args(args) {
                Ok(params) => {
                    let (store, log) = self.app.containers_mut();
                    let response = tools::archive_habit(store, log, params);
                    ToolCallResult::success(response.message)
                }
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "habit_restore" => match parse_args(args) {
                Ok(params) => {
                    let (store, log) = self.app.containers_mut();
                    let response = tools::restore_habit(store, log, params);
                    ToolCallResult::success(response.message)
                }
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "habit_delete" => match parse_args(args) {
                Ok(params) => {
                    let (store, log) = self.app.containers_mut();
                    let response = tools::delete_habit(store, log, params);
                    ToolCallResult::success(response.message)
                }
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "habit_reset_streak" => match parse_args(args) {
                Ok(params) => {
                    let (store, log) = self.app.containers_mut();
                    let response = tools::reset_streak(store, log, params);
                    ToolCallResult::success(response.message)
                }
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "habit_reorder" => match parse_args(args) {
                Ok(params) => {
                    let response = tools::reorder_habits(self.app.store_mut(), params);
                    ToolCallResult::success(response.message)
                }
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "habit_list" => match parse_args(args) {
                Ok(params) => json_result(&tools::list_habits(self.app.store(), params)),
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "habit_status" => match parse_args(args) {
                Ok(params) => json_result(&tools::habit_status(self.app.store(), params)),
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "note_add" => match parse_args(args) {
                Ok(params) => {
                    let response = tools::add_note(self.app.store_mut(), params);
                    ToolCallResult::success(response.message)
                }
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "note_list" => match parse_args(args) {
                Ok(params) => json_result(&tools::list_notes(self.app.store(), params)),
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "activity_list" => json_result(&tools::list_activities(self.app.activity())),
            "activity_mark_read" => match parse_args(args) {
                Ok(params) => {
                    let response = tools::mark_activity_read(self.app.activity_mut(), params);
                    ToolCallResult::success(response.message)
                }
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "activity_mark_all_read" => {
                let response = tools::mark_all_activities_read(self.app.activity_mut());
                ToolCallResult::success(response.message)
            }
            "activity_clear" => {
                let response = tools::clear_activities(self.app.activity_mut());
                ToolCallResult::success(response.message)
            }
            "insights" => match parse_args(args) {
                Ok(params) => json_result(&tools::insights(self.app.store(), params)),
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "auth_status" => json_result(&json!({
                "authenticated": self.app.gate().is_authenticated()
            })),
            "auth_send_link" => {
                let email = args
                    .get("email")
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .to_string();
                match auth::send_magic_link(&email, self.app.rng_mut()).await {
                    Ok(()) => ToolCallResult::success(format!(
                        "Magic link sent to {}. Check your inbox!",
                        email
                    )),
                    Err(e) => ToolCallResult::error(e.to_string()),
                }
            }
            "auth_complete" => match auth::complete_sign_in(self.app.gate()).await {
                Ok(()) => ToolCallResult::success("Welcome back! You're signed in.".to_string()),
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            "auth_sign_out" => match self.app.gate().sign_out() {
                Ok(()) => ToolCallResult::success("Signed out.".to_string()),
                Err(e) => ToolCallResult::error(e.to_string()),
            },
            _ => ToolCallResult::error(format!("Unknown tool: {}", name)),
        }
    }
}

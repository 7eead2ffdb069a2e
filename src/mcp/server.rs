//! Food Quantity MCP Server Implementation
//!
//! Implements the MCP server with all quantity tools.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::catalog::{Catalog, PreferenceStore};
use crate::tools::foods;
use crate::tools::quantities::{self, AssembleMealItemRequest};
use crate::tools::status::StatusTracker;

/// Food Quantity MCP Service
#[derive(Clone)]
pub struct FoodQuantService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    catalog: Arc<Catalog>,
    preferences: Arc<PreferenceStore>,
    tool_router: ToolRouter<FoodQuantService>,
}

impl FoodQuantService {
    pub fn new(catalog_path: PathBuf, catalog: Catalog) -> Self {
        let preferences = PreferenceStore::new(catalog.user_units());
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(catalog_path))),
            catalog: Arc::new(catalog),
            preferences: Arc::new(preferences),
            tool_router: Self::tool_router(),
        }
    }
}

/// Serialize a tool result as pretty JSON
fn json_result<T: Serialize>(result: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFoodsParams {
    /// Search text matched against name, detail and brand (optional)
    pub query: Option<String>,
    #[serde(default = "default_list_limit")]
    pub limit: i64,
}

fn default_list_limit() -> i64 { 50 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FoodParams {
    /// Food id (UUID) or exact food name
    pub food: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct QuantityParams {
    /// Food id (UUID) or exact food name
    pub food: String,
    /// Amount, e.g. "2" or "0.5"
    pub amount: String,
    /// Unit text, e.g. "g", "cup", "serving", "scoop", "size:packed:tbsp"
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AssembleMealItemParams {
    /// Food id (UUID) or exact food name
    pub food: String,
    /// Amount text (optional, defaults to the last used or food default amount)
    pub amount: Option<String>,
    /// Unit text (optional, defaults with the amount)
    pub unit: Option<String>,
    /// Meal name, e.g. "Breakfast" (optional)
    pub meal_name: Option<String>,
    /// Meal time in RFC 3339 format (optional, defaults to now)
    pub meal_time: Option<String>,
}

fn parse_meal_time(text: &str) -> Result<DateTime<Utc>, McpError> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| McpError::internal_error(format!("Invalid meal_time '{}': {}", text, e), None))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FoodQuantService {
    // --- Status ---

    #[tool(description = "Get the current status of the food quantity service including build info, catalog size, and process information")]
    async fn quantity_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(self.catalog.len(), self.preferences.last_used_count());
        json_result(&status)
    }

    #[tool(description = "Get the guide to amount and unit text. Call this before using the quantity tools when unsure which unit text a food accepts.")]
    fn unit_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::UNIT_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(UNIT_INSTRUCTIONS)]))
    }

    // --- Foods ---

    #[tool(description = "List foods in the catalog, optionally filtered by name, detail or brand")]
    fn list_foods(&self, Parameters(p): Parameters<ListFoodsParams>) -> Result<CallToolResult, McpError> {
        let result = foods::list_foods(&self.catalog, p.query.as_deref(), p.limit)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get full details for a food including sizes, serving, density and which measurements it supports")]
    fn get_food(&self, Parameters(p): Parameters<FoodParams>) -> Result<CallToolResult, McpError> {
        let result = foods::get_food(&self.catalog, &p.food).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Quantities ---

    #[tool(description = "List every unit a food can be measured in, with the unit text the other tools accept")]
    fn food_units(&self, Parameters(p): Parameters<FoodParams>) -> Result<CallToolResult, McpError> {
        let result = quantities::food_units(&self.catalog, &self.preferences, &p.food)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Normalize an amount and unit of a food into its storage form (FoodValue), resolving volume units through the user's preferences")]
    fn to_food_value(&self, Parameters(p): Parameters<QuantityParams>) -> Result<CallToolResult, McpError> {
        let result = quantities::to_food_value(&self.catalog, &self.preferences, &p.food, &p.amount, &p.unit)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get the same amount of a food in every other unit it converts to: weights, then volumes, then serving, then sizes")]
    fn equivalent_quantities(&self, Parameters(p): Parameters<QuantityParams>) -> Result<CallToolResult, McpError> {
        let result = quantities::equivalent_quantities(&self.catalog, &self.preferences, &p.food, &p.amount, &p.unit)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get the amount a food should start with: the last used amount, else the food's declared default")]
    fn default_quantity(&self, Parameters(p): Parameters<FoodParams>) -> Result<CallToolResult, McpError> {
        let result = quantities::default_quantity_for(&self.catalog, &self.preferences, &p.food)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Assemble the meal item to log for a food, with its scaled nutrition and equivalent amounts")]
    fn assemble_meal_item(&self, Parameters(p): Parameters<AssembleMealItemParams>) -> Result<CallToolResult, McpError> {
        let meal_time = p.meal_time.as_deref().map(parse_meal_time).transpose()?;
        let request = AssembleMealItemRequest {
            food: &p.food,
            amount: p.amount.as_deref(),
            unit: p.unit.as_deref(),
            meal_name: p.meal_name.as_deref(),
            meal_time,
        };
        let result = quantities::assemble_meal_item(&self.catalog, self.preferences.clone(), request)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Remember the amount a food was logged with, so it becomes the food's default next time")]
    fn record_last_used_quantity(&self, Parameters(p): Parameters<QuantityParams>) -> Result<CallToolResult, McpError> {
        let result = quantities::record_last_used_quantity(&self.catalog, &self.preferences, &p.food, &p.amount, &p.unit)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for FoodQuantService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "foodquant".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Food Quantity Engine".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Food Quantity Engine - unit-aware food amounts. \
                 IMPORTANT: Call unit_instructions for the unit text syntax. \
                 Foods: list_foods/get_food/food_units. \
                 Quantities: to_food_value, equivalent_quantities, default_quantity. \
                 Logging: assemble_meal_item, then record_last_used_quantity once saved."
                    .into(),
            ),
        }
    }
}

//! Wire types for the chat API.
//!
//! Field names follow the JSON contract consumed by the site's chat widget
//! (`conversationHistory`, `priceIDR`, `totalCostIDR`).

use serde::{Deserialize, Serialize};
use spacely_core::currency::usd_to_idr;
use spacely_core::types::FurnitureItem;
use utoipa::ToSchema;

/// Incoming chat request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The user's message. Required; empty is rejected.
    pub message: Option<String>,
    /// Prior conversation turns, oldest first.
    #[serde(default, rename = "conversationHistory")]
    pub conversation_history: Vec<ChatTurn>,
}

/// One prior conversation turn. The role is a free string on the wire;
/// anything unrecognized is treated as a user turn.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

/// A recommended item with its price converted to IDR.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Recommendation {
    pub category: String,
    pub price: f64,
    pub material: String,
    pub color: String,
    #[serde(rename = "priceIDR")]
    pub price_idr: f64,
}

impl From<&FurnitureItem> for Recommendation {
    fn from(item: &FurnitureItem) -> Self {
        Self {
            category: item.category.clone(),
            price: item.price,
            material: item.material.clone(),
            color: item.color.clone(),
            price_idr: usd_to_idr(item.price),
        }
    }
}

/// Successful chat response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    /// Natural-language assistant reply.
    pub response: String,
    /// Items selected by the allocator.
    pub recommendations: Vec<Recommendation>,
    #[serde(rename = "totalCostIDR")]
    pub total_cost_idr: f64,
    /// Budget extracted from the message, 0 when none was found.
    pub budget: u64,
}

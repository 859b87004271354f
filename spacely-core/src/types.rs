//! Core data types shared across the crate.

use serde::{Deserialize, Serialize};

/// A single purchasable furniture record from the catalog.
///
/// Prices are in USD as published in the source CSV; budgets arrive in IDR
/// and are converted at selection time (see [`crate::currency`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    pub category: String,
    pub price: f64,
    pub material: String,
    pub color: String,
}

/// A category and quantity the user asked for, derived from their message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesiredCategory {
    pub category: String,
    pub quantity: u32,
}

/// Outcome of a budget-constrained selection run.
///
/// `total_cost_idr` is the selection's cumulative cost converted back to IDR.
/// `messages` are Indonesian-language diagnostics for the response composer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectionResult {
    pub selected: Vec<FurnitureItem>,
    pub total_cost_idr: f64,
    pub messages: Vec<String>,
}

/// Role in a chat conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

//! The chat endpoint: catalog fetch -> prompt parse -> allocation -> reply.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa::OpenApi;

use spacely_core::allocator::select_furniture;
use spacely_core::catalog::{load_catalog, unique_categories};
use spacely_core::compose::generate_reply;
use spacely_core::llm::LlmError;
use spacely_core::prompt::parse_user_prompt;
use spacely_core::types::{ChatMessage, Role, SelectionResult};

use crate::api::ErrorResponse;
use crate::models::{ChatRequest, ChatResponse, ChatTurn, Recommendation};
use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(chat),
    components(schemas(ChatRequest, ChatResponse, ChatTurn, Recommendation))
)]
pub struct ApiDoc;

#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply with recommendations", body = ChatResponse),
        (status = 400, description = "Missing message", body = ErrorResponse),
        (status = 402, description = "AI service requires billing top-up", body = ErrorResponse),
        (status = 429, description = "AI service rate limited", body = ErrorResponse),
        (status = 502, description = "Catalog source unreachable", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let message = match request.message {
        Some(m) if !m.trim().is_empty() => m,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Message is required".to_string(),
                }),
            )
                .into_response()
        }
    };

    tracing::info!(len = message.len(), "processing chat message");

    let items = match load_catalog(state.http.as_ref(), &state.catalog_url).await {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch furniture catalog");
            return (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Failed to fetch furniture data".to_string(),
                }),
            )
                .into_response();
        }
    };
    tracing::debug!(items = items.len(), "catalog loaded");

    let categories = unique_categories(&items);

    let (budget, selection) = match parse_user_prompt(&message, &categories) {
        Ok(parsed) => {
            let selection = select_furniture(&items, parsed.budget, &parsed.desired);
            tracing::debug!(
                budget = parsed.budget,
                requested = parsed.desired.len(),
                selected = selection.selected.len(),
                "allocation complete"
            );
            (parsed.budget, selection)
        }
        // No budget in the message: answer from persona guidance alone.
        Err(e) => (
            0,
            SelectionResult {
                messages: vec![e.to_string()],
                ..Default::default()
            },
        ),
    };

    let Some(provider) = state.ai.as_ref() else {
        return llm_error_response(LlmError::NotConfigured(
            "no chat provider configured".to_string(),
        ));
    };

    let history: Vec<ChatMessage> = request
        .conversation_history
        .iter()
        .map(to_chat_message)
        .collect();

    let reply = match generate_reply(provider.as_ref(), &message, &selection, budget, &history).await
    {
        Ok(reply) => reply,
        Err(e) => return llm_error_response(e),
    };

    let recommendations: Vec<Recommendation> =
        selection.selected.iter().map(Recommendation::from).collect();

    (
        StatusCode::OK,
        Json(ChatResponse {
            response: reply,
            recommendations,
            total_cost_idr: selection.total_cost_idr,
            budget,
        }),
    )
        .into_response()
}

/// Map a wire turn to a typed chat message.
fn to_chat_message(turn: &ChatTurn) -> ChatMessage {
    let role = match turn.role.as_str() {
        "assistant" => Role::Assistant,
        "system" => Role::System,
        _ => Role::User,
    };
    ChatMessage {
        role,
        content: turn.content.clone(),
    }
}

/// Convert an LLM failure to a status-appropriate JSON error.
fn llm_error_response(error: LlmError) -> axum::response::Response {
    tracing::error!(error = ?error, "chat completion failed");
    let status = match &error {
        LlmError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        LlmError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_roles_become_user_turns() {
        let turn = ChatTurn {
            role: "bot".to_string(),
            content: "halo".to_string(),
        };
        assert_eq!(to_chat_message(&turn).role, Role::User);

        let turn = ChatTurn {
            role: "assistant".to_string(),
            content: "halo".to_string(),
        };
        assert_eq!(to_chat_message(&turn).role, Role::Assistant);
    }

    #[test]
    fn llm_errors_map_to_specific_statuses() {
        assert_eq!(
            llm_error_response(LlmError::RateLimited).status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            llm_error_response(LlmError::PaymentRequired).status(),
            StatusCode::PAYMENT_REQUIRED
        );
        assert_eq!(
            llm_error_response(LlmError::NotConfigured("no key".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            llm_error_response(LlmError::RequestFailed("io".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

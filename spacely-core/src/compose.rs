//! Response composition.
//!
//! Wraps an allocation result in the assistant's system prompt, appends a
//! bounded window of conversation history and the new user message, and
//! delegates the wording to the configured chat provider.

use crate::currency::{format_rupiah, usd_to_idr};
use crate::llm::{ChatProvider, LlmError};
use crate::types::{ChatMessage, SelectionResult};

/// How many prior conversation turns are forwarded to the model.
pub const HISTORY_WINDOW: usize = 6;

/// Fixed persona and formatting instructions, in Indonesian.
const PERSONA: &str = "\
Kamu adalah Spacely AI, asisten furniture Indonesia yang ramah dan membantu.

TUGAS UTAMA:
1. Bantu pengguna menemukan furniture sesuai budget dan kebutuhan
2. Jika ada rekomendasi dari sistem, presentasikan dengan menarik
3. Berikan saran tambahan yang relevan
4. Gunakan bahasa Indonesia yang natural dan ramah

FORMAT REKOMENDASI:
- Tampilkan setiap item dengan emoji yang sesuai (\u{1fab5} table, \u{1f4ba} chair, \u{1f6cb}\u{fe0f} sofa, \u{1f5c4}\u{fe0f} desk, \u{1f6cf}\u{fe0f} bed)
- Sertakan harga, material, dan warna
- Berikan ringkasan total dan sisa budget";

/// Render the system-context block describing the allocation outcome.
fn build_context(selection: &SelectionResult, budget_idr: u64) -> String {
    if selection.selected.is_empty() {
        return format!(
            "Pengguna tidak menyebutkan budget spesifik atau kategori furniture. {}",
            selection.messages.join("; ")
        );
    }

    let remaining = budget_idr as f64 - selection.total_cost_idr;

    let lines: Vec<String> = selection
        .selected
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                "{}. {} - {} (Material: {}, Warna: {})",
                i + 1,
                item.category,
                format_rupiah(usd_to_idr(item.price)),
                item.material,
                item.color
            )
        })
        .collect();

    format!(
        "Berdasarkan algoritma rekomendasi, berikut hasil pencarian furniture:\n\
         Budget pengguna: {}\n\n\
         Furniture yang direkomendasikan:\n{}\n\n\
         Total biaya: {}\n\
         Sisa budget: {}\n\n\
         Catatan sistem: {}",
        format_rupiah(budget_idr as f64),
        lines.join("\n"),
        format_rupiah(selection.total_cost_idr),
        format_rupiah(remaining),
        selection.messages.join("; ")
    )
}

/// Assemble the full message sequence for one chat turn: system prompt,
/// the last [`HISTORY_WINDOW`] history turns, then the user message.
pub fn build_messages(
    user_message: &str,
    selection: &SelectionResult,
    budget_idr: u64,
    history: &[ChatMessage],
) -> Vec<ChatMessage> {
    let system_prompt = format!("{}\n\n{}", PERSONA, build_context(selection, budget_idr));

    let window_start = history.len().saturating_sub(HISTORY_WINDOW);

    let mut messages = Vec::with_capacity(2 + HISTORY_WINDOW);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend(history[window_start..].iter().cloned());
    messages.push(ChatMessage::user(user_message));
    messages
}

/// Compose the chat turn and delegate wording to the provider.
///
/// One outbound call, no retry: a failed attempt surfaces immediately.
pub async fn generate_reply(
    provider: &dyn ChatProvider,
    user_message: &str,
    selection: &SelectionResult,
    budget_idr: u64,
    history: &[ChatMessage],
) -> Result<String, LlmError> {
    let messages = build_messages(user_message, selection, budget_idr, history);
    tracing::debug!(
        provider = provider.provider_name(),
        model = provider.model_name(),
        messages = messages.len(),
        "requesting completion"
    );
    provider.complete(&messages).await
}

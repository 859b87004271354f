//! Greedy budget-constrained furniture selection.
//!
//! Works on a shared remaining pool: once an item instance is selected it is
//! removed and can never be picked again, even by a later request for the
//! same category. Selection is cheapest-first within a category, so the scan
//! can stop as soon as one item no longer fits the remaining budget.

use crate::currency::{idr_to_usd, usd_to_idr};
use crate::types::{DesiredCategory, FurnitureItem, SelectionResult};

/// Categories tried, in order, when the user named none.
pub const DEFAULT_CATEGORIES: &[&str] = &["table", "sofa", "chair", "desk", "bed"];

/// Select furniture for a budget (IDR) and a list of requested categories.
///
/// With an empty request list, picks the single cheapest item from each
/// default category that still fits. Otherwise processes requests in parse
/// order, taking up to the requested quantity cheapest-first. The total never
/// exceeds the budget; shortfalls are reported through `messages`.
pub fn select_furniture(
    items: &[FurnitureItem],
    budget_idr: u64,
    requested: &[DesiredCategory],
) -> SelectionResult {
    let budget_usd = idr_to_usd(budget_idr as f64);
    let mut remaining: Vec<FurnitureItem> = items.to_vec();
    let mut selected: Vec<FurnitureItem> = Vec::new();
    let mut total_usd = 0.0;
    let mut messages: Vec<String> = Vec::new();

    if requested.is_empty() {
        for cat in DEFAULT_CATEGORIES {
            let Some(idx) = cheapest_in_category(&remaining, cat) else {
                continue;
            };
            if total_usd + remaining[idx].price <= budget_usd {
                let item = remaining.remove(idx);
                total_usd += item.price;
                selected.push(item);
            }
        }

        if selected.is_empty() {
            messages.push("Budget tidak mencukupi untuk membeli furniture apa pun.".to_string());
        }

        return SelectionResult {
            selected,
            total_cost_idr: usd_to_idr(total_usd),
            messages,
        };
    }

    for req in requested {
        let mut indices: Vec<usize> = remaining
            .iter()
            .enumerate()
            .filter(|(_, item)| item.category.eq_ignore_ascii_case(&req.category))
            .map(|(i, _)| i)
            .collect();

        if indices.is_empty() {
            messages.push(format!("Tidak ada item untuk kategori {}", req.category));
            continue;
        }

        indices.sort_by(|&a, &b| remaining[a].price.total_cmp(&remaining[b].price));

        let mut taken: Vec<usize> = Vec::new();
        for &idx in &indices {
            if taken.len() as u32 >= req.quantity {
                break;
            }
            // Ascending prices: the first item over budget ends the category.
            if total_usd + remaining[idx].price > budget_usd {
                break;
            }
            total_usd += remaining[idx].price;
            selected.push(remaining[idx].clone());
            taken.push(idx);
        }

        taken.sort_unstable();
        for idx in taken.iter().rev() {
            remaining.remove(*idx);
        }

        if !taken.is_empty() {
            messages.push(format!(
                "Menampilkan {} item untuk kategori '{}'.",
                taken.len(),
                req.category
            ));
        }

        tracing::debug!(
            category = %req.category,
            requested = req.quantity,
            fulfilled = taken.len(),
            "allocated category"
        );
    }

    SelectionResult {
        selected,
        total_cost_idr: usd_to_idr(total_usd),
        messages,
    }
}

/// Index of the cheapest remaining item in a category, if any.
fn cheapest_in_category(remaining: &[FurnitureItem], category: &str) -> Option<usize> {
    remaining
        .iter()
        .enumerate()
        .filter(|(_, item)| item.category.eq_ignore_ascii_case(category))
        .min_by(|(_, a), (_, b)| a.price.total_cmp(&b.price))
        .map(|(i, _)| i)
}

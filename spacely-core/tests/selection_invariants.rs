//! Invariant checks for the greedy allocator across varied inputs.

use spacely_core::allocator::select_furniture;
use spacely_core::currency::USD_TO_IDR;
use spacely_core::types::{DesiredCategory, FurnitureItem};

fn item(category: &str, price: f64, color: &str) -> FurnitureItem {
    FurnitureItem {
        category: category.to_string(),
        price,
        material: "wood".to_string(),
        color: color.to_string(),
    }
}

fn catalog() -> Vec<FurnitureItem> {
    vec![
        item("chair", 10.0, "red"),
        item("chair", 10.0, "blue"),
        item("chair", 35.0, "green"),
        item("sofa", 120.0, "grey"),
        item("sofa", 180.0, "black"),
        item("table", 60.0, "clear"),
        item("bed", 240.0, "oak"),
        item("desk", 90.0, "white"),
    ]
}

fn want(category: &str, quantity: u32) -> DesiredCategory {
    DesiredCategory {
        category: category.to_string(),
        quantity,
    }
}

#[test]
fn total_cost_never_exceeds_budget() {
    let items = catalog();
    for budget_idr in [0u64, 100_000, 500_000, 1_000_000, 3_000_000, 16_000_000] {
        for requested in [
            vec![],
            vec![want("chair", 3)],
            vec![want("sofa", 2), want("bed", 1)],
            vec![want("chair", 10), want("desk", 1), want("table", 2)],
        ] {
            let result = select_furniture(&items, budget_idr, &requested);
            assert!(
                result.total_cost_idr <= budget_idr as f64,
                "budget {} exceeded: {}",
                budget_idr,
                result.total_cost_idr
            );
        }
    }
}

#[test]
fn total_matches_sum_of_selected_prices() {
    let items = catalog();
    let result = select_furniture(&items, 16_000_000, &[want("chair", 2), want("sofa", 1)]);
    let sum_usd: f64 = result.selected.iter().map(|i| i.price).sum();
    assert_eq!(result.total_cost_idr, sum_usd * USD_TO_IDR);
}

#[test]
fn no_instance_is_selected_twice() {
    let items = catalog();
    // Over-request everything; distinguishable instances by (category, color).
    let requested = vec![
        want("chair", 5),
        want("chair", 5),
        want("sofa", 5),
        want("table", 5),
        want("bed", 5),
        want("desk", 5),
    ];
    let result = select_furniture(&items, 160_000_000, &requested);

    assert_eq!(result.selected.len(), items.len());
    let mut keys: Vec<(String, String, String)> = result
        .selected
        .iter()
        .map(|i| (i.category.clone(), i.color.clone(), i.price.to_string()))
        .collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), items.len());
}

#[test]
fn requests_are_processed_in_parse_order() {
    let items = catalog();
    // Sofa first exhausts the budget before the chair request runs.
    let budget = (130.0 * USD_TO_IDR) as u64;
    let result = select_furniture(&items, budget, &[want("sofa", 1), want("chair", 1)]);

    assert_eq!(result.selected[0].category, "sofa");
    assert_eq!(result.selected[1].category, "chair");
    assert_eq!(result.selected[1].price, 10.0);
}

#[test]
fn zero_budget_selects_nothing() {
    let items = catalog();
    let result = select_furniture(&items, 0, &[want("chair", 1)]);
    assert!(result.selected.is_empty());
    assert_eq!(result.total_cost_idr, 0.0);

    let result = select_furniture(&items, 0, &[]);
    assert!(result.selected.is_empty());
    assert_eq!(
        result.messages,
        vec!["Budget tidak mencukupi untuk membeli furniture apa pun."]
    );
}

#[test]
fn empty_catalog_reports_every_requested_category() {
    let result = select_furniture(&[], 16_000_000, &[want("sofa", 1), want("chair", 2)]);
    assert!(result.selected.is_empty());
    assert_eq!(
        result.messages,
        vec![
            "Tidak ada item untuk kategori sofa",
            "Tidak ada item untuk kategori chair"
        ]
    );
}

//! Catalog loading and parsing.
//!
//! The catalog is a plain comma-separated file published externally: a header
//! row followed by one furniture record per line. The file carries no quoting
//! or escaping, so parsing is a straight positional split. Rows without a
//! usable category or price are dropped rather than failing the whole load.

use crate::error::FetchError;
use crate::http::HttpClient;
use crate::types::FurnitureItem;

/// Published catalog CSV. Overridable via server configuration.
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/Ertyuuu55/Spacely2/main/Furniture%20(1).csv";

/// Fetch the catalog and parse it into furniture items.
///
/// There is no fallback catalog: an unreachable source or non-success status
/// is fatal for the request.
pub async fn load_catalog(
    client: &dyn HttpClient,
    url: &str,
) -> Result<Vec<FurnitureItem>, FetchError> {
    let body = client.fetch_text(url).await?;
    let items = parse_catalog(&body);
    tracing::debug!(count = items.len(), "loaded furniture catalog");
    Ok(items)
}

/// Parse CSV text into furniture items.
///
/// The first line is the header row; header tokens are trimmed and lowercased
/// to field names. Each subsequent line maps positionally to the headers. The
/// `price` field parses as a float defaulting to 0 on failure; other fields
/// default to empty when the row is short. Rows lacking a category or a
/// non-zero price are dropped.
pub fn parse_catalog(csv: &str) -> Vec<FurnitureItem> {
    let mut lines = csv.trim().lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };

    let headers: Vec<String> = header_line
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();

    lines
        .filter_map(|line| {
            let values: Vec<&str> = line.split(',').map(str::trim).collect();

            let mut item = FurnitureItem {
                category: String::new(),
                price: 0.0,
                material: String::new(),
                color: String::new(),
            };

            for (i, header) in headers.iter().enumerate() {
                let value = values.get(i).copied().unwrap_or("");
                match header.as_str() {
                    "category" => item.category = value.to_string(),
                    "price" => item.price = value.parse().unwrap_or(0.0),
                    "material" => item.material = value.to_string(),
                    "color" => item.color = value.to_string(),
                    _ => {}
                }
            }

            if item.category.is_empty() || item.price == 0.0 {
                None
            } else {
                Some(item)
            }
        })
        .collect()
}

/// Distinct lowercased category names in first-appearance order.
///
/// These feed the prompt interpreter as its known-category vocabulary.
pub fn unique_categories(items: &[FurnitureItem]) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        let cat = item.category.to_lowercase();
        if !seen.contains(&cat) {
            seen.push(cat);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
category,price,material,color
sofa,120.5,fabric,grey
chair,45,wood,brown
,99,metal,black
table,abc,glass,clear
desk,80,wood,white";

    #[test]
    fn parses_valid_rows() {
        let items = parse_catalog(SAMPLE);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].category, "sofa");
        assert_eq!(items[0].price, 120.5);
        assert_eq!(items[1].material, "wood");
        assert_eq!(items[2].category, "desk");
    }

    #[test]
    fn drops_rows_without_category_or_price() {
        let items = parse_catalog(SAMPLE);
        assert!(items.iter().all(|i| !i.category.is_empty()));
        // "table,abc" has an unparseable price and is dropped
        assert!(items.iter().all(|i| i.price > 0.0));
        assert!(!items.iter().any(|i| i.category == "table"));
    }

    #[test]
    fn header_order_does_not_matter() {
        let csv = "price,color,category,material\n10,red,stool,plastic";
        let items = parse_catalog(csv);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, "stool");
        assert_eq!(items[0].price, 10.0);
        assert_eq!(items[0].color, "red");
        assert_eq!(items[0].material, "plastic");
    }

    #[test]
    fn short_rows_default_missing_fields() {
        let csv = "category,price,material,color\nbed,200";
        let items = parse_catalog(csv);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].material, "");
        assert_eq!(items[0].color, "");
    }

    #[test]
    fn headers_are_case_normalized() {
        let csv = "Category,Price,Material,Color\nsofa,99,fabric,blue";
        let items = parse_catalog(csv);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price, 99.0);
    }

    #[test]
    fn empty_input_yields_no_items() {
        assert!(parse_catalog("").is_empty());
        assert!(parse_catalog("category,price,material,color").is_empty());
    }

    #[test]
    fn categories_deduplicate_in_first_appearance_order() {
        let csv = "category,price\nSofa,10\nchair,20\nsofa,30\nBed,40";
        let items = parse_catalog(csv);
        assert_eq!(unique_categories(&items), vec!["sofa", "chair", "bed"]);
    }
}

//! Currency conversion and formatting helpers.
//!
//! Catalog prices are in USD; user budgets and all user-facing amounts are in
//! Indonesian rupiah. The rate is fixed rather than live, matching what the
//! site quotes.

/// Fixed USD → IDR exchange rate.
pub const USD_TO_IDR: f64 = 16_000.0;

/// Convert a USD amount to IDR.
pub fn usd_to_idr(usd: f64) -> f64 {
    usd * USD_TO_IDR
}

/// Convert an IDR amount to USD.
pub fn idr_to_usd(idr: f64) -> f64 {
    idr / USD_TO_IDR
}

/// Format an amount as rupiah with id-ID digit grouping, e.g. "Rp5.000.000".
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("Rp{}{}", sign, grouped)
}

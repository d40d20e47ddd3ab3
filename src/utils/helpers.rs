//! Helper functions and utilities
//!
//! Text formatting and pagination arithmetic shared by the inline handler.

/// Title-case a string: uppercase the first letter of each whitespace-separated
/// word and lowercase the rest.
///
/// Taxon names and ranks arrive from the API in lowercase ("quercus alba",
/// "species") and are displayed title-cased ("Quercus Alba", "Species").
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a Telegram inline-query offset into a 1-based page number.
///
/// The offset is an opaque token the bot itself produced on the previous
/// answer, so it is the page number to fetch directly. An empty or
/// non-numeric offset means the first page.
pub fn parse_page(offset: &str) -> u32 {
    offset.trim().parse::<u32>().ok().filter(|&p| p >= 1).unwrap_or(1)
}

/// Compute the next page number, if any.
///
/// Returns `None` once the current page reaches or passes the end of the
/// result set (`page * per_page >= total_results`), otherwise `page + 1`.
pub fn next_page(page: u32, per_page: u32, total_results: u64) -> Option<u32> {
    if u64::from(page) * u64::from(per_page) >= total_results {
        None
    } else {
        Some(page + 1)
    }
}

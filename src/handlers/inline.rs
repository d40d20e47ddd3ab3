//! Inline search handler
//!
//! Handles Telegram inline queries by proxying the query text to the
//! iNaturalist taxa API and reshaping the results into inline articles.
//!
//! Offset convention: the inline-query offset is the 1-based page number to
//! fetch, and `next_offset` carries the next page number. An empty offset
//! means page 1; an empty `next_offset` tells Telegram there are no further
//! pages.

use teloxide::{
    prelude::*,
    types::{
        InlineQuery, InlineQueryResult, InlineQueryResultArticle, InputMessageContent,
        InputMessageContentText,
    },
    Bot,
};
use tracing::{debug, warn};
use url::Url;

use crate::models::Taxon;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::helpers::{next_page, parse_page, title_case};
use crate::utils::logging::log_inline_search;

/// Handle an inline query.
///
/// An empty query produces no reply at all. Otherwise the taxa API is called
/// exactly once and the answer carries the mapped articles plus the computed
/// pagination offset.
pub async fn handle_inline_query(
    bot: Bot,
    query: InlineQuery,
    services: ServiceFactory,
) -> Result<()> {
    if query.query.is_empty() {
        debug!(query_id = %query.id, "Empty inline query, ignoring");
        return Ok(());
    }

    let page = parse_page(&query.offset);
    let response = services.taxa_service.search(&query.query, page).await?;

    let answers: Vec<InlineQueryResult> = response.results.iter().map(taxon_to_article).collect();

    let next_offset = next_page(page, services.taxa_service.per_page(), response.total_results)
        .map(|next| next.to_string())
        .unwrap_or_default();

    log_inline_search(query.from.id.0, &query.query, page, answers.len());

    bot.answer_inline_query(query.id, answers)
        .next_offset(next_offset)
        .await?;

    Ok(())
}

/// Map a taxon to an inline article: title and message body are the
/// title-cased name, the description is the title-cased rank, and the
/// thumbnail is present iff the taxon has a default photo.
fn taxon_to_article(taxon: &Taxon) -> InlineQueryResult {
    let title = title_case(&taxon.name);
    let content = InputMessageContent::Text(InputMessageContentText::new(title.clone()));

    let mut article = InlineQueryResultArticle::new(taxon.id.to_string(), title, content)
        .description(title_case(&taxon.rank));

    if let Some(photo_url) = taxon.thumbnail_url() {
        match Url::parse(photo_url) {
            Ok(url) => article = article.thumbnail_url(url),
            Err(e) => {
                warn!(taxon_id = taxon.id, url = photo_url, error = %e, "Invalid photo URL, skipping thumbnail");
            }
        }
    }

    InlineQueryResult::Article(article)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaxonPhoto;

    fn taxon(id: u64, name: &str, rank: &str, photo: Option<&str>) -> Taxon {
        Taxon {
            id,
            name: name.to_string(),
            rank: rank.to_string(),
            default_photo: photo.map(|url| TaxonPhoto {
                url: url.to_string(),
            }),
        }
    }

    fn unwrap_article(result: InlineQueryResult) -> InlineQueryResultArticle {
        match result {
            InlineQueryResult::Article(article) => article,
            other => panic!("expected an article, got {:?}", other),
        }
    }

    #[test]
    fn test_article_title_and_description_are_title_cased() {
        let article = unwrap_article(taxon_to_article(&taxon(
            47851,
            "quercus alba",
            "species",
            None,
        )));

        assert_eq!(article.id, "47851");
        assert_eq!(article.title, "Quercus Alba");
        assert_eq!(article.description.as_deref(), Some("Species"));
    }

    #[test]
    fn test_article_body_matches_title() {
        let article = unwrap_article(taxon_to_article(&taxon(1, "animalia", "kingdom", None)));

        match article.input_message_content {
            InputMessageContent::Text(text) => {
                assert_eq!(text.message_text, "Animalia");
            }
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_article_thumbnail_present_iff_photo() {
        let with_photo = unwrap_article(taxon_to_article(&taxon(
            2,
            "quercus",
            "genus",
            Some("https://static.inaturalist.org/photos/2/square.jpg"),
        )));
        assert_eq!(
            with_photo.thumbnail_url.as_ref().map(Url::as_str),
            Some("https://static.inaturalist.org/photos/2/square.jpg")
        );

        let without_photo = unwrap_article(taxon_to_article(&taxon(3, "fungi", "kingdom", None)));
        assert!(without_photo.thumbnail_url.is_none());
    }

    #[test]
    fn test_invalid_photo_url_drops_thumbnail() {
        let article = unwrap_article(taxon_to_article(&taxon(
            4,
            "plantae",
            "kingdom",
            Some("not a url"),
        )));
        assert!(article.thumbnail_url.is_none());
    }

    #[test]
    fn test_next_offset_examples() {
        // 5 of 12 results on page 1 -> next page is 2
        assert_eq!(next_page(1, 5, 12), Some(2));
        // page 3 of 12 results: 3 * 5 = 15 >= 12 -> exhausted
        assert_eq!(next_page(3, 5, 12), None);
    }
}

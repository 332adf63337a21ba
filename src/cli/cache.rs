use tabled::Table;

use crate::{error, info, management::LinkCacheManager, types::CachedLinkTableRow, warning};

/// Lists cached video links, optionally filtered by a case-insensitive
/// substring of the key.
pub async fn cache(search: Option<String>) {
    let cache = match LinkCacheManager::load_default().await {
        Ok(cache) => cache,
        Err(e) => error!("Failed to load link cache. Err: {}", e),
    };

    let mut entries: Vec<(String, String)> = cache.all().await.into_iter().collect();
    info!(
        "{} cached links in {}",
        entries.len(),
        cache.path().display()
    );

    entries.sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()));

    if let Some(term) = search {
        let term = term.to_lowercase();
        entries.retain(|(key, _)| key.to_lowercase().contains(&term));
    }

    if entries.is_empty() {
        warning!("No cached links to show");
        return;
    }

    let rows: Vec<CachedLinkTableRow> = entries
        .into_iter()
        .map(|(key, link)| CachedLinkTableRow { key, link })
        .collect();
    println!("{}", Table::new(rows));
}

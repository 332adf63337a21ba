use std::{collections::HashMap, path::Path};

use crate::{error::CacheError, types::OverrideEntry};

/// Known-good links that always win over the cache and live search.
const BUILTIN_OVERRIDES: &[(&str, &str, &str)] = &[(
    "NewJeans",
    "Hype Boy",
    "https://www.youtube.com/watch?v=MwIZz8zadqo",
)];

/// Exact, case-sensitive (artist, track) → URL table. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    links: HashMap<(String, String), String>,
}

impl OverrideTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (artist, track, url) in BUILTIN_OVERRIDES {
            table.insert(*artist, *track, *url);
        }
        table
    }

    /// Built-in table extended with the entries of a JSON override file.
    /// File entries replace built-ins for the same pair.
    pub async fn load_with_file(path: &Path) -> Result<Self, CacheError> {
        let content = async_fs::read_to_string(path).await?;
        let entries: Vec<OverrideEntry> = serde_json::from_str(&content)?;

        let mut table = Self::builtin();
        let added = entries.len();
        for entry in entries {
            table.insert(entry.artist, entry.track, entry.url);
        }
        tracing::info!(path = %path.display(), added, total = table.len(), "override file loaded");
        Ok(table)
    }

    pub fn insert(
        &mut self,
        artist: impl Into<String>,
        track: impl Into<String>,
        url: impl Into<String>,
    ) -> &mut Self {
        self.links
            .insert((artist.into(), track.into()), url.into());
        self
    }

    pub fn lookup(&self, artist: &str, track: &str) -> Option<&str> {
        self.links
            .get(&(artist.to_string(), track.to_string()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

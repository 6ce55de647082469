use async_trait::async_trait;
use lexa_core::client::url_with_segment;
use lexa_core::{LookupError, ProviderClient, ProviderError, SearchTerm};
use lexa_types::{Suggestion, WordEntry};
use serde_json::Value;

/// Resolves a committed search term to a dictionary entry
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn lookup(&self, term: &SearchTerm) -> Result<WordEntry, LookupError>;
}

/// Autocomplete provider
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggest(&self, prefix: &str, max: usize) -> Result<Vec<Suggestion>, ProviderError>;
}

/// dictionaryapi.dev style endpoint: `GET {base}/{word}` returning an array of entries
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: ProviderClient,
    base_url: String,
}

impl FreeDictionaryClient {
    pub fn new(client: ProviderClient, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl WordSource for FreeDictionaryClient {
    async fn lookup(&self, term: &SearchTerm) -> Result<WordEntry, LookupError> {
        let url = url_with_segment(&self.base_url, term.as_str())?;
        tracing::debug!("Dictionary lookup: {}", url);

        let value = match self.client.get_json(url, &[]).await {
            Ok(value) => value,
            // Unknown words come back as 404 with an explanatory object
            Err(e) if e.is_not_found() => return Err(LookupError::NotFound(term.to_string())),
            Err(e) => return Err(e.into()),
        };

        first_entry(value).ok_or_else(|| LookupError::NotFound(term.to_string()))
    }
}

/// First element of an entry array; any other shape counts as no data
pub fn first_entry(value: Value) -> Option<WordEntry> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .next()
            .and_then(|item| serde_json::from_value(item).ok()),
        _ => None,
    }
}

/// Datamuse `/sug` endpoint: `GET {base}?s=<prefix>&max=<n>`
#[derive(Clone)]
pub struct DatamuseClient {
    client: ProviderClient,
    base_url: String,
}

impl DatamuseClient {
    pub fn new(client: ProviderClient, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl SuggestionSource for DatamuseClient {
    async fn suggest(&self, prefix: &str, max: usize) -> Result<Vec<Suggestion>, ProviderError> {
        let max_param = max.to_string();
        let value = self
            .client
            .get_json(&self.base_url, &[("s", prefix), ("max", &max_param)])
            .await?;

        parse_suggestions(value, max)
    }
}

pub fn parse_suggestions(value: Value, max: usize) -> Result<Vec<Suggestion>, ProviderError> {
    let Value::Array(items) = value else {
        return Err(ProviderError::Malformed(
            "suggestions are not an array".to_string(),
        ));
    };

    Ok(items
        .iter()
        .filter_map(|item| item.get("word").and_then(Value::as_str))
        .map(|word| Suggestion {
            word: word.to_string(),
        })
        .take(max)
        .collect())
}

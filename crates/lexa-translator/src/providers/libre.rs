use async_trait::async_trait;
use lexa_core::ProviderClient;
use lexa_core::client::host_of;
use lexa_types::Language;
use serde::Serialize;
use serde_json::Value;

use crate::{ProviderMetadata, TranslateError, Translation, Translator};

#[derive(Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

/// LibreTranslate-compatible instance
#[derive(Clone)]
pub struct LibreTranslate {
    client: ProviderClient,
    endpoint: String,
    name: String,
}

impl LibreTranslate {
    /// Named after the endpoint host so mirrors can be told apart
    pub fn new(client: ProviderClient, endpoint: String) -> Self {
        let name = match host_of(&endpoint) {
            Some(host) => format!("libretranslate ({host})"),
            None => "libretranslate".to_string(),
        };
        Self {
            client,
            endpoint,
            name,
        }
    }
}

#[async_trait]
impl Translator for LibreTranslate {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<Translation, TranslateError> {
        let request = LibreRequest {
            q: text,
            source: from.code(),
            target: to.code(),
            format: "text",
        };

        let json = self.client.post_json(&self.endpoint, &request).await?;

        let translated_text = json
            .get("translatedText")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| TranslateError::ApiError("No translatedText in response".to_string()))?;

        Ok(Translation {
            text: translated_text.to_string(),
            from,
            to,
            provider: self.metadata().name,
            confidence: None,
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: self.name.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

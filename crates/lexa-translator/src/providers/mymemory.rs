use async_trait::async_trait;
use lexa_core::ProviderClient;
use lexa_types::Language;
use serde_json::Value;

use crate::{ProviderMetadata, TranslateError, Translation, Translator};

/// MyMemory public API; nests its result under `responseData`
#[derive(Clone)]
pub struct MyMemory {
    client: ProviderClient,
    endpoint: String,
}

impl MyMemory {
    pub fn new(client: ProviderClient, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl Translator for MyMemory {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<Translation, TranslateError> {
        let langpair = format!("{}|{}", from.code(), to.code());
        let json = self
            .client
            .get_json(&self.endpoint, &[("q", text), ("langpair", &langpair)])
            .await?;

        // Quota and language errors arrive with HTTP 200
        if let Some(status) = response_status(&json)
            && status != 200
        {
            return Err(TranslateError::ApiError(format!("responseStatus {status}")));
        }

        let data = &json["responseData"];
        let translated_text = data["translatedText"]
            .as_str()
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                TranslateError::ApiError("No responseData.translatedText in response".to_string())
            })?;

        Ok(Translation {
            text: translated_text.to_string(),
            from,
            to,
            provider: self.metadata().name,
            confidence: data["match"].as_f64().map(|m| m as f32),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "mymemory".to_string(),
            endpoint: self.endpoint.clone(),
        }
    }
}

fn response_status(json: &Value) -> Option<u64> {
    match &json["responseStatus"] {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

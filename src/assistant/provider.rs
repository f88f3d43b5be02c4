use std::time::Duration;

use anyhow::Result;
use log::{debug, info};
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};

/// Salon facts sent ahead of every customer message so the model answers
/// with the real services, prices, hours, and contact details.
const SYSTEM_PREAMBLE: &str = "You are the friendly assistant of Femina Beauty Impression, \
    a beauty salon at 21-23 Woodgrange Road, London E7 8BA (phone +44 7368 594210), open \
    Monday to Saturday 11:00 AM to 6:00 PM. Services and prices: threading from £3 \
    (full face £15); face waxing from £4 (full face £18); body waxing from £8 (full body \
    except bikini £60); pedicure £25; manicure £20; eyelash sets from £18; facials £15-£30; \
    head massage £15; henna from £5; hair trimming £7; party makeup from £30; bridal makeup \
    from £150. Answer customer questions warmly and concisely, and suggest calling or \
    visiting to book.";

/// Hard cap on the upstream round-trip so the caller reliably falls back
/// to the canned responder instead of hanging on a stuck provider.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// Client for an OpenAI-compatible chat completions endpoint.
pub struct ChatProvider {
    api_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl ChatProvider {
    pub fn new(api_url: &str, api_key: &str, model: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
        })
    }

    pub async fn complete(&self, message: &str) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.api_url);

        let messages = vec![
            Message {
                role: "system",
                content: SYSTEM_PREAMBLE.to_string(),
            },
            Message {
                role: "user",
                content: message.to_string(),
            },
        ];

        let payload = json!({
            "model": self.model,
            "messages": messages,
        });
        debug!("Chat provider payload: {}", payload);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "chat provider returned {}: {}",
                status,
                error_text
            ));
        }

        let response_json: Value = response.json().await?;
        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| anyhow::anyhow!("malformed chat provider response"))?;

        info!("Chat provider reply length: {} characters", content.len());
        Ok(content.to_string())
    }
}

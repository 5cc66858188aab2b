use ngo_connect_config::PushSettings;
use serde::Serialize;
use tracing::{debug, warn};

/// Expo's gateway caps a single request at 100 messages.
const CHUNK_SIZE: usize = 100;

#[derive(Debug, Serialize)]
pub struct PushMessage {
    pub to: String,
    pub sound: String,
    pub title: String,
    pub body: String,
    pub data: PushData,
}

#[derive(Debug, Serialize)]
pub struct PushData {
    pub screen: String,
}

/// Only Expo-issued tokens are dispatchable; anything else is skipped.
pub fn is_expo_push_token(token: &str) -> bool {
    (token.starts_with("ExponentPushToken[") || token.starts_with("ExpoPushToken["))
        && token.ends_with(']')
}

/// Client for the Expo push gateway. Fan-out is best-effort: a failed chunk
/// is logged and the remaining chunks are still sent.
pub struct PushService {
    client: reqwest::Client,
    endpoint: String,
    enabled: bool,
}

impl PushService {
    pub fn new(settings: &PushSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: settings.endpoint.clone(),
            enabled: settings.enabled,
        }
    }

    /// Notify the given tokens about a new nearby help request. Returns the
    /// number of messages actually handed to the gateway.
    pub async fn notify_new_help_request(&self, tokens: Vec<String>, body: &str) -> usize {
        if !self.enabled {
            debug!("Push dispatch disabled, skipping {} token(s)", tokens.len());
            return 0;
        }

        let messages: Vec<PushMessage> = tokens
            .iter()
            .filter(|t| is_expo_push_token(t))
            .map(|token| PushMessage {
                to: token.clone(),
                sound: "default".to_string(),
                title: "New Help Request".to_string(),
                body: body.to_string(),
                data: PushData {
                    screen: "HelpRequests".to_string(),
                },
            })
            .collect();

        let mut sent = 0;
        for chunk in messages.chunks(CHUNK_SIZE) {
            match self.send_chunk(chunk).await {
                Ok(()) => sent += chunk.len(),
                Err(e) => warn!(error = %e, "Push chunk failed"),
            }
        }
        sent
    }

    async fn send_chunk(&self, chunk: &[PushMessage]) -> anyhow::Result<()> {
        self.client
            .post(&self.endpoint)
            .json(chunk)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

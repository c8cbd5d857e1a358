//! Wordbook chat endpoint.

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::services::ServiceId;
use crate::net::types::wordbook::{ChatRequest, ChatResponse};
use crate::util::wordbook_parse::{Command, Reply, classify_reply};

/// Send a raw chat message and return the bot's reply text.
pub async fn chat(client: &ApiClient, message: &str) -> Result<String, ApiError> {
    let response: ChatResponse = client
        .post(ServiceId::Wordbook, "/wordbook/chat", &ChatRequest { message: message.to_owned() })
        .await?;
    Ok(response.reply)
}

/// Send a command and classify the reply.
pub async fn send(client: &ApiClient, command: &Command) -> Result<Reply, ApiError> {
    let reply = chat(client, &command.message()).await?;
    Ok(classify_reply(&reply))
}

//! Typed wrappers for the four backend operations.

use serde::Serialize;
use serde_json::Value;

use crate::decode::{ask_reply_from, documents_from, receipt_from};
use crate::types::{AskBody, IngestTextBody, IngestUrlBody};
use crate::{AskReply, DocumentRecord, Gateway, GatewayError, IngestReceipt, Operation};

pub async fn ingest_url(gateway: &dyn Gateway, url: &str) -> Result<IngestReceipt, GatewayError> {
    let body = gateway
        .call(Operation::IngestUrl, Some(to_body(&IngestUrlBody { url })?))
        .await?;
    Ok(receipt_from(&body))
}

pub async fn ingest_text(
    gateway: &dyn Gateway,
    content: &str,
) -> Result<IngestReceipt, GatewayError> {
    let body = gateway
        .call(
            Operation::IngestText,
            Some(to_body(&IngestTextBody { content })?),
        )
        .await?;
    Ok(receipt_from(&body))
}

pub async fn list_documents(gateway: &dyn Gateway) -> Result<Vec<DocumentRecord>, GatewayError> {
    let body = gateway.call(Operation::ListDocuments, None).await?;
    Ok(documents_from(&body))
}

pub async fn ask(gateway: &dyn Gateway, question: &str) -> Result<AskReply, GatewayError> {
    let body = gateway
        .call(Operation::Ask, Some(to_body(&AskBody { question })?))
        .await?;
    Ok(ask_reply_from(&body))
}

fn to_body(payload: &impl Serialize) -> Result<Value, GatewayError> {
    serde_json::to_value(payload).map_err(|err| GatewayError::transport(err.to_string()))
}

use actix_web::error::JsonPayloadError;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use futures::StreamExt;
use log::{debug, error, info};
use uuid::Uuid;

use crate::conversation::normalize;
use crate::error::ChatError;
use crate::web::models::ChatRequest;
use crate::AppState;

// Chat API endpoint
pub async fn chat(
    data: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> Result<HttpResponse, ChatError> {
    let request_id = Uuid::new_v4();
    let received = req.messages.len();

    let messages = normalize(req.into_inner().messages, &data.system_prompt);
    info!("Chat request {} forwarded to inference backend", request_id);
    debug!(
        "Chat request {}: {} messages ({} after normalization), roles {:?}",
        request_id,
        received,
        messages.len(),
        messages.iter().map(|m| m.role).collect::<Vec<_>>()
    );

    let stream = match data.backend.stream_chat(&messages).await {
        Ok(stream) => stream,
        Err(e) => {
            error!("Chat request {} failed: {}", request_id, e);
            return Err(e);
        }
    };

    let stream = stream.map(move |chunk| {
        if let Err(e) = &chunk {
            error!("Chat request {} stream ended early: {}", request_id, e);
        }
        chunk
    });

    Ok(HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(stream))
}

// Any /api path without a handler
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().body("Not Found")
}

pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ChatError::InvalidBody(err.to_string()).into()
}

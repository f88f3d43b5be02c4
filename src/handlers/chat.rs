use actix_web::{web, HttpResponse};
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assistant::Assistant;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: Uuid,
}

/// No auth and no server-side session state: the session id is echoed back
/// (or freshly generated) purely so the client can thread its own history.
pub async fn chat(
    assistant: web::Data<Assistant>,
    req: web::Json<ChatRequest>,
) -> HttpResponse {
    let session_id = req.session_id.unwrap_or_else(Uuid::new_v4);
    info!("Chat request from session {}", session_id);

    let response = assistant.reply(&req.message).await;

    HttpResponse::Ok().json(ChatResponse { response, session_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use actix_web::{test, App};
    use serde_json::json;

    #[actix_web::test]
    async fn test_chat_generates_session_id() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Assistant::from_config(&AppConfig::for_tests())))
                .service(web::resource("/api/chat").route(web::post().to(chat))),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({ "message": "hello" }))
            .to_request();
        let body: ChatResponse = test::call_and_read_body_json(&app, req).await;
        assert!(!body.response.is_empty());
        assert!(!body.session_id.is_nil());
    }

    #[actix_web::test]
    async fn test_chat_echoes_session_id() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Assistant::from_config(&AppConfig::for_tests())))
                .service(web::resource("/api/chat").route(web::post().to(chat))),
        )
        .await;

        let session_id = Uuid::new_v4();
        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({ "message": "hello", "session_id": session_id }))
            .to_request();
        let body: ChatResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.session_id, session_id);
    }

    #[actix_web::test]
    async fn test_chat_answers_with_canned_text_without_provider() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Assistant::from_config(&AppConfig::for_tests())))
                .service(web::resource("/api/chat").route(web::post().to(chat))),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({ "message": "What are your hours?" }))
            .to_request();
        let body: ChatResponse = test::call_and_read_body_json(&app, req).await;
        assert!(body.response.contains("11:00 AM to 6:00 PM"));
    }

    #[actix_web::test]
    async fn test_chat_empty_message_gets_greeting() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Assistant::from_config(&AppConfig::for_tests())))
                .service(web::resource("/api/chat").route(web::post().to(chat))),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({ "message": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: ChatResponse = test::read_body_json(resp).await;
        assert!(body.response.contains("beauty assistant"));
        assert!(!body.session_id.is_nil());
    }
}

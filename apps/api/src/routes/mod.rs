pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::coaching::handlers as coaching;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Résumé intake and gap analysis
        .route("/upload-resume", post(analysis::handle_upload_resume))
        .route("/analyze", post(analysis::handle_analyze))
        .route(
            "/session/:sid",
            get(analysis::handle_get_session).delete(analysis::handle_clear_session),
        )
        // Coaching
        .route("/tailor-resume", post(coaching::handle_tailor_resume))
        .route("/generate-questions", post(coaching::handle_generate_questions))
        .route("/evaluate-answer", post(coaching::handle_evaluate_answer))
        .route("/generate-projects", post(coaching::handle_generate_projects))
        .route("/generate-schedule", post(coaching::handle_generate_schedule))
        .route("/chat", post(coaching::handle_chat))
        // Job search
        .route("/find-jobs", post(jobs::handle_find_jobs))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const RESUME: &str = "Ada Lovelace\nada@example.com\nData Analyst at Example Corp\n\
        Skills: Python, SQL, pandas, numpy, Machine Learning, Git";

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn upload(filename: &str, content: &[u8]) -> Request<Body> {
        let boundary = "XBOUNDARYX";
        let mut body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        Request::builder()
            .method("POST")
            .uri("/upload-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_unconfigured_integrations() {
        let app = build_router(AppState::for_tests());
        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "online");
        assert_eq!(body["groq_configured"], false);
        assert_eq!(body["adzuna_configured"], false);
        assert_eq!(body["model"], "llama3-8b-8192");
    }

    #[tokio::test]
    async fn test_root_banner() {
        let app = build_router(AppState::for_tests());
        let response = app.oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["features"].as_array().unwrap().len() > 1);
    }

    #[tokio::test]
    async fn test_analyze_unknown_session_is_404() {
        let app = build_router(AppState::for_tests());
        let response = app
            .oneshot(post_json(
                "/analyze",
                json!({"session_id": "nope", "target_role": "Data Scientist"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Session not found.");
    }

    #[tokio::test]
    async fn test_analyze_then_read_then_clear_session() {
        let state = AppState::for_tests();
        let sid = state.sessions.create(RESUME.to_string()).await;
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(post_json(
                "/analyze",
                json!({
                    "session_id": sid,
                    "target_role": "Data Scientist",
                    "preferred_location": "Pune"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["session_id"], sid);
        assert_eq!(body["profile"]["name"], "Ada Lovelace");
        assert_eq!(body["profile"]["email"], "ada@example.com");
        let score = body["gap_analysis"]["matchScore"].as_u64().unwrap();
        assert!((20..=95).contains(&score));
        assert_eq!(body["gap_analysis"]["roadmap"].as_array().unwrap().len(), 3);

        let response = app.clone().oneshot(get_request(&format!("/session/{sid}"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["target_role"], "Data Scientist");
        assert_eq!(body["gap"]["matchScore"].as_u64().unwrap(), score);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/session/{sid}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], "Cleared.");

        let response = app.oneshot(get_request(&format!("/session/{sid}"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_session_before_analysis_has_empty_objects() {
        let state = AppState::for_tests();
        let sid = state.sessions.create(RESUME.to_string()).await;
        let app = build_router(state);
        let response = app.oneshot(get_request(&format!("/session/{sid}"))).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["profile"], json!({}));
        assert_eq!(body["gap"], json!({}));
        assert_eq!(body["target_role"], "");
    }

    #[tokio::test]
    async fn test_clear_unknown_session_still_succeeds() {
        let app = build_router(AppState::for_tests());
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/session/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf() {
        let app = build_router(AppState::for_tests());
        let response = app.oneshot(upload("resume.docx", b"hello")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Only PDF files accepted.");
    }

    #[tokio::test]
    async fn test_upload_unreadable_pdf_is_422() {
        let app = build_router(AppState::for_tests());
        let response = app
            .oneshot(upload("Resume.PDF", b"definitely not a pdf document"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Could not extract text from PDF.");
    }

    #[tokio::test]
    async fn test_find_jobs_falls_back_to_mock_board() {
        let state = AppState::for_tests();
        let sid = state.sessions.create(RESUME.to_string()).await;
        let app = build_router(state);
        app.clone()
            .oneshot(post_json(
                "/analyze",
                json!({
                    "session_id": sid,
                    "target_role": "ML Engineer",
                    "preferred_location": "Pune"
                }),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(post_json(
                "/find-jobs",
                json!({"session_id": sid, "location": "", "num_results": 3}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["source"], "mock");
        assert_eq!(body["role"], "ML Engineer");
        assert_eq!(body["location"], "Pune");
        assert!(body["tip"].is_string());
        let jobs = body["jobs"].as_array().unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0]["source"], "mock");
        assert!(jobs[0]["match"].as_u64().unwrap() >= jobs[1]["match"].as_u64().unwrap());
    }

    #[tokio::test]
    async fn test_llm_routes_without_key_report_not_configured() {
        let state = AppState::for_tests();
        let sid = state.sessions.create(RESUME.to_string()).await;
        let app = build_router(state);
        let response = app
            .oneshot(post_json("/chat", json!({"session_id": sid, "message": "Hi"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "LLM_NOT_CONFIGURED");
    }

    #[tokio::test]
    async fn test_coaching_routes_check_session_first() {
        let app = build_router(AppState::for_tests());
        for (uri, body) in [
            ("/tailor-resume", json!({"session_id": "x", "job_description": "jd"})),
            ("/generate-questions", json!({"session_id": "x"})),
            ("/evaluate-answer", json!({"session_id": "x", "question": "q", "answer": "a"})),
            ("/generate-projects", json!({"session_id": "x"})),
            ("/generate-schedule", json!({"session_id": "x"})),
            ("/find-jobs", json!({"session_id": "x"})),
        ] {
            let response = app.clone().oneshot(post_json(uri, body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }
}

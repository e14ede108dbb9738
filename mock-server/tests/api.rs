use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, PUBLIC_KEY, SECRET_KEY};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(endpoint: &str, extra: &str) -> Request<String> {
    Request::builder()
        .uri(format!(
            "/v1/{endpoint}/?publickey={PUBLIC_KEY}&secretkey={SECRET_KEY}{extra}"
        ))
        .body(String::new())
        .unwrap()
}

// --- credentials ---

#[tokio::test]
async fn wrong_public_key_is_error_envelope() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/v1/getprojectslist/?publickey=nope&secretkey=nope")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ERROR");
    assert_eq!(body["message"], "Wrong public key");
}

#[tokio::test]
async fn wrong_secret_key_is_error_envelope() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri(format!("/v1/getprojectslist/?publickey={PUBLIC_KEY}&secretkey=nope"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Wrong secret key");
}

// --- projects ---

#[tokio::test]
async fn projects_list_found() {
    let resp = app().oneshot(get("getprojectslist", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "FOUND");
    assert_eq!(body["result"].as_array().unwrap().len(), 2);
    assert_eq!(body["result"][0]["title"], "First Project");
}

#[tokio::test]
async fn project_info_found() {
    let resp = app().oneshot(get("getprojectinfo", "&projectid=1")).await.unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["status"], "FOUND");
    assert_eq!(body["result"]["customdomain"], "project.ru");
}

#[tokio::test]
async fn project_info_unknown_project() {
    let resp = app().oneshot(get("getprojectinfo", "&projectid=99")).await.unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["status"], "ERROR");
    assert_eq!(body["message"], "Project not found");
}

#[tokio::test]
async fn pages_list_requires_project_id() {
    let resp = app().oneshot(get("getpageslist", "")).await.unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Missing projectid");
}

// --- pages ---

#[tokio::test]
async fn page_variants_share_summary() {
    for endpoint in ["getpage", "getpagefull", "getpageexport", "getpagefullexport"] {
        let resp = app().oneshot(get(endpoint, "&pageid=1002")).await.unwrap();

        let body = body_json(resp).await;
        assert_eq!(body["status"], "FOUND", "{endpoint}");
        assert_eq!(body["result"]["id"], "1002", "{endpoint}");
        assert_eq!(body["result"]["filename"], "page1002.html", "{endpoint}");
        assert!(body["result"]["html"].is_string(), "{endpoint}");
    }
}

#[tokio::test]
async fn page_not_found() {
    let resp = app().oneshot(get("getpage", "&pageid=1")).await.unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["status"], "ERROR");
    assert_eq!(body["message"], "Page not found");
}

// --- routing ---

#[tokio::test]
async fn unknown_method_returns_404_envelope() {
    let resp = app().oneshot(get("deleteproject", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ERROR");
}

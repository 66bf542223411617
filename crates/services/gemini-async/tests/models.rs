use gemini_async::types::ListModelsQuery;
use gemini_async::{Client, GeminiConfig};
use serde_json::json;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<GeminiConfig> {
    let cfg = GeminiConfig::new()
        .with_api_base(server.uri())
        .with_api_key("test");
    Client::with_config(cfg)
}

#[tokio::test]
async fn models_list_headers_and_parse() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(header_exists("x-goog-api-key"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [
                {
                    "name": "models/gemini-1.5-flash",
                    "displayName": "Gemini 1.5 Flash",
                    "supportedGenerationMethods": ["generateContent", "countTokens"]
                },
                {
                    "name": "models/text-embedding-004",
                    "supportedGenerationMethods": ["embedContent"]
                }
            ]
        })))
        .mount(&server)
        .await;

    let query = ListModelsQuery {
        page_size: Some(10),
        page_token: None,
    };
    let res = test_client(&server).models().list(&query).await.unwrap();
    assert_eq!(res.models.len(), 2);
    assert_eq!(res.models[0].id(), "gemini-1.5-flash");
    assert!(res.models[0].supports_generate_content());
    assert!(!res.models[1].supports_generate_content());
    assert!(res.next_page_token.is_none());
}

#[tokio::test]
async fn list_all_follows_page_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{"name": "models/gemini-2.0-flash"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{"name": "models/gemini-1.5-flash"}],
            "nextPageToken": "page-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let models = test_client(&server).models().list_all().await.unwrap();
    let ids: Vec<_> = models.iter().map(gemini_async::types::Model::id).collect();
    assert_eq!(ids, ["gemini-1.5-flash", "gemini-2.0-flash"]);
}

#[tokio::test]
async fn models_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1beta/models/gemini-1.5-flash"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/gemini-1.5-flash",
            "version": "001",
            "outputTokenLimit": 8192,
            "supportedGenerationMethods": ["generateContent"]
        })))
        .mount(&server)
        .await;

    let m = test_client(&server)
        .models()
        .get("gemini-1.5-flash")
        .await
        .unwrap();
    assert_eq!(m.name, "models/gemini-1.5-flash");
    assert_eq!(m.output_token_limit, Some(8192));
}

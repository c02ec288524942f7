use mockito::{Matcher, Server};
use shared::models::Article;
use shared::scriptwriter::GroqScriptwriter;

fn articles() -> Vec<Article> {
    vec![
        Article {
            title: "Quantum chips ship".to_string(),
            description: "First consumer quantum accelerator.".to_string(),
        },
        Article {
            title: "Rocket reuse record".to_string(),
            description: "Booster flies for the thirtieth time.".to_string(),
        },
    ]
}

fn chat_completion(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "test-model",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 120, "completion_tokens": 80, "total_tokens": 200}
    })
    .to_string()
}

#[tokio::test]
async fn test_write_script_sends_persona_and_articles() {
    let mut server = Server::new_async().await;

    let script = "This is NewsKernal. Here is your daily download. \
                  Quantum chips shipped and a booster flew again. \
                  System update complete. This was NewsKernal.";

    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer groq-key")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(serde_json::json!({
                "model": "test-model",
                "messages": [
                    {"role": "system"},
                    {
                        "role": "user",
                        "content": "Headline: Quantum chips ship\nSummary: First consumer quantum accelerator.\n\nHeadline: Rocket reuse record\nSummary: Booster flies for the thirtieth time."
                    }
                ]
            })),
            Matcher::Regex("This is NewsKernal".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_completion(script))
        .create_async()
        .await;

    let writer =
        GroqScriptwriter::with_base_url("groq-key".to_string(), "test-model", server.url())
            .unwrap();
    let result = writer.write_script(&articles()).await.unwrap();

    assert_eq!(result, script);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_write_script_surfaces_http_error() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body(r#"{"error":{"message":"Rate limit reached"}}"#)
        .create_async()
        .await;

    let writer =
        GroqScriptwriter::with_base_url("groq-key".to_string(), "test-model", server.url())
            .unwrap();
    let err = writer.write_script(&articles()).await.unwrap_err();

    assert!(err.to_string().contains("429"), "unexpected error: {}", err);
    assert!(err.to_string().contains("Rate limit reached"));
}

#[tokio::test]
async fn test_write_script_rejects_empty_completion() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_completion("   \n"))
        .create_async()
        .await;

    let writer =
        GroqScriptwriter::with_base_url("groq-key".to_string(), "test-model", server.url())
            .unwrap();
    let err = writer.write_script(&articles()).await.unwrap_err();

    assert!(
        err.to_string().contains("empty script"),
        "unexpected error: {}",
        err
    );
}

#[tokio::test]
async fn test_write_script_rejects_missing_choices() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"chatcmpl-2","object":"chat.completion","choices":[]}"#)
        .create_async()
        .await;

    let writer =
        GroqScriptwriter::with_base_url("groq-key".to_string(), "test-model", server.url())
            .unwrap();
    let err = writer.write_script(&articles()).await.unwrap_err();

    assert!(
        err.to_string().contains("empty script"),
        "unexpected error: {}",
        err
    );
}

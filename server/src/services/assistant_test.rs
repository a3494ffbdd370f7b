use super::*;
use crate::llm::types::Completion;
use std::sync::Mutex;

// =============================================================================
// MockCompletion
// =============================================================================

struct MockCompletion {
    responses: Mutex<Vec<Result<Completion, CompletionError>>>,
    seen: Mutex<Vec<Vec<Message>>>,
}

impl MockCompletion {
    fn new(responses: Vec<Result<Completion, CompletionError>>) -> Self {
        Self { responses: Mutex::new(responses), seen: Mutex::new(Vec::new()) }
    }

    fn replying(text: &str) -> Self {
        Self::new(vec![Ok(Completion {
            content: text.to_string(),
            model: "mock".into(),
            stop_reason: "end_turn".into(),
        })])
    }
}

#[async_trait::async_trait]
impl CompletionChat for MockCompletion {
    async fn complete(
        &self,
        _max_tokens: u32,
        _temperature: f32,
        _system: &str,
        messages: &[Message],
    ) -> Result<Completion, CompletionError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        self.responses.lock().unwrap().remove(0)
    }
}

fn user(content: &str) -> Message {
    Message { role: "user".into(), content: content.into() }
}

// =============================================================================
// handle_chat
// =============================================================================

#[tokio::test]
async fn reply_carries_trimmed_content() {
    let mock: Arc<dyn CompletionChat> = Arc::new(MockCompletion::replying("  Hi there!  \n"));
    let reply = handle_chat(Some(&mock), &[user("hello")]).await.unwrap();
    assert_eq!(reply.content, "Hi there!");
    assert_eq!(reply.role, "ai");
    assert!(!reply.should_redirect_to_contact);
}

#[tokio::test]
async fn redirect_flag_set_iff_fallback_sentence_present() {
    let mock: Arc<dyn CompletionChat> =
        Arc::new(MockCompletion::replying(&format!("{FALLBACK_SENTENCE}.")));
    let reply = handle_chat(Some(&mock), &[user("what is the meaning of life")])
        .await
        .unwrap();
    assert!(reply.should_redirect_to_contact);

    let mock: Arc<dyn CompletionChat> =
        Arc::new(MockCompletion::replying("Sorry, that is not something I track."));
    let reply = handle_chat(Some(&mock), &[user("hm")]).await.unwrap();
    assert!(!reply.should_redirect_to_contact);
}

#[tokio::test]
async fn fallback_sentence_mid_reply_still_sets_flag() {
    let text = format!("Good question. {FALLBACK_SENTENCE} — try the contact form.");
    let mock: Arc<dyn CompletionChat> = Arc::new(MockCompletion::replying(&text));
    let reply = handle_chat(Some(&mock), &[user("obscure")]).await.unwrap();
    assert!(reply.should_redirect_to_contact);
}

#[tokio::test]
async fn whitespace_only_completion_is_empty_error() {
    let mock: Arc<dyn CompletionChat> = Arc::new(MockCompletion::replying("   \n\t "));
    let err = handle_chat(Some(&mock), &[user("hello")]).await.unwrap_err();
    assert!(matches!(err, AssistantError::EmptyCompletion));
}

#[tokio::test]
async fn missing_client_is_not_configured() {
    let err = handle_chat(None, &[user("hello")]).await.unwrap_err();
    assert!(matches!(err, AssistantError::NotConfigured));
}

#[tokio::test]
async fn provider_error_propagates() {
    let mock: Arc<dyn CompletionChat> = Arc::new(MockCompletion::new(vec![Err(
        CompletionError::ApiResponse { status: 429, body: "rate limited".into() },
    )]));
    let err = handle_chat(Some(&mock), &[user("hello")]).await.unwrap_err();
    assert!(matches!(
        err,
        AssistantError::Completion(CompletionError::ApiResponse { status: 429, .. })
    ));
}

#[tokio::test]
async fn wire_roles_are_mapped_for_the_provider() {
    let mock = Arc::new(MockCompletion::replying("ok"));
    let incoming = vec![
        user("first"),
        Message { role: "ai".into(), content: "reply".into() },
        Message { role: "assistant".into(), content: "reply 2".into() },
        Message { role: "weird".into(), content: "third".into() },
    ];
    let as_trait: Arc<dyn CompletionChat> = mock.clone();
    handle_chat(Some(&as_trait), &incoming).await.unwrap();

    let seen = mock.seen.lock().unwrap();
    let roles: Vec<&str> = seen[0].iter().map(|m| m.role.as_str()).collect();
    assert_eq!(roles, ["user", "assistant", "assistant", "user"]);
}

#[tokio::test]
async fn reply_ids_are_strictly_increasing() {
    let mut last = 0;
    for _ in 0..5 {
        let mock: Arc<dyn CompletionChat> = Arc::new(MockCompletion::replying("ok"));
        let reply = handle_chat(Some(&mock), &[user("hi")]).await.unwrap();
        assert!(reply.id > last, "ids must be monotonic");
        last = reply.id;
    }
}

#[test]
fn reply_serializes_with_camel_case_flag() {
    let reply = ReplyMessage {
        id: 7,
        role: "ai",
        content: "hi".into(),
        should_redirect_to_contact: true,
    };
    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["shouldRedirectToContact"], true);
    assert_eq!(json["role"], "ai");
}

#[test]
fn system_prompt_pins_the_fallback_sentence() {
    assert!(SYSTEM_PROMPT.contains(FALLBACK_SENTENCE));
    assert!(SYSTEM_PROMPT.contains("#contact"));
}

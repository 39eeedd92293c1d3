use async_trait::async_trait;
use sendai_chat_proxy::{
    Error, Result,
    llm::{Choice, CompletionRequest, CompletionResponse, LlmClient, ResponseMessage},
};
use std::collections::VecDeque;
use std::sync::Mutex;

/// What the mock upstream answers with.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Reply(String),
    NoChoices,
    UpstreamStatus(u16, String),
}

/// Mock LLM client that records every call it receives
#[derive(Debug, Default)]
pub struct MockLlmClient {
    outcomes: Mutex<VecDeque<MockOutcome>>,
    calls: Mutex<Vec<(String, CompletionRequest)>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(self, outcome: MockOutcome) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn replying(content: &str) -> Self {
        Self::new().with_outcome(MockOutcome::Reply(content.to_string()))
    }

    /// `(api_key, request)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, CompletionRequest)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

pub fn completion_with(contents: &[&str]) -> CompletionResponse {
    CompletionResponse {
        choices: contents
            .iter()
            .map(|content| Choice {
                message: Some(ResponseMessage {
                    content: Some(content.to_string()),
                }),
            })
            .collect(),
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), request.clone()));

        let outcome = self.outcomes.lock().unwrap().pop_front();
        match outcome {
            Some(MockOutcome::Reply(content)) => Ok(completion_with(&[content.as_str()])),
            Some(MockOutcome::NoChoices) => Ok(completion_with(&[])),
            Some(MockOutcome::UpstreamStatus(status, body)) => {
                Err(Error::UpstreamStatus { status, body })
            }
            None => panic!("MockLlmClient called more times than configured"),
        }
    }
}

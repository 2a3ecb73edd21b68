//! The enhancer: remote first, local always.
//!
//! Every call returns a usable value. A remote answer is used only when it
//! arrives within the time bound, decodes into the feature payload and
//! passes validation. Anything else yields the local heuristic result with
//! the failure kept as a diagnostic.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use zoomnote_core::{KeywordList, StorySummary, TagList, TitleSuggestion};
use zoomnote_engine::classify;

use crate::client::{CompletionClient, CompletionRequest, HttpCompletionClient};
use crate::config::{EnhanceConfig, REQUEST_TIMEOUT};
use crate::error::EnhanceError;
use crate::feature::{Feature, KeywordsFeature, SummaryFeature, TagsFeature, TitleFeature};

/// Where a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Remote,
    Local,
}

/// A feature result with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Enhanced<T> {
    pub value: T,
    pub source: Source,
    /// Why the remote result was not used, if it was attempted or unavailable.
    pub diagnostic: Option<EnhanceError>,
}

impl<T> Enhanced<T> {
    fn remote(value: T) -> Self {
        Self {
            value,
            source: Source::Remote,
            diagnostic: None,
        }
    }

    fn local(value: T, diagnostic: Option<EnhanceError>) -> Self {
        Self {
            value,
            source: Source::Local,
            diagnostic,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.source == Source::Remote
    }
}

/// Runs enhancement features against an optional remote client.
#[derive(Clone)]
pub struct Enhancer {
    client: Option<Arc<dyn CompletionClient>>,
    unavailable: EnhanceError,
    timeout: Duration,
}

impl Enhancer {
    /// An enhancer with no remote client. Every call is served locally.
    pub fn offline() -> Self {
        Self {
            client: None,
            unavailable: EnhanceError::NoCredential,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Builds an enhancer from configuration.
    ///
    /// A missing or blank credential produces an offline enhancer that
    /// reports the reason as its diagnostic.
    pub fn from_config(config: &EnhanceConfig) -> Self {
        match HttpCompletionClient::new(config) {
            Ok(client) => Self::with_client(Arc::new(client), config.timeout),
            Err(error) => {
                tracing::info!(reason = %error, "remote enhancement unavailable, running offline");
                Self {
                    client: None,
                    unavailable: error,
                    timeout: config.timeout,
                }
            }
        }
    }

    /// An enhancer backed by any [`CompletionClient`].
    pub fn with_client(client: Arc<dyn CompletionClient>, timeout: Duration) -> Self {
        Self {
            client: Some(client),
            unavailable: EnhanceError::NoCredential,
            timeout,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.client.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs one feature.
    pub async fn run<F: Feature>(&self, feature: &F, text: &str) -> Enhanced<F::Output> {
        if text.trim().is_empty() {
            return Enhanced::local(feature.local(text), None);
        }

        let Some(client) = &self.client else {
            return Enhanced::local(feature.local(text), Some(self.unavailable.clone()));
        };

        match self.remote(client.as_ref(), feature, text).await {
            Ok(value) => {
                tracing::debug!(feature = F::NAME, "remote enhancement accepted");
                Enhanced::remote(value)
            }
            Err(error) => {
                tracing::warn!(
                    feature = F::NAME,
                    code = error.code(),
                    error = %error,
                    "remote enhancement failed, using local result"
                );
                Enhanced::local(feature.local(text), Some(error))
            }
        }
    }

    async fn remote<F: Feature>(
        &self,
        client: &dyn CompletionClient,
        feature: &F,
        text: &str,
    ) -> Result<F::Output, EnhanceError> {
        let script = classify(text);
        let request = CompletionRequest {
            feature: F::NAME,
            system: feature.instruction(script),
            user: text.to_string(),
            schema: feature.schema(),
        };

        let content = tokio::time::timeout(self.timeout, client.complete(&request))
            .await
            .map_err(|_| EnhanceError::Timeout)??;

        let value: F::Output = serde_json::from_str(&content)
            .map_err(|e| EnhanceError::MalformedResponse(e.to_string()))?;
        feature
            .validate(&value, script)
            .map_err(EnhanceError::ValidationFailed)?;
        Ok(value)
    }

    pub async fn suggest_title(&self, text: &str) -> Enhanced<TitleSuggestion> {
        self.run(&TitleFeature, text).await
    }

    pub async fn summarize(&self, text: &str) -> Enhanced<StorySummary> {
        self.run(&SummaryFeature, text).await
    }

    pub async fn suggest_tags(&self, text: &str) -> Enhanced<TagList> {
        self.run(&TagsFeature, text).await
    }

    pub async fn extract_keywords(&self, text: &str, max_keywords: usize) -> Enhanced<KeywordList> {
        self.run(&KeywordsFeature::new(max_keywords), text).await
    }
}

impl Default for Enhancer {
    fn default() -> Self {
        Self::offline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credential;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio_util::sync::CancellationToken;
    use zoomnote_engine::insights;

    const MARIA: &str = "Maria storms into the room. She slams the door and breaks down in tears. After a long silence, she decides to call her mother.";

    enum Behavior {
        Respond(&'static str),
        Fail(EnhanceError),
        Hang,
    }

    struct FakeClient {
        behavior: Behavior,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl FakeClient {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                requests: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionClient for FakeClient {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, EnhanceError> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.behavior {
                Behavior::Respond(body) => Ok(body.to_string()),
                Behavior::Fail(error) => Err(error.clone()),
                Behavior::Hang => std::future::pending().await,
            }
        }
    }

    fn enhancer(client: Arc<FakeClient>) -> Enhancer {
        Enhancer::with_client(client, REQUEST_TIMEOUT)
    }

    #[tokio::test]
    async fn offline_matches_local_heuristics() {
        let enhancer = Enhancer::offline();

        let title = enhancer.suggest_title(MARIA).await;
        assert_eq!(title.value, insights::suggest_title(MARIA));
        assert_eq!(title.source, Source::Local);
        assert_eq!(title.diagnostic, Some(EnhanceError::NoCredential));

        let summary = enhancer.summarize(MARIA).await;
        assert_eq!(summary.value, insights::summarize_story(MARIA));

        let tags = enhancer.suggest_tags(MARIA).await;
        assert_eq!(tags.value, insights::suggest_tags(MARIA));

        let keywords = enhancer.extract_keywords(MARIA, 3).await;
        assert_eq!(keywords.value, insights::keyword_list(MARIA, 3));
    }

    #[tokio::test]
    async fn blank_credential_reports_invalid() {
        let config = EnhanceConfig::new(Some(Credential::new("")));
        let enhancer = Enhancer::from_config(&config);
        assert!(!enhancer.is_remote());

        let result = enhancer.suggest_title(MARIA).await;
        assert_eq!(result.source, Source::Local);
        assert_eq!(result.diagnostic, Some(EnhanceError::InvalidCredential));
    }

    #[tokio::test]
    async fn remote_answer_is_used() {
        let client = FakeClient::new(Behavior::Respond(r#"{"title":"The Call"}"#));
        let result = enhancer(client.clone()).suggest_title(MARIA).await;

        assert_eq!(result.value.title, "The Call");
        assert!(result.is_remote());
        assert!(result.diagnostic.is_none());

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].feature, "title");
        assert_eq!(requests[0].user, MARIA);
    }

    #[tokio::test]
    async fn korean_note_gets_korean_instruction() {
        let client = FakeClient::new(Behavior::Respond(r##"{"tags":["#갈등"]}"##));
        let result = enhancer(client.clone())
            .suggest_tags("두 인물의 갈등이 깊어진다.")
            .await;

        assert_eq!(result.value.tags, vec!["#갈등"]);
        let requests = client.requests.lock().unwrap();
        assert!(requests[0].system.contains("태그"));
    }

    #[tokio::test]
    async fn rejected_credential_falls_back() {
        let client = FakeClient::new(Behavior::Fail(EnhanceError::InvalidCredential));
        let result = enhancer(client).summarize(MARIA).await;

        assert_eq!(result.value, insights::summarize_story(MARIA));
        assert_eq!(result.source, Source::Local);
        assert_eq!(result.diagnostic, Some(EnhanceError::InvalidCredential));
    }

    #[tokio::test]
    async fn malformed_answer_falls_back() {
        let client = FakeClient::new(Behavior::Respond("Sure! Here is a title: The Call"));
        let result = enhancer(client).suggest_title(MARIA).await;

        assert_eq!(result.value, insights::suggest_title(MARIA));
        assert!(matches!(result.diagnostic, Some(EnhanceError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn unknown_fields_are_malformed() {
        let client = FakeClient::new(Behavior::Respond(r#"{"title":"x","mood":"dark"}"#));
        let result = enhancer(client).suggest_title(MARIA).await;
        assert!(matches!(result.diagnostic, Some(EnhanceError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn invalid_answer_falls_back() {
        let client = FakeClient::new(Behavior::Respond(r#"{"tags":["Not A Tag"]}"#));
        let result = enhancer(client).suggest_tags(MARIA).await;

        assert_eq!(result.value, insights::suggest_tags(MARIA));
        assert!(matches!(result.diagnostic, Some(EnhanceError::ValidationFailed(_))));
    }

    #[tokio::test]
    async fn too_many_keywords_fail_validation() {
        let client = FakeClient::new(Behavior::Respond(r#"{"keywords":["a1","b2","c3"]}"#));
        let result = enhancer(client).extract_keywords(MARIA, 2).await;

        assert_eq!(result.value, insights::keyword_list(MARIA, 2));
        assert!(matches!(result.diagnostic, Some(EnhanceError::ValidationFailed(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_remote_times_out() {
        let client = FakeClient::new(Behavior::Hang);
        let result = enhancer(client).summarize(MARIA).await;

        assert_eq!(result.value, insights::summarize_story(MARIA));
        assert_eq!(result.diagnostic, Some(EnhanceError::Timeout));
    }

    #[tokio::test]
    async fn blank_text_skips_remote() {
        let client = FakeClient::new(Behavior::Respond(r#"{"title":"Ghost"}"#));
        let result = enhancer(client.clone()).suggest_title("   ").await;

        assert_eq!(result.value, insights::suggest_title("   "));
        assert!(result.diagnostic.is_none());
        assert!(client.requests.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_call_delivers_nothing() {
        let enhancer = enhancer(FakeClient::new(Behavior::Hang));
        let token = CancellationToken::new();
        let child = token.child_token();

        let pending = tokio::spawn(async move {
            child.run_until_cancelled(enhancer.suggest_title(MARIA)).await
        });

        tokio::task::yield_now().await;
        token.cancel();
        assert!(pending.await.unwrap().is_none());
    }

    #[tokio::test]
    async fn remote_keywords_with_repeats_fall_back() {
        let client = FakeClient::new(Behavior::Respond(r#"{"keywords":["the","door","door"]}"#));
        let result = enhancer(client).extract_keywords(MARIA, 5).await;

        assert_eq!(result.source, Source::Local);
        assert_eq!(result.value, insights::keyword_list(MARIA, 5));
        assert!(matches!(result.diagnostic, Some(EnhanceError::ValidationFailed(_))));
    }

    #[tokio::test]
    async fn remote_tags_with_repeats_fall_back() {
        let client = FakeClient::new(Behavior::Respond(r##"{"tags":["#door","#door"]}"##));
        let result = enhancer(client).suggest_tags(MARIA).await;

        assert_eq!(result.source, Source::Local);
        assert_eq!(result.value, insights::suggest_tags(MARIA));
        assert!(matches!(result.diagnostic, Some(EnhanceError::ValidationFailed(_))));
    }
}

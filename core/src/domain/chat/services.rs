use tracing::{debug, instrument, warn};

use crate::domain::{
    chat::{
        classifier::classify,
        ports::{ChatService, LLMClient},
        value_objects::{ChatReply, ReplySource, build_prompt},
    },
    common::services::Service,
    recipe::ports::RecipeCatalog,
    waste_record::ports::WasteRecordRepository,
};

impl<WR, RC, LLM> ChatService for Service<WR, RC, LLM>
where
    WR: WasteRecordRepository,
    RC: RecipeCatalog,
    LLM: LLMClient,
{
    #[instrument(skip(self, query), fields(hosted_model = self.llm_client.is_some()))]
    async fn respond(&self, query: String) -> ChatReply {
        if let Some(llm_client) = &self.llm_client {
            match llm_client.generate_text(build_prompt(&query)).await {
                Ok(text) if !text.trim().is_empty() => {
                    return ChatReply {
                        response: text.trim().to_string(),
                        source: ReplySource::HostedModel,
                    };
                }
                Ok(_) => warn!("Hosted model returned an empty response"),
                Err(e) => warn!("Hosted model call failed: {}", e),
            }
        }

        let intent = classify(&query);
        debug!(?intent, "answering from intent classifier");

        ChatReply {
            response: intent.response().to_string(),
            source: ReplySource::IntentClassifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::domain::{
        chat::value_objects::Intent,
        common::entities::app_errors::CoreError,
        recipe::ports::MockRecipeCatalog,
        waste_record::{
            entities::WasteRecord, ports::WasteRecordRepository, value_objects::RecordsSnapshot,
        },
    };

    struct NoRecords;

    impl WasteRecordRepository for NoRecords {
        async fn append(&self, _record: WasteRecord) -> Result<(), CoreError> {
            Ok(())
        }

        async fn read_all(&self) -> RecordsSnapshot {
            RecordsSnapshot::loaded(Vec::new())
        }
    }

    /// Replays a fixed outcome and counts calls.
    struct ScriptedLLM {
        outcome: Result<String, CoreError>,
        calls: Arc<AtomicUsize>,
    }

    impl LLMClient for ScriptedLLM {
        async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
            assert!(prompt.contains("User: "));
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn service(
        outcome: Option<Result<String, CoreError>>,
    ) -> (Service<NoRecords, MockRecipeCatalog, ScriptedLLM>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let llm = outcome.map(|outcome| ScriptedLLM {
            outcome,
            calls: calls.clone(),
        });
        (Service::new(NoRecords, MockRecipeCatalog::new(), llm), calls)
    }

    #[tokio::test]
    async fn test_disabled_model_uses_classifier() {
        let (service, _) = service(None);

        let reply = service.respond("hello there".to_string()).await;
        assert_eq!(reply.response, Intent::Greeting.response());
        assert_eq!(reply.source, ReplySource::IntentClassifier);

        let reply = service.respond("asdjklqwe".to_string()).await;
        assert_eq!(reply.response, Intent::Unknown.response());
    }

    #[tokio::test]
    async fn test_model_reply_is_trimmed() {
        let (service, calls) = service(Some(Ok("  Serve smaller portions.\n".to_string())));

        let reply = service.respond("any tips?".to_string()).await;
        assert_eq!(reply.response, "Serve smaller portions.");
        assert_eq!(reply.source, ReplySource::HostedModel);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_model_failure_falls_back_without_retry() {
        let (service, calls) = service(Some(Err(CoreError::ExternalServiceError(
            "timeout".to_string(),
        ))));

        let reply = service
            .respond("how to reduce waste".to_string())
            .await;
        assert_eq!(reply.response, Intent::WasteReduction.response());
        assert_eq!(reply.source, ReplySource::IntentClassifier);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_model_reply_falls_back() {
        let (service, _) = service(Some(Ok("   ".to_string())));

        let reply = service.respond("extra food".to_string()).await;
        assert_eq!(reply.response, Intent::LeftoverHandling.response());
    }
}

//! Translator form: one text box, two language selectors and two response slots.

use tracing::{debug, warn};

use super::relay::RelayTransport;
use crate::translate::languages::{
    is_catalog_language, DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE,
};
use crate::translate::{Tone, TranslateRequest};

/// Shown in the formal slot when its relay call fails.
pub const AI_ERROR_PLACEHOLDER: &str = "Error fetching AI response.";
/// Shown in the emotional slot when its relay call fails.
pub const HI_ERROR_PLACEHOLDER: &str = "Error fetching HI response.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank; nothing was sent.
    Skipped,
    /// A previous submit has not finished; nothing was sent.
    Busy,
    Completed { formal_ok: bool, emotional_ok: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorForm {
    pub input: String,
    pub source_lang: String,
    pub target_lang: String,
    pub formal_response: Option<String>,
    pub emotional_response: Option<String>,
    in_flight: bool,
}

impl Default for TranslatorForm {
    fn default() -> Self {
        Self {
            input: String::new(),
            source_lang: DEFAULT_SOURCE_LANGUAGE.to_string(),
            target_lang: DEFAULT_TARGET_LANGUAGE.to_string(),
            formal_response: None,
            emotional_response: None,
            in_flight: false,
        }
    }
}

impl TranslatorForm {
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }

    /// Release the submit action after a pending submit was dropped, e.g. on a
    /// timeout. Slots keep whatever the dropped submit had already written.
    pub fn abandon(&mut self) {
        if self.in_flight {
            debug!("pending submit abandoned");
            self.in_flight = false;
        }
    }

    /// Send the input twice, formal first, then emotional.
    ///
    /// `render` is called whenever visible state changes, so each slot shows up
    /// as soon as its call resolves. A failure in one call only affects its own
    /// slot.
    pub async fn submit<T, F>(&mut self, transport: &T, mut render: F) -> SubmitOutcome
    where
        T: RelayTransport + ?Sized,
        F: FnMut(&TranslatorForm),
    {
        if self.in_flight {
            return SubmitOutcome::Busy;
        }
        if self.input.trim().is_empty() {
            return SubmitOutcome::Skipped;
        }

        self.in_flight = true;
        self.formal_response = None;
        self.emotional_response = None;
        render(&*self);

        let formal_ok = self.request_slot(transport, Tone::Formal).await;
        render(&*self);

        let emotional_ok = self.request_slot(transport, Tone::Emotional).await;
        render(&*self);

        self.in_flight = false;
        render(&*self);

        SubmitOutcome::Completed {
            formal_ok,
            emotional_ok,
        }
    }

    async fn request_slot<T>(&mut self, transport: &T, tone: Tone) -> bool
    where
        T: RelayTransport + ?Sized,
    {
        let request = TranslateRequest {
            message: self.input.clone(),
            tone,
            target_lang: self.target_lang.clone(),
        };

        let (text, ok) = match transport.translate(&request).await {
            Ok(response) => {
                if tone == Tone::Formal {
                    self.apply_detected_language(response.source_lang.as_deref());
                }
                (response.translation, true)
            }
            Err(e) => {
                warn!(%tone, "relay call failed: {}", e);
                let placeholder = match tone {
                    Tone::Formal => AI_ERROR_PLACEHOLDER,
                    Tone::Emotional => HI_ERROR_PLACEHOLDER,
                };
                (placeholder.to_string(), false)
            }
        };

        match tone {
            Tone::Formal => self.formal_response = Some(text),
            Tone::Emotional => self.emotional_response = Some(text),
        }
        ok
    }

    /// Only labels the source selector can show replace the current choice.
    fn apply_detected_language(&mut self, detected: Option<&str>) {
        if let Some(label) = detected.map(str::trim).filter(|l| is_catalog_language(l)) {
            debug!("source language set from detection: {}", label);
            self.source_lang = label.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::relay::ClientError;
    use crate::translate::TranslateResponse;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    struct MockRelay {
        replies: Mutex<VecDeque<Result<TranslateResponse, ClientError>>>,
        requests: Mutex<Vec<TranslateRequest>>,
    }

    impl MockRelay {
        fn new(replies: Vec<Result<TranslateResponse, ClientError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<TranslateRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RelayTransport for MockRelay {
        async fn translate(
            &self,
            request: &TranslateRequest,
        ) -> Result<TranslateResponse, ClientError> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::Transport("no scripted reply".into())))
        }
    }

    /// Never answers, like a relay that accepted the connection and hung.
    #[derive(Default)]
    struct StalledRelay {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RelayTransport for StalledRelay {
        async fn translate(
            &self,
            _request: &TranslateRequest,
        ) -> Result<TranslateResponse, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::future::pending().await
        }
    }

    fn ok(text: &str, source: Option<&str>) -> Result<TranslateResponse, ClientError> {
        Ok(TranslateResponse {
            translation: text.to_string(),
            source_lang: source.map(str::to_string),
        })
    }

    fn form(input: &str, target: &str) -> TranslatorForm {
        TranslatorForm {
            input: input.to_string(),
            target_lang: target.to_string(),
            ..TranslatorForm::default()
        }
    }

    #[tokio::test]
    async fn blank_input_sends_nothing() {
        let relay = MockRelay::new(vec![]);
        let mut form = form("   ", "Tamil");
        let mut renders = Vec::new();

        let outcome = form.submit(&relay, |f| renders.push(f.clone())).await;

        assert_eq!(outcome, SubmitOutcome::Skipped);
        assert!(relay.requests().is_empty());
        assert!(renders.is_empty());
        assert!(!form.in_flight());
    }

    #[tokio::test]
    async fn both_slots_render_and_in_flight_clears() {
        let relay = MockRelay::new(vec![
            ok("வணக்கம்", Some("Hindi")),
            ok("டேய் நண்பா!", Some("Hindi")),
        ]);
        let mut form = form("Hello", "Tamil");
        let mut renders = Vec::new();

        let outcome = form.submit(&relay, |f| renders.push(f.clone())).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Completed {
                formal_ok: true,
                emotional_ok: true
            }
        );
        assert_eq!(form.formal_response.as_deref(), Some("வணக்கம்"));
        assert_eq!(form.emotional_response.as_deref(), Some("டேய் நண்பா!"));
        assert!(!form.in_flight());
        assert!(form.can_submit());

        // in flight with empty slots, formal first, then emotional, then done
        assert_eq!(renders.len(), 4);
        assert!(renders[0].in_flight() && renders[0].formal_response.is_none());
        assert!(renders[1].in_flight());
        assert_eq!(renders[1].formal_response.as_deref(), Some("வணக்கம்"));
        assert!(renders[1].emotional_response.is_none());
        assert!(renders[2].in_flight() && renders[2].emotional_response.is_some());
        assert!(!renders[3].in_flight());
    }

    #[tokio::test]
    async fn requests_are_sequential_formal_then_emotional() {
        let relay = MockRelay::new(vec![ok("a", None), ok("b", None)]);
        let mut form = form("How are you?", "Bhojpuri");
        form.submit(&relay, |_| {}).await;

        let requests = relay.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].tone, Tone::Formal);
        assert_eq!(requests[1].tone, Tone::Emotional);
        for request in &requests {
            assert_eq!(request.message, "How are you?");
            assert_eq!(request.target_lang, "Bhojpuri");
        }
    }

    #[tokio::test]
    async fn first_failure_does_not_block_second_call() {
        let relay = MockRelay::new(vec![
            Err(ClientError::Transport("connection refused".into())),
            ok("అరే రా!", None),
        ]);
        let mut form = form("I broke my phone", "Telugu");

        let outcome = form.submit(&relay, |_| {}).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Completed {
                formal_ok: false,
                emotional_ok: true
            }
        );
        assert_eq!(relay.requests().len(), 2);
        assert_eq!(form.formal_response.as_deref(), Some(AI_ERROR_PLACEHOLDER));
        assert_eq!(form.emotional_response.as_deref(), Some("అరే రా!"));
        assert!(!form.in_flight());
    }

    #[tokio::test]
    async fn second_failure_only_affects_its_slot() {
        let relay = MockRelay::new(vec![
            ok("Namaste", None),
            Err(ClientError::Relay {
                status: 500,
                message: "Server Error".into(),
            }),
        ]);
        let mut form = form("Hello", "Hindi");
        form.submit(&relay, |_| {}).await;

        assert_eq!(form.formal_response.as_deref(), Some("Namaste"));
        assert_eq!(form.emotional_response.as_deref(), Some(HI_ERROR_PLACEHOLDER));
        assert!(!form.in_flight());
    }

    #[tokio::test]
    async fn detected_language_updates_source_selector() {
        let relay = MockRelay::new(vec![ok("x", Some("Telugu")), ok("y", Some("Hindi"))]);
        let mut form = form("ఎలా ఉన్నావు", "Hindi");
        form.submit(&relay, |_| {}).await;
        // only the formal call's detection is applied
        assert_eq!(form.source_lang, "Telugu");
    }

    #[tokio::test]
    async fn labels_outside_catalog_keep_current_source() {
        let relay = MockRelay::new(vec![ok("x", Some("Other")), ok("y", None)]);
        let mut form = form("Bonjour", "Hindi");
        form.source_lang = "Marwari".into();
        form.submit(&relay, |_| {}).await;
        assert_eq!(form.source_lang, "Marwari");
    }

    #[tokio::test]
    async fn resubmit_clears_previous_results() {
        let relay = MockRelay::new(vec![
            ok("first formal", None),
            ok("first emotional", None),
            Err(ClientError::Transport("offline".into())),
            Err(ClientError::Transport("offline".into())),
        ]);
        let mut form = form("Hello", "Awadhi");
        form.submit(&relay, |_| {}).await;

        let mut renders = Vec::new();
        form.submit(&relay, |f| renders.push(f.clone())).await;

        assert!(renders[0].formal_response.is_none());
        assert!(renders[0].emotional_response.is_none());
        assert_eq!(form.formal_response.as_deref(), Some(AI_ERROR_PLACEHOLDER));
        assert_eq!(form.emotional_response.as_deref(), Some(HI_ERROR_PLACEHOLDER));
    }

    #[tokio::test]
    async fn submit_while_in_flight_is_busy() {
        let stalled = StalledRelay::default();
        let mut form = form("Hello", "Telugu");

        let timed_out =
            tokio::time::timeout(Duration::from_millis(20), form.submit(&stalled, |_| {})).await;
        assert!(timed_out.is_err());
        assert!(form.in_flight());
        assert!(!form.can_submit());

        let relay = MockRelay::new(vec![ok("a", None), ok("b", None)]);
        let mut renders = Vec::new();
        let outcome = form.submit(&relay, |f| renders.push(f.clone())).await;

        assert_eq!(outcome, SubmitOutcome::Busy);
        assert!(relay.requests().is_empty());
        assert!(renders.is_empty());
        assert_eq!(stalled.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn abandon_releases_a_dropped_submit() {
        let stalled = StalledRelay::default();
        let mut form = form("Hello", "Telugu");
        let _ = tokio::time::timeout(Duration::from_millis(20), form.submit(&stalled, |_| {})).await;

        form.abandon();
        assert!(form.can_submit());

        let relay = MockRelay::new(vec![ok("a", None), ok("b", None)]);
        let outcome = form.submit(&relay, |_| {}).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Completed {
                formal_ok: true,
                emotional_ok: true
            }
        );
        assert_eq!(relay.requests().len(), 2);
    }
}

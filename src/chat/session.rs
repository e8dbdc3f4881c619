//! Core chat session management.
//!
//! This module provides the `ChatSession` struct which owns one user's
//! [`SessionState`] and drives completion calls through a
//! [`CompletionBackend`].  Each turn moves through [`TurnPhase`]; failures are
//! reported through the [`Renderer`] and returned to the caller, and none of
//! them end the session.

use tokio_util::sync::CancellationToken;

use crate::chat::config::ChatConfig;
use crate::chat::render::Renderer;
use crate::chat::state::SessionState;
use crate::chat::theme::Theme;
use crate::client::CompletionBackend;
use crate::error::{Error, Result};
use crate::observability::{
    SESSION_CLEARS, SESSION_RESETS, SESSION_TURN_FAILURES, SESSION_TURNS,
    SESSION_TURNS_CANCELLED,
};
use crate::types::{Completion, Credential, Message, ModelConfig, Usage, temperature_in_range};

/// Replays longer than this many messages log a warning.
pub const LARGE_REPLAY_MESSAGES: usize = 200;

/// Where a turn currently is.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum TurnPhase {
    /// No turn in progress.
    #[default]
    Idle,

    /// The submission was accepted and the credential is being checked.
    AwaitingCredentialCheck,

    /// The completion call is in flight.
    Sending,

    /// A reply arrived and is being recorded.
    Received,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStats {
    /// The model used for the session.
    pub model: String,
    /// The API base requests go to.
    pub endpoint: String,
    /// The sampling temperature.
    pub temperature: f32,
    /// The per-request timeout in seconds.
    pub timeout_secs: u64,
    /// The active theme.
    pub theme: Theme,
    /// Replay window, if limited.
    pub history_window: Option<usize>,
    /// Whether an API key has been entered.
    pub credential_set: bool,
    /// Messages in the transcript, system message included.
    pub message_count: usize,
    /// Human turns in the transcript.
    pub turn_count: usize,
    /// Total completion calls made.
    pub total_requests: u64,
    /// Completion calls that failed.
    pub failed_requests: u64,
    /// Completion calls cancelled by the user.
    pub cancelled_requests: u64,
    /// Prompt tokens across all successful calls.
    pub total_prompt_tokens: u64,
    /// Completion tokens across all successful calls.
    pub total_completion_tokens: u64,
    /// Usage of the last successful call, if reported.
    pub last_turn_usage: Option<Usage>,
}

/// A chat session that manages conversation state and API interactions.
pub struct ChatSession<B: CompletionBackend> {
    backend: B,
    config: ChatConfig,
    state: SessionState,
    phase: TurnPhase,
    usage_totals: Usage,
    last_turn_usage: Option<Usage>,
    request_count: u64,
    failure_count: u64,
    cancel_count: u64,
}

impl<B: CompletionBackend> ChatSession<B> {
    /// Creates a new chat session with the given backend and configuration.
    pub fn new(backend: B, config: ChatConfig) -> Self {
        let state = SessionState::new(config.system_prompt.clone(), config.theme);
        Self {
            backend,
            config,
            state,
            phase: TurnPhase::Idle,
            usage_totals: Usage::default(),
            last_turn_usage: None,
            request_count: 0,
            failure_count: 0,
            cancel_count: 0,
        }
    }

    /// Submits user text and records the reply.
    ///
    /// - Blank input fails with [`Error::Validation`] and renders nothing.
    /// - Without a credential the turn fails with [`Error::Authentication`];
    ///   nothing is appended and no call is made.
    /// - An invalid model configuration fails before the turn is recorded.
    /// - On any other failure the human turn stays in the transcript.
    ///   Submitting the same text again reuses it rather than appending a
    ///   duplicate.
    pub async fn submit(
        &mut self,
        input: &str,
        renderer: &mut dyn Renderer,
        cancel: &CancellationToken,
    ) -> Result<Completion> {
        if input.trim().is_empty() {
            return Err(Error::validation(
                "empty submission",
                Some("content".to_string()),
            ));
        }
        self.transition(TurnPhase::AwaitingCredentialCheck);
        self.check_credential(renderer)?;
        self.check_model_config(renderer)?;

        let resend = self
            .state
            .pending_human()
            .is_some_and(|pending| pending.content == input);
        if !resend {
            self.state.append(Message::human(input))?;
        }
        self.send(!resend, renderer, cancel).await
    }

    /// Resends the unanswered human turn left by a failed call.
    pub async fn retry(
        &mut self,
        renderer: &mut dyn Renderer,
        cancel: &CancellationToken,
    ) -> Result<Completion> {
        if self.state.pending_human().is_none() {
            return Err(Error::validation("no unanswered message to retry", None));
        }
        self.transition(TurnPhase::AwaitingCredentialCheck);
        self.check_credential(renderer)?;
        self.check_model_config(renderer)?;
        self.send(false, renderer, cancel).await
    }

    fn check_credential(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        if self.state.credential().is_empty() {
            self.transition(TurnPhase::Idle);
            renderer.print_warning("Please enter your API key first (use /key).");
            return Err(Error::authentication("API key not set"));
        }
        Ok(())
    }

    fn check_model_config(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        if let Err(err) = self.config.model_config.validate() {
            self.transition(TurnPhase::Idle);
            renderer.print_error(&err.to_string());
            return Err(err);
        }
        Ok(())
    }

    async fn send(
        &mut self,
        appended: bool,
        renderer: &mut dyn Renderer,
        cancel: &CancellationToken,
    ) -> Result<Completion> {
        self.transition(TurnPhase::Sending);
        renderer.start_waiting("Thinking...");
        let result = {
            let transcript = self.state.replay(self.config.history_window);
            if transcript.len() > LARGE_REPLAY_MESSAGES {
                tracing::warn!(
                    messages = transcript.len(),
                    "replaying a long transcript; consider /clear or --history-window"
                );
            }
            tracing::debug!(
                turn = self.state.turn_count(),
                messages = transcript.len(),
                model = %self.config.model_config.model,
                "sending completion"
            );
            let call = self.backend.complete(
                &transcript,
                self.state.credential(),
                &self.config.model_config,
            );
            tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(Error::abort("request cancelled by user")),
                result = call => result,
            }
        };
        renderer.finish_waiting();
        self.request_count = self.request_count.saturating_add(1);

        match result {
            Ok(completion) => {
                self.transition(TurnPhase::Received);
                let reply = Message::ai(completion.text.clone());
                renderer.print_message(&reply);
                self.state.append(reply)?;
                self.record_usage(completion.usage);
                SESSION_TURNS.click();
                self.transition(TurnPhase::Idle);
                Ok(completion)
            }
            Err(err) => {
                self.transition(TurnPhase::Idle);
                self.failure_count = self.failure_count.saturating_add(1);
                if err.is_abort() {
                    self.cancel_count = self.cancel_count.saturating_add(1);
                    SESSION_TURNS_CANCELLED.click();
                    renderer.print_interrupted();
                } else if err.is_authentication() {
                    if appended {
                        self.state.truncate(self.state.len() - 1);
                    }
                    tracing::debug!(error = %err, "provider rejected the API key");
                    renderer.print_warning(&format!("{err}. Please re-enter your API key."));
                } else {
                    SESSION_TURN_FAILURES.click();
                    tracing::debug!(error = %err, "completion failed");
                    renderer.print_error(&err.to_string());
                }
                Err(err)
            }
        }
    }

    fn transition(&mut self, phase: TurnPhase) {
        tracing::trace!(from = ?self.phase, to = ?phase, "turn phase");
        self.phase = phase;
    }

    fn record_usage(&mut self, usage: Option<Usage>) {
        self.last_turn_usage = usage;
        if let Some(usage) = usage {
            self.usage_totals = self.usage_totals + usage;
        }
    }

    /// The current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The session's transcript, credential and theme.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The active configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// The model configuration sent with each call.
    pub fn model_config(&self) -> &ModelConfig {
        &self.config.model_config
    }

    /// The completion backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Clears the conversation history, keeping key, role and theme.
    pub fn clear(&mut self) {
        SESSION_CLEARS.click();
        self.state.clear();
    }

    /// Discards the session and starts over, API key included.
    pub fn reset(&mut self) {
        SESSION_RESETS.click();
        self.state.reset();
        self.usage_totals = Usage::default();
        self.last_turn_usage = None;
        self.request_count = 0;
        self.failure_count = 0;
        self.cancel_count = 0;
    }

    /// Replaces the system prompt for subsequent calls.
    pub fn set_system_prompt(&mut self, prompt: impl Into<String>) -> Result<()> {
        let prompt: String = prompt.into();
        if prompt.trim().is_empty() {
            return Err(Error::validation(
                "system role must not be empty",
                Some("system".to_string()),
            ));
        }
        self.state.set_system_prompt(prompt);
        Ok(())
    }

    /// Restores the persona the session started with.
    pub fn restore_system_prompt(&mut self) {
        let persona = self.state.initial_persona().to_string();
        self.state.set_system_prompt(persona);
    }

    /// Returns the current system prompt.
    pub fn system_prompt(&self) -> &str {
        self.state.system_prompt()
    }

    /// Stores the API key for subsequent calls.
    pub fn set_credential(&mut self, credential: Credential) {
        self.state.set_credential(credential);
    }

    /// Selects a theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.state.set_theme(theme);
    }

    /// Changes the model used for responses.
    pub fn set_model(&mut self, model: impl Into<String>) -> Result<()> {
        let model: String = model.into();
        if model.trim().is_empty() {
            return Err(Error::validation(
                "model must not be empty",
                Some("model".to_string()),
            ));
        }
        self.config.model_config.model = model.trim().to_string();
        Ok(())
    }

    /// Sets the sampling temperature.
    pub fn set_temperature(&mut self, temperature: f32) -> Result<()> {
        if !temperature_in_range(temperature) {
            return Err(Error::validation(
                "temperature must be between 0 and 2",
                Some("temperature".to_string()),
            ));
        }
        self.config.model_config.temperature = temperature;
        Ok(())
    }

    /// Points the session at a different API base.
    ///
    /// The endpoint is left unchanged if `endpoint` is not an http(s) URL.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) -> Result<()> {
        let endpoint: String = endpoint.into();
        let candidate = self
            .config
            .model_config
            .clone()
            .with_endpoint(endpoint.trim());
        candidate.completions_url()?;
        self.config.model_config = candidate;
        Ok(())
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        let model_config = &self.config.model_config;
        SessionStats {
            model: model_config.model.clone(),
            endpoint: model_config.endpoint.clone(),
            temperature: model_config.temperature,
            timeout_secs: model_config.timeout.as_secs(),
            theme: self.state.theme(),
            history_window: self.config.history_window,
            credential_set: !self.state.credential().is_empty(),
            message_count: self.state.len(),
            turn_count: self.state.turn_count(),
            total_requests: self.request_count,
            failed_requests: self.failure_count,
            cancelled_requests: self.cancel_count,
            total_prompt_tokens: self.usage_totals.prompt_tokens,
            total_completion_tokens: self.usage_totals.completion_tokens,
            last_turn_usage: self.last_turn_usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::chat::render::tests::RecordingRenderer;
    use crate::chat::state::DEFAULT_PERSONA;
    use crate::types::Role;

    /// Replies from a fixed script and records every transcript it is sent.
    #[derive(Default)]
    struct ScriptedBackend {
        replies: Mutex<VecDeque<Result<Completion>>>,
        calls: Mutex<Vec<Vec<Message>>>,
        hang: bool,
    }

    impl ScriptedBackend {
        fn with_replies(replies: Vec<Result<Completion>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                ..Self::default()
            }
        }

        fn hanging() -> Self {
            Self {
                hang: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Vec<Message>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(
            &self,
            transcript: &[Message],
            credential: &Credential,
            _config: &ModelConfig,
        ) -> Result<Completion> {
            assert!(!credential.is_empty());
            self.calls.lock().unwrap().push(transcript.to_vec());
            if self.hang {
                std::future::pending::<()>().await;
            }
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Completion::from_text("default reply")))
        }
    }

    fn session(backend: ScriptedBackend) -> ChatSession<ScriptedBackend> {
        let mut session = ChatSession::new(backend, ChatConfig::new());
        session.set_credential(Credential::new("sk-test"));
        session
    }

    fn reply(text: &str) -> Result<Completion> {
        Ok(Completion::from_text(text))
    }

    #[tokio::test]
    async fn hello_with_valid_key() {
        let mut session = session(ScriptedBackend::with_replies(vec![reply("Hi there!")]));
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();

        let completion = session.submit("hello", &mut renderer, &cancel).await.unwrap();

        assert_eq!(completion.text, "Hi there!");
        assert_eq!(
            session.state().messages(),
            &[
                Message::system(DEFAULT_PERSONA),
                Message::human("hello"),
                Message::ai("Hi there!"),
            ]
        );
        assert_eq!(session.phase(), TurnPhase::Idle);
        assert_eq!(
            renderer.events,
            vec![
                "waiting Thinking...".to_string(),
                "done".to_string(),
                "message ai: Hi there!".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn hello_with_empty_key_makes_no_call() {
        let mut session = ChatSession::new(ScriptedBackend::default(), ChatConfig::new());
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();

        let err = session
            .submit("hello", &mut renderer, &cancel)
            .await
            .unwrap_err();

        assert!(err.is_authentication());
        assert_eq!(session.state().messages(), &[Message::system(DEFAULT_PERSONA)]);
        assert!(session.backend().calls().is_empty());
        assert_eq!(renderer.count("warning"), 1);
        assert_eq!(session.stats().total_requests, 0);
    }

    #[tokio::test]
    async fn n_turns_give_2n_plus_1_messages() {
        let mut session = session(ScriptedBackend::default());
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();
        for n in 1..=4 {
            session
                .submit(&format!("question {n}"), &mut renderer, &cancel)
                .await
                .unwrap();
            assert_eq!(session.state().len(), 2 * n + 1);
        }
        let calls = session.backend().calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[3].len(), 7);
        assert_eq!(calls[3][0].role, Role::System);
    }

    #[tokio::test]
    async fn blank_submission_is_ignored() {
        let mut session = session(ScriptedBackend::default());
        let mut renderer = RecordingRenderer::default();
        let err = session
            .submit("  \n", &mut renderer, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(renderer.events.is_empty());
        assert_eq!(session.state().len(), 1);
    }

    #[tokio::test]
    async fn upstream_failure_keeps_human_turn_once() {
        let mut session = session(ScriptedBackend::with_replies(vec![
            Err(Error::internal_server("boom", None)),
            Err(Error::timeout("slow", Some(60.0))),
            reply("finally"),
        ]));
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();

        let err = session.submit("hello", &mut renderer, &cancel).await.unwrap_err();
        assert!(err.is_upstream());
        assert_eq!(session.state().len(), 2);
        assert_eq!(session.state().pending_human(), Some(&Message::human("hello")));
        assert_eq!(renderer.count("error"), 1);

        // Resubmitting the same text reuses the pending turn.
        let err = session.submit("hello", &mut renderer, &cancel).await.unwrap_err();
        assert!(err.is_timeout());
        assert_eq!(session.state().len(), 2);

        session.retry(&mut renderer, &cancel).await.unwrap();
        assert_eq!(
            &session.state().messages()[1..],
            &[Message::human("hello"), Message::ai("finally")]
        );
        let humans = session
            .backend()
            .calls()
            .iter()
            .map(|call| call.iter().filter(|m| m.role == Role::Human).count())
            .collect::<Vec<_>>();
        assert_eq!(humans, vec![1, 1, 1]);

        let stats = session.stats();
        assert_eq!(stats.total_requests, 3);
        assert_eq!(stats.failed_requests, 2);
    }

    #[tokio::test]
    async fn retry_without_pending_turn_is_rejected() {
        let mut session = session(ScriptedBackend::default());
        let mut renderer = RecordingRenderer::default();
        let err = session
            .retry(&mut renderer, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(session.backend().calls().is_empty());
    }

    #[tokio::test]
    async fn provider_auth_rejection_rolls_back_turn() {
        let mut session = session(ScriptedBackend::with_replies(vec![Err(
            Error::authentication("invalid api key"),
        )]));
        let mut renderer = RecordingRenderer::default();

        let err = session
            .submit("hello", &mut renderer, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(err.is_authentication());
        assert_eq!(session.state().len(), 1);
        assert_eq!(renderer.count("warning"), 1);
    }

    #[tokio::test]
    async fn system_prompt_change_affects_next_call_only() {
        let mut session = session(ScriptedBackend::default());
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();

        session.submit("first", &mut renderer, &cancel).await.unwrap();
        let before: Vec<Message> = session.state().visible().cloned().collect();
        session.set_system_prompt("You are a pirate.").unwrap();
        assert_eq!(
            session.state().visible().cloned().collect::<Vec<_>>(),
            before
        );
        session.submit("second", &mut renderer, &cancel).await.unwrap();

        let calls = session.backend().calls();
        assert_eq!(calls[0][0], Message::system(DEFAULT_PERSONA));
        assert_eq!(calls[1][0], Message::system("You are a pirate."));
        assert_eq!(calls[1][1], Message::human("first"));

        assert!(session.set_system_prompt(" ").unwrap_err().is_validation());
        session.restore_system_prompt();
        assert_eq!(session.system_prompt(), DEFAULT_PERSONA);
    }

    #[tokio::test]
    async fn cancellation_keeps_human_turn() {
        let mut session = session(ScriptedBackend::hanging());
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = session.submit("hello", &mut renderer, &cancel).await.unwrap_err();

        assert!(err.is_abort());
        assert_eq!(session.state().pending_human(), Some(&Message::human("hello")));
        assert_eq!(renderer.count("interrupted"), 1);
        assert!(!renderer.waiting);
        assert_eq!(session.stats().cancelled_requests, 1);
        assert_eq!(session.phase(), TurnPhase::Idle);
    }

    #[tokio::test]
    async fn cancellation_while_in_flight() {
        let mut session = session(ScriptedBackend::hanging());
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let err = session.submit("hello", &mut renderer, &cancel).await.unwrap_err();
        assert!(err.is_abort());
        assert_eq!(session.backend().calls().len(), 1);
    }

    #[tokio::test]
    async fn reset_after_three_turns() {
        let mut session = session(ScriptedBackend::default());
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();
        for text in ["one", "two", "three"] {
            session.submit(text, &mut renderer, &cancel).await.unwrap();
        }
        session.set_theme(Theme::Dark);

        session.reset();

        assert_eq!(session.state().messages(), &[Message::system(DEFAULT_PERSONA)]);
        assert!(session.state().credential().is_empty());
        assert_eq!(session.state().theme(), Theme::Light);
        assert_eq!(session.stats().total_requests, 0);
    }

    #[tokio::test]
    async fn clear_keeps_key() {
        let mut session = session(ScriptedBackend::default());
        let mut renderer = RecordingRenderer::default();
        session
            .submit("one", &mut renderer, &CancellationToken::new())
            .await
            .unwrap();
        session.clear();
        assert_eq!(session.state().len(), 1);
        assert!(session.stats().credential_set);
    }

    #[tokio::test]
    async fn history_window_limits_replay() {
        let config = ChatConfig::new().with_history_window(Some(2));
        let mut session = ChatSession::new(ScriptedBackend::default(), config);
        session.set_credential(Credential::new("sk-test"));
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();
        for text in ["one", "two", "three"] {
            session.submit(text, &mut renderer, &cancel).await.unwrap();
        }
        let calls = session.backend().calls();
        assert_eq!(
            calls[2],
            vec![
                Message::system(DEFAULT_PERSONA),
                Message::ai("default reply"),
                Message::human("three"),
            ]
        );
        assert_eq!(session.state().len(), 7);
    }

    #[tokio::test]
    async fn usage_is_accumulated() {
        let mut session = session(ScriptedBackend::with_replies(vec![
            Ok(Completion::from_text("a").with_usage(Usage::new(10, 2))),
            Ok(Completion::from_text("b").with_usage(Usage::new(14, 3))),
        ]));
        let mut renderer = RecordingRenderer::default();
        let cancel = CancellationToken::new();
        session.submit("x", &mut renderer, &cancel).await.unwrap();
        session.submit("y", &mut renderer, &cancel).await.unwrap();

        let stats = session.stats();
        assert_eq!(stats.total_prompt_tokens, 24);
        assert_eq!(stats.total_completion_tokens, 5);
        assert_eq!(stats.last_turn_usage, Some(Usage::new(14, 3)));
        assert_eq!(stats.turn_count, 2);
    }

    #[tokio::test]
    async fn invalid_model_config_records_no_turn() {
        let configs = [
            ChatConfig::new().with_temperature(5.0),
            ChatConfig::new().with_endpoint("ftp://example.com/v1"),
        ];
        for config in configs {
            let mut session = ChatSession::new(ScriptedBackend::default(), config);
            session.set_credential(Credential::new("sk-test"));
            let mut renderer = RecordingRenderer::default();

            let err = session
                .submit("hello", &mut renderer, &CancellationToken::new())
                .await
                .unwrap_err();

            assert!(!err.is_upstream());
            assert_eq!(session.state().messages(), &[Message::system(DEFAULT_PERSONA)]);
            assert_eq!(session.state().pending_human(), None);
            assert!(session.backend().calls().is_empty());
            assert_eq!(renderer.count("error"), 1);
            assert_eq!(session.phase(), TurnPhase::Idle);
            assert_eq!(session.stats().total_requests, 0);
        }
    }

    #[test]
    fn model_config_setters_validate() {
        let mut session = ChatSession::new(ScriptedBackend::default(), ChatConfig::new());

        session.set_model(" gpt-4o ").unwrap();
        assert_eq!(session.model_config().model, "gpt-4o");
        assert!(session.set_model("").unwrap_err().is_validation());

        session.set_temperature(1.5).unwrap();
        assert_eq!(session.model_config().temperature, 1.5);
        assert!(session.set_temperature(3.0).is_err());
        assert_eq!(session.model_config().temperature, 1.5);

        session.set_endpoint("http://localhost:9000/v1").unwrap();
        assert_eq!(session.model_config().endpoint, "http://localhost:9000/v1");
        assert!(session.set_endpoint("not a url").is_err());
        assert_eq!(session.model_config().endpoint, "http://localhost:9000/v1");
    }
}

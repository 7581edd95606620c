use crate::app::{App, CompletionOutcome};

use xofa_core::{ThemeVariant, Turn};

impl App {
    /// Submit the composer text as the next user turn
    ///
    /// Rejected without side effects while a reply is pending or when the
    /// input is blank. On success the user turn is appended, the composer is
    /// cleared and the completion runs on a spawned task.
    pub fn submit_input(&mut self) -> bool {
        if self.state.is_generating() {
            tracing::debug!("submission ignored, reply pending");
            return false;
        }
        if self.state.input.is_blank() {
            tracing::debug!("blank submission ignored");
            return false;
        }

        let prompt = self.state.input.take();
        let prior = self.transcript.all().to_vec();
        self.transcript.append(Turn::user(prompt.clone()));
        self.state.start_generation();
        self.state.ui.follow_newest();
        tracing::debug!(turns = self.transcript.len(), "submission accepted");

        self.spawn_completion(prior, prompt);
        true
    }

    /// Submit text exactly as if it had been typed into the composer
    pub fn submit_text(&mut self, text: &str) -> bool {
        if self.state.is_generating() {
            return false;
        }
        self.state.input.set_text(text);
        self.submit_input()
    }

    /// Submit the highlighted welcome suggestion
    ///
    /// Suggestions only exist on the empty-conversation screen.
    pub fn select_suggestion(&mut self) -> bool {
        if !self.transcript.is_empty() {
            return false;
        }
        match self.state.welcome.selected_suggestion() {
            Some(suggestion) => self.submit_text(suggestion),
            None => false,
        }
    }

    /// Switch the active theme; the conversation is untouched
    pub fn select_theme(&mut self, variant: ThemeVariant) {
        tracing::debug!(theme = %variant, "theme selected");
        self.state.set_theme_variant(variant);
    }

    /// Record a finished completion as the model's turn
    pub fn handle_completion(&mut self, outcome: CompletionOutcome) {
        let text = match outcome {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!(missing_credential = err.is_missing_credential(), "replying with failure message");
                err.user_message()
            }
        };
        self.transcript.append(Turn::model(text));
        self.state.stop_generation();
        self.state.ui.follow_newest();
    }

    /// Wait for the pending completion and apply it
    ///
    /// Returns false when no more outcomes can arrive.
    pub async fn wait_for_completion(&mut self) -> bool {
        match self.completion_rx.recv().await {
            Some(outcome) => {
                self.handle_completion(outcome);
                true
            }
            None => false,
        }
    }

    fn spawn_completion(&self, prior: Vec<Turn>, prompt: String) {
        let client = self.client.clone();
        let tx = self.completion_tx.clone();

        tokio::spawn(async move {
            let outcome = client.complete(&prior, &prompt).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("completion dropped, app closed");
            }
        });
    }
}

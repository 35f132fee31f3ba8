//! The form controller: submit, save, and clear workflows.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use mr_or_ms_core::{
    traits::{AnswerStore, GenderPredictor, Region, RenderSink},
    types::{Gender, SavedAnswer},
    validate,
};

use crate::messages;

/// Orchestrates validation, persistence, and prediction for the name form.
///
/// Collaborators are injected, so the workflows can run against in-memory
/// fakes. No state persists across actions except the last saved answer,
/// which the clear workflow operates on.
pub struct FormController {
    store: Arc<dyn AnswerStore>,
    predictor: Arc<dyn GenderPredictor>,
    sink: Arc<dyn RenderSink>,
    saved: Mutex<Option<SavedAnswer>>,
}

impl FormController {
    /// Create a new controller.
    pub fn new(
        store: Arc<dyn AnswerStore>,
        predictor: Arc<dyn GenderPredictor>,
        sink: Arc<dyn RenderSink>,
    ) -> Self {
        Self {
            store,
            predictor,
            sink,
            saved: Mutex::new(None),
        }
    }

    /// Last saved answer shown to the user, if any.
    pub fn saved_answer(&self) -> Option<SavedAnswer> {
        self.saved.lock().unwrap().clone()
    }

    /// Submit workflow: validate the name, show the saved answer, then
    /// fetch and show the prediction.
    ///
    /// The saved-answer render happens before the fetch is awaited, so it
    /// never waits on the remote service.
    pub async fn submit(&self, raw_name: &str) {
        let name = match validate::accept_name(raw_name) {
            Ok(name) => name.to_string(),
            Err(e) => {
                self.sink.render(Region::Error, &e.to_string());
                return;
            }
        };
        self.sink.render(Region::Error, "");

        self.show_saved(&name).await;
        self.show_prediction(&name).await;
    }

    /// Save workflow: validate name and gender, persist, and confirm.
    ///
    /// The name check runs before the gender check; the first failure is
    /// the one reported.
    pub async fn save(&self, raw_name: &str, selection: Option<Gender>) {
        let validated = validate::accept_name(raw_name)
            .and_then(|name| validate::accept_gender(selection).map(|gender| (name, gender)));
        let (name, gender) = match validated {
            Ok(ok) => ok,
            Err(e) => {
                self.sink.render(Region::Error, &e.to_string());
                return;
            }
        };
        self.sink.render(Region::Error, "");

        if let Err(e) = self.store.set(name, gender).await {
            warn!(error = %e, "Failed to persist answer");
            self.sink.render(Region::Error, &e.user_message());
            return;
        }

        self.remember(name, gender);
        self.sink
            .render(Region::SavedAnswer, &messages::saved_answer(name, gender));
    }

    /// Clear workflow: remove the entry for the last shown saved answer.
    ///
    /// Operates on the name held from the last lookup or save, not the
    /// current input field. The held answer is left stale afterwards.
    pub async fn clear(&self) {
        let name = match self.saved.lock().unwrap().as_ref() {
            Some(answer) => answer.name.clone(),
            None => {
                // Nothing was looked up or saved yet, so there is no key
                // to remove.
                self.sink.render(Region::SavedAnswer, &messages::cleared(""));
                return;
            }
        };

        if let Err(e) = self.store.remove(&name).await {
            warn!(error = %e, "Failed to clear saved answer");
            self.sink.render(Region::Error, &e.user_message());
            return;
        }

        self.sink
            .render(Region::SavedAnswer, &messages::cleared(&name));
    }

    async fn show_saved(&self, name: &str) {
        match self.store.get(name).await {
            Ok(Some(gender)) => {
                self.remember(name, gender);
                self.sink
                    .render(Region::SavedAnswer, &messages::saved_answer(name, gender));
            }
            Ok(None) => {
                self.sink
                    .render(Region::SavedAnswer, &messages::no_saved_answer(name));
            }
            Err(e) => {
                warn!(error = %e, "Answer store lookup failed");
                self.sink.render(Region::Error, &e.user_message());
            }
        }
    }

    async fn show_prediction(&self, name: &str) {
        match self.predictor.predict(name).await {
            Ok(prediction) => match prediction.gender {
                Some(gender) => {
                    self.sink.render(
                        Region::Prediction,
                        &messages::prediction(gender, prediction.probability),
                    );
                }
                None => {
                    // The service answered but knows nothing about the name.
                    self.sink.render(Region::Error, messages::NO_PREDICTION);
                    self.sink.render(Region::Prediction, messages::NO_PREDICTION);
                }
            },
            Err(e) => {
                debug!(error = %e, "Prediction fetch failed");
                self.sink.render(Region::Error, e.user_message());
            }
        }
    }

    fn remember(&self, name: &str, gender: Gender) {
        let mut saved = self.saved.lock().unwrap();
        *saved = Some(SavedAnswer {
            name: name.to_string(),
            gender,
        });
    }
}

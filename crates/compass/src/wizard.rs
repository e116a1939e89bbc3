use crate::client::base::AssessClient;
use compass_config::catalog::{Catalog, Question};
use compass_config::error::ValidationError;
use compass_model::assessment::Assessment;
use compass_model::responses::ResponseSet;
use thiserror::Error;

/// Where the questionnaire currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Answering { index: usize },
    Submitting,
    Complete,
    Failed,
}

/// Outcome of [`Wizard::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next,
    ReadyToSubmit,
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    InvalidAnswer(#[from] ValidationError),

    #[error("the current question has no answer yet")]
    Unanswered,

    #[error("already at the first question")]
    AtStart,

    #[error("the questionnaire is not accepting input in this state")]
    NotAnswering,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("the questionnaire is not ready to submit")]
    NotAnswering,

    #[error("question \"{0}\" has no answer")]
    Incomplete(&'static str),

    #[error(transparent)]
    Submission(#[from] crate::error::Error),
}

/// Linear questionnaire flow over a fixed catalog: answer, advance,
/// retreat, submit once the last step is answered. There is no branching;
/// the question sequence never depends on the values answered.
///
/// The catalog and the submission client are both injected so tests can
/// swap either.
pub struct Wizard<'a> {
    catalog: &'a Catalog,
    state: WizardState,
    responses: ResponseSet,
    assessment: Option<Assessment>,
}

impl<'a> Wizard<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            state: WizardState::Answering { index: 0 },
            responses: ResponseSet::new(),
            assessment: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> WizardState {
        self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    #[must_use]
    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// The assessment carried by the `Complete` state.
    #[must_use]
    pub fn assessment(&self) -> Option<&Assessment> {
        self.assessment.as_ref()
    }

    /// Zero-based step index, present only while answering.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self.state {
            WizardState::Answering { index } => Some(index),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.position().and_then(|index| self.catalog.by_index(index))
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<u8> {
        self.current_question()
            .and_then(|question| self.responses.get(question.id))
    }

    /// Stores an answer for the current question; overwriting is allowed.
    pub fn answer(&mut self, value: u8) -> Result<(), WizardError> {
        let question = self.current_question().ok_or(WizardError::NotAnswering)?;
        question.check_scale(value)?;
        let id = question.id;
        self.responses.insert(id, value);
        Ok(())
    }

    /// The advance control is available only while the current question
    /// has an answer.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.current_answer().is_some()
    }

    /// The retreat control is available at every step except the first.
    #[must_use]
    pub fn can_retreat(&self) -> bool {
        matches!(self.state, WizardState::Answering { index } if index > 0)
    }

    /// Moves to the next step, or signals that the final step is answered
    /// and the flow is ready to submit.
    pub fn advance(&mut self) -> Result<Advance, WizardError> {
        let WizardState::Answering { index } = self.state else {
            return Err(WizardError::NotAnswering);
        };
        if self.current_answer().is_none() {
            return Err(WizardError::Unanswered);
        }
        if index + 1 < self.catalog.len() {
            self.state = WizardState::Answering { index: index + 1 };
            Ok(Advance::Next)
        } else {
            Ok(Advance::ReadyToSubmit)
        }
    }

    /// Moves back one step. The answer of the step left behind stays.
    pub fn retreat(&mut self) -> Result<(), WizardError> {
        let WizardState::Answering { index } = self.state else {
            return Err(WizardError::NotAnswering);
        };
        if index == 0 {
            return Err(WizardError::AtStart);
        }
        self.state = WizardState::Answering { index: index - 1 };
        Ok(())
    }

    /// Submits the complete answer set. Success lands in `Complete`;
    /// failure lands in `Failed`, from where [`Wizard::acknowledge_failure`]
    /// returns to the final question with every answer intact for a retry.
    pub async fn submit<C: AssessClient + Sync>(&mut self, client: &C) -> Result<&Assessment, SubmitError> {
        if !matches!(self.state, WizardState::Answering { .. }) {
            return Err(SubmitError::NotAnswering);
        }
        if let Some(question) = self.catalog.first_unanswered(&self.responses) {
            return Err(SubmitError::Incomplete(question.id));
        }

        self.state = WizardState::Submitting;
        match client.assess(&self.responses).await {
            Ok(assessment) => {
                self.state = WizardState::Complete;
                Ok(&*self.assessment.insert(assessment))
            }
            Err(error) => {
                tracing::warn!(
                    error = &error as &dyn std::error::Error,
                    "assessment submission failed"
                );
                self.state = WizardState::Failed;
                Err(error.into())
            }
        }
    }

    /// Leaves the `Failed` state and returns to the final question.
    pub fn acknowledge_failure(&mut self) {
        if self.state == WizardState::Failed {
            self.state = WizardState::Answering {
                index: self.catalog.len().saturating_sub(1),
            };
        }
    }

    /// Back to the first question with a fresh answer set; any previous
    /// assessment is dropped.
    pub fn restart(&mut self) {
        self.state = WizardState::Answering { index: 0 };
        self.responses.clear();
        self.assessment = None;
    }
}

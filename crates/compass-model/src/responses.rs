use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The user's numeric answers, keyed by question id. Built incrementally
/// while the questionnaire runs; a set is complete once every catalog
/// question has a value.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(transparent)]
pub struct ResponseSet(IndexMap<String, u8>);

impl ResponseSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an answer, replacing any previous value for the same question.
    pub fn insert<I: Into<String>>(&mut self, question_id: I, value: u8) -> Option<u8> {
        self.0.insert(question_id.into(), value)
    }

    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<u8> {
        self.0.get(question_id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.0.iter().map(|(id, value)| (id.as_str(), *value))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<I: Into<String>> FromIterator<(I, u8)> for ResponseSet {
    fn from_iter<T: IntoIterator<Item = (I, u8)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(id, value)| (id.into(), value)).collect())
    }
}

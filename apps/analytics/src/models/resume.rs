use serde::Serialize;

/// Raw, unstructured resume text as submitted by a candidate.
#[derive(Debug, Clone, Serialize)]
pub struct Resume {
    pub text: String,
}

impl Resume {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

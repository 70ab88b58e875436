//! Input provider that replays a fixed list of tokens.

use std::collections::VecDeque;

use super::input::{InputProvider, InputRequest};
use crate::core::InputError;

/// Hands out queued tokens in order, then reports the stream closed.
///
/// Every request is recorded so tests can check what was asked.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    tokens: VecDeque<String>,
    requests: Vec<InputRequest>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(tokens: impl IntoIterator<Item = S>) -> Self {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            requests: Vec::new(),
        }
    }

    /// Queue more tokens.
    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push_back(token.into());
    }

    /// Requests seen so far.
    #[must_use]
    pub fn requests(&self) -> &[InputRequest] {
        &self.requests
    }

    /// Tokens not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl InputProvider for ScriptedInput {
    fn request_token(&mut self, request: &InputRequest) -> Result<String, InputError> {
        self.requests.push(request.clone());
        self.tokens.pop_front().ok_or(InputError::Closed)
    }
}

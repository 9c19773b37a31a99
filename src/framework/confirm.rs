//! User-consent gate consulted before every delete.

use async_trait::async_trait;

/// Asks the user to confirm a destructive action.
///
/// A terminal prompt, a modal dialog or a scripted test double all fit behind this trait.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Gives the same answer to every prompt.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm {
    answer: bool,
}

impl AutoConfirm {
    pub fn accept() -> Self {
        Self { answer: true }
    }

    pub fn decline() -> Self {
        Self { answer: false }
    }
}

#[async_trait]
impl Confirm for AutoConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, answer = self.answer, "Auto confirm");
        self.answer
    }
}

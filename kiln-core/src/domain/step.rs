//! Step domain types

use serde::{Deserialize, Serialize};

/// Signal a step returns to the orchestrating embedder after its forward
/// action.
///
/// `Halt` asks the embedder to stop running further steps; compensation of
/// steps already entered still runs regardless of this signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepAction {
    Continue,
    Halt,
}

impl StepAction {
    /// Whether the embedder should keep running later steps
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_continue() {
        assert!(StepAction::Continue.is_continue());
        assert!(!StepAction::Halt.is_continue());
    }
}

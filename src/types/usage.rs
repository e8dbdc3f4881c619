use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Token accounting reported by the provider for one completion.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    /// Tokens consumed by the replayed transcript.
    #[serde(default)]
    pub prompt_tokens: u64,

    /// Tokens generated for the reply.
    #[serde(default)]
    pub completion_tokens: u64,

    /// Sum of prompt and completion tokens.
    #[serde(default)]
    pub total_tokens: u64,
}

impl Usage {
    /// Create a new `Usage` with the given prompt and completion tokens.
    pub fn new(prompt_tokens: u64, completion_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }
}

impl Add for Usage {
    type Output = Usage;

    fn add(self, rhs: Usage) -> Usage {
        Usage {
            prompt_tokens: self.prompt_tokens.saturating_add(rhs.prompt_tokens),
            completion_tokens: self.completion_tokens.saturating_add(rhs.completion_tokens),
            total_tokens: self.total_tokens.saturating_add(rhs.total_tokens),
        }
    }
}

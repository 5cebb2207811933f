// Poll module
// Lightweight polls attached to an event

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One answer option within a poll. `votes` holds the names of the
/// participants who chose this option, in voting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: u64,
    pub text: String,
    pub votes: Vec<String>,
}

impl PollOption {
    /// Number of votes for this option.
    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }
}

/// A poll created by a participant. Each voter has at most one vote
/// across the poll's options; re-voting moves the vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: u64,
    pub question: String,
    pub options: Vec<PollOption>,
    pub creator: String,
    pub created_at: DateTime<Local>,
}

impl Poll {
    /// Total votes across all options.
    pub fn total_votes(&self) -> usize {
        self.options.iter().map(|option| option.votes.len()).sum()
    }

    /// The option `name` currently voted for, if any.
    pub fn vote_of(&self, name: &str) -> Option<&PollOption> {
        self.options
            .iter()
            .find(|option| option.votes.iter().any(|voter| voter == name))
    }

    /// Look up an option by id.
    pub fn option(&self, option_id: u64) -> Option<&PollOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

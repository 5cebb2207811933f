//! Lightweight polls attached to an event.
//!
//! Anyone with a confirmed name can create a poll or vote. A voter holds
//! at most one vote per poll; voting again moves the vote.

use chrono::Local;
use thiserror::Error;

use crate::models::poll::{Poll, PollOption};

/// Minimum options per poll.
pub const MIN_OPTIONS: usize = 2;
/// Maximum options per poll.
pub const MAX_OPTIONS: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PollError {
    #[error("Poll question cannot be empty")]
    EmptyQuestion,
    #[error("A poll needs at least 2 options")]
    TooFewOptions,
    #[error("A poll can have at most 5 options")]
    TooManyOptions,
    #[error("Poll not found")]
    UnknownPoll,
    #[error("Poll option not found")]
    UnknownOption,
}

/// All polls for one event session, in creation order.
#[derive(Debug, Default)]
pub struct PollBoard {
    polls: Vec<Poll>,
    next_id: u64,
}

impl PollBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a poll. Blank options are dropped before validation, then
    /// the remaining count must be within 2..=5.
    pub fn create(
        &mut self,
        creator: &str,
        question: &str,
        options: &[String],
    ) -> Result<&Poll, PollError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(PollError::EmptyQuestion);
        }

        let texts: Vec<&str> = options
            .iter()
            .map(|option| option.trim())
            .filter(|option| !option.is_empty())
            .collect();
        if texts.len() < MIN_OPTIONS {
            return Err(PollError::TooFewOptions);
        }
        if texts.len() > MAX_OPTIONS {
            return Err(PollError::TooManyOptions);
        }

        let poll = Poll {
            id: self.next_id,
            question: question.to_string(),
            options: texts
                .into_iter()
                .enumerate()
                .map(|(index, text)| PollOption {
                    id: index as u64,
                    text: text.to_string(),
                    votes: Vec::new(),
                })
                .collect(),
            creator: creator.trim().to_string(),
            created_at: Local::now(),
        };
        self.next_id += 1;

        log::debug!("poll {} created by {}", poll.id, poll.creator);
        self.polls.push(poll);
        Ok(self.polls.last().unwrap())
    }

    /// Record `voter`'s vote for one option of a poll. Any previous vote
    /// by the same voter on this poll is removed first, so re-voting
    /// switches the vote rather than stacking it.
    pub fn vote(&mut self, poll_id: u64, option_id: u64, voter: &str) -> Result<(), PollError> {
        let voter = voter.trim();
        let poll = self
            .polls
            .iter_mut()
            .find(|poll| poll.id == poll_id)
            .ok_or(PollError::UnknownPoll)?;

        if !poll.options.iter().any(|option| option.id == option_id) {
            return Err(PollError::UnknownOption);
        }

        for option in &mut poll.options {
            option.votes.retain(|name| name != voter);
            if option.id == option_id {
                option.votes.push(voter.to_string());
            }
        }
        Ok(())
    }

    /// All polls, in creation order.
    pub fn polls(&self) -> &[Poll] {
        &self.polls
    }

    /// Look up a poll by id.
    pub fn get(&self, poll_id: u64) -> Option<&Poll> {
        self.polls.iter().find(|poll| poll.id == poll_id)
    }
}

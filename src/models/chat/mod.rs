// Chat module
// A single message in an event's discussion panel

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One chat message. Ids are assigned sequentially by the chat log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: String,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

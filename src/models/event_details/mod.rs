// EventDetails module
// Event metadata supplied once, at grid-build time

use serde::{Deserialize, Serialize};

use crate::models::time_window::TimeWindow;

/// Metadata describing one scheduling event.
///
/// Display fields plus the immutable candidate window. The window and
/// display fields never change for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub banner: Option<String>,
    pub window: TimeWindow,
}

impl EventDetails {
    /// Create event details with required fields.
    ///
    /// # Arguments
    /// * `id` - Opaque event identifier
    /// * `title` - Event title (required, non-empty after trimming)
    /// * `window` - Candidate date/time window
    ///
    /// # Returns
    /// Returns `Result<EventDetails, String>` with validation.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        window: TimeWindow,
    ) -> Result<Self, String> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err("Please enter an event title".to_string());
        }
        window.validate()?;

        Ok(Self {
            id: id.into(),
            title: title.trim().to_string(),
            description: None,
            banner: None,
            window,
        })
    }

    /// Create a builder for constructing details with optional fields.
    pub fn builder() -> EventDetailsBuilder {
        EventDetailsBuilder::new()
    }
}

/// Builder for creating event details with optional fields.
pub struct EventDetailsBuilder {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    banner: Option<String>,
    window: TimeWindow,
}

impl EventDetailsBuilder {
    /// Create a new builder with the default window.
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            description: None,
            banner: None,
            window: TimeWindow::default(),
        }
    }

    /// Set the event identifier
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the banner image reference
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    /// Set the candidate window
    pub fn window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }

    /// Build the event details
    pub fn build(self) -> Result<EventDetails, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;

        let mut details = EventDetails::new(id, title, self.window)?;
        details.description = self.description.filter(|d| !d.trim().is_empty());
        details.banner = self.banner;
        Ok(details)
    }
}

impl Default for EventDetailsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt construction for reasoning generation.
//!
//! Everything here is pure: the same request always yields a byte-identical
//! prompt, with no clock, randomness or environment involved.

use ahead_core::ProviderMessage;

use crate::request::ReasoningRequest;

/// Persona and output constraints for the assistant.
pub const SYSTEM_PROMPT: &str = "You are AHEAD, a proactive AI health assistant. Generate a brief, compelling explanation (2-3 sentences max) for why you took a specific health-related action on behalf of the user.

Your tone should be:
- Confident but not preachy
- Grounded in science but accessible
- Focused on the specific benefit to the user

Focus on connecting the action to their specific situation and explaining the timing/reasoning.";

/// The kind of action the assistant took, parsed from the open-ended `actionType` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// `order`: something was purchased for the user.
    Order,
    /// `booking`: an appointment was made.
    Booking,
    /// Any other label, e.g. `nudge`.
    Reminder,
}

impl ActionKind {
    /// Parse an `actionType` label. Matching is exact; unknown labels are reminders.
    pub fn from_label(label: &str) -> Self {
        match label {
            "order" => Self::Order,
            "booking" => Self::Booking,
            _ => Self::Reminder,
        }
    }

    /// Past-tense phrase used in the user instruction.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Order => "ordered",
            Self::Booking => "booked",
            Self::Reminder => "sent a reminder about",
        }
    }
}

/// A two-part prompt ready to be sent to a chat-completion provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Fixed system instruction.
    pub system: &'static str,
    /// Per-request user instruction.
    pub user: String,
}

impl Prompt {
    /// The role-tagged `[system, user]` message pair.
    pub fn into_messages(self) -> Vec<ProviderMessage> {
        vec![
            ProviderMessage::system(self.system),
            ProviderMessage::user(self.user),
        ]
    }
}

/// Build the prompt for a validated request.
pub fn build_prompt(request: &ReasoningRequest) -> Prompt {
    let verb = ActionKind::from_label(&request.action_type).verb();
    let user = format!(
        "The user is {context}.\n\n\
         You proactively {verb}: \"{title}\"\n\n\
         Generate a brief explanation for why you took this action and why the timing made sense.",
        context = request.user_context,
        title = request.action_title,
    );

    Prompt {
        system: SYSTEM_PROMPT,
        user,
    }
}

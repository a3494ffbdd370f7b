//! Chat widget state machine.
//!
//! DESIGN
//! ======
//! Every observable behavior of the floating chat widget lives in
//! [`WidgetCore`], a plain struct mutated through reducer-style methods. The
//! methods return [`WidgetAction`] requests (focus the input, send a request,
//! scroll to the contact section) that the component host executes; the core
//! never touches the DOM, so all transitions are unit-testable natively.
//!
//! Two deliberate asymmetries are encoded here and pinned by tests. First,
//! a handled non-success HTTP response sets the error banner while a
//! thrown/network failure does not; both append a canned contact-bearing
//! reply. Second, the redirect auto-scroll fires only for successful
//! replies; fallback messages carry the redirect flag for rendering but do
//! not scroll on their own.
//!
//! Requests are not cancellable, so each [`WidgetAction::SendChat`] carries
//! a sequence number and the response reducers ignore any sequence that is
//! no longer live. Clearing the history mid-flight invalidates the pending
//! sequence; its late reply is dropped instead of landing in the fresh
//! conversation.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use crate::data::profile;
use crate::net::types::WireMessage;

/// Delay before the widget scrolls to the contact section after a reply
/// that asks for it, giving the visitor time to read the message.
pub const REDIRECT_DELAY_MS: u32 = 1500;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Ai,
}

impl Role {
    /// Wire name used by the chat API.
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Ai => "ai",
        }
    }
}

/// A single message in the widget conversation.
///
/// Ids come from the core's monotonic counter and are unique for the whole
/// session, including across history clears.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    /// True only for the transient placeholder shown while awaiting a reply.
    pub is_typing: bool,
    /// True when the UI should steer the visitor toward the contact section.
    pub redirect_to_contact: bool,
}

/// Observable lifecycle phase of the widget, derived from the core fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    /// Launcher only; an unread badge may be showing.
    Closed,
    /// Panel open with no conversation yet (greeting visible).
    OpenEmpty,
    /// Panel open with at least one message.
    OpenConversing,
    /// A request is in flight; the typing placeholder is showing.
    Sending,
    /// The clear-history confirmation overlay is up.
    ConfirmingClear,
}

/// Side effects requested by a transition, executed by the component host.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetAction {
    /// Focus the message input.
    FocusInput,
    /// POST the new message plus the prior history to the chat proxy. The
    /// host hands `seq` back to the response reducers so a reply from a
    /// cleared request can be told apart from the live one.
    SendChat {
        seq: u64,
        message: String,
        history: Vec<WireMessage>,
    },
    /// Scroll to the contact section after the given delay.
    ScrollToContact { delay_ms: u32 },
}

/// The whole widget state. Single-threaded; one instance per session behind
/// an `RwSignal` context.
#[derive(Debug, Clone)]
pub struct WidgetCore {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    /// Draft text in the input box.
    pub input: String,
    /// True from submit until the response (of any kind) lands.
    pub in_flight: bool,
    pub confirming_clear: bool,
    /// Set on the first submit; cleared only by a confirmed clear.
    pub conversation_started: bool,
    /// Replies that arrived while the panel was closed.
    pub unread: u32,
    pub banner: Option<String>,
    next_id: u64,
    /// Sequence of the live request. Bumped on every submit and again when
    /// a mid-flight clear orphans the pending request.
    request_seq: u64,
}

impl Default for WidgetCore {
    fn default() -> Self {
        Self {
            open: false,
            messages: Vec::new(),
            input: String::new(),
            in_flight: false,
            confirming_clear: false,
            conversation_started: false,
            unread: 0,
            banner: None,
            next_id: 1,
            request_seq: 0,
        }
    }
}

impl WidgetCore {
    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> WidgetPhase {
        if !self.open {
            return WidgetPhase::Closed;
        }
        if self.confirming_clear {
            return WidgetPhase::ConfirmingClear;
        }
        if self.in_flight {
            return WidgetPhase::Sending;
        }
        if self.messages.is_empty() {
            WidgetPhase::OpenEmpty
        } else {
            WidgetPhase::OpenConversing
        }
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty() && !self.in_flight && !self.confirming_clear
    }

    // --- Open/close ---

    /// Toggle the panel. Opening clears the unread counter and asks the host
    /// to focus the input; closing dismisses a pending clear confirmation
    /// but never cancels an in-flight request.
    pub fn toggle_open(&mut self) -> Vec<WidgetAction> {
        self.open = !self.open;
        if self.open {
            self.unread = 0;
            vec![WidgetAction::FocusInput]
        } else {
            self.confirming_clear = false;
            Vec::new()
        }
    }

    // --- Input ---

    /// Store the draft text. Autosizing the textarea is a host concern.
    pub fn set_input(&mut self, text: String) {
        self.input = text;
    }

    // --- Submit / response ---

    /// Submit the draft. No-op when the draft is blank, a request is already
    /// in flight, or the clear confirmation is up. Appends the user message
    /// and the typing placeholder, then asks the host to send the request
    /// with the prior (non-placeholder) history.
    pub fn submit(&mut self) -> Vec<WidgetAction> {
        let text = self.input.trim().to_owned();
        if text.is_empty() || self.in_flight || self.confirming_clear {
            return Vec::new();
        }

        let history: Vec<WireMessage> = self
            .messages
            .iter()
            .filter(|m| !m.is_typing)
            .map(|m| WireMessage {
                role: m.role.as_wire().to_owned(),
                content: m.content.clone(),
            })
            .collect();

        self.push_message(Role::User, text.clone(), false, false);
        self.conversation_started = true;
        self.input.clear();
        self.banner = None;
        self.push_message(Role::Ai, String::new(), true, false);
        self.in_flight = true;
        self.request_seq += 1;

        vec![WidgetAction::SendChat { seq: self.request_seq, message: text, history }]
    }

    /// A successful reply arrived: swap the placeholder for the real
    /// message. Emits the deferred contact scroll iff the reply asks for it.
    /// A reply whose `seq` is no longer live is dropped.
    pub fn response_ok(
        &mut self,
        seq: u64,
        content: String,
        redirect_to_contact: bool,
    ) -> Vec<WidgetAction> {
        if seq != self.request_seq {
            return Vec::new();
        }
        self.remove_placeholder();
        self.push_message(Role::Ai, content, false, redirect_to_contact);
        self.in_flight = false;
        if !self.open {
            self.unread += 1;
        }
        if redirect_to_contact {
            vec![WidgetAction::ScrollToContact { delay_ms: REDIRECT_DELAY_MS }]
        } else {
            Vec::new()
        }
    }

    /// The server answered with a non-success status: append the canned
    /// HTTP-failure reply and raise the error banner. Stale sequences are
    /// dropped.
    pub fn response_http_error(&mut self, seq: u64, status: u16) -> Vec<WidgetAction> {
        if seq != self.request_seq {
            return Vec::new();
        }
        self.remove_placeholder();
        self.push_message(Role::Ai, http_fallback_message(), false, true);
        self.banner = Some(format!("Assistant request failed ({status})."));
        self.in_flight = false;
        if !self.open {
            self.unread += 1;
        }
        Vec::new()
    }

    /// The request itself failed (network error, malformed response body):
    /// append the canned exception reply. This path raises no banner; only
    /// handled error statuses do. Stale sequences are dropped.
    pub fn response_network_error(&mut self, seq: u64) -> Vec<WidgetAction> {
        if seq != self.request_seq {
            return Vec::new();
        }
        self.remove_placeholder();
        self.push_message(Role::Ai, network_fallback_message(), false, true);
        self.in_flight = false;
        if !self.open {
            self.unread += 1;
        }
        Vec::new()
    }

    // --- Clear history ---

    /// Ask for confirmation before wiping the conversation.
    pub fn request_clear(&mut self) {
        self.confirming_clear = true;
    }

    /// Wipe the conversation and return to the open-empty state. Safe on an
    /// already-empty conversation. The id counter is not reset, so message
    /// ids stay unique across clears. A request still in flight is orphaned:
    /// its sequence stops being live, so its eventual reply is dropped.
    pub fn confirm_clear(&mut self) {
        self.messages.clear();
        self.conversation_started = false;
        self.banner = None;
        self.confirming_clear = false;
        if self.in_flight {
            self.request_seq += 1;
            self.in_flight = false;
        }
    }

    /// Dismiss the confirmation overlay, leaving everything else unchanged.
    pub fn cancel_clear(&mut self) {
        self.confirming_clear = false;
    }

    /// Close the error banner.
    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    // --- Internal ---

    fn push_message(&mut self, role: Role, content: String, is_typing: bool, redirect: bool) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            content,
            is_typing,
            redirect_to_contact: redirect,
        });
    }

    fn remove_placeholder(&mut self) {
        self.messages.retain(|m| !m.is_typing);
    }
}

/// Canned reply appended when the server answers with an error status.
#[must_use]
pub fn http_fallback_message() -> String {
    format!(
        "I couldn't reach the assistant service just now. You can email Tanvir directly at \
         [{email}](mailto:{email}) or head to the [contact form](#contact) and you'll hear \
         back quickly.",
        email = profile::EMAIL
    )
}

/// Canned reply appended when the request itself fails.
#[must_use]
pub fn network_fallback_message() -> String {
    format!(
        "Something went wrong on my end. Please reach out at [{email}](mailto:{email}) or \
         through the [contact form](#contact); every message gets a reply.",
        email = profile::EMAIL
    )
}

//! Booking acceptance — recognizes a visitor saying "yes" to the consultation
//! invite that closes every generated answer.
//!
//! Stateless: the caller passes the previous assistant reply. The check runs
//! before the engine and does not consume a rate-limit slot.

use std::sync::LazyLock;

use regex::Regex;

/// Marker identifying a reply that ended with the consultation invite.
const INVITE_MARKER: &str = "Would you like to book a session";

pub const BOOKING_ACCEPTED: &str = "Great! I'm glad you're interested in a consultation. Please click the button below to contact me, and we can schedule a session that works for you.";

static AFFIRMATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(yes|yeah|sure|absolutely|ok|okay|yep|yup|definitely|please|i would|of course|sounds good|let's do it)$",
    )
    .expect("Invalid affirmative regex")
});

/// True when `reply_to` carried the invite and `text` is a plain affirmative.
pub fn accepts_booking(text: &str, reply_to: Option<&str>) -> bool {
    let invited = reply_to.is_some_and(|prev| prev.contains(INVITE_MARKER));
    invited && AFFIRMATIVE.is_match(text.trim())
}

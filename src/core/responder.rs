//! Scripted reply selection and delayed delivery.
//!
//! `select_response` is the only decision logic in the application: a pure,
//! total function from user text to a canned reply. Delivery timing lives in
//! [`ResponderService`], which simulates the concierge "thinking" before a
//! reply lands in the transcript.

use std::collections::BTreeMap;
use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Bounds for the simulated thinking delay, inclusive.
pub const THINKING_DELAY_MIN_MS: u64 = 1000;
pub const THINKING_DELAY_MAX_MS: u64 = 2500;

#[derive(Debug, Deserialize)]
pub struct CannedReply {
    pub keyword: String,
    pub reply: String,
}

#[derive(Debug, Deserialize)]
pub struct FallbackReplies {
    pub help_menu: String,
    pub turnaround: String,
    pub clarify: String,
}

#[derive(Debug, Deserialize)]
pub struct ResponseTable {
    pub greeting: String,
    /// Declaration order doubles as match priority.
    pub replies: Vec<CannedReply>,
    pub fallbacks: FallbackReplies,
}

fn parse_builtin_responses() -> ResponseTable {
    const TABLE_CONTENT: &str = include_str!("../builtin_responses.toml");
    toml::from_str(TABLE_CONTENT).expect("Failed to parse builtin_responses.toml")
}

/// The static reply table, parsed once on first use and shared for the
/// process lifetime.
pub fn response_table() -> &'static ResponseTable {
    static TABLE: OnceLock<ResponseTable> = OnceLock::new();
    TABLE.get_or_init(parse_builtin_responses)
}

/// Pick the canned reply for a piece of user input.
///
/// The input is lowercased, then matched against the keyword table in
/// declaration order; the first keyword occurring anywhere as a substring
/// wins. Two fallback tiers follow (help/support, then time/long) before the
/// fixed clarifying question. Matching is substring-based on purpose, so a
/// keyword embedded in a longer word still triggers its reply.
pub fn select_response(input: &str) -> &'static str {
    let table = response_table();
    let normalized = input.to_lowercase();

    for entry in &table.replies {
        if normalized.contains(entry.keyword.as_str()) {
            return &entry.reply;
        }
    }

    if normalized.contains("help") || normalized.contains("support") {
        return &table.fallbacks.help_menu;
    }

    if normalized.contains("time") || normalized.contains("long") {
        return &table.fallbacks.turnaround;
    }

    &table.fallbacks.clarify
}

/// A reply ready to be appended, tagged with its submission sequence number.
#[derive(Clone, Debug)]
pub struct ReplyDelivery {
    pub seq: u64,
    pub content: String,
}

pub struct ReplyParams {
    pub seq: u64,
    pub content: String,
    pub cancel_token: CancellationToken,
}

/// Funnels delayed replies back to the event loop over one channel. Each
/// submission owns an independent timer task; cancelling the token tears all
/// pending timers down before they can touch disposed UI state.
#[derive(Clone)]
pub struct ResponderService {
    tx: mpsc::UnboundedSender<ReplyDelivery>,
}

impl ResponderService {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ReplyDelivery>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn spawn_reply(&self, params: ReplyParams) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let ReplyParams {
                seq,
                content,
                cancel_token,
            } = params;

            let delay = thinking_delay();
            tracing::debug!(seq, delay_ms = delay.as_millis() as u64, "reply scheduled");

            tokio::select! {
                _ = cancel_token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = tx.send(ReplyDelivery { seq, content });
                }
            }
        });
    }
}

/// Uniformly random delay in `THINKING_DELAY_MIN_MS..=THINKING_DELAY_MAX_MS`.
/// Falls back to the midpoint if the OS entropy source is unavailable, since
/// a deterministic delay is preferable to a failed reply.
fn thinking_delay() -> Duration {
    let span = THINKING_DELAY_MAX_MS - THINKING_DELAY_MIN_MS + 1;
    let mut seed = [0u8; 8];
    let jitter = match getrandom::fill(&mut seed) {
        Ok(()) => u64::from_le_bytes(seed) % span,
        Err(_) => span / 2,
    };
    Duration::from_millis(THINKING_DELAY_MIN_MS + jitter)
}

/// Re-orders deliveries so replies append in submission order even when the
/// independent timers fire out of order. Early arrivals wait in a buffer
/// until every earlier sequence number has been released.
#[derive(Debug, Default)]
pub struct ReplySequencer {
    next_seq: u64,
    held: BTreeMap<u64, String>,
}

impl ReplySequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept one delivery and return every reply now releasable, in order.
    pub fn accept(&mut self, delivery: ReplyDelivery) -> Vec<String> {
        self.held.insert(delivery.seq, delivery.content);

        let mut ready = Vec::new();
        while let Some(content) = self.held.remove(&self.next_seq) {
            ready.push(content);
            self.next_seq += 1;
        }
        ready
    }

    /// Number of deliveries not yet released (scheduled or held).
    pub fn in_flight(&self, scheduled: u64) -> u64 {
        scheduled.saturating_sub(self.next_seq)
    }
}

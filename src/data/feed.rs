//! Real-Time Feed
//!
//! Call records shown in the live feed table, plus a small simulation that
//! keeps the feed moving. No transport is involved: new records are
//! synthesized in-process from a rotation of callers and intents.

use crate::consts::ui_consts::{FEED_EMIT_INTERVAL_TICKS, MAX_FEED_RECORDS};
use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::rc::Rc;

/// How a call ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum FeedStatus {
    #[strum(serialize = "success")]
    Success,
    #[strum(serialize = "forwarded")]
    Forwarded,
    #[strum(serialize = "recovered")]
    Recovered,
}

/// One handled interaction. Immutable once constructed; the selection store
/// references records through `Rc` rather than copying them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRecord {
    pub id: String,
    pub time: String,
    pub caller: String,
    pub intent: String,
    pub outcome: String,
    pub transcript: String,
    pub status: FeedStatus,
}

impl FeedRecord {
    fn seeded(
        id: &str,
        time: &str,
        caller: &str,
        intent: &str,
        outcome: &str,
        transcript: &str,
        status: FeedStatus,
    ) -> Rc<Self> {
        Rc::new(Self {
            id: id.to_string(),
            time: time.to_string(),
            caller: caller.to_string(),
            intent: intent.to_string(),
            outcome: outcome.to_string(),
            transcript: transcript.to_string(),
            status,
        })
    }

    /// The follow-up hint shown in the drill-down view.
    pub fn next_step(&self) -> &'static str {
        match self.status {
            FeedStatus::Success => "✓ Call completed successfully",
            FeedStatus::Forwarded => "→ Follow-up required by specialist",
            FeedStatus::Recovered => "⚡ Customer re-engaged via SMS",
        }
    }
}

/// The records seeding the feed on mount, newest first.
pub fn seed_records() -> Vec<Rc<FeedRecord>> {
    vec![
        FeedRecord::seeded(
            "1",
            "14:23:15",
            "Sarah Johnson",
            "Appointment Booking",
            "Booked for Tuesday 2PM",
            "Hi, I'd like to schedule an appointment for a consultation. Tuesday afternoon \
             would be perfect if you have anything available.",
            FeedStatus::Success,
        ),
        FeedRecord::seeded(
            "2",
            "14:18:42",
            "Mike Chen",
            "Service Inquiry",
            "Info provided",
            "I'm interested in your premium package. Can you tell me more about what's \
             included and the pricing?",
            FeedStatus::Success,
        ),
        FeedRecord::seeded(
            "3",
            "14:15:31",
            "Unlisted",
            "Complex Query",
            "Transferred to specialist",
            "I have a very specific technical question about your advanced features that \
             requires specialized knowledge.",
            FeedStatus::Forwarded,
        ),
        FeedRecord::seeded(
            "4",
            "14:12:08",
            "Jennifer Martinez",
            "Billing Question",
            "Resolved via SMS follow-up",
            "I missed your call about my billing question, but I got the SMS with the \
             answer. Thank you!",
            FeedStatus::Recovered,
        ),
        FeedRecord::seeded(
            "5",
            "14:09:17",
            "David Wilson",
            "Cancellation",
            "Retention successful",
            "I was thinking about canceling, but after discussing the new features, I'd \
             like to stay. Thanks for the help.",
            FeedStatus::Success,
        ),
    ]
}

const CALLERS: [&str; 6] = [
    "Emma Wilson",
    "Robert King",
    "Priya Patel",
    "Unlisted",
    "Carlos Mendez",
    "Grace Liu",
];

const INTENTS: [(&str, &str, FeedStatus); 5] = [
    (
        "Appointment Booking",
        "Booked next opening",
        FeedStatus::Success,
    ),
    ("Service Inquiry", "Info provided", FeedStatus::Success),
    (
        "Complex Query",
        "Transferred to specialist",
        FeedStatus::Forwarded,
    ),
    (
        "Missed Call",
        "Recovered via SMS follow-up",
        FeedStatus::Recovered,
    ),
    ("Billing Question", "Resolved on the line", FeedStatus::Success),
];

const TRANSCRIPTS: [&str; 3] = [
    "Hello, I was hoping to get some help with my account. The assistant walked me \
     through it right away.",
    "I'd like to know whether you have availability later this week for a consultation.",
    "Quick question about the service tiers — which one includes priority support?",
];

/// The live feed: a capped, newest-first queue of records plus the simulator
/// that appends new ones on a tick cadence.
#[derive(Debug)]
pub struct Feed {
    records: VecDeque<Rc<FeedRecord>>,
    rng: StdRng,
    next_id: u64,
    ticks_since_emit: usize,
}

impl Feed {
    /// Seed the feed. A fixed `seed` makes the simulation reproducible;
    /// `None` draws from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            records: seed_records().into_iter().collect(),
            rng,
            next_id: 6,
            ticks_since_emit: 0,
        }
    }

    pub fn records(&self) -> &VecDeque<Rc<FeedRecord>> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rc<FeedRecord>> {
        self.records.get(index)
    }

    /// Advance the simulation one UI tick. Emits a synthesized record every
    /// `FEED_EMIT_INTERVAL_TICKS` ticks and enforces the feed cap.
    pub fn tick(&mut self) {
        self.ticks_since_emit += 1;
        if self.ticks_since_emit < FEED_EMIT_INTERVAL_TICKS {
            return;
        }
        self.ticks_since_emit = 0;

        let caller = CALLERS[self.rng.gen_range(0..CALLERS.len())];
        let (intent, outcome, status) = INTENTS[self.rng.gen_range(0..INTENTS.len())];
        let transcript = TRANSCRIPTS[self.rng.gen_range(0..TRANSCRIPTS.len())];

        let record = Rc::new(FeedRecord {
            id: self.next_id.to_string(),
            time: Local::now().format("%H:%M:%S").to_string(),
            caller: caller.to_string(),
            intent: intent.to_string(),
            outcome: outcome.to_string(),
            transcript: transcript.to_string(),
            status,
        });
        self.next_id += 1;

        self.records.push_front(record);
        if self.records.len() > MAX_FEED_RECORDS {
            self.records.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_records_are_the_five_known_calls() {
        let records = seed_records();
        assert_eq!(records.len(), 5);
        assert_eq!(records[2].id, "3");
        assert_eq!(records[2].status, FeedStatus::Forwarded);
        assert_eq!(records[4].caller, "David Wilson");
    }

    #[test]
    fn feed_emits_after_interval_and_prepends() {
        let mut feed = Feed::new(Some(7));
        let before = feed.len();
        for _ in 0..FEED_EMIT_INTERVAL_TICKS {
            feed.tick();
        }
        assert_eq!(feed.len(), before + 1);
        // Newest record lands at the front with the next id.
        assert_eq!(feed.get(0).unwrap().id, "6");
    }

    #[test]
    fn feed_is_capped() {
        let mut feed = Feed::new(Some(7));
        for _ in 0..FEED_EMIT_INTERVAL_TICKS * (MAX_FEED_RECORDS + 10) {
            feed.tick();
        }
        assert_eq!(feed.len(), MAX_FEED_RECORDS);
    }

    #[test]
    fn seeded_feeds_are_reproducible() {
        let mut a = Feed::new(Some(42));
        let mut b = Feed::new(Some(42));
        for _ in 0..FEED_EMIT_INTERVAL_TICKS * 3 {
            a.tick();
            b.tick();
        }
        let callers_a: Vec<_> = a.records().iter().map(|r| r.caller.clone()).collect();
        let callers_b: Vec<_> = b.records().iter().map(|r| r.caller.clone()).collect();
        assert_eq!(callers_a, callers_b);
    }
}

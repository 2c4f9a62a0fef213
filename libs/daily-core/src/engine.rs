//! Daily state engine.
//!
//! Each operation is a full read-modify-write of the stored state. Storage
//! failures are logged and degrade gracefully: an unreadable state counts as
//! absent and a failed write is dropped.

use crate::calendar;
use crate::selection::{MessagePicker, RandomPicker};
use crate::store::StateStore;
use crate::types::{AppState, MessageId, Resolution};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;

/// Today's message and the state it was resolved from.
#[derive(Debug, Clone, Serialize)]
pub struct Today {
    pub date: NaiveDate,
    pub message_id: MessageId,
    pub resolution: Resolution,
    pub first_run: bool,
    pub state: AppState,
}

/// Engine owning a state store and a message picker.
pub struct DailyEngine<S, P = RandomPicker> {
    store: S,
    picker: P,
    daily_reset_hour: u32,
}

impl<S: StateStore> DailyEngine<S, RandomPicker> {
    /// Engine with an entropy-seeded picker.
    pub fn with_store(store: S) -> Self {
        Self::new(store, RandomPicker::from_entropy())
    }
}

impl<S: StateStore, P: MessagePicker> DailyEngine<S, P> {
    pub fn new(store: S, picker: P) -> Self {
        Self {
            store,
            picker,
            daily_reset_hour: 0,
        }
    }

    /// Hour (0-23) at which a new day starts.
    pub fn with_daily_reset_hour(mut self, hour: u32) -> Self {
        self.daily_reset_hour = hour.min(23);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adjusted calendar date for a local time.
    pub fn today(&self, now: &DateTime<Local>) -> NaiveDate {
        calendar::local_today(now, self.daily_reset_hour)
    }

    /// Currently stored state, if readable.
    pub fn state(&self) -> Option<AppState> {
        match self.store.load() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Failed to read app state, treating as absent: {}", e);
                None
            }
        }
    }

    fn persist(&self, state: &AppState) {
        if let Err(e) = self.store.save(state) {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }

    /// Determine today's message, creating or advancing the stored state.
    pub fn initialize_or_advance(&mut self, now: DateTime<Local>) -> Today {
        let date = self.today(&now);
        let now_utc = now.with_timezone(&Utc);

        let Some(mut state) = self.state() else {
            let state = AppState::first_run(date, now_utc, &mut self.picker);
            self.persist(&state);
            let resolution = if calendar::is_special_date(date) {
                Resolution::Special
            } else {
                Resolution::Selected
            };
            let message_id = state.today_message_id.unwrap_or(calendar::SPECIAL_MESSAGE_ID);
            tracing::info!("Initialized app state, message {} for {}", message_id, date);
            return Today {
                date,
                message_id,
                resolution,
                first_run: true,
                state,
            };
        };

        let resolution = state.advance(date, now_utc, &mut self.picker);
        if resolution == Resolution::Selected {
            self.persist(&state);
        }
        let message_id = state.today_message_id.unwrap_or(calendar::SPECIAL_MESSAGE_ID);
        tracing::debug!(?resolution, "Message {} for {}", message_id, date);

        Today {
            date,
            message_id,
            resolution,
            first_run: false,
            state,
        }
    }

    /// Claim a reward. Returns true if the claim was new and saved.
    ///
    /// Without stored state this is a no-op.
    pub fn claim(&mut self, id: MessageId) -> bool {
        let Some(mut state) = self.state() else {
            return false;
        };
        if !state.claim(id) {
            return false;
        }
        self.persist(&state);
        tracing::info!("Claimed reward {}", id);
        true
    }

    /// Redeem a reward. Returns true if the redemption was new and saved.
    ///
    /// Unclaimed ids are accepted.
    pub fn redeem(&mut self, id: MessageId) -> bool {
        let Some(mut state) = self.state() else {
            return false;
        };
        if !state.is_claimed(id) {
            tracing::warn!("Redeeming reward {} that was never claimed", id);
        }
        if !state.redeem(id) {
            return false;
        }
        self.persist(&state);
        tracing::info!("Redeemed reward {}", id);
        true
    }

    pub fn unredeemed_rewards(&self) -> Vec<MessageId> {
        self.state()
            .map(|s| s.unredeemed_rewards())
            .unwrap_or_default()
    }

    pub fn claimed_rewards(&self) -> Vec<MessageId> {
        self.state().map(|s| s.claimed_rewards).unwrap_or_default()
    }

    pub fn is_reward_claimed(&self, id: MessageId) -> bool {
        self.state().is_some_and(|s| s.is_claimed(id))
    }

    pub fn is_reward_redeemed(&self, id: MessageId) -> bool {
        self.state().is_some_and(|s| s.is_redeemed(id))
    }

    /// Delete all stored state.
    pub fn reset(&mut self) {
        match self.store.clear() {
            Ok(()) => tracing::info!("App state reset"),
            Err(e) => tracing::warn!("Failed to reset app state: {}", e),
        }
    }
}

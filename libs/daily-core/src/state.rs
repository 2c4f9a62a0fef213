//! Pure transitions on the persisted application state.
//!
//! Nothing here touches storage; the engine decides when to persist.

use crate::calendar::{self, SPECIAL_MESSAGE_ID};
use crate::selection::{self, MessagePicker};
use crate::types::{AppState, MessageId, Resolution};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

impl AppState {
    /// Fresh state for a first run on `today`.
    ///
    /// Today's message goes into the history. On the special date that is the
    /// override message rather than a random pick.
    pub fn first_run(today: NaiveDate, now: DateTime<Utc>, picker: &mut dyn MessagePicker) -> Self {
        let mut state = Self {
            start_date: calendar::relationship_start(),
            shown_messages: BTreeMap::new(),
            claimed_rewards: Vec::new(),
            redeemed_rewards: Vec::new(),
            last_opened: now,
            today_message_id: None,
        };
        let id = if calendar::is_special_date(today) {
            SPECIAL_MESSAGE_ID
        } else {
            selection::select_message(&state.shown_messages, picker)
        };
        state.shown_messages.insert(today, id);
        state.today_message_id = Some(id);
        state
    }

    /// Resolve today's message, recording a new pick if the day is new.
    ///
    /// Returns how the message was resolved. Only `Resolution::Selected`
    /// changes the history.
    pub fn advance(
        &mut self,
        today: NaiveDate,
        now: DateTime<Utc>,
        picker: &mut dyn MessagePicker,
    ) -> Resolution {
        self.last_opened = now;

        if calendar::is_special_date(today) {
            self.today_message_id = Some(SPECIAL_MESSAGE_ID);
            return Resolution::Special;
        }

        if let Some(&id) = self.shown_messages.get(&today) {
            self.today_message_id = Some(id);
            return Resolution::Existing;
        }

        let id = selection::select_message(&self.shown_messages, picker);
        self.shown_messages.insert(today, id);
        self.today_message_id = Some(id);
        Resolution::Selected
    }

    /// Message recorded for `date`, if any.
    pub fn shown_on(&self, date: NaiveDate) -> Option<MessageId> {
        self.shown_messages.get(&date).copied()
    }

    /// Mark a reward as claimed. Returns true if the set changed.
    pub fn claim(&mut self, id: MessageId) -> bool {
        if self.claimed_rewards.contains(&id) {
            return false;
        }
        self.claimed_rewards.push(id);
        true
    }

    /// Mark a reward as redeemed. Returns true if the set changed.
    ///
    /// Claim status is not checked.
    pub fn redeem(&mut self, id: MessageId) -> bool {
        if self.redeemed_rewards.contains(&id) {
            return false;
        }
        self.redeemed_rewards.push(id);
        true
    }

    pub fn is_claimed(&self, id: MessageId) -> bool {
        self.claimed_rewards.contains(&id)
    }

    pub fn is_redeemed(&self, id: MessageId) -> bool {
        self.redeemed_rewards.contains(&id)
    }

    /// Claimed rewards not yet redeemed, in claim order.
    pub fn unredeemed_rewards(&self) -> Vec<MessageId> {
        self.claimed_rewards
            .iter()
            .copied()
            .filter(|id| !self.redeemed_rewards.contains(id))
            .collect()
    }

    /// Day counter relative to the start date.
    pub fn days_together(&self, today: NaiveDate) -> u32 {
        calendar::days_together(self.start_date, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::RandomPicker;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_run_records_one_entry() {
        let mut picker = RandomPicker::seeded(1);
        let today = date(2025, 3, 1);
        let state = AppState::first_run(today, Utc::now(), &mut picker);

        assert_eq!(state.start_date, calendar::relationship_start());
        assert_eq!(state.shown_messages.len(), 1);
        assert_eq!(state.today_message_id, state.shown_on(today));
        assert!(state.claimed_rewards.is_empty());
        assert!(state.redeemed_rewards.is_empty());
    }

    #[test]
    fn first_run_on_special_date_records_override() {
        let mut picker = RandomPicker::seeded(1);
        let christmas = date(2025, 12, 25);
        let state = AppState::first_run(christmas, Utc::now(), &mut picker);
        assert_eq!(state.today_message_id, Some(SPECIAL_MESSAGE_ID));
        assert_eq!(state.shown_messages.len(), 1);
        assert_eq!(state.shown_on(christmas), Some(SPECIAL_MESSAGE_ID));
    }

    #[test]
    fn advance_same_day_is_existing() {
        let mut picker = RandomPicker::seeded(2);
        let today = date(2025, 3, 1);
        let mut state = AppState::first_run(today, Utc::now(), &mut picker);
        let first = state.today_message_id;

        assert_eq!(state.advance(today, Utc::now(), &mut picker), Resolution::Existing);
        assert_eq!(state.today_message_id, first);
        assert_eq!(state.shown_messages.len(), 1);
    }

    #[test]
    fn advance_new_day_selects() {
        let mut picker = RandomPicker::seeded(3);
        let mut state = AppState::first_run(date(2025, 3, 1), Utc::now(), &mut picker);

        let next = date(2025, 3, 2);
        assert_eq!(state.advance(next, Utc::now(), &mut picker), Resolution::Selected);
        assert_eq!(state.shown_messages.len(), 2);
        assert_eq!(state.today_message_id, state.shown_on(next));
        assert_ne!(state.shown_on(next), state.shown_on(date(2025, 3, 1)));
    }

    #[test]
    fn special_date_overrides_history() {
        let mut picker = RandomPicker::seeded(4);
        let christmas = date(2025, 12, 25);
        let mut state = AppState::first_run(date(2025, 12, 24), Utc::now(), &mut picker);
        state.shown_messages.insert(christmas, 30);

        assert_eq!(state.advance(christmas, Utc::now(), &mut picker), Resolution::Special);
        assert_eq!(state.today_message_id, Some(SPECIAL_MESSAGE_ID));
        assert_eq!(state.shown_on(christmas), Some(30));
    }

    #[test]
    fn advance_refreshes_last_opened() {
        let mut picker = RandomPicker::seeded(5);
        let today = date(2025, 3, 1);
        let earlier = Utc::now() - chrono::Duration::hours(2);
        let mut state = AppState::first_run(today, earlier, &mut picker);

        let now = Utc::now();
        state.advance(today, now, &mut picker);
        assert_eq!(state.last_opened, now);
    }

    #[test]
    fn claim_and_redeem_are_idempotent() {
        let mut picker = RandomPicker::seeded(6);
        let mut state = AppState::first_run(date(2025, 3, 1), Utc::now(), &mut picker);

        assert!(state.claim(4));
        assert!(!state.claim(4));
        assert_eq!(state.claimed_rewards, vec![4]);

        assert!(state.redeem(4));
        assert!(!state.redeem(4));
        assert_eq!(state.redeemed_rewards, vec![4]);
    }

    #[test]
    fn unredeemed_is_claimed_minus_redeemed() {
        let mut picker = RandomPicker::seeded(7);
        let mut state = AppState::first_run(date(2025, 3, 1), Utc::now(), &mut picker);
        state.claim(4);
        state.claim(8);
        state.redeem(4);
        assert_eq!(state.unredeemed_rewards(), vec![8]);
    }

    #[test]
    fn redeem_does_not_require_claim() {
        let mut picker = RandomPicker::seeded(8);
        let mut state = AppState::first_run(date(2025, 3, 1), Utc::now(), &mut picker);
        assert!(state.redeem(12));
        assert!(state.is_redeemed(12));
        assert!(!state.is_claimed(12));
        assert!(state.unredeemed_rewards().is_empty());
    }

    #[test]
    fn legacy_payload_gets_defaults() {
        let json = r#"{
            "startDate": "2015-10-07T00:00:00",
            "claimedRewards": [4],
            "lastOpened": "2025-03-01T09:00:00Z",
            "todayMessageId": 4
        }"#;
        let state: AppState = serde_json::from_str(json).unwrap();
        assert!(state.shown_messages.is_empty());
        assert!(state.redeemed_rewards.is_empty());
        assert_eq!(state.claimed_rewards, vec![4]);
    }

    #[test]
    fn serialized_shape_uses_date_keys() {
        let mut picker = RandomPicker::seeded(9);
        let today = date(2025, 3, 1);
        let state = AppState::first_run(today, Utc::now(), &mut picker);
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["startDate"], "2015-10-07T00:00:00");
        assert_eq!(json["shownMessages"]["2025-03-01"], state.shown_on(today).unwrap());
        assert!(json["claimedRewards"].as_array().unwrap().is_empty());
    }
}

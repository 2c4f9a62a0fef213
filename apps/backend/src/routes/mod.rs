pub mod auth;
pub mod messages;
pub mod notifications;
pub mod rewards;
pub mod state;
pub mod today;

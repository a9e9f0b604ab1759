mod announcer;
mod client;

pub use announcer::{AnnounceSettings, announce_to_engines, withdraw_from_engines};
#[cfg(test)]
pub use client::MockEngineClient;
pub use client::{EngineClient, HttpEngineClient};

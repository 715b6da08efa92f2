//! Station bring-up state machine and the cooperative ticker that drives it.
//!
//! Nothing in here touches hardware; the radio is reached through
//! [`NetworkDriver`] so the whole loop runs under `cargo test` on the host.

pub mod config;
pub mod machine;
pub mod network;
pub mod runtime;
pub mod state;
pub mod ticker;

pub use config::{ConfigError, Credentials, MachineConfig, INIT_TIMEOUT, TICK_INTERVAL};
pub use machine::{Counters, Flags, Outcome, StateMachine, TimerCounters};
pub use network::{NetworkDriver, NetworkError, WifiMode};
pub use runtime::Runtime;
pub use state::{state_name, State};
pub use ticker::{TaskId, Ticker, TickerError};

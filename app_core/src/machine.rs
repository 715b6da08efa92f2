//! Application state machine.
//!
//! [`StateMachine::service`] runs once per main-loop iteration and
//! [`StateMachine::on_tick`] runs from the periodic ticker. Both execute on
//! the loop thread, so the counters below need no synchronization.

use core::fmt;
use std::net::Ipv4Addr;
use std::time::Duration;

use log::{info, warn};

use crate::config::MachineConfig;
use crate::network::NetworkDriver;
use crate::state::State;

/// Reserved state machine flags. No bit is defined yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags(u32);

impl Flags {
    pub const fn bits(self) -> u32 {
        self.0
    }
}

/// Per-state elapsed time, advanced by the ticker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerCounters {
    pub init: Duration,
}

/// Reserved event counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub reserved: u16,
}

/// How the INIT association attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Connected(Option<Ipv4Addr>),
    Failed,
}

impl Outcome {
    pub fn is_connected(&self) -> bool {
        matches!(self, Outcome::Connected(_))
    }
}

/// Renders the outcome log line for the given SSID.
pub struct OutcomeLine<'a> {
    outcome: Outcome,
    ssid: &'a str,
}

impl fmt::Display for OutcomeLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Connected(Some(ip)) => write!(f, "Connected to: {} with IP: {}", self.ssid, ip),
            Outcome::Connected(None) => write!(f, "Connected to: {}", self.ssid),
            Outcome::Failed => write!(f, "Connection failed to: {}", self.ssid),
        }
    }
}

pub struct StateMachine<N> {
    state: State,
    first_entry: bool,
    flags: Flags,
    timers: TimerCounters,
    counters: Counters,
    outcome: Option<Outcome>,
    config: MachineConfig,
    network: N,
}

impl<N: NetworkDriver> StateMachine<N> {
    pub fn new(network: N, config: MachineConfig) -> Self {
        Self {
            state: State::Null,
            first_entry: true,
            flags: Flags::default(),
            timers: TimerCounters::default(),
            counters: Counters::default(),
            outcome: None,
            config,
            network,
        }
    }

    /// Enter `state`. Any state may follow any other; the next
    /// [`service`](Self::service) pass runs the entry actions.
    pub fn set_state(&mut self, state: State) {
        self.first_entry = true;
        self.state = state;
        info!("app: state set: {}", state);
    }

    pub fn service(&mut self) {
        match self.state {
            State::Init => self.service_init(),
            State::Idle => self.service_idle(),
            State::Null => {}
        }
    }

    /// Ticker callback. Always stays scheduled.
    pub fn on_tick(&mut self) -> bool {
        if self.state == State::Init {
            self.timers.init = self.timers.init.saturating_add(self.config.tick_interval);
        }
        true
    }

    fn service_init(&mut self) {
        if self.first_entry {
            self.first_entry = false;
            self.timers.init = Duration::ZERO;

            let creds = &self.config.credentials;
            info!("app: connecting to SSID: {}...", creds.ssid());
            if let Err(err) = self.network.begin_connect(creds.ssid(), creds.password()) {
                warn!("app: connect request rejected: {err}");
            }
        }

        let connected = self.network.is_connected();
        if !connected && self.timers.init < self.config.init_timeout {
            return;
        }

        let outcome = if connected {
            Outcome::Connected(self.network.local_address())
        } else {
            Outcome::Failed
        };
        info!(
            "app: {}",
            OutcomeLine {
                outcome,
                ssid: self.config.credentials.ssid(),
            }
        );
        self.outcome = Some(outcome);
        self.set_state(State::Idle);
    }

    fn service_idle(&mut self) {
        if self.first_entry {
            self.first_entry = false;
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_first_entry(&self) -> bool {
        self.first_entry
    }

    pub fn init_elapsed(&self) -> Duration {
        self.timers.init
    }

    pub fn timers(&self) -> TimerCounters {
        self.timers
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn outcome_line(&self) -> Option<OutcomeLine<'_>> {
        self.outcome.map(|outcome| OutcomeLine {
            outcome,
            ssid: self.config.credentials.ssid(),
        })
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn network(&self) -> &N {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut N {
        &mut self.network
    }
}

use std::time::Instant;

use log::debug;

use crate::config::MachineConfig;
use crate::machine::StateMachine;
use crate::network::{NetworkDriver, NetworkError, WifiMode};
use crate::state::State;
use crate::ticker::{Ticker, TickerError};

/// The single owner of all loop state: one ticker and the state machine it
/// drives.
pub struct Runtime<N> {
    ticker: Ticker<StateMachine<N>>,
    machine: StateMachine<N>,
}

impl<N: NetworkDriver> Runtime<N> {
    pub fn new(network: N, config: MachineConfig) -> Result<Self, TickerError> {
        Self::new_at(network, config, Instant::now())
    }

    pub fn new_at(network: N, config: MachineConfig, now: Instant) -> Result<Self, TickerError> {
        let mut ticker = Ticker::new();
        ticker.every_at(config.tick_interval, now, StateMachine::on_tick)?;
        debug!("runtime: tick every {:?}", config.tick_interval);

        Ok(Self {
            ticker,
            machine: StateMachine::new(network, config),
        })
    }

    /// Put the radio in station mode and enter INIT.
    pub fn start(&mut self) -> Result<(), NetworkError> {
        self.machine.network_mut().set_mode(WifiMode::Station)?;
        self.machine.set_state(State::Init);
        Ok(())
    }

    /// One main-loop iteration.
    pub fn service(&mut self) {
        self.service_at(Instant::now());
    }

    pub fn service_at(&mut self, now: Instant) {
        self.ticker.poll_at(now, &mut self.machine);
        self.machine.service();
    }

    pub fn machine(&self) -> &StateMachine<N> {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut StateMachine<N> {
        &mut self.machine
    }
}

use core::fmt;

/// Application state machine states.
///
/// The discriminants match the raw encoding used in logs and diagnostics;
/// any raw value outside the known range decodes to [`State::Null`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum State {
    /// Association attempt finished, nothing left to do.
    Idle = 0,
    /// Waiting for the station to associate.
    Init = 1,
    /// No state yet; only observed before the first transition.
    #[default]
    Null = 2,
}

impl State {
    pub const ALL: [State; 3] = [State::Idle, State::Init, State::Null];

    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => State::Idle,
            1 => State::Init,
            _ => State::Null,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            State::Idle => "IDLE",
            State::Init => "INIT",
            State::Null => "NULL",
        }
    }
}

/// Label for a raw state value. Unknown values resolve to the `NULL` label.
pub const fn state_name(raw: u8) -> &'static str {
    State::from_raw(raw).name()
}

impl From<u8> for State {
    fn from(raw: u8) -> Self {
        State::from_raw(raw)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique_and_non_empty() {
        let names: Vec<&str> = State::ALL.iter().map(|s| s.name()).collect();
        assert!(names.iter().all(|n| !n.is_empty()));
        assert_ne!(names[0], names[1]);
        assert_ne!(names[1], names[2]);
        assert_ne!(names[0], names[2]);
    }

    #[test]
    fn raw_values_round_trip() {
        for state in State::ALL {
            assert_eq!(State::from_raw(state.as_raw()), state);
            assert_eq!(state_name(state.as_raw()), state.name());
        }
    }

    #[test]
    fn out_of_range_maps_to_null_label() {
        assert_eq!(state_name(3), "NULL");
        assert_eq!(state_name(u8::MAX), "NULL");
        assert_eq!(State::from(42), State::Null);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(State::Init.to_string(), "INIT");
        assert_eq!(format!("{}", State::Idle), "IDLE");
    }
}

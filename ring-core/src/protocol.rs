//! Wire-Format der Broadcast-Nachrichten zwischen den Boards
//!
//! Jede Nachricht besteht aus genau drei Bytes:
//! `[sender_id, command, state]`

use crate::types::DisplayState;

/// Länge einer Nachricht auf dem Funk-Link
pub const MESSAGE_LEN: usize = 3;

/// Kommando-Byte einer Nachricht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Enable = 1,
    Disable = 2,
    FsmState = 3,
}

impl TryFrom<u8> for Command {
    type Error = ProtocolError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(Command::Enable),
            2 => Ok(Command::Disable),
            3 => Ok(Command::FsmState),
            other => Err(ProtocolError::UnknownCommand(other)),
        }
    }
}

/// Fehler beim Dekodieren einer empfangenen Nachricht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// Payload hat nicht genau `MESSAGE_LEN` Bytes
    WrongLength(usize),
    UnknownCommand(u8),
}

/// Kommando-Nachricht (Board ↔ Board)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandMessage {
    pub sender_id: u8,
    pub command: Command,
    /// Nur bei `Command::FsmState` aussagekräftig, sonst 0
    pub state: u8,
}

impl CommandMessage {
    pub fn enable(sender_id: u8) -> Self {
        Self {
            sender_id,
            command: Command::Enable,
            state: 0,
        }
    }

    pub fn disable(sender_id: u8) -> Self {
        Self {
            sender_id,
            command: Command::Disable,
            state: 0,
        }
    }

    pub fn fsm_state(sender_id: u8, state: DisplayState) -> Self {
        Self {
            sender_id,
            command: Command::FsmState,
            state: state.raw(),
        }
    }

    pub fn to_bytes(self) -> [u8; MESSAGE_LEN] {
        [self.sender_id, self.command as u8, self.state]
    }

    /// Dekodiert eine empfangene Payload
    ///
    /// Der State-Wert wird nicht geprüft; unbekannte Werte werden erst
    /// in `display_state()` zu `DisplayState::Unknown`.
    pub fn decode(bytes: &[u8]) -> Result<Self, ProtocolError> {
        let [sender_id, command, state] = <[u8; MESSAGE_LEN]>::try_from(bytes)
            .map_err(|_| ProtocolError::WrongLength(bytes.len()))?;

        Ok(Self {
            sender_id,
            command: Command::try_from(command)?,
            state,
        })
    }

    /// Anzuzeigender Zustand, nur für FsmState-Nachrichten
    pub fn display_state(&self) -> Option<DisplayState> {
        match self.command {
            Command::FsmState => Some(DisplayState::from(self.state)),
            Command::Enable | Command::Disable => None,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Command::Enable => defmt::write!(fmt, "Enable"),
            Command::Disable => defmt::write!(fmt, "Disable"),
            Command::FsmState => defmt::write!(fmt, "FsmState"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CommandMessage {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "CommandMessage {{ sender: {}, command: {}, state: {} }}",
            self.sender_id,
            self.command,
            self.state
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ProtocolError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ProtocolError::WrongLength(len) => defmt::write!(fmt, "wrong length {}", len),
            ProtocolError::UnknownCommand(raw) => defmt::write!(fmt, "unknown command {}", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_layout() {
        assert_eq!(CommandMessage::enable(7).to_bytes(), [7, 1, 0]);
    }

    #[test]
    fn test_fsm_state_layout() {
        let msg = CommandMessage::fsm_state(2, DisplayState::ToHome);
        assert_eq!(msg.to_bytes(), [2, 3, 5]);
    }

    #[test]
    fn test_decode_fsm_state() {
        let msg = CommandMessage::decode(&[9, 3, 4]).unwrap();
        assert_eq!(msg.sender_id, 9);
        assert_eq!(msg.command, Command::FsmState);
        assert_eq!(msg.display_state(), Some(DisplayState::Stop));
    }

    #[test]
    fn test_decode_keeps_out_of_range_state() {
        let msg = CommandMessage::decode(&[1, 3, 42]).unwrap();
        assert_eq!(msg.display_state(), Some(DisplayState::Unknown(42)));
    }

    #[test]
    fn test_enable_and_disable_carry_no_state() {
        let enable = CommandMessage::decode(&[1, 1, 6]).unwrap();
        let disable = CommandMessage::decode(&[1, 2, 0]).unwrap();
        assert_eq!(enable.display_state(), None);
        assert_eq!(disable.display_state(), None);
    }

    #[test]
    fn test_decode_wrong_length() {
        assert_eq!(
            CommandMessage::decode(&[1, 3]),
            Err(ProtocolError::WrongLength(2))
        );
        assert_eq!(
            CommandMessage::decode(&[1, 3, 0, 0]),
            Err(ProtocolError::WrongLength(4))
        );
    }

    #[test]
    fn test_decode_unknown_command() {
        assert_eq!(
            CommandMessage::decode(&[1, 0, 0]),
            Err(ProtocolError::UnknownCommand(0))
        );
    }
}

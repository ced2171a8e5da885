//! Engine actions and the action history.
//!
//! Every transition a driver can request is an [`Action`]. Successful
//! actions are appended to the game's history as [`ActionRecord`]s, which is
//! enough to replay a game onto the same bag.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A transition requested by the turn-flow driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw one tile from the bag.
    Draw,
    /// A player claims the chest track.
    Take(PlayerId),
    /// A player drops out of the current round.
    MarkInactive(PlayerId),
    /// Move the rotation cursor.
    SetCurrentPlayer(PlayerId),
}

/// A recorded action with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Round the action happened in (starts at 1).
    pub round: u32,

    /// Game-wide sequence number.
    pub sequence: u32,

    /// The action taken.
    pub action: Action,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(round: u32, sequence: u32, action: Action) -> Self {
        Self {
            round,
            sequence,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(2, 17, Action::Take(PlayerId::new(1)));

        assert_eq!(record.round, 2);
        assert_eq!(record.sequence, 17);
        assert_eq!(record.action, Action::Take(PlayerId::new(1)));
    }

    #[test]
    fn test_action_serialization() {
        let actions = vec![
            Action::Draw,
            Action::Take(PlayerId::new(2)),
            Action::MarkInactive(PlayerId::new(0)),
            Action::SetCurrentPlayer(PlayerId::new(1)),
        ];
        let json = serde_json::to_string(&actions).unwrap();
        let back: Vec<Action> = serde_json::from_str(&json).unwrap();

        assert_eq!(actions, back);
    }
}

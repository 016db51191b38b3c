//! Player commands issued by the input layer.
//!
//! Every command maps onto one `Game` action. Commands act on the city under
//! the cursor where a city is involved.

use serde::{Deserialize, Serialize};

use crate::enums::{BombKind, Direction, TechId};
use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Turn ---
    /// End the turn and advance the simulation.
    PassTurn,

    // --- Cursor ---
    /// Move the cursor one cell.
    MoveCursor { direction: Direction },
    /// Jump the cursor to a cell.
    SetCursor { position: Position },

    // --- Interceptors ---
    /// Start an interceptor build in the selected city.
    BuildCruise,
    /// Launch an interceptor from the selected city at the nearest free threat.
    LaunchCruise,

    // --- Special weapons ---
    BuildBomb { kind: BombKind },
    LaunchBomb { kind: BombKind },
    ActivateIronCurtain,

    // --- Research ---
    StartResearch { tech: TechId },
}

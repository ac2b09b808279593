use serde::{Deserialize, Serialize};

/// Fields are optional so that a missing value is reported as a
/// validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateGameRequest {
    pub player1_name: Option<String>,
    pub player2_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MakeMoveRequest {
    pub player_id: Option<String>,
    pub movement: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateGameForPlayersRequest {
    pub player1_id: Option<String>,
    pub player2_id: Option<String>,
}

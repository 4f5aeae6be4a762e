use serde::{Deserialize, Serialize};

/// What an animated entity is on the court.
///
/// The role decides the random-walk direction bias and the depth plane an
/// entity is pinned to. Left players are the red team, right players the
/// blue team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityRole {
    Ball,
    PlayerLeft,
    PlayerRight,
}

impl EntityRole {
    #[must_use]
    pub fn is_player(self) -> bool {
        !matches!(self, Self::Ball)
    }

    /// Applies the directional constraint to a horizontal step.
    ///
    /// The magnitude is kept; only the sign may be overridden.
    #[inline]
    #[must_use]
    pub fn constrain_x(self, dx: f64) -> f64 {
        match self {
            Self::Ball => dx,
            Self::PlayerLeft => -dx.abs(),
            Self::PlayerRight => dx.abs(),
        }
    }

    /// Marker color the render surface paints this entity with.
    #[must_use]
    pub fn marker_color(self) -> &'static str {
        match self {
            Self::Ball => "white",
            Self::PlayerLeft => "red",
            Self::PlayerRight => "blue",
        }
    }
}

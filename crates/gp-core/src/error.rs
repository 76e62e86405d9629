//! Soft failures and intent results
//!
//! Nothing in the core panics on bad input. Intents that can't go through
//! come back as [`ActionResult::Rejected`]; the [`Display`](std::fmt::Display)
//! text of a [`Rejection`] is what the player sees in the log when one is
//! shown at all.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an intent was turned down
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("Not enough Gold!")]
    InsufficientGold { price: i32, gold: i32 },

    #[error("No attribute points to spend.")]
    NoAttributePoints,

    #[error("That item is not in your bag.")]
    ItemNotCarried,

    #[error("{0} cannot be equipped.")]
    NotEquippable(String),

    #[error("{0} cannot be used.")]
    NotConsumable(String),

    #[error("No shop is open.")]
    NoActiveShop,

    #[error("The merchant does not sell that.")]
    NotInStock,

    #[error("You are dead.")]
    PlayerDead,
}

impl Rejection {
    /// Whether this rejection is echoed to the message log
    pub const fn is_logged(&self) -> bool {
        matches!(
            self,
            Rejection::InsufficientGold { .. } | Rejection::NotEquippable(_)
        )
    }
}

/// Outcome of a player intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionResult {
    /// State changed
    Success,
    /// Turned down; state untouched
    Rejected(Rejection),
    /// Nothing to do
    NoOp,
}

impl ActionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Success)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ActionResult::Rejected(r) => Some(r),
            _ => None,
        }
    }
}

impl From<Rejection> for ActionResult {
    fn from(r: Rejection) -> Self {
        ActionResult::Rejected(r)
    }
}

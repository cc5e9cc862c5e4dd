//! Presentational primitives: they draw what they are given and hold no state.

pub mod button;
pub mod card;

pub use button::{Button, ButtonVariant};
pub use card::Card;

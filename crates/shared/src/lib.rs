//! Wire types shared between the board client and the game authority.

pub mod protocol;

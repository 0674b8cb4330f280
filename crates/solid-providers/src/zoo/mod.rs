//! Doors and bowls for cages

pub mod bowls;
pub mod doors;

pub use bowls::{FruitBowl, MeatBowl};
pub use doors::{IronDoor, WoodenDoor};

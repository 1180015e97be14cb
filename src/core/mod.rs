//! Generation core: randomness, concordancy, placeholder resolution and the
//! expansion loop.

pub mod concordancy;
pub mod generator;
pub mod lint;
pub mod number;
pub mod placeholder;
pub mod random;
pub mod template;

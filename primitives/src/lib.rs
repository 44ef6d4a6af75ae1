#![cfg_attr(not(feature = "std"), no_std)]

pub mod assets;
pub mod ecosystem;
pub mod loyalty;
pub mod traits;

pub use assets::*;
pub use ecosystem::*;
pub use loyalty::*;
pub use traits::*;

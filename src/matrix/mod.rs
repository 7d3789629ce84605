//! Dense matrix storage
//!
//! [`Matrix`] owns a `Vec` of coefficients addressed through a [`Layout`].
//! [`Lane`] and [`LaneMut`] view a single column or row of it.

mod core;
mod lane;
mod layout;

pub use core::Matrix;
pub use lane::{Lane, LaneIter, LaneMut};
pub use layout::Layout;

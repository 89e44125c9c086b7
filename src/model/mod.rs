//! Domain records for the social graph.
//!
//! This module defines the core data structures:
//!
//! - [`User`]: a member of the graph, with optional physical measurements
//! - [`Post`]: a post in a user's feed
//! - [`HeightUnit`] / [`WeightUnit`]: measurement units and their conversions
//!
//! Heights are stored in centimetres and weights in kilograms; everything
//! else is derived from those canonical values at query time.

mod post;
mod unit;
mod user;

pub use post::Post;
pub use unit::{
    CENTIMETRES_PER_FOOT, GRAMS_PER_KILOGRAM, HeightUnit, KILOGRAMS_PER_POUND, WeightUnit,
};
pub use user::User;

/// Identifier of a [`User`], unique within the dataset.
pub type UserId = i32;

/// Identifier of a [`Post`], unique within the dataset.
pub type PostId = i32;

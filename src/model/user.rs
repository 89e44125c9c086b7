use super::UserId;
use chrono::NaiveDate;

/// A member of the social graph.
///
/// `friend_ids` is a relationship, not ownership: entries are expected to
/// name existing users, but nothing enforces that, and lookups resolve
/// dangling ids to absence.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    pub email: String,

    /// Kept in the record but never exposed through the API.
    pub password: String,

    pub age: Option<i32>,

    /// Height in centimetres.
    pub height: Option<f64>,

    /// Weight in kilograms.
    pub weight: Option<f64>,

    pub friend_ids: Vec<UserId>,
    pub birth_day: Option<NaiveDate>,
}

//! The access evaluator: who may read or write an athlete's workouts.

use crate::store::TrainingStore;

/// Whether `requester_id` may read or write workouts owned by `athlete_id`.
///
/// True for self-access, or when the requester is a coach linked to the
/// athlete. The link is directional, so an athlete gains nothing from being
/// linked to a coach. Unknown athletes simply have no links.
pub async fn has_access<S>(
  store: &S,
  requester_id: &str,
  athlete_id: &str,
) -> Result<bool, S::Error>
where
  S: TrainingStore,
{
  if requester_id == athlete_id {
    return Ok(true);
  }
  store.link_exists(athlete_id, requester_id).await
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::{
    link::AthleteCoachLink,
    store::WriteOutcome,
    user::UserRecord,
    workout::{NewWorkout, WorkoutEntry},
  };

  // Only answers link lookups.
  struct LinkTable(Vec<(&'static str, &'static str)>);

  impl TrainingStore for LinkTable {
    type Error = std::convert::Infallible;
    async fn insert_user(&self, _: UserRecord) -> Result<WriteOutcome, Self::Error> { unimplemented!() }
    async fn get_user(&self, _: &str) -> Result<Option<UserRecord>, Self::Error> { unimplemented!() }
    async fn insert_link(&self, _: AthleteCoachLink) -> Result<WriteOutcome, Self::Error> { unimplemented!() }
    async fn link_exists(&self, athlete_id: &str, coach_id: &str) -> Result<bool, Self::Error> {
      Ok(self.0.iter().any(|&(a, c)| a == athlete_id && c == coach_id))
    }
    async fn athletes_of(&self, _: &str) -> Result<Vec<String>, Self::Error> { unimplemented!() }
    async fn append_workout(&self, _: NewWorkout, _: NaiveDate) -> Result<WorkoutEntry, Self::Error> { unimplemented!() }
    async fn workouts_for(&self, _: &str) -> Result<Vec<WorkoutEntry>, Self::Error> { unimplemented!() }
  }

  #[tokio::test]
  async fn self_access_without_links() {
    let store = LinkTable(vec![]);
    assert!(has_access(&store, "a1", "a1").await.unwrap());
    assert!(has_access(&store, "ghost", "ghost").await.unwrap());
  }

  #[tokio::test]
  async fn unlinked_requester_denied() {
    let store = LinkTable(vec![("a2", "c1")]);
    assert!(!has_access(&store, "c1", "a1").await.unwrap());
  }

  #[tokio::test]
  async fn linked_coach_allowed_in_one_direction() {
    let store = LinkTable(vec![("a1", "c1")]);
    assert!(has_access(&store, "c1", "a1").await.unwrap());
    assert!(!has_access(&store, "a1", "c1").await.unwrap());
  }
}

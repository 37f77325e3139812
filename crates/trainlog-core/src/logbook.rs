//! [`Logbook`]: the operations a presentation layer calls.
//!
//! The logbook owns a [`TrainingStore`] and holds no other state. Callers pass
//! the authenticated identity into every call explicitly; nothing about "the
//! current user" is remembered between calls.

use chrono::Local;
use tracing::{debug, info};

use crate::{
  Error, Result, access, credential,
  link::AthleteCoachLink,
  store::{TrainingStore, WriteOutcome},
  user::{NewUser, Profile, Role, User, UserRecord},
  workout::{NewWorkout, WorkoutEntry},
};

pub struct Logbook<S> {
  store: S,
}

impl<S> Logbook<S>
where
  S: TrainingStore,
{
  pub fn new(store: S) -> Self { Self { store } }

  /// The underlying backend. Writes made through it bypass every check
  /// performed here.
  pub fn store(&self) -> &S { &self.store }

  // ── Credentials ───────────────────────────────────────────────────────────

  /// Register a new user, hashing the password with a fresh salt.
  ///
  /// Fails with [`Error::DuplicateKey`] if the id is taken; the existing user
  /// is left unchanged.
  pub async fn register(&self, input: NewUser) -> Result<User> {
    input.validate()?;

    let user = input.to_user();
    let password_hash = credential::hash_password(&input.password)?;

    let outcome = self
      .store
      .insert_user(UserRecord { user: user.clone(), password_hash })
      .await
      .map_err(Error::store)?;

    match outcome {
      WriteOutcome::Created => {
        info!(user_id = %user.user_id, role = %user.role, "registered user");
        Ok(user)
      }
      WriteOutcome::AlreadyExists => {
        Err(Error::DuplicateKey(format!("user {:?}", user.user_id)))
      }
    }
  }

  /// Verify a password. Returns `None` both for unknown users and for wrong
  /// passwords.
  pub async fn authenticate(
    &self,
    user_id: &str,
    password: &str,
  ) -> Result<Option<Profile>> {
    let record = self.store.get_user(user_id).await.map_err(Error::store)?;

    let Some(record) = record else {
      credential::verify_decoy(password);
      return Ok(None);
    };

    Ok(
      credential::verify_password(password, &record.password_hash)
        .then(|| Profile::from(record.user)),
    )
  }

  /// Like [`Self::authenticate`], but a failed check is
  /// [`Error::AuthFailed`].
  pub async fn sign_in(&self, user_id: &str, password: &str) -> Result<Profile> {
    self
      .authenticate(user_id, password)
      .await?
      .ok_or(Error::AuthFailed)
  }

  // ── Links ─────────────────────────────────────────────────────────────────

  /// Link an athlete to a coach. Both ids must name existing users with the
  /// matching role.
  pub async fn link_athlete_to_coach(
    &self,
    athlete_id: &str,
    coach_id: &str,
  ) -> Result<AthleteCoachLink> {
    self.require_role(athlete_id, Role::Athlete).await?;
    self.require_role(coach_id, Role::Coach).await?;

    let link = AthleteCoachLink::new(athlete_id, coach_id);
    let outcome = self
      .store
      .insert_link(link.clone())
      .await
      .map_err(Error::store)?;

    match outcome {
      WriteOutcome::Created => {
        info!(athlete_id, coach_id, "linked athlete to coach");
        Ok(link)
      }
      WriteOutcome::AlreadyExists => Err(Error::DuplicateKey(format!(
        "link {athlete_id:?} -> {coach_id:?}"
      ))),
    }
  }

  /// Athletes linked to `coach_id`, in the order they were linked.
  pub async fn linked_athletes(&self, coach_id: &str) -> Result<Vec<String>> {
    self.store.athletes_of(coach_id).await.map_err(Error::store)
  }

  // ── Access ────────────────────────────────────────────────────────────────

  /// See [`access::has_access`].
  pub async fn has_access(
    &self,
    requester_id: &str,
    athlete_id: &str,
  ) -> Result<bool> {
    access::has_access(&self.store, requester_id, athlete_id)
      .await
      .map_err(Error::store)
  }

  // ── Workouts ──────────────────────────────────────────────────────────────

  /// Record a workout on behalf of `requester_id`, dated today.
  pub async fn record_workout(
    &self,
    requester_id: &str,
    input: NewWorkout,
  ) -> Result<WorkoutEntry> {
    self.authorize(requester_id, &input.athlete_id).await?;
    input.validate()?;
    self.require_role(&input.athlete_id, Role::Athlete).await?;

    let date = Local::now().date_naive();
    let entry = self
      .store
      .append_workout(input, date)
      .await
      .map_err(Error::store)?;

    info!(
      id = entry.id,
      athlete_id = %entry.athlete_id,
      requester_id,
      "recorded workout"
    );
    Ok(entry)
  }

  /// Every workout of `athlete_id` in the order it was recorded.
  pub async fn history(
    &self,
    requester_id: &str,
    athlete_id: &str,
  ) -> Result<Vec<WorkoutEntry>> {
    self.authorize(requester_id, athlete_id).await?;
    self.store.workouts_for(athlete_id).await.map_err(Error::store)
  }

  // ── Helpers ───────────────────────────────────────────────────────────────

  async fn authorize(&self, requester_id: &str, athlete_id: &str) -> Result<()> {
    if self.has_access(requester_id, athlete_id).await? {
      return Ok(());
    }
    debug!(requester_id, athlete_id, "access denied");
    Err(Error::AccessDenied {
      requester: requester_id.to_owned(),
      athlete:   athlete_id.to_owned(),
    })
  }

  async fn require_role(&self, user_id: &str, role: Role) -> Result<()> {
    let record = self.store.get_user(user_id).await.map_err(Error::store)?;
    match record {
      Some(r) if r.user.role == role => Ok(()),
      Some(r) => Err(Error::InvalidInput(format!(
        "{user_id:?} is a {}, not a {role}",
        r.user.role
      ))),
      None => Err(Error::InvalidInput(format!("no such user: {user_id:?}"))),
    }
  }
}

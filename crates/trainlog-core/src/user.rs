//! Users: the identities that own and review workouts.
//!
//! A user is created once at registration and never changes afterwards. The
//! password hash travels separately in [`UserRecord`] so that the public
//! [`User`] type can be serialised freely.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Role ────────────────────────────────────────────────────────────────────

/// What a user is in the system. Also used for `recorded_by` on workouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Athlete,
  Coach,
}

impl Role {
  /// The string stored in `role` / `recorded_by` columns.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Athlete => "athlete",
      Self::Coach => "coach",
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Role {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "athlete" => Ok(Self::Athlete),
      "coach" => Ok(Self::Coach),
      other => Err(Error::InvalidInput(format!("unknown role: {other:?}"))),
    }
  }
}

// ─── User ────────────────────────────────────────────────────────────────────

/// The public face of a registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub user_id:         String,
  pub name:            String,
  pub role:            Role,
  /// URL of a profile image, if the user supplied one.
  pub profile_picture: Option<String>,
}

/// What a successful authentication reveals about the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
  pub role:            Role,
  pub name:            String,
  pub profile_picture: Option<String>,
}

impl From<User> for Profile {
  fn from(u: User) -> Self {
    Self { role: u.role, name: u.name, profile_picture: u.profile_picture }
  }
}

/// A user row as persisted: the public fields plus the argon2 PHC string.
#[derive(Debug, Clone)]
pub struct UserRecord {
  pub user:          User,
  pub password_hash: String,
}

// ─── NewUser ─────────────────────────────────────────────────────────────────

/// Input to [`crate::Logbook::register`]. Carries the plaintext password only
/// until it is hashed.
#[derive(Clone, Deserialize)]
pub struct NewUser {
  pub user_id:         String,
  pub name:            String,
  pub role:            Role,
  pub password:        String,
  #[serde(default)]
  pub profile_picture: Option<String>,
}

impl fmt::Debug for NewUser {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("NewUser")
      .field("user_id", &self.user_id)
      .field("name", &self.name)
      .field("role", &self.role)
      .field("password", &"<redacted>")
      .field("profile_picture", &self.profile_picture)
      .finish()
  }
}

impl NewUser {
  pub fn new(
    user_id: impl Into<String>,
    name: impl Into<String>,
    role: Role,
    password: impl Into<String>,
  ) -> Self {
    Self {
      user_id: user_id.into(),
      name: name.into(),
      role,
      password: password.into(),
      profile_picture: None,
    }
  }

  /// Reject inputs that cannot form a usable identity.
  pub fn validate(&self) -> Result<()> {
    if self.user_id.trim().is_empty() {
      return Err(Error::InvalidInput("user_id must not be empty".into()));
    }
    Ok(())
  }

  /// The public user this registration produces. A blank picture URL is
  /// treated as absent.
  pub fn to_user(&self) -> User {
    User {
      user_id:         self.user_id.clone(),
      name:            self.name.clone(),
      role:            self.role,
      profile_picture: self
        .profile_picture
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_owned),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn role_string_forms() {
    assert_eq!(Role::Athlete.as_str(), "athlete");
    assert_eq!("coach".parse::<Role>().unwrap(), Role::Coach);
    assert!(matches!("admin".parse::<Role>(), Err(Error::InvalidInput(_))));
  }

  #[test]
  fn role_serde_is_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Coach).unwrap(), "\"coach\"");
  }

  #[test]
  fn blank_profile_picture_is_absent() {
    let mut input = NewUser::new("a1", "Ana", Role::Athlete, "p1");
    input.profile_picture = Some("   ".into());
    assert_eq!(input.to_user().profile_picture, None);

    input.profile_picture = Some("https://img.example/ana.png".into());
    assert_eq!(
      input.to_user().profile_picture.as_deref(),
      Some("https://img.example/ana.png")
    );
  }

  #[test]
  fn empty_user_id_rejected() {
    let input = NewUser::new(" ", "Nobody", Role::Coach, "pw");
    assert!(matches!(input.validate(), Err(Error::InvalidInput(_))));
  }

  #[test]
  fn debug_hides_password() {
    let input = NewUser::new("a1", "Ana", Role::Athlete, "hunter2");
    assert!(!format!("{input:?}").contains("hunter2"));
  }
}

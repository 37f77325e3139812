//! Salted password hashing with argon2id.

use std::sync::LazyLock;

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
  password_hash::SaltString,
};
use rand_core::OsRng;

use crate::{Error, Result};

/// Hash `password` with a fresh random salt and return the PHC string,
/// e.g. `$argon2id$v=19$…`.
pub fn hash_password(password: &str) -> Result<String> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| Error::Hash(e.to_string()))
}

/// Checked against when a user id is unknown, so that miss costs one argon2
/// run like a wrong password does.
static DECOY_HASH: LazyLock<String> =
  LazyLock::new(|| hash_password("trainlog-decoy").unwrap_or_default());

#[cfg(test)]
thread_local! {
  pub(crate) static VERIFY_CALLS: std::cell::Cell<usize> =
    const { std::cell::Cell::new(0) };
}

/// Check `password` against a stored PHC string. A malformed stored hash
/// never verifies.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
  #[cfg(test)]
  VERIFY_CALLS.with(|c| c.set(c.get() + 1));

  let Ok(parsed) = PasswordHash::new(password_hash) else {
    return false;
  };
  Argon2::default()
    .verify_password(password.as_bytes(), &parsed)
    .is_ok()
}

/// Run one verification against a fixed hash and discard the result. Always
/// `false`.
pub fn verify_decoy(password: &str) -> bool {
  let _ = verify_password(password, &DECOY_HASH);
  false
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hash_then_verify() {
    let hash = hash_password("secret").unwrap();
    assert!(hash.starts_with("$argon2id$"));
    assert!(verify_password("secret", &hash));
    assert!(!verify_password("wrong", &hash));
  }

  #[test]
  fn hashes_are_salted() {
    let a = hash_password("same").unwrap();
    let b = hash_password("same").unwrap();
    assert_ne!(a, b);
  }

  #[test]
  fn plaintext_never_verifies() {
    assert!(!verify_password("secret", "secret"));
  }

  #[test]
  fn decoy_never_verifies_but_does_the_work() {
    let before = VERIFY_CALLS.with(std::cell::Cell::get);
    assert!(!verify_decoy("trainlog-decoy"));
    assert!(!verify_decoy(""));
    assert_eq!(VERIFY_CALLS.with(std::cell::Cell::get) - before, 2);
    assert!(DECOY_HASH.starts_with("$argon2id$"));
  }
}

//! ActorEntity trait implementation for the User domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`User`] to be managed by the generic [`crate::framework::ResourceActor`].
//!
//! Users are keyed by their lowercase `user_name`. Avatars are replaced through
//! [`UserAction::ReplaceAvatar`] rather than through the regular update path.

use super::error::UserError;
use crate::framework::ActorEntity;
use crate::model::{has_text, User, UserAction, UserCreate, UserUpdate};
use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use std::sync::LazyLock;
use validator::ValidateEmail;

static USER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+$").expect("username pattern compiles"));

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| has_text(v))
}

#[async_trait]
impl ActorEntity for User {
    type Id = String;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = User;
    type Context = ();
    type Error = UserError;

    fn id(&self) -> String {
        self.user_name.clone()
    }

    /// Validates the payload and stamps `last_updated`.
    ///
    /// # Checks (first failure wins)
    /// 1. `user_name`, `first_name`, `surname`, `email` are non-blank
    /// 2. `user_name` is made of lowercase letters and digits only
    /// 3. `email` is a well-formed address
    ///
    /// The username pattern is applied to the submitted text, so uppercase input is
    /// rejected; the stored key is still lowercased.
    fn from_create_params(params: UserCreate) -> Result<Self, UserError> {
        if !has_text(&params.user_name) {
            return Err(UserError::invalid("Missing username."));
        }
        if !has_text(&params.first_name) {
            return Err(UserError::invalid("Missing first name."));
        }
        if !has_text(&params.surname) {
            return Err(UserError::invalid("Missing surname."));
        }
        if !has_text(&params.email) {
            return Err(UserError::invalid("Missing email address."));
        }
        if !USER_NAME.is_match(&params.user_name) {
            return Err(UserError::invalid(
                "Username must contain only letters and numbers.",
            ));
        }
        if !params.email.validate_email() {
            return Err(UserError::invalid("Invalid format of email address."));
        }

        Ok(Self {
            user_name: params.user_name.to_lowercase(),
            first_name: params.first_name,
            surname: params.surname,
            email: params.email,
            avatar: None,
            last_updated: Utc::now(),
        })
    }

    /// A replacement email, when given, must still be well-formed.
    fn validate_update(_user_name: &String, update: &UserUpdate) -> Result<(), UserError> {
        match &update.email {
            Some(email) if has_text(email) && !email.validate_email() => {
                Err(UserError::invalid("Invalid format of email address."))
            }
            _ => Ok(()),
        }
    }

    /// Handles updates to the User entity.
    ///
    /// # Fields Updated
    /// - `first_name`, `surname`, `email`: each replaced only when the update carries text
    /// - `last_updated`: always bumped
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(first_name) = non_blank(update.first_name) {
            self.first_name = first_name;
        }
        if let Some(surname) = non_blank(update.surname) {
            self.surname = surname;
        }
        if let Some(email) = non_blank(update.email) {
            self.email = email;
        }
        self.last_updated = Utc::now();
        Ok(())
    }

    /// Handles custom actions for the User entity.
    ///
    /// # Actions
    /// - `ReplaceAvatar`: swaps in the new bytes and returns the updated user
    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<User, UserError> {
        match action {
            UserAction::ReplaceAvatar(bytes) => {
                self.avatar = Some(bytes);
                Ok(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(user_name: &str, email: &str) -> Result<User, UserError> {
        User::from_create_params(UserCreate::new(user_name, "Tyler", "Durden", email))
    }

    #[test]
    fn test_missing_fields_are_reported_in_order() {
        let err = User::from_create_params(UserCreate::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid user definition! Missing username.");

        let err = User::from_create_params(UserCreate::new("tyler", " ", "", "")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid user definition! Missing first name.");

        let err =
            User::from_create_params(UserCreate::new("tyler", "Tyler", "", "")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid user definition! Missing surname.");

        let err = User::from_create_params(UserCreate::new("tyler", "Tyler", "Durden", "\n"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid user definition! Missing email address."
        );
    }

    #[test]
    fn test_username_pattern() {
        let expected = UserError::invalid("Username must contain only letters and numbers.");
        assert_eq!(create("tyler!", "t@fc.com").unwrap_err(), expected);
        assert_eq!(create("TyLeR123", "t@fc.com").unwrap_err(), expected);
        assert_eq!(create("tyler 99", "t@fc.com").unwrap_err(), expected);
        assert_eq!(create("tyler99", "t@fc.com").unwrap().user_name, "tyler99");
    }

    #[test]
    fn test_email_format() {
        let err = create("tyler", "not-an-email").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid user definition! Invalid format of email address."
        );
    }

    #[test]
    fn test_new_user_has_no_avatar() {
        let user = create("tyler", "tyler@fc.com").unwrap();
        assert!(user.avatar.is_none());
        assert_eq!(user.id(), "tyler");
    }

    #[tokio::test]
    async fn test_update_replaces_only_non_blank_fields() {
        let mut user = create("tyler", "tyler@fc.com").unwrap();
        let before = user.last_updated;

        user.on_update(
            UserUpdate {
                first_name: Some("  ".into()),
                surname: Some("Smith".into()),
                email: None,
            },
            &(),
        )
        .await
        .unwrap();

        assert_eq!(user.first_name, "Tyler");
        assert_eq!(user.surname, "Smith");
        assert_eq!(user.email, "tyler@fc.com");
        assert!(user.last_updated >= before);
    }

    #[test]
    fn test_update_rejects_malformed_email() {
        let update = UserUpdate {
            email: Some("nope".into()),
            ..Default::default()
        };
        assert!(User::validate_update(&"tyler".to_string(), &update).is_err());

        let blank = UserUpdate {
            email: Some("".into()),
            ..Default::default()
        };
        assert!(User::validate_update(&"tyler".to_string(), &blank).is_ok());
    }

    #[tokio::test]
    async fn test_replace_avatar_keeps_timestamp() {
        let mut user = create("tyler", "tyler@fc.com").unwrap();
        let stamp = user.last_updated;

        let updated = user
            .handle_action(UserAction::ReplaceAvatar(vec![1, 2, 3]), &())
            .await
            .unwrap();

        assert_eq!(updated.avatar.as_deref(), Some(&[1u8, 2, 3][..]));
        assert_eq!(updated.last_updated, stamp);
    }
}

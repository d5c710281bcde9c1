use crate::model::User;
use chrono::Utc;

const TYLER_AVATAR: &[u8] = include_bytes!("../../assets/avatars/1.png");
const PETER_AVATAR: &[u8] = include_bytes!("../../assets/avatars/2.png");

fn user(user_name: &str, first_name: &str, surname: &str, email: &str, avatar: &[u8]) -> User {
    User {
        user_name: user_name.to_string(),
        first_name: first_name.to_string(),
        surname: surname.to_string(),
        email: email.to_string(),
        avatar: Some(avatar.to_vec()),
        last_updated: Utc::now(),
    }
}

/// Users registered right after startup, each with a bundled PNG avatar.
pub fn users() -> Vec<User> {
    vec![
        user("tyler", "Tyler", "Durden", "tyler@fc.com", TYLER_AVATAR),
        user("user2", "Peter", "Jones", "peter@jakubstas.com", PETER_AVATAR),
    ]
}

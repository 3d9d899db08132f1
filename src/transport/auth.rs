use md5::{Digest, Md5};

use crate::domain::{Login, Password};

/// `fmt` value selecting JSON responses.
const JSON_FORMAT: &str = "3";

/// Lowercase hex MD5 of the password, as SMSC expects in `psw`.
pub fn password_digest(password: &Password) -> String {
    hex::encode(Md5::digest(password.as_str().as_bytes()))
}

/// Fields attached to every request, after the operation's own fields.
pub fn encode_common_form(login: &Login, password: &Password) -> Vec<(String, String)> {
    vec![
        ("fmt".to_owned(), JSON_FORMAT.to_owned()),
        (Login::FIELD.to_owned(), login.as_str().to_owned()),
        (Password::FIELD.to_owned(), password_digest(password)),
    ]
}

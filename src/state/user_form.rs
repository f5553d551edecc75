//! User edit-form model.
//!
//! All inputs are kept as text while editing and converted to a `User`
//! on submit.

#[cfg(test)]
#[path = "user_form_test.rs"]
mod user_form_test;

use crate::net::types::User;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UserFormError {
    #[error("请输入姓名")]
    MissingName,
    #[error("分数必须是数字")]
    InvalidScore,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserForm {
    /// `None` when creating a new user.
    pub id: Option<i64>,
    pub mobile: String,
    pub passwd: String,
    pub name: String,
    pub sex: String,
    pub age: String,
    pub birthday: String,
    pub area: String,
    pub score: String,
}

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            mobile: text(user.mobile.as_ref()),
            passwd: text(user.passwd.as_ref()),
            name: text(user.name.as_ref()),
            sex: text(user.sex.as_ref()),
            age: text(user.age.as_ref()),
            birthday: user.birthday.as_deref().map(birthday_date).unwrap_or_default().to_owned(),
            area: text(user.area.as_ref()),
            score: user.score.map(|s| s.to_string()).unwrap_or_default(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// # Errors
    ///
    /// Returns `UserFormError` for a blank name or a non-numeric score.
    pub fn to_user(&self) -> Result<User, UserFormError> {
        let name = optional(&self.name).ok_or(UserFormError::MissingName)?;
        let score = match optional(&self.score) {
            Some(s) => Some(s.parse::<f64>().map_err(|_| UserFormError::InvalidScore)?),
            None => None,
        };
        Ok(User {
            id: self.id,
            mobile: optional(&self.mobile),
            passwd: optional(&self.passwd),
            name: Some(name),
            sex: optional(&self.sex),
            age: optional(&self.age),
            birthday: optional(&self.birthday).map(normalize_birthday),
            area: optional(&self.area),
            score,
        })
    }
}

/// `<input type="date">` yields `YYYY-MM-DD`; the backend expects a local
/// date-time.
fn normalize_birthday(value: String) -> String {
    if value.len() == 10 && !value.contains('T') {
        format!("{value}T00:00:00")
    } else {
        value
    }
}

/// `YYYY-MM-DD` part of a stored birthday, for display and date inputs.
pub fn birthday_date(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

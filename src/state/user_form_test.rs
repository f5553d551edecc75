use super::*;

#[test]
fn new_form_is_new() {
    assert!(UserForm::default().is_new());
}

#[test]
fn blank_name_is_rejected() {
    let form = UserForm { name: "  ".into(), ..UserForm::default() };
    assert_eq!(form.to_user(), Err(UserFormError::MissingName));
}

#[test]
fn non_numeric_score_is_rejected() {
    let form = UserForm { name: "a".into(), score: "ninety".into(), ..UserForm::default() };
    assert_eq!(form.to_user(), Err(UserFormError::InvalidScore));
}

#[test]
fn blank_fields_become_none() {
    let user = UserForm { name: "王五".into(), ..UserForm::default() }.to_user().unwrap();
    assert_eq!(user.name.as_deref(), Some("王五"));
    assert_eq!(user.mobile, None);
    assert_eq!(user.score, None);
    assert_eq!(user.birthday, None);
}

#[test]
fn date_input_is_widened_to_datetime() {
    let form = UserForm { name: "a".into(), birthday: "1990-02-03".into(), ..UserForm::default() };
    assert_eq!(form.to_user().unwrap().birthday.as_deref(), Some("1990-02-03T00:00:00"));

    let form = UserForm { birthday: "1990-02-03T08:00:00".into(), ..form };
    assert_eq!(form.to_user().unwrap().birthday.as_deref(), Some("1990-02-03T08:00:00"));
}

#[test]
fn from_user_round_trips_editable_fields() {
    let user = User {
        id: Some(7),
        name: Some("赵六".into()),
        score: Some(88.5),
        area: Some("杭州".into()),
        ..User::default()
    };
    let form = UserForm::from_user(&user);
    assert!(!form.is_new());
    assert_eq!(form.score, "88.5");
    assert_eq!(form.to_user().unwrap(), user);
}

#[test]
fn birthday_date_strips_time() {
    assert_eq!(birthday_date("1990-02-03T00:00:00"), "1990-02-03");
    assert_eq!(birthday_date("1990-02-03"), "1990-02-03");
}

#[test]
fn from_user_keeps_date_part_for_date_input() {
    let user = User { birthday: Some("1990-02-03T00:00:00".into()), ..User::default() };
    assert_eq!(UserForm::from_user(&user).birthday, "1990-02-03");
}

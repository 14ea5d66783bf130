use super::*;

fn params(identifier: &str, password: &str) -> LoginParams {
    LoginParams { identifier: identifier.into(), password: password.into() }
}

#[tokio::test(start_paused = true)]
async fn valid_credentials_succeed() {
    let result = MockLoginModel::new().login(&params("bob", "abcdef")).await;
    assert!(result.success);
    assert_eq!(result.message, MSG_LOGIN_SUCCESS);
    assert!(result.user_id.as_deref().unwrap().starts_with("user_"));
    assert!(result.token.as_deref().unwrap().starts_with("token_"));
}

#[tokio::test(start_paused = true)]
async fn short_password_fails() {
    let result = MockLoginModel::new().login(&params("bob", "abc")).await;
    assert!(!result.success);
    assert_eq!(result.message, MSG_BAD_CREDENTIALS);
    assert!(result.user_id.is_none());
    assert!(result.token.is_none());
}

#[tokio::test(start_paused = true)]
async fn empty_identifier_fails() {
    let result = MockLoginModel::new().login(&params("", "abcdefgh")).await;
    assert!(!result.success);
    assert_eq!(result.message, MSG_BAD_CREDENTIALS);
}

#[tokio::test(start_paused = true)]
async fn six_char_password_is_accepted() {
    // Boundary: >= 6 characters passes.
    let result = MockLoginModel::new().login(&params("bob", "123456")).await;
    assert!(result.success);
}

#[tokio::test(start_paused = true)]
async fn five_char_password_is_rejected() {
    let result = MockLoginModel::new().login(&params("bob", "12345")).await;
    assert!(!result.success);
}

#[tokio::test(start_paused = true)]
async fn password_length_counts_characters_not_bytes() {
    // Six CJK characters, eighteen bytes.
    let result = MockLoginModel::new().login(&params("bob", "口令口令口令")).await;
    assert!(result.success);
}

#[tokio::test(start_paused = true)]
async fn resolves_after_fixed_delay() {
    let start = tokio::time::Instant::now();
    let _ = MockLoginModel::new().login(&params("bob", "abcdef")).await;
    assert!(start.elapsed() >= MOCK_DELAY);
}

#[tokio::test(start_paused = true)]
async fn failure_also_waits_the_fixed_delay() {
    let start = tokio::time::Instant::now();
    let _ = MockLoginModel::new().login(&params("", "")).await;
    assert!(start.elapsed() >= MOCK_DELAY);
}

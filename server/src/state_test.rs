use super::*;

#[test]
fn bare_state_has_no_integrations() {
    let state = test_helpers::test_state();
    assert!(state.llm.is_none());
    assert!(state.mail.is_none());
    assert!(state.resume.is_none());
}

#[test]
fn state_is_cheaply_cloneable() {
    let state = test_helpers::test_state();
    let cloned = state.clone();
    assert!(cloned.llm.is_none());
}

#[test]
fn resume_config_absent_without_env() {
    unsafe { std::env::remove_var("RESUME_FILE_URL") };
    assert!(ResumeConfig::from_env().is_none());
}

#[test]
fn resume_config_builds_shared_client() {
    let config = ResumeConfig::new("https://resume.example/file.pdf".to_owned()).unwrap();
    assert_eq!(config.file_url, "https://resume.example/file.pdf");
    // The client rides along on clone; handlers never build their own.
    let cloned = config.clone();
    assert_eq!(cloned.file_url, config.file_url);
}

use std::env;
use workos_client::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("WORKOS_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("WORKOS_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("WORKOS_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("WORKOS_TEST_MISSING_VAR");
    }
    let result: String = get_env_or_default("WORKOS_TEST_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_blank_var() {
    unsafe {
        env::set_var("WORKOS_TEST_VAR_BLANK", "   ");
        let result: String = get_env_or_default("WORKOS_TEST_VAR_BLANK", "default".to_string());
        assert_eq!(result, "default");
        env::remove_var("WORKOS_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_default_with_bool() {
    unsafe {
        env::set_var("WORKOS_TEST_VAR_BOOL", "false");
        let result: bool = get_env_or_default("WORKOS_TEST_VAR_BOOL", true);
        assert!(!result);
        env::remove_var("WORKOS_TEST_VAR_BOOL");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("WORKOS_TEST_VAR_INVALID", "not_a_number");
        let result: u16 = get_env_or_default("WORKOS_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("WORKOS_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("WORKOS_TEST_VAR_PORT", "8081");
        let result: Option<u16> = get_env_or_none("WORKOS_TEST_VAR_PORT");
        assert_eq!(result, Some(8081));
        env::remove_var("WORKOS_TEST_VAR_PORT");
    }
}

#[test]
fn test_get_env_or_none_with_missing_or_invalid_var() {
    unsafe {
        env::remove_var("WORKOS_TEST_VAR_NONE");
        env::set_var("WORKOS_TEST_VAR_BAD_PORT", "eighty");
    }
    assert_eq!(get_env_or_none::<u16>("WORKOS_TEST_VAR_NONE"), None);
    assert_eq!(get_env_or_none::<u16>("WORKOS_TEST_VAR_BAD_PORT"), None);
    unsafe {
        env::remove_var("WORKOS_TEST_VAR_BAD_PORT");
    }
}

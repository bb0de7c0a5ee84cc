//! Integration tests for passbook.
//!
//! These exercise the generator and the credential store through the public
//! API, each against its own temporary store file.

use passbook::password::{self, SYMBOLS, validate_password};
use passbook::shell::Shell;
use passbook::shell::command::CommandResult;
use passbook::{CredentialStore, NotFoundError, StoreError, ValidationError};
use std::fs;
use tempfile::TempDir;

/// Creates a store in a fresh temporary directory.
fn setup_test_env() -> (CredentialStore, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = CredentialStore::new(temp_dir.path().join("database.json"));
    (store, temp_dir)
}

fn validation_error(result: Result<(), StoreError>) -> ValidationError {
    match result {
        Err(StoreError::Validation(e)) => e,
        other => panic!("Expected validation error, got {:?}", other),
    }
}

// ============================================================================
// Password Generator
// ============================================================================

#[test]
fn test_generated_passwords_satisfy_predicate() {
    for _ in 0..1000 {
        let pw = password::generate().expect("generation should succeed");
        assert!((8..=12).contains(&pw.chars().count()), "bad length: {}", pw);
        assert!(pw.bytes().any(|b| SYMBOLS.contains(&b)), "no symbol: {}", pw);
        assert!(pw.chars().any(|c| c.is_ascii_digit()), "no digit: {}", pw);
        assert_eq!(validate_password(&pw), Ok(()));
    }
}

#[test]
fn test_generated_passwords_are_accepted_by_store() {
    let (store, _temp_dir) = setup_test_env();

    for i in 0..50 {
        let pw = password::generate().unwrap();
        store
            .save(&format!("site{}.com", i), "a@b.com", &pw)
            .expect("generated password should be saveable");
    }
    assert_eq!(store.websites().unwrap().len(), 50);
}

// ============================================================================
// Credential Store
// ============================================================================

#[test]
fn test_save_then_find_round_trip() {
    let (store, _temp_dir) = setup_test_env();

    store.save("github.com", "me@example.com", "Gh7#pass").unwrap();
    let record = store.find("github.com").unwrap();

    assert_eq!(record.website, "github.com");
    assert_eq!(record.email, "me@example.com");
    assert_eq!(record.password, "Gh7#pass");
}

#[test]
fn test_save_overwrites_whole_record() {
    let (store, _temp_dir) = setup_test_env();

    store.save("site.com", "old@b.com", "Old12345!").unwrap();
    store.save("site.com", "new@b.com", "New67890#").unwrap();

    let record = store.find("site.com").unwrap();
    assert_eq!(record.email, "new@b.com");
    assert_eq!(record.password, "New67890#");
    assert_eq!(store.websites().unwrap(), vec!["site.com"]);
}

#[test]
fn test_save_keeps_other_records() {
    let (store, _temp_dir) = setup_test_env();

    store.save("a.com", "a@a.com", "Abc12345!").unwrap();
    store.save("b.com", "b@b.com", "Bcd23456@").unwrap();

    assert_eq!(store.find("a.com").unwrap().email, "a@a.com");
    assert_eq!(store.find("b.com").unwrap().email, "b@b.com");
}

#[test]
fn test_find_on_missing_store_is_no_data() {
    let (store, _temp_dir) = setup_test_env();

    match store.find("site.com") {
        Err(StoreError::NotFound(NotFoundError::NoData)) => {}
        other => panic!("Expected NoData, got {:?}", other),
    }
}

#[test]
fn test_find_unknown_website_is_no_entry() {
    let (store, _temp_dir) = setup_test_env();
    store.save("site.com", "a@b.com", "Abc12345!").unwrap();

    match store.find("unknown.com") {
        Err(StoreError::NotFound(NotFoundError::NoEntry(website))) => {
            assert_eq!(website, "unknown.com")
        }
        other => panic!("Expected NoEntry, got {:?}", other),
    }
}

#[test]
fn test_save_empty_fields() {
    let (store, _temp_dir) = setup_test_env();

    assert_eq!(
        validation_error(store.save("", "a@b.com", "Abc12345!")),
        ValidationError::EmptyField
    );
    assert_eq!(
        validation_error(store.save("site.com", "", "Abc12345!")),
        ValidationError::EmptyField
    );
    assert_eq!(
        validation_error(store.save("site.com", "a@b.com", "")),
        ValidationError::EmptyField
    );
}

#[test]
fn test_save_short_password_is_invalid_length() {
    let (store, _temp_dir) = setup_test_env();
    assert_eq!(
        validation_error(store.save("site.com", "a@b.com", "short1!")),
        ValidationError::InvalidLength
    );
}

#[test]
fn test_save_without_symbol_is_missing_symbol() {
    let (store, _temp_dir) = setup_test_env();
    assert_eq!(
        validation_error(store.save("site.com", "a@b.com", "NoSymbolHere1")),
        ValidationError::MissingSymbol
    );
}

#[test]
fn test_save_without_digit_is_missing_number() {
    let (store, _temp_dir) = setup_test_env();
    assert_eq!(
        validation_error(store.save("site.com", "a@b.com", "NoDigits!")),
        ValidationError::MissingNumber
    );
}

#[test]
fn test_store_file_is_human_readable() {
    let (store, _temp_dir) = setup_test_env();
    store.save("site.com", "a@b.com", "Abc12345!").unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert!(text.contains("\n    \"site.com\": {\n        \"email\": \"a@b.com\""));
}

#[test]
fn test_blank_store_file_reads_as_no_data() {
    let (store, _temp_dir) = setup_test_env();
    fs::write(store.path(), "\n").unwrap();

    assert!(matches!(
        store.find("site.com"),
        Err(StoreError::NotFound(NotFoundError::NoData))
    ));

    store.save("site.com", "a@b.com", "Abc12345!").unwrap();
    assert!(store.find("site.com").is_ok());
}

#[test]
fn test_corrupt_store_is_reported_not_overwritten() {
    let (store, _temp_dir) = setup_test_env();
    fs::write(store.path(), "not json").unwrap();

    assert!(matches!(
        store.save("site.com", "a@b.com", "Abc12345!"),
        Err(StoreError::Json(_))
    ));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "not json");
}

#[test]
fn test_separate_store_handles_share_the_file() {
    let (store, temp_dir) = setup_test_env();
    store.save("site.com", "a@b.com", "Abc12345!").unwrap();

    let other = CredentialStore::new(temp_dir.path().join("database.json"));
    assert_eq!(other.find("site.com").unwrap().email, "a@b.com");
}

// ============================================================================
// Shell
// ============================================================================

#[test]
fn test_shell_generate_then_save_then_search() {
    let (store, _temp_dir) = setup_test_env();
    let shell = Shell::new();

    let saved = match shell.execute_line("save site.com a@b.com", &store).unwrap() {
        CommandResult::Success(Some(msg)) => msg,
        other => panic!("Expected success, got {:?}", other),
    };
    let record = store.find("site.com").unwrap();
    assert!(saved.contains(&record.password));

    match shell.execute_line("search site.com", &store).unwrap() {
        CommandResult::Success(Some(msg)) => {
            assert!(msg.contains("Email: a@b.com"));
            assert!(msg.contains(&record.password));
        }
        other => panic!("Expected record, got {:?}", other),
    }
}

#[test]
fn test_shell_reports_validation_category() {
    let (store, _temp_dir) = setup_test_env();
    let shell = Shell::new();

    match shell
        .execute_line("save site.com a@b.com NoSymbolHere1", &store)
        .unwrap()
    {
        CommandResult::Error(msg) => assert!(msg.starts_with("Missing Symbol")),
        other => panic!("Expected error, got {:?}", other),
    }
}

#[test]
fn test_shell_help_lists_commands() {
    let (store, _temp_dir) = setup_test_env();
    let shell = Shell::new();

    match shell.execute_line("help", &store).unwrap() {
        CommandResult::Success(Some(output)) => {
            for name in ["generate", "save", "search", "list", "quit"] {
                assert!(output.contains(name), "help missing {}", name);
            }
        }
        other => panic!("Expected help text, got {:?}", other),
    }
}

#[test]
fn test_shell_quoted_arguments_round_trip() {
    let (store, _temp_dir) = setup_test_env();
    let shell = Shell::new();

    let result = shell
        .execute_line("save \"my bank\" me@bank.com \"ab  12!xyz\"", &store)
        .unwrap();
    assert!(matches!(result, CommandResult::Success(_)));

    match shell.execute_line("search 'my bank'", &store).unwrap() {
        CommandResult::Success(Some(msg)) => {
            assert!(msg.starts_with("my bank\n"));
            assert!(msg.contains("Password: ab  12!xyz"));
        }
        other => panic!("Expected record, got {:?}", other),
    }
    assert_eq!(store.find("my bank").unwrap().password, "ab  12!xyz");
}

#[test]
fn test_shell_refuses_unquoted_spaced_password() {
    let (store, _temp_dir) = setup_test_env();
    let shell = Shell::new();

    let result = shell
        .execute_line("save site.com a@b.com ab  12!xyz", &store)
        .unwrap();
    assert!(matches!(result, CommandResult::Error(_)));
    assert!(matches!(
        store.find("site.com"),
        Err(StoreError::NotFound(NotFoundError::NoData))
    ));
}

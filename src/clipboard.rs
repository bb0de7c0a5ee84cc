//! Copying generated passwords to the system clipboard.
//!
//! A failed copy is never an error for the caller: headless sessions have
//! no clipboard, and the password is printed either way.

use arboard::Clipboard;

/// Copies `text` to the system clipboard.
pub fn copy(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copies `text` and returns a line telling the user how it went.
pub fn copy_with_notice(text: &str) -> String {
    match copy(text) {
        Ok(()) => {
            log::debug!("Copied generated password to clipboard");
            "Copied to clipboard.".to_string()
        }
        Err(e) => {
            log::warn!("Clipboard copy failed: {}", e);
            format!("Warning: could not copy to clipboard ({})", e)
        }
    }
}

/// The password line plus, when `copy` is set, the clipboard notice.
pub fn announce(password: &str, copy: bool) -> String {
    if copy {
        format!("{}\n{}", password, copy_with_notice(password))
    } else {
        password.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announce_without_copy_is_just_the_password() {
        assert_eq!(announce("Abc12345!", false), "Abc12345!");
    }

    #[test]
    fn test_copy_outcome_is_reported_not_raised() {
        // Succeeds on a desktop, warns on a headless machine; never panics.
        let text = announce("Abc12345!", true);
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("Abc12345!"));
        let notice = lines.next().unwrap();
        assert!(
            notice == "Copied to clipboard." || notice.starts_with("Warning: could not copy"),
            "unexpected notice: {}",
            notice
        );
    }
}

//! Cross-platform notification support
//! Currently only implements macOS notifications

use crate::domain::SessionMode;

#[cfg(target_os = "macos")]
use std::process::Command;

/// Message shown when a countdown of `ended_mode` finishes
pub fn session_ended_message(ended_mode: SessionMode) -> &'static str {
    match ended_mode {
        SessionMode::Focus => "Focus session complete. Time for a break.",
        SessionMode::Break => "Break is over. Back to focus.",
    }
}

/// Send a notification when a focus or break countdown ends
pub fn notify_session_ended(ended_mode: SessionMode) {
    let message = session_ended_message(ended_mode);

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "StudySprint""#,
            message.replace('"', "\\\"")
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            log::debug!("Notification failed: {}", e);
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_differ_per_mode() {
        assert_ne!(
            session_ended_message(SessionMode::Focus),
            session_ended_message(SessionMode::Break)
        );
    }
}

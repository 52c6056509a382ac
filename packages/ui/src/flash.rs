//! Transient success messages that clear themselves.

use dioxus::prelude::*;

/// How long a flash stays up before clearing itself.
const FLASH_MILLIS: u32 = 3_000;

/// Show a message in the slot and schedule it to clear. The slot stays
/// dismissible by hand in the meantime, and a flash shown later wins: the
/// earlier timer only clears the message it was armed for.
pub fn flash(mut slot: Signal<Option<String>>, message: impl Into<String>) {
    let message = message.into();
    slot.set(Some(message.clone()));
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(FLASH_MILLIS).await;
        let still_current = timer_owns_slot(slot.peek().as_deref(), &message);
        if still_current {
            slot.set(None);
        }
    });
}

fn timer_owns_slot(current: Option<&str>, armed_for: &str) -> bool {
    current == Some(armed_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_timer_clears_only_its_own_message() {
        assert!(timer_owns_slot(Some("Notes updated"), "Notes updated"));
        // A newer flash replaced the message; the stale timer backs off.
        assert!(!timer_owns_slot(
            Some("Game removed from attended list"),
            "Notes updated"
        ));
        // Dismissed by hand before the timer fired.
        assert!(!timer_owns_slot(None, "Notes updated"));
    }
}

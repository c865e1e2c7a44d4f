use std::sync::{Arc, RwLock};
use std::time::Duration;

use futures_timer::Delay;
use gpui::SharedString;

use crate::provider::SunProvider;

/// How long a message stays in the live region.
pub const ANNOUNCEMENT_CLEAR_DELAY: Duration = Duration::from_millis(1_000);

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
}

impl Politeness {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Announcement {
    pub message: SharedString,
    pub politeness: Politeness,
    version: u64,
}

#[derive(Default)]
struct AnnouncerState {
    version: u64,
    current: Option<Announcement>,
}

/// Slot backing the screen-reader live region. Cloning shares the slot.
#[derive(Clone, Default)]
pub struct LiveAnnouncer {
    state: Arc<RwLock<AnnouncerState>>,
}

impl LiveAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current message and returns its version.
    pub fn post(&self, message: SharedString, politeness: Politeness) -> u64 {
        let mut state = self.state.write().expect("announcer state poisoned");
        state.version += 1;
        let version = state.version;
        state.current = Some(Announcement {
            message,
            politeness,
            version,
        });
        version
    }

    /// Clears the slot only if it still holds the message posted as `version`.
    pub fn clear_if_version(&self, version: u64) -> bool {
        let mut state = self.state.write().expect("announcer state poisoned");
        let matches = state
            .current
            .as_ref()
            .is_some_and(|current| current.version == version);
        if matches {
            state.current = None;
        }
        matches
    }

    pub fn current(&self) -> Option<Announcement> {
        self.state
            .read()
            .expect("announcer state poisoned")
            .current
            .clone()
    }
}

/// Waits `delay` and then removes the message posted as `version`.
pub async fn clear_after(announcer: LiveAnnouncer, version: u64, delay: Duration) -> bool {
    Delay::new(delay).await;
    let cleared = announcer.clear_if_version(version);
    log::debug!("announcement {version} cleared: {cleared}");
    cleared
}

/// Posts `message` to the live region and schedules its removal.
///
/// No-op until a [`SunProvider`] has been initialised. The scheduled removal
/// cannot be cancelled.
pub fn announce(cx: &mut gpui::App, message: impl Into<SharedString>, politeness: Politeness) {
    let Some(announcer) = SunProvider::try_announcer(cx) else {
        log::debug!("announce skipped: no provider installed");
        return;
    };
    let version = announcer.post(message.into(), politeness);
    cx.refresh_windows();
    cx.spawn(async move |cx| {
        if clear_after(announcer, version, ANNOUNCEMENT_CLEAR_DELAY).await {
            let _ = cx.update(|cx| cx.refresh_windows());
        }
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn newer_message_replaces_the_current_one() {
        let announcer = LiveAnnouncer::new();
        announcer.post("first".into(), Politeness::Polite);
        announcer.post("second".into(), Politeness::Assertive);
        let current = announcer.current();
        assert_eq!(current.as_ref().map(|a| a.message.to_string()), Some("second".to_string()));
        assert_eq!(current.map(|a| a.politeness), Some(Politeness::Assertive));
    }

    #[test]
    fn stale_removal_keeps_the_newer_message() {
        let announcer = LiveAnnouncer::new();
        let first = announcer.post("saving".into(), Politeness::Polite);
        let second = announcer.post("saved".into(), Politeness::Polite);
        assert!(!announcer.clear_if_version(first));
        assert!(announcer.current().is_some());
        assert!(announcer.clear_if_version(second));
        assert!(announcer.current().is_none());
    }

    #[test]
    fn message_is_removed_after_the_delay() {
        let announcer = LiveAnnouncer::new();
        let version = announcer.post("copied".into(), Politeness::Polite);
        let cleared = block_on(clear_after(
            announcer.clone(),
            version,
            Duration::from_millis(5),
        ));
        assert!(cleared);
        assert_eq!(announcer.current(), None);
    }
}

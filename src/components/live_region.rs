use gpui::{InteractiveElement, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px};

use crate::a11y::{Announcement, Politeness};
use crate::contracts::{Accessible, Role};
use crate::id::ComponentId;
use crate::provider::SunProvider;

/// Visually hidden region holding the latest [`announce`](crate::a11y::announce)d
/// message. Mount one near the root of each window.
#[derive(IntoElement)]
pub struct LiveRegion {
    id: ComponentId,
    announcement: Option<Announcement>,
}

impl LiveRegion {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("live-region"),
            announcement: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    fn politeness(&self) -> Politeness {
        self.announcement
            .as_ref()
            .map(|announcement| announcement.politeness)
            .unwrap_or_default()
    }
}

impl Accessible for LiveRegion {
    fn role(&self) -> Role {
        match self.politeness() {
            Politeness::Polite => Role::Status,
            Politeness::Assertive => Role::Alert,
        }
    }

    fn accessible_label(&self) -> Option<&str> {
        self.announcement
            .as_ref()
            .map(|announcement| announcement.message.as_ref())
    }
}

impl RenderOnce for LiveRegion {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.announcement =
            SunProvider::try_announcer(cx).and_then(|announcer| announcer.current());

        let mut root = div()
            .id(self.id.clone())
            .absolute()
            .w(px(1.0))
            .h(px(1.0))
            .overflow_hidden()
            .opacity(0.0);
        if let Some(announcement) = self.announcement {
            root = root.child(announcement.message);
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_region_is_polite() {
        let region = LiveRegion::new();
        assert_eq!(region.role(), Role::Status);
        assert_eq!(region.accessible_label(), None);
    }

    #[test]
    fn assertive_message_switches_to_the_alert_role() {
        let announcer = crate::a11y::LiveAnnouncer::new();
        announcer.post("Connection lost".into(), Politeness::Assertive);
        let mut region = LiveRegion::new();
        region.announcement = announcer.current();
        assert_eq!(region.role(), Role::Alert);
        assert_eq!(region.accessible_label(), Some("Connection lost"));
    }
}

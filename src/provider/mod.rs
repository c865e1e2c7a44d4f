use std::sync::Arc;

use crate::a11y::LiveAnnouncer;
use crate::theme::Theme;

#[derive(Default)]
pub struct SunProvider {
    theme: Option<Theme>,
    announcer: Option<LiveAnnouncer>,
}

#[derive(Clone)]
struct ProviderGlobal {
    theme: Arc<Theme>,
    announcer: LiveAnnouncer,
}

impl gpui::Global for ProviderGlobal {}

impl SunProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_theme(mut self, configure: impl FnOnce(Theme) -> Theme) -> Self {
        let current = self.theme.take().unwrap_or_default();
        self.theme = Some(configure(current));
        self
    }

    pub fn set_announcer(mut self, announcer: LiveAnnouncer) -> Self {
        self.announcer = Some(announcer);
        self
    }

    /// Installs the provider, or updates the already installed one.
    pub fn init(self, cx: &mut gpui::App) {
        if cx.has_global::<ProviderGlobal>() {
            log::trace!("updating installed sun-ui provider");
            let global = cx.global_mut::<ProviderGlobal>();
            if let Some(theme) = self.theme {
                global.theme = Arc::new(theme);
            }
            if let Some(announcer) = self.announcer {
                global.announcer = announcer;
            }
            return;
        }

        log::trace!("installing sun-ui provider");
        cx.set_global(ProviderGlobal {
            theme: Arc::new(self.theme.unwrap_or_default()),
            announcer: self.announcer.unwrap_or_default(),
        });
    }

    pub fn theme(cx: &gpui::App) -> Arc<Theme> {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.theme.clone())
            .unwrap_or_else(|| Arc::new(Theme::default()))
    }

    pub fn try_announcer(cx: &gpui::App) -> Option<LiveAnnouncer> {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.announcer.clone())
    }
}

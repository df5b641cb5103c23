use std::time::Duration;

use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

pub const BANNER_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
    Validation,
}

/// A transient message shown above a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Error, message: message.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Validation, message: message.into() }
    }

    fn intent(&self) -> MessageBarIntent {
        match self.kind {
            BannerKind::Success => MessageBarIntent::Success,
            BannerKind::Error => MessageBarIntent::Error,
            BannerKind::Validation => MessageBarIntent::Warning,
        }
    }
}

/// Shows `banner` in `slot` and clears it after [`BANNER_TIMEOUT`], unless a
/// newer banner has replaced it by then.
pub fn show_banner(slot: RwSignal<Option<Banner>>, banner: Banner) {
    slot.set(Some(banner.clone()));
    set_timeout(
        move || {
            if slot.get_untracked().as_ref() == Some(&banner) {
                slot.set(None);
            }
        },
        BANNER_TIMEOUT,
    );
}

#[component]
pub fn FeedbackBanner(banner: RwSignal<Option<Banner>>) -> impl IntoView {
    move || {
        banner.get().map(|b| {
            view! {
                <div class="form-banner" role="status">
                    <MessageBar intent=b.intent()>
                        {b.message.clone()}
                    </MessageBar>
                    <button
                        type="button"
                        class="form-banner__close"
                        aria-label="Dismiss"
                        on:click=move |_| banner.set(None)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}

//! Self-expiring status-banner notices.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rangedeck_domain::panel::Banner;

use crate::lock;
use crate::ports::PanelView;

/// Funnel for every status-banner write.
///
/// Keeps the currently shown [`Banner`] so an expiring notice can tell
/// whether it is still the one on screen: the revert fires only when nothing
/// newer has replaced it in the meantime. Range updates from the poller go
/// through [`set`](Self::set) and count as "newer" too.
pub struct Notifier<V> {
    inner: Arc<Inner<V>>,
}

struct Inner<V> {
    view: Arc<V>,
    current: Mutex<Banner>,
    ttl: Duration,
}

impl<V> Clone for Notifier<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: PanelView + 'static> Notifier<V> {
    /// Create a notifier writing through the given view.
    ///
    /// `ttl` is how long a flashed notice stays before reverting to
    /// [`Banner::Waiting`].
    pub fn new(view: Arc<V>, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                view,
                current: Mutex::new(Banner::Waiting),
                ttl,
            }),
        }
    }

    /// Replace the banner unconditionally.
    pub fn set(&self, banner: Banner) {
        {
            let mut current = lock(&self.inner.current);
            *current = banner.clone();
        }
        self.inner.view.show_banner(&banner);
    }

    /// Flash a notice that reverts to [`Banner::Waiting`] after the TTL,
    /// unless something newer replaced it first.
    ///
    /// Each flash carries its own timer; an older timer firing after its
    /// notice was overwritten is a no-op.
    pub fn flash(&self, message: impl Into<String>) {
        let banner = Banner::Error(message.into());
        self.set(banner.clone());

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.ttl).await;
            let reverted = {
                let mut current = lock(&inner.current);
                if *current == banner {
                    *current = Banner::Waiting;
                    true
                } else {
                    false
                }
            };
            if reverted {
                inner.view.show_banner(&Banner::Waiting);
            }
        });
    }

    /// The banner currently on screen.
    #[must_use]
    pub fn current(&self) -> Banner {
        lock(&self.inner.current).clone()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rangedeck_domain::panel::{CoverStage, PanelFrame, RangeBand};
    use rangedeck_domain::status::Direction;

    use super::*;

    #[derive(Default)]
    struct RecordingView {
        banners: Mutex<Vec<Banner>>,
    }

    impl PanelView for RecordingView {
        fn render(&self, _frame: &PanelFrame) {}
        fn show_direction(&self, _direction: Direction) {}
        fn show_banner(&self, banner: &Banner) {
            self.banners.lock().unwrap().push(banner.clone());
        }
        fn show_cover(&self, _stage: CoverStage) {}
        fn announce_link(&self, _address: &str) {}
    }

    const TTL: Duration = Duration::from_millis(60);

    fn notifier() -> (Notifier<RecordingView>, Arc<RecordingView>) {
        let view = Arc::new(RecordingView::default());
        (Notifier::new(Arc::clone(&view), TTL), view)
    }

    #[tokio::test]
    async fn should_show_flashed_notice_immediately() {
        let (notifier, view) = notifier();
        notifier.flash("Connection error");

        assert_eq!(notifier.current(), Banner::Error("Connection error".into()));
        assert_eq!(
            view.banners.lock().unwrap().last().unwrap().text(),
            "Connection error"
        );
    }

    #[tokio::test]
    async fn should_revert_to_waiting_after_ttl() {
        let (notifier, view) = notifier();
        notifier.flash("Connection error");

        tokio::time::sleep(TTL * 3).await;

        assert_eq!(notifier.current(), Banner::Waiting);
        assert_eq!(*view.banners.lock().unwrap().last().unwrap(), Banner::Waiting);
    }

    #[tokio::test]
    async fn should_not_revert_when_a_newer_banner_replaced_the_notice() {
        let (notifier, _view) = notifier();
        notifier.flash("Connection error");
        notifier.set(Banner::Range(RangeBand::Near));

        tokio::time::sleep(TTL * 3).await;

        // The expired notice must not clobber the newer range banner.
        assert_eq!(notifier.current(), Banner::Range(RangeBand::Near));
    }

    #[tokio::test]
    async fn should_let_a_second_notice_outlive_the_first_timer() {
        let (notifier, _view) = notifier();
        notifier.flash("first");
        tokio::time::sleep(TTL / 2).await;
        notifier.flash("second");

        // First timer fires around now; the second notice must survive it.
        tokio::time::sleep(TTL * 3 / 4).await;
        assert_eq!(notifier.current(), Banner::Error("second".into()));

        // The second timer eventually reverts it.
        tokio::time::sleep(TTL).await;
        assert_eq!(notifier.current(), Banner::Waiting);
    }

    #[tokio::test]
    async fn should_funnel_plain_banner_writes_to_the_view() {
        let (notifier, view) = notifier();
        notifier.set(Banner::Range(RangeBand::Far));

        assert_eq!(
            *view.banners.lock().unwrap().last().unwrap(),
            Banner::Range(RangeBand::Far)
        );
    }
}

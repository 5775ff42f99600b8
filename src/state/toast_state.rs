//! Toast queue: the terminal implementation of the notification service

use crate::notify::{Notification, Notifier};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// A notification currently on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub notification: Notification,
    /// Wall-clock time the toast was raised, shown next to the title
    pub created_at: DateTime<Utc>,
    shown_at: Instant,
}

impl Toast {
    fn new(notification: Notification, now: Instant) -> Self {
        Self {
            id: Uuid::new_v4(),
            notification,
            created_at: Utc::now(),
            shown_at: now,
        }
    }

    /// Whether the toast has outlived `lifetime` at `now`
    pub fn is_expired_at(&self, now: Instant, lifetime: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= lifetime
    }

    /// Opacity in `0.0..=1.0`. Fully opaque until the last
    /// [`ToastQueue::FADE_DURATION`] of its lifetime, then eased out.
    pub fn opacity_at(&self, now: Instant, lifetime: Duration) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        let remaining = lifetime.saturating_sub(elapsed);
        let fade = ToastQueue::FADE_DURATION.min(lifetime);

        if remaining >= fade {
            return 1.0;
        }
        if fade.is_zero() {
            return 0.0;
        }
        let progress = 1.0 - remaining.as_secs_f32() / fade.as_secs_f32();
        (1.0 - simple_easing::cubic_in(progress)).clamp(0.0, 1.0)
    }
}

/// Bounded queue of visible toasts, newest last
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    lifetime: Duration,
    max_visible: usize,
}

impl ToastQueue {
    /// Length of the fade-out at the end of a toast's life
    pub const FADE_DURATION: Duration = Duration::from_millis(400);

    pub fn new(lifetime: Duration, max_visible: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            lifetime,
            max_visible: max_visible.max(1),
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn push_at(&mut self, notification: Notification, now: Instant) {
        while self.toasts.len() >= self.max_visible {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast::new(notification, now));
    }

    /// Drop toasts that have expired at `now`. Returns how many were removed.
    pub fn tick_at(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        let lifetime = self.lifetime;
        self.toasts.retain(|t| !t.is_expired_at(now, lifetime));
        before - self.toasts.len()
    }

    /// Remove every toast immediately
    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
        if let Some(toast) = self.toasts.back() {
            tracing::debug!(
                id = %toast.id,
                destructive = toast.notification.is_destructive(),
                visible = self.len(),
                "toast raised"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> ToastQueue {
        ToastQueue::new(Duration::from_secs(5), 3)
    }

    mod queue {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_queue_is_empty() {
            let q = queue();
            assert!(q.is_empty());
            assert_eq!(q.len(), 0);
        }

        #[test]
        fn test_notify_adds_toast() {
            let mut q = queue();
            q.notify(Notification::success("Registration successful!"));
            assert_eq!(q.len(), 1);
            let toast = q.iter().next().unwrap();
            assert_eq!(toast.notification.title, "Success");
        }

        #[test]
        fn test_limit_drops_oldest() {
            let mut q = ToastQueue::new(Duration::from_secs(5), 2);
            q.notify(Notification::error("one"));
            q.notify(Notification::error("two"));
            q.notify(Notification::error("three"));

            let descriptions: Vec<_> = q.iter().map(|t| t.notification.description.as_str()).collect();
            assert_eq!(descriptions, vec!["two", "three"]);
        }

        #[test]
        fn test_zero_limit_still_shows_one() {
            let mut q = ToastQueue::new(Duration::from_secs(5), 0);
            q.notify(Notification::error("one"));
            assert_eq!(q.len(), 1);
        }

        #[test]
        fn test_ids_are_unique() {
            let mut q = queue();
            q.notify(Notification::error("a"));
            q.notify(Notification::error("b"));
            let ids: Vec<_> = q.iter().map(|t| t.id).collect();
            assert_ne!(ids[0], ids[1]);
        }

        #[test]
        fn test_dismiss_all() {
            let mut q = queue();
            q.notify(Notification::error("a"));
            q.notify(Notification::error("b"));
            q.dismiss_all();
            assert!(q.is_empty());
        }
    }

    mod expiry {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_tick_keeps_fresh_toasts() {
            let mut q = queue();
            let now = Instant::now();
            q.push_at(Notification::error("a"), now);
            assert_eq!(q.tick_at(now + Duration::from_secs(1)), 0);
            assert_eq!(q.len(), 1);
        }

        #[test]
        fn test_tick_removes_expired_toasts() {
            let mut q = queue();
            let now = Instant::now();
            q.push_at(Notification::error("old"), now);
            q.push_at(Notification::error("new"), now + Duration::from_secs(3));

            assert_eq!(q.tick_at(now + Duration::from_secs(5)), 1);
            assert_eq!(q.iter().next().unwrap().notification.description, "new");
        }
    }

    mod opacity {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_opaque_before_fade() {
            let now = Instant::now();
            let toast = Toast::new(Notification::error("a"), now);
            let lifetime = Duration::from_secs(5);
            assert_eq!(toast.opacity_at(now, lifetime), 1.0);
            assert_eq!(toast.opacity_at(now + Duration::from_secs(4), lifetime), 1.0);
        }

        #[test]
        fn test_fades_out_at_end_of_life() {
            let now = Instant::now();
            let toast = Toast::new(Notification::error("a"), now);
            let lifetime = Duration::from_secs(5);

            let mid = toast.opacity_at(now + Duration::from_millis(4800), lifetime);
            assert!(mid > 0.0 && mid < 1.0, "mid-fade opacity was {mid}");
            assert_eq!(toast.opacity_at(now + lifetime, lifetime), 0.0);
        }

        #[test]
        fn test_opacity_decreases_during_fade() {
            let now = Instant::now();
            let toast = Toast::new(Notification::error("a"), now);
            let lifetime = Duration::from_secs(5);

            let early = toast.opacity_at(now + Duration::from_millis(4700), lifetime);
            let late = toast.opacity_at(now + Duration::from_millis(4900), lifetime);
            assert!(early > late);
        }
    }
}

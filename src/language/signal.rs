//! Broadcast cell carrying the current [`LanguageContext`].
//!
//! Built on `tokio::sync::watch`: every subscriber sees the latest value and
//! can ask whether it changed since it last looked. Nothing here awaits, so
//! no runtime is needed.

use std::rc::Rc;

use tokio::sync::watch;

use super::tag::LanguageContext;

/// Sending side of the language broadcast. Cloning shares the same cell.
#[derive(Debug, Clone)]
pub struct LanguageSignal {
    tx: Rc<watch::Sender<LanguageContext>>,
}

impl LanguageSignal {
    /// Create a signal holding `initial`.
    #[must_use]
    pub fn new(initial: LanguageContext) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Rc::new(tx) }
    }

    /// What: Publish a new value.
    ///
    /// Output:
    /// - `true` when the value differed and subscribers were notified
    ///
    /// Details:
    /// - Publishing an identical value leaves subscribers untouched, so a
    ///   provider re-rendering with the same props does not trigger work.
    pub fn publish(&self, next: LanguageContext) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                tracing::debug!(
                    active = %next.active,
                    default = %next.default,
                    "language signal updated"
                );
                *current = next;
                true
            }
        })
    }

    /// Latest published value.
    #[must_use]
    pub fn current(&self) -> LanguageContext {
        self.tx.borrow().clone()
    }

    /// Register a new subscriber. It starts out having seen the current value.
    #[must_use]
    pub fn subscribe(&self) -> LanguageSubscriber {
        LanguageSubscriber {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for LanguageSignal {
    fn default() -> Self {
        Self::new(LanguageContext::fallback())
    }
}

/// Receiving side of a [`LanguageSignal`].
#[derive(Debug, Clone)]
pub struct LanguageSubscriber {
    rx: watch::Receiver<LanguageContext>,
}

impl LanguageSubscriber {
    /// Latest published value, without marking it seen.
    #[must_use]
    pub fn current(&self) -> LanguageContext {
        self.rx.borrow().clone()
    }

    /// Whether a value was published since the last [`Self::mark_seen`].
    /// A signal whose sender is gone never changes again.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Acknowledge the current value.
    pub fn mark_seen(&mut self) {
        let _ = self.rx.borrow_and_update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageTag;

    fn ctx(active: &str, default: &str) -> LanguageContext {
        LanguageContext {
            active: LanguageTag::new(active),
            default: LanguageTag::new(default),
        }
    }

    #[test]
    fn publish_notifies_only_on_change() {
        let signal = LanguageSignal::new(ctx("en_US", "en_US"));
        let mut sub = signal.subscribe();
        assert!(!sub.has_changed());

        assert!(!signal.publish(ctx("en_US", "en_US")));
        assert!(!sub.has_changed());

        assert!(signal.publish(ctx("en_IE", "en_AU")));
        assert!(sub.has_changed());
        assert_eq!(sub.current().active.as_str(), "en_IE");

        sub.mark_seen();
        assert!(!sub.has_changed());
    }

    #[test]
    fn clones_share_the_cell() {
        let signal = LanguageSignal::default();
        let other = signal.clone();
        let sub = signal.subscribe();
        other.publish(ctx("de_DE", "en_US"));
        assert_eq!(signal.current().active.as_str(), "de_DE");
        assert!(sub.has_changed());
    }

    #[test]
    fn every_subscriber_sees_the_latest_value() {
        let signal = LanguageSignal::default();
        let first = signal.subscribe();
        let second = signal.subscribe();
        signal.publish(ctx("fr_FR", "en_US"));
        signal.publish(ctx("en_CA", "en_US"));
        assert_eq!(first.current().active.as_str(), "en_CA");
        assert_eq!(second.current().active.as_str(), "en_CA");
    }
}

use crate::action::ActionEvent;
use crate::binding::{Key, KeyBindings};
use std::collections::BTreeMap;

type Handler<C> = Box<dyn FnMut(&mut C)>;

/// Publish/subscribe bus from key codes to action subscribers.
///
/// `C` is the context each subscriber mutates. The dispatcher never owns it;
/// callers lend it per event, so all mutation stays on the caller's thread.
pub struct InputDispatcher<C> {
    bindings: KeyBindings,
    subscribers: BTreeMap<ActionEvent, Vec<Handler<C>>>,
}

impl<C> Default for InputDispatcher<C> {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl<C> InputDispatcher<C> {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            subscribers: BTreeMap::new(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Register `handler` for `event`. Handlers for the same event run in
    /// registration order.
    pub fn subscribe(&mut self, event: ActionEvent, handler: impl FnMut(&mut C) + 'static) {
        self.subscribers
            .entry(event)
            .or_default()
            .push(Box::new(handler));
    }

    /// Number of handlers registered for `event`.
    pub fn subscriber_count(&self, event: ActionEvent) -> usize {
        self.subscribers.get(&event).map_or(0, Vec::len)
    }

    /// Translate a key press. Returns the published event, or `None` for an
    /// unbound key.
    pub fn on_key_down(&mut self, key: Key, ctx: &mut C) -> Option<ActionEvent> {
        let event = self.bindings.action_for(key)?.pressed();
        self.publish(event, ctx);
        Some(event)
    }

    /// Translate a key release. Returns the published event, or `None` for an
    /// unbound key.
    pub fn on_key_up(&mut self, key: Key, ctx: &mut C) -> Option<ActionEvent> {
        let event = self.bindings.action_for(key)?.released();
        self.publish(event, ctx);
        Some(event)
    }

    /// Invoke every subscriber of `event`. Returns how many ran.
    pub fn publish(&mut self, event: ActionEvent, ctx: &mut C) -> usize {
        let action = event.action();
        let release = event.is_release();
        let Some(handlers) = self.subscribers.get_mut(&event) else {
            tracing::trace!(%action, release, "no subscribers");
            return 0;
        };
        for handler in handlers.iter_mut() {
            handler(ctx);
        }
        tracing::trace!(%action, release, count = handlers.len(), "event dispatched");
        handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    #[test]
    fn bound_key_publishes_pressed_event() {
        let mut bus: InputDispatcher<Vec<&'static str>> = InputDispatcher::default();
        bus.subscribe(ActionEvent::Accelerate, |log| log.push("accelerate"));
        bus.subscribe(ActionEvent::Brake, |log| log.push("brake"));

        let mut log = Vec::new();
        assert_eq!(bus.on_key_down(Key::W, &mut log), Some(ActionEvent::Accelerate));
        assert_eq!(bus.on_key_down(Key::S, &mut log), Some(ActionEvent::Brake));
        assert_eq!(log, vec!["accelerate", "brake"]);
    }

    #[test]
    fn unbound_key_is_ignored() {
        let mut bus: InputDispatcher<u32> = InputDispatcher::default();
        bus.subscribe(ActionEvent::Accelerate, |n| *n += 1);

        let mut n = 0;
        assert_eq!(bus.on_key_down(Key(65), &mut n), None);
        assert_eq!(bus.on_key_up(Key(65), &mut n), None);
        assert_eq!(n, 0);
    }

    #[test]
    fn key_up_publishes_released_event() {
        let mut bus: InputDispatcher<Vec<ActionEvent>> = InputDispatcher::default();
        bus.subscribe(ActionEvent::BrakeReleased, |log| {
            log.push(ActionEvent::BrakeReleased)
        });

        let mut log = Vec::new();
        assert_eq!(bus.on_key_up(Key::S, &mut log), Some(ActionEvent::BrakeReleased));
        assert_eq!(log, vec![ActionEvent::BrakeReleased]);
    }

    #[test]
    fn released_event_without_listener_is_accepted() {
        let mut bus: InputDispatcher<u32> = InputDispatcher::default();
        bus.subscribe(ActionEvent::Accelerate, |n| *n += 1);

        let mut n = 0;
        assert_eq!(
            bus.on_key_up(Key::W, &mut n),
            Some(ActionEvent::AccelerateReleased)
        );
        assert_eq!(bus.subscriber_count(ActionEvent::AccelerateReleased), 0);
        assert_eq!(n, 0);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let mut bus: InputDispatcher<Vec<u8>> = InputDispatcher::default();
        for i in 0..4 {
            bus.subscribe(ActionEvent::Brake, move |log| log.push(i));
        }

        let mut log = Vec::new();
        assert_eq!(bus.publish(ActionEvent::Brake, &mut log), 4);
        assert_eq!(log, vec![0, 1, 2, 3]);
    }

    #[test]
    fn custom_bindings() {
        let bindings = KeyBindings::from_pairs([(Key(38), Action::Accelerate)]);
        let mut bus: InputDispatcher<u32> = InputDispatcher::new(bindings);
        bus.subscribe(ActionEvent::Accelerate, |n| *n += 1);

        let mut n = 0;
        assert_eq!(bus.on_key_down(Key::W, &mut n), None);
        assert_eq!(bus.on_key_down(Key(38), &mut n), Some(ActionEvent::Accelerate));
        assert_eq!(n, 1);
    }
}

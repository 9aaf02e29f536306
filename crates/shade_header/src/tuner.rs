//! Named-setting delivery
//!
//! A small typed mirror of the platform settings feed. Components implement
//! [`Tunable`] and register with a [`TunerHub`] for the keys they care
//! about; the hub fans each change out to the registered consumers. Values
//! arrive already parsed, so consumers match on variants instead of
//! re-parsing strings.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

/// Settings the header listens to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Show the clock in the collapsed strip
    ShowClock,
    /// Show the date alongside the clock
    ShowDate,
    /// Comma-list of icon slots the user has hidden
    IconHideList,
}

/// A parsed setting value
#[derive(Clone, Debug, PartialEq)]
pub enum SettingValue {
    /// Integer-backed switch; `None` means the setting is unset
    Switch(Option<i32>),
    /// Slot names to hide, already split
    HideList(Vec<String>),
}

/// Interpret an integer-backed switch: unset falls back to `default_value`,
/// any non-zero integer is on
pub fn parse_switch(raw: Option<i32>, default_value: bool) -> bool {
    match raw {
        Some(value) => value != 0,
        None => default_value,
    }
}

/// Implemented by components that consume setting changes
pub trait Tunable {
    fn on_tuning_changed(&mut self, key: SettingKey, value: &SettingValue);
}

/// Fans setting changes out to registered tunables, filtered by key
#[derive(Default)]
pub struct TunerHub {
    tunables: Vec<(Rc<RefCell<dyn Tunable>>, SmallVec<[SettingKey; 3]>)>,
}

impl TunerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `tunable` for `keys`; changes to other keys are not delivered
    pub fn add_tunable(&mut self, tunable: Rc<RefCell<dyn Tunable>>, keys: &[SettingKey]) {
        self.tunables.push((tunable, keys.iter().copied().collect()));
    }

    /// Deliver one setting change to every tunable registered for its key
    pub fn broadcast(&self, key: SettingKey, value: &SettingValue) {
        for (tunable, keys) in &self.tunables {
            if keys.contains(&key) {
                tunable.borrow_mut().on_tuning_changed(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_switch() {
        assert!(parse_switch(Some(1), false));
        assert!(parse_switch(Some(-3), false));
        assert!(!parse_switch(Some(0), true));
        assert!(parse_switch(None, true));
        assert!(!parse_switch(None, false));
    }

    #[derive(Default)]
    struct Recorder {
        seen: Vec<SettingKey>,
    }

    impl Tunable for Recorder {
        fn on_tuning_changed(&mut self, key: SettingKey, _value: &SettingValue) {
            self.seen.push(key);
        }
    }

    #[test]
    fn test_broadcast_respects_key_filter() {
        let mut hub = TunerHub::new();
        let clock_only = Rc::new(RefCell::new(Recorder::default()));
        let both = Rc::new(RefCell::new(Recorder::default()));

        hub.add_tunable(clock_only.clone(), &[SettingKey::ShowClock]);
        hub.add_tunable(
            both.clone(),
            &[SettingKey::ShowClock, SettingKey::ShowDate],
        );

        hub.broadcast(SettingKey::ShowDate, &SettingValue::Switch(Some(1)));
        hub.broadcast(SettingKey::ShowClock, &SettingValue::Switch(Some(0)));
        hub.broadcast(
            SettingKey::IconHideList,
            &SettingValue::HideList(vec!["clock".into()]),
        );

        assert_eq!(clock_only.borrow().seen, vec![SettingKey::ShowClock]);
        assert_eq!(
            both.borrow().seen,
            vec![SettingKey::ShowDate, SettingKey::ShowClock]
        );
    }
}

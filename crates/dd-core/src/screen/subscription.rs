//! Sensor subscription lifecycle.
//!
//! A pure transition function; the effectful manager that owns tokens and
//! tasks drives it. The provider is touched only when a transition asks
//! for it, which is what makes teardown idempotent: a second hide finds
//! the machine already `Inactive` and produces no action.

/// Lifecycle of one streaming sensor on one screen instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorState {
    Inactive,
    Starting,
    Active,
}

/// Events that drive the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorEvent {
    ScreenShown,
    Registered,
    RegistrationFailed,
    ScreenHidden,
}

/// Provider-facing side effect a transition requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorAction {
    Register,
    Unregister,
}

pub fn transition(state: SensorState, event: SensorEvent) -> (SensorState, Option<SensorAction>) {
    match (state, event) {
        (SensorState::Inactive, SensorEvent::ScreenShown) => {
            (SensorState::Starting, Some(SensorAction::Register))
        }
        (SensorState::Starting, SensorEvent::Registered) => (SensorState::Active, None),
        (SensorState::Starting, SensorEvent::RegistrationFailed) => (SensorState::Inactive, None),
        // Hidden while the registration was still in flight: the token
        // exists by now, so it still has to be released.
        (SensorState::Starting, SensorEvent::ScreenHidden) => {
            (SensorState::Inactive, Some(SensorAction::Unregister))
        }
        (SensorState::Active, SensorEvent::ScreenHidden) => {
            (SensorState::Inactive, Some(SensorAction::Unregister))
        }
        (state, _event) => (state, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_from_inactive_requests_registration() {
        assert_eq!(
            transition(SensorState::Inactive, SensorEvent::ScreenShown),
            (SensorState::Starting, Some(SensorAction::Register))
        );
    }

    #[test]
    fn hide_from_active_requests_unregistration() {
        assert_eq!(
            transition(SensorState::Active, SensorEvent::ScreenHidden),
            (SensorState::Inactive, Some(SensorAction::Unregister))
        );
    }

    #[test]
    fn second_hide_is_a_no_op() {
        let (state, action) = transition(SensorState::Active, SensorEvent::ScreenHidden);
        assert_eq!(state, SensorState::Inactive);
        assert_eq!(action, Some(SensorAction::Unregister));

        let (state, action) = transition(state, SensorEvent::ScreenHidden);
        assert_eq!(state, SensorState::Inactive);
        assert_eq!(action, None, "no second unregister may reach the provider");
    }

    #[test]
    fn double_show_does_not_register_twice() {
        let (state, _) = transition(SensorState::Inactive, SensorEvent::ScreenShown);
        let (state, action) = transition(state, SensorEvent::ScreenShown);
        assert_eq!(state, SensorState::Starting);
        assert_eq!(action, None);
    }

    #[test]
    fn failed_registration_returns_to_inactive() {
        let (state, _) = transition(SensorState::Inactive, SensorEvent::ScreenShown);
        let (state, action) = transition(state, SensorEvent::RegistrationFailed);
        assert_eq!(state, SensorState::Inactive);
        assert_eq!(action, None);
    }
}

//! Alarm decision rules.
//!
//! [`decide`] maps the current [`Snapshot`] and an incoming [`Trigger`] to a
//! [`Decision`]. It performs no IO: the application service reads the
//! snapshot from the repository, calls `decide`, and writes the result back.
//!
//! | Current | Trigger | Next | Rule |
//! |---|---|---|---|
//! | any | inactive sensor reported inactive | unchanged | [`Rule::IdleDeactivation`] |
//! | `Alarm` (armed) | any sensor change | unchanged | [`Rule::StickyAlarm`] |
//! | `Alarm` (disarmed) | sensor goes active → inactive | `PendingAlarm` | [`Rule::DisarmedCooldown`] |
//! | `NoAlarm` (armed) | sensor reported active | `PendingAlarm` | [`Rule::SensorEscalation`] |
//! | `PendingAlarm` (armed) | sensor reported active | `Alarm` | [`Rule::SensorEscalation`] |
//! | `PendingAlarm` | last active sensor goes inactive | `NoAlarm` | [`Rule::AllClear`] |
//! | any | cat seen while armed home | `Alarm` | [`Rule::CatWhileArmedHome`] |
//! | any | no cat and no active sensor | `NoAlarm` | [`Rule::NoCatAllClear`] |
//! | any | disarm | `NoAlarm` | [`Rule::Disarm`] |
//! | any | arm home while a cat is in view | `Alarm` | [`Rule::ArmHomeWithCatInView`] |

use crate::status::{AlarmStatus, ArmingStatus};

/// Current state the rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub alarm: AlarmStatus,
    pub arming: ArmingStatus,
    /// Verdict of the most recently processed image.
    pub cat_in_view: bool,
}

/// An event entering the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A sensor reported its activation value.
    SensorActivation {
        was_active: bool,
        now_active: bool,
        /// Whether any sensor (this one included) is active after the change.
        any_active_after: bool,
    },
    /// The verdict provider classified an image.
    ImageVerdict {
        contains_cat: bool,
        any_sensor_active: bool,
    },
    /// The arming status was replaced.
    ArmingChanged { to: ArmingStatus },
}

/// The named rule that produced a [`Decision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Deactivating an already inactive sensor changes nothing.
    IdleDeactivation,
    /// A triggered alarm ignores sensor changes while the system is armed.
    StickyAlarm,
    /// A triggered alarm steps down to pending when a sensor deactivates
    /// while the system is disarmed.
    DisarmedCooldown,
    /// An active sensor raises an armed system one level.
    SensorEscalation,
    /// Pending alarm with every sensor inactive resets.
    AllClear,
    /// A cat seen while armed home triggers the alarm.
    CatWhileArmedHome,
    /// No cat and no active sensor resets the alarm.
    NoCatAllClear,
    /// Disarming always resets the alarm.
    Disarm,
    /// Arming home while the camera last saw a cat triggers the alarm.
    ArmHomeWithCatInView,
    /// Nothing applies.
    Unchanged,
}

/// Outcome of evaluating a [`Trigger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Status to write, if any. A `Some` is written even when equal to the
    /// current status.
    pub alarm: Option<AlarmStatus>,
    /// Whether every sensor must be deactivated.
    pub reset_sensors: bool,
    pub rule: Rule,
}

impl Decision {
    fn keep(rule: Rule) -> Self {
        Self {
            alarm: None,
            reset_sensors: false,
            rule,
        }
    }

    fn set(alarm: AlarmStatus, rule: Rule) -> Self {
        Self {
            alarm: Some(alarm),
            reset_sensors: false,
            rule,
        }
    }
}

/// Evaluate `trigger` against `snapshot`.
#[must_use]
pub fn decide(snapshot: Snapshot, trigger: Trigger) -> Decision {
    match trigger {
        Trigger::SensorActivation {
            was_active,
            now_active,
            any_active_after,
        } => sensor_activation(snapshot, was_active, now_active, any_active_after),
        Trigger::ImageVerdict {
            contains_cat,
            any_sensor_active,
        } => image_verdict(snapshot, contains_cat, any_sensor_active),
        Trigger::ArmingChanged { to } => arming_changed(snapshot, to),
    }
}

fn sensor_activation(
    snapshot: Snapshot,
    was_active: bool,
    now_active: bool,
    any_active_after: bool,
) -> Decision {
    let armed = snapshot.arming.is_armed();
    let deactivated = was_active && !now_active;

    if !was_active && !now_active {
        return Decision::keep(Rule::IdleDeactivation);
    }

    if snapshot.alarm == AlarmStatus::Alarm {
        if !armed && deactivated {
            return Decision::set(AlarmStatus::PendingAlarm, Rule::DisarmedCooldown);
        }
        return Decision::keep(Rule::StickyAlarm);
    }

    if now_active {
        if !armed {
            return Decision::keep(Rule::Unchanged);
        }
        let next = match snapshot.alarm {
            AlarmStatus::NoAlarm => AlarmStatus::PendingAlarm,
            AlarmStatus::PendingAlarm | AlarmStatus::Alarm => AlarmStatus::Alarm,
        };
        return Decision::set(next, Rule::SensorEscalation);
    }

    if snapshot.alarm == AlarmStatus::PendingAlarm && !any_active_after {
        return Decision::set(AlarmStatus::NoAlarm, Rule::AllClear);
    }

    Decision::keep(Rule::Unchanged)
}

fn image_verdict(snapshot: Snapshot, contains_cat: bool, any_sensor_active: bool) -> Decision {
    if contains_cat {
        if snapshot.arming == ArmingStatus::ArmedHome {
            return Decision::set(AlarmStatus::Alarm, Rule::CatWhileArmedHome);
        }
        return Decision::keep(Rule::Unchanged);
    }
    if any_sensor_active {
        return Decision::keep(Rule::Unchanged);
    }
    Decision::set(AlarmStatus::NoAlarm, Rule::NoCatAllClear)
}

fn arming_changed(snapshot: Snapshot, to: ArmingStatus) -> Decision {
    match to {
        ArmingStatus::Disarmed => Decision::set(AlarmStatus::NoAlarm, Rule::Disarm),
        ArmingStatus::ArmedHome if snapshot.cat_in_view => Decision {
            alarm: Some(AlarmStatus::Alarm),
            reset_sensors: true,
            rule: Rule::ArmHomeWithCatInView,
        },
        ArmingStatus::ArmedHome | ArmingStatus::ArmedAway => Decision {
            alarm: None,
            reset_sensors: true,
            rule: Rule::Unchanged,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(alarm: AlarmStatus, arming: ArmingStatus) -> Snapshot {
        Snapshot {
            alarm,
            arming,
            cat_in_view: false,
        }
    }

    fn activation(was_active: bool, now_active: bool, any_active_after: bool) -> Trigger {
        Trigger::SensorActivation {
            was_active,
            now_active,
            any_active_after,
        }
    }

    #[test]
    fn should_go_pending_when_armed_and_sensor_activates() {
        for arming in ArmingStatus::ARMED {
            let decision = decide(
                snapshot(AlarmStatus::NoAlarm, arming),
                activation(false, true, true),
            );
            assert_eq!(decision.alarm, Some(AlarmStatus::PendingAlarm));
            assert_eq!(decision.rule, Rule::SensorEscalation);
        }
    }

    #[test]
    fn should_go_alarm_when_armed_pending_and_sensor_activates() {
        for arming in ArmingStatus::ARMED {
            let decision = decide(
                snapshot(AlarmStatus::PendingAlarm, arming),
                activation(false, true, true),
            );
            assert_eq!(decision.alarm, Some(AlarmStatus::Alarm));
        }
    }

    #[test]
    fn should_go_alarm_when_active_sensor_is_reaffirmed_while_pending() {
        let decision = decide(
            snapshot(AlarmStatus::PendingAlarm, ArmingStatus::ArmedAway),
            activation(true, true, true),
        );
        assert_eq!(decision.alarm, Some(AlarmStatus::Alarm));
    }

    #[test]
    fn should_ignore_activation_while_disarmed() {
        let decision = decide(
            snapshot(AlarmStatus::NoAlarm, ArmingStatus::Disarmed),
            activation(false, true, true),
        );
        assert_eq!(decision.alarm, None);
    }

    #[test]
    fn should_clear_pending_when_last_active_sensor_deactivates() {
        let decision = decide(
            snapshot(AlarmStatus::PendingAlarm, ArmingStatus::ArmedHome),
            activation(true, false, false),
        );
        assert_eq!(decision.alarm, Some(AlarmStatus::NoAlarm));
        assert_eq!(decision.rule, Rule::AllClear);
    }

    #[test]
    fn should_stay_pending_while_another_sensor_is_active() {
        let decision = decide(
            snapshot(AlarmStatus::PendingAlarm, ArmingStatus::ArmedHome),
            activation(true, false, true),
        );
        assert_eq!(decision.alarm, None);
    }

    #[test]
    fn should_keep_alarm_when_armed_and_sensor_changes_either_way() {
        for (was, now) in [(true, false), (false, true)] {
            let decision = decide(
                snapshot(AlarmStatus::Alarm, ArmingStatus::ArmedAway),
                activation(was, now, now),
            );
            assert_eq!(decision.alarm, None);
            assert_eq!(decision.rule, Rule::StickyAlarm);
        }
    }

    #[test]
    fn should_cool_down_to_pending_when_disarmed_alarm_sensor_deactivates() {
        let decision = decide(
            snapshot(AlarmStatus::Alarm, ArmingStatus::Disarmed),
            activation(true, false, false),
        );
        assert_eq!(decision.alarm, Some(AlarmStatus::PendingAlarm));
        assert_eq!(decision.rule, Rule::DisarmedCooldown);
    }

    #[test]
    fn should_never_change_status_when_inactive_sensor_is_deactivated() {
        for alarm in AlarmStatus::ALL {
            for arming in [
                ArmingStatus::Disarmed,
                ArmingStatus::ArmedHome,
                ArmingStatus::ArmedAway,
            ] {
                let decision = decide(snapshot(alarm, arming), activation(false, false, false));
                assert_eq!(decision.alarm, None);
                assert_eq!(decision.rule, Rule::IdleDeactivation);
            }
        }
    }

    #[test]
    fn should_alarm_when_cat_seen_while_armed_home() {
        for alarm in AlarmStatus::ALL {
            let decision = decide(
                snapshot(alarm, ArmingStatus::ArmedHome),
                Trigger::ImageVerdict {
                    contains_cat: true,
                    any_sensor_active: false,
                },
            );
            assert_eq!(decision.alarm, Some(AlarmStatus::Alarm));
        }
    }

    #[test]
    fn should_ignore_cat_when_armed_away() {
        let decision = decide(
            snapshot(AlarmStatus::NoAlarm, ArmingStatus::ArmedAway),
            Trigger::ImageVerdict {
                contains_cat: true,
                any_sensor_active: false,
            },
        );
        assert_eq!(decision.alarm, None);
    }

    #[test]
    fn should_clear_when_no_cat_and_no_active_sensor() {
        let decision = decide(
            snapshot(AlarmStatus::Alarm, ArmingStatus::ArmedHome),
            Trigger::ImageVerdict {
                contains_cat: false,
                any_sensor_active: false,
            },
        );
        assert_eq!(decision.alarm, Some(AlarmStatus::NoAlarm));
        assert_eq!(decision.rule, Rule::NoCatAllClear);
    }

    #[test]
    fn should_keep_status_when_no_cat_but_sensor_active() {
        let decision = decide(
            snapshot(AlarmStatus::PendingAlarm, ArmingStatus::ArmedHome),
            Trigger::ImageVerdict {
                contains_cat: false,
                any_sensor_active: true,
            },
        );
        assert_eq!(decision.alarm, None);
    }

    #[test]
    fn should_reset_alarm_when_disarmed_from_any_status() {
        for alarm in AlarmStatus::ALL {
            let decision = decide(
                snapshot(alarm, ArmingStatus::ArmedHome),
                Trigger::ArmingChanged {
                    to: ArmingStatus::Disarmed,
                },
            );
            assert_eq!(decision.alarm, Some(AlarmStatus::NoAlarm));
            assert!(!decision.reset_sensors);
        }
    }

    #[test]
    fn should_reset_sensors_when_armed() {
        for to in ArmingStatus::ARMED {
            let decision = decide(
                snapshot(AlarmStatus::NoAlarm, ArmingStatus::Disarmed),
                Trigger::ArmingChanged { to },
            );
            assert!(decision.reset_sensors);
            assert_eq!(decision.alarm, None);
        }
    }

    #[test]
    fn should_alarm_when_arming_home_with_cat_in_view() {
        let mut current = snapshot(AlarmStatus::NoAlarm, ArmingStatus::Disarmed);
        current.cat_in_view = true;

        let home = decide(
            current,
            Trigger::ArmingChanged {
                to: ArmingStatus::ArmedHome,
            },
        );
        assert_eq!(home.alarm, Some(AlarmStatus::Alarm));
        assert!(home.reset_sensors);

        let away = decide(
            current,
            Trigger::ArmingChanged {
                to: ArmingStatus::ArmedAway,
            },
        );
        assert_eq!(away.alarm, None);
    }
}

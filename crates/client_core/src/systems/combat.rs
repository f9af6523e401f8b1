//! Weapon draw state and the timed combat stance.
//!
//! Pure state machine: transitions are pushed as [`CombatEvent`]s and the
//! controller forwards them to the animation and weapon-visual sinks.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatPhase {
    Sheathed,
    ArmedIdle,
    ArmedCombat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatEvent {
    WeaponDrawn,
    WeaponSheathed,
    StanceEntered,
    StanceExited,
    /// One-shot attack trigger, fired on every attack edge.
    AttackTriggered,
}

/// Stance implies armed, and stance implies `last_attack_at` is set.
/// Timestamps are controller-clock seconds kept in `f64` so long sessions
/// still resolve frame-sized steps.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CombatState {
    pub is_armed: bool,
    pub in_combat_stance: bool,
    pub last_attack_at: Option<f64>,
}

impl CombatState {
    #[must_use]
    pub fn new(armed: bool) -> Self {
        Self {
            is_armed: armed,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn phase(&self) -> CombatPhase {
        match (self.is_armed, self.in_combat_stance) {
            (false, _) => CombatPhase::Sheathed,
            (true, false) => CombatPhase::ArmedIdle,
            (true, true) => CombatPhase::ArmedCombat,
        }
    }

    fn set_armed(&mut self, armed: bool, out: &mut Vec<CombatEvent>) {
        if self.is_armed == armed {
            return;
        }
        self.is_armed = armed;
        out.push(if armed {
            CombatEvent::WeaponDrawn
        } else {
            CombatEvent::WeaponSheathed
        });
    }

    fn set_stance(&mut self, on: bool, out: &mut Vec<CombatEvent>) {
        if self.in_combat_stance == on {
            return;
        }
        self.in_combat_stance = on;
        out.push(if on {
            CombatEvent::StanceEntered
        } else {
            CombatEvent::StanceExited
        });
    }
}

/// One frame of the combat state machine at time `now`.
///
/// Order: draw toggle, then attack, then stance expiry. Sheathing while in
/// stance also ends the stance.
pub fn step(
    state: &mut CombatState,
    draw_edge: bool,
    attack_edge: bool,
    now: f64,
    stance_secs: f32,
    out: &mut Vec<CombatEvent>,
) {
    let prev = state.phase();
    if draw_edge {
        let arm = !state.is_armed;
        if !arm {
            state.set_stance(false, out);
        }
        state.set_armed(arm, out);
        debug!(target: "combat", from = ?prev, to = ?state.phase(), reason = "draw_toggle");
    }
    if attack_edge {
        let before = state.phase();
        state.set_armed(true, out);
        state.set_stance(true, out);
        state.last_attack_at = Some(now);
        out.push(CombatEvent::AttackTriggered);
        if before != CombatPhase::ArmedCombat {
            debug!(target: "combat", from = ?before, to = ?state.phase(), reason = "attack");
        }
    }
    if state.in_combat_stance {
        let expired = state.last_attack_at.is_none_or(|t| now - t > f64::from(stance_secs));
        if expired {
            state.set_stance(false, out);
            debug!(target: "combat", to = ?state.phase(), reason = "stance_timeout");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_toggles_between_sheathed_and_idle() {
        let mut s = CombatState::new(false);
        let mut ev = Vec::new();
        step(&mut s, true, false, 0.0, 5.0, &mut ev);
        assert_eq!(s.phase(), CombatPhase::ArmedIdle);
        assert_eq!(ev, vec![CombatEvent::WeaponDrawn]);
        ev.clear();
        step(&mut s, true, false, 0.1, 5.0, &mut ev);
        assert_eq!(s.phase(), CombatPhase::Sheathed);
        assert_eq!(ev, vec![CombatEvent::WeaponSheathed]);
    }

    #[test]
    fn attack_while_sheathed_draws_then_enters_stance() {
        let mut s = CombatState::new(false);
        let mut ev = Vec::new();
        step(&mut s, false, true, 2.0, 5.0, &mut ev);
        assert_eq!(s.phase(), CombatPhase::ArmedCombat);
        assert_eq!(s.last_attack_at, Some(2.0));
        assert_eq!(
            ev,
            vec![
                CombatEvent::WeaponDrawn,
                CombatEvent::StanceEntered,
                CombatEvent::AttackTriggered
            ]
        );
    }

    #[test]
    fn repeat_attack_refreshes_without_reentry() {
        let mut s = CombatState::new(true);
        let mut ev = Vec::new();
        step(&mut s, false, true, 1.0, 5.0, &mut ev);
        ev.clear();
        step(&mut s, false, true, 4.0, 5.0, &mut ev);
        assert_eq!(ev, vec![CombatEvent::AttackTriggered]);
        assert_eq!(s.last_attack_at, Some(4.0));
    }

    #[test]
    fn stance_expires_strictly_after_duration() {
        let mut s = CombatState::new(true);
        let mut ev = Vec::new();
        step(&mut s, false, true, 1.0, 2.0, &mut ev);
        step(&mut s, false, false, 3.0, 2.0, &mut ev);
        assert!(s.in_combat_stance, "exactly at the duration is still in stance");
        ev.clear();
        step(&mut s, false, false, 3.5, 2.0, &mut ev);
        assert_eq!(s.phase(), CombatPhase::ArmedIdle);
        assert_eq!(ev, vec![CombatEvent::StanceExited]);
    }

    #[test]
    fn sheathing_in_stance_ends_stance() {
        let mut s = CombatState::new(true);
        let mut ev = Vec::new();
        step(&mut s, false, true, 0.0, 5.0, &mut ev);
        ev.clear();
        step(&mut s, true, false, 0.5, 5.0, &mut ev);
        assert_eq!(s.phase(), CombatPhase::Sheathed);
        assert!(!s.in_combat_stance);
        assert_eq!(ev, vec![CombatEvent::StanceExited, CombatEvent::WeaponSheathed]);
    }

    #[test]
    fn stance_expires_late_in_a_long_session() {
        let mut s = CombatState::new(true);
        let mut ev = Vec::new();
        let start = 600_000.0;
        step(&mut s, false, true, start, 1.0, &mut ev);
        let mut now = start;
        for _ in 0..90 {
            now += 1.0 / 60.0;
            step(&mut s, false, false, now, 1.0, &mut ev);
        }
        assert!(now - start > 1.0);
        assert_eq!(s.phase(), CombatPhase::ArmedIdle);
    }
}

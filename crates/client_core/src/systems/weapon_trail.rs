//! Swing trail toggles, called from attack animation keyframes.

use crate::facade::collaborators::WeaponTrail;

/// Start a fresh trail: drop residual segments, then emit.
pub fn enable(trail: Option<&mut dyn WeaponTrail>) {
    if let Some(t) = trail {
        t.clear();
        t.set_emitting(true);
    }
}

/// Stop emitting; the existing trail fades on its own.
pub fn disable(trail: Option<&mut dyn WeaponTrail>) {
    if let Some(t) = trail {
        t.set_emitting(false);
    }
}

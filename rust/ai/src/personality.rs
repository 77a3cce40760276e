//! Playing styles for AI seats.

use serde::{Deserialize, Serialize};

/// How an AI seat plays: how often it puts chips in unprompted and how often
/// it bluffs. Both values are probabilities in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub aggressiveness: f64,
    pub bluff_frequency: f64,
}

impl Personality {
    pub const TIGHT_PASSIVE: Personality = Personality::preset_values(0.2, 0.05);
    pub const TIGHT_AGGRESSIVE: Personality = Personality::preset_values(0.8, 0.1);
    pub const LOOSE_PASSIVE: Personality = Personality::preset_values(0.3, 0.15);
    pub const LOOSE_AGGRESSIVE: Personality = Personality::preset_values(0.9, 0.2);
    pub const UNPREDICTABLE: Personality = Personality::preset_values(0.5, 0.3);

    /// Named presets, in the order they are handed out to seats.
    pub const PRESETS: [(&'static str, Personality); 5] = [
        ("tight-aggressive", Self::TIGHT_AGGRESSIVE),
        ("loose-passive", Self::LOOSE_PASSIVE),
        ("loose-aggressive", Self::LOOSE_AGGRESSIVE),
        ("tight-passive", Self::TIGHT_PASSIVE),
        ("unpredictable", Self::UNPREDICTABLE),
    ];

    const fn preset_values(aggressiveness: f64, bluff_frequency: f64) -> Self {
        Self {
            aggressiveness,
            bluff_frequency,
        }
    }

    /// Builds a personality, clamping both values into `[0, 1]`.
    pub fn new(aggressiveness: f64, bluff_frequency: f64) -> Self {
        let unit = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            aggressiveness: unit(aggressiveness),
            bluff_frequency: unit(bluff_frequency),
        }
    }

    /// Looks up a preset by name. Case and `-`/`_` are ignored, so
    /// `"TIGHT_PASSIVE"` and `"tight-passive"` both match.
    pub fn preset(name: &str) -> Option<Personality> {
        let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::PRESETS
            .iter()
            .find(|(n, _)| *n == wanted)
            .map(|(_, p)| *p)
    }

    /// Preset for an AI seat. Seat 1 plays tight-aggressive, seat 2
    /// loose-passive, seat 3 loose-aggressive, and so on around the list.
    pub fn for_seat(seat: usize) -> Personality {
        let idx = seat.saturating_sub(1) % Self::PRESETS.len();
        Self::PRESETS[idx].1
    }
}

impl Default for Personality {
    fn default() -> Self {
        Self::new(0.5, 0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_lookup_ignores_case_and_separator() {
        assert_eq!(Personality::preset("TIGHT_PASSIVE"), Some(Personality::TIGHT_PASSIVE));
        assert_eq!(Personality::preset("loose-aggressive"), Some(Personality::LOOSE_AGGRESSIVE));
        assert_eq!(Personality::preset("reckless"), None);
    }

    #[test]
    fn new_clamps_into_unit_range() {
        let p = Personality::new(1.7, -0.2);
        assert_eq!(p.aggressiveness, 1.0);
        assert_eq!(p.bluff_frequency, 0.0);
        assert_eq!(Personality::new(f64::NAN, 0.5).aggressiveness, 0.0);
    }

    #[test]
    fn seats_cycle_through_presets() {
        assert_eq!(Personality::for_seat(1), Personality::TIGHT_AGGRESSIVE);
        assert_eq!(Personality::for_seat(2), Personality::LOOSE_PASSIVE);
        assert_eq!(Personality::for_seat(3), Personality::LOOSE_AGGRESSIVE);
        assert_eq!(Personality::for_seat(6), Personality::TIGHT_AGGRESSIVE);
        // seat 0 is normally the human, but an AI there still gets a style
        assert_eq!(Personality::for_seat(0), Personality::TIGHT_AGGRESSIVE);
    }
}

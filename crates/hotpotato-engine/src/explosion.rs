//! The explosion rule.
//!
//! After every turn the engine draws a number in `0..DRAW_RANGE` and the
//! potato explodes if the draw is at or below the effective chance:
//!
//! ```text
//! effective = base% + floor(turns * log10(heat))
//! ```
//!
//! At heat 1 the bonus is zero however long the game runs; every cook
//! makes each later turn riskier.

use hotpotato_protocol::Potato;

/// Explosion draws are uniform over `0..DRAW_RANGE`.
pub const DRAW_RANGE: u32 = 100;

/// `floor(turns * log10(heat))`, the risk added by game length and heat.
pub fn heat_bonus(turns: u32, heat_level: u32) -> u32 {
    if turns == 0 || heat_level <= 1 {
        return 0;
    }
    // `as` saturates, so absurd heat levels pin at u32::MAX.
    (f64::from(turns) * f64::from(heat_level).log10()).floor() as u32
}

/// The potato's chance of exploding this turn, in percent.
///
/// Clamped to 100: any draw is at most 99, so the clamp doesn't change an
/// outcome, it only keeps the number readable.
pub fn effective_chance(potato: Potato, turns: u32, heat_level: u32) -> u32 {
    potato
        .percent_chance()
        .saturating_add(heat_bonus(turns, heat_level))
        .min(DRAW_RANGE)
}

/// Returns `true` if `draw` sets the potato off.
pub fn explodes(chance: u32, draw: u32) -> bool {
    draw <= chance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_bonus_at_heat_one() {
        for turns in [0, 1, 2, 50, 10_000] {
            assert_eq!(heat_bonus(turns, 1), 0);
        }
        assert_eq!(effective_chance(Potato::Hot, 2, 1), 5);
    }

    #[test]
    fn test_three_cooks_give_bonus_one() {
        // heat 4 after three cooks, turn 3: floor(3 * 0.602) = 1
        assert_eq!(heat_bonus(3, 4), 1);
        assert_eq!(effective_chance(Potato::Raw, 3, 4), 2);
    }

    #[test]
    fn test_bonus_grows_with_powers_of_ten() {
        assert_eq!(heat_bonus(1, 10), 1);
        assert_eq!(heat_bonus(2, 10), 2);
        assert_eq!(heat_bonus(5, 2), 1);
        assert_eq!(heat_bonus(10, 2), 3);
    }

    #[test]
    fn test_chance_is_clamped() {
        assert_eq!(effective_chance(Potato::Burnt, 1_000, 50), 100);
        assert_eq!(effective_chance(Potato::Burnt, u32::MAX, u32::MAX), 100);
    }

    #[test]
    fn test_chance_is_monotonic_in_turns_and_heat() {
        for potato in Potato::ALL {
            for heat in 1..30 {
                for turns in 0..60 {
                    let here = effective_chance(potato, turns, heat);
                    assert!(effective_chance(potato, turns + 1, heat) >= here);
                    assert!(effective_chance(potato, turns, heat + 1) >= here);
                }
            }
        }
    }

    #[test]
    fn test_explodes_at_or_below_chance() {
        assert!(explodes(5, 0));
        assert!(explodes(5, 5));
        assert!(!explodes(5, 6));
        assert!(explodes(100, DRAW_RANGE - 1));
    }
}

//! Pure arc-layout geometry for the card carousel.
//!
//! `compute_layout` maps engine state to one [`ItemVisual`] per card; the
//! component turns each into an inline style string. Keeping the math
//! here means the whole visual policy is testable without a document.

use std::f64::consts::FRAC_PI_2;

use crate::carousel::CarouselEngine;
use crate::config;

/// Responsive width tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakpointTier {
    Desktop,
    Tablet,
    SmallPhone,
}

impl BreakpointTier {
    pub fn from_width(width: f64) -> Self {
        if width < config::SMALL_PHONE_BREAKPOINT {
            Self::SmallPhone
        } else if width < config::MOBILE_BREAKPOINT {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

/// Arc radii and scale factors for one width tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierParams {
    pub radius_x: f64,
    pub radius_y: f64,
    pub base_scale: f64,
    pub center_scale: f64,
}

impl TierParams {
    /// Parameter set for the given tier. Phone tiers size the horizontal
    /// radius off the viewport so the fan tracks the screen.
    pub fn for_width(width: f64) -> Self {
        match BreakpointTier::from_width(width) {
            BreakpointTier::Desktop => Self {
                radius_x: 550.0,
                radius_y: 100.0,
                base_scale: 0.75,
                center_scale: 1.15,
            },
            BreakpointTier::Tablet => Self {
                radius_x: width * 0.42,
                radius_y: 50.0,
                base_scale: 0.65,
                center_scale: 1.0,
            },
            BreakpointTier::SmallPhone => Self {
                radius_x: width * 0.35,
                radius_y: 30.0,
                base_scale: 0.65,
                center_scale: 1.0,
            },
        }
    }
}

/// Angular tuning for the arc. The defaults center the focused card at
/// the bottom of the arc with neighbors fanning symmetrically; they are
/// configuration, not baked into the math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTuning {
    /// Radians between adjacent slots.
    pub angular_step: f64,
    /// Angle of the focused slot.
    pub phase: f64,
    /// Degrees of tilt per slot of offset.
    pub tilt_per_offset: f64,
    /// Downward shift applied to every card (px).
    pub vertical_shift: f64,
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            angular_step: 0.4,
            phase: 3.0 * FRAC_PI_2,
            tilt_per_offset: -12.0,
            vertical_shift: 50.0,
        }
    }
}

/// Computed presentation for one card.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemVisual {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub tilt_deg: f64,
    pub opacity: f64,
    pub z_index: i32,
    pub interactive: bool,
    pub focused: bool,
}

impl ItemVisual {
    /// Inline style string applied to the card element.
    pub fn style_attr(&self) -> String {
        format!(
            "position: absolute; left: 50%; \
             transition: all 0.8s cubic-bezier(0.25, 1, 0.5, 1); \
             transform: translate(calc(-50% + {x:.1}px), {y:.1}px) scale({scale}) rotate({tilt}deg); \
             z-index: {z}; opacity: {opacity}; pointer-events: {pointer};",
            x = self.x,
            y = self.y,
            scale = self.scale,
            tilt = self.tilt_deg,
            z = self.z_index,
            opacity = self.opacity,
            pointer = if self.interactive { "auto" } else { "none" },
        )
    }
}

/// Lays out every card as a pure function of the committed focus index,
/// the viewport width, and the tuning. Calling it twice with the same
/// inputs yields identical output.
pub fn compute_layout(
    engine: &CarouselEngine,
    viewport_width: f64,
    tuning: &CarouselTuning,
) -> Vec<ItemVisual> {
    let params = TierParams::for_width(viewport_width);
    let tier = BreakpointTier::from_width(viewport_width);

    (0..engine.item_count())
        .map(|i| {
            let offset = engine.circular_offset(i);
            let focused = engine.is_focused(i);
            let angle = offset as f64 * tuning.angular_step + tuning.phase;
            let far = offset.abs() > config::HIDE_OFFSET_LIMIT;

            let (opacity, interactive) = match tier {
                BreakpointTier::SmallPhone if far => (0.0, false),
                BreakpointTier::Tablet if far => (0.4, true),
                _ => (1.0, true),
            };

            ItemVisual {
                x: angle.cos() * params.radius_x,
                y: angle.sin() * params.radius_y + tuning.vertical_shift,
                scale: if focused {
                    params.center_scale
                } else {
                    params.base_scale
                },
                tilt_deg: offset as f64 * tuning.tilt_per_offset,
                opacity,
                z_index: if focused { 100 } else { 50 - offset.abs() },
                interactive,
                focused,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(n: usize, focus: usize, width: f64) -> Vec<ItemVisual> {
        let engine = CarouselEngine::new(n, focus);
        compute_layout(&engine, width, &CarouselTuning::default())
    }

    #[test]
    fn recompute_is_idempotent() {
        let engine = CarouselEngine::new(6, 2);
        let tuning = CarouselTuning::default();
        let first = compute_layout(&engine, 1280.0, &tuning);
        let second = compute_layout(&engine, 1280.0, &tuning);
        assert_eq!(first, second);
    }

    #[test]
    fn focused_card_sits_centered_and_on_top() {
        let visuals = layout(6, 2, 1280.0);
        let focused = &visuals[2];
        assert!(focused.focused);
        assert!(focused.x.abs() < 1e-6);
        assert_eq!(focused.z_index, 100);
        assert_eq!(focused.scale, 1.15);
        for (i, v) in visuals.iter().enumerate() {
            if i != 2 {
                assert!(v.z_index < focused.z_index);
                assert_eq!(v.scale, 0.75);
            }
        }
    }

    #[test]
    fn neighbors_fan_symmetrically() {
        let visuals = layout(5, 2, 1280.0);
        let left = &visuals[1];
        let right = &visuals[3];
        assert!((left.x + right.x).abs() < 1e-6);
        assert!((left.y - right.y).abs() < 1e-6);
        assert!((left.tilt_deg + right.tilt_deg).abs() < 1e-6);
    }

    #[test]
    fn stacking_drops_with_distance() {
        let visuals = layout(7, 3, 1280.0);
        let engine = CarouselEngine::new(7, 3);
        for (i, v) in visuals.iter().enumerate() {
            if i != 3 {
                assert_eq!(v.z_index, 50 - engine.circular_offset(i).abs());
            }
        }
    }

    #[test]
    fn small_phone_hides_far_cards() {
        let visuals = layout(6, 2, 400.0);
        assert_eq!(visuals[2].opacity, 1.0);
        assert_eq!(visuals[1].opacity, 1.0);
        assert_eq!(visuals[3].opacity, 1.0);
        let hidden = &visuals[0];
        assert_eq!(hidden.opacity, 0.0);
        assert!(!hidden.interactive);
    }

    #[test]
    fn tablet_dims_far_cards_but_keeps_them_interactive() {
        let visuals = layout(6, 2, 600.0);
        let far = &visuals[5];
        assert_eq!(far.opacity, 0.4);
        assert!(far.interactive);
        assert_eq!(visuals[2].opacity, 1.0);
    }

    #[test]
    fn desktop_shows_everything() {
        for v in layout(8, 0, 1440.0) {
            assert_eq!(v.opacity, 1.0);
            assert!(v.interactive);
        }
    }

    #[test]
    fn tier_selection_matches_breakpoints() {
        assert_eq!(BreakpointTier::from_width(1280.0), BreakpointTier::Desktop);
        assert_eq!(BreakpointTier::from_width(768.0), BreakpointTier::Desktop);
        assert_eq!(BreakpointTier::from_width(767.0), BreakpointTier::Tablet);
        assert_eq!(BreakpointTier::from_width(480.0), BreakpointTier::Tablet);
        assert_eq!(BreakpointTier::from_width(320.0), BreakpointTier::SmallPhone);
    }

    #[test]
    fn style_attr_disables_pointer_events_when_hidden() {
        let visuals = layout(6, 2, 400.0);
        let style = visuals[0].style_attr();
        assert!(style.contains("pointer-events: none"));
        assert!(style.contains("opacity: 0"));
    }
}

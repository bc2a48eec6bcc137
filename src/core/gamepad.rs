//! Device-independent gamepad logic: stick direction classification,
//! button scanning, and the polling boundary trait.

/// Stick deflection beyond this magnitude counts as a direction.
pub const AXIS_THRESHOLD: f64 = 0.5;

/// Discrete classification of the primary analog stick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StickDirection {
    #[default]
    Center,
    Up,
    Down,
    Left,
    Right,
}

impl StickDirection {
    /// Label for the live status readout.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Center => "-",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Classify stick axes into one of five directions.
///
/// The checks run in the fixed order left, up, right, down; when two
/// thresholds are crossed at once the earlier direction wins.
pub fn classify_axes(x: f64, y: f64) -> StickDirection {
    if x < -AXIS_THRESHOLD {
        StickDirection::Left
    } else if y < -AXIS_THRESHOLD {
        StickDirection::Up
    } else if x > AXIS_THRESHOLD {
        StickDirection::Right
    } else if y > AXIS_THRESHOLD {
        StickDirection::Down
    } else {
        StickDirection::Center
    }
}

/// Index of the lowest pressed button, if any. When several buttons are
/// held in one tick only this one is reported.
pub fn lowest_pressed(buttons: &[bool]) -> Option<usize> {
    buttons.iter().position(|&pressed| pressed)
}

/// Raw state of one connected pad for one poll tick.
#[derive(Debug, Clone, Default)]
pub struct PadState {
    pub buttons: Vec<bool>,
    /// Primary stick axes: `[horizontal, vertical]`, each in -1.0..=1.0.
    pub axes: [f64; 2],
}

/// Boundary to the platform gamepad API. Implementations report the
/// current state of every connected pad; an empty result means no
/// device, which is not an error.
pub trait GamepadSource: Send {
    fn poll(&mut self) -> Vec<PadState>;
}

/// Source for when no platform backend is wired up.
#[derive(Debug, Default)]
pub struct NullSource;

impl GamepadSource for NullSource {
    fn poll(&mut self) -> Vec<PadState> {
        Vec::new()
    }
}

/// What one poll tick produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Identifier of the lowest pressed button (1-based index as a
    /// string), reported every tick while held.
    pub button: Option<String>,
    /// New stick classification, only when it differs from the
    /// previous tick.
    pub direction_change: Option<StickDirection>,
}

/// Per-tick pressed/direction state, recomputed from scratch each poll.
#[derive(Debug, Default)]
pub struct PadScan {
    pressed: Vec<bool>,
    direction: StickDirection,
}

impl PadScan {
    pub fn direction(&self) -> StickDirection {
        self.direction
    }

    /// Fold one tick's pad states into the scan.
    ///
    /// Pressed state is the union across connected pads; the direction
    /// comes from the first pad's stick. Held buttons are reported on
    /// every tick, not edge-detected.
    pub fn tick(&mut self, pads: &[PadState]) -> TickOutcome {
        self.pressed.fill(false);
        for pad in pads {
            if self.pressed.len() < pad.buttons.len() {
                self.pressed.resize(pad.buttons.len(), false);
            }
            for (slot, &pressed) in pad.buttons.iter().enumerate() {
                if pressed {
                    self.pressed[slot] = true;
                }
            }
        }

        let previous = self.direction;
        self.direction = pads
            .first()
            .map(|pad| classify_axes(pad.axes[0], pad.axes[1]))
            .unwrap_or_default();

        TickOutcome {
            button: lowest_pressed(&self.pressed).map(|index| (index + 1).to_string()),
            direction_change: (self.direction != previous).then_some(self.direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(buttons: &[bool], x: f64, y: f64) -> PadState {
        PadState {
            buttons: buttons.to_vec(),
            axes: [x, y],
        }
    }

    #[test]
    fn left_wins_over_up_when_both_thresholds_crossed() {
        assert_eq!(classify_axes(-0.6, -0.6), StickDirection::Left);
    }

    #[test]
    fn right_wins_over_down_when_both_thresholds_crossed() {
        assert_eq!(classify_axes(0.6, 0.6), StickDirection::Right);
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(classify_axes(-0.5, 0.0), StickDirection::Center);
        assert_eq!(classify_axes(0.5, 0.5), StickDirection::Center);
        assert_eq!(classify_axes(0.0, -0.51), StickDirection::Up);
        assert_eq!(classify_axes(0.0, 0.51), StickDirection::Down);
    }

    #[test]
    fn lowest_pressed_button_is_forwarded_one_based() {
        let mut scan = PadScan::default();
        let outcome = scan.tick(&[pad(&[false, true, true], 0.0, 0.0)]);
        assert_eq!(outcome.button.as_deref(), Some("2"));
    }

    #[test]
    fn no_buttons_pressed_forwards_nothing() {
        let mut scan = PadScan::default();
        let outcome = scan.tick(&[pad(&[false, false], 0.0, 0.0)]);
        assert_eq!(outcome.button, None);
    }

    #[test]
    fn held_button_reports_every_tick() {
        let mut scan = PadScan::default();
        let pads = [pad(&[true], 0.0, 0.0)];
        assert_eq!(scan.tick(&pads).button.as_deref(), Some("1"));
        assert_eq!(scan.tick(&pads).button.as_deref(), Some("1"));
    }

    #[test]
    fn pressed_state_unions_across_pads() {
        let mut scan = PadScan::default();
        let outcome = scan.tick(&[
            pad(&[false, false, true], 0.0, 0.0),
            pad(&[false, true], 0.0, 0.0),
        ]);
        assert_eq!(outcome.button.as_deref(), Some("2"));
    }

    #[test]
    fn direction_change_only_reported_on_edges() {
        let mut scan = PadScan::default();
        let held_left = [pad(&[], -0.8, 0.0)];

        let first = scan.tick(&held_left);
        assert_eq!(first.direction_change, Some(StickDirection::Left));

        let second = scan.tick(&held_left);
        assert_eq!(second.direction_change, None);

        let released = scan.tick(&[pad(&[], 0.0, 0.0)]);
        assert_eq!(released.direction_change, Some(StickDirection::Center));
    }

    #[test]
    fn no_device_ticks_are_quiet() {
        let mut scan = PadScan::default();
        assert_eq!(scan.tick(&[]), TickOutcome::default());

        // A disconnect while deflected still reports the edge back to center.
        scan.tick(&[pad(&[], 0.9, 0.0)]);
        let outcome = scan.tick(&[]);
        assert_eq!(outcome.direction_change, Some(StickDirection::Center));
    }
}

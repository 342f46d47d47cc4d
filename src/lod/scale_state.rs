use serde::{Deserialize, Serialize};

/// Counter value at which a transition fires.
const TRIGGER: i32 = 5;
/// Counter value re-armed after a fire, one short of the opposite boundary.
const REARM: i32 = TRIGGER - 1;

/// One discrete unit of zoom input, derived from the sign of a wheel delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomTick {
    In,
    Out,
}

impl ZoomTick {
    /// Tick from a raw wheel delta; zero deltas produce no tick.
    #[must_use]
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::In)
        } else if delta < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    fn step(self) -> i32 {
        match self {
            Self::In => 1,
            Self::Out => -1,
        }
    }
}

/// Discrete resolution change emitted toward the grid and label layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LodTransition {
    /// Halve spacing (zoom-in refinement).
    Refine,
    /// Double spacing (zoom-out coarsening).
    Coarsen,
}

/// Hysteresis state machine between continuous zoom input and discrete LOD.
///
/// The only state is an integer counter in [-5, 5]. Reaching a boundary
/// fires a transition and re-arms the counter near the opposite boundary,
/// so a wheel flick at a spacing boundary cannot toggle the LOD every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleStateMachine {
    counter: i32,
}

impl ScaleStateMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn counter(self) -> i32 {
        self.counter
    }

    /// Advances the machine by one tick.
    ///
    /// A boundary counter fires before the tick is accumulated: refine at
    /// the top boundary, coarsen at the bottom, each re-arming the counter
    /// to the opposite near-boundary value.
    pub fn apply_tick(&mut self, tick: ZoomTick) -> Option<LodTransition> {
        let fired = if self.counter == TRIGGER {
            self.counter = -REARM;
            Some(LodTransition::Refine)
        } else if self.counter == -TRIGGER {
            self.counter = REARM;
            Some(LodTransition::Coarsen)
        } else {
            None
        };

        self.counter += tick.step();
        fired
    }

    /// Parks the counter on the coarsen boundary.
    ///
    /// Used when grid spacing has bottomed out at 1: the next tick in
    /// either direction emits a coarsen instead of waiting out the
    /// hysteresis band, because spacing cannot refine further.
    pub fn arm_coarsen(&mut self) {
        self.counter = -TRIGGER;
    }
}

#[cfg(test)]
mod tests {
    use super::{LodTransition, ScaleStateMachine, ZoomTick};

    #[test]
    fn refine_fires_on_the_sixth_consecutive_zoom_in_tick() {
        let mut machine = ScaleStateMachine::new();
        for _ in 0..5 {
            assert_eq!(machine.apply_tick(ZoomTick::In), None);
        }
        assert_eq!(machine.counter(), 5);
        assert_eq!(machine.apply_tick(ZoomTick::In), Some(LodTransition::Refine));
        assert_eq!(machine.counter(), -3);
    }

    #[test]
    fn hysteresis_band_is_asymmetric_after_a_fire() {
        let mut machine = ScaleStateMachine::new();
        for _ in 0..6 {
            machine.apply_tick(ZoomTick::In);
        }

        // Re-firing in the same direction crosses the full band: nine ticks.
        let mut same_direction = machine;
        let mut fired_at = None;
        for tick_index in 1..=9 {
            if same_direction.apply_tick(ZoomTick::In).is_some() {
                fired_at = Some(tick_index);
            }
        }
        assert_eq!(fired_at, Some(9));

        // The opposite transition is three reverse ticks away.
        let mut reverse_direction = machine;
        assert_eq!(reverse_direction.apply_tick(ZoomTick::Out), None);
        assert_eq!(reverse_direction.apply_tick(ZoomTick::Out), None);
        assert_eq!(
            reverse_direction.apply_tick(ZoomTick::Out),
            Some(LodTransition::Coarsen)
        );
    }

    #[test]
    fn armed_coarsen_fires_on_the_next_tick_in_either_direction() {
        let mut armed_then_in = ScaleStateMachine::new();
        armed_then_in.arm_coarsen();
        assert_eq!(
            armed_then_in.apply_tick(ZoomTick::In),
            Some(LodTransition::Coarsen)
        );

        let mut armed_then_out = ScaleStateMachine::new();
        armed_then_out.arm_coarsen();
        assert_eq!(
            armed_then_out.apply_tick(ZoomTick::Out),
            Some(LodTransition::Coarsen)
        );
    }

    #[test]
    fn zero_wheel_delta_produces_no_tick() {
        assert_eq!(ZoomTick::from_delta(0.0), None);
        assert_eq!(ZoomTick::from_delta(120.0), Some(ZoomTick::In));
        assert_eq!(ZoomTick::from_delta(-1.0), Some(ZoomTick::Out));
    }
}

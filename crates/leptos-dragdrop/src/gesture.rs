//! Drag Gesture State Machine
//!
//! One press-to-release interaction, independent of the DOM. Timestamps are
//! passed in explicitly so the machine can be driven from tests.

/// Movement threshold in pixels to start a pointer drag
pub const DRAG_THRESHOLD_PX: f64 = 5.0;
/// Hold time before a touch press becomes a drag
pub const TOUCH_DELAY_MS: f64 = 250.0;
/// Movement allowed during the touch hold before it counts as a scroll
pub const TOUCH_TOLERANCE_PX: f64 = 5.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when either axis moved further than `px`
    fn exceeds(&self, other: &Point, px: f64) -> bool {
        (self.x - other.x).abs() > px || (self.y - other.y).abs() > px
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Pointer,
    Touch,
}

/// Rule that turns a press into a drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActivationConstraint {
    Distance { px: f64 },
    Delay { ms: f64, tolerance_px: f64 },
}

impl InputKind {
    pub fn activation(&self) -> ActivationConstraint {
        match self {
            InputKind::Pointer => ActivationConstraint::Distance { px: DRAG_THRESHOLD_PX },
            InputKind::Touch => ActivationConstraint::Delay {
                ms: TOUCH_DELAY_MS,
                tolerance_px: TOUCH_TOLERANCE_PX,
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragPhase<K> {
    #[default]
    Idle,
    /// Pressed, activation constraint not met yet
    Armed {
        key: K,
        input: InputKind,
        origin: Point,
        pressed_at: f64,
    },
    Dragging {
        key: K,
        input: InputKind,
        over: Option<K>,
    },
}

/// How a drag ended
#[derive(Clone, Debug, PartialEq)]
pub enum DragOutcome<K> {
    Committed { dragged: K, target: K },
    Cancelled { dragged: K },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragGesture<K> {
    phase: DragPhase<K>,
}

impl<K> Default for DragGesture<K> {
    fn default() -> Self {
        Self { phase: DragPhase::Idle }
    }
}

impl<K: Clone + PartialEq> DragGesture<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DragPhase<K> {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, DragPhase::Idle)
    }

    /// Key being dragged, once activated
    pub fn dragging_key(&self) -> Option<&K> {
        match &self.phase {
            DragPhase::Dragging { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Current drop target, if any
    pub fn drop_target(&self) -> Option<&K> {
        match &self.phase {
            DragPhase::Dragging { over, .. } => over.as_ref(),
            _ => None,
        }
    }

    /// Input kind of the active press or drag
    pub fn input(&self) -> Option<InputKind> {
        match &self.phase {
            DragPhase::Idle => None,
            DragPhase::Armed { input, .. } | DragPhase::Dragging { input, .. } => Some(*input),
        }
    }

    /// Start a press. Ignored unless idle: one gesture at a time.
    pub fn press(&mut self, key: K, input: InputKind, at: Point, now_ms: f64) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.phase = DragPhase::Armed {
            key,
            input,
            origin: at,
            pressed_at: now_ms,
        };
        true
    }

    /// Pointer or finger moved. Returns true when this move activated the drag.
    pub fn moved(&mut self, at: Point, now_ms: f64) -> bool {
        let (key, input, origin, pressed_at) = match &self.phase {
            DragPhase::Armed { key, input, origin, pressed_at } => (key.clone(), *input, *origin, *pressed_at),
            _ => return false,
        };
        match input.activation() {
            ActivationConstraint::Distance { px } => {
                if at.exceeds(&origin, px) {
                    self.activate(key, input);
                    return true;
                }
            }
            ActivationConstraint::Delay { ms, tolerance_px } => {
                if at.exceeds(&origin, tolerance_px) {
                    // moved too early: this is a scroll, not a drag
                    self.phase = DragPhase::Idle;
                } else if now_ms - pressed_at >= ms {
                    self.activate(key, input);
                    return true;
                }
            }
        }
        false
    }

    /// Timer tick for delay-activated presses. Returns true on activation.
    pub fn delay_elapsed(&mut self, now_ms: f64) -> bool {
        let (key, input, pressed_at) = match &self.phase {
            DragPhase::Armed { key, input, pressed_at, .. } => (key.clone(), *input, *pressed_at),
            _ => return false,
        };
        match input.activation() {
            ActivationConstraint::Delay { ms, .. } if now_ms - pressed_at >= ms => {
                self.activate(key, input);
                true
            }
            _ => false,
        }
    }

    /// Update the hovered target. The dragged item itself is never a target.
    pub fn hover(&mut self, target: Option<K>) {
        if let DragPhase::Dragging { key, over, .. } = &mut self.phase {
            *over = target.filter(|t| t != key);
        }
    }

    /// Release. A press that never activated (a tap) yields no outcome.
    pub fn release(&mut self) -> Option<DragOutcome<K>> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging { key, over: Some(target), .. } => Some(DragOutcome::Committed { dragged: key, target }),
            DragPhase::Dragging { key, over: None, .. } => Some(DragOutcome::Cancelled { dragged: key }),
            DragPhase::Armed { .. } | DragPhase::Idle => None,
        }
    }

    /// Explicit cancellation (Escape, touchcancel)
    pub fn cancel(&mut self) -> Option<DragOutcome<K>> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging { key, .. } => Some(DragOutcome::Cancelled { dragged: key }),
            DragPhase::Armed { .. } | DragPhase::Idle => None,
        }
    }

    fn activate(&mut self, key: K, input: InputKind) {
        self.phase = DragPhase::Dragging { key, input, over: None };
    }
}

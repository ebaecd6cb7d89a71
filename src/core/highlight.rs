use glam::Vec2;

pub const GLOW_RADIUS_PX: f32 = 650.0;
pub const GLOW_RGBA: [f32; 4] = [139.0, 92.0, 246.0, 0.15];
pub const GLOW_FALLOFF_PERCENT: f32 = 80.0;
pub const GLOW_FADE_SEC: f32 = 0.3; // full fade in/out duration

/// Cursor-following glow for one panel.
///
/// Coordinates are local to the panel's top-left corner. Leaving the panel
/// only fades the glow; the last centre is kept so it fades where it was.
#[derive(Clone, Debug, Default)]
pub struct PanelHighlight {
    center: Vec2,
    hovered: bool,
    opacity: f32,
}

impl PanelHighlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Pointer moved to `local` over a panel of `size`.
    pub fn pointer_move(&mut self, local: Vec2, size: Vec2) {
        if contains(local, size) {
            self.center = local;
            self.hovered = true;
        } else {
            self.hovered = false;
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    /// Move the opacity toward its target; returns true if it changed.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        let target = if self.hovered { 1.0 } else { 0.0 };
        if self.opacity == target {
            return false;
        }
        let before = self.opacity;
        let step = dt_sec.max(0.0) / GLOW_FADE_SEC;
        self.opacity = if target > self.opacity {
            (self.opacity + step).min(target)
        } else {
            (self.opacity - step).max(target)
        };
        self.opacity != before
    }

    pub fn gradient_css(&self) -> String {
        let [r, g, b, a] = GLOW_RGBA;
        let Vec2 { x, y } = self.center();
        format!(
            "radial-gradient({}px circle at {}px {}px, rgba({}, {}, {}, {}), transparent {}%)",
            GLOW_RADIUS_PX, x, y, r, g, b, a, GLOW_FALLOFF_PERCENT
        )
    }
}

/// Inclusive on every edge.
#[inline]
pub fn contains(local: Vec2, size: Vec2) -> bool {
    local.x >= 0.0 && local.y >= 0.0 && local.x <= size.x && local.y <= size.y
}

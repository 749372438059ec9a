/// Current drawing-surface dimensions in pixels.
///
/// Owned by the engine context and mutated only through `resize`. Entities
/// and composers read it every frame; none of them own it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Assign new pixel dimensions. The platform surface is assumed cleared
    /// by the host's resize; nothing drawn before this call survives.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fwidth(&self) -> f32 {
        self.width as f32
    }

    pub fn fheight(&self) -> f32 {
        self.height as f32
    }

    /// True when either dimension is zero (detached or hidden surface).
    /// Render passes must short-circuit that frame.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_assigns_dimensions() {
        let mut vp = Viewport::default();
        vp.resize(800, 600);
        assert_eq!(vp.width(), 800);
        assert_eq!(vp.height(), 600);
    }

    #[test]
    fn resize_is_idempotent() {
        let mut vp = Viewport::new(800, 600);
        vp.resize(800, 600);
        vp.resize(800, 600);
        assert_eq!((vp.width(), vp.height()), (800, 600));
    }

    #[test]
    fn degenerate_when_either_dimension_zero() {
        assert!(Viewport::new(0, 600).is_degenerate());
        assert!(Viewport::new(800, 0).is_degenerate());
        assert!(!Viewport::new(1, 1).is_degenerate());
    }
}

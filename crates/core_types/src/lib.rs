/// Position of a buffer inside the host form's field array.
pub type FieldIndex = usize;

/// A 2D point in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// What kind of element just received input focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    SingleLineInput,
    MultiLineInput,
    EditableRegion,
    Button,
    Other,
}

impl SurfaceKind {
    /// Returns `true` for surfaces the keyboard overlay may type into.
    pub fn is_text_entry(self) -> bool {
        matches!(
            self,
            SurfaceKind::SingleLineInput | SurfaceKind::MultiLineInput | SurfaceKind::EditableRegion
        )
    }
}

/// A 2D or 3D position.
///
/// A missing third ordinate is `None`. It is never stored as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coord {
    /// A 2D coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// A 3D coordinate.
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> Option<f64> {
        self.z
    }

    pub fn x_y(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Number of ordinates this coordinate carries.
    pub fn dim(&self) -> usize {
        if self.z.is_some() {
            3
        } else {
            2
        }
    }

    /// Compare x and y only.
    pub fn equals_2d(&self, other: &Coord) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Apply `f` to every present ordinate.
    pub fn map_ordinates(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
            z: self.z.map(&f),
        }
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Coord {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new_3d(x, y, z)
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 3]> for Coord {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new_3d(x, y, z)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dimension_follows_z() {
        assert_eq!(Coord::new(1., 2.).dim(), 2);
        assert_eq!(Coord::new_3d(1., 2., 0.).dim(), 3);
        assert_eq!(Coord::from([1., 2., 3.]).z(), Some(3.));
    }

    #[test]
    fn map_ordinates_skips_absent_z() {
        let c = Coord::new(1.5, 2.5).map_ordinates(f64::floor);
        assert_eq!(c, Coord::new(1., 2.));
        let c = Coord::new_3d(1.5, 2.5, 3.5).map_ordinates(f64::floor);
        assert_eq!(c.z, Some(3.));
    }
}

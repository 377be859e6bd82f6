//! Scalar terrain domain ("Air Ship").
//!
//! A one-dimensional integer coordinate over a piecewise-linear terrain.
//! The objective is the negated height, so the highest peak is the
//! minimum.

use super::types::{ObjFun, Point};
use crate::error::HeurError;
use rand::Rng;

/// Control points of the standard Air Ship terrain.
const AIR_SHIP_PX: [i64; 7] = [0, 50, 100, 300, 400, 700, 800];
const AIR_SHIP_PY: [f64; 7] = [0.0, 100.0, 0.0, 0.0, 25.0, 0.0, 50.0];

/// Terrain heights at every integer coordinate of a closed interval.
///
/// Heights are linearly interpolated between control points once, at
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    x0: i64,
    heights: Vec<f64>,
}

impl Terrain {
    /// The standard Air Ship profile on `[0, 800]`.
    ///
    /// Its top peak (height 100) sits at `x = 50`; a second, lower peak
    /// (height 50) sits on the right edge.
    pub fn air_ship() -> Self {
        Self::interpolate(&AIR_SHIP_PX, &AIR_SHIP_PY)
    }

    /// Builds a terrain from control points.
    ///
    /// # Errors
    ///
    /// Returns [`HeurError::InvalidObjective`] when there are fewer than
    /// two points, the slices differ in length, the x coordinates are not
    /// strictly increasing, or a height is not finite.
    pub fn from_control_points(px: &[i64], py: &[f64]) -> Result<Self, HeurError> {
        if px.len() != py.len() {
            return Err(HeurError::InvalidObjective(format!(
                "control point slices differ in length: {} vs {}",
                px.len(),
                py.len()
            )));
        }
        if px.len() < 2 {
            return Err(HeurError::InvalidObjective(
                "terrain needs at least two control points".into(),
            ));
        }
        if px.windows(2).any(|w| w[0] >= w[1]) {
            return Err(HeurError::InvalidObjective(
                "control point x coordinates must be strictly increasing".into(),
            ));
        }
        if py.iter().any(|y| !y.is_finite()) {
            return Err(HeurError::InvalidObjective(
                "control point heights must be finite".into(),
            ));
        }
        Ok(Self::interpolate(px, py))
    }

    fn interpolate(px: &[i64], py: &[f64]) -> Self {
        let x0 = px[0];
        let x1 = px[px.len() - 1];
        let mut heights = Vec::with_capacity((x1 - x0 + 1) as usize);
        let mut k = 0;
        for x in x0..=x1 {
            while k + 2 < px.len() && x > px[k + 1] {
                k += 1;
            }
            let (xa, xb) = (px[k], px[k + 1]);
            let (ya, yb) = (py[k], py[k + 1]);
            let t = (x - xa) as f64 / (xb - xa) as f64;
            heights.push(ya + (yb - ya) * t);
        }
        Self { x0, heights }
    }

    /// Smallest coordinate.
    pub fn min_x(&self) -> i64 {
        self.x0
    }

    /// Largest coordinate.
    pub fn max_x(&self) -> i64 {
        self.x0 + self.heights.len() as i64 - 1
    }

    /// Height at `x`.
    ///
    /// # Panics
    /// Panics if `x` lies outside `[min_x, max_x]`.
    pub fn height(&self, x: i64) -> f64 {
        assert!(
            x >= self.min_x() && x <= self.max_x(),
            "coordinate {x} outside terrain [{}, {}]",
            self.min_x(),
            self.max_x()
        );
        self.heights[(x - self.x0) as usize]
    }

    /// Height of the highest peak.
    pub fn max_height(&self) -> f64 {
        self.heights
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// The Air Ship objective: find the highest point of a terrain.
///
/// # Examples
///
/// ```
/// use u_heurbench::objfun::{AirShip, ObjFun};
///
/// let ship = AirShip::new();
/// assert_eq!(ship.fstar(), -100.0);
/// assert_eq!(ship.evaluate(&[50]), -100.0);
/// assert_eq!(ship.get_neighborhood(&[0], 2).unwrap(), vec![vec![1], vec![2]]);
/// ```
#[derive(Debug, Clone)]
pub struct AirShip {
    terrain: Terrain,
    fstar: f64,
    a: [i64; 1],
    b: [i64; 1],
}

impl AirShip {
    /// The standard Air Ship problem on `[0, 800]` with `fstar = -100`.
    pub fn new() -> Self {
        Self::with_terrain(Terrain::air_ship())
    }

    /// An Air Ship problem over a custom terrain; the target is its top peak.
    pub fn with_terrain(terrain: Terrain) -> Self {
        let fstar = -terrain.max_height();
        let a = [terrain.min_x()];
        let b = [terrain.max_x()];
        Self {
            terrain,
            fstar,
            a,
            b,
        }
    }

    /// Overrides the target value, e.g. to accept the lower peak.
    pub fn with_fstar(mut self, fstar: f64) -> Self {
        self.fstar = fstar;
        self
    }

    /// The underlying terrain.
    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }
}

impl Default for AirShip {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjFun for AirShip {
    fn fstar(&self) -> f64 {
        self.fstar
    }

    fn bounds(&self) -> (&[i64], &[i64]) {
        (&self.a, &self.b)
    }

    fn generate_point<R: Rng>(&self, rng: &mut R) -> Point {
        vec![rng.random_range(self.a[0]..=self.b[0])]
    }

    /// The `2d` nearest coordinates, nearest first on each side; offsets
    /// that leave the domain are dropped.
    fn get_neighborhood(&self, x: &[i64], d: usize) -> Result<Vec<Point>, HeurError> {
        if d == 0 {
            return Err(HeurError::UnsupportedDistance {
                distance: d,
                supported: "d >= 1",
            });
        }
        let x = x[0];
        let d = d as i64;
        let left = (1..=d).map(|o| x - o).filter(|&xn| xn >= self.a[0]);
        let right = (1..=d).map(|o| x + o).filter(|&xn| xn <= self.b[0]);
        Ok(left.chain(right).map(|xn| vec![xn]).collect())
    }

    fn evaluate(&self, x: &[i64]) -> f64 {
        -self.terrain.height(x[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_air_ship_terrain_control_points() {
        let t = Terrain::air_ship();
        assert_eq!(t.min_x(), 0);
        assert_eq!(t.max_x(), 800);
        assert_eq!(t.height(0), 0.0);
        assert_eq!(t.height(50), 100.0);
        assert_eq!(t.height(100), 0.0);
        assert_eq!(t.height(400), 25.0);
        assert_eq!(t.height(800), 50.0);
        assert_eq!(t.max_height(), 100.0);
    }

    #[test]
    fn test_interpolation_between_points() {
        let t = Terrain::air_ship();
        assert!((t.height(25) - 50.0).abs() < 1e-12);
        assert!((t.height(75) - 50.0).abs() < 1e-12);
        assert!((t.height(350) - 12.5).abs() < 1e-12);
        assert!((t.height(750) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_control_points_rejects_bad_input() {
        assert!(Terrain::from_control_points(&[0], &[1.0]).is_err());
        assert!(Terrain::from_control_points(&[0, 1], &[1.0]).is_err());
        assert!(Terrain::from_control_points(&[0, 0], &[1.0, 2.0]).is_err());
        assert!(Terrain::from_control_points(&[0, 5], &[1.0, f64::NAN]).is_err());
        assert!(Terrain::from_control_points(&[-5, 5], &[1.0, 3.0]).is_ok());
    }

    #[test]
    fn test_custom_terrain_offset_origin() {
        let t = Terrain::from_control_points(&[-2, 2], &[0.0, 4.0]).unwrap();
        assert_eq!(t.min_x(), -2);
        assert_eq!(t.max_x(), 2);
        assert_eq!(t.height(0), 2.0);
        let ship = AirShip::with_terrain(t);
        assert_eq!(ship.fstar(), -4.0);
        assert_eq!(ship.bounds(), (&[-2i64][..], &[2i64][..]));
    }

    #[test]
    fn test_evaluate_negates_height() {
        let ship = AirShip::new();
        assert_eq!(ship.evaluate(&[50]), -100.0);
        assert_eq!(ship.evaluate(&[800]), -50.0);
    }

    #[test]
    fn test_neighborhood_interior() {
        let ship = AirShip::new();
        let nb = ship.get_neighborhood(&[400], 2).unwrap();
        assert_eq!(nb, vec![vec![399], vec![398], vec![401], vec![402]]);
    }

    #[test]
    fn test_neighborhood_truncated_at_edges() {
        let ship = AirShip::new();
        assert_eq!(ship.get_neighborhood(&[0], 1).unwrap(), vec![vec![1]]);
        assert_eq!(
            ship.get_neighborhood(&[799], 3).unwrap(),
            vec![vec![798], vec![797], vec![796], vec![800]]
        );
    }

    #[test]
    fn test_neighborhood_zero_distance_rejected() {
        let ship = AirShip::new();
        assert!(matches!(
            ship.get_neighborhood(&[10], 0),
            Err(HeurError::UnsupportedDistance { distance: 0, .. })
        ));
    }

    #[test]
    fn test_generate_point_in_domain() {
        let ship = AirShip::new();
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let x = ship.generate_point(&mut rng);
            assert_eq!(x.len(), 1);
            assert!((0..=800).contains(&x[0]));
        }
    }
}

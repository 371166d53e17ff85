//! Cube hex coordinates and map geometry.
//!
//! Every position on the board is a [`Coordinate`] with the invariant
//! `q + r + s == 0`. Maps are `width x height` rectangles laid out in "odd-r"
//! offset form, so bounds checks convert to (column, row) first.
use std::fmt;

/// Cube coordinate on the hex grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CubeRepr"))]
pub struct Coordinate {
    q: i32,
    r: i32,
    s: i32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self { q: 0, r: 0, s: 0 };

    /// Creates a cube coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `q + r + s != 0`. Callers holding untrusted input should use
    /// [`Coordinate::try_new`].
    pub fn new(q: i32, r: i32, s: i32) -> Self {
        Self::try_new(q, r, s)
            .unwrap_or_else(|| panic!("cube coordinate ({q}, {r}, {s}) violates q + r + s = 0"))
    }

    pub const fn try_new(q: i32, r: i32, s: i32) -> Option<Self> {
        if q as i64 + r as i64 + s as i64 == 0 {
            Some(Self { q, r, s })
        } else {
            None
        }
    }

    /// Builds a coordinate from axial `(q, r)`; `s` is derived.
    ///
    /// # Panics
    ///
    /// Panics if `s` does not fit in `i32`. See [`Coordinate::try_axial`].
    pub const fn axial(q: i32, r: i32) -> Self {
        match Self::try_axial(q, r) {
            Some(coordinate) => coordinate,
            None => panic!("axial coordinate overflows i32"),
        }
    }

    /// Checked [`Coordinate::axial`].
    pub const fn try_axial(q: i32, r: i32) -> Option<Self> {
        match q.checked_add(r) {
            Some(sum) => match sum.checked_neg() {
                Some(s) => Some(Self { q, r, s }),
                None => None,
            },
            None => None,
        }
    }

    /// Builds a coordinate from odd-r offset `(column, row)`.
    ///
    /// # Panics
    ///
    /// Panics on `i32` overflow. See [`Coordinate::try_from_offset`].
    pub const fn from_offset(column: i32, row: i32) -> Self {
        match Self::try_from_offset(column, row) {
            Some(coordinate) => coordinate,
            None => panic!("offset coordinate overflows i32"),
        }
    }

    /// Checked [`Coordinate::from_offset`].
    pub const fn try_from_offset(column: i32, row: i32) -> Option<Self> {
        match column.checked_sub((row - (row & 1)) / 2) {
            Some(q) => Self::try_axial(q, row),
            None => None,
        }
    }

    pub const fn q(self) -> i32 {
        self.q
    }

    pub const fn r(self) -> i32 {
        self.r
    }

    pub const fn s(self) -> i32 {
        self.s
    }

    /// Returns odd-r offset `(column, row)`.
    pub const fn to_offset(self) -> (i32, i32) {
        (self.q.saturating_add((self.r - (self.r & 1)) / 2), self.r)
    }

    /// Hex distance: the largest absolute axis difference.
    pub fn distance(self, other: Coordinate) -> u32 {
        let dq = self.q.abs_diff(other.q);
        let dr = self.r.abs_diff(other.r);
        let ds = self.s.abs_diff(other.s);
        dq.max(dr).max(ds)
    }

    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self.distance(other) == 1
    }

    pub fn neighbor(self, direction: HexDirection) -> Coordinate {
        let (dq, dr, ds) = direction.delta();
        Self {
            q: self.q + dq,
            r: self.r + dr,
            s: self.s + ds,
        }
    }

    /// The six adjacent coordinates in [`HexDirection::ALL`] order.
    pub fn neighbors(self) -> [Coordinate; 6] {
        HexDirection::ALL.map(|direction| self.neighbor(direction))
    }

    /// All coordinates with `distance <= radius`, ordered by `q` then `r`.
    ///
    /// Cells whose components would leave `i32` are skipped.
    pub fn within(self, radius: u32) -> impl Iterator<Item = Coordinate> {
        let n = i64::from(radius);
        (-n..=n).flat_map(move |dq| {
            let low = (-n).max(-dq - n);
            let high = n.min(-dq + n);
            (low..=high).filter_map(move |dr| {
                let q = i32::try_from(i64::from(self.q) + dq).ok()?;
                let r = i32::try_from(i64::from(self.r) + dr).ok()?;
                Coordinate::try_axial(q, r)
            })
        })
    }

    /// All coordinates at exactly `radius` from `self`.
    pub fn ring(self, radius: u32) -> impl Iterator<Item = Coordinate> {
        self.within(radius)
            .filter(move |coordinate| self.distance(*coordinate) == radius)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

impl TryFrom<(i32, i32, i32)> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from((q, r, s): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::try_new(q, r, s).ok_or(InvalidCoordinate { q, r, s })
    }
}

/// Raised when three cube components do not sum to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cube coordinate ({q}, {r}, {s}) violates q + r + s = 0")]
pub struct InvalidCoordinate {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CubeRepr {
    q: i32,
    r: i32,
    s: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<CubeRepr> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(repr: CubeRepr) -> Result<Self, Self::Error> {
        Self::try_from((repr.q, repr.r, repr.s))
    }
}

/// The six hex directions, clockwise from east.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HexDirection {
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::East,
        HexDirection::SouthEast,
        HexDirection::SouthWest,
        HexDirection::West,
        HexDirection::NorthWest,
        HexDirection::NorthEast,
    ];

    pub const fn delta(self) -> (i32, i32, i32) {
        match self {
            HexDirection::East => (1, 0, -1),
            HexDirection::SouthEast => (0, 1, -1),
            HexDirection::SouthWest => (-1, 1, 0),
            HexDirection::West => (-1, 0, 1),
            HexDirection::NorthWest => (0, -1, 1),
            HexDirection::NorthEast => (1, -1, 0),
        }
    }
}

/// Rectangular map extent in odd-r offset tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        let row = i64::from(coordinate.r);
        let column = i64::from(coordinate.q) + (row - (row & 1)) / 2;
        (0..i64::from(self.width)).contains(&column) && (0..i64::from(self.height)).contains(&row)
    }

    /// Every in-bounds coordinate, row by row.
    ///
    /// Extents beyond `i32::MAX` are clamped.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let clamp = |extent: u32| i32::try_from(extent).unwrap_or(i32::MAX);
        let (width, height) = (clamp(self.width), clamp(self.height));
        (0..height).flat_map(move |row| {
            (0..width).map(move |column| Coordinate::from_offset(column, row))
        })
    }
}

pub fn distance(a: Coordinate, b: Coordinate) -> u32 {
    a.distance(b)
}

pub fn neighbors(coordinate: Coordinate) -> [Coordinate; 6] {
    coordinate.neighbors()
}

pub fn is_within_bounds(coordinate: Coordinate, map: &MapDimensions) -> bool {
    map.contains(coordinate)
}

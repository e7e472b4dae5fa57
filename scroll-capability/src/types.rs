/// One of the two scroll directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    #[default]
    Y,
}

impl Axis {
    /// Parses `"x"` or `"y"`. Every other string is an unrecognized axis.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }

    pub fn cross(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value tracked separately for each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AxisPair<T> {
    pub x: T,
    pub y: T,
}

impl<T> AxisPair<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn get_ref(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn set(&mut self, axis: Axis, value: T) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }
}

impl<T: Copy> AxisPair<T> {
    pub fn get(&self, axis: Axis) -> T {
        *self.get_ref(axis)
    }
}

/// Named regions of a scrollbar's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScrollProp {
    /// Thumb translation along its track.
    Move,
    /// Thumb length.
    Size,
    /// Current content scroll offset.
    Offset,
    /// Largest reachable scroll offset (content size minus viewport size).
    Limit,
}

impl ScrollProp {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "move" => Some(Self::Move),
            "size" => Some(Self::Size),
            "offset" => Some(Self::Offset),
            "limit" => Some(Self::Limit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Size => "size",
            Self::Offset => "offset",
            Self::Limit => "limit",
        }
    }
}

use crate::models::ModuleCoord;

/// Vertical direction of the current two-column lane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0
    Upward,
    /// Towards the last row
    Downward,
}

impl Direction {
    fn row_step(self) -> isize {
        match self {
            Direction::Upward => -1,
            Direction::Downward => 1,
        }
    }

    fn reversed(self) -> Self {
        match self {
            Direction::Upward => Direction::Downward,
            Direction::Downward => Direction::Upward,
        }
    }
}

/// Zigzag placement cursor
///
/// The state is the position plus the lane direction. Positions are signed so
/// the cursor can step one module past an edge before [`Cursor::advance`]
/// folds it back into the next lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    x: isize,
    y: isize,
    direction: Direction,
}

impl Cursor {
    /// Bottom-right module, heading up
    pub fn start(width: usize) -> Self {
        let last = width as isize - 1;
        Self {
            x: last,
            y: last,
            direction: Direction::Upward,
        }
    }

    /// Vertical heading within the current lane
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current module, `None` once the cursor has left the grid
    pub fn position(&self, width: usize) -> Option<ModuleCoord> {
        let inside = |v: isize| v >= 0 && (v as usize) < width;
        if inside(self.x) && inside(self.y) {
            Some(ModuleCoord::new(self.x as usize, self.y as usize))
        } else {
            None
        }
    }

    /// Next cursor state.
    ///
    /// Right column of a lane: move left. Left column: move back right and one
    /// row along the lane. Columns left of the vertical timing line pair the
    /// other way round, and the timing column itself always moves left. When
    /// the row leaves the grid, drop two columns into the next lane and
    /// reverse.
    pub fn advance(self, timing_x: usize, width: usize) -> Self {
        let timing_x = timing_x as isize;
        let x = self.x;
        let right_of_lane =
            (x % 2 == 0 && x > timing_x) || (x % 2 != 0 && x < timing_x) || x == timing_x;

        let mut next = if right_of_lane {
            Self { x: x - 1, ..self }
        } else {
            Self {
                x: x + 1,
                y: self.y + self.direction.row_step(),
                ..self
            }
        };

        if next.y < 0 || next.y >= width as isize {
            next = Self {
                x: next.x - 2,
                y: next.y - next.direction.row_step(),
                direction: next.direction.reversed(),
            };
        }

        next
    }
}

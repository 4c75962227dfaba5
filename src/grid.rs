use anyhow::{bail, Result};
use arrayvec::ArrayVec;
use std::fmt;
use std::ops::Index;

/// `(x, y)` with `y` growing downward.
pub type Point = (isize, isize);

pub fn point_add(a: Point, b: Point) -> Point {
    (a.0 + b.0, a.1 + b.1)
}

pub fn point_sub(a: Point, b: Point) -> Point {
    (a.0 - b.0, a.1 - b.1)
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize, fill: u8) -> Grid {
        Grid {cells: vec![fill; width * height], width, height}
    }

    pub fn parse(input: &str) -> Result<Grid> {
        Grid::from_rows(crate::input::lines(input).map(str::as_bytes))
    }

    pub fn from_rows<R: AsRef<[u8]>>(rows: impl IntoIterator<Item = R>) -> Result<Grid> {
        let mut cells = vec![];
        let mut width = None;
        let mut height = 0;
        for row in rows {
            let row = row.as_ref();
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    bail!("row {} is {} cells wide, expected {}", height, row.len(), w)
                }
                Some(_) => ()
            }
            cells.extend_from_slice(row);
            height += 1;
        }
        let Some(width) = width else {bail!("grid has no rows")};
        Ok(Grid {cells, width, height})
    }

    pub fn width(&self) -> usize {self.width}
    pub fn height(&self) -> usize {self.height}
    pub fn col_count(&self) -> usize {self.width}
    pub fn row_count(&self) -> usize {self.height}

    pub fn border_top(&self) -> isize {0}
    pub fn border_bottom(&self) -> isize {self.height as isize - 1}
    pub fn border_left(&self) -> isize {0}
    pub fn border_right(&self) -> isize {self.width as isize - 1}

    pub fn corner_upper_left(&self) -> Point {(self.border_left(), self.border_top())}
    pub fn corner_upper_right(&self) -> Point {(self.border_right(), self.border_top())}
    pub fn corner_lower_left(&self) -> Point {(self.border_left(), self.border_bottom())}
    pub fn corner_lower_right(&self) -> Point {(self.border_right(), self.border_bottom())}

    pub fn is_in_bounds(&self, (x, y): Point) -> bool {
        (0 .. self.width as isize).contains(&x) && (0 .. self.height as isize).contains(&y)
    }

    fn offset(&self, p: Point) -> Option<usize> {
        self.is_in_bounds(p).then(|| p.1 as usize * self.width + p.0 as usize)
    }

    pub fn get(&self, p: Point) -> Option<u8> {
        self.offset(p).map(|ix| self.cells[ix])
    }

    /// Panics when `p` is out of bounds, like slice indexing.
    pub fn set(&mut self, p: Point, cell: u8) {
        let Some(ix) = self.offset(p) else {
            panic!("{:?} is outside a {}x{} grid", p, self.width, self.height)
        };
        self.cells[ix] = cell;
    }

    pub fn row(&self, y: usize) -> &[u8] {
        &self.cells[y * self.width ..][.. self.width]
    }

    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (w, h) = (self.width as isize, self.height as isize);
        (0 .. h).flat_map(move |y| (0 .. w).map(move |x| (x, y)))
    }

    pub fn positions(&self, cell: u8) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(move |&p| self[p] == cell)
    }

    pub fn find(&self, cell: u8) -> Option<Point> {
        self.positions(cell).next()
    }

    /// In-bounds orthogonal neighbours, in `Direction::ALL` order.
    pub fn neighbours(&self, p: Point) -> ArrayVec<Point, 4> {
        Direction::ALL.iter().map(|dir| dir.step(p)).filter(|&n| self.is_in_bounds(n)).collect()
    }
}

impl Index<Point> for Grid {
    type Output = u8;

    fn index(&self, p: Point) -> &u8 {
        match self.offset(p) {
            Some(ix) => &self.cells[ix],
            None => panic!("{:?} is outside a {}x{} grid", p, self.width, self.height)
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0 .. self.height {
            if y > 0 {writeln!(f)?}
            write!(f, "{}", String::from_utf8_lossy(self.row(y)))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid {}x{}\n{}", self.width, self.height, self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {Up, Right, Down, Left}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn delta(self) -> Point {
        match self {
            Direction::Up => (0, -1), Direction::Right => (1, 0),
            Direction::Down => (0, 1), Direction::Left => (-1, 0),
        }
    }

    pub fn step(self, p: Point) -> Point {point_add(p, self.delta())}

    pub fn turn_right(self) -> Direction {Direction::ALL[(self.index() + 1) % 4]}
    pub fn turn_left(self) -> Direction {Direction::ALL[(self.index() + 3) % 4]}
    pub fn reverse(self) -> Direction {Direction::ALL[(self.index() + 2) % 4]}

    pub fn index(self) -> usize {self as usize}

    pub fn from_arrow(arrow: u8) -> Option<Direction> {
        match arrow {
            b'^' => Some(Direction::Up), b'>' => Some(Direction::Right),
            b'v' => Some(Direction::Down), b'<' => Some(Direction::Left),
            _ => None
        }
    }
}

/// The eight canned traversal orders. A traversal is a sequence of lanes: each
/// lane starts at a lane origin and steps in a straight line until it leaves the
/// grid, then the origin moves on. Traversal ends once the origin leaves the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridSearch {
    VerticalDown,
    VerticalUp,
    HorizontalRight,
    HorizontalLeft,
    DiagonalUlBr,
    DiagonalBlUr,
    DiagonalUrBl,
    DiagonalBrUl,
}

impl GridSearch {
    pub const ALL: [GridSearch; 8] = [
        GridSearch::VerticalDown, GridSearch::VerticalUp,
        GridSearch::HorizontalRight, GridSearch::HorizontalLeft,
        GridSearch::DiagonalUlBr, GridSearch::DiagonalBlUr,
        GridSearch::DiagonalUrBl, GridSearch::DiagonalBrUl,
    ];

    pub fn origin(self, grid: &Grid) -> Point {
        match self {
            GridSearch::VerticalDown | GridSearch::HorizontalRight => grid.corner_upper_left(),
            GridSearch::HorizontalLeft => grid.corner_upper_right(),
            GridSearch::VerticalUp | GridSearch::DiagonalUlBr | GridSearch::DiagonalBrUl =>
                grid.corner_lower_left(),
            GridSearch::DiagonalBlUr | GridSearch::DiagonalUrBl => grid.corner_lower_right(),
        }
    }

    pub fn step(self, (x, y): Point) -> Point {
        match self {
            GridSearch::VerticalDown => (x, y + 1),
            GridSearch::VerticalUp => (x, y - 1),
            GridSearch::HorizontalRight => (x + 1, y),
            GridSearch::HorizontalLeft => (x - 1, y),
            GridSearch::DiagonalUlBr => (x + 1, y + 1),
            GridSearch::DiagonalBlUr => (x + 1, y - 1),
            GridSearch::DiagonalUrBl => (x - 1, y + 1),
            GridSearch::DiagonalBrUl => (x - 1, y - 1),
        }
    }

    /// The origin of the lane after the one that started at `(x, y)`.
    pub fn next(self, grid: &Grid, (x, y): Point) -> Point {
        match self {
            GridSearch::VerticalDown => (x + 1, grid.border_top()),
            GridSearch::VerticalUp => (x + 1, grid.border_bottom()),
            GridSearch::HorizontalRight => (grid.border_left(), y + 1),
            GridSearch::HorizontalLeft => (grid.border_right(), y + 1),
            GridSearch::DiagonalUlBr => if y == grid.border_top() {
                (x + 1, grid.border_top())
            } else {(grid.border_left(), y - 1)},
            GridSearch::DiagonalBlUr => if x == grid.border_left() {
                (grid.border_left(), y - 1)
            } else {(x - 1, grid.border_bottom())},
            GridSearch::DiagonalUrBl => if y == grid.border_top() {
                (x - 1, grid.border_top())
            } else {(grid.border_right(), y - 1)},
            GridSearch::DiagonalBrUl => if x == grid.border_right() {
                (grid.border_right(), y - 1)
            } else {(x + 1, grid.border_bottom())},
        }
    }

    pub fn lanes(self, grid: &Grid) -> Lanes<'_> {
        let origin = self.origin(grid);
        Lanes {grid, search: self, origin: grid.is_in_bounds(origin).then_some(origin)}
    }

    pub fn trace(self, grid: &Grid) -> impl Iterator<Item = Point> + '_ {
        self.lanes(grid).flatten()
    }
}

pub struct Lanes<'g> {
    grid: &'g Grid,
    search: GridSearch,
    origin: Option<Point>,
}

impl<'g> Iterator for Lanes<'g> {
    type Item = Lane<'g>;

    fn next(&mut self) -> Option<Lane<'g>> {
        let origin = self.origin?;
        let next = self.search.next(self.grid, origin);
        self.origin = self.grid.is_in_bounds(next).then_some(next);
        Some(Lane {grid: self.grid, search: self.search, cursor: Some(origin)})
    }
}

pub struct Lane<'g> {
    grid: &'g Grid,
    search: GridSearch,
    cursor: Option<Point>,
}

impl Iterator for Lane<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let p = self.cursor?;
        let next = self.search.step(p);
        self.cursor = self.grid.is_in_bounds(next).then_some(next);
        Some(p)
    }
}

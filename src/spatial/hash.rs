//! Uniform grid spatial hash.
//!
//! [`SpatialHash`] divides a fixed rectangular domain into square cells and
//! records which ids cover which cells. It answers "what might overlap this
//! rect?" without testing every id.
//!
//! Notes
//! - Rects partially or fully outside the domain are clamped into the boundary
//!   cells; nothing is ever dropped.
//! - An id may sit in several cells. [`SpatialHash::retrieve`] still yields it
//!   only once per query, using a pooled scratch set.
//! - Re-inserting an id does not remove it from the cells it covered before.
//!   The lookup always holds the most recent rect, so stale cells only cost a
//!   little extra filtering until the next [`SpatialHash::clear`].
//! - The right and bottom edges of a rect are included in its cell range.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::components::rectangle::Rectangle;
use crate::spatial::pool::{PooledSet, SetPool};

type Bucket<T> = SmallVec<[T; 4]>;

#[derive(Debug)]
pub struct SpatialHash<T> {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    cell_size: i32,
    row_count: i32,
    column_count: i32,
    cells: Vec<Bucket<T>>,
    lookup: FxHashMap<T, Rectangle>,
    pool: SetPool<T>,
}

/// Inclusive cell range covered by a rect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CellRange {
    row_start: i32,
    row_end: i32,
    column_start: i32,
    column_end: i32,
}

impl<T: Copy + Eq + Hash> SpatialHash<T> {
    /// Create a grid over the domain `(x, y, width, height)`.
    ///
    /// Rows run along X (`width / cell_size` of them) and columns along Y
    /// (`height / cell_size`). A domain smaller than one cell still gets a
    /// single cell. `cell_size` must be at least 1; smaller values are treated
    /// as 1.
    pub fn new(x: i32, y: i32, width: i32, height: i32, cell_size: i32) -> Self {
        let cell_size = cell_size.max(1);
        let row_count = (width / cell_size).max(1);
        let column_count = (height / cell_size).max(1);
        let cells = (0..row_count * column_count)
            .map(|_| Bucket::new())
            .collect();

        Self {
            x,
            y,
            width,
            height,
            cell_size,
            row_count,
            column_count,
            cells,
            lookup: FxHashMap::default(),
            pool: SetPool::new(),
        }
    }

    pub fn row_count(&self) -> i32 {
        self.row_count
    }

    pub fn column_count(&self) -> i32 {
        self.column_count
    }

    /// Domain as a rectangle.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.x, self.y, self.width, self.height)
    }

    /// Number of distinct ids inserted since the last clear.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Most recently inserted rect for `id`.
    pub fn rect_of(&self, id: T) -> Option<Rectangle> {
        self.lookup.get(&id).copied()
    }

    fn cell_range(&self, rect: Rectangle) -> CellRange {
        let relative_x = rect.x - self.x;
        let relative_y = rect.y - self.y;
        let max_row = self.row_count - 1;
        let max_column = self.column_count - 1;
        CellRange {
            row_start: (relative_x / self.cell_size).clamp(0, max_row),
            row_end: ((relative_x + rect.w) / self.cell_size).clamp(0, max_row),
            column_start: (relative_y / self.cell_size).clamp(0, max_column),
            column_end: ((relative_y + rect.h) / self.cell_size).clamp(0, max_column),
        }
    }

    fn cell_index(&self, row: i32, column: i32) -> usize {
        (row * self.column_count + column) as usize
    }

    /// Add `id` to every cell covered by `rect` and remember `rect` as its
    /// current bounds.
    pub fn insert(&mut self, id: T, rect: Rectangle) {
        let range = self.cell_range(rect);
        for row in range.row_start..=range.row_end {
            for column in range.column_start..=range.column_end {
                let index = self.cell_index(row, column);
                self.cells[index].push(id);
            }
        }
        self.lookup.insert(id, rect);
    }

    /// Every id sharing a cell with `rect`, each exactly once.
    ///
    /// The results are candidates: callers still test the returned rects for
    /// actual overlap.
    pub fn retrieve(&mut self, rect: Rectangle) -> Retrieve<'_, T> {
        self.query(None, rect)
    }

    /// Same as [`retrieve`](Self::retrieve) but never yields `id`.
    pub fn retrieve_excluding(&mut self, id: T, rect: Rectangle) -> Retrieve<'_, T> {
        self.query(Some(id), rect)
    }

    fn query(&mut self, exclude: Option<T>, rect: Rectangle) -> Retrieve<'_, T> {
        let range = self.cell_range(rect);
        let Self {
            cells,
            lookup,
            pool,
            column_count,
            ..
        } = self;
        Retrieve {
            cells: cells.as_slice(),
            lookup,
            column_count: *column_count,
            range,
            row: range.row_start,
            column: range.column_start,
            bucket: Default::default(),
            exclude,
            seen: pool.acquire(),
        }
    }

    /// First id other than `id` whose rect actually intersects `rect` and
    /// that `accept` agrees to collide with.
    pub fn first_overlap(
        &mut self,
        id: T,
        rect: Rectangle,
        mut accept: impl FnMut(T) -> bool,
    ) -> Option<(T, Rectangle)> {
        self.retrieve_excluding(id, rect)
            .find(|(other, other_rect)| rect.intersects(other_rect) && accept(*other))
    }

    /// Empty every cell and the lookup. Cost scales with the cell count.
    pub fn clear(&mut self) {
        for bucket in self.cells.iter_mut() {
            bucket.clear();
        }
        self.lookup.clear();
    }
}

/// Lazy, single-pass iterator returned by [`SpatialHash::retrieve`].
///
/// Holds a pooled dedup set for its whole lifetime and returns it when
/// dropped, whether it was drained or abandoned early.
pub struct Retrieve<'a, T: Eq + Hash> {
    cells: &'a [Bucket<T>],
    lookup: &'a FxHashMap<T, Rectangle>,
    column_count: i32,
    range: CellRange,
    row: i32,
    column: i32,
    bucket: std::slice::Iter<'a, T>,
    exclude: Option<T>,
    seen: PooledSet<'a, T>,
}

impl<'a, T: Copy + Eq + Hash> Retrieve<'a, T> {
    /// Move to the next cell in the range, row-major. Returns false when done.
    fn advance_cell(&mut self) -> bool {
        if self.row > self.range.row_end {
            return false;
        }
        let index = (self.row * self.column_count + self.column) as usize;
        self.bucket = self.cells[index].iter();

        if self.column < self.range.column_end {
            self.column += 1;
        } else {
            self.column = self.range.column_start;
            self.row += 1;
        }
        true
    }
}

impl<T: Copy + Eq + Hash> Iterator for Retrieve<'_, T> {
    type Item = (T, Rectangle);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(&id) = self.bucket.next() else {
                if !self.advance_cell() {
                    return None;
                }
                continue;
            };
            if self.exclude == Some(id) || !self.seen.insert(id) {
                continue;
            }
            if let Some(rect) = self.lookup.get(&id) {
                return Some((id, *rect));
            }
        }
    }
}

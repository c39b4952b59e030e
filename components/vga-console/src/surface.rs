//! Fixed-size view over the text surface memory
//!
//! `Surface` replaces raw pointer arithmetic on the display base address with
//! an indexed accessor. The raw accessors are crate-private: every caller
//! derives its index from `WIDTH`/`HEIGHT` and the cursor invariant, so they
//! only assert in debug builds and compile down to a volatile access at
//! `base + index`. The public [`Surface::get`] checks its bounds.
//!
//! # Safety
//! The region behind a `Surface` is treated as device memory: every access is
//! volatile so the compiler cannot elide or merge writes to the display.

use crate::cell::Cell;
use crate::{ConsoleError, Result};
use core::marker::PhantomData;
use core::ptr::{self, NonNull};
use static_assertions::const_assert_eq;

/// Columns per row
pub const WIDTH: usize = 80;

/// Rows on the surface
pub const HEIGHT: usize = 25;

/// Total number of cells
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

/// Legacy text-mode buffer address on x86
pub const VGA_TEXT_BUFFER: usize = 0xB8000;

const_assert_eq!(CELL_COUNT, 2000);

/// Exclusive view over `CELL_COUNT` cells
pub struct Surface<'a> {
    base: NonNull<Cell>,
    _region: PhantomData<&'a mut [Cell; CELL_COUNT]>,
}

// SAFETY: a Surface is the unique handle to its region, so moving it to
// another context moves ownership of the memory with it.
unsafe impl Send for Surface<'_> {}

impl<'a> Surface<'a> {
    /// Bind to a caller-owned cell array
    pub fn from_cells(cells: &'a mut [Cell; CELL_COUNT]) -> Self {
        Self {
            base: NonNull::from(cells).cast(),
            _region: PhantomData,
        }
    }

    /// Index of `(row, col)` in the cell array
    #[inline]
    pub const fn index(row: usize, col: usize) -> usize {
        row * WIDTH + col
    }

    /// Cell at `(row, col)`, or `None` outside the surface
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < HEIGHT && col < WIDTH {
            Some(self.read(Self::index(row, col)))
        } else {
            None
        }
    }

    /// Store a cell
    #[inline]
    pub(crate) fn write(&mut self, index: usize, cell: Cell) {
        debug_assert!(index < CELL_COUNT, "surface index {} out of bounds", index);
        // SAFETY: index < CELL_COUNT and the region is CELL_COUNT cells long
        unsafe { ptr::write_volatile(self.base.as_ptr().add(index), cell) }
    }

    /// Load a cell
    #[inline]
    pub(crate) fn read(&self, index: usize) -> Cell {
        debug_assert!(index < CELL_COUNT, "surface index {} out of bounds", index);
        // SAFETY: as in `write`
        unsafe { ptr::read_volatile(self.base.as_ptr().add(index)) }
    }

    /// Fill `[start, end)` with one cell value
    pub(crate) fn fill(&mut self, start: usize, end: usize, cell: Cell) {
        debug_assert!(start <= end && end <= CELL_COUNT);
        for index in start..end {
            self.write(index, cell);
        }
    }

    /// Copy cells from `src..src + len` to `dest..dest + len`, front to back
    ///
    /// Only valid for `dest <= src`, which is the only direction scrolling needs.
    pub(crate) fn copy_forward(&mut self, src: usize, dest: usize, len: usize) {
        debug_assert!(dest <= src && src + len <= CELL_COUNT);
        for offset in 0..len {
            let cell = self.read(src + offset);
            self.write(dest + offset, cell);
        }
    }

    /// Base address of the region
    pub fn base_address(&self) -> usize {
        self.base.as_ptr() as usize
    }
}

impl Surface<'static> {
    /// Bind to the display memory at `base`
    ///
    /// Rejects a null or misaligned base; nothing else can be checked here.
    ///
    /// # Safety
    /// `base` must point to `CELL_COUNT` writable cells that stay valid for the
    /// rest of the program and that no other code writes to.
    pub unsafe fn from_address(base: usize) -> Result<Self> {
        if base % core::mem::align_of::<Cell>() != 0 {
            return Err(ConsoleError::MisalignedSurface { address: base });
        }

        let base = NonNull::new(base as *mut Cell).ok_or(ConsoleError::NullSurface)?;

        Ok(Self {
            base,
            _region: PhantomData,
        })
    }
}

use super::error::{QRError, QRResult};

// Module grid
//------------------------------------------------------------------------------

/// Boolean module matrix produced by a [`ModuleMatrixSource`](crate::ModuleMatrixSource).
///
/// Stored row-major. Rows run along the height axis (`y`) and columns along the width
/// axis (`x`), so the module drawn at pixel `(x, y)` is `get(y, x)`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ModuleGrid {
    w: u32,
    h: u32,
    modules: Vec<bool>,
}

impl ModuleGrid {
    pub fn new(w: u32, h: u32, modules: Vec<bool>) -> QRResult<Self> {
        if w == 0 || h == 0 {
            return Err(QRError::InvalidDimensions { width: w, height: h });
        }
        if modules.len() != w as usize * h as usize {
            return Err(QRError::InvalidDimensions { width: w, height: h });
        }
        Ok(Self { w, h, modules })
    }

    pub fn from_fn(w: u32, h: u32, f: impl Fn(u32, u32) -> bool) -> QRResult<Self> {
        let modules = (0..h).flat_map(|r| (0..w).map(move |c| (r, c))).map(|(r, c)| f(r, c));
        Self::new(w, h, modules.collect())
    }

    pub fn width(&self) -> u32 {
        self.w
    }

    pub fn height(&self) -> u32 {
        self.h
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.w, self.h)
    }

    fn coord_to_index(&self, r: u32, c: u32) -> usize {
        debug_assert!(r < self.h, "row {r} out of bounds for height {}", self.h);
        debug_assert!(c < self.w, "column {c} out of bounds for width {}", self.w);

        r as usize * self.w as usize + c as usize
    }

    pub fn get(&self, r: u32, c: u32) -> bool {
        self.modules[self.coord_to_index(r, c)]
    }

    pub fn count_marks(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity((self.w as usize + 1) * self.h as usize);
        for r in 0..self.h {
            for c in 0..self.w {
                res.push(if self.get(r, c) { '#' } else { '.' });
            }
            res.push('\n');
        }
        res
    }
}

#[cfg(test)]
mod grid_tests {
    use super::ModuleGrid;

    #[test]
    fn test_row_major_layout() {
        let grid = ModuleGrid::new(3, 2, vec![true, false, false, false, false, true]).unwrap();
        assert!(grid.get(0, 0));
        assert!(!grid.get(0, 2));
        assert!(grid.get(1, 2));
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.count_marks(), 2);
    }

    #[test]
    fn test_from_fn_rows_follow_height() {
        let grid = ModuleGrid::from_fn(4, 2, |r, c| r == 1 && c == 3).unwrap();
        assert_eq!(grid.to_debug_str(), "....\n...#\n");
    }

    #[test]
    fn test_zero_dimension() {
        assert!(ModuleGrid::new(0, 3, vec![]).is_err());
        assert!(ModuleGrid::new(3, 0, vec![]).is_err());
    }

    #[test]
    fn test_length_mismatch() {
        assert!(ModuleGrid::new(2, 2, vec![true; 3]).is_err());
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_bound() {
        let grid = ModuleGrid::new(2, 2, vec![false; 4]).unwrap();
        grid.get(2, 0);
    }
}

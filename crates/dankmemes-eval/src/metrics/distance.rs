//! Square matrix of pairwise distances with undefined entries

/// Symmetric distance matrix filled from pairwise rows.
///
/// Every entry, the diagonal included, starts undefined and only rows of the
/// submission fill it.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Option<f64>>,
}

impl DistanceMatrix {
    /// Create an `size x size` matrix with every entry undefined
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.cells[i * self.size + j]
    }

    /// Write `distance` at `(i, j)` and `(j, i)`
    pub fn set_symmetric(&mut self, i: usize, j: usize, distance: Option<f64>) {
        let distance = distance.filter(|d| !d.is_nan());
        self.cells[i * self.size + j] = distance;
        self.cells[j * self.size + i] = distance;
    }

    /// Number of entries that are still undefined
    pub fn undefined_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.undefined_count() == 0
    }
}

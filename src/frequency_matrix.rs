use ahash::RandomState;
use hashbrown::HashMap;
use num_traits::Float;
use ordered_float::{OrderedFloat, PrimitiveFloat};

use alloc::vec::Vec;

use crate::{
    StatsError, StatsResult,
    helper::{ensure_len, kbn_sum},
};

/// A rectangular table of observation counts over two variables.
///
/// Rows are indexed by the distinct values of Y and columns by the distinct
/// values of X, so the entry at `(i, j)` is the number of observations where
/// Y takes its i-th value and X takes its j-th value. The counts are stored
/// row-major in one flat buffer with explicit dimensions, which makes the
/// rectangular shape an invariant of the type rather than of the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyMatrix<T> {
    /// Row-major counts
    data: Vec<T>,
    /// Number of distinct Y values
    rows: usize,
    /// Number of distinct X values
    cols: usize,
}

impl<T> FrequencyMatrix<T>
where
    T: Float + Default,
{
    /// Creates a matrix from a row-major buffer
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of distinct Y values
    /// * `cols` - Number of distinct X values
    /// * `data` - `rows * cols` counts, row after row
    ///
    /// # Returns
    ///
    /// * `StatsResult<Self>` - The matrix, or `LengthMismatch` if the buffer does not hold `rows * cols` entries
    ///   (reported with `expected: usize::MAX` when `rows * cols` overflows)
    ///
    /// # Examples
    ///
    /// ```
    /// use grouped_stats::FrequencyMatrix;
    ///
    /// let m = FrequencyMatrix::new(2, 3, vec![1.0, 0.0, 2.0, 0.0, 4.0, 1.0]).unwrap();
    /// assert_eq!(m.get(1, 1), Some(4.0));
    /// assert!(FrequencyMatrix::new(2, 2, vec![1.0; 3]).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> StatsResult<Self> {
        let cells = rows.checked_mul(cols).ok_or(StatsError::LengthMismatch {
            expected: usize::MAX,
            found: data.len(),
        })?;
        ensure_len(cells, data.len())?;
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a list of rows
    ///
    /// # Arguments
    ///
    /// * `rows` - One slice of counts per Y value, all of the same length
    ///
    /// # Returns
    ///
    /// * `StatsResult<Self>` - The matrix, or `RaggedMatrix` naming the first row whose length differs from row 0
    ///
    /// # Examples
    ///
    /// ```
    /// use grouped_stats::{FrequencyMatrix, StatsError};
    ///
    /// let m = FrequencyMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.total(), 10.0);
    ///
    /// let ragged: [&[f64]; 2] = [&[1.0, 2.0], &[3.0]];
    /// assert_eq!(
    ///     FrequencyMatrix::from_rows(&ragged),
    ///     Err(StatsError::RaggedMatrix { row: 1, expected: 2, found: 1 })
    /// );
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> StatsResult<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);

        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != cols {
                return Err(StatsError::RaggedMatrix {
                    row,
                    expected: cols,
                    found: r.len(),
                });
            }
            data.extend_from_slice(r);
        }

        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Tallies raw observation pairs into a frequency table
    ///
    /// Every observation `(xs[k], ys[k])` adds one to the cell of its X level
    /// and Y level. When a level is listed twice, its first position receives
    /// the counts.
    ///
    /// # Arguments
    ///
    /// * `x_levels` - Distinct X values, one per column
    /// * `y_levels` - Distinct Y values, one per row
    /// * `xs` - Observed X values
    /// * `ys` - Observed Y values, paired with `xs` by position
    ///
    /// # Returns
    ///
    /// * `StatsResult<Self>` - The table, `LengthMismatch` if `xs` and `ys` differ in length,
    ///   or `UnknownLevel` if an observation is not among the levels
    ///
    /// # Examples
    ///
    /// ```
    /// use grouped_stats::FrequencyMatrix;
    ///
    /// let m = FrequencyMatrix::from_pairs(
    ///     &[1.0, 2.0],
    ///     &[10.0, 20.0],
    ///     &[1.0, 2.0, 2.0],
    ///     &[10.0, 20.0, 20.0],
    /// )
    /// .unwrap();
    /// assert_eq!(m.as_slice(), &[1.0, 0.0, 0.0, 2.0]);
    /// ```
    pub fn from_pairs(x_levels: &[T], y_levels: &[T], xs: &[T], ys: &[T]) -> StatsResult<Self>
    where
        T: PrimitiveFloat,
    {
        ensure_len(xs.len(), ys.len())?;

        let x_index = level_index(x_levels);
        let y_index = level_index(y_levels);

        let rows = y_levels.len();
        let cols = x_levels.len();
        let mut data = vec![T::zero(); rows * cols];

        for (&x, &y) in xs.iter().zip(ys) {
            let j = x_index
                .get(&OrderedFloat(x))
                .ok_or(StatsError::UnknownLevel)?;
            let i = y_index
                .get(&OrderedFloat(y))
                .ok_or(StatsError::UnknownLevel)?;
            let cell = &mut data[i * cols + j];
            *cell = *cell + T::one();
        }

        Ok(Self { data, rows, cols })
    }

    /// Returns the number of rows (distinct Y values)
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns (distinct X values)
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the count at row `i` and column `j`, or `None` when out of bounds
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        (i < self.rows && j < self.cols).then(|| self.data[i * self.cols + j])
    }

    /// Returns the counts of row `i`, or `None` when out of bounds
    pub fn row(&self, i: usize) -> Option<&[T]> {
        (i < self.rows).then(|| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Returns the counts as a row-major slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        let cols = self.cols;
        (0..self.rows).map(move |i| &self.data[i * cols..(i + 1) * cols])
    }

    /// Returns the frequency of each Y value summed across all X values
    pub fn row_sums(&self) -> Vec<T> {
        self.iter_rows()
            .map(|r| kbn_sum(r.iter().copied()))
            .collect()
    }

    /// Returns the frequency of each X value summed across all Y values
    pub fn col_sums(&self) -> Vec<T> {
        (0..self.cols)
            .map(|j| kbn_sum(self.iter_rows().map(|r| r[j])))
            .collect()
    }

    /// Returns the total number of observations
    pub fn total(&self) -> T {
        kbn_sum(self.data.iter().copied())
    }
}

fn level_index<T>(levels: &[T]) -> HashMap<OrderedFloat<T>, usize, RandomState>
where
    T: Float + PrimitiveFloat,
{
    let mut index = HashMap::with_capacity_and_hasher(levels.len(), RandomState::default());
    for (pos, &level) in levels.iter().enumerate() {
        index.entry(OrderedFloat(level)).or_insert(pos);
    }
    index
}

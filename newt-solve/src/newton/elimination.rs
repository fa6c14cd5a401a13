use newt_core::Scalar;

/// Marker error: no admissible pivot in the incoming row.
#[derive(Debug)]
pub(super) struct SingularPivot;

/// Incremental Gauss-Jordan elimination with partial pivoting.
///
/// Rows of the linearized system are folded in one at a time, so the
/// full `n x (n + 1)` matrix is never materialized. The tableau keeps one
/// reduced fragment per folded row in a single flat buffer; each
/// fragment is `stride` entries long and lists the row's coefficients on
/// the still-unpivoted columns, unknowns in original order with the
/// augmented column last. Every fold removes one column from play, so
/// the stride shrinks by one and the fragments stay packed end to end.
///
/// Peak storage is `(n + 2)^2 / 4` scalars, reached halfway through the
/// elimination; the buffer is allocated once up front and the hot loop
/// never allocates.
pub(super) struct Elimination<T> {
    n: usize,
    /// Count of still-unpivoted columns, including the augmented one.
    stride: usize,
    /// Rows folded so far.
    step: usize,
    /// `pivots[col]` is the step at which unknown `col` was chosen as
    /// the pivot; it doubles as the reorder key when the tableau is
    /// unwound.
    pivots: Vec<Option<usize>>,
    /// Flattened store of reduced row fragments.
    store: Vec<T>,
    /// Per earlier step, the incoming row's coefficient on that step's
    /// pivot column.
    scratch: Vec<T>,
}

impl<T: Scalar> Elimination<T> {
    pub(super) fn new(n: usize) -> Self {
        Self {
            n,
            stride: n + 1,
            step: 0,
            pivots: vec![None; n],
            store: vec![T::ZERO; (n + 2) * (n + 2) / 4],
            scratch: vec![T::ZERO; n],
        }
    }

    /// Folds one augmented row (`n` coefficients plus the right-hand
    /// side) into the tableau.
    ///
    /// The buffer is borrowed as scratch space; its contents after the
    /// call are unspecified and the caller refills it for the next row.
    ///
    /// # Errors
    ///
    /// Returns [`SingularPivot`] if no unpivoted unknown column holds a
    /// candidate whose magnitude certainly exceeds zero.
    pub(super) fn fold(&mut self, row: &mut [T]) -> Result<(), SingularPivot> {
        debug_assert_eq!(row.len(), self.n + 1);
        debug_assert!(self.step < self.n);

        // Coefficients on already-pivoted columns, keyed by pivot step,
        // drive the forward substitution below.
        for (col, pivot) in self.pivots.iter().enumerate() {
            if let Some(step) = *pivot {
                self.scratch[step] = row[col];
            }
        }

        // Reduce the row against every earlier pivot, compacting the
        // surviving entries to the front of the buffer and tracking the
        // largest-magnitude pivot candidate as we go. The augmented
        // column is reduced too but never pivots. Strict `exceeds` means
        // the first of two equal candidates wins.
        let mut chosen: Option<(usize, usize)> = None;
        let mut largest = T::ZERO;
        let mut compact = 0;
        for col in 0..=self.n {
            if col < self.n && self.pivots[col].is_some() {
                continue;
            }
            let mut value = row[col];
            for h in 0..self.step {
                value = value - self.scratch[h] * self.store[h * self.stride + compact];
            }
            row[compact] = value;
            if col < self.n {
                let size = value.magnitude();
                if size.exceeds(largest) {
                    largest = size;
                    chosen = Some((col, compact));
                }
            }
            compact += 1;
        }

        // No candidate certainly larger than zero: the reduced column is
        // (or, under interval uncertainty, could be) exactly zero.
        let Some((pivot_col, pivot_pos)) = chosen else {
            return Err(SingularPivot);
        };

        let inverse = T::ONE / row[pivot_pos];
        self.pivots[pivot_col] = Some(self.step);
        for value in row.iter_mut().take(self.stride) {
            *value = inverse * *value;
        }

        // Eliminate the pivot column from every stored fragment, then
        // append the normalized row, dropping the pivot entry from each
        // fragment. Writes trail reads because fragments shrink by one.
        let mut out = 0;
        for h in 0..self.step {
            let base = h * self.stride;
            let coeff = self.store[base + pivot_pos];
            for i in 0..self.stride {
                if i != pivot_pos {
                    self.store[out] = self.store[base + i] - coeff * row[i];
                    out += 1;
                }
            }
        }
        for (i, &value) in row.iter().enumerate().take(self.stride) {
            if i != pivot_pos {
                self.store[out] = value;
                out += 1;
            }
        }

        self.stride -= 1;
        self.step += 1;
        Ok(())
    }

    /// Consumes the fully reduced tableau and returns the solution in
    /// original unknown order.
    ///
    /// Only valid after `n` successful folds, at which point each
    /// fragment has shrunk to the single solved value for its step.
    pub(super) fn into_solution(self) -> Vec<T> {
        debug_assert_eq!(self.step, self.n);
        debug_assert_eq!(self.stride, 1);

        let mut values = self.store;
        values.truncate(self.n);

        // After n folds every column has pivoted exactly once, so the
        // fallback arm never fires.
        let mut perm: Vec<usize> = self
            .pivots
            .iter()
            .enumerate()
            .map(|(col, pivot)| pivot.unwrap_or(col))
            .collect();

        // values[step] holds the unknown pivoted at that step. Follow the
        // permutation cycles in place to move each value back to its
        // original column; this is a cycle walk, not a sort.
        for col in 0..self.n {
            let mut target = perm[col];
            if target == col {
                continue;
            }
            let displaced = values[col];
            values[col] = values[target];
            let mut next = perm[target];
            while next != col {
                values[target] = values[next];
                perm[target] = target;
                target = next;
                next = perm[target];
            }
            values[target] = displaced;
            perm[target] = target;
        }

        values
    }
}

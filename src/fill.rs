use tracing::debug;

use crate::scale::{ScaledGrid, OUTSIDE, UNDETERMINED};

/// Marks every run of undetermined cells that touches an outside cell at
/// either end as outside. Anything else stops the run.
pub fn fill_row(row: &mut [char]) -> bool {
    let mut changed = false;
    let mut i = 0;

    while i < row.len() {
        if row[i] != UNDETERMINED {
            i += 1;
            continue;
        }

        let from = i;
        while i < row.len() && row[i] == UNDETERMINED {
            i += 1;
        }

        let touches = (from > 0 && row[from - 1] == OUTSIDE) || row.get(i) == Some(&OUTSIDE);
        if touches {
            row[from..i].fill(OUTSIDE);
            changed = true;
        }
    }

    changed
}

pub fn fill_rows(grid: &mut ScaledGrid) -> bool {
    grid.cells
        .iter_mut()
        .fold(false, |changed, row| fill_row(row) || changed)
}

/// Floods the outside marker inwards from the border, alternating passes
/// over the columns and the rows until neither finds anything to fill.
/// Returns the number of rounds it took.
pub fn flood_outside(grid: &mut ScaledGrid) -> usize {
    fill_rows(grid);

    let mut rounds = 0;
    loop {
        rounds += 1;

        *grid = grid.transpose();
        let by_column = fill_rows(grid);
        *grid = grid.transpose();
        let by_row = fill_rows(grid);

        if !by_column && !by_row {
            break;
        }
    }

    debug!(
        rounds,
        w = grid.width(),
        h = grid.height(),
        "flooded the outside"
    );
    rounds
}

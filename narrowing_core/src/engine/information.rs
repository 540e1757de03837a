//! Information score - how evenly a row splits the viable set.

use crate::error::EngineError;
use crate::model::AttributeGroup;

/// `1 - |num_true - n/2| / (n/2)` where `n` is the viable count.
///
/// 1.0 for an exact half split, 0.0 when every viable item agrees.
pub fn information(num_true: usize, viable_count: usize) -> Result<f64, EngineError> {
    if viable_count == 0 {
        return Err(EngineError::DegenerateSplit);
    }

    let half = viable_count as f64 / 2.0;
    Ok(1.0 - (num_true as f64 - half).abs() / half)
}

/// Best unchecked row of a group, if any row has positive information.
///
/// Rows scoring 0.0 are marked checked: the viable set only shrinks, so a
/// row every survivor agrees on stays uninformative. Ties keep the earlier row.
pub(crate) fn best_row(
    group: &AttributeGroup,
    viable: &[bool],
    viable_count: usize,
    checked: &mut [bool],
) -> Result<Option<(usize, f64)>, EngineError> {
    let mut best: Option<(usize, f64)> = None;

    for row in 0..group.row_count() {
        if checked[row] {
            continue;
        }

        let info = information(group.count_true(row, viable), viable_count)?;
        if info == 0.0 {
            checked[row] = true;
            continue;
        }

        if best.map_or(true, |(_, best_info)| info > best_info) {
            best = Some((row, info));
        }
    }

    Ok(best)
}

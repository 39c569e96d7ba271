use crate::garden::{FIELD_CELL_SIZE, FIELD_GRID_SIZE};
use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// How a raised bed's linear field index maps onto its 3x3 planting grid.
/// Set per bed in the garden manifest and fixed for the bed's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BedOrientation {
    Vertical,
    Horizontal,
}

/// Grid coordinates of a planting field within a raised bed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPosition {
    pub row: usize,
    pub col: usize,
}

/// Convert grid coordinates to the linear field index used by the manifest.
///
/// Precondition: `row` and `col` are in `[0, 2]`. Out-of-range coordinates
/// are a caller error; values are never clamped.
pub fn field_index(row: usize, col: usize, orientation: BedOrientation) -> usize {
    match orientation {
        BedOrientation::Vertical => (2 - row) * FIELD_GRID_SIZE + (2 - col),
        BedOrientation::Horizontal => (2 - col) * FIELD_GRID_SIZE + row,
    }
}

/// Convert a linear field index back to grid coordinates.
///
/// The vertical branch is intentionally NOT the algebraic inverse of
/// `field_index`: it transposes the base coordinates without mirroring them.
/// This matches the behaviour bed renderers were built against, so callers
/// placing visuals per index stay pixel-compatible. See DESIGN.md before
/// touching either branch.
///
/// Precondition: `position_index` is in `[0, 8]`.
pub fn field_coordinates(position_index: usize, orientation: BedOrientation) -> FieldPosition {
    let base_row = position_index / FIELD_GRID_SIZE;
    let base_col = position_index % FIELD_GRID_SIZE;
    match orientation {
        BedOrientation::Vertical => FieldPosition {
            row: base_col,
            col: base_row,
        },
        BedOrientation::Horizontal => FieldPosition {
            row: base_col,
            col: 2 - base_row,
        },
    }
}

/// Offset of a field cell centre from the raised bed origin, on the bed's
/// ground plane. The centre cell (row 1, col 1) sits at the bed origin.
pub fn field_world_offset(position_index: usize, orientation: BedOrientation) -> Vec3 {
    let position = field_coordinates(position_index, orientation);
    Vec3::new(
        (position.col as f32 - 1.0) * FIELD_CELL_SIZE,
        0.0,
        (position.row as f32 - 1.0) * FIELD_CELL_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn horizontal_round_trip_is_identity() {
        for i in 0..9 {
            let position = field_coordinates(i, BedOrientation::Horizontal);
            assert_eq!(
                field_index(position.row, position.col, BedOrientation::Horizontal),
                i
            );
        }
    }

    #[test]
    fn vertical_round_trip_matches_recorded_behaviour() {
        // The vertical branches are not inverses of each other; these are the
        // observed composition values the bed renderer depends on.
        let golden = [8, 5, 2, 7, 4, 1, 6, 3, 0];
        for i in 0..9 {
            let position = field_coordinates(i, BedOrientation::Vertical);
            assert_eq!(
                field_index(position.row, position.col, BedOrientation::Vertical),
                golden[i]
            );
        }
    }

    #[test]
    fn field_coordinates_is_a_bijection_per_orientation() {
        for orientation in [BedOrientation::Vertical, BedOrientation::Horizontal] {
            let positions: HashSet<FieldPosition> =
                (0..9).map(|i| field_coordinates(i, orientation)).collect();
            assert_eq!(positions.len(), 9);
            for position in &positions {
                assert!(position.row <= 2);
                assert!(position.col <= 2);
            }
        }
    }

    #[test]
    fn field_index_spot_values() {
        assert_eq!(field_index(0, 0, BedOrientation::Vertical), 8);
        assert_eq!(field_index(2, 2, BedOrientation::Vertical), 0);
        assert_eq!(field_index(0, 0, BedOrientation::Horizontal), 6);
        assert_eq!(field_index(2, 0, BedOrientation::Horizontal), 8);
        assert_eq!(field_index(1, 1, BedOrientation::Vertical), 4);
        assert_eq!(field_index(1, 1, BedOrientation::Horizontal), 4);
    }

    #[test]
    fn centre_field_sits_at_bed_origin() {
        for orientation in [BedOrientation::Vertical, BedOrientation::Horizontal] {
            let offset = field_world_offset(4, orientation);
            assert_eq!(offset, Vec3::ZERO);
        }
    }

    #[test]
    fn field_offsets_stay_within_bed_footprint() {
        for orientation in [BedOrientation::Vertical, BedOrientation::Horizontal] {
            for i in 0..9 {
                let offset = field_world_offset(i, orientation);
                assert!(offset.x.abs() <= FIELD_CELL_SIZE + f32::EPSILON);
                assert!(offset.z.abs() <= FIELD_CELL_SIZE + f32::EPSILON);
                assert_eq!(offset.y, 0.0);
            }
        }
    }
}

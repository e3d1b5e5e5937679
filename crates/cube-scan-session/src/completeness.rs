//! Sticker population check over six faces.

use crate::Face;
use cube_scan_core::{Color, ColorCounts};

/// Number of stickers of each color on a real cube.
pub const STICKERS_PER_COLOR: usize = 9;

/// Tally colors over every face that carries a grid.
pub fn color_counts(faces: &[Face]) -> ColorCounts {
    let mut counts = ColorCounts::default();
    for grid in faces.iter().filter_map(Face::colors) {
        counts.add_grid(grid);
    }
    counts
}

/// True iff there are exactly six validated faces and every palette color
/// appears exactly nine times over their 54 facelets.
///
/// This is a population count only: per-face uniformity and piece parity are
/// not checked.
pub fn is_cube_complete(faces: &[Face]) -> bool {
    if faces.len() != 6 {
        return false;
    }
    if !faces.iter().all(|f| f.is_validated() && f.colors().is_some()) {
        return false;
    }
    let counts = color_counts(faces);
    Color::ALL
        .iter()
        .all(|&c| counts.get(c) == STICKERS_PER_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_scan_core::{ColorGrid, FaceId};
    use cube_scan_face::FaceValidation;

    fn validated(id: FaceId, grid: ColorGrid) -> Face {
        Face::new(id).with_validation(&FaceValidation::accepted(grid), None)
    }

    fn solved_faces() -> Vec<Face> {
        FaceId::ALL
            .iter()
            .zip(Color::ALL)
            .map(|(&id, c)| validated(id, ColorGrid::uniform(c)))
            .collect()
    }

    #[test]
    fn six_uniform_distinct_faces_are_complete() {
        assert!(is_cube_complete(&solved_faces()));
    }

    #[test]
    fn five_faces_are_incomplete() {
        let faces = solved_faces();
        assert!(!is_cube_complete(&faces[..5]));
    }

    #[test]
    fn unvalidated_face_fails_closed() {
        let mut faces = solved_faces();
        faces[3] = faces[3].with_validation(&FaceValidation::rejected(0.1), None);
        assert!(!is_cube_complete(&faces));
    }

    #[test]
    fn wrong_counts_are_incomplete() {
        let mut faces = solved_faces();
        // Two white faces, no yellow.
        faces[5] = validated(FaceId::BOTTOM, ColorGrid::uniform(Color::White));
        assert!(!is_cube_complete(&faces));
        assert_eq!(color_counts(&faces).get(Color::White), 18);
        assert_eq!(color_counts(&faces).get(Color::Yellow), 0);
    }

    #[test]
    fn scrambled_faces_with_right_population_are_complete() {
        // Swap one sticker between the white and red faces: counts stay 9/9.
        let mut white = ColorGrid::uniform(Color::White);
        let mut red = ColorGrid::uniform(Color::Red);
        white.0[0][0] = Color::Red;
        red.0[2][2] = Color::White;

        let mut faces = solved_faces();
        faces[0] = validated(FaceId::FRONT, white);
        faces[1] = validated(FaceId::BACK, red);
        assert!(is_cube_complete(&faces));
    }

    #[test]
    fn one_sticker_off_is_incomplete() {
        let mut green = ColorGrid::uniform(Color::Green);
        green.0[1][1] = Color::Blue;
        let mut faces = solved_faces();
        faces[4] = validated(FaceId::TOP, green);
        assert!(!is_cube_complete(&faces));
    }
}

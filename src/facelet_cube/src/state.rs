use crate::{
    CubeError,
    face::{Face, Facelet, FaceletCoord, face_offset},
};
use log::debug;
use std::num::NonZeroUsize;

/// The full sticker layout of an N×N cube: six row-major blocks of N²
/// facelets, one per face in `Face` order.
///
/// A `CubeState` is never edited after construction. Rotations read one
/// state and build a fresh one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CubeState {
    size: NonZeroUsize,
    flat: Box<[Facelet]>,
}

/// Validate a cube size and return it with the facelet count it implies.
fn checked_dimensions(size: usize) -> Result<(NonZeroUsize, usize), CubeError> {
    let nonzero_size = NonZeroUsize::new(size).ok_or(CubeError::ZeroSize)?;
    let facelet_count = size
        .checked_mul(size)
        .and_then(|face_len| face_len.checked_mul(6))
        .filter(|&count| Facelet::try_from(count).is_ok())
        .ok_or(CubeError::SizeTooLarge { size })?;
    Ok((nonzero_size, facelet_count))
}

impl CubeState {
    /// Create the solved state, where every facelet sits at its own index.
    ///
    /// # Errors
    ///
    /// If `size` is zero or so large that 6·size² facelets cannot be
    /// numbered by `Facelet`.
    pub fn solved(size: usize) -> Result<Self, CubeError> {
        let (size, facelet_count) = checked_dimensions(size)?;
        debug!("Creating a solved {size}x{size} cube with {facelet_count} facelets");
        let flat = (0..).take(facelet_count).collect();
        Ok(CubeState { size, flat })
    }

    /// Create a state from a caller supplied flat sequence. Only the length
    /// is checked, so any labelling (sticker colours, for example) is
    /// accepted.
    ///
    /// # Errors
    ///
    /// If `size` is invalid (see `CubeState::solved`) or `flat` does not
    /// hold exactly 6·size² facelets.
    pub fn from_flat(size: usize, flat: impl Into<Box<[Facelet]>>) -> Result<Self, CubeError> {
        let (size, facelet_count) = checked_dimensions(size)?;
        let flat = flat.into();
        if flat.len() != facelet_count {
            return Err(CubeError::FlatLengthMismatch {
                expected: facelet_count,
                actual: flat.len(),
            });
        }
        debug!("Creating a {size}x{size} cube from {facelet_count} supplied facelets");
        Ok(CubeState { size, flat })
    }

    /// Assemble a state whose dimensions are already known to agree.
    pub(crate) fn from_parts(size: NonZeroUsize, flat: Box<[Facelet]>) -> Self {
        debug_assert_eq!(flat.len(), 6 * size.get() * size.get());
        CubeState { size, flat }
    }

    /// The side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size.get()
    }

    #[must_use]
    pub fn nonzero_size(&self) -> NonZeroUsize {
        self.size
    }

    /// All 6·N² facelets in block order.
    #[must_use]
    pub fn flat(&self) -> &[Facelet] {
        &self.flat
    }

    /// The N² facelets of `face`, row-major.
    #[must_use]
    pub fn face(&self, face: Face) -> &[Facelet] {
        let size = self.size();
        let start = face_offset(size, face);
        &self.flat[start..start + size * size]
    }

    /// The facelet at `coord`, or `None` if its row or column is off the
    /// face.
    #[must_use]
    pub fn facelet(&self, coord: FaceletCoord) -> Option<Facelet> {
        let size = self.size();
        (coord.row < size && coord.col < size).then(|| self.flat[coord.flat_index(size)])
    }

    /// Whether every facelet is back at its own index.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.flat
            .iter()
            .enumerate()
            .all(|(index, &facelet)| usize::try_from(facelet).is_ok_and(|f| f == index))
    }
}

impl AsRef<[Facelet]> for CubeState {
    fn as_ref(&self) -> &[Facelet] {
        &self.flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_is_ascending() {
        for size in 1..=6 {
            let state = CubeState::solved(size).unwrap();
            let expected = (0..u32::try_from(6 * size * size).unwrap()).collect::<Vec<_>>();
            assert_eq!(state.flat(), expected.as_slice());
            assert_eq!(state.size(), size);
            assert!(state.is_solved());
        }
    }

    #[test]
    fn test_zero_size() {
        assert_eq!(CubeState::solved(0), Err(CubeError::ZeroSize));
        assert_eq!(CubeState::from_flat(0, Vec::<Facelet>::new()), Err(CubeError::ZeroSize));
    }

    #[test]
    fn test_size_too_large() {
        assert_eq!(
            CubeState::solved(1 << 20),
            Err(CubeError::SizeTooLarge { size: 1 << 20 })
        );
        assert_eq!(
            CubeState::solved(usize::MAX),
            Err(CubeError::SizeTooLarge { size: usize::MAX })
        );
    }

    #[test]
    fn test_from_flat_length_mismatch() {
        assert_eq!(
            CubeState::from_flat(2, vec![0_u32; 23]),
            Err(CubeError::FlatLengthMismatch {
                expected: 24,
                actual: 23
            })
        );
        assert_eq!(
            CubeState::from_flat(3, vec![0_u32; 55]),
            Err(CubeError::FlatLengthMismatch {
                expected: 54,
                actual: 55
            })
        );
    }

    #[test]
    fn test_from_flat_accepts_any_labels() {
        let colours = (0..6).flat_map(|c| [c; 9]).collect::<Vec<Facelet>>();
        let state = CubeState::from_flat(3, colours).unwrap();
        assert!(!state.is_solved());
        assert_eq!(state.face(Face::R), &[2; 9]);
    }

    #[test]
    fn test_face_blocks() {
        let state = CubeState::solved(2).unwrap();
        assert_eq!(state.face(Face::U), &[0, 1, 2, 3]);
        assert_eq!(state.face(Face::F), &[16, 17, 18, 19]);
        assert_eq!(state.face(Face::B), &[20, 21, 22, 23]);
    }

    #[test]
    fn test_facelet_lookup() {
        let state = CubeState::solved(3).unwrap();
        assert_eq!(state.facelet(FaceletCoord::new(Face::D, 1, 2)), Some(14));
        assert_eq!(state.facelet(FaceletCoord::new(Face::D, 3, 0)), None);
        assert_eq!(state.facelet(FaceletCoord::new(Face::D, 0, 3)), None);
    }
}

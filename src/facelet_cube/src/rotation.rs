//! The state transition for a clockwise quarter turn of one outer face.

use crate::{
    edges::edge_rule,
    face::{Face, Facelet, FaceletCoord},
    state::CubeState,
};
use itertools::iproduct;
use log::trace;

/// The output of a turn while it is being built. Every cell starts
/// unwritten; cells that no part of the turn writes are copied from the
/// input when the turn is finished.
pub(crate) struct TurnBuffer<'a> {
    input: &'a CubeState,
    output: Box<[Option<Facelet>]>,
}

impl<'a> TurnBuffer<'a> {
    fn new(input: &'a CubeState) -> Self {
        TurnBuffer {
            input,
            output: vec![None; input.flat().len()].into_boxed_slice(),
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.input.size()
    }

    /// Move the input facelet at `src` to `dest` in the output.
    pub(crate) fn relocate(&mut self, dest: FaceletCoord, src: FaceletCoord) {
        let size = self.size();
        let facelet = self.input.flat()[src.flat_index(size)];
        let cell = &mut self.output[dest.flat_index(size)];
        debug_assert!(cell.is_none(), "{dest:?} written twice in one turn");
        *cell = Some(facelet);
    }

    fn finish(self) -> CubeState {
        let flat = self
            .output
            .iter()
            .zip(self.input.flat())
            .map(|(written, &untouched)| written.unwrap_or(untouched))
            .collect();
        CubeState::from_parts(self.input.nonzero_size(), flat)
    }
}

/// Turn the N×N grid of `face` 90° clockwise: output (r, c) takes input
/// (N−1−c, r).
fn rotate_face_grid(buffer: &mut TurnBuffer<'_>, face: Face) {
    let size = buffer.size();
    for (row, col) in iproduct!(0..size, 0..size) {
        buffer.relocate(
            FaceletCoord::new(face, row, col),
            FaceletCoord::new(face, size - 1 - col, row),
        );
    }
}

/// Turn `face` a quarter turn clockwise (as seen looking at that face) and
/// return the resulting state. `state` is left untouched.
#[must_use]
pub fn rotate(state: &CubeState, face: Face) -> CubeState {
    trace!("Turning {face} on a {0}x{0} cube", state.size());
    let mut buffer = TurnBuffer::new(state);
    rotate_face_grid(&mut buffer, face);
    edge_rule(face)(&mut buffer);
    buffer.finish()
}

/// Apply `quarter_turns` successive clockwise turns of `face`. Only the
/// count modulo 4 matters, so 2 is a half turn and 3 the inverse turn.
#[must_use]
pub fn rotate_times(state: &CubeState, face: Face, quarter_turns: u32) -> CubeState {
    let mut result = state.clone();
    for _ in 0..quarter_turns % 4 {
        result = rotate(&result, face);
    }
    result
}

//! The four-cycles of edge bands moved by each face turn.
//!
//! A band is the row or column of N facelets along one edge of a face.
//! Where two faces meet with opposite traversal directions the band is read
//! reversed, so that facelet `i` of the source lands on the facelet of the
//! destination that is physically next to it after the turn.

use crate::{
    face::{Face, FaceletCoord},
    rotation::TurnBuffer,
};
use log::trace;

#[derive(Debug, Clone, Copy)]
enum Line {
    Row(usize),
    Col(usize),
}

#[derive(Debug, Clone, Copy)]
struct Band {
    face: Face,
    line: Line,
    reversed: bool,
}

impl Band {
    fn row(face: Face, row: usize) -> Self {
        Band {
            face,
            line: Line::Row(row),
            reversed: false,
        }
    }

    fn col(face: Face, col: usize) -> Self {
        Band {
            face,
            line: Line::Col(col),
            reversed: false,
        }
    }

    fn reversed(self) -> Self {
        Band {
            reversed: !self.reversed,
            ..self
        }
    }

    /// The coordinate of the `i`th facelet along this band.
    fn coord(self, size: usize, i: usize) -> FaceletCoord {
        let along = if self.reversed { size - 1 - i } else { i };
        match self.line {
            Line::Row(row) => FaceletCoord::new(self.face, row, along),
            Line::Col(col) => FaceletCoord::new(self.face, along, col),
        }
    }
}

impl TurnBuffer<'_> {
    fn copy_band(&mut self, dest: Band, src: Band) {
        let size = self.size();
        for i in 0..size {
            self.relocate(dest.coord(size, i), src.coord(size, i));
        }
    }
}

pub(crate) type EdgeRule = fn(&mut TurnBuffer<'_>);

/// The band permutation performed by a turn of `face`.
pub(crate) fn edge_rule(face: Face) -> EdgeRule {
    match face {
        Face::U => rotate_u_edges,
        Face::D => rotate_d_edges,
        Face::R => rotate_r_edges,
        Face::L => rotate_l_edges,
        Face::F => rotate_f_edges,
        Face::B => rotate_b_edges,
    }
}

fn rotate_u_edges(buffer: &mut TurnBuffer<'_>) {
    trace!("Cycling the U bands");
    // F -> L -> B -> R -> F along row 0
    buffer.copy_band(Band::row(Face::L, 0), Band::row(Face::F, 0));
    buffer.copy_band(Band::row(Face::F, 0), Band::row(Face::R, 0));
    buffer.copy_band(Band::row(Face::R, 0), Band::row(Face::B, 0));
    buffer.copy_band(Band::row(Face::B, 0), Band::row(Face::L, 0));
}

fn rotate_d_edges(buffer: &mut TurnBuffer<'_>) {
    trace!("Cycling the D bands");
    let last = buffer.size() - 1;
    // L -> F -> R -> B -> L along the bottom row
    buffer.copy_band(Band::row(Face::F, last), Band::row(Face::L, last));
    buffer.copy_band(Band::row(Face::R, last), Band::row(Face::F, last));
    buffer.copy_band(Band::row(Face::B, last), Band::row(Face::R, last));
    buffer.copy_band(Band::row(Face::L, last), Band::row(Face::B, last));
}

fn rotate_r_edges(buffer: &mut TurnBuffer<'_>) {
    trace!("Cycling the R bands");
    let last = buffer.size() - 1;
    // Column 0 of B borders R and runs the other way to U, F and D
    buffer.copy_band(Band::col(Face::B, 0).reversed(), Band::col(Face::U, last));
    buffer.copy_band(Band::col(Face::D, last), Band::col(Face::B, 0).reversed());
    buffer.copy_band(Band::col(Face::F, last), Band::col(Face::D, last));
    buffer.copy_band(Band::col(Face::U, last), Band::col(Face::F, last));
}

fn rotate_l_edges(buffer: &mut TurnBuffer<'_>) {
    trace!("Cycling the L bands");
    let last = buffer.size() - 1;
    buffer.copy_band(Band::col(Face::F, 0), Band::col(Face::U, 0));
    buffer.copy_band(Band::col(Face::D, 0), Band::col(Face::F, 0));
    buffer.copy_band(Band::col(Face::B, last).reversed(), Band::col(Face::D, 0));
    buffer.copy_band(Band::col(Face::U, 0), Band::col(Face::B, last).reversed());
}

fn rotate_f_edges(buffer: &mut TurnBuffer<'_>) {
    trace!("Cycling the F bands");
    let last = buffer.size() - 1;
    // Going from a column to a row reverses the direction of travel
    buffer.copy_band(Band::col(Face::R, 0), Band::row(Face::U, last));
    buffer.copy_band(Band::row(Face::D, 0), Band::col(Face::R, 0).reversed());
    buffer.copy_band(Band::col(Face::L, last), Band::row(Face::D, 0));
    buffer.copy_band(Band::row(Face::U, last), Band::col(Face::L, last).reversed());
}

fn rotate_b_edges(buffer: &mut TurnBuffer<'_>) {
    trace!("Cycling the B bands");
    let last = buffer.size() - 1;
    buffer.copy_band(Band::col(Face::L, 0).reversed(), Band::row(Face::U, 0));
    buffer.copy_band(Band::row(Face::D, last), Band::col(Face::L, 0));
    buffer.copy_band(Band::col(Face::R, last).reversed(), Band::row(Face::D, last));
    buffer.copy_band(Band::row(Face::U, 0), Band::col(Face::R, last));
}

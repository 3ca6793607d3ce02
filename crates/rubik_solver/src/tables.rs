//! Case tables for the front layer and the middle layer.
//!
//! Each table is keyed by the cell where its piece currently is. Pieces on a
//! side face are often first turned into a standard cell on that face, then
//! the case for that cell finishes the job.

use rubik_core::Face::{B, D, F, L, R, U};
use rubik_core::Piece;

use crate::case::{Case, TablePhase};

/// Phases for the front face and middle layer, in the order they run.
pub const TABLE_PHASES: [TablePhase; 14] = [
    TOP_4, TOP_1, TOP_3, TOP_5, TOP_7, TOP_0, TOP_2, TOP_6, TOP_8, MID_4, MID_LEFT_3,
    MID_LEFT_5, MID_RIGHT_3, MID_RIGHT_5,
];

/// Front center.
pub const TOP_4: TablePhase = TablePhase {
    label: "top 4",
    piece: Piece::new(F, 4),
    cases: &[
        Case::face(L, "L>1"),
        Case::face(U, "Uv1"),
        Case::face(D, "D^1"),
        Case::face(R, "R<1"),
        Case::face(B, "B<1 B<1"),
    ],
};

/// Front edge on the left.
pub const TOP_1: TablePhase = TablePhase {
    label: "top 1",
    piece: Piece::new(F, 1),
    cases: &[
        Case::shared(&[L, U, D, R, B], 2, 1, "*2").then_same(0, 1),
        Case::shared(&[L, U, D, R, B], 1, 0, "*").then_same(0, 1),
        Case::shared(&[L, U, D, R, B], 1, 2, "*'").then_same(0, 1),
        Case::cell(L, 0, 1, "L^0 F<1 Lv0 F>1"),
        Case::cell(U, 0, 1, "Uv0"),
        Case::cell(D, 0, 1, "D^0"),
        Case::cell(R, 0, 1, "R2 R^2 F<1 R^2 F>1"),
        Case::cell(B, 0, 1, "B2 B^2 B^2"),
        Case::cell(F, 2, 1, "F2"),
        Case::cell(F, 1, 0, "F"),
        Case::cell(F, 1, 2, "F'"),
    ],
};

/// Front edge on top.
pub const TOP_3: TablePhase = TablePhase {
    label: "top 3",
    piece: Piece::new(F, 3),
    cases: &[
        Case::shared(&[U, D, R, B], 1, 2, "*2").then_same(1, 0),
        Case::shared(&[U, D, R, B], 0, 1, "*'").then_same(1, 0),
        Case::shared(&[U, D, R, B], 2, 1, "*").then_same(1, 0),
        Case::cell(U, 1, 0, "U<0 F^1 U>0 Fv1"),
        Case::cell(D, 1, 0, "D' F' D^2 F"),
        Case::cell(R, 1, 0, "R<0"),
        Case::cell(B, 1, 0, "B<0 B<0"),
        Case::cell(L, 1, 0, "L>0"),
        Case::cell(L, 1, 2, "F2 L>2 F2"),
        Case::cell(L, 0, 1, "F^1 L^0 Fv1"),
        Case::impossible(L, 2, 1),
        Case::cell(F, 1, 2, "Fv1 D<2 F^1 F2 Fv1 D>2 F^1 F2"),
        Case::cell(F, 2, 1, "F>1 F^1 R^2 Fv1 F<1"),
        Case::impossible(F, 0, 1),
    ],
};

/// Front edge on the bottom.
pub const TOP_5: TablePhase = TablePhase {
    label: "top 5",
    piece: Piece::new(F, 5),
    cases: &[
        Case::shared(&[D, R, B], 1, 0, "*2").then_same(1, 2),
        Case::shared(&[D, R, B], 2, 1, "*'").then_same(1, 2),
        Case::shared(&[D, R, B], 0, 1, "*").then_same(1, 2),
        Case::cell(D, 1, 2, "D>2 Dv1 D<2 D^1"),
        Case::cell(R, 1, 2, "R<2"),
        Case::cell(B, 1, 2, "B<2 B<2"),
        Case::cell(F, 2, 1, "Fv2 F F^2 F'"),
        Case::impossible(F, 0, 1),
        Case::impossible(F, 1, 0),
        Case::cell(L, 1, 0, "F2 L>0 F2"),
        Case::cell(L, 1, 2, "L>2"),
        Case::cell(L, 0, 1, "F' L F L>2"),
        Case::cell(L, 2, 1, "F L>0 F'"),
        Case::cell(U, 1, 0, "F F>1 U>0 F<1 F'"),
        Case::impossible(U, 1, 2),
        Case::cell(U, 0, 1, "F' Uv0 F"),
        Case::cell(U, 2, 1, "F Uv2 F'"),
    ],
};

/// Front edge on the right.
pub const TOP_7: TablePhase = TablePhase {
    label: "top 7",
    piece: Piece::new(F, 7),
    cases: &[
        Case::shared(&[R, B], 0, 1, "*2").then_same(2, 1),
        Case::shared(&[R, B], 1, 2, "*").then_same(2, 1),
        Case::shared(&[R, B], 1, 0, "*'").then_same(2, 1),
        Case::cell(R, 2, 1, "R^2 F>1 Rv2 F<1"),
        Case::cell(B, 2, 1, "B2 B>1 R^2 R^2 B<1"),
        Case::impossible(F, 0, 1),
        Case::impossible(F, 1, 0),
        Case::impossible(F, 1, 2),
        Case::impossible(L, 2, 1),
        Case::cell(L, 0, 1, "L^0 F2 F<1 Lv0 F>1 F2"),
        Case::cell(L, 1, 2, "F' L>2 F"),
        Case::cell(L, 1, 0, "F L>0 F'"),
        Case::cell(U, 2, 1, "Uv2"),
        Case::cell(U, 0, 1, "F U2 F' Fv2"),
        Case::impossible(U, 1, 2),
        Case::cell(U, 1, 0, "U>0 F F^1 U<0 Fv1 F'"),
        Case::cell(D, 2, 1, "D^2"),
        Case::cell(D, 0, 1, "F2 D^0 F2"),
        Case::cell(D, 1, 2, "F' D F F^2"),
        Case::impossible(D, 1, 0),
    ],
};

/// Front corner at top left.
pub const TOP_0: TablePhase = TablePhase {
    label: "top 0",
    piece: Piece::new(F, 0),
    cases: &[
        Case::cell(L, 2, 0, "L<0 L^0 L>0").then_same(0, 0),
        Case::cell(L, 2, 2, "L<2 Lv0 L>2").then_same(0, 2),
        Case::cell(L, 0, 0, "Lv0 L<0 L^0 F>0"),
        Case::cell(L, 0, 2, "U<0 U^0 U>0 U>0 Uv0"),
        Case::cell(U, 0, 2, "U^0 U<0 Uv0").then_same(0, 0),
        Case::cell(U, 2, 2, "U^2 U>0 Uv2").then_same(2, 0),
        Case::cell(U, 0, 0, "U>0 U^0 U<0 Uv0"),
        Case::cell(U, 2, 0, "L^0 L<0 L^0 L^0 L>0"),
        Case::cell(F, 0, 2, "L<2 Lv0 U^0 U>0 U>0 Uv0 L>2"),
        Case::cell(F, 2, 0, "F^2 F Fv0 U>0 U>0 F^0 F' Fv2"),
        Case::cell(F, 2, 2, "F^0 Fv2 U>0 U>0 Fv0 F^2"),
        Case::cell(D, 0, 0, "Dv0 D<2 D^0").then_same(0, 2),
        Case::cell(D, 2, 0, "Dv2 D>2 D^2").then_same(2, 2),
        Case::cell(D, 0, 2, "L<0 L^0 L>0"),
        Case::cell(D, 2, 2, "U^0 U<0 U<0 Uv0"),
        Case::cell(R, 0, 0, "R>0 R^2 R<0").then_same(2, 0),
        Case::cell(R, 0, 2, "R>2 Rv2 R<2").then_same(2, 2),
        Case::cell(R, 2, 0, "F^0 U<0 Fv0"),
        Case::cell(R, 2, 2, "F<0 U>0 U>0 F>0"),
        Case::cell(B, 0, 2, "B'").then_same(0, 0),
        Case::cell(B, 2, 0, "B").then_same(0, 0),
        Case::cell(B, 2, 2, "B2").then_same(0, 0),
        Case::cell(B, 0, 0, "F>0 Lv0 F<0 F<0 L^0 F>0"),
    ],
};

/// Front corner at bottom left.
pub const TOP_2: TablePhase = TablePhase {
    label: "top 2",
    piece: Piece::new(F, 2),
    cases: &[
        Case::cell(L, 2, 0, "L<0 L^0 L>0").then_same(0, 0),
        Case::cell(L, 2, 2, "L<2 Lv0 L>2").then_same(0, 2),
        Case::cell(L, 0, 0, "D<2 Dv0 D>2 D>2 D^0"),
        Case::cell(L, 0, 2, "L^0 L<2 Lv0 L>2"),
        Case::impossible(U, 0, 2),
        Case::cell(U, 2, 2, "U^2 U>0 Uv2").then_same(2, 0),
        Case::cell(U, 0, 0, "L<2 Lv0 L>2"),
        Case::cell(U, 2, 0, "Dv0 D<2 D<2 D^0"),
        Case::impossible(F, 0, 0),
        Case::cell(F, 2, 0, "F>0 F<2 L^0 L^0 F>2 F<0"),
        Case::cell(F, 2, 2, "Dv2 D>2 L<2 Lv0 Lv0 L>2 D^2"),
        Case::cell(D, 0, 0, "Dv0 D<2 D^0").then_same(0, 2),
        Case::cell(D, 2, 0, "Dv2 D>2 D^2").then_same(2, 2),
        Case::cell(D, 0, 2, "D>2 Dv0 D<2 D^0"),
        Case::cell(D, 2, 2, "Lv0 L<2 Lv0 Lv0 L>2"),
        Case::cell(R, 0, 0, "R>0 R^2 R<0").then_same(2, 0),
        Case::cell(R, 0, 2, "R>2 Rv2 R<2").then_same(2, 2),
        Case::cell(R, 2, 0, "L<2 Lv0 Lv0 L>2"),
        Case::cell(R, 2, 2, "Dv0 D<2 D^0"),
        Case::cell(B, 0, 0, "B").then_same(0, 2),
        Case::cell(B, 2, 0, "B2").then_same(0, 2),
        Case::cell(B, 2, 2, "B'").then_same(0, 2),
        Case::cell(B, 0, 2, "F>2 L^0 F<2 F<2 Lv0 F>2"),
    ],
};

/// Front corner at top right.
pub const TOP_6: TablePhase = TablePhase {
    label: "top 6",
    piece: Piece::new(F, 6),
    cases: &[
        Case::impossible(L, 2, 0),
        Case::impossible(L, 2, 2),
        Case::cell(L, 0, 0, "U^2 U>0 Uv2"),
        Case::cell(L, 0, 2, "R>0 Rv2 Rv2 R<0"),
        Case::impossible(U, 0, 2),
        Case::cell(U, 2, 2, "U^2 U>0 Uv2").then_same(2, 0),
        Case::cell(U, 0, 0, "R^2 R>0 Rv2 Rv2 R<0"),
        Case::cell(U, 2, 0, "U<0 U^2 U>0 Uv2"),
        Case::impossible(F, 0, 0),
        Case::impossible(F, 0, 2),
        Case::cell(F, 2, 2, "R>2 Rv2 U^2 U>0 U>0 Uv2 R<2"),
        Case::impossible(D, 0, 0),
        Case::cell(D, 2, 0, "Dv2 D>2 D^2").then_same(2, 2),
        Case::cell(D, 0, 2, "U^2 U>0 U>0 Uv2"),
        Case::cell(D, 2, 2, "R>0 R^2 R<0"),
        Case::cell(R, 0, 0, "R>0 R^2 R<0").then_same(2, 0),
        Case::cell(R, 0, 2, "R>2 Rv2 R<2").then_same(2, 2),
        Case::cell(R, 2, 0, "Rv2 R>0 R^2 R<0"),
        Case::cell(R, 2, 2, "U>0 U^2 U<0 U<0 Uv2"),
        Case::cell(B, 0, 2, "B'").then_same(0, 0),
        Case::cell(B, 2, 0, "B").then_same(0, 0),
        Case::cell(B, 2, 2, "B2").then_same(0, 0),
        Case::cell(B, 0, 0, "R>0 R^2 R<0 U^2 U>0 U>0 Uv2"),
    ],
};

/// Front corner at bottom right.
pub const TOP_8: TablePhase = TablePhase {
    label: "top 8",
    piece: Piece::new(F, 8),
    cases: &[
        Case::impossible(L, 2, 0),
        Case::impossible(L, 2, 2),
        Case::cell(L, 0, 0, "R>2 Rv2 Rv2 R<2"),
        Case::cell(L, 0, 2, "Dv2 D>2 D^2"),
        Case::impossible(U, 0, 2),
        Case::impossible(U, 2, 2),
        Case::cell(U, 0, 0, "Dv2 D<2 D<2 D^2"),
        Case::cell(U, 2, 0, "R>2 Rv2 R<2"),
        Case::impossible(F, 0, 0),
        Case::impossible(F, 0, 2),
        Case::impossible(F, 2, 0),
        Case::impossible(D, 0, 0),
        Case::cell(D, 2, 0, "Dv2 D>2 D^2").then_same(2, 2),
        Case::cell(D, 0, 2, "Rv2 R>2 R^2 R^2 R<2"),
        Case::cell(D, 2, 2, "D<2 Dv2 D>2 D^2"),
        Case::impossible(R, 0, 0),
        Case::cell(R, 0, 2, "R>2 Rv2 R<2").then_same(2, 2),
        Case::cell(R, 2, 0, "D>2 Dv2 D<2 D<2 D^2"),
        Case::cell(R, 2, 2, "R^2 R>2 Rv2 R<2"),
        Case::cell(B, 0, 0, "B").then_same(0, 2),
        Case::cell(B, 2, 0, "B2").then_same(0, 2),
        Case::cell(B, 2, 2, "B'").then_same(0, 2),
        Case::cell(B, 0, 2, "R>2 Rv2 R<2 Dv2 D>2 D>2 D^2"),
    ],
};

/// Left center.
pub const MID_4: TablePhase = TablePhase {
    label: "mid 4",
    piece: Piece::new(L, 4),
    cases: &[
        Case::face(U, "Lv1"),
        Case::face(D, "L^1"),
        Case::face(R, "L^1 L^1"),
        Case::face(F, ""),
        Case::face(B, ""),
    ],
};

/// Left edge on top.
pub const MID_LEFT_3: TablePhase = TablePhase {
    label: "mid left 3",
    piece: Piece::new(L, 3),
    cases: &[
        Case::impossible(F, 0, 1),
        Case::impossible(F, 1, 0),
        Case::impossible(F, 1, 2),
        Case::impossible(F, 2, 1),
        Case::cell(U, 0, 1, "Lv0 L<0 L^0 L>0 U>0 U^0 U<0 Uv0 Lv0 Lv0").then_at(L, 0, 1),
        Case::cell(U, 2, 1, "Rv2 R>0 R^2 R<0 U<0 U^2 U>0 Uv2").then_at(L, 0, 1),
        Case::cell(U, 1, 0, "Lv0").then_at(L, 0, 1),
        Case::impossible(U, 1, 2),
        Case::cell(D, 0, 1, "L^0 L<2 Lv0 L>2 D>2 Dv0 D<2 D^0 L^0 L^0").then_at(L, 0, 1),
        Case::cell(D, 2, 1, "R^2 R>2 Rv2 R<2 D<2 Dv2 D>2 D^2").then_at(L, 0, 1),
        Case::impossible(D, 1, 0),
        Case::cell(D, 1, 2, "L^0").then_at(L, 0, 1),
        Case::impossible(R, 0, 1),
        Case::cell(R, 2, 1, "Lv0 Lv0").then_at(L, 0, 1),
        Case::cell(R, 1, 0, "U<0 U^2 U>0 Uv2 Rv2 R>0 R^2 R<0 L^0").then_at(L, 0, 1),
        Case::cell(R, 1, 2, "D<2 Dv2 D>2 D^2 R^2 R>2 Rv2 R<2 Lv0").then_at(L, 0, 1),
        Case::cell(L, 1, 2, "D>2 Dv0 D<2 D^0 L^0 L<2 Lv0 L>2 Lv0").then_same(0, 1),
        Case::cell(L, 0, 1, "Lv0 L<0 L^0 L>0 U>0 U^0 U<0 Uv0"),
        Case::impossible(L, 2, 1),
        Case::cell(B, 0, 1, "B'").then_same(1, 0),
        Case::cell(B, 2, 1, "B").then_same(1, 0),
        Case::cell(B, 1, 2, "B2").then_same(1, 0),
        Case::cell(B, 1, 0, "U>0 U^0 U<0 Uv0 Lv0 L<0 L^0 L>0"),
    ],
};

/// Left edge on the bottom.
pub const MID_LEFT_5: TablePhase = TablePhase {
    label: "mid left 5",
    piece: Piece::new(L, 5),
    cases: &[
        Case::impossible(F, 0, 1),
        Case::impossible(F, 1, 0),
        Case::impossible(F, 1, 2),
        Case::impossible(F, 2, 1),
        Case::cell(U, 0, 1, "Lv0 L<0 L^0 L>0 U>0 U^0 U<0 Uv0 Lv0 Lv0").then_at(L, 0, 1),
        Case::cell(U, 2, 1, "Rv2 R>0 R^2 R<0 U<0 U^2 U>0 Uv2").then_at(L, 0, 1),
        Case::cell(U, 1, 0, "Lv0").then_at(L, 0, 1),
        Case::impossible(U, 1, 2),
        Case::cell(D, 0, 1, "L^0 L<2 Lv0 L>2 D>2 Dv0 D<2 D^0 L^0 L^0").then_at(L, 0, 1),
        Case::cell(D, 2, 1, "R^2 R>2 Rv2 R<2 D<2 Dv2 D>2 D^2").then_at(L, 0, 1),
        Case::impossible(D, 1, 0),
        Case::cell(D, 1, 2, "L^0").then_at(L, 0, 1),
        Case::impossible(R, 0, 1),
        Case::cell(R, 2, 1, "L^0 L^0").then_at(L, 0, 1),
        Case::cell(R, 1, 0, "U<0 U^2 U>0 Uv2 Rv2 R>0 R^2 R<0 L^0").then_at(L, 0, 1),
        Case::cell(R, 1, 2, "D<2 Dv2 D>2 D^2 R^2 R>2 Rv2 R<2 Lv0").then_at(L, 0, 1),
        Case::impossible(L, 1, 0),
        Case::cell(L, 0, 1, "L^0 L<2 Lv0 L>2 D>2 Dv0 D<2 D^0"),
        Case::impossible(L, 2, 1),
        Case::cell(B, 0, 1, "B").then_same(1, 2),
        Case::cell(B, 2, 1, "B'").then_same(1, 2),
        Case::cell(B, 1, 0, "B2").then_same(1, 2),
        Case::cell(B, 1, 2, "D>2 Dv0 D<2 D^0 L^0 L<2 Lv0 L>2"),
    ],
};

/// Right edge on top.
pub const MID_RIGHT_3: TablePhase = TablePhase {
    label: "mid right 3",
    piece: Piece::new(R, 3),
    cases: &[
        Case::impossible(F, 0, 1),
        Case::impossible(F, 1, 0),
        Case::impossible(F, 1, 2),
        Case::impossible(F, 2, 1),
        Case::cell(L, 0, 1, "L^0 L^0").then_at(R, 2, 1),
        Case::impossible(L, 2, 1),
        Case::impossible(L, 1, 0),
        Case::impossible(L, 1, 2),
        Case::impossible(U, 0, 1),
        Case::cell(U, 2, 1, "Rv2 R>0 R^2 R<0 U<0 U^2 U>0 Uv2 L^0 L^0").then_at(R, 2, 1),
        Case::cell(U, 1, 0, "L^0").then_at(R, 2, 1),
        Case::impossible(U, 1, 2),
        Case::impossible(D, 0, 1),
        Case::cell(D, 2, 1, "R^2 R>2 Rv2 R<2 D<2 Dv2 D>2 D^2 L^0 L^0").then_at(R, 2, 1),
        Case::impossible(D, 1, 0),
        Case::cell(D, 1, 2, "Lv0").then_at(R, 2, 1),
        Case::impossible(R, 0, 1),
        Case::cell(R, 1, 2, "D<2 Dv2 D>2 D^2 R^2 R>2 Rv2 R<2 L^0").then_same(2, 1),
        Case::cell(R, 2, 1, "Rv2 R>0 R^2 R<0 U<0 U^2 U>0 Uv2"),
        Case::cell(B, 0, 1, "B'").then_same(1, 0),
        Case::cell(B, 2, 1, "B").then_same(1, 0),
        Case::cell(B, 1, 2, "B2").then_same(1, 0),
        Case::cell(B, 1, 0, "U<0 U^2 U>0 Uv2 Rv2 R>0 R^2 R<0"),
    ],
};

/// Right edge on the bottom.
pub const MID_RIGHT_5: TablePhase = TablePhase {
    label: "mid right 5",
    piece: Piece::new(R, 5),
    cases: &[
        Case::impossible(F, 0, 1),
        Case::impossible(F, 1, 0),
        Case::impossible(F, 1, 2),
        Case::impossible(F, 2, 1),
        Case::cell(L, 0, 1, "L^0 L^0").then_at(R, 2, 1),
        Case::impossible(L, 2, 1),
        Case::impossible(L, 1, 0),
        Case::impossible(L, 1, 2),
        Case::cell(U, 1, 0, "L^0").then_at(R, 2, 1),
        Case::impossible(U, 0, 1),
        Case::impossible(U, 2, 1),
        Case::impossible(U, 1, 2),
        Case::cell(D, 2, 1, "R^2 R>2 Rv2 R<2 D<2 Dv2 D>2 D^2 L^0 L^0").then_at(R, 2, 1),
        Case::cell(D, 1, 2, "Lv0").then_at(R, 2, 1),
        Case::impossible(D, 0, 1),
        Case::impossible(D, 1, 0),
        Case::impossible(R, 0, 1),
        Case::impossible(R, 1, 0),
        Case::cell(R, 2, 1, "R^2 R>2 Rv2 R<2 D<2 Dv2 D>2 D^2"),
        Case::cell(B, 0, 1, "B").then_same(1, 2),
        Case::cell(B, 2, 1, "B'").then_same(1, 2),
        Case::cell(B, 1, 0, "B2").then_same(1, 2),
        Case::cell(B, 1, 2, "D<2 Dv2 D>2 D^2 R^2 R>2 Rv2 R<2"),
    ],
};

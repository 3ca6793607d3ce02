//! Static face adjacency graph.

use crate::{Direction, Face, Rotation};

lazy_static! {
    /// Adjacency graph of the standard cube.
    pub static ref TOPOLOGY: Topology = Topology::standard();
}

/// Directed edge from one face to its neighbor across a border.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Face on the other side of the border.
    pub face: Face,
    /// Rotation of the neighbor's axes relative to the origin face's axes.
    pub rotation: Rotation,
}
impl Edge {
    const fn new(face: Face, degrees: i16) -> Self {
        Self {
            face,
            rotation: Rotation::from_degrees(degrees),
        }
    }
}

/// The four borders of one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct FaceLinks {
    pub left: Edge,
    pub right: Edge,
    pub down: Edge,
    pub up: Edge,
}
impl FaceLinks {
    /// Returns the edge in a direction.
    pub fn get(&self, direction: Direction) -> Edge {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Up => self.up,
        }
    }
}

/// Which face lies across each border of each face, and at what relative
/// rotation.
///
/// Built once and never mutated. Both the coordinate resolver and the move
/// engine read their geometry from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    links: [FaceLinks; Face::COUNT],
}
impl Topology {
    /// Constructs the adjacency graph of the standard cube, with the front
    /// face's neighbors all unrotated.
    pub fn standard() -> Self {
        use Face::*;

        let links = |left, right, down, up| FaceLinks {
            left,
            right,
            down,
            up,
        };
        Self {
            links: [
                // L
                links(Edge::new(B, 0), Edge::new(F, 0), Edge::new(D, 90), Edge::new(U, -90)),
                // U
                links(Edge::new(L, 90), Edge::new(R, -90), Edge::new(F, 0), Edge::new(B, 180)),
                // F
                links(Edge::new(L, 0), Edge::new(R, 0), Edge::new(D, 0), Edge::new(U, 0)),
                // D
                links(Edge::new(L, -90), Edge::new(R, 90), Edge::new(B, 180), Edge::new(F, 0)),
                // R
                links(Edge::new(F, 0), Edge::new(B, 0), Edge::new(D, -90), Edge::new(U, 90)),
                // B
                links(Edge::new(R, 0), Edge::new(L, 0), Edge::new(D, 180), Edge::new(U, 180)),
            ],
        }
    }

    /// Returns the borders of a face.
    pub fn links(&self, face: Face) -> &FaceLinks {
        &self.links[face.index()]
    }
    /// Returns the edge leaving `face` in `direction`.
    pub fn edge(&self, face: Face, direction: Direction) -> Edge {
        self.links(face).get(direction)
    }

    /// Returns the four neighbors of a face in the order left, right, down,
    /// up.
    pub fn neighbors(&self, face: Face) -> [Face; 4] {
        let l = self.links(face);
        [l.left.face, l.right.face, l.down.face, l.up.face]
    }
    /// Returns the face opposite `face`, which is the only face that is not
    /// `face` and does not border it.
    pub fn opposite(&self, face: Face) -> Face {
        let neighbors = self.neighbors(face);
        Face::iter()
            .find(|&f| f != face && !neighbors.contains(&f))
            .unwrap_or(face)
    }
    /// Returns the direction of the border whose face is `neighbor`, if
    /// `neighbor` borders `face`.
    pub fn direction_to(&self, face: Face, neighbor: Face) -> Option<Direction> {
        Direction::iter().find(|&d| self.edge(face, d).face == neighbor)
    }

    /// Returns the first border, in the order left, right, down, up, whose
    /// neighbor has the same orientation as `face`. Face twists shift the
    /// ring of stickers addressed through this neighbor.
    pub fn aligned_neighbor(&self, face: Face) -> Option<(Direction, Edge)> {
        [Direction::Left, Direction::Right, Direction::Down, Direction::Up]
            .into_iter()
            .map(|d| (d, self.edge(face, d)))
            .find(|(_, edge)| edge.rotation == Rotation::ZERO)
    }
}

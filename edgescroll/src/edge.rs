use std::fmt;

/// One boundary of horizontally scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 2] = [Edge::Left, Edge::Right];

    /// Sign of a scroll that moves toward this edge.
    pub fn direction(self) -> f32 {
        match self {
            Edge::Left => -1.0,
            Edge::Right => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-edge state machine.
///
/// `AtEdge` moves to `AwayFromEdge` when the sentinel of that edge is
/// reported as not fully visible, and back when it is reported visible again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgeStatus {
    /// Content assumed not to overflow until an observer report says otherwise.
    #[default]
    AtEdge,
    AwayFromEdge,
}

impl EdgeStatus {
    pub fn from_intersecting(intersecting: bool) -> Self {
        if intersecting {
            EdgeStatus::AtEdge
        } else {
            EdgeStatus::AwayFromEdge
        }
    }

    pub fn is_at_edge(self) -> bool {
        self == EdgeStatus::AtEdge
    }
}

/// Whether each edge of the content has been reached.
///
/// Only the synchronizer writes this; everything else reads a copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeState {
    left: EdgeStatus,
    right: EdgeStatus,
}

impl EdgeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_left_edge(&self) -> bool {
        self.left.is_at_edge()
    }

    pub fn at_right_edge(&self) -> bool {
        self.right.is_at_edge()
    }

    pub fn at_edge(&self, edge: Edge) -> bool {
        self.status(edge).is_at_edge()
    }

    pub fn status(&self, edge: Edge) -> EdgeStatus {
        match edge {
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    /// Returns true if the status changed.
    pub(crate) fn set(&mut self, edge: Edge, status: EdgeStatus) -> bool {
        let slot = match edge {
            Edge::Left => &mut self.left,
            Edge::Right => &mut self.right,
        };
        if *slot == status {
            return false;
        }
        *slot = status;
        true
    }
}

/// Emitted to subscribers when an edge flag flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeChange {
    pub edge: Edge,
    pub at_edge: bool,
}

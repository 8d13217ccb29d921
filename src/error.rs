use std::{io, path::PathBuf};

use thiserror::Error;

use crate::dir::{Dir, Pos};

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("grid is empty")]
    Empty,

    #[error("row {row} is {found} wide, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile {c:?} at {at}")]
    UnknownTile { c: char, at: Pos },

    #[error("no start tile")]
    MissingStart,

    #[error("more than one start tile, at {0} and {1}")]
    MultipleStarts(Pos, Pos),

    #[error("no closed loop passes through the start tile")]
    NoLoop,

    #[error("start tile connects to {0} loop neighbours, expected 2")]
    StartDegree(usize),

    #[error("the two traces from the start disagree")]
    TracesDisagree,

    #[error("start ports {0:?} and {1:?} do not form a pipe")]
    StartPorts(Dir, Dir),
}

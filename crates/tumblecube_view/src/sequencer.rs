use tumblecube_core::{FaceMove, MoveSequence};

/// Cycles through a fixed script of face turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSequencer {
    script: MoveSequence,
    /// Index of the next move to play.
    index: usize,
}
impl MoveSequencer {
    /// Constructs a sequencer that starts at the first move of `script`.
    pub fn new(script: MoveSequence) -> Self {
        Self { script, index: 0 }
    }

    /// Returns the index of the next move to play.
    pub fn index(&self) -> usize {
        self.index
    }
    /// Returns the next move without advancing.
    pub fn peek(&self) -> FaceMove {
        self.script.get_cyclic(self.index)
    }

    /// Returns the next move and advances the index, wrapping at the end of
    /// the script.
    pub fn next_move(&mut self) -> FaceMove {
        let mv = self.peek();
        self.index = (self.index + 1) % self.script.len();
        mv
    }
}

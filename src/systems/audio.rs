/// Sound cues the host plays on our behalf
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Sinking,
}

impl AudioCue {
    /// Identifier the host maps to an audio element
    pub fn id(self) -> &'static str {
        match self {
            AudioCue::Sinking => "sinking",
        }
    }
}

/// Holds at most one pending cue until the host drains it.
///
/// Repeated pushes of the same cue before a drain collapse into one play.
#[derive(Debug, Default)]
pub struct CueQueue {
    pending: Option<AudioCue>,
}

impl CueQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the cue already waiting, if any
    pub fn push(&mut self, cue: AudioCue) {
        self.pending.get_or_insert(cue);
    }

    pub fn take(&mut self) -> Option<AudioCue> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

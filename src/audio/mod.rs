//! Ambient audio collaborator.
//!
//! The engine tells the soundtrack to start when a game is dealt and never
//! hears back. Playback failures are the collaborator's business; they
//! cannot reach or affect game state.

/// Something that can start ambient playback.
pub trait AmbientAudio {
    /// Begin (or keep) playing. Fire-and-forget.
    fn play(&mut self);
}

/// Plays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silence;

impl AmbientAudio for Silence {
    fn play(&mut self) {}
}

impl<F: FnMut()> AmbientAudio for F {
    fn play(&mut self) {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_audio() {
        let mut plays = 0;
        {
            let mut audio = || plays += 1;
            audio.play();
            audio.play();
        }
        assert_eq!(plays, 2);
    }

    #[test]
    fn test_silence() {
        let mut audio = Silence;
        audio.play();
    }
}

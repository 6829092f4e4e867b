//! Voices offered by the app and the canned lines shown when previewing them.

/// How long a preview button stays in its playing state.
pub const PREVIEW_RESET_MS: u32 = 3000;
pub const PREVIEW_LABEL: &str = "Preview Voice";
pub const PLAYING_LABEL: &str = "Playing...";
const FALLBACK_SAMPLE: &str = "Sample voice preview";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Voice {
    pub name: &'static str,
    pub description: &'static str,
    pub sample: &'static str,
}

pub const VOICES: &[Voice] = &[
    Voice {
        name: "Lisa",
        description: "American Female",
        sample: "Hello, this is Lisa speaking with a clear American accent.",
    },
    Voice {
        name: "Michael",
        description: "System Male",
        sample: "This is Michael, demonstrating a deep authoritative voice.",
    },
    Voice {
        name: "Allison",
        description: "Canadian Female",
        sample: "Hi there! This is Allison with a warm Canadian accent.",
    },
    Voice {
        name: "David",
        description: "Deep Male",
        sample: "This is David, showcasing a rich resonant male voice.",
    },
    Voice {
        name: "Emma",
        description: "System Female",
        sample: "Hello, I'm Emma with a versatile and clear voice.",
    },
    Voice {
        name: "Sarah",
        description: "British Female",
        sample: "Good day! This is Sarah with an elegant British accent.",
    },
];

pub fn find(name: &str) -> Option<&'static Voice> {
    VOICES.iter().find(|v| v.name == name)
}

pub fn preview_message(name: &str) -> String {
    let sample = find(name).map(|v| v.sample).unwrap_or(FALLBACK_SAMPLE);
    format!("Playing {}: \"{}\"", name, sample)
}

/// Which preview button is currently "playing".
///
/// Each preview bumps the generation so the reset timer of an earlier
/// preview cannot clear a later one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewState {
    playing: Option<&'static str>,
    generation: u64,
}

impl PreviewState {
    pub fn play(&self, name: &str) -> (Self, u64) {
        let generation = self.generation + 1;
        let playing = find(name).map(|v| v.name);
        (Self { playing, generation }, generation)
    }

    pub fn reset(&self, generation: u64) -> Option<Self> {
        if generation != self.generation || self.playing.is_none() {
            return None;
        }
        Some(Self {
            playing: None,
            generation: self.generation,
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_playing(&self, name: &str) -> bool {
        self.playing == Some(name)
    }

    pub fn label(&self, name: &str) -> &'static str {
        if self.is_playing(name) {
            PLAYING_LABEL
        } else {
            PREVIEW_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_voice_message() {
        assert_eq!(
            preview_message("Sarah"),
            "Playing Sarah: \"Good day! This is Sarah with an elegant British accent.\""
        );
    }

    #[test]
    fn unknown_voice_falls_back() {
        assert_eq!(preview_message("Zed"), "Playing Zed: \"Sample voice preview\"");
    }

    #[test]
    fn only_one_voice_plays() {
        let (state, _) = PreviewState::default().play("Lisa");
        let (state, _) = state.play("Emma");
        assert!(state.is_playing("Emma"));
        assert!(!state.is_playing("Lisa"));
        assert_eq!(state.label("Lisa"), PREVIEW_LABEL);
        assert_eq!(state.label("Emma"), PLAYING_LABEL);
    }

    #[test]
    fn stale_reset_is_ignored() {
        let (state, first) = PreviewState::default().play("Lisa");
        let (state, second) = state.play("David");
        assert!(state.reset(first).is_none());

        let state = state.reset(second).unwrap();
        assert!(!state.is_playing("David"));
        assert!(state.reset(second).is_none());
    }
}

use std::cmp::Ordering;

/// A note as stored in a chart, timed in beats.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ChartNote {
    /// Start of the note in beats.
    pub beat: f32,
    /// Length of the note in beats.
    pub length: f32,
    pub pitch_start: f32,
    /// Signed pitch displacement from start to end.
    pub pitch_delta: f32,
    pub pitch_end: f32,
    /// Whether the note directly continues the previous note.
    pub is_slider: bool,
}

impl ChartNote {
    /// End of the note in beats.
    #[inline]
    pub fn end_beat(&self) -> f32 {
        self.beat + self.length
    }

    /// Convert the note into seconds for the given tempo.
    #[inline]
    pub fn to_note(&self, bpm: f32) -> Note {
        Note {
            position: beat_to_seconds(self.beat, bpm),
            length: beat_to_seconds(self.length, bpm),
            pitch_start: self.pitch_start,
            pitch_delta: self.pitch_delta,
            pitch_end: self.pitch_end,
            is_slider: self.is_slider,
        }
    }
}

impl PartialOrd for ChartNote {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.beat.partial_cmp(&other.beat)
    }
}

/// A note timed in seconds, i.e. with the playback speed already applied.
///
/// This is the input of the strain calculation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Note {
    /// Start of the note in seconds.
    pub position: f32,
    /// Duration of the note in seconds.
    pub length: f32,
    pub pitch_start: f32,
    /// Signed pitch displacement from start to end.
    pub pitch_delta: f32,
    pub pitch_end: f32,
    /// Whether the note directly continues the previous note.
    pub is_slider: bool,
}

impl Note {
    /// End of the note in seconds.
    #[inline]
    pub fn end(&self) -> f32 {
        self.position + self.length
    }
}

#[inline]
pub(crate) fn beat_to_seconds(beat: f32, bpm: f32) -> f32 {
    60.0 / bpm * beat
}

/// Whether a note starting `gap` beats after the end of the previous one continues it.
#[inline]
pub(crate) fn is_slider_gap(gap: f32) -> bool {
    (gap * 1000.0).round() / 1000.0 <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_conversion() {
        let note = ChartNote {
            beat: 4.0,
            length: 2.0,
            pitch_start: 10.0,
            pitch_delta: -5.0,
            pitch_end: 5.0,
            is_slider: true,
        };

        let converted = note.to_note(120.0);

        assert!((converted.position - 2.0).abs() < f32::EPSILON);
        assert!((converted.length - 1.0).abs() < f32::EPSILON);
        assert!((converted.end() - 3.0).abs() < f32::EPSILON);
        assert!(converted.is_slider);
        assert!((converted.pitch_delta + 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn slider_gaps() {
        assert!(is_slider_gap(0.0));
        assert!(is_slider_gap(-0.5));
        assert!(is_slider_gap(0.0004));
        assert!(!is_slider_gap(0.0006));
        assert!(!is_slider_gap(0.25));
    }
}

mod error;
mod note;
mod reader;

pub use error::{ParseError, ParseResult};
pub use note::{ChartNote, Note};

use std::cmp::Ordering;

#[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
use std::{fs::File, io::Read, path::Path};

use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::{ChartPerformances, SpeedTier};

/// A chart in the `.tmb` JSON format.
///
/// Notes are sorted by their beat.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chart {
    pub name: String,
    pub short_name: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    pub track_ref: String,
    pub year: i32,
    pub difficulty: i32,
    /// Beats per minute at 1.0x speed.
    pub tempo: f32,
    pub timesig: i32,
    pub note_spacing: f32,
    pub endpoint: f32,
    pub notes: Vec<ChartNote>,
    /// Lowercase hex SHA-256 of the bytes the chart was decoded from.
    pub hash: String,
}

#[derive(Deserialize)]
struct RawChart {
    #[serde(default)]
    name: String,
    #[serde(default, rename = "shortName")]
    short_name: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    genre: String,
    #[serde(default)]
    description: String,
    #[serde(default, rename = "trackRef")]
    track_ref: String,
    #[serde(default)]
    year: i32,
    #[serde(default)]
    difficulty: i32,
    tempo: f32,
    #[serde(default)]
    timesig: i32,
    #[serde(default)]
    savednotespacing: f32,
    #[serde(default)]
    endpoint: f32,
    notes: Vec<Vec<f32>>,
}

impl TryFrom<RawChart> for Chart {
    type Error = ParseError;

    fn try_from(raw: RawChart) -> ParseResult<Self> {
        if !(raw.tempo.is_finite() && raw.tempo > 0.0) {
            return Err(ParseError::InvalidTempo);
        }

        let mut notes = raw
            .notes
            .iter()
            .enumerate()
            .map(|(idx, values)| match values.as_slice() {
                &[beat, length, pitch_start, pitch_delta, pitch_end]
                    if values.iter().all(|value| value.is_finite()) =>
                {
                    Ok(ChartNote {
                        beat,
                        length,
                        pitch_start,
                        pitch_delta,
                        pitch_end,
                        is_slider: false,
                    })
                }
                _ => Err(ParseError::InvalidNote { idx }),
            })
            .collect::<ParseResult<Vec<_>>>()?;

        // stable so that notes on the same beat keep their order
        notes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        for i in 1..notes.len() {
            let gap = notes[i].beat - notes[i - 1].end_beat();
            notes[i].is_slider = note::is_slider_gap(gap);
        }

        Ok(Self {
            name: raw.name,
            short_name: raw.short_name,
            author: raw.author,
            genre: raw.genre,
            description: raw.description,
            track_ref: raw.track_ref,
            year: raw.year,
            difficulty: raw.difficulty,
            tempo: raw.tempo,
            timesig: raw.timesig,
            note_spacing: raw.savednotespacing,
            endpoint: raw.endpoint,
            notes,
            hash: String::new(),
        })
    }
}

impl Chart {
    /// Parse a chart from a JSON string.
    pub fn from_json(json: &str) -> ParseResult<Self> {
        Self::from_slice(json.as_bytes())
    }

    /// Parse a chart from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> ParseResult<Self> {
        let res = serde_json::from_slice::<RawChart>(bytes)
            .map_err(ParseError::from)
            .and_then(Self::try_from)
            .map(|chart| Self {
                hash: hash(bytes),
                ..chart
            });

        #[cfg(feature = "tracing")]
        if let Err(ref err) = res {
            tracing::error!("failed to decode chart: {}", err);
        }

        res
    }

    /// Parse a chart by reading all of `input`.
    #[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
    pub fn parse<R: Read>(input: R) -> ParseResult<Self> {
        let bytes = reader::read_all(input)?;

        Self::from_slice(&bytes)
    }

    /// Parse a chart by reading all of `input`.
    #[cfg(feature = "async_tokio")]
    pub async fn parse<R: tokio::io::AsyncRead + Unpin>(input: R) -> ParseResult<Self> {
        let bytes = reader::read_all(input).await?;

        Self::from_slice(&bytes)
    }

    /// Parse a chart by reading all of `input`.
    #[cfg(feature = "async_std")]
    pub async fn parse<R: async_std::io::Read + Unpin>(input: R) -> ParseResult<Self> {
        let bytes = reader::read_all(input).await?;

        Self::from_slice(&bytes)
    }

    /// Read and parse the chart file at the given path.
    #[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
    pub fn from_path<P: AsRef<Path>>(path: P) -> ParseResult<Self> {
        Self::parse(File::open(path)?)
    }

    /// The amount of notes.
    #[inline]
    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// The amount of notes that continue the previous note.
    pub fn slider_count(&self) -> usize {
        self.notes.iter().filter(|note| note.is_slider).count()
    }

    /// All notes timed in seconds for the given speed.
    pub fn notes(&self, tier: SpeedTier) -> Vec<Note> {
        let bpm = self.tempo * tier.speed();

        self.notes.iter().map(|note| note.to_note(bpm)).collect()
    }

    /// Calculate strains, analytics, and ratings for all speed tiers.
    pub fn performances(&self) -> ChartPerformances {
        let mut performances = ChartPerformances::new(self.note_count(), self.slider_count());
        performances.calculate_all(|tier| self.notes(tier));

        performances
    }
}

/// Lowercase hex SHA-256 digest of raw chart bytes.
pub fn hash(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

use std::f32::consts::E;

use crate::{data_vector::DataVector, Note};

/// Decay weights of the previous notes, closest note first.
pub const WEIGHTS: [f32; 44] = [
    1.0000, 0.8500, 0.7225, 0.6141, 0.5220, 0.4437, 0.3771, 0.3205, //
    0.2724, 0.2316, 0.1969, 0.1674, 0.1423, 0.1210, 0.1029, 0.0874, //
    0.0743, 0.0632, 0.0538, 0.0457, 0.0389, 0.0331, 0.0281, 0.0240, //
    0.0204, 0.0174, 0.0148, 0.0126, 0.0107, 0.0091, 0.0078, 0.0066, //
    0.0056, 0.0048, 0.0041, 0.0035, 0.0029, 0.0025, 0.0021, 0.0018, //
    0.0015, 0.0013, 0.0011, 0.0009,
];

/// Pitch delta up to which slides are considered easy to cheese.
pub const CHEESABLE_THRESHOLD: f32 = 34.375;

const MAX_LOOKBACK: usize = 42;
const MAX_DIST: f32 = 4.0;

const AIM_DIV: f32 = 175.0;
const TAP_DIV: f32 = 225.0;
const ACC_DIV: f32 = 190.0;

const AIM_END: f32 = 900.0;
const TAP_END: f32 = 9.0;
const ACC_END: f32 = 1000.0;
const MUL_END: f32 = 50.0;

const COMPRESSION: f32 = -50.0;

/// Aim and tap strains of every note, in chart order.
///
/// Suitable to plot the difficulty of a chart over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Strains {
    /// Aim strains, including the slide accuracy portion.
    pub aim: Vec<DataVector>,
    /// Tap strains.
    pub tap: Vec<DataVector>,
}

impl Strains {
    /// The amount of notes that were processed.
    #[inline]
    pub fn len(&self) -> usize {
        self.aim.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.aim.is_empty()
    }
}

/// Run the forward scan over `notes` whose positions are already scaled to a speed.
pub fn strains(notes: &[Note]) -> Strains {
    let mut scan = StrainScan::new(notes);

    let mut strains = Strains {
        aim: Vec::with_capacity(notes.len()),
        tap: Vec::with_capacity(notes.len()),
    };

    for i in 0..notes.len() {
        let (aim, tap) = scan.process(i);
        strains.aim.push(aim);
        strains.tap.push(tap);
    }

    strains
}

/// A run of slide notes joined into the note before them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct SliderMerge {
    /// Index of the earliest note of the merged run.
    pub(crate) prev: usize,
    pub(crate) length_sum: f32,
    pub(crate) delta_slide_sum: f32,
}

impl SliderMerge {
    /// Walk backwards from `notes[start]` for as long as notes are slides.
    pub(crate) fn new(notes: &[Note], start: usize) -> Self {
        let first = &notes[start];

        let mut delta_slide_sum = first.pitch_delta.abs();

        if delta_slide_sum <= CHEESABLE_THRESHOLD {
            delta_slide_sum *= 0.45;
        }

        let mut merge = Self {
            prev: start,
            length_sum: first.length,
            delta_slide_sum,
        };

        let mut slider_count = 0_u32;

        while notes[merge.prev].is_slider && merge.prev > 0 {
            merge.prev -= 1;
            let prev = &notes[merge.prev];
            let mut delta_slide = prev.pitch_delta.abs();

            if delta_slide == 0.0 {
                merge.length_sum += prev.length.sqrt();
            } else {
                merge.length_sum += prev.length;

                if merge.delta_slide_sum <= CHEESABLE_THRESHOLD {
                    delta_slide *= 0.35;
                } else {
                    slider_count += 1;
                }

                merge.delta_slide_sum += delta_slide * (5.5 * slider_count as f32);
            }
        }

        merge
    }
}

struct StrainScan<'n> {
    notes: &'n [Note],
    aim_endurance: f32,
    tap_endurance: f32,
}

impl<'n> StrainScan<'n> {
    const fn new(notes: &'n [Note]) -> Self {
        Self {
            notes,
            aim_endurance: 0.0,
            tap_endurance: 0.0,
        }
    }

    fn process(&mut self, i: usize) -> (DataVector, DataVector) {
        let notes = self.notes;
        let curr = &notes[i];

        let mut note_count = 0;
        let mut weight_sum = 0.0;
        let mut aim_strain = 0.0;
        let mut tap_strain = 0.0;

        let mut j = i.checked_sub(1);

        while let Some(idx) = j {
            let in_range = (curr.position - notes[idx].position).abs() <= MAX_DIST;

            if note_count >= MAX_LOOKBACK || !in_range {
                break;
            }

            if notes[idx].position >= notes[idx + 1].position {
                break;
            }

            let weight = WEIGHTS[note_count];
            note_count += 1;
            weight_sum += weight;

            let merge = SliderMerge::new(notes, idx);
            let prev = &notes[merge.prev];
            let next = &notes[merge.prev + 1];

            let mut delta_time = next.position - (prev.position + prev.length);

            if merge.delta_slide_sum != 0.0 {
                aim_strain += compute_strain(acc_strain(
                    merge.length_sum,
                    merge.delta_slide_sum,
                    weight,
                )) / ACC_DIV;

                self.aim_endurance +=
                    acc_endurance(merge.length_sum, merge.delta_slide_sum, weight);
            }

            delta_time += merge.length_sum * 0.4;
            let aim_distance = (next.pitch_start - prev.pitch_end).abs();
            let note_moved = aim_distance != 0.0 || merge.delta_slide_sum != 0.0;

            if note_moved {
                aim_strain +=
                    compute_strain(aim_strain_of(aim_distance, weight, delta_time)) / AIM_DIV;
                self.aim_endurance += aim_endurance_of(aim_distance, weight, delta_time);
            }

            let tap_delta = next.position - prev.position;
            tap_strain += compute_strain(tap_strain_of(tap_delta, weight)) / TAP_DIV;
            self.tap_endurance += tap_endurance_of(tap_delta, weight);

            j = merge.prev.checked_sub(1);
        }

        if i > 0 {
            decay_endurance(&mut self.aim_endurance, aim_strain.powf(1.4) * 3.0);
            decay_endurance(&mut self.tap_endurance, tap_strain.powf(1.8) * 3.0);
        }

        let aim = DataVector::new(curr.position, aim_strain, self.aim_endurance, weight_sum);
        let tap = DataVector::new(curr.position, tap_strain, self.tap_endurance, weight_sum);

        (aim, tap)
    }
}

/// Saturating curve so that single extreme intervals can't spike the strain.
#[inline]
pub(crate) fn compute_strain(strain: f32) -> f32 {
    COMPRESSION * (strain + 1.0).powf(-0.012 * E) - COMPRESSION - (4.0 * strain) / COMPRESSION
}

#[inline]
fn decay_endurance(endurance: &mut f32, threshold: f32) {
    if *endurance >= threshold {
        let distance = (*endurance - threshold) / 60.0;
        *endurance /= 1.0 + 0.2 * distance;
    }
}

#[inline]
fn aim_strain_of(distance: f32, weight: f32, delta_time: f32) -> f32 {
    let speed = distance.powf(0.89) / delta_time.powf(1.35);

    speed * weight
}

#[inline]
fn aim_endurance_of(distance: f32, weight: f32, delta_time: f32) -> f32 {
    let speed = (distance.powf(0.85) / delta_time.powf(1.11)) / (AIM_END * MUL_END);

    speed * weight
}

#[inline]
fn tap_strain_of(tap_delta: f32, weight: f32) -> f32 {
    (16.0 / tap_delta.powf(1.22)) * weight
}

#[inline]
fn tap_endurance_of(tap_delta: f32, weight: f32) -> f32 {
    (0.8 / tap_delta.powf(1.1)) / (TAP_END * MUL_END) * weight
}

#[inline]
fn acc_strain(length_sum: f32, slide_delta: f32, weight: f32) -> f32 {
    let speed = slide_delta / length_sum.powf(1.18);

    speed * weight
}

#[inline]
fn acc_endurance(length_sum: f32, slide_delta: f32, weight: f32) -> f32 {
    let speed = (slide_delta / length_sum.powf(1.08)) / (ACC_END * MUL_END);

    speed * weight
}

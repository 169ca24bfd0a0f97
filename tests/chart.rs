use tootally_pp::{Chart, SpeedTier};

mod common;

use common::*;

fn chart_test(chart: &Chart) {
    assert_eq!(chart.name, "Test Chart");
    assert_eq!(chart.track_ref, "test_chart");
    assert_eq!(chart.note_count(), NOTE_COUNT);
    assert_eq!(chart.slider_count(), SLIDER_COUNT);
    assert_eq_float(chart.tempo, 140.0);

    assert!(chart.notes.windows(2).all(|w| w[0].beat <= w[1].beat));

    let notes = chart.notes(SpeedTier::S100);
    assert_eq_float(notes[1].position, 60.0 / 140.0 * 0.75);

    let fast = chart.notes(SpeedTier::S200);
    assert_eq_float(fast[1].position, notes[1].position / 2.0);
    assert_eq!(fast.len(), notes.len());
}

#[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
#[test]
fn chart_sync() {
    let chart = match Chart::from_path(CHART) {
        Ok(chart) => chart,
        Err(why) => panic!("Error while parsing chart: {}", why),
    };

    chart_test(&chart);
}

#[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
#[test]
fn chart_missing_file() {
    let err = Chart::from_path("./resources/missing.tmb").unwrap_err();

    assert!(matches!(err, tootally_pp::ParseError::IoError(_)));
}

#[cfg(feature = "async_tokio")]
#[test]
fn chart_async_tokio() {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("could not start runtime")
        .block_on(async {
            let file = match tokio::fs::File::open(CHART).await {
                Ok(file) => file,
                Err(why) => panic!("Could not open file {}: {}", CHART, why),
            };

            let chart = match Chart::parse(file).await {
                Ok(chart) => chart,
                Err(why) => panic!("Error while parsing chart: {}", why),
            };

            chart_test(&chart);
        });
}

#[cfg(feature = "async_std")]
#[test]
fn chart_async_std() {
    async_std::task::block_on(async {
        let file = match async_std::fs::File::open(CHART).await {
            Ok(file) => file,
            Err(why) => panic!("Could not open file {}: {}", CHART, why),
        };

        let chart = match Chart::parse(file).await {
            Ok(chart) => chart,
            Err(why) => panic!("Error while parsing chart: {}", why),
        };

        chart_test(&chart);
    })
}

use oscillo_rs::api::{ViewportEngine, ViewportEngineConfig};
use oscillo_rs::core::{LoadedChannels, SampleSeries, Viewport};
use oscillo_rs::interaction::{Modifiers, WheelDelta};
use oscillo_rs::render::NullRenderer;
use proptest::prelude::*;

fn engine_with_extent(values: Vec<f64>) -> ViewportEngine<NullRenderer> {
    let series = vec![SampleSeries::new("channel_1", values).expect("valid series")];
    let channels = LoadedChannels::new(series, None).expect("valid channel set");
    let config = ViewportEngineConfig::new(Viewport::new(1200, 800));
    ViewportEngine::new(NullRenderer::default(), config, channels).expect("engine init")
}

proptest! {
    #[test]
    fn spacing_never_drops_below_one_for_any_tick_sequence(
        peak in 2.0f64..500.0,
        ticks in proptest::collection::vec(any::<bool>(), 1..200)
    ) {
        let mut engine = engine_with_extent(vec![1.0, peak, peak / 2.0]);

        for zoom_in in ticks {
            let delta = if zoom_in { 120.0 } else { -120.0 };
            engine.wheel(WheelDelta::new(0.0, delta), Modifiers::default());

            prop_assert!(engine.grid().spacing() >= 1);
            prop_assert!(engine.labels().spacing() >= 1);
            prop_assert!((-5..=5).contains(&engine.scale_counter()));
        }
    }

    #[test]
    fn coarsening_never_exceeds_one_doubling_of_home_density(
        ticks in proptest::collection::vec(any::<bool>(), 1..200)
    ) {
        let mut engine = engine_with_extent(vec![17.0, 121.0, 60.0]);
        let ceiling = engine.grid().starting_spacing() * 2;

        for zoom_in in ticks {
            let delta = if zoom_in { 120.0 } else { -120.0 };
            engine.wheel(WheelDelta::new(0.0, delta), Modifiers::default());
            prop_assert!(engine.grid().spacing() <= ceiling);
        }
    }

    #[test]
    fn set_all_changes_exactly_the_channels_that_differed(
        initially_hidden in proptest::collection::vec(any::<bool>(), 1..12)
    ) {
        let series = (0..initially_hidden.len())
            .map(|index| {
                SampleSeries::new(format!("channel_{}", index + 1), vec![1.0, 10.0])
                    .expect("valid series")
            })
            .collect();
        let channels = LoadedChannels::new(series, None).expect("valid channel set");
        let config = ViewportEngineConfig::new(Viewport::new(800, 600));
        let mut engine =
            ViewportEngine::new(NullRenderer::default(), config, channels).expect("engine init");

        let mut hidden_count = 0;
        for (index, hide) in initially_hidden.iter().enumerate() {
            if *hide {
                let name = format!("channel_{}", index + 1);
                engine.toggle_channel(&name).expect("toggle known channel");
                hidden_count += 1;
            }
        }

        let changes = engine.set_all_channels(true);
        prop_assert_eq!(changes.len(), hidden_count);
        for name in 1..=initially_hidden.len() {
            let channel_name = format!("channel_{}", name);
            prop_assert!(engine.is_channel_visible(&channel_name).expect("known"));
        }
    }
}

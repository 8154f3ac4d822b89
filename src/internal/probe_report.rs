#![allow(clippy::cast_precision_loss)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::arithmetic_side_effects)]

//! Inserts random keys into both collision strategies and charts how each
//! table fills up as the key count grows.

use plotters::prelude::*;
use probemap::{ChainingMap, OpenAddressingMap, StringMap, hash_function_2};
use rand::{Rng, distr::Alphanumeric};

/// Starting bucket counts for the open addressing runs
const OPEN_CAPACITIES: [usize; 3] = [16, 64, 256];
/// Fixed bucket counts for the chaining runs
const CHAIN_CAPACITIES: [usize; 2] = [64, 512];
/// Number of key counts to measure
const NUM_STEPS: usize = 20;
/// Keys added between measurements
const STEP_KEYS: usize = 100;
/// Length of each random key
const KEY_LENGTH: usize = 8;

/// Measurements for one map after a batch of insertions
#[derive(Debug, Clone, Copy)]
struct Sample {
    /// Keys inserted so far
    keys: usize,
    /// Number of buckets
    capacity: usize,
    /// Entries per bucket
    load: f64,
    /// Share of buckets holding nothing
    empty_share: f64,
    /// Longest probe sequence or chain a hit has to walk
    longest_lookup: usize,
}

impl Sample {
    /// Reads the current figures off a map
    fn of<M: StringMap<usize>>(keys: usize, map: &M) -> Self {
        Self {
            keys,
            capacity: map.get_capacity(),
            load: map.table_load(),
            empty_share: map.empty_buckets() as f64 / map.get_capacity() as f64,
            longest_lookup: map.longest_lookup(),
        }
    }
}

/// Draws a random alphanumeric key
fn random_key(rng: &mut impl Rng) -> String {
    rng.sample_iter(&Alphanumeric).take(KEY_LENGTH).map(char::from).collect()
}

/// Inserts `NUM_STEPS` batches of keys, sampling the map after each batch
fn measure<M: StringMap<usize>>(mut map: M, keys: &[String]) -> Vec<Sample> {
    keys.chunks(STEP_KEYS)
        .enumerate()
        .map(|(step, batch)| {
            for (offset, key) in batch.iter().enumerate() {
                map.put(key.clone(), step * STEP_KEYS + offset);
            }
            Sample::of(map.get_size(), &map)
        })
        .collect()
}

/// Plots one figure of every sample series against the key count
fn plot(
    path: &str,
    caption: &str,
    y_desc: &str,
    series: &[(&str, &[Sample])],
    value: fn(&Sample) -> f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_keys = series
        .iter()
        .flat_map(|(_, samples)| samples.iter().map(|sample| sample.keys))
        .max()
        .unwrap_or(1);
    let max_value = series
        .iter()
        .flat_map(|(_, samples)| samples.iter().map(value))
        .fold(0.0, f64::max)
        * 1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..max_keys, 0.0..max_value.max(f64::EPSILON))?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    let colors = [
        RGBColor(220, 50, 50),
        RGBColor(230, 140, 30),
        RGBColor(150, 40, 150),
        RGBColor(50, 90, 220),
        RGBColor(50, 180, 50),
    ];
    for (index, (label, samples)) in series.iter().enumerate() {
        let color = colors[index % colors.len()];
        let line_style = ShapeStyle::from(&color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(
                samples.iter().map(|sample| (sample.keys, value(sample))),
                line_style,
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            samples
                .iter()
                .map(|sample| Circle::new((sample.keys, value(sample)), 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let keys: Vec<String> = (0..NUM_STEPS * STEP_KEYS).map(|_| random_key(&mut rng)).collect();

    let mut runs = Vec::new();
    for capacity in OPEN_CAPACITIES {
        let samples = measure(OpenAddressingMap::new(capacity, hash_function_2)?, &keys);
        runs.push((format!("Open Addressing (from {capacity} buckets)"), samples));
    }
    for capacity in CHAIN_CAPACITIES {
        let samples = measure(ChainingMap::new(capacity, hash_function_2)?, &keys);
        runs.push((format!("Chaining ({capacity} buckets)"), samples));
    }

    for (label, samples) in &runs {
        println!("{label}");
        for sample in samples {
            println!(
                "{:>5} keys | capacity {:>5} | load {:.3} | empty {:.3} | longest lookup {:>3}",
                sample.keys, sample.capacity, sample.load, sample.empty_share, sample.longest_lookup
            );
        }
    }

    let series: Vec<(&str, &[Sample])> =
        runs.iter().map(|(label, samples)| (label.as_str(), samples.as_slice())).collect();
    plot("table_load.png", "Table Load by Collision Strategy", "Entries per Bucket", &series, |s| {
        s.load
    })?;
    plot(
        "empty_buckets.png",
        "Empty Bucket Share by Collision Strategy",
        "Share of Empty Buckets",
        &series,
        |s| s.empty_share,
    )?;
    plot(
        "longest_lookup.png",
        "Longest Lookup by Collision Strategy",
        "Buckets or Nodes Visited",
        &series,
        |s| s.longest_lookup as f64,
    )?;

    println!("Generated plot images: table_load.png, empty_buckets.png, longest_lookup.png");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same_bucket(_: &str) -> usize {
        3
    }

    #[test]
    fn test_sample_records_longest_chain() {
        let mut map = ChainingMap::new(8, same_bucket).unwrap();
        map.put("a", 0);
        map.put("b", 1);
        map.put("c", 2);
        let sample = Sample::of(map.get_size(), &map);
        assert_eq!(sample.keys, 3);
        assert_eq!(sample.longest_lookup, 3);
        assert!((sample.empty_share - 0.875).abs() < f64::EPSILON);
    }

    #[test]
    fn test_measure_samples_every_batch() {
        let keys: Vec<String> = (0..3 * STEP_KEYS).map(|i| format!("key{i}")).collect();
        let samples = measure(OpenAddressingMap::new(16, hash_function_2).unwrap(), &keys);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples.last().map(|sample| sample.keys), Some(3 * STEP_KEYS));
        assert!(samples.iter().all(|sample| sample.load < 0.5 && sample.longest_lookup >= 1));
    }
}

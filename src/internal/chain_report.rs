#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]

use chainmap::ChainedHashMap;
use plotters::prelude::*;
use rand::Rng;

const KEY_COUNT: usize = 50_000;
// Record one data point every this many insertions
const SAMPLE_EVERY: usize = 100;
const THRESHOLDS: [f64; 3] = [0.75, 2.0, 4.0];

const FONT_FAMILY: &str = "sans-serif";
const TITLE_SIZE: u32 = 35;
const TEXT_SIZE: u32 = 16;
const LINE_WIDTH: u32 = 2;

/// How one map configuration behaved while the keys went in
#[derive(Debug)]
struct Trace {
    threshold: f64,
    load_factor: Vec<(usize, f64)>,
    longest_chain: Vec<(usize, f64)>,
    rehashes: usize,
    final_capacity: usize,
}

fn trace_growth(keys: &[u64], threshold: f64) -> Trace {
    let mut map = ChainedHashMap::new();
    map.set_load_factor_threshold(threshold);

    let mut capacity = map.capacity();
    let mut trace = Trace {
        threshold,
        load_factor: Vec::with_capacity(keys.len() / SAMPLE_EVERY + 1),
        longest_chain: Vec::with_capacity(keys.len() / SAMPLE_EVERY + 1),
        rehashes: 0,
        final_capacity: capacity,
    };

    for (inserted, &key) in keys.iter().enumerate() {
        map.put(key, inserted);

        if map.capacity() != capacity {
            capacity = map.capacity();
            trace.rehashes += 1;
        }

        if inserted % SAMPLE_EVERY == 0 {
            let longest = map.chain_lengths().into_iter().max().unwrap_or(0);
            trace.load_factor.push((inserted, map.load_factor()));
            trace.longest_chain.push((inserted, longest as f64));
        }
    }

    trace.final_capacity = capacity;
    trace
}

fn plot(
    path: &str,
    caption: &str,
    y_desc: &str,
    traces: &[Trace],
    series: impl Fn(&Trace) -> &[(usize, f64)],
) -> Result<(), Box<dyn std::error::Error>> {
    let colors = [
        RGBColor(220, 50, 50), // Bright red
        RGBColor(50, 90, 220), // Bright blue
        RGBColor(50, 180, 50), // Bright green
    ];

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = traces
        .iter()
        .flat_map(|trace| series(trace).iter().map(|&(_, y)| y))
        .fold(1.0, f64::max) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (FONT_FAMILY, TITLE_SIZE))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..KEY_COUNT, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style((FONT_FAMILY, TEXT_SIZE))
        .draw()?;

    for (trace, color) in traces.iter().zip(colors.iter().cycle()) {
        let line_style = ShapeStyle::from(color).stroke_width(LINE_WIDTH);
        chart
            .draw_series(LineSeries::new(series(trace).iter().copied(), line_style))?
            .label(format!("threshold {:.2}", trace.threshold))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    println!("Wrote {path}");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let keys: Vec<u64> = (0..KEY_COUNT).map(|_| rng.random()).collect();

    println!("Inserting {KEY_COUNT} random keys for thresholds {THRESHOLDS:?}");

    let traces: Vec<Trace> =
        THRESHOLDS.iter().map(|&threshold| trace_growth(&keys, threshold)).collect();

    for trace in &traces {
        let worst = trace.longest_chain.iter().map(|&(_, y)| y).fold(0.0, f64::max);
        println!(
            "  threshold {:.2}: {} rehashes, {} buckets, longest chain seen = {worst}",
            trace.threshold, trace.rehashes, trace.final_capacity
        );
    }

    plot(
        "load_factor.png",
        "Load Factor While Inserting",
        "Entries per Bucket",
        &traces,
        |trace| trace.load_factor.as_slice(),
    )?;
    plot(
        "longest_chain.png",
        "Longest Chain While Inserting",
        "Longest Chain (entries)",
        &traces,
        |trace| trace.longest_chain.as_slice(),
    )?;

    Ok(())
}

//! Diagnostic plots for inspecting the initial ensemble.
use plotters::prelude::*;

/// Histogram of one row of an ensemble matrix, written to the png at `title`.
pub fn spread_histogram(
    values: &[f64],
    bins: usize,
    title: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let xmin = values.iter().fold(f64::INFINITY, |a, b| a.min(*b));
    let span = values.iter().fold(f64::NEG_INFINITY, |a, b| a.max(*b)) - xmin;
    // keep the axis non-degenerate when every member agrees
    let span = span.max(f64::EPSILON);
    let xmax = xmin + span;

    let mut counts = vec![0u32; bins];
    for value in values {
        let k = ((value - xmin) / span * bins as f64) as usize;
        counts[k.min(bins - 1)] += 1;
    }
    let ymax = counts.iter().cloned().fold(0, u32::max);

    let root = BitMapBackend::new(title, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;
    root.margin(10, 10, 10, 10);
    // construct a chart context
    let mut chart = ChartBuilder::on(&root)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(xmin..xmax, 0u32..ymax + 1)?;

    // Then we can draw a mesh
    chart
        .configure_mesh()
        .x_labels(5)
        .y_labels(5)
        .x_label_formatter(&|x| format!("{:.2}", x))
        .x_desc("Perturbation")
        .y_desc("Members")
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(k, count)| {
        let x0 = xmin + span * k as f64 / bins as f64;
        let x1 = xmin + span * (k + 1) as f64 / bins as f64;
        Rectangle::new([(x0, 0), (x1, *count)], BLUE.filled())
    }))?;
    Ok(())
}

/// Whisker plot comparing the perturbation spread of the five carbon pools.
pub fn whisker_for_pools(
    cf: &plotters::data::Quartiles,
    cw: &plotters::data::Quartiles,
    cr: &plotters::data::Quartiles,
    cl: &plotters::data::Quartiles,
    cs: &plotters::data::Quartiles,
    title: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let values_range = plotters::data::fitting_range(
        cf.values().iter().chain(
            cw.values()
                .iter()
                .chain(cr.values().iter())
                .chain(cl.values().iter())
                .chain(cs.values().iter()),
        ),
    );

    let pool_axis = ["foliage", "wood", "roots", "litter", "soil"];
    let root = BitMapBackend::new(title, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;
    root.margin(10, 10, 10, 10);
    // construct a chart context
    let mut chart = ChartBuilder::on(&root)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(pool_axis[..].into_segmented(), values_range)?;

    // Then we can draw a mesh
    chart
        .configure_mesh()
        .y_labels(5)
        .y_label_formatter(&|x| format!("{:.2}", x))
        .x_desc("Carbon Pool")
        .y_desc("Perturbation")
        .draw()?;

    chart.draw_series(vec![
        Boxplot::new_vertical(SegmentValue::CenterOf(&"foliage"), cf),
        Boxplot::new_vertical(SegmentValue::CenterOf(&"wood"), cw),
        Boxplot::new_vertical(SegmentValue::CenterOf(&"roots"), cr),
        Boxplot::new_vertical(SegmentValue::CenterOf(&"litter"), cl),
        Boxplot::new_vertical(SegmentValue::CenterOf(&"soil"), cs),
    ])?;

    chart
        .configure_series_labels()
        .background_style(WHITE.filled())
        .draw()?;
    Ok(())
}

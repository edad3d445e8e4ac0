// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Builds a deterministic chart with a selected point and serializes it to SVG.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else compares the documents for exact match; a missing snapshot fails.

use chart_core::{
    to_svg_string, Axis, Chart, ChartConfig, ChartState, PlotHandle, Selection, Series, Strategy, ValueFormat, Width,
};

fn render_svg() -> String {
    let mut cfg = ChartConfig { height: 200.0, strategy: Strategy::SameStart, ..ChartConfig::default() };
    cfg.axis_x = Axis::new(ValueFormat::DateKey).with_markings(3);
    cfg.axis_y = Axis::new(ValueFormat::Decimals { places: 2 }).with_max_discrete_points(4).with_markings(3).with_grid(None);
    cfg.max_value_extra_pct = Some(10.0);
    let mut chart = Chart::new(cfg);
    chart.add_series(
        Series::with_data("a", [(20240101.0, 10.0), (20240102.0, 12.0), (20240103.0, 11.0), (20240104.0, 15.0)])
            .with_label("Alpha"),
    );
    chart.add_series(Series::with_data("b", [(20240102.0, 40.0), (20240104.0, 38.0)]).with_label("Beta"));

    let state = ChartState { selection: Selection::Selected(PlotHandle::new(0, 3)), hint_text: None };
    let frame = chart.frame(Width::Fixed(360.0), &state).expect("frame");
    to_svg_string(&frame).expect("svg")
}

#[test]
fn golden_basic_chart() {
    let svg = render_svg();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_chart.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    let want = std::fs::read_to_string(&snap_path)
        .unwrap_or_else(|e| panic!("missing snapshot {} ({e}); set UPDATE_SNAPSHOTS=1 to bless", snap_path.display()));
    assert_eq!(svg, want, "rendered svg differs from golden snapshot: {}", snap_path.display());
}

#[test]
fn golden_chart_pins_rebasing_and_hint() {
    let svg = render_svg();
    // Beta rebased to 0, 0, -2, -2 sits on the bottom edge for its last two columns
    assert!(svg.contains(r#"<line x1="123.33" y1="143.25" x2="236.67" y2="190""#));
    assert!(svg.contains(r##"<circle cx="350" cy="190" r="3" stroke="#ffffff" stroke-width="2" fill="#000000" data-series="1" data-column="3"/>"##));
    // value labels span -2 ..= 5 + 10% of the span
    assert!(svg.contains(">-2.00</text>") && svg.contains(">1.85</text>") && svg.contains(">5.70</text>"));
    let hint = &svg[svg.find(r#"<g class="hint">"#).expect("hint group")..];
    assert!(hint.contains(r#"y="41.36" text-anchor="end""#));
    assert!(hint.contains(">Alpha</text>") && hint.contains(">5.00</text>") && hint.contains(">4/1/2024</text>"));
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render_svg(), render_svg());
}

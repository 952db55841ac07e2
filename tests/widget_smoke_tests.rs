use tick_chart::api::{ChartWidget, ChartWidgetConfig, RecordingBackend};
use tick_chart::core::{ChartPhase, ModelReporters, SeriesSpec, TickLabel};
use tick_chart::error::ChartError;
use tick_chart::host::{HOST_CONTAINER_ID, MemoryHost};

fn build(series: Vec<SeriesSpec>) -> (MemoryHost, ChartWidget<RecordingBackend>) {
    let mut host = MemoryHost::with_default_container();
    let chart = ChartWidget::new(
        &mut host,
        RecordingBackend::new(),
        ChartWidgetConfig::new(series),
    )
    .expect("widget init");
    (host, chart)
}

fn two_series() -> Vec<SeriesSpec> {
    vec![
        SeriesSpec::new("A", "#FF0000"),
        SeriesSpec::new("B", "#0000FF"),
    ]
}

#[test]
fn single_series_round_trip_keeps_order() {
    let (_host, mut chart) = build(vec![SeriesSpec::new("A", "#FF0000")]);
    assert_eq!(chart.phase(), ChartPhase::Empty);

    chart.render(0u64, &[5.0]).expect("render");
    chart.render(1u64, &[7.0]).expect("render");

    assert_eq!(chart.labels().len(), 2);
    assert_eq!(chart.datasets()[0].points, vec![5.0, 7.0]);
    assert_eq!(chart.phase(), ChartPhase::Populated);
    assert_eq!(
        chart.labels(),
        &[TickLabel::from(0u64), TickLabel::from(1u64)]
    );
}

#[test]
fn short_value_vector_extends_only_the_prefix() {
    let (_host, mut chart) = build(two_series());
    let outcome = chart.render(0u64, &[9.0]).expect("render");

    assert_eq!(outcome.appended, 1);
    assert_eq!(outcome.missing, 1);
    assert_eq!(chart.labels().len(), 1);
    assert_eq!(chart.datasets()[0].points, vec![9.0]);
    assert!(chart.datasets()[1].points.is_empty());
    assert!(!chart.state().is_aligned());
    assert_eq!(chart.backend().datasets[1].points.len(), 0);
}

#[test]
fn long_value_vector_ignores_extras() {
    let (_host, mut chart) = build(two_series());
    let outcome = chart.render(0u64, &[1.0, 2.0, 3.0]).expect("render");

    assert_eq!(outcome.ignored, 1);
    assert_eq!(chart.datasets()[0].points, vec![1.0]);
    assert_eq!(chart.datasets()[1].points, vec![2.0]);
    assert!(chart.state().is_aligned());
}

#[test]
fn reset_after_populate_then_render_again() {
    let (_host, mut chart) = build(two_series());
    chart.render(0u64, &[1.0, 2.0]).expect("render");
    chart.render(1u64, &[3.0, 4.0]).expect("render");

    chart.reset().expect("reset");
    assert!(chart.labels().is_empty());
    assert!(chart.datasets().iter().all(|d| d.points.is_empty()));
    assert_eq!(chart.phase(), ChartPhase::Empty);

    chart.render(2u64, &[5.0, 6.0]).expect("render");
    assert_eq!(chart.labels().len(), 1);
    assert_eq!(chart.datasets()[0].points, vec![5.0]);
    assert_eq!(chart.datasets()[1].points, vec![6.0]);
    assert_eq!(chart.backend().labels, chart.state().labels);
}

#[test]
fn reset_twice_equals_reset_once() {
    let (_host, mut chart) = build(two_series());
    chart.render(0u64, &[1.0, 2.0]).expect("render");

    chart.reset().expect("reset");
    let once = chart.state().clone();
    chart.reset().expect("reset");
    assert_eq!(chart.state(), &once);
}

#[test]
fn every_render_and_reset_triggers_one_redraw() {
    let (_host, mut chart) = build(two_series());
    chart.render(0u64, &[1.0, 2.0]).expect("render");
    chart.render(1u64, &[1.0]).expect("render");
    chart.reset().expect("reset");
    assert_eq!(chart.backend().redraw_count, 3);
}

#[test]
fn construction_places_surface_in_host_container() {
    let mut host = MemoryHost::with_default_container();
    let config = ChartWidgetConfig::new(two_series())
        .with_size(100, 50)
        .with_position(-350, 200)
        .with_title("Aspiration");
    let chart =
        ChartWidget::new(&mut host, RecordingBackend::new(), config).expect("widget init");

    let children = host.children(HOST_CONTAINER_ID);
    assert_eq!(children.len(), 1);
    assert_eq!(children[0], *chart.surface());
    assert_eq!(chart.surface().geometry.width, 100);
    assert_eq!(chart.surface().geometry.height, 50);
    assert_eq!(
        chart.surface().style,
        "border:1px dotted;position:absolute;top:-350px;left:200px"
    );

    let backend = chart.backend();
    assert!(backend.is_initialized());
    assert_eq!(backend.datasets.len(), 2);
    assert_eq!(
        backend.descriptor.as_ref().map(|d| d.title.text.as_str()),
        Some("Aspiration")
    );
}

#[test]
fn datasets_follow_series_order_with_derived_fills() {
    let (_host, chart) = build(vec![
        SeriesSpec::new("Susceptible", "#00008b"),
        SeriesSpec::new("Recovered", "#008000"),
        SeriesSpec::new("Infected", "#FF0000"),
    ]);
    let datasets = chart.datasets();
    assert_eq!(datasets.len(), 3);
    assert_eq!(datasets[0].label, "Susceptible");
    assert_eq!(datasets[0].fill_color.to_string(), "rgba(0,0,139,0.1)");
    assert_eq!(datasets[1].fill_color.to_string(), "rgba(0,128,0,0.1)");
    assert_eq!(datasets[2].border_color, "#FF0000");
}

#[test]
fn missing_host_container_is_a_setup_error() {
    let mut host = MemoryHost::new().with_container("sidebar");
    let err = ChartWidget::new(
        &mut host,
        RecordingBackend::new(),
        ChartWidgetConfig::new(two_series()),
    )
    .err()
    .expect("missing container must fail");

    assert!(matches!(err, ChartError::HostContainerMissing { .. }));
    assert!(err.is_setup_error());
    assert_eq!(host.surface_count(), 0);
}

#[test]
fn backend_initialization_failure_is_fatal() {
    let mut host = MemoryHost::with_default_container();
    let err = ChartWidget::new(
        &mut host,
        RecordingBackend::failing("no 2d context"),
        ChartWidgetConfig::new(two_series()),
    )
    .err()
    .expect("backend failure must surface");

    assert!(matches!(err, ChartError::BackendInit(ref reason) if reason == "no 2d context"));
}

#[test]
fn zero_sized_surface_is_rejected_before_host_is_touched() {
    let mut host = MemoryHost::with_default_container();
    let err = ChartWidget::new(
        &mut host,
        RecordingBackend::new(),
        ChartWidgetConfig::new(two_series()).with_size(0, 200),
    )
    .err()
    .expect("invalid size must fail");

    assert!(matches!(err, ChartError::InvalidSurface { width: 0, .. }));
    assert_eq!(host.surface_count(), 0);
}

#[test]
fn widget_without_series_still_records_labels() {
    let (_host, mut chart) = build(Vec::new());
    let outcome = chart.render("t0", &[]).expect("render");
    assert!(outcome.is_exact());
    assert_eq!(chart.labels().len(), 1);
    assert!(chart.datasets().is_empty());
}

#[test]
fn reporter_values_feed_series_by_label() {
    let (_host, mut chart) = build(vec![
        SeriesSpec::new("Susceptible", "#00008b"),
        SeriesSpec::new("Recovered", "#008000"),
        SeriesSpec::new("Infected", "#FF0000"),
    ]);

    let mut reporters = ModelReporters::new();
    reporters.record("Susceptible", 95.0);
    reporters.record("Infected", 5.0);
    chart
        .render_from_reporters(1u64, &reporters)
        .expect("render");

    reporters.record("Susceptible", 90.0);
    reporters.record("Infected", 8.0);
    reporters.record("Recovered", 2.0);
    chart
        .render_from_reporters(2u64, &reporters)
        .expect("render");

    assert_eq!(chart.datasets()[0].points, vec![95.0, 90.0]);
    assert_eq!(chart.datasets()[1].points, vec![0.0, 2.0]);
    assert_eq!(chart.datasets()[2].points, vec![5.0, 8.0]);
    assert!(chart.state().is_aligned());
}

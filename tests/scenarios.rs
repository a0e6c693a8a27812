//! End-to-end dashboard scenarios

use harvest::chart::{render, ChartError, ChartKind, ChartSpec, Geometry, SchemaError};
use harvest::datasets::registry::{self, *};
use harvest::page::{render_dashboard, RenderOptions};

#[test]
fn products_bar_has_beef_at_2100() {
    let table = registry::products();
    let spec = ChartSpec::new(ChartKind::Bar, "Top Agri-Food Products Exported by Ireland", PRODUCT)
        .value(EXPORT_VALUE);
    let chart = render(&table, &spec).unwrap();

    let beef: Vec<_> = chart.marks_for("Beef").collect();
    assert_eq!(beef.len(), 1);
    assert!(matches!(beef[0].geometry, Geometry::Bar { height, .. } if height == 2100.0));
    assert_eq!(beef[0].tooltip, "Beef: 2100");
}

#[test]
fn resilience_pie_proportions_ignore_total() {
    let table = registry::resilience();
    let spec = ChartSpec::new(ChartKind::Pie, "Adoption", STRATEGY).value(ADOPTION_RATE);
    let chart = render(&table, &spec).unwrap();

    assert_eq!(chart.mark_count(), 4);
    let expected = [70.0, 80.0, 62.0, 68.0].map(|v| v / 280.0);
    for (mark, want) in chart.marks.iter().zip(expected) {
        match mark.geometry {
            Geometry::Slice { fraction, .. } => assert!((fraction - want).abs() < 1e-12),
            _ => panic!("pie mark {} has no slice", mark.category),
        }
    }
}

#[test]
fn talent_grouped_bar_renders_eight_marks() {
    let table = registry::talent();
    let spec = ChartSpec::new(ChartKind::GroupedBar, "Human Capital", INITIATIVE)
        .values([YOUTH_PROGRAMS, AWARENESS_CAMPAIGNS]);
    let chart = render(&table, &spec).unwrap();

    assert_eq!(chart.mark_count(), 8);
    for (idx, pair) in chart.marks.chunks(2).enumerate() {
        assert_eq!(pair[0].category, pair[1].category);
        assert_eq!(pair[0].category, TALENT[idx].initiative);
        assert_eq!(pair[0].value, TALENT[idx].youth_programs);
        assert_eq!(pair[1].value, TALENT[idx].awareness_campaigns);
    }
}

#[test]
fn unknown_category_field_is_schema_error() {
    let table = registry::products();
    let kind: ChartKind = "bar".parse().unwrap();
    let spec = ChartSpec::new(kind, "Exports", "Region").value(EXPORT_VALUE);

    match render(&table, &spec) {
        Err(ChartError::Schema(SchemaError::MissingField { field, .. })) => {
            assert_eq!(field, "Region")
        }
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn unknown_kind_is_render_error() {
    let err = "heatmap".parse::<ChartKind>().unwrap_err();
    assert_eq!(ChartError::from(err).to_string(), "Render error: Unknown chart kind: heatmap");
}

#[test]
fn dashboard_writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.html");

    let html = render_dashboard(&RenderOptions::default()).unwrap();
    std::fs::write(&path, &html).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, html);
    assert!(written.contains("6. Food Security &amp; Equity"));
    assert!(written.contains("<title>Beef: 2100</title>"));
}

//! Chart Renderer
//!
//! Turns a `Table` plus a `ChartSpec` into a `ChartArtifact`. Rendering is a
//! pure function of its inputs: rows keep table order, value fields keep the
//! order they were given, and nothing is sorted or aggregated.

use crate::datasets::{format_value, Table};

use super::artifact::{
    interpolate, palette_color, Axis, ChartArtifact, ColorScale, Geometry, LegendEntry, Mark,
    Series, SCALE_HIGH, SCALE_LOW,
};
use super::error::{ChartResult, RenderError, SchemaError};
use super::spec::{ChartKind, ChartSpec};

/// Largest scatter marker radius in pixels
pub const MAX_RADIUS: f64 = 20.0;
/// Smallest sized scatter marker radius
pub const MIN_RADIUS: f64 = 4.0;
/// Radius of unsized scatter markers
pub const DEFAULT_RADIUS: f64 = 6.0;

/// Hover text for a mark
pub fn tooltip(category: &str, value: f64) -> String {
    format!("{}: {}", category, format_value(value))
}

/// Column indices resolved from a spec
struct Fields {
    category: usize,
    values: Vec<usize>,
    color: Option<usize>,
    size: Option<usize>,
}

/// Render a table into a chart artifact
///
/// Fails with a schema error when a referenced field is absent (or a value /
/// size field is not numeric), and with a render error when the table is empty
/// or the chart parameters cannot produce a chart.
pub fn render(table: &Table, spec: &ChartSpec) -> ChartResult<ChartArtifact> {
    let fields = resolve_fields(table, spec)?;

    if spec.title.trim().is_empty() {
        return Err(RenderError::EmptyTitle.into());
    }
    if fields.values.is_empty() {
        return Err(RenderError::NoValueFields.into());
    }
    if table.is_empty() {
        return Err(RenderError::EmptyTable(table.name.to_string()).into());
    }
    if spec.kind.is_scatter() && fields.values.len() < 2 {
        return Err(RenderError::ScatterAxes(fields.values.len()).into());
    }
    let series_count = match spec.kind {
        ChartKind::Pie => 1,
        kind if kind.is_scatter() => fields.values.len() - 1,
        _ => fields.values.len(),
    };
    if let (Some(field), true) = (&spec.color_field, series_count > 1) {
        return Err(RenderError::ColorWithSeries {
            field: field.clone(),
            series: series_count,
        }
        .into());
    }

    let categories: Vec<String> = (0..table.len())
        .map(|row| table.label(row, fields.category).unwrap_or_default())
        .collect();

    let (color_scale, row_colors) = match fields.color {
        Some(col) => {
            let (scale, colors) = color_mapping(table, col);
            (Some(scale), Some(colors))
        }
        None => (None, None),
    };

    let mut artifact = match spec.kind {
        ChartKind::Bar | ChartKind::GroupedBar => {
            bar_chart(table, spec, &fields, &categories, row_colors.as_deref())
        }
        ChartKind::Pie => pie_chart(table, spec, &fields, &categories, row_colors.as_deref()),
        ChartKind::Scatter | ChartKind::ScatterWithSize | ChartKind::ScatterWithLabels => {
            scatter_chart(table, spec, &fields, &categories, row_colors.as_deref())
        }
    };

    if let Some(ColorScale::Discrete { entries, .. }) = &color_scale {
        artifact.legend = entries.clone();
    }
    artifact.color_scale = color_scale;

    tracing::debug!(
        chart = %artifact.id,
        kind = %artifact.kind,
        marks = artifact.marks.len(),
        "Rendered chart"
    );

    Ok(artifact)
}

fn resolve_fields(table: &Table, spec: &ChartSpec) -> Result<Fields, SchemaError> {
    let category = field_index(table, &spec.category_field, false)?;

    let values = spec
        .value_fields
        .iter()
        .map(|f| field_index(table, f, true))
        .collect::<Result<Vec<_>, _>>()?;

    let color = spec
        .color_field
        .as_deref()
        .map(|f| field_index(table, f, false))
        .transpose()?;

    let size = match spec.size_field.as_deref() {
        Some(f) => Some(field_index(table, f, true)?),
        // Sized scatter without an explicit field sizes by the last value field
        None if spec.kind == ChartKind::ScatterWithSize => values.last().copied(),
        None => None,
    };

    Ok(Fields {
        category,
        values,
        color,
        size,
    })
}

fn field_index(table: &Table, name: &str, numeric: bool) -> Result<usize, SchemaError> {
    let idx = table
        .column_index(name)
        .ok_or_else(|| SchemaError::MissingField {
            table: table.name.to_string(),
            field: name.to_string(),
        })?;

    if numeric && !table.columns()[idx].is_numeric() {
        return Err(SchemaError::NotNumeric {
            table: table.name.to_string(),
            field: name.to_string(),
        });
    }

    Ok(idx)
}

/// Build the color scale for a column and the color of every row
fn color_mapping(table: &Table, col: usize) -> (ColorScale, Vec<String>) {
    let field = table.columns()[col].name.to_string();

    if table.columns()[col].is_numeric() {
        let values: Vec<f64> = (0..table.len())
            .map(|row| table.number(row, col).unwrap_or(0.0))
            .collect();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;

        let colors = values
            .iter()
            .map(|v| {
                let t = if span > 0.0 { (v - min) / span } else { 0.5 };
                interpolate(SCALE_LOW, SCALE_HIGH, t)
            })
            .collect();

        let scale = ColorScale::Continuous {
            field,
            min,
            max,
            low: SCALE_LOW.to_string(),
            high: SCALE_HIGH.to_string(),
        };
        (scale, colors)
    } else {
        let mut distinct: Vec<String> = Vec::new();
        let colors = (0..table.len())
            .map(|row| {
                let label = table.label(row, col).unwrap_or_default();
                let idx = match distinct.iter().position(|d| *d == label) {
                    Some(idx) => idx,
                    None => {
                        distinct.push(label);
                        distinct.len() - 1
                    }
                };
                palette_color(idx).to_string()
            })
            .collect();

        let entries = distinct
            .into_iter()
            .enumerate()
            .map(|(idx, label)| LegendEntry {
                label,
                color: palette_color(idx).to_string(),
            })
            .collect();

        (ColorScale::Discrete { field, entries }, colors)
    }
}

fn value_at(table: &Table, row: usize, col: usize) -> f64 {
    table.number(row, col).unwrap_or(0.0)
}

fn series_for(table: &Table, cols: &[usize]) -> Vec<Series> {
    cols.iter()
        .enumerate()
        .map(|(idx, &col)| Series {
            name: table.columns()[col].name.to_string(),
            color: palette_color(idx).to_string(),
        })
        .collect()
}

fn series_legend(series: &[Series]) -> Vec<LegendEntry> {
    series
        .iter()
        .map(|s| LegendEntry {
            label: s.name.clone(),
            color: s.color.clone(),
        })
        .collect()
}

fn empty_artifact(table: &Table, spec: &ChartSpec, categories: &[String]) -> ChartArtifact {
    ChartArtifact {
        id: table.name.to_string(),
        kind: spec.kind,
        title: spec.title.clone(),
        categories: categories.to_vec(),
        series: Vec::new(),
        marks: Vec::new(),
        x_axis: None,
        y_axis: None,
        color_scale: None,
        legend: Vec::new(),
    }
}

fn bar_chart(
    table: &Table,
    spec: &ChartSpec,
    fields: &Fields,
    categories: &[String],
    row_colors: Option<&[String]>,
) -> ChartArtifact {
    let grouped = spec.kind == ChartKind::GroupedBar;
    let group_count = if grouped { fields.values.len() } else { 1 };
    let series = series_for(table, &fields.values);

    let mut marks = Vec::with_capacity(categories.len() * fields.values.len());
    let mut top = 0.0_f64;

    for (row, category) in categories.iter().enumerate() {
        let mut base = 0.0;
        for (s, &col) in fields.values.iter().enumerate() {
            let value = value_at(table, row, col);
            let color = match row_colors {
                Some(colors) => colors[row].clone(),
                None => series[s].color.clone(),
            };
            let bottom = if grouped { 0.0 } else { base };

            marks.push(Mark {
                category: category.clone(),
                series: s,
                value,
                geometry: Geometry::Bar {
                    slot: row,
                    group: if grouped { s } else { 0 },
                    group_count,
                    base: bottom,
                    height: value,
                },
                color,
                tooltip: tooltip(category, value),
                label: None,
            });

            top = top.max(bottom + value);
            if !grouped {
                base += value;
            }
        }
    }

    let y_title = if series.len() == 1 {
        series[0].name.clone()
    } else {
        "value".to_string()
    };

    let mut artifact = empty_artifact(table, spec, categories);
    artifact.x_axis = Some(Axis {
        title: spec.category_field.clone(),
        min: 0.0,
        max: categories.len() as f64,
    });
    artifact.y_axis = Some(Axis {
        title: y_title,
        min: 0.0,
        max: top,
    });
    if series.len() > 1 {
        artifact.legend = series_legend(&series);
    }
    artifact.series = series;
    artifact.marks = marks;
    artifact
}

fn pie_chart(
    table: &Table,
    spec: &ChartSpec,
    fields: &Fields,
    categories: &[String],
    row_colors: Option<&[String]>,
) -> ChartArtifact {
    let col = fields.values[0];
    let values: Vec<f64> = (0..table.len()).map(|row| value_at(table, row, col)).collect();
    let total: f64 = values.iter().sum();

    let mut start = 0.0;
    let marks: Vec<Mark> = categories
        .iter()
        .zip(&values)
        .enumerate()
        .map(|(row, (category, &value))| {
            let fraction = if total > 0.0 { value / total } else { 0.0 };
            let color = match row_colors {
                Some(colors) => colors[row].clone(),
                None => palette_color(row).to_string(),
            };
            let mark = Mark {
                category: category.clone(),
                series: 0,
                value,
                geometry: Geometry::Slice { start, fraction },
                color,
                tooltip: tooltip(category, value),
                label: None,
            };
            start += fraction;
            mark
        })
        .collect();

    let mut artifact = empty_artifact(table, spec, categories);
    artifact.legend = marks
        .iter()
        .map(|m| LegendEntry {
            label: m.category.clone(),
            color: m.color.clone(),
        })
        .collect();
    artifact.series = series_for(table, &fields.values[..1]);
    artifact.marks = marks;
    artifact
}

fn scatter_chart(
    table: &Table,
    spec: &ChartSpec,
    fields: &Fields,
    categories: &[String],
    row_colors: Option<&[String]>,
) -> ChartArtifact {
    // First value field is x; every later one is a y series
    let x_col = fields.values[0];
    let y_cols = &fields.values[1..];
    let xs: Vec<f64> = (0..table.len()).map(|row| value_at(table, row, x_col)).collect();

    let radii: Vec<f64> = match fields.size {
        Some(col) => {
            let sizes: Vec<f64> = (0..table.len()).map(|row| value_at(table, row, col)).collect();
            let max = sizes.iter().cloned().fold(0.0, f64::max);
            sizes
                .iter()
                .map(|s| {
                    if max > 0.0 {
                        (MAX_RADIUS * (s / max).sqrt()).max(MIN_RADIUS)
                    } else {
                        DEFAULT_RADIUS
                    }
                })
                .collect()
        }
        None => vec![DEFAULT_RADIUS; table.len()],
    };

    let series = series_for(table, y_cols);
    let labelled = spec.kind == ChartKind::ScatterWithLabels;

    let mut marks = Vec::with_capacity(categories.len() * y_cols.len());
    let mut ys = Vec::with_capacity(marks.capacity());
    for (row, category) in categories.iter().enumerate() {
        for (s, &col) in y_cols.iter().enumerate() {
            let y = value_at(table, row, col);
            ys.push(y);
            marks.push(Mark {
                category: category.clone(),
                series: s,
                value: y,
                geometry: Geometry::Point {
                    x: xs[row],
                    y,
                    radius: radii[row],
                },
                color: match row_colors {
                    Some(colors) => colors[row].clone(),
                    None => series[s].color.clone(),
                },
                tooltip: tooltip(category, y),
                label: labelled.then(|| category.clone()),
            });
        }
    }

    let extent = |values: &[f64]| {
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    };
    let (x_min, x_max) = extent(xs.as_slice());
    let (y_min, y_max) = extent(ys.as_slice());

    let y_title = if series.len() == 1 {
        series[0].name.clone()
    } else {
        "value".to_string()
    };

    let mut artifact = empty_artifact(table, spec, categories);
    artifact.x_axis = Some(Axis {
        title: table.columns()[x_col].name.to_string(),
        min: x_min,
        max: x_max,
    });
    artifact.y_axis = Some(Axis {
        title: y_title,
        min: y_min,
        max: y_max,
    });
    if series.len() > 1 {
        artifact.legend = series_legend(&series);
    }
    artifact.series = series;
    artifact.marks = marks;
    artifact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::error::ChartError;
    use crate::datasets::registry::{self, *};
    use crate::datasets::{Cell, Column, Record};

    #[test]
    fn test_bar_one_mark_per_row() {
        let table = registry::products();
        let spec = ChartSpec::new(ChartKind::Bar, "Exports", PRODUCT).value(EXPORT_VALUE);
        let chart = render(&table, &spec).unwrap();

        assert_eq!(chart.mark_count(), table.len());
        assert_eq!(chart.categories[0], "Beef");
        assert_eq!(chart.marks[0].tooltip, "Beef: 2100");
        assert!(chart.legend.is_empty());
        assert_eq!(chart.y_axis.as_ref().unwrap().max, 5200.0);
    }

    #[test]
    fn test_rows_keep_table_order() {
        let table = registry::products();
        let spec = ChartSpec::new(ChartKind::Bar, "Exports", PRODUCT).value(EXPORT_VALUE);
        let chart = render(&table, &spec).unwrap();

        let labels: Vec<&str> = chart.marks.iter().map(|m| m.category.as_str()).collect();
        let expected: Vec<&str> = PRODUCTS.iter().map(|p| p.product).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_grouped_bar_marks_grouped_by_category() {
        let table = registry::talent();
        let spec = ChartSpec::new(ChartKind::GroupedBar, "Talent", INITIATIVE)
            .values([YOUTH_PROGRAMS, AWARENESS_CAMPAIGNS]);
        let chart = render(&table, &spec).unwrap();

        assert_eq!(chart.mark_count(), 8);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.legend.len(), 2);

        let first: Vec<&Mark> = chart.marks_for("AgCreds (UCC)").collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].series, 0);
        assert_eq!(first[0].value, 10.0);
        assert_eq!(first[1].series, 1);
        assert_eq!(first[1].value, 12.0);
        assert!(matches!(
            first[1].geometry,
            Geometry::Bar { group: 1, group_count: 2, base, .. } if base == 0.0
        ));
    }

    #[test]
    fn test_plain_bar_stacks_multiple_series() {
        let table = registry::talent();
        let spec = ChartSpec::new(ChartKind::Bar, "Talent", INITIATIVE)
            .values([YOUTH_PROGRAMS, AWARENESS_CAMPAIGNS]);
        let chart = render(&table, &spec).unwrap();

        assert_eq!(chart.mark_count(), 8);
        match &chart.marks[1].geometry {
            Geometry::Bar { base, height, group_count, .. } => {
                assert_eq!(*base, 10.0);
                assert_eq!(*height, 12.0);
                assert_eq!(*group_count, 1);
            }
            other => panic!("unexpected geometry: {:?}", other),
        }
        // Teagasc Traineeships stacks to 22 + 20
        assert_eq!(chart.y_axis.unwrap().max, 43.0);
    }

    #[test]
    fn test_pie_fractions_follow_values() {
        let table = registry::resilience();
        let spec = ChartSpec::new(ChartKind::Pie, "Resilience", STRATEGY).value(ADOPTION_RATE);
        let chart = render(&table, &spec).unwrap();

        let fractions: Vec<f64> = chart
            .marks
            .iter()
            .map(|m| match m.geometry {
                Geometry::Slice { fraction, .. } => fraction,
                _ => panic!("pie mark without slice geometry"),
            })
            .collect();

        let expected = [70.0 / 280.0, 80.0 / 280.0, 62.0 / 280.0, 68.0 / 280.0];
        for (got, want) in fractions.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
        assert_eq!(chart.legend.len(), 4);
        assert!(chart.x_axis.is_none());

        match chart.marks[3].geometry {
            Geometry::Slice { start, fraction } => assert!((start + fraction - 1.0).abs() < 1e-12),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_scatter_with_labels_and_size() {
        let table = registry::agtech();
        let spec = ChartSpec::new(ChartKind::ScatterWithLabels, "AgTech", COMPANY)
            .values([AI_USAGE, BLOCKCHAIN_INTEGRATION])
            .size(AI_USAGE);
        let chart = render(&table, &spec).unwrap();

        assert_eq!(chart.mark_count(), 4);
        assert_eq!(chart.marks[0].label.as_deref(), Some("CropBiome AI"));
        assert_eq!(chart.marks[0].tooltip, "CropBiome AI: 60");
        match chart.marks[0].geometry {
            Geometry::Point { x, y, radius } => {
                assert_eq!((x, y), (82.0, 60.0));
                assert_eq!(radius, MAX_RADIUS);
            }
            _ => panic!("scatter mark without point geometry"),
        }
        assert_eq!(chart.x_axis.unwrap().title, AI_USAGE);
    }

    #[test]
    fn test_scatter_with_size_defaults_to_last_value_field() {
        let table = registry::food_security();
        let spec = ChartSpec::new(ChartKind::ScatterWithSize, "Equity", ORGANIZATION)
            .values([SMALLHOLDER_REACH, EQUITY_SCORE]);
        let chart = render(&table, &spec).unwrap();

        let radii: Vec<f64> = chart
            .marks
            .iter()
            .map(|m| match m.geometry {
                Geometry::Point { radius, .. } => radius,
                _ => 0.0,
            })
            .collect();
        // FAO + Teagasc has the largest equity score
        assert_eq!(radii[1], MAX_RADIUS);
        assert!(radii[3] < radii[0]);
        assert!(chart.marks.iter().all(|m| m.label.is_none()));
    }

    #[test]
    fn test_plain_scatter_uses_default_radius() {
        let table = registry::agtech();
        let spec = ChartSpec::new(ChartKind::Scatter, "AgTech", COMPANY)
            .values([AI_USAGE, BLOCKCHAIN_INTEGRATION]);
        let chart = render(&table, &spec).unwrap();

        assert!(chart.marks.iter().all(|m| matches!(
            m.geometry,
            Geometry::Point { radius, .. } if radius == DEFAULT_RADIUS
        )));
    }

    #[test]
    fn test_numeric_color_field_is_continuous() {
        let table = registry::sustainability();
        let spec = ChartSpec::new(ChartKind::Bar, "Sustainability", FARM)
            .value(CARBON_OFFSET)
            .color(REGENERATIVE_PRACTICES);
        let chart = render(&table, &spec).unwrap();

        match chart.color_scale.as_ref().unwrap() {
            ColorScale::Continuous { min, max, .. } => {
                assert_eq!((*min, *max), (72.0, 78.0));
            }
            other => panic!("expected continuous scale, got {:?}", other),
        }
        assert_eq!(chart.marks[0].color, SCALE_LOW);
        assert_eq!(chart.marks[1].color, SCALE_HIGH);
    }

    #[test]
    fn test_text_color_field_is_discrete() {
        let table = registry::food_innovation();
        let spec = ChartSpec::new(ChartKind::Bar, "Trends", TREND)
            .value(IMPACT_SCORE)
            .color(TREND);
        let chart = render(&table, &spec).unwrap();

        assert_eq!(chart.legend.len(), 5);
        assert_eq!(chart.legend[2].label, "Transparency Tech");
        assert_eq!(chart.marks[2].color, palette_color(2));
        assert!(matches!(chart.color_scale, Some(ColorScale::Discrete { .. })));
    }

    #[test]
    fn test_missing_category_field() {
        let table = registry::products();
        let spec = ChartSpec::new(ChartKind::Bar, "Exports", "Farm").value(EXPORT_VALUE);
        let err = render(&table, &spec).unwrap_err();

        assert_eq!(
            err,
            ChartError::Schema(SchemaError::MissingField {
                table: "products".to_string(),
                field: "Farm".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_color_and_size_fields() {
        let table = registry::agtech();
        let spec = ChartSpec::new(ChartKind::ScatterWithSize, "AgTech", COMPANY)
            .values([AI_USAGE, BLOCKCHAIN_INTEGRATION])
            .size("Headcount");
        assert!(matches!(
            render(&table, &spec),
            Err(ChartError::Schema(SchemaError::MissingField { .. }))
        ));

        let spec = ChartSpec::new(ChartKind::Bar, "AgTech", COMPANY)
            .value(AI_USAGE)
            .color("Region");
        assert!(matches!(
            render(&table, &spec),
            Err(ChartError::Schema(SchemaError::MissingField { .. }))
        ));
    }

    #[test]
    fn test_text_value_field_rejected() {
        let table = registry::products();
        let spec = ChartSpec::new(ChartKind::Bar, "Exports", PRODUCT).value(PRODUCT);

        assert!(matches!(
            render(&table, &spec),
            Err(ChartError::Schema(SchemaError::NotNumeric { .. }))
        ));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::empty("nothing", registry::ProductExport::COLUMNS);
        let spec = ChartSpec::new(ChartKind::Pie, "Nothing", PRODUCT).value(EXPORT_VALUE);

        assert_eq!(
            render(&table, &spec).unwrap_err(),
            ChartError::Render(RenderError::EmptyTable("nothing".to_string()))
        );
    }

    #[test]
    fn test_empty_title_and_no_values() {
        let table = registry::products();

        let spec = ChartSpec::new(ChartKind::Bar, "  ", PRODUCT).value(EXPORT_VALUE);
        assert_eq!(
            render(&table, &spec).unwrap_err(),
            ChartError::Render(RenderError::EmptyTitle)
        );

        let spec = ChartSpec::new(ChartKind::Bar, "Exports", PRODUCT);
        assert_eq!(
            render(&table, &spec).unwrap_err(),
            ChartError::Render(RenderError::NoValueFields)
        );
    }

    #[test]
    fn test_scatter_needs_two_value_fields() {
        let table = registry::products();
        let spec = ChartSpec::new(ChartKind::Scatter, "Exports", PRODUCT).value(EXPORT_VALUE);

        assert_eq!(
            render(&table, &spec).unwrap_err(),
            ChartError::Render(RenderError::ScatterAxes(1))
        );
    }

    #[test]
    fn test_scatter_extra_value_fields_are_series() {
        let table = registry::agtech();
        let spec = ChartSpec::new(ChartKind::ScatterWithLabels, "AgTech", COMPANY)
            .values([AI_USAGE, BLOCKCHAIN_INTEGRATION, AI_USAGE]);
        let chart = render(&table, &spec).unwrap();

        assert_eq!(chart.mark_count(), 8);
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, [BLOCKCHAIN_INTEGRATION, AI_USAGE]);
        assert_eq!(chart.legend.len(), 2);
        assert_eq!(chart.y_axis.as_ref().unwrap().title, "value");

        let first: Vec<&Mark> = chart.marks_for("CropBiome AI").collect();
        assert_eq!(first.len(), 2);
        assert_eq!((first[0].series, first[0].value), (0, 60.0));
        assert_eq!((first[1].series, first[1].value), (1, 82.0));
        assert_ne!(first[0].color, first[1].color);
        assert_eq!(first[1].tooltip, "CropBiome AI: 82");
        assert_eq!(first[1].label.as_deref(), Some("CropBiome AI"));
    }

    #[test]
    fn test_color_field_rejected_with_several_series() {
        let table = registry::talent();
        let spec = ChartSpec::new(ChartKind::GroupedBar, "Talent", INITIATIVE)
            .values([YOUTH_PROGRAMS, AWARENESS_CAMPAIGNS])
            .color(INITIATIVE);
        assert_eq!(
            render(&table, &spec).unwrap_err(),
            ChartError::Render(RenderError::ColorWithSeries {
                field: INITIATIVE.to_string(),
                series: 2,
            })
        );

        let table = registry::agtech();
        let spec = ChartSpec::new(ChartKind::Scatter, "AgTech", COMPANY)
            .values([AI_USAGE, BLOCKCHAIN_INTEGRATION, AI_USAGE])
            .color(COMPANY);
        assert!(matches!(
            render(&table, &spec),
            Err(ChartError::Render(RenderError::ColorWithSeries { series: 2, .. }))
        ));

        // One y series still takes row colors
        let spec = ChartSpec::new(ChartKind::Scatter, "AgTech", COMPANY)
            .values([AI_USAGE, BLOCKCHAIN_INTEGRATION])
            .color(COMPANY);
        assert!(render(&table, &spec).is_ok());
    }

    #[test]
    fn test_zero_total_pie() {
        struct Zero;
        impl Record for Zero {
            const COLUMNS: &'static [Column] = &[Column::text("Name"), Column::numeric("Value")];
            fn cells(&self) -> Vec<Cell> {
                vec![Cell::Text("none"), Cell::Number(0.0)]
            }
        }

        let table = Table::from_records("zero", &[Zero]);
        let spec = ChartSpec::new(ChartKind::Pie, "Zero", "Name").value("Value");
        let chart = render(&table, &spec).unwrap();

        assert!(matches!(
            chart.marks[0].geometry,
            Geometry::Slice { fraction, .. } if fraction == 0.0
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let table = registry::food_innovation();
        let spec = ChartSpec::new(ChartKind::Bar, "Trends", TREND)
            .value(IMPACT_SCORE)
            .color(TREND);

        assert_eq!(render(&table, &spec).unwrap(), render(&table, &spec).unwrap());
    }
}

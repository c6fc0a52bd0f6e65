//! Tests for count plots and bar annotation plans.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use olist_report::{
    AnnotationStyle, AxisLimits, Bar, Palette, ReportError, countplot_annotations,
    percentage_annotations, pie_slices, value_counts,
};

fn orders() -> DataFrame {
    let cols: Vec<Column> = vec![
        Series::new(
            "order_status".into(),
            vec![
                Some("delivered"),
                Some("delivered"),
                Some("shipped"),
                Some("delivered"),
                Some("canceled"),
                Some("delivered"),
                Some("shipped"),
                None,
            ],
        )
        .into_column(),
        Series::new(
            "customer_state".into(),
            vec!["SP", "SP", "RJ", "MG", "SP", "RJ", "SP", "SP"],
        )
        .into_column(),
    ];
    DataFrame::new(cols).unwrap()
}

#[test]
fn value_counts_in_first_seen_order() {
    let counts = value_counts(&orders(), "order_status").unwrap();
    let summary: Vec<(&str, usize)> = counts
        .iter()
        .map(|c| (c.value.as_str(), c.count))
        .collect();
    assert_eq!(
        summary,
        vec![("delivered", 4), ("shipped", 2), ("canceled", 1)]
    );
    // The null row still counts toward the total.
    assert_eq!(counts[0].percent, 50.0);
}

#[test]
fn countplot_uses_requested_column() {
    let (counts, plan) = countplot_annotations(&orders(), "customer_state").unwrap();
    assert_eq!(counts.len(), 3);
    insta::assert_json_snapshot!(plan.texts(), @r###"
    [
      "62.5%",
      "25.0%",
      "12.5%"
    ]
    "###);
    let second = &plan.annotations[1];
    assert!((second.x - 1.4).abs() < 1e-12);
    assert_eq!(second.y, 2.0);
}

#[test]
fn countplot_errors() {
    let err = countplot_annotations(&orders(), "seller_state").unwrap_err();
    assert!(matches!(err, ReportError::ColumnNotFound { .. }));

    let empty = orders().head(Some(0));
    let err = countplot_annotations(&empty, "order_status").unwrap_err();
    assert!(matches!(err, ReportError::ZeroTotal));
}

#[test]
fn percentage_labels_with_title() {
    let bars = vec![
        Bar {
            x: -0.4,
            y: 0.0,
            width: 0.8,
            height: 1200.0,
        },
        Bar {
            x: 0.6,
            y: 0.0,
            width: 0.8,
            height: 800.0,
        },
    ];
    let axis = AxisLimits {
        xmin: -0.5,
        xmax: 1.5,
        ymin: 0.0,
        ymax: 1300.0,
    };
    let style = AnnotationStyle::default().with_title("Revenue by payment type");
    let plan = percentage_annotations(&bars, &orders(), Some(2000.0), &axis, &style).unwrap();
    insta::assert_json_snapshot!(plan.texts(), @r###"
    [
      "60.0%\n1200.0",
      "40.0%\n800.0"
    ]
    "###);
    assert_eq!(plan.title.unwrap().text, "Revenue by payment type");
}

#[test]
fn percentage_total_defaults_to_row_count() {
    let bars = vec![
        Bar {
            x: -0.4,
            y: 0.0,
            width: 0.8,
            height: 4.0,
        },
        Bar {
            x: 0.6,
            y: 0.0,
            width: 0.8,
            height: 2.0,
        },
    ];
    let axis = AxisLimits {
        xmin: -0.5,
        xmax: 1.5,
        ymin: 0.0,
        ymax: 5.0,
    };
    let plan =
        percentage_annotations(&bars, &orders(), None, &axis, &AnnotationStyle::default()).unwrap();
    assert_eq!(plan.texts(), vec!["50.0%\n4.0", "25.0%\n2.0"]);
}

#[test]
fn palette_colours_for_donut() {
    let palette = Palette::default();
    let colors = palette
        .colors(&["BLUE2", "ORANGE1", "GRAY3", "RED1"])
        .unwrap();
    let colors: Vec<&str> = colors.iter().map(String::as_str).collect();
    let labels = ["credit_card", "boleto", "voucher", "debit_card"];
    let slices = pie_slices(&labels, &[4.0, 2.0, 1.0, 1.0], colors.as_slice())
    .unwrap();
    assert_eq!(slices[0].text, "50.0%");
    assert_eq!(slices[3].color.as_deref(), Some("#C3514E"));
}

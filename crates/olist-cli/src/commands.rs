use anyhow::Result;
use tracing::info_span;

use olist_stats::{OutlierOptions, OutlierRule};

use crate::cli::{CountsArgs, FeaturesArgs, LoadArgs, OutlierRuleArg, OutliersArgs};
use crate::summary::{print_counts, print_outliers, print_preview, print_shapes};
use olist_cli::pipeline::{count_report, derive_features, load_shapes, outlier_report, write_csv};

pub fn run_load(args: &LoadArgs) -> Result<()> {
    let span = info_span!("load", data_dir = %args.data_dir.display());
    let _guard = span.enter();
    let shapes = load_shapes(&args.data_dir)?;
    print_shapes(&shapes);
    Ok(())
}

pub fn run_features(args: &FeaturesArgs) -> Result<()> {
    let mut df = derive_features(&args.input, &args.column, &args.prefix)?;
    match &args.output {
        Some(output) => {
            write_csv(&mut df, output)?;
            println!("Wrote {} rows to {}", df.height(), output.display());
        }
        None => print_preview(&df, args.rows),
    }
    Ok(())
}

pub fn run_outliers(args: &OutliersArgs) -> Result<()> {
    let rule = match args.rule {
        OutlierRuleArg::Conjunction => OutlierRule::Conjunction,
        OutlierRuleArg::Disjunction => OutlierRule::Disjunction,
    };
    let options = OutlierOptions::default()
        .with_k_factor(args.k_factor)
        .with_rule(rule);
    let report = outlier_report(&args.input, &args.feature, &options)?;
    print_outliers(&report, &options);
    Ok(())
}

pub fn run_counts(args: &CountsArgs) -> Result<()> {
    let report = count_report(&args.input, &args.column)?;
    print_counts(&report);
    Ok(())
}

//! End-to-end package-check scenarios.

use seep_check::{CheckOptions, Checker};
use seep_core::{CheckConfig, Severity};
use seep_test_utils::fixtures::{
    dis_package, grid_with_inactive, lpf_package, riv_package, uniform_grid,
};
use seep_test_utils::BufferReporter;

fn quiet() -> CheckOptions {
    CheckOptions {
        verbose: false,
        ..CheckOptions::default()
    }
}

#[test]
fn inverted_cell_produces_one_thickness_error() {
    // top = 10, bottom = 12 at one active cell: thickness -2.
    let grid = seep_grid::StructuredGrid::new(
        1,
        2,
        2,
        vec![10.0; 4],
        vec![12.0, 8.0, 8.0, 8.0],
        vec![true; 4],
    )
    .unwrap();
    let dis = dis_package();
    let checker = Checker::new(CheckConfig::default());
    let result = checker
        .check_package(&grid, &dis, 1, &quiet(), &mut BufferReporter::new())
        .unwrap();

    let errors: Vec<_> = result
        .table()
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].package, "DIS");
    assert_eq!(errors[0].indices(), (0, 0, 0));
    assert_eq!(errors[0].value, -2.0);
    assert_eq!(errors[0].desc, "zero or negative cell thickness");

    // The thickness rule failed, so it must not be listed as passed.
    assert!(!result.passed().contains("zero or negative cell thickness"));
    assert!(result.failed().contains("zero or negative cell thickness"));
    // Clean rules still register.
    assert!(result.passed().contains("isolated active cells"));
}

#[test]
fn zero_conductivity_produces_error_with_value_zero() {
    let grid = uniform_grid(1, 2, 2);
    let mut lpf = lpf_package(&grid, 1.0);
    lpf.properties[0].data[2] = 0.0;

    let checker = Checker::new(CheckConfig::default());
    let result = checker
        .check_package(&grid, &lpf, 1, &quiet(), &mut BufferReporter::new())
        .unwrap();

    assert_eq!(result.error_count(), 1);
    let f = &result.table().rows()[0];
    assert_eq!(f.value, 0.0);
    assert!(f.desc.contains("zero or negative hydraulic conductivity"));
    assert!(!result
        .passed()
        .contains("zero or negative hydraulic conductivity"));
}

#[test]
fn bc_rows_into_inactive_cells_flagged_one_per_row() {
    let grid = grid_with_inactive(1, 3, 3, &[(0, 1, 1)]);
    // Two rows into the inactive center, two into active cells.
    let riv = riv_package(vec![
        (0, 1, 1, 2.5, 100.0),
        (0, 0, 0, 2.5, 100.0),
        (0, 1, 1, 2.5, 100.0),
        (0, 2, 2, 2.5, 100.0),
    ]);
    let checker = Checker::new(CheckConfig::default());
    let result = checker
        .check_package(&grid, &riv, 1, &quiet(), &mut BufferReporter::new())
        .unwrap();

    let inactive: Vec<_> = result
        .table()
        .iter()
        .filter(|f| f.desc == "BC in inactive cells")
        .collect();
    assert_eq!(inactive.len(), 2);
    assert!(inactive.iter().all(|f| f.indices() == (0, 1, 1)));
    // Rows addressing active cells produced nothing else for this rule.
    assert!(result.failed().contains("BC in inactive cells"));
    assert!(result.passed().contains("BC indices valid"));
}

#[test]
fn misshapen_property_array_does_not_panic_or_register() {
    // Two hk values on a four-cell grid. The array cannot be addressed by
    // cell, so every rule consuming it skips instead of indexing past the
    // end.
    let grid = uniform_grid(1, 2, 2);
    let mut lpf = lpf_package(&grid, 1.0);
    lpf.properties[0].data.truncate(2);

    let checker = Checker::new(CheckConfig::default());
    let result = checker
        .check_package(&grid, &lpf, 1, &quiet(), &mut BufferReporter::new())
        .unwrap();

    assert!(result.is_clean());
    for name in [
        "NaN values",
        "zero or negative hydraulic conductivity",
        "hydraulic conductivity below checker threshold",
        "hydraulic conductivity above checker threshold",
    ] {
        assert!(!result.passed().contains(name), "{name} should leave no trace");
        assert!(!result.failed().contains(name), "{name} should leave no trace");
    }
}

#[test]
fn clean_package_passes_every_applicable_rule() {
    let grid = uniform_grid(2, 3, 3);
    let dis = dis_package();
    let checker = Checker::new(CheckConfig::default());
    let result = checker
        .check_package(&grid, &dis, 1, &quiet(), &mut BufferReporter::new())
        .unwrap();

    assert!(result.is_clean());
    for name in [
        "zero or negative cell thickness",
        "thin cells (less than checker threshold)",
        "NaN values",
        "isolated active cells",
    ] {
        assert!(result.passed().contains(name), "{name} should have passed");
    }
    // Rules for capabilities DIS does not declare leave no trace.
    assert!(!result.passed().contains("BC indices valid"));
    assert!(!result.failed().contains("BC indices valid"));
}

#[test]
fn checks_are_deterministic_across_runs() {
    let grid = grid_with_inactive(2, 3, 3, &[(0, 1, 1), (1, 2, 2)]);
    let mut lpf = lpf_package(&grid, 1.0);
    lpf.properties[0].data[0] = 0.0;
    lpf.properties[0].data[5] = 1e-12;

    let checker = Checker::new(CheckConfig::default());
    let a = checker
        .check_package(&grid, &lpf, 1, &quiet(), &mut BufferReporter::new())
        .unwrap();
    let b = checker
        .check_package(&grid, &lpf, 1, &quiet(), &mut BufferReporter::new())
        .unwrap();

    assert_eq!(a.table().len(), b.table().len());
    assert_eq!(
        seep_check::render_delimited(a.table()),
        seep_check::render_delimited(b.table())
    );
    let pa: Vec<_> = a.passed().iter().collect();
    let pb: Vec<_> = b.passed().iter().collect();
    assert_eq!(pa, pb);
}

#[test]
fn passed_rule_appears_exactly_once_despite_per_layer_evaluation() {
    let grid = uniform_grid(4, 2, 2);
    let lpf = lpf_package(&grid, 1.0);
    let checker = Checker::new(CheckConfig::default());
    let result = checker
        .check_package(&grid, &lpf, 1, &quiet(), &mut BufferReporter::new())
        .unwrap();

    let count = result
        .passed()
        .iter()
        .filter(|n| *n == "zero or negative hydraulic conductivity")
        .count();
    assert_eq!(count, 1);
}

//! Model-level aggregation: table concatenation, registry merging, and
//! model-scope rules.

use seep_check::{CheckOptions, Checker};
use seep_core::{CheckConfig, Severity};
use seep_model::Model;
use seep_test_utils::fixtures::{
    clean_model, dis_package, grid_with_inactive, lpf_package, pcg_package, riv_package,
    uniform_grid,
};
use seep_test_utils::BufferReporter;

fn quiet() -> CheckOptions {
    CheckOptions {
        verbose: false,
        ..CheckOptions::default()
    }
}

/// Model where DIS is clean, LPF has a zero conductivity, and RIV targets
/// an inactive cell.
fn defective_model() -> Model {
    let grid = grid_with_inactive(1, 3, 3, &[(0, 2, 2)]);
    let mut m = Model::new("demo", grid, 2);
    m.push_package(dis_package());
    let mut lpf = lpf_package(&m.grid, 1.0);
    lpf.properties[0].data[0] = 0.0;
    m.push_package(lpf);
    m.push_package(riv_package(vec![
        (0, 2, 2, 0.5, 10.0),
        (0, 0, 0, 0.5, 10.0),
    ]));
    m.push_package(pcg_package());
    m
}

#[test]
fn model_table_is_ordered_concatenation_of_package_tables() {
    let model = defective_model();
    let checker = Checker::new(CheckConfig::default());
    let model_result = checker
        .check_model(&model, &quiet(), &mut BufferReporter::new())
        .unwrap();

    let mut expected = 0;
    let mut expected_packages: Vec<String> = Vec::new();
    for pkg in &model.packages {
        let r = checker
            .check_package(
                &model.grid,
                pkg,
                model.n_periods,
                &quiet(),
                &mut BufferReporter::new(),
            )
            .unwrap();
        expected += r.table().len();
        expected_packages.extend(r.table().iter().map(|f| f.package.clone()));
    }
    // No model-scope findings in this model (units distinct, solver present).
    assert_eq!(model_result.table().len(), expected);
    let actual_packages: Vec<_> = model_result
        .table()
        .iter()
        .map(|f| f.package.clone())
        .collect();
    assert_eq!(actual_packages, expected_packages);
}

#[test]
fn rule_failing_in_one_package_is_not_passed_at_model_level() {
    let model = defective_model();
    let checker = Checker::new(CheckConfig::default());
    let result = checker
        .check_model(&model, &quiet(), &mut BufferReporter::new())
        .unwrap();

    // LPF failed conductivity positivity; the model-level registry must not
    // list it even though no other package failed it.
    assert!(!result
        .passed()
        .contains("zero or negative hydraulic conductivity"));
    // DIS geometry rules passed everywhere they applied.
    assert!(result.passed().contains("zero or negative cell thickness"));
    // Model-scope rules that passed are listed.
    assert!(result.passed().contains("unique unit numbers"));
    assert!(result.passed().contains("solver package present"));
}

#[test]
fn unit_number_conflict_is_a_model_scope_error() {
    let mut model = clean_model();
    // Give RIV the same unit DIS claims.
    let mut riv = riv_package(vec![(0, 0, 0, 1.5, 10.0)]);
    riv.unit = Some(11);
    model.push_package(riv);

    let checker = Checker::new(CheckConfig::default());
    let result = checker
        .check_model(&model, &quiet(), &mut BufferReporter::new())
        .unwrap();

    let conflicts: Vec<_> = result
        .table()
        .iter()
        .filter(|f| f.desc.contains("unit number conflict"))
        .collect();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].severity, Severity::Error);
    assert_eq!(conflicts[0].package, "RIV");
    assert_eq!(conflicts[0].value, 11.0);
    assert!(!result.passed().contains("unique unit numbers"));
}

#[test]
fn missing_solver_is_reported_against_the_model() {
    let grid = uniform_grid(1, 2, 2);
    let mut model = Model::new("nosolver", grid, 1);
    model.push_package(dis_package());

    let checker = Checker::new(CheckConfig::default());
    let result = checker
        .check_model(&model, &quiet(), &mut BufferReporter::new())
        .unwrap();

    assert_eq!(result.error_count(), 1);
    let f = &result.table().rows()[0];
    assert_eq!(f.desc, "missing solver package");
    assert_eq!(f.package, "nosolver");
}

#[test]
fn clean_model_passes_everything_and_renders_clean() {
    let model = clean_model();
    let mut reporter = BufferReporter::new();
    let checker = Checker::new(CheckConfig::default());
    let result = checker
        .check_model(&model, &CheckOptions::default(), &mut reporter)
        .unwrap();

    assert!(result.is_clean());
    assert!(reporter.text().contains("demo VALIDATION SUMMARY:"));
    assert!(reporter.text().contains("No errors or warnings encountered."));
    assert!(result.passed().contains("solver package present"));
}

#[test]
fn model_report_names_the_owning_package_per_group() {
    let model = defective_model();
    let mut reporter = BufferReporter::new();
    let checker = Checker::new(CheckConfig::default());
    checker
        .check_model(&model, &CheckOptions::default(), &mut reporter)
        .unwrap();
    let text = reporter.text();
    assert!(text.contains("LPF: zero or negative hydraulic conductivity"));
    assert!(text.contains("RIV: BC in inactive cells"));
}

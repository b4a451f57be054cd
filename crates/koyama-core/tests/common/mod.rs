use koyama::core::omega::{DiscreteKoyama, Omega};

pub struct ReferenceCase<'a> {
    pub name: &'a str,
    pub sigma: f64,
    pub bond_length: f64,
    pub length: usize,
    pub persistence_length: f64,
    pub expected: Vec<(f64, f64)>,
}

pub fn run_reference_test(group_name: &str, cases: Vec<ReferenceCase>, max_error_limit: f64) {
    let mut group_max_error: f64 = 0.0;
    let mut total_data_points = 0;

    println!("\nRunning Group Test: {}", group_name);
    println!("{:-<80}", "");
    println!(
        "{:<20} | {:<10} | {:<20} | {:<20}",
        "Case", "k", "Expected", "Calculated"
    );

    for case in cases {
        let model = DiscreteKoyama::new(
            case.sigma,
            case.bond_length,
            case.length,
            case.persistence_length,
        )
        .expect("Model construction failed");

        let k: Vec<f64> = case.expected.iter().map(|&(k, _)| k).collect();
        let omega = model.calculate(&k).expect("Structure factor failed");
        assert_eq!(omega.len(), k.len());

        for ((k, expected), calculated) in case.expected.iter().zip(&omega) {
            let error = (calculated - expected).abs();
            println!(
                "{:<20} | {:<10.4} | {:<20.12} | {:<20.12} (Err: {:.2e})",
                case.name, k, expected, calculated, error
            );
            group_max_error = group_max_error.max(error);
            total_data_points += 1;
        }
    }

    println!("{:-<80}", "");
    println!("Group Statistics for '{}':", group_name);
    println!("  Total Data Points: {}", total_data_points);
    println!(
        "  Group Max Error:   {:.2e} (Limit: {:.2e})",
        group_max_error, max_error_limit
    );

    assert!(
        group_max_error <= max_error_limit,
        "Group '{}' failed: max error {:.2e} > limit {:.2e}",
        group_name,
        group_max_error,
        max_error_limit
    );
}

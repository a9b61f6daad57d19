//! Banner, help hint and per-program overview print-outs.

pub fn print_header() {
    println!();
    println!(
        "arbor {} -- ensemble-tree analytics",
        env!("CARGO_PKG_VERSION")
    );
    println!();
}

pub fn print_help_hint() {
    println!("To get started, run one of the programs with \"-h\" or \"--help\":");
    println!("  arbor filter    Identify statistically significant predictors");
    println!("  arbor build     Build an RF or GBT predictor");
    println!("  arbor predict   Make predictions given a model and novel data");
    println!();
}

pub fn print_filter_overview() {
    println!("PROGRAM: arbor filter");
    println!();
    println!(" Given target feature and input data, applies decision tree ensemble");
    println!(" learning to identify statistically significant predictors.");
    println!();
}

pub fn print_builder_overview() {
    println!("PROGRAM: arbor build");
    println!();
    println!(" Given target feature and input data, builds a Random Forest (RF) or");
    println!(" Gradient Boosting Tree (GBT) predictor.");
    println!();
}

pub fn print_predictor_overview() {
    println!("PROGRAM: arbor predict");
    println!();
    println!(" Makes predictions given a model and novel data.");
    println!();
}

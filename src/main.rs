use anyhow::{Context, Result};
use atsp_ga::ga::{CrossoverMethod, GaConfig, GaResult, GaRunner, PmxPolicy};
use atsp_ga::matrix::load_atsp_file;
use clap::{arg, ArgMatches, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const RULE: &str = "--------------------------------";

fn cli() -> Command {
    Command::new("atsp-ga")
        .about("Solves an ATSP instance with a genetic algorithm")
        .arg(arg!(<FILE> "Path to a TSPLIB .atsp file").value_parser(clap::value_parser!(PathBuf)))
        .arg(
            arg!(-m --method [METHOD] "Crossover method: OX or PMX")
                .default_value("OX")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(-t --time [SECONDS] "Stop criterion: maximum execution time in seconds")
                .default_value("60")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(-p --population [SIZE] "Population size")
                .default_value("100")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--"crossover-rate" [RATE] "Crossover rate in [0, 1]")
                .default_value("0.8")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"mutation-rate" [RATE] "Mutation rate in [0, 1]")
                .default_value("0.01")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"pmx-policy" [POLICY] "Which PMX child to keep: first or best")
                .default_value("first")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(arg!(--seed [SEED] "Random seed for a reproducible run").value_parser(clap::value_parser!(u64)))
        .arg(arg!(--"print-matrix" "Print the loaded distance matrix before solving"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let file = matches
        .get_one::<PathBuf>("FILE")
        .context("missing FILE argument")?;
    let config = build_config(matches)?;

    let matrix = load_atsp_file(file)
        .with_context(|| format!("failed to load {}", file.display()))?;

    if matches.get_flag("print-matrix") {
        print!("{matrix}");
    }

    print_settings(file, &config);
    let result = GaRunner::run(&matrix, &config).context("genetic algorithm failed")?;
    print_result(&result);
    Ok(())
}

fn build_config(matches: &ArgMatches) -> Result<GaConfig> {
    let method: CrossoverMethod = arg_str(matches, "method")?.parse()?;
    let pmx_policy: PmxPolicy = arg_str(matches, "pmx-policy")?.parse()?;

    let mut config = GaConfig::default()
        .with_time_limit_secs(*arg_value::<f64>(matches, "time")?)
        .with_population_size(*arg_value::<usize>(matches, "population")?)
        .with_crossover(method)
        .with_pmx_policy(pmx_policy)
        .with_crossover_rate(*arg_value::<f64>(matches, "crossover-rate")?)
        .with_mutation_rate(*arg_value::<f64>(matches, "mutation-rate")?);
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }
    config.validate()?;
    Ok(config)
}

fn arg_str<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    Ok(arg_value::<String>(matches, id)?.as_str())
}

fn arg_value<'a, T: Clone + Send + Sync + 'static>(matches: &'a ArgMatches, id: &str) -> Result<&'a T> {
    matches
        .get_one::<T>(id)
        .with_context(|| format!("missing --{id}"))
}

fn print_settings(file: &std::path::Path, config: &GaConfig) {
    println!("{RULE}");
    println!("File: {}", file.display());
    println!("Stop criterion: {}s", config.time_limit.as_secs_f64());
    println!("Population size: {}", config.population_size);
    println!("Crossover method: {}", config.crossover);
    println!("Crossover rate: {}", config.crossover_rate);
    println!("Mutation method: Insertion");
    println!("Mutation rate: {}", config.mutation_rate);
    println!("{RULE}");
}

fn print_result(result: &GaResult) {
    println!("Best tour found by GA: {}", result.best);
    println!("{RULE}");
    println!("Best tour cost: {}", result.best_cost);
    println!("{RULE}");
    println!("Generations: {}", result.generations);
    println!("Execution time: {}s", result.elapsed_secs());
    println!("{RULE}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let matches = cli().get_matches_from(["atsp-ga", "ftv47.atsp"]);
        let config = build_config(&matches).expect("defaults are valid");
        assert_eq!(config.population_size, 100);
        assert_eq!(config.crossover, CrossoverMethod::Ox);
        assert_eq!(config.time_limit.as_secs(), 60);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_full_arguments() {
        let matches = cli().get_matches_from([
            "atsp-ga",
            "br17.atsp",
            "--method",
            "pmx",
            "--time",
            "0.5",
            "--population",
            "40",
            "--crossover-rate",
            "0.9",
            "--mutation-rate",
            "0.05",
            "--pmx-policy",
            "best",
            "--seed",
            "7",
        ]);
        let config = build_config(&matches).expect("valid");
        assert_eq!(config.crossover, CrossoverMethod::Pmx);
        assert_eq!(config.pmx_policy, PmxPolicy::BestOfPair);
        assert_eq!(config.population_size, 40);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.time_limit.as_millis(), 500);
    }

    #[test]
    fn test_rejects_unknown_method() {
        let matches = cli().get_matches_from(["atsp-ga", "f.atsp", "--method", "CX"]);
        assert!(build_config(&matches).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_rate() {
        let matches = cli().get_matches_from(["atsp-ga", "f.atsp", "--mutation-rate", "1.5"]);
        assert!(build_config(&matches).is_err());
    }

    #[test]
    fn test_rejects_negative_time() {
        let matches = cli().get_matches_from(["atsp-ga", "f.atsp", "--time=-2.0"]);
        assert!(build_config(&matches).is_err());
    }

    #[test]
    fn test_rejects_tiny_population() {
        let matches = cli().get_matches_from(["atsp-ga", "f.atsp", "-p", "1"]);
        assert!(build_config(&matches).is_err());
    }
}

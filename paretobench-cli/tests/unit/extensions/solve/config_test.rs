use super::*;
use std::fs::File;

fn read_config_file(path: &str) -> Config {
    let file = File::open(path).expect("cannot read config from file");

    read_config(BufReader::new(file)).unwrap()
}

fn parse_config(json: &str) -> Config {
    read_config(BufReader::new(json.as_bytes())).unwrap()
}

#[test]
fn can_read_full_config() {
    let config = read_config_file("../data/config/config.full.json");

    let problem = config.problem.expect("no problem config");
    assert_eq!(problem.name, "zdt1");
    assert_eq!(problem.dimension, Some(30));

    assert_eq!(
        config.algorithm,
        Some(AlgorithmType::Evolutionary {
            population_size: Some(100),
            seed: Some(42),
            crossover_probability: Some(0.9),
            mutation_probability: Some(0.033),
        })
    );

    assert_eq!(config.archive.expect("no archive config").capacity, Some(100));

    let termination = config.termination.expect("no termination config");
    assert_eq!(termination.max_time, Some(300.));
    assert_eq!(termination.max_generations, Some(2000));

    assert_eq!(config.snapshots.expect("no snapshots config").max_snapshots, Some(10));

    let logging = config.telemetry.and_then(|telemetry| telemetry.logging).expect("no logging config");
    assert!(logging.enabled);
    assert_eq!(logging.log_every, Some(100));
}

#[test]
fn can_read_optimal_config() {
    let config = read_config_file("../data/config/config.optimal.json");

    assert_eq!(config.algorithm, Some(AlgorithmType::Optimal { size: Some(1000) }));
    assert!(config.termination.is_none());
}

#[test]
fn can_create_builder_from_config_file() {
    let file = File::open("../data/config/config.minimal.json").expect("cannot read config from file");

    let result = create_builder_from_config_file(BufReader::new(file)).unwrap().build().unwrap().solve().unwrap();

    assert_eq!(result.statistics.generations, 5);
    assert_eq!(result.statistics.population_size, Some(DEFAULT_POPULATION_SIZE));
    assert!(!result.individuals.is_empty());
    result.individuals.iter().for_each(|individual| assert_eq!(individual.decision().len(), 10));
}

#[test]
fn can_run_optimal_algorithm_without_generations() {
    let config = parse_config(
        r#"{ "problem": { "name": "zdt1", "dimension": 3 }, "algorithm": { "type": "optimal", "size": 11 },
             "snapshots": { "maxSnapshots": 2 } }"#,
    );

    let result = create_builder_from_config(&config).unwrap().build().unwrap().solve().unwrap();

    assert_eq!(result.statistics.generations, 0);
    assert_eq!(result.individuals.len(), 11);
    assert_eq!(result.snapshots.len(), 1);
    assert_eq!(result.snapshots[0].iteration(), 0);
}

#[test]
fn can_use_fractional_max_time() {
    let config = parse_config(
        r#"{ "problem": { "name": "zdt1", "dimension": 3 }, "algorithm": { "type": "evolutionary", "populationSize": 4 },
             "termination": { "maxTime": 0.3 } }"#,
    );

    let result = create_builder_from_config(&config).unwrap().build().unwrap().solve().unwrap();

    assert_eq!(config.termination.and_then(|termination| termination.max_time), Some(0.3));
    assert_eq!(result.statistics.time_limit, Some(0.3));
    assert!(result.statistics.solving_time >= 0.3 && result.statistics.solving_time < 5.);
}

#[test]
fn can_reject_invalid_config() {
    let cases = [
        (r#"{}"#, "problem is not specified"),
        (r#"{ "problem": { "name": "dtlz1" } }"#, "unknown problem: 'dtlz1'"),
        (r#"{ "problem": { "name": "zdt5" } }"#, "zdt5 is binary coded and not supported"),
        (r#"{ "problem": { "name": "zdt1", "dimension": 1 } }"#, "problem dimension must be at least two, got 1"),
        (r#"{ "problem": { "name": "zdt1" }, "archive": { "capacity": 0 } }"#, "archive capacity must be greater than zero"),
        (
            r#"{ "problem": { "name": "zdt1" }, "algorithm": { "type": "evolutionary", "populationSize": 1 } }"#,
            "population size must be greater than one",
        ),
        (
            r#"{ "problem": { "name": "zdt1" }, "algorithm": { "type": "evolutionary", "mutationProbability": 2 } }"#,
            "mutation probability must be in [0, 1], got 2",
        ),
        (
            r#"{ "problem": { "name": "zdt1" }, "algorithm": { "type": "optimal", "size": 0 } }"#,
            "optimal sample size must be greater than zero",
        ),
    ];

    for (json, expected) in cases {
        let config = parse_config(json);

        assert_eq!(create_builder_from_config(&config).err(), Some(expected.to_string()), "config: {json}");
    }
}

#[test]
fn can_reject_malformed_config() {
    let result = read_config(BufReader::new("{ \"problem\": ".as_bytes()));

    assert!(result.err().is_some_and(|err| err.starts_with("cannot deserialize config")));
}

#[cfg(test)]
mod integration_tests {
    use crate::config::{load_and_validate_config, RuntimeBuilder, Strategy};
    use crate::engine::comparison::run_all;
    use crate::errors::{ConfigError, ValidationError};
    use std::io::Write;

    /// Test that the benchmark configuration loads and matches the built-in default
    #[test]
    fn test_benchmark_yaml_loading() {
        let config = load_and_validate_config("configs/benchmark.yaml").unwrap();

        assert_eq!(config.strategy, Strategy::Compare);
        assert_eq!(config.iterations, 10_000);
        assert_eq!(config.sections, Some(4));
        assert_eq!(config.tape.padding, 1000);
        assert_eq!(config.tape.pattern, vec![true, false]);
        assert_eq!(config.exchange.timeout_ms, Some(10_000));
        assert!(!config.render.show_tape);
    }

    /// Test that validation failures from a file are reported together
    #[test]
    fn test_invalid_partition_yaml_rejected() {
        let result = load_and_validate_config("configs/invalid-partition.yaml");
        match result {
            Err(ConfigError::Invalid(errors)) => {
                assert_eq!(
                    errors,
                    vec![ValidationError::TooManySections {
                        sections: 8,
                        tape_len: 7,
                    }]
                );
            }
            other => panic!("Expected validation failure, got {:?}", other),
        }
    }

    /// Test a config written to a temporary file end to end
    #[tokio::test]
    async fn test_temp_config_runs_both_updaters() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "iterations: 25\nsections: 5\ntape:\n  padding: 30\n  pattern: [true, true, false]"
        )
        .unwrap();

        let config = load_and_validate_config(file.path()).unwrap();
        let runtime = RuntimeBuilder::from_config(&config);
        assert_eq!(runtime.updaters.len(), 2);

        let runs = run_all(&runtime.updaters, &runtime.tape, runtime.iterations)
            .await
            .unwrap();
        assert_eq!(runs[0].tape, runs[1].tape);
        assert_eq!(runs[0].tape.len(), 33);
    }

    /// Test the small partitioned configuration end to end
    #[tokio::test]
    async fn test_small_partitioned_yaml_runs() {
        let config = load_and_validate_config("configs/small-partitioned.yaml").unwrap();
        assert_eq!(config.render.alive, '#');

        let runtime = RuntimeBuilder::from_config(&config);
        let runs = run_all(&runtime.updaters, &runtime.tape, runtime.iterations)
            .await
            .unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].name, "partitioned");
        assert_eq!(runs[0].tape.len(), 42);
    }

    /// Test that malformed YAML surfaces as a parse error
    #[test]
    fn test_malformed_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "iterations: [not, a, number]\ntape: {{}}").unwrap();
        let result = load_and_validate_config(file.path());
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }
}

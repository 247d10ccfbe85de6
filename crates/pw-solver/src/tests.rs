//! Unit tests for the solver client and the result parser.

#[cfg(test)]
mod extract {
    use std::io::Cursor;

    use pw_core::NodeId;

    use crate::extract::{extract_path, extract_path_file};
    use crate::SolverError;

    fn ids(from: &str, to: &str) -> (NodeId, NodeId) {
        (NodeId::new(from), NodeId::new(to))
    }

    #[test]
    fn single_step() {
        let path = extract_path(Cursor::new("step1: E1 → P2\n")).unwrap();
        assert_eq!(path.steps, vec![ids("E1", "P2")]);
        assert_eq!(path.skipped_lines, 0);
    }

    #[test]
    fn label_with_colons_uses_last_field() {
        let path = extract_path(Cursor::new("tour 1: leg 3: P1 → D4\n")).unwrap();
        assert_eq!(path.steps, vec![ids("P1", "D4")]);
    }

    #[test]
    fn step_without_label() {
        let path = extract_path(Cursor::new("E1 → P1\n")).unwrap();
        assert_eq!(path.steps, vec![ids("E1", "P1")]);
    }

    #[test]
    fn arrowless_lines_ignored() {
        let text = "optimal tour found\n\ncost: 12345 ms\n";
        let path = extract_path(Cursor::new(text)).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.skipped_lines, 0);
    }

    #[test]
    fn double_arrow_skipped_but_extraction_continues() {
        let text = "step1: E1 → P1 → D1\nstep2: P1 → D1\n";
        let path = extract_path(Cursor::new(text)).unwrap();
        assert_eq!(path.steps, vec![ids("P1", "D1")]);
        assert_eq!(path.skipped_lines, 1);
    }

    #[test]
    fn empty_file_yields_empty_path() {
        let path = extract_path(Cursor::new("")).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn steps_keep_artifact_order() {
        let text = "path: E1 → P1\npath: P1 → D1\npath: D1 → P1\n";
        let path = extract_path(Cursor::new(text)).unwrap();
        assert_eq!(
            path.steps,
            vec![ids("E1", "P1"), ids("P1", "D1"), ids("D1", "P1")]
        );
        assert!(path.contains(&NodeId::new("P1"), &NodeId::new("D1")));
        assert!(!path.contains(&NodeId::new("D1"), &NodeId::new("E1")));
    }

    #[test]
    fn missing_artifact_is_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_path_file(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, SolverError::MissingResult(_)));
    }

    #[test]
    fn artifact_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("result.txt");
        std::fs::write(&file, "header\nstep1: E1 → P1\nstep2: P1 → S1\n").unwrap();
        let path = extract_path_file(&file).unwrap();
        assert_eq!(path.steps, vec![ids("E1", "P1"), ids("P1", "S1")]);
    }
}

#[cfg(test)]
mod client {
    use std::path::Path;
    use std::time::Duration;

    use crate::client::{SolverClient, SolverConfig, SolverOutcome};

    fn config(program: &str, args: &[&str], timeout: Option<Duration>) -> SolverConfig {
        SolverConfig {
            program: program.to_owned(),
            args: args.iter().map(|s| s.to_string()).collect(),
            working_dir: None,
            result_path: Path::new("result.txt").to_owned(),
            timeout,
        }
    }

    #[test]
    fn zero_exit_is_solved() {
        let client = SolverClient::new(config("true", &[], None));
        let report = client.solve(Path::new("nodes.csv"), Path::new("arcs.csv"));
        assert!(report.solved());
    }

    #[test]
    fn nonzero_exit_is_failed() {
        let client = SolverClient::new(config("false", &[], None));
        let report = client.solve(Path::new("nodes.csv"), Path::new("arcs.csv"));
        assert!(matches!(report.outcome, SolverOutcome::Failed(_)));
    }

    #[test]
    fn launch_error_is_failed_not_panic() {
        let client = SolverClient::new(config("pw-no-such-solver-binary", &[], None));
        let report = client.solve(Path::new("nodes.csv"), Path::new("arcs.csv"));
        match report.outcome {
            SolverOutcome::Failed(msg) => assert!(msg.contains("launch")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn timeout_kills_and_reports() {
        // The staged paths are appended as extra args; `sh -c` ignores them.
        let client = SolverClient::new(config(
            "sh",
            &["-c", "sleep 5"],
            Some(Duration::from_millis(150)),
        ));
        let report = client.solve(Path::new("nodes.csv"), Path::new("arcs.csv"));
        assert_eq!(report.outcome, SolverOutcome::TimedOut);
        assert!(report.elapsed_ms < 4_000, "killed well before sleep ends");
    }

    #[test]
    fn elapsed_is_measured() {
        let client = SolverClient::new(config("sh", &["-c", "sleep 0.2"], None));
        let report = client.solve(Path::new("nodes.csv"), Path::new("arcs.csv"));
        assert!(report.solved());
        assert!(report.elapsed_ms >= 150, "got {}", report.elapsed_ms);
    }
}

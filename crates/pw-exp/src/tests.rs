//! Unit and end-to-end tests for the experiment harness.

use pw_core::{NodeId, Point, SpeedProfile};
use pw_instance::{Instance, Node};

fn node(id: &str, x: f64, y: f64) -> Node {
    Node::new(NodeId::new(id), Point::new(x, y)).unwrap()
}

/// The §8 scenario instance: one node of each class.
fn four_node_instance() -> Instance {
    let nodes = vec![
        node("E1", 0.0, 0.0),
        node("S1", 1000.0, 0.0),
        node("P1", 400.0, 600.0),
        node("D1", 700.0, 800.0),
    ];
    Instance::from_nodes(nodes, &SpeedProfile::default()).unwrap()
}

#[cfg(test)]
mod index {
    use tempfile::TempDir;

    use crate::next_run_index;

    #[test]
    fn empty_directory_starts_at_one() {
        let dir = TempDir::new().unwrap();
        assert_eq!(next_run_index(dir.path(), "arcs_", ".csv").unwrap(), 1);
    }

    #[test]
    fn idempotent_without_new_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("arcs_3.csv"), "x").unwrap();
        assert_eq!(next_run_index(dir.path(), "arcs_", ".csv").unwrap(), 4);
        assert_eq!(next_run_index(dir.path(), "arcs_", ".csv").unwrap(), 4);
    }

    #[test]
    fn strictly_increasing_as_artifacts_appear() {
        let dir = TempDir::new().unwrap();
        for expected in 1..=4u64 {
            let next = next_run_index(dir.path(), "arcs_", ".csv").unwrap();
            assert_eq!(next, expected);
            std::fs::write(dir.path().join(format!("arcs_{next}.csv")), "x").unwrap();
        }
    }

    #[test]
    fn non_matching_files_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("arcs_9.csv"), "x").unwrap();
        std::fs::write(dir.path().join("nodes_12.csv"), "x").unwrap();
        std::fs::write(dir.path().join("arcs_old.csv"), "x").unwrap();
        std::fs::write(dir.path().join("arcs_7.txt"), "x").unwrap();
        assert_eq!(next_run_index(dir.path(), "arcs_", ".csv").unwrap(), 10);
    }

    #[test]
    fn unreadable_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(next_run_index(&missing, "arcs_", ".csv").is_err());
    }
}

#[cfg(test)]
mod stage {
    use tempfile::TempDir;

    use super::four_node_instance;
    use crate::Stager;

    #[test]
    fn stages_index_qualified_tables() {
        let dir = TempDir::new().unwrap();
        let stager = Stager::new(dir.path().join("runs")).unwrap();
        let staged = stager.stage(&four_node_instance(), 7).unwrap();

        assert!(staged.nodes_path.ends_with("nodes_7.csv"));
        assert!(staged.arcs_path.ends_with("arcs_7.csv"));
        assert!(staged.nodes_path.exists());
        assert!(staged.arcs_path.exists());
    }

    #[test]
    fn staged_tables_reload_identically() {
        let dir = TempDir::new().unwrap();
        let stager = Stager::new(dir.path()).unwrap();
        let instance = four_node_instance();
        let staged = stager.stage(&instance, 1).unwrap();

        let reloaded = pw_instance::Instance::from_tables(
            pw_instance::tables::read_node_table(&staged.nodes_path).unwrap(),
            pw_instance::tables::read_arc_table(&staged.arcs_path).unwrap(),
        )
        .unwrap();
        assert_eq!(reloaded, instance);
    }

    #[test]
    fn archives_result_artifact() {
        let dir = TempDir::new().unwrap();
        let stager = Stager::new(dir.path().join("runs")).unwrap();
        let artifact = dir.path().join("result.txt");
        std::fs::write(&artifact, "path: E1 → P1\n").unwrap();

        let copy = stager.archive_result(&artifact, 3).unwrap();
        assert!(copy.ends_with("result_3.txt"));
        assert_eq!(
            std::fs::read_to_string(copy).unwrap(),
            "path: E1 → P1\n"
        );
    }
}

#[cfg(test)]
mod log {
    use pw_instance::ClassCounts;
    use tempfile::TempDir;

    use crate::{ExperimentLog, RunRecord};

    fn record(index: u64) -> RunRecord {
        let counts = ClassCounts { entries: 1, exits: 1, parkings: 1, objectives: 2 };
        RunRecord::new(index, counts, 1234)
    }

    #[test]
    fn creates_file_with_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("experiments.csv");
        ExperimentLog::open(&path).unwrap();

        let mut r = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = r.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["index", "entries", "exits", "parkings", "objectives", "total_nodes", "execution_ms"]
        );
    }

    #[test]
    fn appends_without_rewriting() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("experiments.csv");

        let log = ExperimentLog::open(&path).unwrap();
        log.append(&record(1)).unwrap();

        // Re-opening must not truncate or re-write the header.
        let log = ExperimentLog::open(&path).unwrap();
        log.append(&record(2)).unwrap();

        let mut r = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = r.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[1][0], "2");
        assert_eq!(&rows[0][5], "5"); // total_nodes
        assert_eq!(&rows[0][6], "1234"); // execution_ms
    }
}

#[cfg(test)]
mod pipeline {
    use std::path::PathBuf;
    use std::time::Duration;

    use pw_solver::SolverConfig;
    use tempfile::TempDir;

    use super::four_node_instance;
    use crate::{Experiment, RunOutcome};

    /// A fake solver: a shell one-liner that writes `script_output` to the
    /// result path, then exits with `code`.
    fn fake_solver(result_path: PathBuf, script: &str, timeout: Option<Duration>) -> SolverConfig {
        SolverConfig {
            program: "sh".to_owned(),
            args: vec!["-c".to_owned(), script.to_owned()],
            working_dir: None,
            result_path,
            timeout,
        }
    }

    fn read_log(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut r = csv::Reader::from_path(path).unwrap();
        r.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn solved_run_end_to_end() {
        let dir = TempDir::new().unwrap();
        let result = dir.path().join("result.txt");
        let script = format!(
            "printf 'path: E1 → P1\\npath: P1 → D1\\n' > {}",
            result.display()
        );
        let exp = Experiment::new(dir.path(), fake_solver(result, &script, None)).unwrap();

        let summary = exp.run(&four_node_instance()).unwrap();
        assert_eq!(summary.index, 1);
        assert_eq!(summary.outcome, RunOutcome::Solved { steps: 2 });

        // Artifacts are index-qualified.
        let diagram = summary.diagram.unwrap();
        assert!(diagram.ends_with("graph_1.png"));
        assert!(diagram.exists());
        let copy = summary.result_copy.unwrap();
        assert!(copy.ends_with("result_1.txt"));
        assert!(dir.path().join("runs/nodes_1.csv").exists());
        assert!(dir.path().join("runs/arcs_1.csv").exists());

        // Log row: 1 of each class except objectives, 4 nodes total.
        let rows = read_log(exp.log_path());
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "1"); // index
        assert_eq!(&rows[0][1], "1"); // entries
        assert_eq!(&rows[0][2], "1"); // exits
        assert_eq!(&rows[0][3], "1"); // parkings
        assert_eq!(&rows[0][4], "1"); // objectives
        assert_eq!(&rows[0][5], "4"); // total_nodes
    }

    #[test]
    fn indices_increase_across_runs() {
        let dir = TempDir::new().unwrap();
        let result = dir.path().join("result.txt");
        let script = format!("printf 'path: E1 → P1\\n' > {}", result.display());
        let exp = Experiment::new(dir.path(), fake_solver(result, &script, None)).unwrap();

        let instance = four_node_instance();
        assert_eq!(exp.run(&instance).unwrap().index, 1);
        assert_eq!(exp.run(&instance).unwrap().index, 2);
        assert_eq!(exp.run(&instance).unwrap().index, 3);
        assert_eq!(read_log(exp.log_path()).len(), 3);
    }

    #[test]
    fn solver_failure_still_logs_run() {
        let dir = TempDir::new().unwrap();
        let result = dir.path().join("result.txt");
        let exp =
            Experiment::new(dir.path(), fake_solver(result, "exit 3", None)).unwrap();

        let summary = exp.run(&four_node_instance()).unwrap();
        assert!(matches!(summary.outcome, RunOutcome::SolverFailed(_)));
        assert!(summary.diagram.is_none());
        assert_eq!(read_log(exp.log_path()).len(), 1);
    }

    #[test]
    fn missing_artifact_is_no_solution_and_logged() {
        let dir = TempDir::new().unwrap();
        let result = dir.path().join("result.txt");
        // Solver exits 0 but writes nothing.
        let exp = Experiment::new(dir.path(), fake_solver(result, "exit 0", None)).unwrap();

        let summary = exp.run(&four_node_instance()).unwrap();
        assert_eq!(summary.outcome, RunOutcome::NoSolution);
        assert!(summary.diagram.is_none());
        assert_eq!(read_log(exp.log_path()).len(), 1);
    }

    #[test]
    fn timeout_is_reported_and_logged() {
        let dir = TempDir::new().unwrap();
        let result = dir.path().join("result.txt");
        let exp = Experiment::new(
            dir.path(),
            fake_solver(result, "sleep 5", Some(Duration::from_millis(100))),
        )
        .unwrap();

        let summary = exp.run(&four_node_instance()).unwrap();
        assert_eq!(summary.outcome, RunOutcome::SolverTimedOut);
        assert_eq!(read_log(exp.log_path()).len(), 1);
    }

    #[test]
    fn stale_artifact_from_previous_run_is_ignored() {
        let dir = TempDir::new().unwrap();
        let result = dir.path().join("result.txt");
        std::fs::write(&result, "path: E1 → P1\n").unwrap();

        // This run's solver writes nothing; the leftover artifact must not
        // be mistaken for its result.
        let exp =
            Experiment::new(dir.path(), fake_solver(result, "exit 0", None)).unwrap();
        let summary = exp.run(&four_node_instance()).unwrap();
        assert_eq!(summary.outcome, RunOutcome::NoSolution);
    }
}

//! Validator, gold loader and scoring engine working together on a
//! directory layout like the one handed out to participants.

use std::fs;
use std::path::Path;

use dankmemes_eval::metrics::PrfScores;
use dankmemes_eval::scoring::{MetricKind, MetricOutcome, ScoreOutcome, ScoringEngine};
use dankmemes_eval::submission::{RejectReason, SubmissionValidator, TaskName};
use dankmemes_eval::{EvalError, GoldStandardLoader};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn layout() -> TempDir {
    let root = TempDir::new().unwrap();
    let results = root.path().join("results");
    let gold = root.path().join("gold");
    fs::create_dir(&results).unwrap();
    fs::create_dir(&gold).unwrap();

    write(&gold, "meme_test.csv", "File,Meme\na,1\nb,0\nc,1\nd,0\n");
    write(&gold, "hate_test.csv", "File,Hate Speech\na,0\nb,1\n");
    write(&gold, "event_test.csv", "File,Event\na,0\nb,0\nc,1\nd,1\n");
    write(&gold, "README.md", "not a table\n");

    write(&results, "dankmemes-task1-team-one-1.csv", "File,Label\na,1\nb,1\nc,0\nd,0\n");
    write(&results, "dankmemes-task2-team-1.csv", "File,Label\na,0\nb,1\n");
    write(&results, "dankmemes-task3_labelled-team-1.csv", "File,Label\na,0\nb,1\nc,1\nd,1\n");
    write(&results, "dankmemes-task3_unlabelled-team-1.csv", "File,Label\na,7\nb,7\nc,3\nd,3\n");
    write(
        &results,
        "dankmemes-task3_unlabelled_distances-team-1.csv",
        "Image 1,Image 2,Distance\na,b,1\na,c,5\na,d,5\nb,c,5\nb,d,5\nc,d,1\n",
    );
    write(&results, "dankmemes-task4-team-1.csv", "File,Label\na,1\n");
    write(&results, "dankmemes-task2-team-2.csv", "File,Score\na,1\n");
    write(&results, ".dankmemes-task1-team-9.csv", "File,Label\na,1\n");

    root
}

#[test]
fn validation_splits_accepted_and_rejected() {
    let root = layout();
    let report = SubmissionValidator::new(root.path().join("results"))
        .validate()
        .unwrap();

    let tasks: Vec<TaskName> = report
        .accepted
        .iter()
        .map(|s| s.metadata.task_name)
        .collect();
    assert_eq!(
        tasks,
        vec![
            TaskName::Task1,
            TaskName::Task2,
            TaskName::Task3Labelled,
            TaskName::Task3Unlabelled,
            TaskName::Task3UnlabelledDistances,
        ]
    );
    assert_eq!(report.accepted[0].metadata.team_name, "team-one");

    assert_eq!(report.rejected.len(), 2);
    assert!(
        report
            .rejected
            .iter()
            .any(|r| r.reason == RejectReason::MalformedFilename)
    );
    assert!(
        report
            .rejected
            .iter()
            .any(|r| matches!(r.reason, RejectReason::MalformedSchema { .. }))
    );
}

#[test]
fn every_task_is_scored_with_its_strategy() {
    let root = layout();
    let submissions = SubmissionValidator::new(root.path().join("results"))
        .validate()
        .unwrap()
        .accepted;
    let gold = GoldStandardLoader::new(root.path().join("gold"))
        .load()
        .unwrap();
    let engine = ScoringEngine::new(&gold);

    let reports: Vec<_> = submissions
        .iter()
        .map(|s| match engine.score(s) {
            ScoreOutcome::Scored { report, warnings } => {
                assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
                report
            }
            ScoreOutcome::Skipped(skipped) => panic!("skipped: {}", skipped.reason),
        })
        .collect();

    // task1: TP=1 FP=1 FN=1
    assert_eq!(reports[0].evaluation.kind, MetricKind::Binary);
    assert_eq!(
        reports[0].evaluation.outcome,
        MetricOutcome::Scores(PrfScores::new(0.5, 0.5, 0.5))
    );

    assert_eq!(
        reports[1].evaluation.outcome,
        MetricOutcome::Scores(PrfScores::new(1.0, 1.0, 1.0))
    );

    assert_eq!(reports[2].evaluation.kind, MetricKind::MacroAveraged);
    assert_eq!(
        reports[2].evaluation.outcome,
        MetricOutcome::Scores(PrfScores::new(0.8333, 0.75, 0.7333))
    );

    // Cluster ids differ from the gold ones but the partition is the same
    assert_eq!(reports[3].evaluation.kind, MetricKind::Pairwise);
    assert_eq!(
        reports[3].evaluation.outcome,
        MetricOutcome::Scores(PrfScores::new(1.0, 1.0, 1.0))
    );

    assert_eq!(reports[4].evaluation.kind, MetricKind::Silhouette);
    assert!(reports[4].sanity.is_none());
    // no self distances were submitted, so the matrix is flagged as incomplete
    assert_eq!(reports[4].notices.len(), 1);
    match reports[4].evaluation.outcome {
        MetricOutcome::Silhouette { score } => assert!((score - 0.8).abs() < 1e-12),
        ref other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn unknown_gold_file_is_fatal() {
    let root = layout();
    write(&root.path().join("gold"), "random.csv", "File,Meme\na,1\n");

    let err = GoldStandardLoader::new(root.path().join("gold"))
        .load()
        .unwrap_err();
    assert!(matches!(err, EvalError::InvalidGoldFile { .. }));
}

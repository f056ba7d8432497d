//! Integration tests: DeploymentLoop → ports → report stream / events.

use std::time::Duration;

use ecoguard::app::events::DeploymentEvent;
use ecoguard::app::service::{DeploymentLoop, RunOutcome};
use ecoguard::classifier::simulated::SimulatedClassifier;
use ecoguard::classifier::{Detection, Indicator};
use ecoguard::config::DeploymentConfig;
use ecoguard::error::ClassifierError;
use ecoguard::fsm::LoopState;
use ecoguard::sensors::simulated::SimulatedProbe;
use ecoguard::shutdown::ShutdownSignal;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::mock_ports::{
    BrokenPipe, RecordingSink, ScriptedClassifier, ScriptedProbe, StepPacer, lines,
};

fn config() -> DeploymentConfig {
    DeploymentConfig::default()
}

// ── Report format ─────────────────────────────────────────────

#[test]
fn first_iteration_prints_exact_report() {
    let mut lp = DeploymentLoop::new(
        &config(),
        ScriptedProbe::steady(7.00, 3.00, 1.50),
        ScriptedClassifier::healthy(0.90),
        StepPacer::stop_after(1),
        ShutdownSignal::new(),
    );
    let mut out = Vec::new();
    let mut sink = RecordingSink::new();
    lp.run(&mut out, &mut sink);

    let lines = lines(&out);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "[DATA #1] pH: 7.0 | Turbidity: 3.0 NTU | Nitrogen: 1.5 mg/L");
    assert_eq!(lines[1], "[AI]   Detection: Healthy Algae (confidence: 90.00%)");
    assert_eq!(lines[2], "-".repeat(70));
}

#[test]
fn iteration_numbers_count_up_from_one() {
    let mut lp = DeploymentLoop::new(
        &config(),
        ScriptedProbe::steady(7.25, 2.5, 0.75),
        ScriptedClassifier::healthy(0.9),
        StepPacer::stop_after(4),
        ShutdownSignal::new(),
    );
    let mut out = Vec::new();
    lp.run(&mut out, &mut RecordingSink::new());

    let data: Vec<_> = lines(&out).into_iter().filter(|l| l.starts_with("[DATA")).collect();
    assert_eq!(data.len(), 4);
    for (i, line) in data.iter().enumerate() {
        assert!(line.starts_with(&format!("[DATA #{}] ", i + 1)), "{line}");
    }
}

#[test]
fn classifier_is_always_called_without_payload() {
    let mut classifier = ScriptedClassifier::healthy(0.9);
    {
        let mut lp = DeploymentLoop::new(
            &config(),
            ScriptedProbe::steady(7.0, 3.0, 1.5),
            &mut classifier,
            StepPacer::stop_after(3),
            ShutdownSignal::new(),
        );
        lp.run(&mut Vec::new(), &mut RecordingSink::new());
    }
    assert_eq!(classifier.payloads_seen, vec![false, false, false]);
}

#[test]
fn pacer_receives_configured_interval() {
    let mut pacer = StepPacer::stop_after(2);
    {
        let mut lp = DeploymentLoop::new(
            &config(),
            ScriptedProbe::steady(7.0, 3.0, 1.5),
            ScriptedClassifier::healthy(0.9),
            &mut pacer,
            ShutdownSignal::new(),
        );
        lp.run(&mut Vec::new(), &mut RecordingSink::new());
    }
    assert_eq!(pacer.intervals, vec![Duration::from_secs(5); 2]);
}

// ── Classifier fault isolation ────────────────────────────────

#[test]
fn always_failing_classifier_never_stops_the_loop() {
    let mut lp = DeploymentLoop::new(
        &config(),
        ScriptedProbe::steady(7.0, 3.0, 1.5),
        ScriptedClassifier::always(Err(ClassifierError::Inference("tensor arena exhausted".into()))),
        StepPacer::stop_after(25),
        ShutdownSignal::new(),
    );
    let mut out = Vec::new();
    let mut sink = RecordingSink::new();
    let outcome = lp.run(&mut out, &mut sink);

    assert!(outcome.is_clean());
    assert_eq!(outcome.summary().samples_collected, 25);
    assert_eq!(outcome.summary().classifier_faults, 25);

    let detections: Vec<_> = lines(&out).into_iter().filter(|l| l.starts_with("[AI]")).collect();
    assert_eq!(detections.len(), 25);
    assert!(
        detections
            .iter()
            .all(|l| l == "[AI]   Detection: ERROR (confidence: 0.00%)")
    );
    assert_eq!(sink.classifier_faults(), 25);
    assert!(sink.loop_faults().is_empty());
}

#[test]
fn intermittent_classifier_fault_only_affects_its_iteration() {
    let ok = |indicator: Indicator, confidence: f64| -> Result<Detection, ClassifierError> {
        Ok(Detection { indicator, confidence })
    };
    let mut lp = DeploymentLoop::new(
        &config(),
        ScriptedProbe::steady(7.0, 3.0, 1.5),
        ScriptedClassifier::script(vec![
            ok(Indicator::EColi, 0.91),
            Err(ClassifierError::ModelNotLoaded),
            ok(Indicator::Chaoborus, 0.875),
        ]),
        StepPacer::stop_after(3),
        ShutdownSignal::new(),
    );
    let mut out = Vec::new();
    let mut sink = RecordingSink::new();
    lp.run(&mut out, &mut sink);

    let detections: Vec<_> = lines(&out).into_iter().filter(|l| l.starts_with("[AI]")).collect();
    assert_eq!(
        detections,
        vec![
            "[AI]   Detection: E. coli (confidence: 91.00%)",
            "[AI]   Detection: ERROR (confidence: 0.00%)",
            "[AI]   Detection: Chaoborus spp. (confidence: 87.50%)",
        ]
    );
    assert_eq!(
        sink.events.iter().find(|e| matches!(e, DeploymentEvent::ClassifierFault { .. })),
        Some(&DeploymentEvent::ClassifierFault {
            sample: 2,
            error: ClassifierError::ModelNotLoaded,
        })
    );
}

// ── Loop faults ───────────────────────────────────────────────

#[test]
fn probe_fault_ends_the_run_with_one_diagnostic() {
    let mut lp = DeploymentLoop::new(
        &config(),
        ScriptedProbe::failing_on(1, "probe bus timeout"),
        ScriptedClassifier::healthy(0.9),
        StepPacer::stop_after(100),
        ShutdownSignal::new(),
    );
    let mut out = Vec::new();
    let mut sink = RecordingSink::new();
    let outcome = lp.run(&mut out, &mut sink);

    assert!(matches!(outcome, RunOutcome::Faulted(_)));
    assert!(out.is_empty());
    let faults = sink.loop_faults();
    assert_eq!(faults.len(), 1);
    assert!(faults[0].0.contains("probe bus timeout"));
    assert!(faults[0].1.contains("probe bus timeout"));
    assert!(sink.shutdowns().is_empty());
    assert_eq!(sink.classifier_faults(), 0);
}

#[test]
fn probe_fault_after_good_samples_keeps_earlier_reports() {
    let mut lp = DeploymentLoop::new(
        &config(),
        ScriptedProbe::failing_on(3, "ADC saturated"),
        ScriptedClassifier::healthy(0.9),
        StepPacer::stop_after(100),
        ShutdownSignal::new(),
    );
    let mut out = Vec::new();
    let mut sink = RecordingSink::new();
    let outcome = lp.run(&mut out, &mut sink);

    assert_eq!(outcome.summary().samples_collected, 3);
    assert_eq!(outcome.summary().final_state, LoopState::Running);
    assert_eq!(lines(&out).len(), 6);
    assert_eq!(sink.loop_faults().len(), 1);
}

#[test]
fn report_write_failure_is_fatal() {
    let mut lp = DeploymentLoop::new(
        &config(),
        ScriptedProbe::steady(7.0, 3.0, 1.5),
        ScriptedClassifier::healthy(0.9),
        StepPacer::stop_after(100),
        ShutdownSignal::new(),
    );
    let mut sink = RecordingSink::new();
    let outcome = lp.run(&mut BrokenPipe { ok_writes: 4 }, &mut sink);

    assert!(!outcome.is_clean());
    let faults = sink.loop_faults();
    assert_eq!(faults.len(), 1);
    assert!(faults[0].0.starts_with("report output"));
    assert!(faults[0].1.contains("stdout closed"));
}

#[test]
fn pacer_failure_is_fatal() {
    let mut lp = DeploymentLoop::new(
        &config(),
        ScriptedProbe::steady(7.0, 3.0, 1.5),
        ScriptedClassifier::healthy(0.9),
        StepPacer::failing_on(2),
        ShutdownSignal::new(),
    );
    let mut out = Vec::new();
    let mut sink = RecordingSink::new();
    let outcome = lp.run(&mut out, &mut sink);

    assert!(!outcome.is_clean());
    assert_eq!(outcome.summary().samples_collected, 2);
    assert!(sink.loop_faults()[0].0.contains("clock source lost"));
}

// ── Interrupt / shutdown ──────────────────────────────────────

#[test]
fn interrupt_after_n_iterations_reports_n() {
    for n in [1u64, 3, 10] {
        let mut lp = DeploymentLoop::new(
            &config(),
            ScriptedProbe::steady(7.0, 3.0, 1.5),
            ScriptedClassifier::healthy(0.9),
            StepPacer::stop_after(n),
            ShutdownSignal::new(),
        );
        let mut out = Vec::new();
        let mut sink = RecordingSink::new();
        let outcome = lp.run(&mut out, &mut sink);

        assert!(outcome.is_clean());
        assert_eq!(lines(&out).len() as u64, 3 * n);
        let shutdowns = sink.shutdowns();
        assert_eq!(shutdowns.len(), 1);
        match shutdowns[0] {
            DeploymentEvent::Shutdown(summary) => {
                assert_eq!(summary.samples_collected, n);
                assert_eq!(summary.final_state, LoopState::ShuttingDown);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}

#[test]
fn shutdown_is_the_last_event_and_follows_state_change() {
    let mut lp = DeploymentLoop::new(
        &config(),
        ScriptedProbe::steady(7.0, 3.0, 1.5),
        ScriptedClassifier::healthy(0.9),
        StepPacer::stop_after(2),
        ShutdownSignal::new(),
    );
    let mut sink = RecordingSink::new();
    lp.run(&mut Vec::new(), &mut sink);

    let n = sink.events.len();
    assert!(n >= 2);
    assert_eq!(
        sink.events[n - 2],
        DeploymentEvent::StateChanged {
            from: LoopState::Running,
            to: LoopState::ShuttingDown,
        }
    );
    assert!(matches!(sink.events[n - 1], DeploymentEvent::Shutdown(_)));
}

#[test]
fn interrupt_mid_iteration_suppresses_that_report_but_keeps_the_count() {
    let shutdown = ShutdownSignal::new();
    let classifier = ScriptedClassifier::healthy(0.9).interrupting_on(3, shutdown.clone());
    let mut lp = DeploymentLoop::new(
        &config(),
        ScriptedProbe::steady(7.0, 3.0, 1.5),
        classifier,
        StepPacer::stop_after(u64::MAX),
        shutdown,
    );
    let mut out = Vec::new();
    let mut sink = RecordingSink::new();
    let outcome = lp.run(&mut out, &mut sink);

    assert!(outcome.is_clean());
    assert_eq!(lines(&out).len(), 6, "only the two finished iterations are reported");
    assert_eq!(outcome.summary().samples_collected, 3);
    assert_eq!(sink.shutdowns().len(), 1);
}

#[test]
fn step_after_shutdown_does_nothing() {
    let shutdown = ShutdownSignal::new();
    let mut lp = DeploymentLoop::new(
        &config(),
        ScriptedProbe::steady(7.0, 3.0, 1.5),
        ScriptedClassifier::healthy(0.9),
        StepPacer::stop_after(1),
        shutdown,
    );
    let mut out = Vec::new();
    let mut sink = RecordingSink::new();
    lp.run(&mut out, &mut sink);
    let before = out.len();

    assert_eq!(lp.step(&mut out, &mut sink).unwrap(), LoopState::ShuttingDown);
    assert_eq!(out.len(), before);
    assert_eq!(lp.sample_count(), 1);
}

// ── Seeded end-to-end ─────────────────────────────────────────

fn seeded_run(seed: u64, iterations: u64) -> Vec<u8> {
    let cfg = config();
    let mut lp = DeploymentLoop::new(
        &cfg,
        SimulatedProbe::new(&cfg, StdRng::seed_from_u64(seed)),
        SimulatedClassifier::new(&cfg.classifier, StdRng::seed_from_u64(seed ^ 0xEC0)).unwrap(),
        StepPacer::stop_after(iterations),
        ShutdownSignal::new(),
    );
    let mut out = Vec::new();
    lp.run(&mut out, &mut RecordingSink::new());
    out
}

#[test]
fn seeded_runs_are_reproducible() {
    assert_eq!(seeded_run(2026, 20), seeded_run(2026, 20));
}

#[test]
fn seeded_run_reports_stay_within_policy() {
    let out = seeded_run(7, 200);
    for line in lines(&out).iter().filter(|l| l.starts_with("[AI]")) {
        assert!(
            ["E. coli", "Chaoborus spp.", "Healthy Algae"]
                .iter()
                .any(|label| line.contains(&format!("Detection: {label} ("))),
            "{line}"
        );
        let pct: f64 = line
            .rsplit("confidence: ")
            .next()
            .and_then(|s| s.strip_suffix("%)"))
            .and_then(|s| s.parse().ok())
            .unwrap();
        assert!((85.0..=99.0).contains(&pct), "{line}");
    }
}

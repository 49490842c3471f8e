use approx::assert_relative_eq;
use rumor::prelude::*;

mod common;
use common::{non_decreasing, non_increasing};

/// Slack for monotonicity checks between neighbouring grid points.
const SLACK: f64 = 1e-9;

#[test]
fn reference_scenario() {
    let trajectory = simulate(0.5, 0.1, 0.99, 0.01, 0.0, 30.0).unwrap();

    let times = trajectory.times();
    assert_eq!(times.len(), 300);
    assert_eq!(times[0], 0.0);
    assert_eq!(times[299], 30.0);
    assert!(times.windows(2).all(|w| w[1] > w[0]));

    let initial = trajectory.initial().unwrap();
    assert_eq!(*initial, RumorState::new(0.99, 0.01, 0.0));

    // I decays toward a small positive residual
    let ignorant = trajectory.ignorant();
    assert!(non_increasing(&ignorant, SLACK));
    let residual = trajectory.last().unwrap().ignorant;
    assert!(residual > 0.0 && residual < 0.01, "residual = {residual}");

    let stats = trajectory.stats();
    assert!(stats.naccpt > 0);
    assert!(stats.nfev >= 6 * stats.nstep);
}

#[test]
fn defaults_match_reference_scenario() {
    let explicit = simulate(0.5, 0.1, 0.99, 0.01, 0.0, 30.0).unwrap();
    let defaults = simulate_rumor(0.5, 0.1).unwrap();

    assert_eq!(explicit.times(), defaults.times());
    assert_eq!(explicit.states(), defaults.states());
}

#[test]
fn population_is_conserved() {
    for (beta, gamma) in [(0.5, 0.1), (2.0, 1.0), (0.1, 0.5), (3.0, 0.05)] {
        let trajectory = simulate_rumor(beta, gamma).unwrap();
        assert!(
            trajectory.max_conservation_error() < 1e-10,
            "beta = {beta}, gamma = {gamma}"
        );
        for (_, state) in trajectory.iter() {
            assert_relative_eq!(state.total(), 1.0, epsilon = 1e-10);
        }
    }
}

#[test]
fn ignorants_decrease_and_stiflers_increase() {
    for (beta, gamma) in [(0.5, 0.1), (2.0, 1.0), (0.1, 0.5)] {
        let trajectory = simulate_rumor(beta, gamma).unwrap();
        assert!(non_increasing(&trajectory.ignorant(), SLACK));
        assert!(non_decreasing(&trajectory.stiflers(), SLACK));
    }
}

#[test]
fn first_integral_is_preserved() {
    // ln I - I + (beta / gamma) R is constant along solutions with I + S + R = 1
    let (beta, gamma) = (0.5, 0.1);
    let trajectory = simulate_rumor(beta, gamma).unwrap();
    let invariant = |s: &RumorState| s.ignorant.ln() - s.ignorant + beta / gamma * s.stiflers;

    let expected = invariant(trajectory.initial().unwrap());
    for (t, state) in trajectory.iter() {
        assert!(
            (invariant(state) - expected).abs() < 1e-5,
            "drift at t = {t}"
        );
    }
}

#[test]
fn spreaders_peak_then_decline() {
    let trajectory = simulate_rumor(0.5, 0.1).unwrap();
    let (t_peak, s_peak) = trajectory.peak_spreaders().unwrap();

    assert!(t_peak > 12.0 && t_peak < 14.5, "t_peak = {t_peak}");
    assert!(s_peak > 0.6 && s_peak < 0.7, "s_peak = {s_peak}");

    let spreaders = trajectory.spreaders();
    let split = trajectory.times().iter().position(|&t| t >= t_peak).unwrap();
    assert!(non_decreasing(&spreaders[..=split], SLACK));
    assert!(non_increasing(&spreaders[split..], SLACK));
}

#[test]
fn no_spreading_keeps_ignorants_constant() {
    let trajectory = simulate(0.0, 0.1, 0.99, 0.01, 0.0, 30.0).unwrap();

    for (_, state) in trajectory.iter() {
        assert_eq!(state.ignorant, 0.99);
    }
    assert!(non_increasing(&trajectory.spreaders(), SLACK));
    assert!(non_decreasing(&trajectory.stiflers(), SLACK));
}

#[test]
fn no_stifling_follows_logistic_growth() {
    let (beta, s0) = (0.5, 0.01);
    let trajectory = simulate(beta, 0.0, 0.99, s0, 0.0, 30.0).unwrap();

    for (t, state) in trajectory.iter() {
        // With R fixed at 0, S' = beta S (1 - S)
        let growth = (beta * t).exp();
        let logistic = s0 * growth / (1.0 - s0 + s0 * growth);
        assert!((state.spreaders - logistic).abs() < 1e-6, "t = {t}");
        assert_eq!(state.stiflers, 0.0);
    }

    // Once ignorants are exhausted spreaders stop changing
    let spreaders = trajectory.spreaders();
    let n = spreaders.len();
    assert!(trajectory.last().unwrap().ignorant < 1e-4);
    assert!((spreaders[n - 1] - spreaders[n - 2]).abs() < 1e-5);
    assert_relative_eq!(spreaders[n - 1], 0.99 + s0, epsilon = 1e-4);
}

#[test]
fn rumor_dies_out_with_fast_stifling() {
    let trajectory = simulate_rumor(2.0, 1.0).unwrap();
    let last = trajectory.last().unwrap();

    assert!(last.spreaders < 1e-6);
    assert!(last.ignorant > 0.05 && last.ignorant < 0.07);
    assert_relative_eq!(last.ignorant + last.stiflers, 1.0, epsilon = 1e-6);
}

#[test]
fn rk4_agrees_with_dopri5() {
    let run = |method| {
        SimulationConfig::builder()
            .beta(0.5)
            .gamma(0.1)
            .method(method)
            .build()
            .run()
            .unwrap()
    };
    let adaptive = run(Method::DOPRI5);
    let fixed = run(Method::RK4);

    assert_eq!(adaptive.times(), fixed.times());
    assert_eq!(fixed.stats().nstep, 299);
    for (a, b) in adaptive.states().iter().zip(fixed.states()) {
        assert!((a.ignorant - b.ignorant).abs() < 1e-4);
        assert!((a.spreaders - b.spreaders).abs() < 1e-4);
        assert!((a.stiflers - b.stiflers).abs() < 1e-4);
    }
    assert!(fixed.max_conservation_error() < 1e-12);
}

#[test]
fn inputs_are_not_validated_by_default() {
    // Fractions summing to 0.6 keep summing to 0.6
    let trajectory = simulate(0.5, 0.1, 0.5, 0.1, 0.0, 10.0).unwrap();
    assert_relative_eq!(trajectory.last().unwrap().total(), 0.6, epsilon = 1e-10);

    // A negative spreading rate turns spreaders back into ignorants
    let trajectory = simulate(-0.5, 0.1, 0.99, 0.01, 0.0, 10.0).unwrap();
    assert!(non_decreasing(&trajectory.ignorant(), SLACK));
    assert!(trajectory.max_conservation_error() < 1e-10);
}

#[test]
fn integration_failure_is_propagated() {
    // With I + S = 0, beta = -1 and gamma = 0 the model reduces to I' = -I^2,
    // which blows up at t = 1 from I0 = -1
    let err = simulate(-1.0, 0.0, -1.0, 1.0, 0.0, 5.0).unwrap_err();

    match err {
        SimulationError::Integration { status, t } => {
            assert_ne!(status, Status::Success);
            assert!(t > 0.5 && t < 1.01, "t = {t}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn exhausted_step_budget_is_an_error() {
    let err = SimulationConfig::builder()
        .beta(0.5)
        .gamma(0.1)
        .nmax(3)
        .build()
        .run()
        .unwrap_err();

    assert!(matches!(
        err,
        SimulationError::Integration {
            status: Status::NeedLargerNmax,
            ..
        }
    ));
}

#[test]
fn single_point_grid_is_the_initial_state() {
    let trajectory = SimulationConfig::builder()
        .beta(0.5)
        .gamma(0.1)
        .days(0.1)
        .build()
        .run()
        .unwrap();

    assert_eq!(trajectory.times(), &[0.0]);
    assert_eq!(trajectory.states(), &[RumorState::new(0.99, 0.01, 0.0)]);
}

#[test]
fn independent_simulations_run_concurrently() {
    let rates = [(0.5, 0.1), (1.0, 0.2), (2.0, 1.0), (0.3, 0.3)];

    let trajectories: Vec<Trajectory> = std::thread::scope(|scope| {
        let handles: Vec<_> = rates
            .iter()
            .map(|&(beta, gamma)| scope.spawn(move || simulate_rumor(beta, gamma)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect()
    });

    for (trajectory, &(beta, gamma)) in trajectories.iter().zip(&rates) {
        let sequential = simulate_rumor(beta, gamma).unwrap();
        assert_eq!(trajectory.states(), sequential.states());
    }
}

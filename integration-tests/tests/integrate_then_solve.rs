//! Root finding on functions whose values come from quadrature.

use approx::assert_relative_eq;
use integration_tests::sample;
use quadroot_observers::History;
use quadroot_quadrature::{Rule, integrate};
use quadroot_roots::{Config, Method, Status, solve, solve_unobserved};

/// Area under `f` from 0 to `t`, using `n` subintervals and the given rule.
fn area_to(rule: Rule, f: fn(f64) -> f64, t: f64, n: usize) -> f64 {
    let (x, y) = sample(f, 0.0, t, n);
    integrate(rule, &x, &y)
        .expect("valid samples for the rule")
        .value()
}

#[test]
fn upper_limit_of_linear_area() {
    // ∫₀ᵗ 2x dx = t², so the area reaches 4 at t = 2.
    let g = |t: f64| area_to(Rule::Trapezoidal, |x| 2.0 * x, t, 64) - 4.0;
    let config = Config::new(500, 1e-10).unwrap();

    for method in Method::ALL {
        let solution = solve_unobserved(method, g, [0.5, 3.0], &config).unwrap();
        assert!(solution.is_converged(), "{method:?} did not converge");
        assert_relative_eq!(solution.x, 2.0, epsilon = 1e-9);
    }
}

#[test]
fn upper_limit_of_cubic_area_with_simpson() {
    // ∫₀ᵗ x² dx = t³ / 3, which reaches 9 at t = 3.
    let config = Config::new(500, 1e-10).unwrap();

    for rule in [Rule::Simpson13, Rule::Simpson38, Rule::AutoSimpson] {
        let g = move |t: f64| area_to(rule, |x| x * x, t, 60) - 9.0;
        let solution = solve_unobserved(Method::Bisection, g, [1.0, 4.0], &config).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 3.0, epsilon = 1e-9);
    }
}

#[test]
fn riemann_bias_moves_the_root() {
    // For increasing integrands the left sum underestimates, so it needs a
    // larger upper limit to reach the same area.
    let config = Config::new(500, 1e-10).unwrap();
    let root = |rule: Rule| {
        let g = move |t: f64| area_to(rule, f64::exp, t, 20) - 5.0;
        solve_unobserved(Method::RegulaFalsi, g, [0.0, 3.0], &config)
            .unwrap()
            .x
    };

    let left = root(Rule::LeftRiemann);
    let trap = root(Rule::Trapezoidal);
    let right = root(Rule::RightRiemann);

    // e^t - 1 = 5 at t = ln 6.
    assert!(right < trap && trap < left);
    assert_relative_eq!(trap, 6.0_f64.ln(), epsilon = 1e-2);
}

#[test]
fn history_traces_a_quadrature_backed_search() {
    let g = |t: f64| area_to(Rule::Trapezoidal, |x| 2.0 * x, t, 16) - 1.0;
    let config = Config::new(200, 1e-12).unwrap();
    let mut history = History::new();

    let solution = solve(Method::Bisection, g, [0.0, 3.0], &config, &mut history).unwrap();

    assert!(solution.is_converged());
    assert_eq!(history.len(), solution.iters);
    assert_eq!(history.best(), Some((solution.x, solution.residual)));
    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-10);
}

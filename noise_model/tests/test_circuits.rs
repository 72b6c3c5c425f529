use noise_model::{
    AverageCase, Circuit, Estimate, NoiseError, Stage, WorstCase, average_case_bgv_deep,
    average_case_clp20, estimate, worst_case_bgv_deep, worst_case_clp20,
};


use setup::{budgets, helib, params, seal};

#[test]
fn test_clp20_stage_count_follows_ring_dimension() {
    let small = worst_case_clp20(&helib(2048)).unwrap();
    assert_eq!(small.len(), 3);
    let stages: Vec<_> = small.iter().map(|s| s.stage).collect();
    assert_eq!(stages, [Stage::Fresh, Stage::Add, Stage::Mult]);

    let large = worst_case_clp20(&helib(4096)).unwrap();
    assert_eq!(large.len(), 4);
    assert_eq!(large[3].stage, Stage::ModSwitch);

    assert_eq!(average_case_clp20(&helib(2048)).unwrap().len(), 3);
    assert_eq!(average_case_clp20(&helib(4096)).unwrap().len(), 4);
}

#[test]
fn test_clp20_without_switch_modulus_skips_mod_switch() {
    let params = params(8192, 3, "1.1397723799332707e+66", None);
    assert_eq!(worst_case_clp20(&params).unwrap().len(), 3);
    assert_eq!(average_case_clp20(&params).unwrap().len(), 3);
}

#[test]
fn test_clp20_ignores_switch_modulus_at_threshold() {
    // p is present but n = 2048 does not exceed the threshold
    let params = params(2048, 3, "18014398492704769", Some("2^30"));
    assert_eq!(worst_case_clp20(&params).unwrap().len(), 3);
}

#[test]
fn test_bgv_deep_always_has_four_stages() {
    for n in [1, 2, 64, 1024, 2048, 4096, 32768] {
        let params = params(n, 3, "2^1000", Some("2^900"));
        let worst = worst_case_bgv_deep(&params).unwrap();
        let average = average_case_bgv_deep(&params).unwrap();
        assert_eq!(worst.len(), 4);
        assert_eq!(average.len(), 4);
        let stages: Vec<_> = worst.iter().map(|s| s.stage).collect();
        assert_eq!(
            stages,
            [
                Stage::Fresh,
                Stage::Squaring(1),
                Stage::Squaring(2),
                Stage::Squaring(3)
            ]
        );
    }
}

#[test]
fn test_clp20_worst_case_scenario_small_ring() {
    let result = budgets(&worst_case_clp20(&helib(2048)).unwrap());
    assert_eq!(result, [35, 34, 17]);
    assert!(result[0] > result[1] && result[1] > result[2]);
}

#[test]
fn test_clp20_worst_case_mod_switch_measured_against_p() {
    let params = helib(4096);
    let result = budgets(&worst_case_clp20(&params).unwrap());
    assert_eq!(result, [89, 88, 70, 39]);

    // the switched noise sits below p, not below q
    let trace = Circuit::Clp20.trace(&WorstCase, &params).unwrap();
    assert_eq!(trace[3].modulus, *params.p().unwrap());
    assert_eq!(trace[2].modulus, *params.q());
    let p_log2 = params.p().unwrap().log2();
    assert_eq!(result[3], (p_log2 - trace[3].metric.log2()).floor() as i64 - 1);
}

#[test]
fn test_helib_clp20_tables() {
    let worst: Vec<_> = [2048, 4096, 8192, 16384]
        .map(|n| budgets(&worst_case_clp20(&helib(n)).unwrap()))
        .into();
    assert_eq!(
        worst,
        vec![
            vec![35, 34, 17],
            vec![89, 88, 70, 39],
            vec![199, 198, 179, 148],
            vec![417, 416, 396, 366],
        ]
    );

    let average: Vec<_> = [2048, 4096, 8192, 16384]
        .map(|n| budgets(&average_case_clp20(&helib(n)).unwrap()))
        .into();
    assert_eq!(
        average,
        vec![
            vec![41, 41, 26],
            vec![96, 95, 80, 46],
            vec![206, 205, 189, 155],
            vec![425, 424, 407, 374],
        ]
    );
}

#[test]
fn test_helib_bgv_deep_tables() {
    let worst: Vec<_> = [4096, 8192, 16384]
        .map(|n| budgets(&worst_case_bgv_deep(&helib(n)).unwrap()))
        .into();
    assert_eq!(
        worst,
        vec![
            vec![89, 71, 35, -37],
            vec![199, 180, 142, 66],
            vec![417, 397, 357, 277],
        ]
    );

    let average: Vec<_> = [4096, 8192, 16384]
        .map(|n| budgets(&average_case_bgv_deep(&helib(n)).unwrap()))
        .into();
    assert_eq!(
        average,
        vec![
            vec![96, 80, 49, -13],
            vec![206, 189, 156, 90],
            vec![425, 407, 372, 302],
        ]
    );
}

#[test]
fn test_seal_clp20_tables() {
    let worst: Vec<_> = [4096, 8192, 16384, 32768]
        .map(|n| budgets(&worst_case_clp20(&seal(n)).unwrap()))
        .into();
    assert_eq!(
        worst,
        vec![
            vec![34, 33, -3, -3],
            vec![135, 134, 97, 95],
            vec![349, 348, 310, 304],
            vec![784, 783, 744, 733],
        ]
    );

    let average: Vec<_> = [4096, 8192, 16384, 32768]
        .map(|n| budgets(&average_case_clp20(&seal(n)).unwrap()))
        .into();
    assert_eq!(
        average,
        vec![
            vec![40, 40, 6, 6],
            vec![142, 141, 106, 102],
            vec![357, 356, 321, 312],
            vec![792, 792, 755, 741],
        ]
    );
}

#[test]
fn test_seal_bgv_deep_tables() {
    let worst: Vec<_> = [16384, 32768]
        .map(|n| budgets(&worst_case_bgv_deep(&seal(n)).unwrap()))
        .into();
    assert_eq!(
        worst,
        vec![vec![349, 311, 235, 83], vec![784, 745, 667, 511]]
    );

    let average: Vec<_> = [16384, 32768]
        .map(|n| budgets(&average_case_bgv_deep(&seal(n)).unwrap()))
        .into();
    assert_eq!(
        average,
        vec![vec![357, 321, 250, 108], vec![792, 756, 683, 537]]
    );
}

#[test]
fn test_bgv_deep_budgets_strictly_decrease() {
    for params in [helib(4096), helib(16384), seal(16384), seal(32768)] {
        for result in [
            worst_case_bgv_deep(&params).unwrap(),
            average_case_bgv_deep(&params).unwrap(),
        ] {
            let result = budgets(&result);
            assert!(result.windows(2).all(|w| w[0] > w[1]), "{result:?}");
        }
    }
}

#[test]
fn test_bgv_deep_never_uses_switch_modulus() {
    let with_p = params(8192, 3, "1.1397723799332707e+66", Some("3.559126845070405e+49"));
    let without_p = params(8192, 3, "1.1397723799332707e+66", None);
    assert_eq!(
        worst_case_bgv_deep(&with_p).unwrap(),
        worst_case_bgv_deep(&without_p).unwrap()
    );
    assert_eq!(
        average_case_bgv_deep(&with_p).unwrap(),
        average_case_bgv_deep(&without_p).unwrap()
    );
}

#[test]
fn test_both_models_share_topology() {
    let params = seal(8192);
    for circuit in [Circuit::Clp20, Circuit::BgvDeep] {
        let worst = circuit.trace(&WorstCase, &params).unwrap();
        let average = circuit.trace(&AverageCase, &params).unwrap();
        let worst_stages: Vec<_> = worst.iter().map(|s| (s.stage, s.modulus)).collect();
        let average_stages: Vec<_> = average.iter().map(|s| (s.stage, s.modulus)).collect();
        assert_eq!(worst_stages, average_stages);
    }
}

#[test]
fn test_estimate_dispatches_on_model() {
    let params = helib(8192);
    assert_eq!(
        estimate(Circuit::Clp20, Estimate::WorstCase, &params).unwrap(),
        worst_case_clp20(&params).unwrap()
    );
    assert_eq!(
        estimate(Circuit::BgvDeep, Estimate::AverageCase, &params).unwrap(),
        average_case_bgv_deep(&params).unwrap()
    );
}

#[test]
fn test_results_are_reproducible() {
    let params = seal(32768);
    let first = Circuit::Clp20.trace(&AverageCase, &params).unwrap();
    for _ in 0..10 {
        let again = Circuit::Clp20.trace(&AverageCase, &params).unwrap();
        let bits: Vec<_> = again.iter().map(|s| s.metric.to_bits()).collect();
        let expected: Vec<_> = first.iter().map(|s| s.metric.to_bits()).collect();
        assert_eq!(bits, expected);
    }
}

#[test]
fn test_overflowing_noise_is_an_error() {
    // the third squaring of a variance of ~2^720 leaves the f64 range
    let params = params(1 << 30, 1 << 62, "2^5000", None);
    assert_eq!(
        average_case_bgv_deep(&params),
        Err(NoiseError::Overflow("noise variance"))
    );
    assert!(worst_case_bgv_deep(&params).is_ok());
}

#[test]
fn test_clp20_mod_switch_with_negligible_ratio() {
    // p / q = 2^-1140 is below the smallest subnormal
    let params = params(4096, 3, "2^1200", Some("2^60"));

    let worst = budgets(&worst_case_clp20(&params).unwrap());
    assert_eq!(worst.len(), 4);
    assert_eq!(worst[3], 44);

    let average = budgets(&average_case_clp20(&params).unwrap());
    assert_eq!(average.len(), 4);
    assert_eq!(average[3], 51);
}

#[test]
fn test_clp20_mod_switch_at_exponent_limits() {
    let params = params(
        4096,
        3,
        "2^9223372036854775807",
        Some("2^-9223372036854775808"),
    );
    let worst = budgets(&worst_case_clp20(&params).unwrap());
    assert_eq!(worst.len(), 4);
    assert_eq!(worst[0], i64::MAX);
    assert_eq!(worst[3], i64::MIN);
}

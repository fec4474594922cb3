use super::*;

const ALL: [Ease; 3] = [Ease::Linear, Ease::OutCubic, Ease::InOutCubic];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
    assert_eq!(ease_out(0.0), 0.0);
    assert_eq!(ease_out(1.0), 1.0);
    assert_eq!(ease_in_out(0.0), 0.0);
    assert_eq!(ease_in_out(1.0), 1.0);
}

#[test]
fn in_out_midpoint_is_half() {
    assert_eq!(ease_in_out(0.5), 0.5);
}

#[test]
fn inputs_are_clamped() {
    assert_eq!(ease_out(-3.0), 0.0);
    assert_eq!(ease_out(7.5), 1.0);
    assert_eq!(ease_in_out(-0.1), 0.0);
    assert_eq!(ease_in_out(1.1), 1.0);
}

#[test]
fn monotonic_over_unit_interval() {
    for ease in ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=1000 {
            let v = ease.apply(f64::from(i) / 1000.0);
            assert!(v >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn ease_out_leads_linear() {
    for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
        assert!(ease_out(t) > t);
    }
}

#[test]
fn reveal_gates_and_clamps() {
    assert_eq!(reveal(0.2, 0.5, 0.4), 0.0);
    assert!((reveal(0.7, 0.5, 0.4) - 0.5).abs() < 1e-12);
    assert_eq!(reveal(2.0, 0.5, 0.4), 1.0);
    assert_eq!(reveal(0.5, 0.5, 0.0), 1.0);
    assert_eq!(reveal(0.4, 0.5, 0.0), 0.0);
}

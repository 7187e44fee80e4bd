use itertools::Itertools;
use ring::{CoefficientRing, Reduction, RingError};
use rug::Integer;
use sampling::source::Source;

#[test]
fn ordering_is_total_and_matches_moduli() {
    let mut rings: Vec<CoefficientRing> = vec![CoefficientRing::integers()];
    for m in [2, 3, 4, 9, 97, 100] {
        rings.push(CoefficientRing::modular(m).unwrap());
    }

    for (k1, k2) in rings.iter().tuple_combinations() {
        let expected = match (k1.modulus(), k2.modulus()) {
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (Some(_), None) => std::cmp::Ordering::Less,
            (Some(m1), Some(m2)) => m1.cmp(m2),
        };
        assert_eq!(k1.cmp(k2), expected, "{} vs {}", k1, k2);
        assert_eq!(k2.cmp(k1), expected.reverse(), "{} vs {}", k2, k1);
    }

    let sorted: Vec<String> = rings.iter().sorted().map(|k| k.to_string()).collect();
    assert_eq!(sorted, ["Z_2", "Z_3", "Z_4", "Z_9", "Z_97", "Z_100", "Z"]);
}

#[test]
fn display_round_trips_through_parse() {
    for text in ["Z", "5", "1", "340282366920938463463374607431768211507"] {
        let k: CoefficientRing = text.parse().unwrap();
        let shown: String = k.to_string();
        let back: CoefficientRing = shown.trim_start_matches("Z_").parse().unwrap();
        assert_eq!(back, k);
    }
}

#[test]
fn large_modulus_from_text() {
    // 2^128 + 51 is prime
    let k: CoefficientRing = "340282366920938463463374607431768211507".parse().unwrap();
    match &k {
        CoefficientRing::Modular(ring) => assert_eq!(ring.reduction(), Reduction::Field),
        CoefficientRing::Integers => panic!("expected a modular ring"),
    }
    let composite: CoefficientRing = "340282366920938463463374607431768211456".parse().unwrap();
    match &composite {
        CoefficientRing::Modular(ring) => assert_eq!(ring.reduction(), Reduction::Ring),
        CoefficientRing::Integers => panic!("expected a modular ring"),
    }
}

#[test]
fn invalid_moduli() {
    assert_eq!(
        "0".parse::<CoefficientRing>(),
        Err(RingError::NonPositiveModulus(Integer::from(0)))
    );
    assert!(matches!(
        "1.5".parse::<CoefficientRing>(),
        Err(RingError::Unparseable(_))
    ));
    assert_eq!(
        RingError::NonPositiveModulus(Integer::from(-2)).to_string(),
        "invalid modulus: -2 is not positive"
    );
}

#[test]
fn normalize_is_a_projection() {
    let mut source: Source = Source::new([0x42u8; 32]);
    for m in [2u32, 7, 10, 65537] {
        let k: CoefficientRing = CoefficientRing::modular(m).unwrap();
        let CoefficientRing::Modular(ring) = &k else {
            panic!("expected a modular ring");
        };
        for _ in 0..128 {
            let x: Integer = source.next_integer(2);
            let r: Integer = k.normalize(&x);
            assert!(ring.lb() <= &r && &r <= ring.ub());
            assert_eq!(k.normalize(&r), r);
            assert!(Integer::from(&x - &r).is_divisible_u(m));
        }
    }
}

#[test]
fn field_inverse_from_random_elements() {
    let mut source: Source = Source::new([0x24u8; 32]);
    let k: CoefficientRing = CoefficientRing::modular(65537).unwrap();
    let CoefficientRing::Modular(ring) = &k else {
        panic!("expected a modular ring");
    };
    assert!(ring.is_field());
    for _ in 0..128 {
        let x: Integer = source.next_integer(1);
        match ring.inv(&x) {
            Some(inv) => assert_eq!(ring.mul(&x, &inv), 1),
            None => assert_eq!(ring.normalize(&x), 0),
        }
    }
}

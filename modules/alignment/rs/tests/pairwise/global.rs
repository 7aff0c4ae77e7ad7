use globalign_alignment_rs::pairwise::{nw, Alignment};
use globalign_alignment_rs::{Error, Origin, Which};

use super::*;

struct Workload<'a> {
    seq1: &'a str,
    seq2: &'a str,
    score: Score,
    aligned: (&'a str, &'a str),
    rle: &'a str,
}

fn ensure(engine: &Engine, w: &Workload) {
    let aln = engine.align(w.seq1, w.seq2).unwrap();
    assert_eq!(*aln.score(), w.score);
    assert_eq!((aln.seq1().as_str(), aln.seq2().as_str()), w.aligned);
    assert_eq!(aln.rle(), w.rle);
    assert_eq!(Alignment::<Score>::ungapped(aln.seq1()), w.seq1);
    assert_eq!(Alignment::<Score>::ungapped(aln.seq2()), w.seq2);
}

fn fixtures() -> [String; 4] {
    [
        fasta(include_str!("../../../../../data/test_seq1.fa")),
        fasta(include_str!("../../../../../data/test_seq2.fa")),
        fasta(include_str!("../../../../../data/test_seq3.fa")),
        fasta(include_str!("../../../../../data/test_seq4.fa")),
    ]
}

#[test]
fn test_short_fixture() {
    let [seq1, seq2, ..] = fixtures();
    let engine = engine(-10.0, -10.0);
    ensure(
        &engine,
        &Workload {
            seq1: &seq1,
            seq2: &seq2,
            score: 5.0,
            aligned: ("MYQR", "M-QR"),
            rle: "1=1^2=",
        },
    );

    let fill = engine.fill(&seq1, &seq2).unwrap();
    assert_eq!(fill.shape(), (5, 4));
    assert_eq!(
        fill.matrix(),
        vec![
            vec![0.0, -10.0, -20.0, -30.0],
            vec![-10.0, 5.0, -5.0, -15.0],
            vec![-20.0, -5.0, 4.0, -6.0],
            vec![-30.0, -15.0, 0.0, 5.0],
            vec![-40.0, -25.0, -10.0, 5.0],
        ]
    );
}

#[test]
fn test_long_fixture() {
    let [_, _, seq3, seq4] = fixtures();
    let engine = engine(-10.0, -10.0);
    ensure(
        &engine,
        &Workload {
            seq1: &seq3,
            seq2: &seq4,
            score: 0.0,
            aligned: ("MAVHQLIRRP", "M---QLIRHP"),
            rle: "1=3^4=1X1=",
        },
    );

    let fill = engine.fill(&seq3, &seq4).unwrap();
    assert_eq!(fill.shape(), (11, 8));
    let matrix = fill.matrix();
    assert_eq!(matrix[0], vec![0.0, -10.0, -20.0, -30.0, -40.0, -50.0, -60.0, -70.0]);
    assert_eq!(matrix[4], vec![-40.0, -25.0, -15.0, -5.0, 2.0, -3.0, -5.0, -15.0]);
    assert_eq!(
        matrix.iter().map(|row| row[0]).collect::<Vec<_>>(),
        (0..11).map(|i| -10.0 * i as f64).collect::<Vec<_>>()
    );
    assert_eq!(matrix[10][7], 0.0);
}

#[test]
fn test_affine_gaps() {
    let [seq1, seq2, seq3, seq4] = fixtures();
    let engine = engine(-10.0, -1.0);

    // A single 3-column gap costs -12 instead of -30
    ensure(
        &engine,
        &Workload {
            seq1: &seq3,
            seq2: &seq4,
            score: 18.0,
            aligned: ("MAVHQLIRRP", "M---QLIRHP"),
            rle: "1=3^4=1X1=",
        },
    );
    ensure(
        &engine,
        &Workload {
            seq1: &seq1,
            seq2: &seq2,
            score: 5.0,
            aligned: ("MYQR", "M-QR"),
            rle: "1=1^2=",
        },
    );
    ensure(
        &engine,
        &Workload {
            seq1: "WWWKKK",
            seq2: "WWWCKKK",
            score: 37.0,
            aligned: ("WWW-KKK", "WWWCKKK"),
            rle: "3=1v3=",
        },
    );
}

#[test]
fn test_symmetry() {
    let [_, _, seq3, seq4] = fixtures();
    for (open, extend) in [(-10.0, -10.0), (-10.0, -1.0), (-4.0, -4.0)] {
        let engine = engine(open, extend);
        let forward = engine.align(&seq3, &seq4).unwrap();
        let backward = engine.align(&seq4, &seq3).unwrap();

        assert_eq!(forward.score(), backward.score());
        assert_eq!(forward.seq1(), backward.seq2());
        assert_eq!(forward.seq2(), backward.seq1());
        assert_eq!(forward.clone().inverted(), backward);
    }
}

#[test]
fn test_self_alignment() {
    let matrix = blosum62();
    let engine = engine(-10.0, -1.0);
    for seq in ["MAVHQLIRRP", "MYQR", "W", "ARNDCQEGHILKMFPSTWYVBZX*"] {
        let aln = engine.align(seq, seq).unwrap();
        let expected: Score = seq
            .bytes()
            .map(|s| matrix.score(s, s).unwrap())
            .sum();
        assert_eq!(*aln.score(), expected);
        assert_eq!(aln.seq1(), seq);
        assert_eq!(aln.seq2(), seq);
        assert_eq!(aln.gaps(), 0);
    }
}

#[test]
fn test_empty_sequence() {
    for (open, extend) in [(-10.0, -1.0), (-10.0, -10.0), (-3.0, -2.0)] {
        let engine = engine(open, extend);
        let gaps = scoring::gaps::Affine::new(open, extend).unwrap();
        for seq in ["M", "MQR", "MAVHQLIRRP"] {
            let aln = engine.align("", seq).unwrap();
            assert_eq!(*aln.score(), gaps.cost(seq.len()));
            assert_eq!(aln.seq1(), &"-".repeat(seq.len()));
            assert_eq!(aln.seq2(), seq);
            assert_eq!(aln.rle(), format!("{}v", seq.len()));

            let aln = engine.align(seq, "").unwrap();
            assert_eq!(*aln.score(), gaps.cost(seq.len()));
            assert_eq!(aln.seq2(), &"-".repeat(seq.len()));
            assert_eq!(aln.rle(), format!("{}^", seq.len()));
        }
    }

    let aln = engine(-10.0, -1.0).align("", "").unwrap();
    assert_eq!(*aln.score(), 0.0);
    assert!(aln.is_empty());
}

#[test]
fn test_matches_linear_reference() {
    let [seq1, seq2, seq3, seq4] = fixtures();
    let matrix = blosum62();
    let pairs = [
        (seq1.as_str(), seq2.as_str()),
        (seq3.as_str(), seq4.as_str()),
        (seq1.as_str(), seq3.as_str()),
        ("HEAGAWGHEE", "PAWHEAE"),
        ("GGGG", "WWWWWWW"),
        ("ARNDCQEGHI", "LKMFPSTWYV"),
    ];
    for gap in [-10.0, -4.0, -1.0, 0.0] {
        let engine = engine(gap, gap);
        for (s1, s2) in pairs {
            let expected = reference::linear(&matrix, s1.as_bytes(), s2.as_bytes(), gap);
            assert_eq!(*engine.align(s1, s2).unwrap().score(), expected, "{s1} vs {s2}, gap {gap}");
        }
    }
}

#[test]
fn test_alignment_score_is_consistent() {
    // Re-scoring the emitted columns must reproduce the reported score
    let matrix = blosum62();
    for (open, extend) in [(-10.0, -1.0), (-5.0, -5.0), (-8.0, -2.0)] {
        let engine = engine(open, extend);
        let gaps = scoring::gaps::Affine::new(open, extend).unwrap();
        for (s1, s2) in [("HEAGAWGHEE", "PAWHEAE"), ("MAVHQLIRRP", "MQLIRHP"), ("KKKK", "WKW")] {
            let aln = engine.align(s1, s2).unwrap();
            let mut total = 0.0;
            for (a, b) in aln.seq1().bytes().zip(aln.seq2().bytes()) {
                if a != b'-' && b != b'-' {
                    total += matrix.score(a, b).unwrap();
                }
            }
            for step in aln.steps() {
                if !step.op().is_diagonal() {
                    total += gaps.cost(*step.len());
                }
            }
            assert_eq!(total, *aln.score(), "{s1} vs {s2}");
        }
    }
}

#[test]
fn test_determinism() {
    let [_, _, seq3, seq4] = fixtures();
    let engine = engine(-10.0, -1.0);
    let first = engine.align(&seq3, &seq4).unwrap();
    for _ in 0..10 {
        assert_eq!(engine.align(&seq3, &seq4).unwrap(), first);
    }
}

#[test]
fn test_unknown_symbol() {
    let engine = engine(-10.0, -1.0);
    assert_eq!(
        engine.align("MQR", "MQJR").unwrap_err(),
        Error::UnknownSymbol {
            symbol: 'J',
            origin: Origin::Sequence {
                seq: Which::Second,
                pos: 2
            }
        }
    );
    // Lowercase symbols are not part of BLOSUM62
    assert!(engine.align("mqr", "MQR").is_err());
}

#[test]
fn test_fill_and_reconstruct() {
    let engine = engine(-10.0, -1.0);
    let fill = engine.fill("MAVHQLIRRP", "MQLIRHP").unwrap();
    let aln = nw::traceback::reconstruct(&fill, "MAVHQLIRRP", "MQLIRHP").unwrap();
    assert_eq!(aln, engine.align("MAVHQLIRRP", "MQLIRHP").unwrap());
    assert_eq!(*aln.score(), fill.score());
}

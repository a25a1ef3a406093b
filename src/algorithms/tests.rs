use super::{CurveSamples, EvalError, EvalMode, Matrix, casteljau, outer, prod};
use approx::assert_relative_eq;

/// Fünf gleichverteilte Parameterwerte auf [0, 1].
fn linspace5() -> Vec<f64> {
    vec![0.0, 0.25, 0.5, 0.75, 1.0]
}

/// Kontrollpunkte (10,10), (20,10), (20,20) dimension-major (2×3).
fn reference_points() -> Matrix {
    Matrix::from_rows(&[vec![10.0, 20.0, 20.0], vec![10.0, 10.0, 20.0]]).unwrap()
}

// ── prod ──

#[test]
fn test_prod_leere_folge_ist_fehler() {
    assert!(matches!(
        prod(&[]),
        Err(EvalError::InvalidArgument { .. })
    ));
}

#[test]
fn test_prod_einzelelement_unveraendert() {
    assert_eq!(prod(&[7.5]).unwrap(), 7.5);
}

#[test]
fn test_prod_referenzwerte() {
    assert_eq!(prod(&[1.0, 4.0, 5.0]).unwrap(), 20.0);
    assert_eq!(prod(&[2.0, 5.0]).unwrap(), 10.0);
}

// ── outer ──

#[test]
fn test_outer_referenzmatrix() {
    let m = outer(&[2.0, 3.0], &[10.0, 100.0]).unwrap();
    assert_eq!(m.row(0), &[20.0, 200.0]);
    assert_eq!(m.row(1), &[30.0, 300.0]);
}

#[test]
fn test_outer_form_ist_m_mal_n() {
    let m = outer(&[1.0, 2.0, 3.0], &[4.0, 5.0]).unwrap();
    assert_eq!((m.rows(), m.cols()), (3, 2));
}

#[test]
fn test_outer_leere_folge_ist_fehler() {
    assert!(outer(&[], &[1.0]).is_err());
    assert!(outer(&[1.0], &[]).is_err());
}

// ── casteljau, polynomial ──

#[test]
fn test_casteljau_referenzkurve_exakt() {
    let samples = casteljau(&linspace5(), &reference_points(), EvalMode::Polynomial).unwrap();
    let expected = [
        [10.0, 10.0],
        [14.375, 10.625],
        [17.5, 12.5],
        [19.375, 15.625],
        [20.0, 20.0],
    ];
    assert_eq!((samples.points.rows(), samples.points.cols()), (5, 2));
    for (k, row) in expected.iter().enumerate() {
        // Dyadische Eingaben — das Ergebnis ist bit-exakt
        assert_eq!(samples.points.row(k), row);
    }
    assert!(samples.coefficients.is_none());
}

#[test]
fn test_casteljau_einzelner_kontrollpunkt_konstant() {
    let points = Matrix::from_rows(&[vec![3.0], vec![-4.0]]).unwrap();
    let samples = casteljau(&linspace5(), &points, EvalMode::Polynomial).unwrap();
    for k in 0..5 {
        assert_eq!(samples.points.row(k), &[3.0, -4.0]);
    }
}

#[test]
fn test_casteljau_leerer_parametervektor() {
    let samples = casteljau(&[], &reference_points(), EvalMode::Polynomial).unwrap();
    assert_eq!(samples.points.rows(), 0);
    assert_eq!(samples.points.cols(), 2);
}

#[test]
fn test_casteljau_extrapolation_ausserhalb_null_eins() {
    // Gerade von (0,0) nach (10,0): bei t = 2 liegt der Punkt bei (20,0)
    let points = Matrix::from_rows(&[vec![0.0, 10.0], vec![0.0, 0.0]]).unwrap();
    let samples = casteljau(&[2.0, -1.0], &points, EvalMode::Polynomial).unwrap();
    assert_eq!(samples.points.row(0), &[20.0, 0.0]);
    assert_eq!(samples.points.row(1), &[-10.0, 0.0]);
}

#[test]
fn test_casteljau_leere_matrix_ist_fehler() {
    let points = Matrix::zeros(0, 0);
    assert!(matches!(
        casteljau(&[0.5], &points, EvalMode::Polynomial),
        Err(EvalError::InvalidArgument { .. })
    ));
}

#[test]
fn test_casteljau_deterministisch() {
    let a = casteljau(&linspace5(), &reference_points(), EvalMode::Polynomial).unwrap();
    let b = casteljau(&linspace5(), &reference_points(), EvalMode::Polynomial).unwrap();
    assert_eq!(a, b);
}

// ── casteljau, rational ──

#[test]
fn test_rational_uniforme_gewichte_wie_polynomial() {
    let weights = [1.0, 1.0, 1.0];
    let poly = casteljau(&linspace5(), &reference_points(), EvalMode::Polynomial).unwrap();
    let rational = casteljau(
        &linspace5(),
        &reference_points(),
        EvalMode::Rational(&weights),
    )
    .unwrap();
    for k in 0..5 {
        for d in 0..2 {
            assert_relative_eq!(
                poly.points.get(k, d),
                rational.points.get(k, d),
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn test_rational_koeffizienten_form_und_zeilensumme() {
    let weights = [1.0, 2.5, 0.5];
    let samples = casteljau(
        &linspace5(),
        &reference_points(),
        EvalMode::Rational(&weights),
    )
    .unwrap();
    let coefficients = samples.coefficients.expect("rationaler Modus liefert Koeffizienten");
    assert_eq!((coefficients.rows(), coefficients.cols()), (5, 3));
    for k in 0..5 {
        let row_sum: f64 = coefficients.row(k).iter().sum();
        assert_relative_eq!(row_sum, 1.0, max_relative = 1e-12);
    }
}

#[test]
fn test_rational_kreisviertel() {
    // Rationale Quadratik mit w = (1, √2/2, 1): exakter Viertelkreis
    let points = Matrix::from_rows(&[vec![1.0, 1.0, 0.0], vec![0.0, 1.0, 1.0]]).unwrap();
    let weights = [1.0, std::f64::consts::FRAC_1_SQRT_2, 1.0];
    let t: Vec<f64> = (0..=16).map(|i| i as f64 / 16.0).collect();
    let samples = casteljau(&t, &points, EvalMode::Rational(&weights)).unwrap();
    for k in 0..samples.points.rows() {
        let row = samples.points.row(k);
        let radius = (row[0] * row[0] + row[1] * row[1]).sqrt();
        assert_relative_eq!(radius, 1.0, max_relative = 1e-12);
    }
}

#[test]
fn test_rational_falsche_gewichtsanzahl_ist_fehler() {
    let weights = [1.0, 1.0];
    assert!(matches!(
        casteljau(
            &linspace5(),
            &reference_points(),
            EvalMode::Rational(&weights)
        ),
        Err(EvalError::InvalidArgument { .. })
    ));
}

#[test]
fn test_rational_nullgewicht_degeneriert() {
    // w interpoliert bei t = 0.5 exakt zu Null → fail-fast
    let points = Matrix::from_rows(&[vec![0.0, 10.0], vec![0.0, 0.0]]).unwrap();
    let weights = [1.0, -1.0];
    assert!(matches!(
        casteljau(&[0.5], &points, EvalMode::Rational(&weights)),
        Err(EvalError::NumericalDegeneracy { .. })
    ));
}

#[test]
fn test_rational_leerer_parametervektor_mit_koeffizienten() {
    let weights = [1.0, 1.0, 1.0];
    let samples: CurveSamples = casteljau(
        &[],
        &reference_points(),
        EvalMode::Rational(&weights),
    )
    .unwrap();
    assert_eq!(samples.points.rows(), 0);
    let coefficients = samples.coefficients.unwrap();
    assert_eq!((coefficients.rows(), coefficients.cols()), (0, 3));
}

// ── Matrix ──

#[test]
fn test_matrix_from_rows_ungleiche_laengen_ist_fehler() {
    assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
}

use num::complex::Complex64;
use visual::{plot, plot_homotopy, Aspect, Figure, HomotopyData, PlotSettings, Size};

#[test]
fn function_and_zero_line_on_shared_axis() {
    let mut figure = Figure::new(Size::default());
    let settings = PlotSettings::default().samples(5).zero(0.0);

    let created = plot(
        |x| x.mapv(|x| x * x),
        -1.0,
        1.0,
        &settings,
        figure.axis_mut(0),
    )
    .unwrap();
    assert!(created.is_none());

    let ax = figure.axis(0).unwrap();
    let curve = ax.main_lines().next().unwrap();
    assert_eq!(
        curve.coordinates,
        vec![(-1.0, 1.0), (-0.5, 0.25), (0.0, 0.0), (0.5, 0.25), (1.0, 1.0)]
    );
    assert_eq!(ax.background_lines().count(), 1);
}

#[test]
fn homotopy_of_a_quadratic() {
    // Roots of z^2 - (1 - 2t) move from +-1 through 0 onto the imaginary axis.
    let ppath = (0..=10).map(|i| i as f64 / 10.0).collect::<Vec<_>>();
    let root = |t: f64| Complex64::new(1.0 - 2.0 * t, 0.0).sqrt();
    let xpaths = vec![
        ppath.iter().map(|&t| root(t)).collect::<Vec<_>>(),
        ppath.iter().map(|&t| -root(t)).collect::<Vec<_>>(),
    ];

    let figure = plot_homotopy(&ppath, &xpaths, &Default::default(), None)
        .unwrap()
        .unwrap();

    assert_eq!(figure.axes().len(), 2);
    for ax in figure.axes() {
        assert_eq!(ax.lines().len(), 2);
        assert_eq!(ax.aspect(), Aspect::Equal);
        for line in ax.lines() {
            assert_eq!(line.ys(), ppath);
        }
    }
    let real_end = figure.axes()[0].lines()[0].xs();
    assert!((real_end[0] - 1.0).abs() < 1e-12);
    assert!(real_end[10].abs() < 1e-12);
}

#[test]
fn saves_standalone_document() {
    let dir = tempfile::tempdir().unwrap();

    let data = HomotopyData::new(
        vec![0.0, 1.0, 2.0],
        vec![vec![
            Complex64::new(1.0, 1.0),
            Complex64::new(2.0, 2.0),
            Complex64::new(3.0, 3.0),
        ]],
    );
    let figure = data.plot(&Default::default(), None).unwrap().unwrap();
    let path = figure.save("homotopy", dir.path()).unwrap();

    assert_eq!(path, dir.path().join("homotopy.tex"));
    let tex = std::fs::read_to_string(path).unwrap();
    assert!(tex.starts_with("\\nonstopmode"));
    assert!(tex.trim_end().ends_with("\\end{document}"));
    assert_eq!(tex.matches("\\begin{axis}").count(), 2);
    assert_eq!(
        tex.matches("coordinates { (1.00000,0.00000) (2.00000,1.00000) (3.00000,2.00000) };")
            .count(),
        2
    );
    assert!(tex.contains("xlabel={Solution (Real)}"));
    assert!(tex.contains("xlabel={Solution (Imaginary)}"));
    assert_eq!(tex.matches("ylabel=").count(), 1);
}

use fplot::{error::LimitsError, limits::Limits, parse_expression, plot::render_graph};

fn render(source: &str, limits: &Limits) -> String {
    let expression = parse_expression(source).unwrap_or_else(|e| {
                                                 panic!("Expression '{source}' failed to parse: {e}")
                                             });
    let mut out = Vec::new();
    render_graph(&mut out, limits, &expression).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn limits_parse_from_colon_separated_fields() {
    let limits: Limits = "-2:2:-1.5:1.5".parse().unwrap();
    assert_eq!(limits.x_min, -2.0);
    assert_eq!(limits.x_max, 2.0);
    assert_eq!(limits.y_min, -1.5);
    assert_eq!(limits.y_max, 1.5);
}

#[test]
fn default_limits_are_ten_units_in_every_direction() {
    let limits = Limits::default();
    assert_eq!(limits.x_min, -10.0);
    assert_eq!(limits.x_max, 10.0);
    assert_eq!(limits.y_min, -10.0);
    assert_eq!(limits.y_max, 10.0);
    assert_eq!(limits.x_span(), 20.0);
}

#[test]
fn bad_limits_strings_are_rejected() {
    assert_eq!("1:2:3".parse::<Limits>(),
               Err(LimitsError::InvalidFieldCount { found: 3 }));
    assert_eq!("1:2:3:4:5".parse::<Limits>(),
               Err(LimitsError::InvalidFieldCount { found: 5 }));
    assert_eq!("a:2:3:4".parse::<Limits>(),
               Err(LimitsError::InvalidNumber { field: "xmin" }));
    assert_eq!("1:2:3:b".parse::<Limits>(),
               Err(LimitsError::InvalidNumber { field: "ymax" }));
    assert_eq!("5:-5:0:1".parse::<Limits>(),
               Err(LimitsError::ReversedRange { axis: 'x' }));
    assert_eq!("0:1:5:-5".parse::<Limits>(),
               Err(LimitsError::ReversedRange { axis: 'y' }));
}

#[test]
fn document_is_framed_by_prologue_and_epilogue() {
    let text = render("x", &Limits::default());
    assert!(text.starts_with("%!PS\n%PageSetup\n"));
    assert!(text.contains("/Courier findfont 12.000000 scalefont setfont"));
    assert!(text.contains("<< /PageSize [595.000000 842.000000] >> setpagedevice"));
    assert!(text.ends_with("stroke\nshowpage\n"));
}

#[test]
fn curve_for_a_total_function_is_one_unbroken_path() {
    let count = |text: &str| {
        text.rsplit("[] 0 setdash").next().unwrap().matches("moveto").count()
    };
    let line = render("x", &Limits::default());
    let sine = render("sin(x)", &Limits::default());
    // Both functions stay inside the window at every sample, so each curve is
    // a single path. The grid between the dash reset and the curve is the
    // same for both, leaving the path-start counts equal.
    assert_eq!(count(&line), count(&sine));
    assert!(sine.contains("lineto"));
}

#[test]
fn pole_breaks_the_curve_into_separate_paths() {
    let smooth = render("x", &Limits::default());
    let broken = render("1 / x", &Limits::default());
    // 1/x leaves the window near x = 0 on both sides, so its curve has at
    // least one more path start than the single straight line.
    let count = |text: &str| {
        let curve = text.rsplit("[] 0 setdash").next().unwrap().to_string();
        curve.matches("moveto").count()
    };
    assert!(count(&broken) > count(&smooth));
}

#[test]
fn out_of_window_samples_are_never_drawn() {
    // Both constants lie above the window's top edge at every sample, so
    // neither contributes any curve points and the documents come out
    // byte-identical.
    let fifteen = render("x * 0 + 15", &Limits::default());
    let twenty = render("x * 0 + 20", &Limits::default());
    assert_eq!(fifteen, twenty);

    // A function that does cross the window renders differently.
    let visible = render("x", &Limits::default());
    assert_ne!(fifteen, visible);
}

#[test]
fn axes_are_pinned_to_the_window_edge_when_zero_is_outside() {
    let limits: Limits = "5:15:5:15".parse().unwrap();
    let text = render("x", &limits);
    // With a strictly positive window both axis lines sit on the min edges,
    // and the origin is never labelled.
    assert!(text.contains("(x) show"));
    assert!(text.contains("(y) show"));
    assert!(!text.contains("(0) show"));
}

#[test]
fn grid_labels_integer_coordinates() {
    let text = render("x", &Limits::default());
    assert!(text.contains("(1) show"));
    assert!(text.contains("(-1) show"));
    assert!(text.contains("(10) show"));
    assert!(text.contains("(-10) show"));
    assert!(!text.contains("(0) show"));
    assert!(!text.contains("(11) show"));
}

#[test]
fn grid_handles_wide_windows() {
    // The grid counters track plot units as f64, so a wide window only means
    // more lines, never an overflowing counter.
    let limits: Limits = "0:20000:-1:1".parse().unwrap();
    let text = render("x * 0 + 5", &limits);
    assert!(text.contains("(20000) show"));
    assert!(!text.contains("(20001) show"));
    assert!(text.contains("(1) show"));
}

#[test]
fn boundary_is_drawn_dashed_and_blue() {
    let text = render("x", &Limits::default());
    assert!(text.contains("0 0 0.5 setrgbcolor"));
    assert!(text.contains("[5 15] 0 setdash"));
    assert!(text.contains("[] 0 setdash"));
}

use seat_core::calculations::seated_angle::{
    check, check_all, AngleInput, BoltInput, BoltType, Connectivity, LoadInput, MemberInput,
    SeatedAngleInput,
};
use seat_core::sections::{parse_angles_csv, parse_i_sections_csv, SectionKind};
use seat_core::{builtin_is_sections, CalcError, Check, DesignPreferences, Level, SectionTable};

const BEAMS_CSV: &str = "\
Designation,D,B,tw,T,R1
WPB 450,450,250,7.6,13.4,15
";

const COLUMNS_CSV: &str = "\
Designation,D,B,tw,T,R1
WPC 250,250,250,10,16,12
";

const ANGLES_CSV: &str = "\
Designation,A,B,t,R1
ISA 200X150X16,200,150,16,13.5
ISA 100X75X8,100,75,8,8.5
";

fn csv_table() -> SectionTable {
    let mut table = SectionTable::new();
    for beam in parse_i_sections_csv(BEAMS_CSV, "beams.csv").unwrap() {
        table.insert_section(SectionKind::Beam, beam).unwrap();
    }
    for column in parse_i_sections_csv(COLUMNS_CSV, "columns.csv").unwrap() {
        table.insert_section(SectionKind::Column, column).unwrap();
    }
    for angle in parse_angles_csv(ANGLES_CSV, "angles.csv").unwrap() {
        table.insert_angle(angle).unwrap();
    }
    table
}

fn connection(connectivity: Connectivity, beam: &str, column: &str, angle: &str, shear_kn: f64) -> SeatedAngleInput {
    SeatedAngleInput {
        label: String::new(),
        member: MemberInput {
            connectivity,
            beam_section: beam.to_string(),
            column_section: column.to_string(),
            fu_mpa: 410.0,
            fy_mpa: 250.0,
        },
        load: LoadInput { shear_force_kn: shear_kn },
        bolt: BoltInput {
            diameter_mm: 20.0,
            bolt_type: BoltType::BlackBolt,
            grade: 4.6,
        },
        angle: AngleInput {
            angle_section: angle.to_string(),
        },
    }
}

#[test]
fn heavy_seat_on_column_flange_is_safe() {
    let input = connection(Connectivity::ColumnFlangeBeamWeb, "wpb 450", "WPC250", "ISA 200X150X16", 150.0);
    let result = check(&input, &DesignPreferences::default(), &csv_table()).unwrap();

    assert!(result.safe, "diagnostics: {:?}", result.diagnostics);
    assert_eq!(result.bolt.bolts_required, 4);
    assert_eq!(result.bolt.bolts_provided, 4);
    assert_eq!(result.bolt.rows, 1);
    assert!((result.bolt.k_b - (50.0 / 66.0 - 0.25)).abs() < 1e-9);

    // b1 = 86.842 - 28.4, b2 = b1 + 10 - 29.5
    let b1: f64 = 86.842 - 13.4 - 15.0;
    let b2 = b1 + 10.0 - 16.0 - 13.5;
    let demand = 150.0 * (b2 / b1) * (b2 / 2.0);
    assert!((result.seat_angle.moment_demand_knmm - demand).abs() < 0.051);

    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.check == Check::Summary && d.level == Level::Info));
}

#[test]
fn light_seat_reports_every_failed_clause() {
    let input = connection(Connectivity::ColumnFlangeBeamWeb, "WPB 450", "WPC 250", "ISA 100X75X8", 150.0);
    let result = check(&input, &DesignPreferences::default(), &csv_table()).unwrap();

    assert!(!result.safe);
    let failed = result.failed_checks();
    assert!(failed.contains(&Check::OutstandingLegLength));
    assert!(failed.contains(&Check::OutstandingLegMoment));
    assert!(!failed.contains(&Check::BeamShear));

    let moment = result
        .violations()
        .find(|d| d.check == Check::OutstandingLegMoment)
        .unwrap();
    assert_eq!(moment.clause.as_deref(), Some("Cl 8.2.1.2"));
}

#[test]
fn narrow_column_web_fails_leg_shear() {
    // SC 140 web: 140 - 2×12 - 2×12 - 5 = 87 mm of seat length
    let input = connection(Connectivity::ColumnWebBeamWeb, "MB 300", "SC 140", "ISA 125X95X10", 150.0);
    let result = check(&input, &DesignPreferences::default(), builtin_is_sections()).unwrap();

    assert_eq!(result.seat_angle.length_mm, 87.0);
    // 87 × 10 × 250 × 0.001 / (√3 × 1.1) = 114.2
    assert_eq!(result.seat_angle.shear_capacity_kn, 114.2);
    assert!(!result.safe);
    assert!(result.failed_checks().contains(&Check::OutstandingLegShear));
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.check == Check::OutstandingLegShear && d.level == Level::Info && d.message.contains("13.2 mm")));
}

#[test]
fn beam_to_beam_uses_supporting_beam_web() {
    // MB 500 web: 500 - 2×17.2 - 2×17 - 5 = 426.6 > 140
    let input = connection(Connectivity::BeamBeam, "MB 300", "MB 500", "ISA 150X115X10", 50.0);
    let result = check(&input, &DesignPreferences::default(), builtin_is_sections()).unwrap();
    assert_eq!(result.seat_angle.length_mm, 140.0);
    assert!(result.bolt.bolts_provided >= result.bolt.bolts_required);
}

#[test]
fn weak_beam_web_is_flagged_but_checked() {
    // MB 150: 150 × 4.8 × 250 / √3 / 1.1 / 1000 = 94.5 kN
    let input = connection(Connectivity::ColumnFlangeBeamWeb, "MB 150", "SC 250", "ISA 200X150X16", 120.0);
    let result = check(&input, &DesignPreferences::default(), builtin_is_sections()).unwrap();
    assert_eq!(result.seat_angle.beam_shear_strength_kn, 94.5);
    assert!(result.failed_checks().contains(&Check::BeamShear));
}

#[test]
fn oversize_holes_and_rolled_edges() {
    let prefs: DesignPreferences =
        serde_json::from_str(r#"{ "hole_type": "Oversize", "edge_type": "RolledOrMachined" }"#).unwrap();
    let input = connection(Connectivity::ColumnFlangeBeamWeb, "WPB 450", "WPC 250", "ISA 200X150X16", 150.0);
    let result = check(&input, &prefs, &csv_table()).unwrap();

    assert_eq!(result.bolt.hole_diameter_mm, 24.0);
    // 1.5 × 24 = 36
    assert_eq!(result.bolt.end_distance_mm, 36.0);
    assert_eq!(result.bolt.edge_distance_mm, 36.0);
}

#[test]
fn unknown_sections_and_bad_input_are_errors() {
    let table = csv_table();
    let prefs = DesignPreferences::default();

    let missing = connection(Connectivity::ColumnFlangeBeamWeb, "WPB 450", "HE 300", "ISA 200X150X16", 150.0);
    let err = check(&missing, &prefs, &table).unwrap_err();
    assert_eq!(err, CalcError::section_not_found("column", "HE 300"));

    let negative = connection(Connectivity::ColumnFlangeBeamWeb, "WPB 450", "WPC 250", "ISA 200X150X16", -5.0);
    let err = check(&negative, &prefs, &table).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");

    let results = check_all(&[missing, negative], &prefs, &table);
    assert!(results.iter().all(|r| r.is_err()));
}

#[test]
fn input_json_uses_connectivity_strings() {
    let json = r#"{
        "label": "SA-7",
        "member": {
            "connectivity": "Column web-Beam web",
            "beam_section": "MB 300",
            "column_section": "SC 250",
            "fu_mpa": 410,
            "fy_mpa": 250
        },
        "load": { "shear_force_kn": 50 },
        "bolt": { "diameter_mm": 20, "bolt_type": "Black Bolt", "grade": 4.6 },
        "angle": { "angle_section": "ISA 150X115X10" }
    }"#;
    let input: SeatedAngleInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.member.connectivity, Connectivity::ColumnWebBeamWeb);

    let result = check(&input, &DesignPreferences::default(), builtin_is_sections()).unwrap();
    assert_eq!(result.label, "SA-7");

    let bad = json.replace("Column web-Beam web", "Column-Column");
    assert!(serde_json::from_str::<SeatedAngleInput>(&bad).is_err());
}

#[test]
fn custom_clearance_that_kills_bearing_is_rejected() {
    let mut m12 = connection(Connectivity::ColumnFlangeBeamWeb, "MB 300", "SC 250", "ISA 150X115X10", 50.0);
    m12.bolt.diameter_mm = 12.0;
    let prefs = DesignPreferences {
        custom_hole_clearance_mm: Some(30.0),
        ..Default::default()
    };
    let err = check(&m12, &prefs, builtin_is_sections()).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

#[test]
fn long_vertical_leg_with_small_bolts_exceeds_max_pitch() {
    // M12 on HB 200: t = 9, max spacing 136; pitch 200 - 23 - 12 - 13.5 - 5 -> 147
    let mut m12 = connection(Connectivity::ColumnFlangeBeamWeb, "MB 300", "HB 200", "ISA 200X150X12", 100.0);
    m12.bolt.diameter_mm = 12.0;
    let result = check(&m12, &DesignPreferences::default(), builtin_is_sections()).unwrap();

    assert_eq!(result.bolt.rows, 2);
    assert_eq!(result.bolt.pitch_mm, 147.0);
    assert!(!result.safe);
    assert!(result
        .violations()
        .any(|d| d.check == Check::BoltPitch && d.clause.as_deref() == Some("Cl 10.2.3")));
    // (140 - 3 × 32)/2 = 22 < 23
    assert_eq!(result.bolt.edge_distance_provided_mm, 22.0);
    assert!(result.failed_checks().contains(&Check::BoltEdgeDistance));
}

use cut_sheet::{
    compute,
    io::{cut_sheet_csv, read_cut_sheet_csv, read_to_string, write_cut_sheet_csv, EXPORT_FILE_NAME, EXPORT_MIME},
    CustomStationSource, CutSheetOptions, CutSheetParams,
};

fn report() -> cut_sheet::CutSheetReport {
    let params = CutSheetParams {
        begin_station: 0.0,
        begin_elevation: 100.0,
        end_station: 100.0,
        end_elevation: 110.0,
        increment: 20.0,
    };
    compute(
        &params,
        CustomStationSource::Text("25,45,85"),
        &CutSheetOptions::default(),
    )
    .unwrap()
}

#[test]
fn export_layout() {
    let text = cut_sheet_csv(&report().merged, true);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "Station,Elevation (ft),Formula");
    assert_eq!(lines[1], "0.00,100.000,100.00 + 0.100 × (0.00 - 0.00)");
    assert_eq!(lines[3], "25.00,102.500,100.00 + 0.100 × (25.00 - 0.00)");
    assert!(text.ends_with('\n'));
    assert!(!text.ends_with("\n\n"));
}

#[test]
fn export_round_trip() {
    let sheet = report().merged;
    let back = read_cut_sheet_csv(&cut_sheet_csv(&sheet, true)).unwrap();
    assert_eq!(back.len(), sheet.len());
    for (a, b) in sheet.rows().iter().zip(&back) {
        assert!((a.station - b.station).abs() < 0.005);
        assert!((a.elevation - b.elevation).abs() < 0.0005);
        assert_eq!(a.formula, b.formula);
    }
}

#[test]
fn export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(EXPORT_FILE_NAME);
    let path = path.to_str().unwrap();
    let sheet = report().merged;
    write_cut_sheet_csv(path, &sheet, false).unwrap();
    let contents = read_to_string(path).unwrap();
    assert_eq!(contents, cut_sheet_csv(&sheet, false));
    assert!(contents.starts_with("Station,Elevation (ft)\n"));
    assert_eq!(EXPORT_MIME, "text/csv");
}

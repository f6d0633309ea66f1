use std::path::PathBuf;

#[test]
fn shipped_factor_files_validate() {
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root = crate_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root");

    let files = ["data/factors/reference.yaml", "data/factors/reference.json"];

    for rel in files {
        let path = root.join(rel);
        let result = fp_factors::load_any(&path);
        assert!(
            result.is_ok(),
            "factor file failed validation: {} => {:?}",
            path.display(),
            result.err()
        );
        assert_eq!(result.unwrap(), fp_factors::FactorTable::reference());
    }
}

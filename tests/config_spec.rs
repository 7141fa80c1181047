use speculate2::speculate;

speculate! {
    use mission_sync::config::load_mission_order;
    use mission_sync_core::MissionOrder;

    fn missions_file(dir: &tempfile::TempDir, steps: &str) -> std::path::PathBuf {
        let path = dir.path().join("missions.json");
        std::fs::write(&path, steps).expect("Failed to write missions file");
        path
    }

    describe "mission order loading" {
        it "prefers an explicit file" {
            let dir = tempfile::tempdir().unwrap();
            let explicit = missions_file(&dir, r#"["/game/a", "/game/b"]"#);

            let order = load_mission_order(Some(&explicit), None).unwrap();
            assert_eq!(order.first(), "/game/a");
            assert_eq!(order.len(), 2);
        }

        it "fails when the explicit file is missing" {
            let dir = tempfile::tempdir().unwrap();
            let missing = dir.path().join("nope.json");

            assert!(load_mission_order(Some(&missing), None).is_err());
        }

        it "falls back to the config dir file when it exists" {
            let dir = tempfile::tempdir().unwrap();
            let fallback = missions_file(&dir, r#"["/game/only"]"#);

            let order = load_mission_order(None, Some(&fallback)).unwrap();
            assert_eq!(order.first(), "/game/only");
        }

        it "uses the built-in order otherwise" {
            let dir = tempfile::tempdir().unwrap();
            let absent = dir.path().join("missions.json");

            let order = load_mission_order(None, Some(&absent)).unwrap();
            assert_eq!(order, MissionOrder::default());

            let order = load_mission_order(None, None).unwrap();
            assert_eq!(order, MissionOrder::default());
        }
    }
}

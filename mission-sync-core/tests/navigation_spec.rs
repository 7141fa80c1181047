use speculate2::speculate;

speculate! {
    use chrono::Duration;
    use mission_sync_core::services::{MissionAnnouncement, NavigationOverrideSlot};
    use mission_sync_core::{ManualClock, MissionOrder};
    use std::sync::Arc;

    fn slot(clock: Arc<ManualClock>) -> NavigationOverrideSlot {
        NavigationOverrideSlot::new(std::time::Duration::from_secs(15), clock)
    }

    describe "navigation override" {
        it "starts empty" {
            let slot = slot(Arc::new(ManualClock::default()));
            assert_eq!(slot.current(), None);
        }

        it "is visible until the window closes" {
            let clock = Arc::new(ManualClock::default());
            let slot = slot(clock.clone());
            slot.set(Some("/game/S1".into()));

            clock.advance(Duration::seconds(14));
            assert_eq!(slot.current().as_deref(), Some("/game/S1"));

            clock.advance(Duration::seconds(2));
            assert_eq!(slot.current(), None);
        }

        it "stays cleared after expiring" {
            let clock = Arc::new(ManualClock::default());
            let slot = slot(clock.clone());
            slot.set(Some("/game/S1".into()));

            clock.advance(Duration::seconds(16));
            assert_eq!(slot.current(), None);

            clock.advance(Duration::seconds(-16));
            assert_eq!(slot.current(), None);
        }

        it "keeps the last writer" {
            let clock = Arc::new(ManualClock::default());
            let slot = slot(clock.clone());
            slot.set(Some("/game/S1".into()));
            clock.advance(Duration::seconds(10));
            slot.set(Some("/game/S2".into()));
            clock.advance(Duration::seconds(10));

            assert_eq!(slot.current().as_deref(), Some("/game/S2"));
        }

        it "is cleared by an empty target" {
            let slot = slot(Arc::new(ManualClock::default()));
            slot.set(Some("/game/S1".into()));

            assert_eq!(slot.set(None), None);
            assert_eq!(slot.current(), None);

            slot.set(Some("/game/S1".into()));
            assert_eq!(slot.set(Some(String::new())), None);
            assert_eq!(slot.current(), None);
        }
    }

    describe "mission announcement" {
        it "starts at the first mission step" {
            let order = MissionOrder::new(["/game/a", "/game/b"]).unwrap();
            let announcement = MissionAnnouncement::new(order);
            assert_eq!(announcement.current(), "/game/a");
        }

        it "replaces the announced step" {
            let announcement = MissionAnnouncement::new(MissionOrder::default());
            assert_eq!(announcement.announce("iota-stream").unwrap(), "iota-stream");
            assert_eq!(announcement.current(), "iota-stream");
        }

        it "rejects an empty step" {
            let announcement = MissionAnnouncement::new(MissionOrder::default());
            let err = announcement.announce("").unwrap_err();
            assert_eq!(err.to_string(), "Missing step");
            assert_eq!(announcement.current(), "/game/kappa-grid-27");
        }
    }
}

use super::*;

#[test]
fn empty_days_get_a_hairline_bar() {
    assert_eq!(bar_height(0, 12), "2px");
    assert_eq!(bar_height(0, 0), "2px");
}

#[test]
fn bars_scale_to_the_busiest_day() {
    assert_eq!(bar_height(12, 12), "100%");
    assert_eq!(bar_height(6, 12), "50%");
}

#[test]
fn small_counts_keep_a_minimum_height() {
    assert_eq!(bar_height(1, 40), "10%");
}

#[test]
fn filling_warning_reports_occupancy() {
    assert_eq!(filling_warning_text(10), "Parkovisko sa zapĺňa. Aktuálne obsadené na 50%.");
    assert_eq!(filling_warning_text(25), "Parkovisko sa zapĺňa. Aktuálne obsadené na 100%.");
}

#[test]
fn expired_session_skips_vehicle_fetch() {
    let mut vehicles_fetched = false;
    let mut reported = Vec::new();
    let overview = futures::executor::block_on(load_overview(
        || async { Err::<ParkingStatistics, _>(ApiError::from_response(401, "{}")) },
        || {
            vehicles_fetched = true;
            async { Ok::<_, ApiError>(Vec::<ParkedVehicle>::new()) }
        },
        |err, fallback| {
            reported.push(fallback);
            err.is_auth()
        },
    ));
    assert!(!vehicles_fetched);
    assert_eq!(reported, vec!["Nepodarilo sa načítať štatistiky parkoviska"]);
    assert!(overview.stats.is_none());
    assert!(overview.vehicles.is_none());
}

#[test]
fn other_failures_still_load_vehicles() {
    let overview = futures::executor::block_on(load_overview(
        || async { Err::<ParkingStatistics, _>(ApiError::from_response(502, "bad gateway")) },
        || async { Ok::<_, ApiError>(Vec::<ParkedVehicle>::new()) },
        |err, _| err.is_auth(),
    ));
    assert!(overview.stats.is_none());
    assert_eq!(overview.vehicles, Some(Vec::new()));
}

//! End-to-end export tests against a realistic record type

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use csvtable::{BoolStrategy, Column, Configuration, DateStrategy, Table};

struct MaintenanceEvent {
    id: Uuid,
    vehicle_name: String,
    date: DateTime<Utc>,
    odometer: i64,
    cost: Option<f64>,
    diy: bool,
    notes: String,
}

fn sample_events() -> Vec<MaintenanceEvent> {
    vec![
        MaintenanceEvent {
            id: Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap(),
            vehicle_name: "Blue Hatchback".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            odometer: 48_213,
            cost: Some(89.5),
            diy: false,
            notes: "Oil change, rotated tires".to_string(),
        },
        MaintenanceEvent {
            id: Uuid::parse_str("9f4e71c2-3a0d-4a8e-b6a2-1c5d0e9f3b77").unwrap(),
            vehicle_name: "Blue Hatchback".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, 18, 14, 30, 0).unwrap(),
            odometer: 51_040,
            cost: None,
            diy: true,
            notes: "Replaced cabin filter".to_string(),
        },
    ]
}

fn maintenance_table() -> Table<MaintenanceEvent> {
    Table::new(vec![
        Column::new("ID", |e: &MaintenanceEvent| e.id),
        Column::new("Vehicle Name", |e: &MaintenanceEvent| {
            e.vehicle_name.clone()
        }),
        Column::new("Date", |e: &MaintenanceEvent| e.date),
        Column::new("Odometer", |e: &MaintenanceEvent| e.odometer),
        Column::new("Cost", |e: &MaintenanceEvent| e.cost),
        Column::new("DIY", |e: &MaintenanceEvent| e.diy),
        Column::new("Notes", |e: &MaintenanceEvent| e.notes.clone()),
    ])
    .unwrap()
}

#[test]
fn exports_full_document() {
    let events = sample_events();
    let output = maintenance_table().export(&events);

    let expected = "ID,Vehicle Name,Date,Odometer,Cost,DIY,Notes\r\n\
        67e55044-10b1-426f-9247-bb680e5fe0c8,Blue Hatchback,2024-01-01T00:00:00Z,48213,89.5,false,\"Oil change, rotated tires\"\r\n\
        9f4e71c2-3a0d-4a8e-b6a2-1c5d0e9f3b77,Blue Hatchback,2024-03-18T14:30:00Z,51040,,true,Replaced cabin filter";
    assert_eq!(output, expected);
}

#[test]
fn output_has_no_trailing_separator() {
    let events = sample_events();
    let output = maintenance_table().export(&events);
    assert!(!output.ends_with("\r\n"));

    let header_only = maintenance_table().export(std::iter::empty());
    assert!(!header_only.contains("\r\n"));
}

#[test]
fn round_trips_through_a_standard_csv_reader() {
    let events = sample_events();
    let table = maintenance_table();
    let output = table.export(&events);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(output.as_bytes());

    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["ID", "Vehicle Name", "Date", "Odometer", "Cost", "DIY", "Notes"]
    );

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), events.len());
    assert_eq!(&records[0][6], "Oil change, rotated tires");
    assert_eq!(&records[1][4], "");
}

#[test]
fn honors_strategy_overrides_end_to_end() {
    let events = sample_events();
    let table = maintenance_table().with_configuration(
        Configuration::new()
            .with_date_strategy(DateStrategy::SecondsSinceEpoch)
            .with_bool_strategy(BoolStrategy::YesNoUppercase),
    );

    let output = table.export(&events);
    let first_row = output.split("\r\n").nth(1).unwrap();
    let fields: Vec<_> = first_row.split(',').collect();
    assert_eq!(fields[2], "1704067200");
    assert_eq!(fields[5], "NO");
}

#[test]
fn shares_one_table_across_threads() {
    let table = maintenance_table();
    let events = sample_events();
    let expected = table.export(&events);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| table.export(&events)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

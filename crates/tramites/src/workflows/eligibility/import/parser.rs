use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

use super::super::calendar::parse_iso_date;

#[derive(Debug)]
pub(crate) struct LeaveRecord {
    pub(crate) line: u64,
    pub(crate) start: String,
    pub(crate) end: String,
    pub(crate) start_date: Option<NaiveDate>,
    pub(crate) end_date: Option<NaiveDate>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<LeaveRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<LeaveRow>().enumerate() {
        let row = record?;
        let start_date = parse_iso_date(&row.inicio);
        let end_date = parse_iso_date(&row.fin);

        records.push(LeaveRecord {
            // header occupies line 1
            line: index as u64 + 2,
            start: row.inicio,
            end: row.fin,
            start_date,
            end_date,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct LeaveRow {
    inicio: String,
    fin: String,
}

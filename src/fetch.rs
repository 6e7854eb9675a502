//! Download and parse the impfdashboard.de dataset.
//!
//! The file is tab-separated with a header line; columns are looked up
//! by name so upstream can reorder or append columns without breaking
//! us. Anything malformed in the columns we do read is fatal.

use chrono::NaiveDate;
use reqwest::Client;

use crate::constants::DATAFILE_URL;
use crate::data::VaccinationDay;
use crate::error::Error;

const COL_DATE: &str = "date";
const COL_TOTAL: &str = "dosen_kumulativ";
const COL_NEW: &str = "dosen_differenz_zum_vortag";

pub async fn download(client: &Client) -> Result<String, Error> {
    let body = client
        .get(DATAFILE_URL)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}

pub fn parse(tsv: &str) -> Result<Vec<VaccinationDay>, Error> {
    let mut lines = tsv.lines();
    let header: Vec<&str> = lines
        .next()
        .ok_or_else(|| Error::Parse("empty dataset".into()))?
        .split('\t')
        .map(|c| c.trim_end_matches('\r'))
        .collect();

    let date_col = column(&header, COL_DATE)?;
    let total_col = column(&header, COL_TOTAL)?;
    let new_col = column(&header, COL_NEW)?;

    let mut days = Vec::new();
    for line in lines {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();

        let date = NaiveDate::parse_from_str(field(&fields, date_col, line)?, "%Y-%m-%d")
            .map_err(|e| Error::Parse(format!("bad date in row {:?}: {}", line, e)))?;
        let doses_total = field(&fields, total_col, line)?
            .parse()
            .map_err(|e| Error::Parse(format!("bad {} in row {:?}: {}", COL_TOTAL, line, e)))?;
        let doses_new = field(&fields, new_col, line)?
            .parse()
            .map_err(|e| Error::Parse(format!("bad {} in row {:?}: {}", COL_NEW, line, e)))?;

        days.push(VaccinationDay {
            date,
            doses_total,
            doses_new,
        });
    }
    Ok(days)
}

fn column(header: &[&str], name: &str) -> Result<usize, Error> {
    header
        .iter()
        .position(|c| *c == name)
        .ok_or_else(|| Error::Parse(format!("missing column {}", name)))
}

fn field<'a>(fields: &[&'a str], index: usize, line: &str) -> Result<&'a str, Error> {
    fields
        .get(index)
        .copied()
        .ok_or_else(|| Error::Parse(format!("short row {:?}", line)))
}

use super::seed::User;
use colored::*;
use serde_json::Value;

pub fn print_written(collection: &str, resource: &str) {
    println!("Record written: {}", format!("{}/{}", collection, resource).green());
}

pub fn print_deleted(target: &str) {
    println!("Deleted: {}", target.red());
}

pub fn print_record(value: &Value) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print raw record bytes as stored; invalid UTF-8 is replaced rather than rejected.
pub fn print_records(collection: &str, records: &[Vec<u8>]) {
    if records.is_empty() {
        println!("No records in {}.", collection.bold());
        return;
    }
    for raw in records {
        println!("{}", String::from_utf8_lossy(raw).trim_end());
    }
}

pub fn print_users(users: &[User]) {
    for u in users {
        println!(
            "{} {:<16} {}, {}",
            format!("{:<12}", u.name).bold(),
            u.company,
            u.address.city,
            u.address.country.dimmed()
        );
    }
}

//! Display formatting for creature records.

use pokedex_core::models::{CreatureRecord, Image};

/// Dex-style number, zero padded to three digits.
pub fn dex_number(id: u32) -> String {
    format!("#{id:03}")
}

/// `PNG 96x96, 1.2 KiB`
pub fn image_summary(image: &Image) -> String {
    let kind = image
        .format()
        .extensions_str()
        .first()
        .map(|ext| ext.to_uppercase())
        .unwrap_or_else(|| "?".into());
    format!(
        "{kind} {}x{}, {}",
        image.width(),
        image.height(),
        byte_size(image.bytes().len())
    )
}

pub fn byte_size(len: usize) -> String {
    if len < 1024 {
        format!("{len} B")
    } else if len < 1024 * 1024 {
        format!("{:.1} KiB", len as f64 / 1024.0)
    } else {
        format!("{:.1} MiB", len as f64 / (1024.0 * 1024.0))
    }
}

pub fn details(record: &CreatureRecord, caught: bool) -> String {
    let mut out = format!("{} {}\n", record.name(), dex_number(record.id()));
    match record.measurements() {
        Some((height, weight)) => {
            out.push_str(&format!("  Height:    {height}\n  Weight:    {weight}\n"));
        }
        None => out.push_str("  Height and weight unknown\n"),
    }
    out.push_str(&format!(
        "  Thumbnail: {}\n  Artwork:   {}\n",
        image_summary(record.thumbnail()),
        image_summary(record.artwork())
    ));
    out.push_str(if caught {
        "  Caught"
    } else {
        "  Not caught"
    });
    out
}

pub fn catch_list(records: &[CreatureRecord]) -> String {
    if records.is_empty() {
        return "No creatures caught yet.".into();
    }
    records
        .iter()
        .map(|r| format!("{:>5}  {}", dex_number(r.id()), r.name()))
        .collect::<Vec<_>>()
        .join("\n")
}

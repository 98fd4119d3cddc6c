//! Plain-text rendering of snapshots and detail records.

use countrydb_core::pagination::PageWindow;
use countrydb_core::prelude::*;

/// `"« [1] 2 3 4 5 … 21 »"`; the current page is bracketed, and `«`/`»` only
/// appear when there is somewhere to go.
pub fn window_line(snap: &DirectorySnapshot) -> String {
    let mut parts = Vec::new();
    if snap.has_prev {
        parts.push("«".to_owned());
    }
    parts.extend(buttons(&snap.window, snap.current_page));
    if snap.has_next {
        parts.push("»".to_owned());
    }
    parts.join(" ")
}

fn buttons(window: &PageWindow, current: usize) -> Vec<String> {
    let label = |p: usize| {
        if p == current {
            format!("[{p}]")
        } else {
            p.to_string()
        }
    };
    let mut out: Vec<String> = window.buttons.iter().map(|&p| label(p)).collect();
    if let Some(last) = window.last_page {
        out.push("…".to_owned());
        out.push(label(last));
    }
    out
}

pub fn country_row(country: &Country, favorite: bool) -> String {
    let star = if favorite { "★" } else { " " };
    let region = if country.region.is_empty() {
        "-"
    } else {
        country.region.as_str()
    };
    format!(
        "{star} {code}  {name:<32} {region:<10} {pop:>15}",
        code = country.code,
        name = country.common_name,
        pop = countrydb_core::text::group_thousands(country.population),
    )
}

pub fn detail_lines(d: &CountryDetail, favorite: bool) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({}){}", d.common_name, d.code, if favorite { " ★" } else { "" }),
        format!("Official name: {}", d.official_name),
        format!("Capital: {}", d.capitals),
        format!("Region: {}", d.region),
        format!("Population: {}", d.population),
        format!("Area: {}", d.area),
        format!("Languages: {}", d.languages.join(", ")),
    ];
    match &d.currency {
        Some(c) => lines.push(format!("Currency: {} ({})", c.name, c.symbol)),
        None => lines.push("Currency: N/A".to_owned()),
    }
    if let Some(rate) = d.rate_line() {
        lines.push(format!("Exchange rate: {rate}"));
    }
    if !d.borders.is_empty() {
        lines.push(format!("Borders: {}", d.borders.join(", ")));
    }
    if !d.flag_image_url.is_empty() {
        lines.push(format!("Flag: {}", d.flag_image_url));
    }
    lines
}

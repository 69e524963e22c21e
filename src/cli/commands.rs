//! CLI command implementations.

use std::path::Path;

use crate::format::{MmapReader, RmapReader, RmapWriter};
use crate::graph::RouteMap;
use crate::types::{City, MapError, MapResult, MAX_LINKS_PER_CITY};

/// Create a new empty .rmap file.
pub fn cmd_create(path: &Path) -> MapResult<()> {
    let map = RouteMap::new();
    RmapWriter::write_to_file(&map, path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Display information about an .rmap file.
///
/// Reads only the mapped header, not the full map.
pub fn cmd_info(path: &Path, json: bool) -> MapResult<()> {
    let reader = MmapReader::open(path)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "version": reader.header().version,
            "cities": reader.city_count(),
            "links": reader.link_count(),
            "written_at": reader.written_at(),
            "file_size": reader.file_len(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Version: {}", reader.header().version);
        println!("Cities: {}", reader.city_count());
        println!("Links: {}", reader.link_count());
        println!("Written: {}", format_timestamp(reader.written_at()));
        println!("File size: {}", format_size(reader.file_len()));
    }
    Ok(())
}

/// Add a city to the map.
pub fn cmd_add(path: &Path, name: &str, json: bool) -> MapResult<()> {
    let mut map = RmapReader::read_from_file(path)?;
    if !map.add_city(name) {
        return Err(MapError::DuplicateCity(name.to_string()));
    }
    RmapWriter::write_to_file(&map, path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"city": name, "cities": map.city_count()})
        );
    } else {
        println!("Added {:?} to {}", name, path.display());
    }
    Ok(())
}

/// Remove a city and all its links.
pub fn cmd_remove(path: &Path, name: &str, json: bool) -> MapResult<()> {
    let mut map = RmapReader::read_from_file(path)?;
    if !map.remove_city(name) {
        return Err(MapError::CityNotFound(name.to_string()));
    }
    RmapWriter::write_to_file(&map, path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"removed": name, "cities": map.city_count()})
        );
    } else {
        println!("Removed {:?} from {}", name, path.display());
    }
    Ok(())
}

/// Link two cities.
pub fn cmd_link(path: &Path, a: &str, b: &str, json: bool) -> MapResult<()> {
    let mut map = RmapReader::read_from_file(path)?;
    if !map.link_cities(a, b) {
        return Err(diagnose_link(&map, a, b));
    }
    RmapWriter::write_to_file(&map, path)?;

    if json {
        println!("{}", serde_json::json!({"linked": [a, b]}));
    } else {
        println!("Linked {:?} <-> {:?}", a, b);
    }
    Ok(())
}

/// Remove the link between two cities.
pub fn cmd_unlink(path: &Path, a: &str, b: &str, json: bool) -> MapResult<()> {
    let mut map = RmapReader::read_from_file(path)?;
    if !map.unlink_cities(a, b) {
        return Err(diagnose_unlink(&map, a, b));
    }
    RmapWriter::write_to_file(&map, path)?;

    if json {
        println!("{}", serde_json::json!({"unlinked": [a, b]}));
    } else {
        println!("Unlinked {:?} <-> {:?}", a, b);
    }
    Ok(())
}

/// List a city's neighbors, in the order the links were added.
pub fn cmd_neighbors(path: &Path, name: &str, json: bool) -> MapResult<()> {
    let map = RmapReader::read_from_file(path)?;
    let neighbors = map
        .linked_cities(name)
        .ok_or_else(|| MapError::CityNotFound(name.to_string()))?;

    if json {
        println!(
            "{}",
            serde_json::json!({"city": name, "neighbors": neighbors})
        );
    } else {
        println!("Neighbors of {:?}:", name);
        for n in neighbors {
            println!("  {}", n);
        }
        println!("  Total: {}", neighbors.len());
    }
    Ok(())
}

/// Find a route between two cities (depth-first search).
pub fn cmd_route(path: &Path, src: &str, dst: &str, json: bool) -> MapResult<()> {
    let map = RmapReader::read_from_file(path)?;
    if !map.contains(src) {
        return Err(MapError::CityNotFound(src.to_string()));
    }

    match map.find_path(src, dst) {
        Some(route) => {
            if json {
                println!("{}", serde_json::json!({"found": true, "route": route}));
            } else {
                println!("{}", route.join(" -> "));
                println!("{} cities", route.len());
            }
        }
        None => {
            if json {
                println!("{}", serde_json::json!({"found": false}));
            } else {
                println!("No route from {:?} to {:?}", src, dst);
            }
        }
    }
    Ok(())
}

/// Detailed statistics about the map.
pub fn cmd_stats(path: &Path, json: bool) -> MapResult<()> {
    let map = RmapReader::read_from_file(path)?;
    let file_size = std::fs::metadata(path)?.len();

    let city_count = map.city_count();
    let link_count = map.link_count();
    let avg_links = if city_count > 0 {
        (link_count * 2) as f64 / city_count as f64
    } else {
        0.0
    };
    let isolated = map.cities().iter().filter(|c| c.degree() == 0).count();
    let busiest = map.cities().iter().max_by_key(|c| c.degree());

    if json {
        let info = serde_json::json!({
            "cities": city_count,
            "links": link_count,
            "avg_links_per_city": avg_links,
            "isolated_cities": isolated,
            "busiest_city": busiest.map(|c| c.name.clone()),
            "max_links": busiest.map(|c| c.degree()).unwrap_or(0),
            "file_size": file_size,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Map statistics:");
        println!("  Cities: {}", city_count);
        println!("  Links: {}", link_count);
        println!("  Avg links per city: {:.2}", avg_links);
        println!("  Isolated cities: {}", isolated);
        if let Some(city) = busiest {
            println!("  Busiest city: {:?} ({} links)", city.name, city.degree());
        }
        println!("  File size: {}", format_size(file_size));
    }
    Ok(())
}

/// Export the map as JSON.
pub fn cmd_export(path: &Path, pretty: bool) -> MapResult<()> {
    let map = RmapReader::read_from_file(path)?;
    let output = serde_json::json!({"cities": map.cities()});

    if pretty {
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
    } else {
        println!("{}", serde_json::to_string(&output).unwrap_or_default());
    }
    Ok(())
}

/// Import cities and links from JSON, merging into the existing map.
pub fn cmd_import(path: &Path, json_path: &Path) -> MapResult<()> {
    let mut map = RmapReader::read_from_file(path)?;
    let json_data = std::fs::read_to_string(json_path)?;
    let parsed: ImportFile =
        serde_json::from_str(&json_data).map_err(|e| MapError::Json(e.to_string()))?;

    let mut added_cities = 0;
    let mut added_links = 0;

    for city in &parsed.cities {
        if map.add_city(&city.name) {
            added_cities += 1;
        }
    }
    for city in &parsed.cities {
        for neighbor in &city.neighbors {
            if map.link_cities(&city.name, neighbor) {
                added_links += 1;
            }
        }
    }

    RmapWriter::write_to_file(&map, path)?;
    println!("Imported {} cities and {} links", added_cities, added_links);
    Ok(())
}

/// JSON interchange shape for export/import.
#[derive(serde::Deserialize)]
struct ImportFile {
    #[serde(default)]
    cities: Vec<City>,
}

/// Work out why a link attempt was rejected.
fn diagnose_link(map: &RouteMap, a: &str, b: &str) -> MapError {
    if a == b {
        return MapError::SelfLink(a.to_string());
    }
    if !map.contains(a) {
        return MapError::CityNotFound(a.to_string());
    }
    if !map.contains(b) {
        return MapError::CityNotFound(b.to_string());
    }
    if map.is_linked(a, b) {
        return MapError::DuplicateLink(a.to_string(), b.to_string());
    }
    MapError::TooManyLinks(MAX_LINKS_PER_CITY)
}

/// Work out why an unlink attempt was rejected.
fn diagnose_unlink(map: &RouteMap, a: &str, b: &str) -> MapError {
    if !map.contains(a) {
        return MapError::CityNotFound(a.to_string());
    }
    if !map.contains(b) {
        return MapError::CityNotFound(b.to_string());
    }
    MapError::LinkNotFound(a.to_string(), b.to_string())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

fn format_timestamp(micros: u64) -> String {
    let secs = (micros / 1_000_000) as i64;
    let dt = chrono::DateTime::from_timestamp(secs, 0);
    match dt {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{} us", micros),
    }
}

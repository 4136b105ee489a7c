use std::path::Path;

use tracing::info;

use super::markers::TravelMap;
use crate::error::Result;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Escape text for use inside HTML element content or quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

impl TravelMap {
    /// Render a standalone Leaflet page with one circle marker per map marker.
    pub fn to_html(&self) -> String {
        // Marker data goes in as JSON, so popups and tooltips need no further quoting.
        let markers: Vec<serde_json::Value> = self
            .markers
            .iter()
            .map(|marker| {
                serde_json::json!({
                    "lat": marker.position.lat,
                    "lon": marker.position.lon,
                    "tooltip": escape_html(&marker.tooltip),
                    "popup": marker.popup_html,
                    "color": css_color(marker.color),
                })
            })
            .collect();
        let markers_json = serde_json::Value::Array(markers)
            .to_string()
            .replace("</", "<\\/");

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="{css}">
<script src="{js}"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map('map').setView([{lat}, {lon}], {zoom});
L.tileLayer('{tiles}', {{ attribution: '&copy; OpenStreetMap contributors' }}).addTo(map);
var markers = {markers};
markers.forEach(function (m) {{
  L.circleMarker([m.lat, m.lon], {{ color: m.color, radius: 8, fillOpacity: 0.8 }})
    .bindPopup(m.popup, {{ maxWidth: 250 }})
    .bindTooltip(m.tooltip)
    .addTo(map);
}});
</script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            css = LEAFLET_CSS,
            js = LEAFLET_JS,
            lat = self.center.lat,
            lon = self.center.lon,
            zoom = self.zoom,
            tiles = TILE_URL,
            markers = markers_json,
        )
    }

    /// Write [`TravelMap::to_html`] to `path`, replacing any existing file.
    pub async fn write_html(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tokio::fs::write(path, self.to_html()).await?;
        info!(path = %path.display(), markers = self.markers.len(), "map written");
        Ok(())
    }
}

/// Leaflet circle markers take CSS colours, not marker-icon palette names.
fn css_color(name: &str) -> &'static str {
    match name {
        "red" => "#d63e2a",
        "blue" => "#38aadd",
        "green" => "#72b026",
        "purple" => "#d252b9",
        "orange" => "#f69730",
        "darkred" => "#a23336",
        "lightred" => "#ff8e7f",
        "beige" => "#ffcb92",
        "darkblue" => "#0067a3",
        "darkgreen" => "#728224",
        "cadetblue" => "#436978",
        _ => "#575757",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{
        geocoder::Coordinates,
        markers::{MapMarker, MarkerKind},
    };

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_to_html_embeds_markers() {
        let map = TravelMap {
            title: "Cafe <Paris>".to_string(),
            center: Coordinates::new(48.85, 2.35),
            zoom: 12,
            geocoded: true,
            markers: vec![MapMarker {
                position: Coordinates::new(48.86, 2.34),
                kind: MarkerKind::Food,
                tooltip: "Crêpes".to_string(),
                popup_html: "<b>Crêpes</b>".to_string(),
                color: "orange",
                icon: "cutlery",
            }],
        };

        let html = map.to_html();
        assert!(html.contains("<title>Cafe &lt;Paris&gt;</title>"));
        assert!(html.contains("setView([48.85, 2.35], 12)"));
        assert!(html.contains("#f69730"));
        assert!(html.contains("<b>Crêpes<\\/b>"));
    }
}

//! Illustrative destination map with activity and food markers

pub mod geocoder;
pub mod html;
pub mod markers;

pub use geocoder::{Coordinates, Geocoder, NominatimGeocoder};
pub use html::escape_html;
pub use markers::{
    layout_markers, MapBuilder, MapMarker, MarkerKind, TravelMap, DEFAULT_CENTER, DEFAULT_ZOOM,
};

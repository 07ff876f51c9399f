//! Typed widget configuration for the external mapping/table front-end.
//!
//! These structs are validated at construction and serialized for the
//! renderer. They describe widgets, they do not render anything.

pub mod form;
pub mod map;

pub use form::{Button, DataTable, DatePicker, DrawMap, DrawOptions, SelectInput, TextInput};
pub use map::{
    Basemap, CircleStyle, EsriLayer, EsriMapConfig, EsriViewport, Extent, LayerSource, LegendEntry,
    MapConfig, MapControl, MapLayer, MapViewport,
};

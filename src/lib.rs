#![doc = "Road grade visualization and aggregation engine"]
mod aggregate;
mod config;
mod error;
mod grade;
mod model;
mod render;
mod schema;
mod selection;
mod view;

#[doc(inline)]
pub use aggregate::{aggregate, aggregate_with, AggregateTable, SubKeyNaming};

#[doc(inline)]
pub use config::ViewConfig;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use grade::{classify, Category, Rgb, LEGEND};

#[doc(inline)]
pub use model::{display_value, EvaluationBundle, Feature, FeatureCollection, FeatureId, SUB_TYPE_KEY};

#[doc(inline)]
pub use render::{
    AnnotationRequest, HoverState, MapSurface, MemorySurface, Popup, RenderOptions, RoadLayer,
    RoadLayerRenderer, RoadShape, ShapeId, Style,
};

#[doc(inline)]
pub use schema::{discover_dimensions, discover_sub_dimensions, selector_options, DiscoveryPolicy};

#[doc(inline)]
pub use selection::Selection;

#[doc(inline)]
pub use view::RoadView;

// Integration tests over a small road dataset:
//   loading, selector options, rendering per selection, hover/click, averages.

use std::path::Path;

use roadgrade::{
    aggregate, classify, Category, DiscoveryPolicy, FeatureCollection, MemorySurface, RoadView,
    ViewConfig, SUB_TYPE_KEY,
};
use serde_json::json;

fn load() -> FeatureCollection {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/roads.geojson");
    FeatureCollection::from_geojson_file(&path, "eemi_grade").unwrap()
}

fn categories(view: &RoadView<MemorySurface>) -> Vec<Category> {
    view.layer().unwrap().shapes().iter().map(|s| s.style.category).collect()
}

#[test]
fn two_roads_render_and_average() {
    let fc = FeatureCollection::from_geojson_value(&json!({"features": [
        {"properties": {"fid": 1, "eemi_grade": {"gw": 1.0}}},
        {"properties": {"fid": 2, "eemi_grade": {"gw": 4.0}}},
    ]}), "eemi_grade").unwrap();

    let view = RoadView::new(MemorySurface::new(), fc, ViewConfig::default());
    assert_eq!(categories(&view), [Category::Category1, Category::Category4]);
    assert_eq!(view.averages().get("gw"), Some(2.5));
}

#[test]
fn dataset_selector_options() {
    let view = RoadView::new(MemorySurface::new(), load(), ViewConfig::default());
    assert_eq!(view.dimension_options(), ["gw", "zw_tragf", SUB_TYPE_KEY]);
    assert!(view.sub_dimension_options().is_empty());
}

#[test]
fn dataset_renders_each_selection() {
    let mut view = RoadView::new(MemorySurface::new(), load(), ViewConfig::default());
    assert_eq!(categories(&view), [Category::Category1, Category::Category4, Category::Unknown]);

    view.set_dimension("zw_tragf");
    assert_eq!(categories(&view), [Category::Category2, Category::Unknown, Category::Unknown]);

    view.set_dimension(SUB_TYPE_KEY);
    assert_eq!(view.selection().sub_dimension(), Some("aufn"));
    assert_eq!(categories(&view), [Category::Category2, Category::Category5, Category::Unknown]);

    view.set_sub_dimension("risse");
    assert_eq!(categories(&view), [Category::Category4, Category::Category2, Category::Unknown]);

    view.set_dimension("gw");
    assert_eq!(view.selection().sub_dimension(), None);
    assert_eq!(view.surface().layers().len(), 1);
}

#[test]
fn dataset_averages() {
    let table = aggregate(&load());
    assert_eq!(table.get("gw"), Some(2.5));
    assert_eq!(table.get("zw_tragf"), Some(2.4));
    assert_eq!(table.get("aufn"), Some(3.0));
    assert_eq!(table.get("risse"), Some(3.0));
    assert_eq!(table.len(), 4);
}

#[test]
fn hover_popup_and_annotation() {
    let mut view = RoadView::new(MemorySurface::new(), load(), ViewConfig::default());
    let id = view.shape_id(1).unwrap();

    view.pointer_enter(id);
    let (_, popup) = view.surface().popup().unwrap();
    assert_eq!(
        popup.to_string(),
        "Road ID: 102\nGW: 4\nEVNK: 7630021\nENNK: 7630033\nLength: 1486.5m\n"
    );
    assert_eq!(view.click(id).unwrap().fid.as_str(), "102");

    view.pointer_leave(id);
    assert!(view.surface().popup().is_none());
}

#[test]
fn rebuild_is_idempotent() {
    let mut view = RoadView::new(MemorySurface::new(), load(), ViewConfig::default());
    let before = view.surface().to_geojson();
    view.set_dimension("gw");
    let after = view.surface().to_geojson();
    assert_eq!(before, after);
}

#[test]
fn union_policy_sees_later_dimensions() {
    let fc = FeatureCollection::from_geojson_value(&json!({"features": [
        {"properties": {"eemi_grade": {"gw": 1.0}}},
        {"properties": {"eemi_grade": {"gw": 2.0, "bw": 3.0}}},
    ]}), "eemi_grade").unwrap();

    let sampled = RoadView::new(MemorySurface::new(), fc.clone(), ViewConfig::default());
    assert_eq!(sampled.dimension_options(), ["gw"]);

    let config = ViewConfig { discovery: DiscoveryPolicy::UnionAll, ..ViewConfig::default() };
    let union = RoadView::new(MemorySurface::new(), fc, config);
    assert_eq!(union.dimension_options(), ["gw", "bw"]);
}

#[test]
fn classify_is_total() {
    for g in [-1.0, 0.0, 0.5, 1.5, 2.4999, 3.5, 4.5, 99.0, f64::NAN, f64::INFINITY] {
        assert_eq!(classify(Some(g)), classify(Some(g)));
    }
    assert_eq!(classify(None), Category::Unknown);
}

use dynamic_color::{
    Brightness, ColorRole, ColorValue, Dispatcher, MethodCall, MethodResponse, PaletteFamily,
    Payload, ResourceId, ResourceTable, Tone,
};
use serde_json::Value;

/// A platform where every known resource resolves to a distinct color
fn full_platform() -> ResourceTable {
    let mut table = ResourceTable::new();
    for (index, id) in ResourceId::all().into_iter().enumerate() {
        table.insert(id, ColorValue::from_argb(0xFF00_0000 | (index as u32 + 1)));
    }
    table
}

/// A platform that predates the fixed roles
fn platform_without_fixed_roles() -> ResourceTable {
    let mut table = full_platform();
    for id in ResourceId::fixed_roles() {
        table.remove(&id);
    }
    table
}

fn system_colors(dispatcher: &Dispatcher<ResourceTable>, call: MethodCall) -> Value {
    dispatcher
        .handle(&call)
        .result_json()
        .expect("getSystemColors is implemented")
}

fn color_of(table: &ResourceTable, name: &'static str) -> i64 {
    use dynamic_color::ResourceProvider;
    i64::from(table.color(&ResourceId::Named(name)).unwrap().to_signed())
}

#[test]
fn brightness_other_than_dark_behaves_like_light() {
    let dispatcher = Dispatcher::new(full_platform());
    let light = system_colors(
        &dispatcher,
        MethodCall::new("getSystemColors").with_argument("brightness", "light"),
    );

    let variants = [
        MethodCall::new("getSystemColors"),
        MethodCall::new("getSystemColors").with_argument("brightness", "Light"),
        MethodCall::new("getSystemColors").with_argument("brightness", "DARK"),
        MethodCall::new("getSystemColors").with_argument("brightness", ""),
        MethodCall::new("getSystemColors").with_argument("brightness", "sepia"),
        MethodCall::new("getSystemColors").with_argument("brightness", Value::Null),
    ];
    for call in variants {
        assert_eq!(system_colors(&dispatcher, call.clone()), light, "call={call:?}");
    }

    let dark = system_colors(
        &dispatcher,
        MethodCall::new("getSystemColors").with_argument("brightness", "dark"),
    );
    assert_ne!(dark, light);
}

#[test]
fn core_palette_has_65_entries_in_family_tone_order() {
    let platform = full_platform();
    let dispatcher = Dispatcher::new(platform);
    let response = dispatcher.handle(&MethodCall::new("getCorePalette"));

    let Some(Payload::CorePalette(palette)) = response.payload() else {
        panic!("expected a core palette, got {response:?}");
    };
    assert_eq!(palette.len(), 65);

    let expected: Vec<ColorValue> = ResourceId::palette()
        .iter()
        .map(|id| {
            use dynamic_color::ResourceProvider;
            dispatcher.platform().color(id).unwrap()
        })
        .collect();
    assert_eq!(palette.as_slice(), expected.as_slice());
    assert_eq!(
        palette.as_slice()[0],
        palette.get(PaletteFamily::Primary, Tone::T1000)
    );
    assert_eq!(
        palette.as_slice()[64],
        palette.get(PaletteFamily::NeutralVariant, Tone::T0)
    );

    let json = response.result_json().unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(65));
}

#[test]
fn system_colors_key_counts() {
    let full = Dispatcher::new(full_platform());
    let legacy = Dispatcher::new(platform_without_fixed_roles());

    for brightness in ["light", "dark"] {
        let call = MethodCall::new("getSystemColors").with_argument("brightness", brightness);

        let with_fixed = system_colors(&full, call.clone());
        assert_eq!(with_fixed.as_object().unwrap().len(), 49);

        let base_only = system_colors(&legacy, call);
        let keys = base_only.as_object().unwrap();
        assert_eq!(keys.len(), 37);
        assert!(!keys.contains_key("primaryFixed"));
        assert!(keys.contains_key("surfaceTint"));
    }
}

#[test]
fn partially_available_fixed_roles_are_omitted_as_a_group() {
    let mut platform = full_platform();
    platform.remove(&ResourceId::Named("system_secondary_fixed"));
    let dispatcher = Dispatcher::new(platform);

    let colors = dispatcher.system_colors(Brightness::Light).unwrap();
    assert_eq!(colors.len(), 37);
    assert!(colors.get(ColorRole::PrimaryFixed).is_none());
    assert!(colors.get(ColorRole::TertiaryFixedDim).is_none());
}

#[test]
fn unavailable_platform_answers_no_value() {
    let mut platform = full_platform();
    platform.set_available(false);
    let dispatcher = Dispatcher::new(platform);

    let calls = [
        MethodCall::new("getCorePalette"),
        MethodCall::new("getSystemColors"),
        MethodCall::new("getSystemColors").with_argument("brightness", "dark"),
        MethodCall::new("getCorePalette").with_argument("brightness", "dark"),
    ];
    for call in calls {
        let response = dispatcher.handle(&call);
        assert_eq!(response, MethodResponse::Success(None), "call={call:?}");
        assert_eq!(response.result_json(), Some(Value::Null));
    }
}

#[test]
fn shadow_and_scrim_match_in_both_modes() {
    let dispatcher = Dispatcher::new(full_platform());
    for brightness in [Brightness::Light, Brightness::Dark] {
        let colors = dispatcher.system_colors(brightness).unwrap();
        assert_eq!(colors.get(ColorRole::Shadow), colors.get(ColorRole::Scrim));
        assert!(colors.get(ColorRole::Shadow).is_some());
    }
}

#[test]
fn inverse_surface_crosses_brightness() {
    let dispatcher = Dispatcher::new(full_platform());
    let light = dispatcher.system_colors(Brightness::Light).unwrap();
    let dark = dispatcher.system_colors(Brightness::Dark).unwrap();

    assert_eq!(
        light.get(ColorRole::InverseSurface),
        dark.get(ColorRole::Surface)
    );
    assert_eq!(
        dark.get(ColorRole::InverseSurface),
        light.get(ColorRole::Surface)
    );
    assert_eq!(
        light.get(ColorRole::OnInverseSurface),
        dark.get(ColorRole::OnSurface)
    );
}

#[test]
fn dark_scenario_maps_primary_and_inverse_primary() {
    let platform = full_platform();
    let dark_primary = color_of(&platform, "system_primary_dark");
    let light_primary = color_of(&platform, "system_primary_light");
    let dispatcher = Dispatcher::new(platform);

    let result = system_colors(
        &dispatcher,
        MethodCall::new("getSystemColors").with_argument("brightness", "dark"),
    );
    let map = result.as_object().unwrap();

    assert!(map.len() == 37 || map.len() == 49);
    assert_eq!(map["primary"].as_i64(), Some(dark_primary));
    assert_eq!(map["inversePrimary"].as_i64(), Some(light_primary));
    assert_eq!(map["surfaceTint"].as_i64(), Some(dark_primary));
}

#[test]
fn unknown_method_is_not_implemented_rather_than_no_value() {
    for platform in [full_platform(), ResourceTable::unavailable()] {
        let dispatcher = Dispatcher::new(platform);
        let response = dispatcher.handle(&MethodCall::new("unknownMethod"));
        assert_eq!(response, MethodResponse::NotImplemented);
        assert_ne!(response, MethodResponse::Success(None));
    }
}

#[test]
fn missing_base_role_answers_no_value() {
    let mut platform = full_platform();
    platform.remove(&ResourceId::Named("system_surface_dim_dark"));
    let dispatcher = Dispatcher::new(platform);

    assert!(dispatcher.system_colors(Brightness::Dark).is_none());
    assert!(dispatcher.system_colors(Brightness::Light).is_some());
    assert!(dispatcher.core_palette().is_some());
}

#[test]
fn table_loaded_from_toml_drives_dispatch() {
    let mut toml = String::from("available = true\n\n[colors]\n");
    for (index, id) in ResourceId::all().into_iter().enumerate() {
        toml.push_str(&format!("{} = {}\n", id, 0xFF00_0000u32 + index as u32));
    }
    let table = ResourceTable::from_toml_str(&toml).unwrap();
    assert!(table.missing().is_empty());

    let dispatcher = Dispatcher::new(table);
    let colors = dispatcher.system_colors(Brightness::Dark).unwrap();
    assert!(colors.has_fixed_roles());
}

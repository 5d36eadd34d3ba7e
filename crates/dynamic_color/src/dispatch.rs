//! Method-call dispatch
//!
//! The host application asks for colors by method name over a single
//! request/response round trip. Every call is answered with one of:
//!
//! - a payload (core palette or system colors),
//! - "no value" when dynamic color is unsupported or the platform could
//!   not supply a complete result,
//! - "not implemented" for any method this channel does not know.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::palette::CorePalette;
use crate::provider::{AvailabilityCheck, DynamicColorScope, ResourceProvider};
use crate::roles::Brightness;
use crate::system::SystemColors;

/// Channel the host registers this handler on
pub const CHANNEL_NAME: &str = "io.material.plugins/dynamic_color";

/// Methods served on [`CHANNEL_NAME`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Method {
    GetCorePalette,
    GetSystemColors,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::GetCorePalette, Method::GetSystemColors];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "getCorePalette" => Some(Method::GetCorePalette),
            "getSystemColors" => Some(Method::GetSystemColors),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Method::GetCorePalette => "getCorePalette",
            Method::GetSystemColors => "getSystemColors",
        }
    }
}

/// An incoming method call: a name plus a map of named arguments
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Map::new(),
        }
    }

    pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// A string argument; `None` when absent or not a string
    pub fn argument_str(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(Value::as_str)
    }

    /// Parse `{"method": "...", "arguments": {...}}`
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Successful result data
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    CorePalette(CorePalette),
    SystemColors(SystemColors),
}

/// Outcome of one method call
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "camelCase")]
pub enum MethodResponse {
    /// The call was handled; `None` is the "no value" answer
    Success(Option<Payload>),
    /// The method is not served by this channel
    NotImplemented,
}

impl MethodResponse {
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, MethodResponse::NotImplemented)
    }

    pub fn payload(&self) -> Option<&Payload> {
        match self {
            MethodResponse::Success(payload) => payload.as_ref(),
            MethodResponse::NotImplemented => None,
        }
    }

    /// The result value as the host sees it; `None` for not implemented
    pub fn result_json(&self) -> Option<Value> {
        match self {
            MethodResponse::Success(None) => Some(Value::Null),
            MethodResponse::Success(Some(payload)) => serde_json::to_value(payload).ok(),
            MethodResponse::NotImplemented => None,
        }
    }
}

/// Routes method calls to the palette and system color assemblers
#[derive(Debug)]
pub struct Dispatcher<P> {
    platform: P,
}

impl<P> Dispatcher<P>
where
    P: ResourceProvider + AvailabilityCheck,
{
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Handle one call
    pub fn handle(&self, call: &MethodCall) -> MethodResponse {
        let Some(method) = Method::from_name(&call.method) else {
            tracing::debug!("method not implemented: {}", call.method);
            return MethodResponse::NotImplemented;
        };

        tracing::debug!("handling {}", method.name());
        let payload = match method {
            Method::GetCorePalette => self.core_palette().map(Payload::CorePalette),
            Method::GetSystemColors => {
                let brightness = Brightness::from_argument(call.argument_str("brightness"));
                self.system_colors(brightness).map(Payload::SystemColors)
            }
        };
        MethodResponse::Success(payload)
    }

    /// `getCorePalette`: the 65-entry palette, or `None`
    pub fn core_palette(&self) -> Option<CorePalette> {
        let scope = DynamicColorScope::check(&self.platform)?;
        match scope.core_palette() {
            Ok(palette) => Some(palette),
            Err(err) => {
                tracing::warn!("core palette unavailable despite dynamic color support: {}", err);
                None
            }
        }
    }

    /// `getSystemColors`: the role mapping for `brightness`, or `None`
    pub fn system_colors(&self, brightness: Brightness) -> Option<SystemColors> {
        DynamicColorScope::check(&self.platform)?.system_colors(brightness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorValue;
    use crate::resource::ResourceId;
    use crate::table::ResourceTable;
    use serde_json::json;

    fn full_table() -> ResourceTable {
        let mut table = ResourceTable::new();
        for (index, id) in ResourceId::all().into_iter().enumerate() {
            table.insert(id, ColorValue::from_argb(0xFF00_0000 | index as u32));
        }
        table
    }

    #[test]
    fn test_method_names_round_trip() {
        for method in Method::ALL {
            assert_eq!(Method::from_name(method.name()), Some(method));
        }
        assert_eq!(Method::from_name("GetCorePalette"), None);
    }

    #[test]
    fn test_unknown_method_is_not_implemented() {
        let dispatcher = Dispatcher::new(full_table());
        let response = dispatcher.handle(&MethodCall::new("unknownMethod"));
        assert!(response.is_not_implemented());
        assert_eq!(response.result_json(), None);
    }

    #[test]
    fn test_non_string_brightness_counts_as_light() {
        let dispatcher = Dispatcher::new(full_table());
        let light = dispatcher.handle(&MethodCall::new("getSystemColors"));
        let numeric = dispatcher
            .handle(&MethodCall::new("getSystemColors").with_argument("brightness", 1));
        assert_eq!(light, numeric);
    }

    #[test]
    fn test_response_envelope() {
        let dispatcher = Dispatcher::new(ResourceTable::unavailable());

        let none = dispatcher.handle(&MethodCall::new("getCorePalette"));
        assert_eq!(
            serde_json::to_value(&none).unwrap(),
            json!({ "status": "success", "result": null })
        );

        let missing = dispatcher.handle(&MethodCall::new("getThemeColors"));
        assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            json!({ "status": "notImplemented" })
        );
    }

    #[test]
    fn test_call_from_json() {
        let call =
            MethodCall::from_json(r#"{"method":"getSystemColors","arguments":{"brightness":"dark"}}"#)
                .unwrap();
        assert_eq!(call.method, "getSystemColors");
        assert_eq!(call.argument_str("brightness"), Some("dark"));

        let bare = MethodCall::from_json(r#"{"method":"getCorePalette"}"#).unwrap();
        assert!(bare.arguments.is_empty());
    }

    #[test]
    fn test_palette_failure_answers_no_value() {
        let mut table = full_table();
        table.remove(&ResourceId::palette()[40]);
        let dispatcher = Dispatcher::new(table);

        let response = dispatcher.handle(&MethodCall::new("getCorePalette"));
        assert_eq!(response, MethodResponse::Success(None));
        assert_eq!(response.result_json(), Some(Value::Null));
    }
}

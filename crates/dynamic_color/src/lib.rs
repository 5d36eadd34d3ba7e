//! Dynamic Color
//!
//! Exposes the host platform's dynamic color palette to an application
//! layer through a method-call dispatcher.
//!
//! # Overview
//!
//! - **Core palette**: five tonal ramps (primary, secondary, tertiary,
//!   neutral, neutral variant) of 13 tones each, flattened to 65 colors
//! - **System colors**: semantic roles (`primary`, `onSurface`, ...) for a
//!   light or dark brightness, with the optional "fixed" roles merged in
//!   when the platform has them
//! - **Dispatcher**: answers `getCorePalette` / `getSystemColors` calls
//!
//! The platform is abstracted behind two traits: [`ResourceProvider`]
//! resolves a [`ResourceId`] to a [`ColorValue`], and [`AvailabilityCheck`]
//! reports whether dynamic color is supported. [`ResourceTable`] implements
//! both in memory for desktop use and tests.
//!
//! # Quick Start
//!
//! ```rust
//! use dynamic_color::{Dispatcher, MethodCall, ResourceTable};
//!
//! let dispatcher = Dispatcher::new(ResourceTable::unavailable());
//! let response = dispatcher.handle(
//!     &MethodCall::new("getSystemColors").with_argument("brightness", "dark"),
//! );
//!
//! // No dynamic color on this platform: the call succeeds with no value
//! assert_eq!(response.result_json(), Some(serde_json::Value::Null));
//! ```

pub mod color;
pub mod dispatch;
pub mod error;
pub mod palette;
pub mod provider;
pub mod resource;
pub mod roles;
pub mod system;
pub mod table;

// Re-export commonly used types
pub use color::ColorValue;
pub use dispatch::{Dispatcher, Method, MethodCall, MethodResponse, Payload, CHANNEL_NAME};
pub use error::{DynamicColorError, Result};
pub use palette::{CorePalette, PaletteFamily, Tone};
pub use provider::{AvailabilityCheck, DynamicColorScope, ResourceProvider};
pub use resource::ResourceId;
pub use roles::{Brightness, ColorRole, DARK_ROLES, FIXED_ROLES, LIGHT_ROLES};
pub use system::SystemColors;
pub use table::ResourceTable;

//! Dynamic Color Android Platform
//!
//! JNI-backed resource provider and availability check for the
//! `dynamic_color` dispatcher.
//!
//! ```ignore
//! let dispatcher = dynamic_color_android::dispatcher(&mut env, &context)?;
//! let response = dispatcher.handle(&MethodCall::new("getCorePalette"));
//! ```

pub mod resources;

pub use resources::{AndroidColorResources, MIN_DYNAMIC_COLOR_SDK};

#[cfg(target_os = "android")]
use dynamic_color::Dispatcher;

/// Logcat tag for this crate's log output
pub const LOG_TAG: &str = "DynamicColor";

/// Route `log`/`tracing` output to logcat
#[cfg(target_os = "android")]
pub fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag(LOG_TAG),
    );
}

/// No-op outside Android; the host installs its own subscriber
#[cfg(not(target_os = "android"))]
pub fn init_logging() {}

/// Build a dispatcher over the given application `Context`
#[cfg(target_os = "android")]
pub fn dispatcher(
    env: &mut jni::JNIEnv<'_>,
    context: &jni::objects::JObject<'_>,
) -> dynamic_color::Result<Dispatcher<AndroidColorResources>> {
    init_logging();
    let resources = AndroidColorResources::new(env, context)?;
    tracing::debug!("dynamic color dispatcher ready on {}", dynamic_color::CHANNEL_NAME);
    Ok(Dispatcher::new(resources))
}

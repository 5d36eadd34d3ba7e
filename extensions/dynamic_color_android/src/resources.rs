//! Android color resources via JNI
//!
//! Colors are read from the `android.R.color` fields through
//! `Resources.getColor(int, Theme)`. Availability is answered by Material's
//! `DynamicColors.isDynamicColorAvailable()` when the app bundles it, and by
//! `Build.VERSION.SDK_INT >= 31` otherwise.

use dynamic_color::{
    AvailabilityCheck, ColorValue, DynamicColorError, ResourceId, ResourceProvider, Result,
};

#[cfg(target_os = "android")]
use jni::objects::{GlobalRef, JClass, JObject, JValue};

#[cfg(target_os = "android")]
use jni::{JNIEnv, JavaVM};

/// First API level with system dynamic color resources (Android 12)
pub const MIN_DYNAMIC_COLOR_SDK: i32 = 31;

#[cfg(target_os = "android")]
const DYNAMIC_COLORS_CLASS: &str = "com.google.android.material.color.DynamicColors";

/// Color resource provider backed by an Android `Context`
pub struct AndroidColorResources {
    #[cfg(target_os = "android")]
    vm: JavaVM,
    #[cfg(target_os = "android")]
    context: GlobalRef,
}

/// Clear any pending Java exception so the env stays usable
#[cfg(target_os = "android")]
fn clear_exception(env: &mut JNIEnv<'_>, err: &jni::errors::Error) {
    let pending = env.exception_check().unwrap_or(false);
    if pending || matches!(err, jni::errors::Error::JavaException) {
        let _ = env.exception_clear();
    }
}

#[cfg(target_os = "android")]
impl AndroidColorResources {
    /// Wrap an application `Context`
    pub fn new(env: &mut JNIEnv<'_>, context: &JObject<'_>) -> Result<Self> {
        let vm = env
            .get_java_vm()
            .map_err(|e| DynamicColorError::Platform(format!("Failed to get JavaVM: {}", e)))?;
        let context = env
            .new_global_ref(context)
            .map_err(|e| DynamicColorError::Platform(format!("Invalid context: {}", e)))?;
        Ok(Self { vm, context })
    }

    /// Run `f` on an attached env inside a fresh local reference frame
    ///
    /// The calling thread stays attached after the first lookup, so a
    /// request resolving a whole role table pays for one attach.
    fn with_env<T>(
        &self,
        f: impl FnOnce(&mut JNIEnv<'_>) -> jni::errors::Result<T>,
    ) -> std::result::Result<T, JniFailure> {
        let mut env = self
            .vm
            .attach_current_thread_permanently()
            .map_err(|e| JniFailure::Attach(e.to_string()))?;
        env.with_local_frame(16, |env| {
            f(env).map_err(|err| {
                clear_exception(env, &err);
                err
            })
        })
        .map_err(JniFailure::Call)
    }

    fn lookup_color(
        env: &mut JNIEnv<'_>,
        context: &JObject<'_>,
        name: &str,
    ) -> jni::errors::Result<i32> {
        let id = env.get_static_field("android/R$color", name, "I")?.i()?;
        let resources = env
            .call_method(context, "getResources", "()Landroid/content/res/Resources;", &[])?
            .l()?;
        let theme = JObject::null();
        env.call_method(
            &resources,
            "getColor",
            "(ILandroid/content/res/Resources$Theme;)I",
            &[JValue::Int(id), JValue::Object(&theme)],
        )?
        .i()
    }

    fn sdk_int(env: &mut JNIEnv<'_>) -> jni::errors::Result<i32> {
        env.get_static_field("android/os/Build$VERSION", "SDK_INT", "I")?.i()
    }

    /// Ask Material's `DynamicColors` through the app class loader, since
    /// attached native threads cannot see app classes via `FindClass`
    fn material_available(
        env: &mut JNIEnv<'_>,
        context: &JObject<'_>,
    ) -> jni::errors::Result<bool> {
        let loader = env
            .call_method(context, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])?
            .l()?;
        let class_name = env.new_string(DYNAMIC_COLORS_CLASS)?;
        let class = env
            .call_method(
                &loader,
                "loadClass",
                "(Ljava/lang/String;)Ljava/lang/Class;",
                &[JValue::Object(&class_name)],
            )?
            .l()?;
        let class = JClass::from(class);
        env.call_static_method(&class, "isDynamicColorAvailable", "()Z", &[])?
            .z()
    }

    /// Current platform API level
    pub fn sdk_version(&self) -> Result<i32> {
        self.with_env(Self::sdk_int)
            .map_err(|e| DynamicColorError::Platform(e.to_string()))
    }
}

#[cfg(target_os = "android")]
#[derive(Debug)]
enum JniFailure {
    Attach(String),
    Call(jni::errors::Error),
}

#[cfg(target_os = "android")]
impl std::fmt::Display for JniFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JniFailure::Attach(msg) => write!(f, "JVM attach failed: {}", msg),
            JniFailure::Call(err) => write!(f, "JNI error: {}", err),
        }
    }
}

#[cfg(target_os = "android")]
impl ResourceProvider for AndroidColorResources {
    fn color(&self, id: &ResourceId) -> Result<ColorValue> {
        let name = id.name();
        let context = self.context.as_obj();
        match self.with_env(|env| Self::lookup_color(env, context, &name)) {
            Ok(color) => Ok(ColorValue::from_signed(color)),
            Err(JniFailure::Attach(msg)) => Err(DynamicColorError::Platform(msg)),
            Err(JniFailure::Call(err)) => {
                tracing::trace!("color resource {} not resolved: {}", name, err);
                Err(DynamicColorError::ResourceUnavailable(name.into_owned()))
            }
        }
    }
}

#[cfg(target_os = "android")]
impl AvailabilityCheck for AndroidColorResources {
    fn is_dynamic_color_available(&self) -> bool {
        let context = self.context.as_obj();
        match self.with_env(|env| Self::material_available(env, context)) {
            Ok(available) => return available,
            Err(err) => {
                tracing::debug!("Material DynamicColors not usable ({}), using SDK level", err)
            }
        }

        match self.sdk_version() {
            Ok(sdk) => sdk >= MIN_DYNAMIC_COLOR_SDK,
            Err(err) => {
                tracing::warn!("Failed to read SDK level: {}", err);
                false
            }
        }
    }
}

// Stub implementation for non-Android builds (for cross-compilation checks)
#[cfg(not(target_os = "android"))]
impl AndroidColorResources {
    /// Create a placeholder provider (reports dynamic color unavailable)
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(not(target_os = "android"))]
impl Default for AndroidColorResources {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "android"))]
impl ResourceProvider for AndroidColorResources {
    fn color(&self, id: &ResourceId) -> Result<ColorValue> {
        Err(DynamicColorError::Platform(format!(
            "Android color resource {} only available on Android",
            id
        )))
    }
}

#[cfg(not(target_os = "android"))]
impl AvailabilityCheck for AndroidColorResources {
    fn is_dynamic_color_available(&self) -> bool {
        false
    }
}

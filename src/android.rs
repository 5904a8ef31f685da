//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::render_request_json;

/// Render a JSON placement request to SVG.
///
/// Called from Kotlin as:
///   external fun renderRequest(request: String): String?
#[no_mangle]
pub extern "system" fn Java_com_stafflib_app_StaffLib_renderRequest(
    mut env: JNIEnv,
    _class: JClass,
    request: JString,
) -> jstring {
    let json: String = match env.get_string(&request) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match render_request_json(&json) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::debug!("renderRequest failed: {e}");
            std::ptr::null_mut()
        }
    }
}
